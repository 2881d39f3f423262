//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record shared by repository, service and
//!   state-holder layers.
//! - Own the blank-field validation rule applied before persistence.
//!
//! # Invariants
//! - `id` is `None` until the store assigns an identifier on first insert.
//! - `title` and `content` must be non-blank when a note is persisted.
//! - `created_at` is epoch milliseconds, stamped when the note is saved.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Stable identifier assigned by the store on first persistence.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// Fixed background palette for notes.
///
/// The variant order matches the palette presented in the editor; the ARGB
/// values are the ones the palette renders, so presentation layers need no
/// mapping table of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteColor {
    RedOrange,
    RedPink,
    BabyBlue,
    Violet,
    LightGreen,
}

impl NoteColor {
    /// All palette entries, in presentation order.
    pub const PALETTE: [NoteColor; 5] = [
        NoteColor::RedOrange,
        NoteColor::RedPink,
        NoteColor::BabyBlue,
        NoteColor::Violet,
        NoteColor::LightGreen,
    ];

    /// ARGB value rendered for this palette entry.
    pub fn argb(self) -> u32 {
        match self {
            Self::RedOrange => 0xFFFF_AB91,
            Self::RedPink => 0xFFF4_8FB1,
            Self::BabyBlue => 0xFF81_DEEA,
            Self::Violet => 0xFFCF_94DA,
            Self::LightGreen => 0xFFE7_ED9B,
        }
    }
}

impl Default for NoteColor {
    fn default() -> Self {
        Self::RedOrange
    }
}

/// Validation failure for a note about to be persisted.
///
/// The `Display` text is the transient message surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    BlankTitle,
    BlankContent,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "note title must not be blank"),
            Self::BlankContent => write!(f, "note content must not be blank"),
        }
    }
}

impl Error for NoteValidationError {}

/// A user-authored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned identifier; `None` until first persisted.
    pub id: Option<NoteId>,
    pub title: String,
    pub content: String,
    /// Save timestamp in epoch milliseconds.
    pub created_at: i64,
    pub color: NoteColor,
}

impl Note {
    /// Creates an unsaved note stamped with the current time.
    pub fn new(title: impl Into<String>, content: impl Into<String>, color: NoteColor) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            created_at: now_epoch_ms(),
            color,
        }
    }

    /// Checks the non-blank invariant required before persistence.
    ///
    /// Whitespace-only text counts as blank. Title is checked first, so a
    /// note failing both rules reports the title.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.title.trim().is_empty() {
            return Err(NoteValidationError::BlankTitle);
        }
        if self.content.trim().is_empty() {
            return Err(NoteValidationError::BlankContent);
        }
        Ok(())
    }

    /// Plain-text payload handed to the platform share sheet.
    ///
    /// The original export action sends the note body only.
    pub fn share_text(&self) -> &str {
        &self.content
    }
}

/// Current wall-clock time in epoch milliseconds.
///
/// Clamps to zero if the clock reads before the epoch rather than failing a
/// save over an absurd system clock.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{now_epoch_ms, Note, NoteColor, NoteValidationError};

    #[test]
    fn new_note_has_no_id_and_recent_timestamp() {
        let before = now_epoch_ms();
        let note = Note::new("groceries", "milk, eggs", NoteColor::BabyBlue);
        assert_eq!(note.id, None);
        assert!(note.created_at >= before);
    }

    #[test]
    fn validate_rejects_blank_title() {
        let note = Note::new("   ", "body", NoteColor::default());
        assert_eq!(note.validate(), Err(NoteValidationError::BlankTitle));
    }

    #[test]
    fn validate_rejects_blank_content() {
        let note = Note::new("title", "\n\t ", NoteColor::default());
        assert_eq!(note.validate(), Err(NoteValidationError::BlankContent));
    }

    #[test]
    fn validate_reports_title_before_content() {
        let note = Note::new("", "", NoteColor::default());
        assert_eq!(note.validate(), Err(NoteValidationError::BlankTitle));
    }

    #[test]
    fn share_text_is_the_note_body() {
        let note = Note::new("title", "body text", NoteColor::Violet);
        assert_eq!(note.share_text(), "body text");
    }

    #[test]
    fn colors_serialize_as_snake_case_tokens() {
        let token = serde_json::to_string(&NoteColor::RedOrange).unwrap();
        assert_eq!(token, "\"red_orange\"");
    }

    #[test]
    fn palette_argb_values_are_distinct() {
        let mut values: Vec<u32> = NoteColor::PALETTE.iter().map(|c| c.argb()).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), NoteColor::PALETTE.len());
    }
}
