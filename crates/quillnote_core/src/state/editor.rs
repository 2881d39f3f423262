//! Add/edit screen state holder.
//!
//! # Responsibility
//! - Hold the note draft (title, content, color) the editor renders.
//! - Run the validation use-case on save and surface its outcome.
//!
//! # Invariants
//! - Saving re-stamps the note timestamp; re-saving an existing id mutates
//!   that note in place.
//! - Validation failures never leave the editor; they surface as a
//!   transient message in `EditorOutcome::Invalid`.

use crate::model::note::{Note, NoteColor, NoteId};
use crate::repo::note_repo::NoteRepository;
use crate::service::note_service::{NoteService, ServiceError};

/// Events the editor screen emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    EnteredTitle(String),
    EnteredContent(String),
    ChangedColor(NoteColor),
    Save,
}

/// Result of applying one editor event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    /// Draft updated; keep editing.
    Editing,
    /// The note was persisted; the screen should navigate back.
    Saved(Note),
    /// Validation rejected the draft; show the transient message.
    Invalid(String),
}

/// State holder for the add/edit screen.
pub struct NoteEditor<R: NoteRepository> {
    service: NoteService<R>,
    id: Option<NoteId>,
    title: String,
    content: String,
    color: NoteColor,
}

impl<R: NoteRepository> NoteEditor<R> {
    /// Opens the editor on a blank draft with the given background color.
    pub fn new(service: NoteService<R>, color: NoteColor) -> Self {
        Self {
            service,
            id: None,
            title: String::new(),
            content: String::new(),
            color,
        }
    }

    /// Opens the editor on an existing note loaded by id.
    pub fn open(service: NoteService<R>, id: NoteId) -> Result<Self, ServiceError> {
        let note = service.get_note(id)?.ok_or(ServiceError::NoteNotFound(id))?;
        Ok(Self {
            service,
            id: note.id,
            title: note.title,
            content: note.content,
            color: note.color,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn color(&self) -> NoteColor {
        self.color
    }

    /// Identifier of the note being edited, once persisted.
    pub fn note_id(&self) -> Option<NoteId> {
        self.id
    }

    /// Applies one editor event to the draft.
    ///
    /// Field events update the draft and report `Editing`. `Save` runs the
    /// validation use-case: an invalid draft reports `Invalid` with the
    /// user-facing message, a valid one persists and reports `Saved`.
    pub fn on_event(&mut self, event: EditorEvent) -> Result<EditorOutcome, ServiceError> {
        match event {
            EditorEvent::EnteredTitle(title) => {
                self.title = title;
                Ok(EditorOutcome::Editing)
            }
            EditorEvent::EnteredContent(content) => {
                self.content = content;
                Ok(EditorOutcome::Editing)
            }
            EditorEvent::ChangedColor(color) => {
                self.color = color;
                Ok(EditorOutcome::Editing)
            }
            EditorEvent::Save => self.save(),
        }
    }

    fn save(&mut self) -> Result<EditorOutcome, ServiceError> {
        let mut note = Note::new(self.title.clone(), self.content.clone(), self.color);
        note.id = self.id;

        match self.service.save_note(&note) {
            Ok(saved) => {
                self.id = saved.id;
                Ok(EditorOutcome::Saved(saved))
            }
            Err(ServiceError::Invalid(err)) => Ok(EditorOutcome::Invalid(err.to_string())),
            Err(other) => Err(other),
        }
    }
}
