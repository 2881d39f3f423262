//! Sort order for the note collection.
//!
//! # Responsibility
//! - Define the user-selectable sort criteria and direction.
//! - Provide the in-memory comparator applied above the repository.
//!
//! # Invariants
//! - Sorting is stable: equal keys keep their incoming relative order.
//! - Title comparison is case-insensitive.

use crate::model::note::Note;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Direction applied to a sort criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// User-selectable ordering of the note collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteOrder {
    /// Case-insensitive lexicographic order on the title.
    Title(SortDirection),
    /// Numeric order on the save timestamp.
    Date(SortDirection),
    /// Numeric order on the palette ARGB value.
    Color(SortDirection),
}

impl Default for NoteOrder {
    /// Newest first, matching the initial listing.
    fn default() -> Self {
        Self::Date(SortDirection::Descending)
    }
}

impl NoteOrder {
    pub fn direction(self) -> SortDirection {
        match self {
            Self::Title(direction) | Self::Date(direction) | Self::Color(direction) => direction,
        }
    }
}

/// Sorts notes in place according to the selected order.
pub fn sort_notes(notes: &mut [Note], order: NoteOrder) {
    let compare = |a: &Note, b: &Note| -> Ordering {
        match order {
            NoteOrder::Title(_) => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            NoteOrder::Date(_) => a.created_at.cmp(&b.created_at),
            NoteOrder::Color(_) => a.color.argb().cmp(&b.color.argb()),
        }
    };

    match order.direction() {
        SortDirection::Ascending => notes.sort_by(compare),
        SortDirection::Descending => notes.sort_by(|a, b| compare(b, a)),
    }
}
