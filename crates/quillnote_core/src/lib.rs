//! Core domain logic for Quillnote.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod state;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteColor, NoteId, NoteValidationError};
pub use model::order::{sort_notes, NoteOrder, SortDirection};
pub use repo::note_repo::{NoteRepository, SqliteNoteRepository, StoreError, StoreResult};
pub use service::note_service::{NoteService, ServiceError};
pub use service::preview::{derive_preview, NotePreview};
pub use state::editor::{EditorEvent, EditorOutcome, NoteEditor};
pub use state::notes::{NotesEvent, NotesScreen, NotesState, ViewMode};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
