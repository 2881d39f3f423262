//! Note use-case service.
//!
//! # Responsibility
//! - Provide the save/get/list/delete APIs the state holders run on.
//! - Enforce the blank-field validation rule before persistence.
//!
//! # Invariants
//! - `save_note` never persists a note that fails `Note::validate()`.
//! - `delete_note` returns the removed note so callers can buffer it for
//!   single-level undo.

use crate::model::note::{Note, NoteId, NoteValidationError};
use crate::model::order::{sort_notes, NoteOrder};
use crate::repo::note_repo::{NoteRepository, StoreError, StoreResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// The note failed blank-field validation; carries the user-facing
    /// message via `Display`.
    Invalid(NoteValidationError),
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Store(StoreError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent note state: {details}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Validation(err) => Self::Invalid(err),
            StoreError::NotFound(id) => Self::NoteNotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and persists a note, returning the stored row.
    ///
    /// A note carrying an id replaces the stored note under that id;
    /// a note without one is inserted and assigned a fresh id.
    pub fn save_note(&self, note: &Note) -> Result<Note, ServiceError> {
        note.validate().map_err(ServiceError::Invalid)?;

        let id = self.repo.insert_note(note)?;
        info!("event=note_save module=service status=ok id={id}");
        self.repo
            .get_note(id)?
            .ok_or(ServiceError::InconsistentState(
                "saved note not found in read-back",
            ))
    }

    /// Gets one note by stable id.
    pub fn get_note(&self, id: NoteId) -> StoreResult<Option<Note>> {
        self.repo.get_note(id)
    }

    /// Lists all notes sorted by the selected order.
    pub fn list_notes(&self, order: NoteOrder) -> Result<Vec<Note>, ServiceError> {
        let mut notes = self.repo.list_notes()?;
        sort_notes(&mut notes, order);
        Ok(notes)
    }

    /// Removes one note and returns the removed copy.
    pub fn delete_note(&self, id: NoteId) -> Result<Note, ServiceError> {
        let note = self
            .repo
            .get_note(id)?
            .ok_or(ServiceError::NoteNotFound(id))?;
        self.repo.delete_note(id)?;
        info!("event=note_delete module=service status=ok id={id}");
        Ok(note)
    }
}
