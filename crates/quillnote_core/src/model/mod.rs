//! Domain model for user notes.
//!
//! # Responsibility
//! - Define the canonical note record and its fixed color palette.
//! - Enforce the non-blank title/content invariant before persistence.
//!
//! # Invariants
//! - `NoteId` values are assigned by the store and never reused.
//! - A note must pass `Note::validate()` before any write path persists it.

pub mod note;
pub mod order;
