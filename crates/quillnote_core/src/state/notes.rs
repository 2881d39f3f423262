//! Note list screen state holder.
//!
//! # Responsibility
//! - Hold the rendered collection, sort order and presentation mode.
//! - Apply list-screen events: re-order, delete, restore, view toggles.
//!
//! # Invariants
//! - `state.notes` always reflects the store sorted by `state.order`.
//! - The undo buffer holds at most the single most recently deleted note.

use crate::model::note::{Note, NoteId};
use crate::model::order::NoteOrder;
use crate::repo::note_repo::NoteRepository;
use crate::service::note_service::{NoteService, ServiceError};
use serde::{Deserialize, Serialize};

/// Presentation mode of the note collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    List,
    Grid,
}

/// Renderable state of the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesState {
    pub notes: Vec<Note>,
    pub order: NoteOrder,
    pub order_section_visible: bool,
    pub view_mode: ViewMode,
}

impl Default for NotesState {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            order: NoteOrder::default(),
            order_section_visible: false,
            view_mode: ViewMode::List,
        }
    }
}

/// Events the list screen emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesEvent {
    /// Select a new sort order for the collection.
    Order(NoteOrder),
    /// Delete one note, parking a copy in the undo buffer.
    Delete(NoteId),
    /// Re-insert the most recently deleted note.
    Restore,
    /// Show or hide the sort-order chooser.
    ToggleOrderSection,
    /// Switch between list and grid presentation.
    SwitchView(ViewMode),
}

/// State holder for the note list screen.
pub struct NotesScreen<R: NoteRepository> {
    service: NoteService<R>,
    state: NotesState,
    last_deleted: Option<Note>,
}

impl<R: NoteRepository> NotesScreen<R> {
    /// Creates the screen state holder and loads the initial collection.
    pub fn new(service: NoteService<R>) -> Result<Self, ServiceError> {
        let mut screen = Self {
            service,
            state: NotesState::default(),
            last_deleted: None,
        };
        screen.reload()?;
        Ok(screen)
    }

    /// Current renderable state.
    pub fn state(&self) -> &NotesState {
        &self.state
    }

    /// Whether a deleted note is available for restore.
    pub fn can_restore(&self) -> bool {
        self.last_deleted.is_some()
    }

    /// Applies one screen event and refreshes the rendered state.
    pub fn on_event(&mut self, event: NotesEvent) -> Result<(), ServiceError> {
        match event {
            NotesEvent::Order(order) => {
                // Re-selecting the active order is a no-op.
                if self.state.order == order {
                    return Ok(());
                }
                self.state.order = order;
                self.reload()
            }
            NotesEvent::Delete(id) => {
                let removed = self.service.delete_note(id)?;
                self.last_deleted = Some(removed);
                self.reload()
            }
            NotesEvent::Restore => {
                let Some(note) = self.last_deleted.take() else {
                    return Ok(());
                };
                self.service.save_note(&note)?;
                self.reload()
            }
            NotesEvent::ToggleOrderSection => {
                self.state.order_section_visible = !self.state.order_section_visible;
                Ok(())
            }
            NotesEvent::SwitchView(mode) => {
                self.state.view_mode = mode;
                Ok(())
            }
        }
    }

    /// Reloads the collection from the store using the active order.
    pub fn reload(&mut self) -> Result<(), ServiceError> {
        self.state.notes = self.service.list_notes(self.state.order)?;
        Ok(())
    }
}
