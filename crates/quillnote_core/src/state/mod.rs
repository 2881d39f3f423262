//! View-state holders driven by UI events.
//!
//! # Responsibility
//! - Hold the state each screen renders from and apply its events.
//! - Keep screens decoupled from repository and SQL details.
//!
//! # Invariants
//! - State mutations happen only through `on_event`.
//! - Presentation-only events never touch the persisted collection.

pub mod editor;
pub mod notes;
