//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep UI/state layers decoupled from storage details.

pub mod note_service;
pub mod preview;
