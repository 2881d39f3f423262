//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `notes` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Note::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - Listing order is `created_at DESC, id ASC`; user-selected ordering is
//!   applied in memory above this layer.

use crate::db::DbError;
use crate::model::note::{Note, NoteColor, NoteId, NoteValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTE_SELECT_SQL: &str = "SELECT id, title, content, color, created_at FROM notes";

pub type StoreResult<T> = Result<T, StoreError>;

/// Generic repository error for note persistence and query operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(NoteValidationError),
    Db(DbError),
    NotFound(NoteId),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<NoteValidationError> for StoreError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for note CRUD operations.
pub trait NoteRepository {
    /// Persists a note and returns its stable id.
    ///
    /// A note carrying an id replaces the stored row under that id, or
    /// re-creates it when absent; a note without an id gets a fresh one.
    fn insert_note(&self, note: &Note) -> StoreResult<NoteId>;
    /// Gets one note by id.
    fn get_note(&self, id: NoteId) -> StoreResult<Option<Note>>;
    /// Lists all notes in base order (`created_at DESC, id ASC`).
    fn list_notes(&self) -> StoreResult<Vec<Note>>;
    /// Removes one note by id.
    fn delete_note(&self, id: NoteId) -> StoreResult<()>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn insert_note(&self, note: &Note) -> StoreResult<NoteId> {
        note.validate()?;

        match note.id {
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO notes (id, title, content, color, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     ON CONFLICT (id) DO UPDATE SET
                        title = excluded.title,
                        content = excluded.content,
                        color = excluded.color,
                        created_at = excluded.created_at;",
                    params![
                        id,
                        note.title.as_str(),
                        note.content.as_str(),
                        color_to_db(note.color),
                        note.created_at,
                    ],
                )?;
                Ok(id)
            }
            None => {
                self.conn.execute(
                    "INSERT INTO notes (title, content, color, created_at)
                     VALUES (?1, ?2, ?3, ?4);",
                    params![
                        note.title.as_str(),
                        note.content.as_str(),
                        color_to_db(note.color),
                        note.created_at,
                    ],
                )?;
                Ok(self.conn.last_insert_rowid())
            }
        }
    }

    fn get_note(&self, id: NoteId) -> StoreResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }

        Ok(None)
    }

    fn list_notes(&self) -> StoreResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} ORDER BY created_at DESC, id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }

        Ok(notes)
    }

    fn delete_note(&self, id: NoteId) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_note_row(row: &Row<'_>) -> StoreResult<Note> {
    let color_text: String = row.get("color")?;
    let color = color_from_db(&color_text).ok_or_else(|| {
        StoreError::InvalidData(format!("invalid color value `{color_text}` in notes.color"))
    })?;

    let note = Note {
        id: Some(row.get("id")?),
        title: row.get("title")?,
        content: row.get("content")?,
        created_at: row.get("created_at")?,
        color,
    };
    note.validate()?;
    Ok(note)
}

fn color_to_db(color: NoteColor) -> &'static str {
    match color {
        NoteColor::RedOrange => "red_orange",
        NoteColor::RedPink => "red_pink",
        NoteColor::BabyBlue => "baby_blue",
        NoteColor::Violet => "violet",
        NoteColor::LightGreen => "light_green",
    }
}

fn color_from_db(value: &str) -> Option<NoteColor> {
    match value {
        "red_orange" => Some(NoteColor::RedOrange),
        "red_pink" => Some(NoteColor::RedPink),
        "baby_blue" => Some(NoteColor::BabyBlue),
        "violet" => Some(NoteColor::Violet),
        "light_green" => Some(NoteColor::LightGreen),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{color_from_db, color_to_db};
    use crate::model::note::NoteColor;

    #[test]
    fn color_tokens_round_trip() {
        for color in NoteColor::PALETTE {
            assert_eq!(color_from_db(color_to_db(color)), Some(color));
        }
    }

    #[test]
    fn unknown_color_token_is_rejected() {
        assert_eq!(color_from_db("chartreuse"), None);
    }
}
