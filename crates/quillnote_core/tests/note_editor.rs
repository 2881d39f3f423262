use quillnote_core::db::open_db_in_memory;
use quillnote_core::{
    EditorEvent, EditorOutcome, Note, NoteColor, NoteEditor, NoteOrder, NoteService,
    SqliteNoteRepository,
};

#[test]
fn field_events_update_the_draft() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    let mut editor = NoteEditor::new(service, NoteColor::Violet);

    let outcome = editor
        .on_event(EditorEvent::EnteredTitle("trip".to_string()))
        .unwrap();
    assert_eq!(outcome, EditorOutcome::Editing);
    editor
        .on_event(EditorEvent::EnteredContent("pack socks".to_string()))
        .unwrap();
    editor
        .on_event(EditorEvent::ChangedColor(NoteColor::LightGreen))
        .unwrap();

    assert_eq!(editor.title(), "trip");
    assert_eq!(editor.content(), "pack socks");
    assert_eq!(editor.color(), NoteColor::LightGreen);
    assert_eq!(editor.note_id(), None);
}

#[test]
fn saving_a_blank_draft_surfaces_the_transient_message() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    let mut editor = NoteEditor::new(service, NoteColor::default());

    match editor.on_event(EditorEvent::Save).unwrap() {
        EditorOutcome::Invalid(message) => {
            assert!(message.contains("title"));
            assert!(message.contains("blank"));
        }
        other => panic!("expected Invalid outcome, got {other:?}"),
    }
    assert_eq!(editor.note_id(), None);

    // Title filled in, content still blank: the message names the content.
    editor
        .on_event(EditorEvent::EnteredTitle("trip".to_string()))
        .unwrap();
    match editor.on_event(EditorEvent::Save).unwrap() {
        EditorOutcome::Invalid(message) => assert!(message.contains("content")),
        other => panic!("expected Invalid outcome, got {other:?}"),
    }
}

#[test]
fn saving_a_valid_draft_persists_and_assigns_an_id() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    let mut editor = NoteEditor::new(service, NoteColor::RedPink);
    editor
        .on_event(EditorEvent::EnteredTitle("trip".to_string()))
        .unwrap();
    editor
        .on_event(EditorEvent::EnteredContent("pack socks".to_string()))
        .unwrap();

    let saved = match editor.on_event(EditorEvent::Save).unwrap() {
        EditorOutcome::Saved(note) => note,
        other => panic!("expected Saved outcome, got {other:?}"),
    };
    assert!(saved.id.is_some());
    assert_eq!(saved.color, NoteColor::RedPink);
    assert_eq!(editor.note_id(), saved.id);

    let check = NoteService::new(SqliteNoteRepository::new(&conn));
    let stored = check.get_note(saved.id.unwrap()).unwrap().unwrap();
    assert_eq!(stored, saved);
}

#[test]
fn editing_an_existing_note_resaves_under_the_same_id() {
    let conn = open_db_in_memory().unwrap();
    let id = {
        let service = NoteService::new(SqliteNoteRepository::new(&conn));
        service
            .save_note(&Note::new("draft", "v1", NoteColor::BabyBlue))
            .unwrap()
            .id
            .unwrap()
    };

    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    let mut editor = NoteEditor::open(service, id).unwrap();
    assert_eq!(editor.title(), "draft");
    assert_eq!(editor.content(), "v1");
    assert_eq!(editor.color(), NoteColor::BabyBlue);

    editor
        .on_event(EditorEvent::EnteredContent("v2".to_string()))
        .unwrap();
    let saved = match editor.on_event(EditorEvent::Save).unwrap() {
        EditorOutcome::Saved(note) => note,
        other => panic!("expected Saved outcome, got {other:?}"),
    };
    assert_eq!(saved.id, Some(id));
    assert_eq!(saved.content, "v2");

    let check = NoteService::new(SqliteNoteRepository::new(&conn));
    assert_eq!(check.list_notes(NoteOrder::default()).unwrap().len(), 1);
}

#[test]
fn consecutive_saves_keep_mutating_the_same_note() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    let mut editor = NoteEditor::new(service, NoteColor::default());
    editor
        .on_event(EditorEvent::EnteredTitle("log".to_string()))
        .unwrap();
    editor
        .on_event(EditorEvent::EnteredContent("day one".to_string()))
        .unwrap();
    editor.on_event(EditorEvent::Save).unwrap();
    let first_id = editor.note_id().unwrap();

    editor
        .on_event(EditorEvent::EnteredContent("day two".to_string()))
        .unwrap();
    editor.on_event(EditorEvent::Save).unwrap();
    assert_eq!(editor.note_id(), Some(first_id));

    let check = NoteService::new(SqliteNoteRepository::new(&conn));
    let listed = check.list_notes(NoteOrder::default()).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].content, "day two");
}
