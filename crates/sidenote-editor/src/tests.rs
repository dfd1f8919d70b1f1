use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use crate::handlers::{add_note, delete_note, goto_note, list_notes};
use crate::host::{
    DecorationStyle, DecorationToken, Decorations, Documents, Messages, PickItem, Picker,
    RenderOptions, Selection,
};
use crate::session::Session;
use sidenote_core::{persist, PhysicalFileSystem};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Scripted stand-in for the host editor: answers picks from a queue and
/// records every outward call.
#[derive(Default)]
struct FakeHost {
    picks: VecDeque<Option<usize>>,
    active: Option<PathBuf>,
    selection: Option<Selection>,
    infos: Vec<String>,
    errors: Vec<String>,
    selection_deleted: bool,
    revealed: Vec<(PathBuf, u32)>,
    next_token: u64,
    registered: Vec<(DecorationToken, DecorationStyle)>,
    applied: Vec<(DecorationToken, PathBuf, u32, RenderOptions)>,
    disposed: Vec<DecorationToken>,
}

impl FakeHost {
    fn will_pick(&mut self, answers: impl IntoIterator<Item = Option<usize>>) {
        self.picks.extend(answers);
    }
}

impl Picker for FakeHost {
    fn pick(&mut self, _items: &[PickItem], _placeholder: &str) -> Option<usize> {
        self.picks.pop_front().flatten()
    }
}

impl Messages for FakeHost {
    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

impl Decorations for FakeHost {
    fn register(&mut self, style: DecorationStyle) -> DecorationToken {
        self.next_token += 1;
        let token = DecorationToken(self.next_token);
        self.registered.push((token, style));
        token
    }

    fn apply(&mut self, token: DecorationToken, path: &Path, line: u32, render: RenderOptions) {
        self.applied.push((token, path.to_path_buf(), line, render));
    }

    fn dispose(&mut self, token: DecorationToken) {
        self.disposed.push(token);
    }
}

impl Documents for FakeHost {
    fn active_document(&self) -> Option<PathBuf> {
        self.active.clone()
    }

    fn selection(&self) -> Option<Selection> {
        self.selection.clone()
    }

    fn delete_selection(&mut self) {
        self.selection_deleted = true;
        self.selection = None;
    }

    fn open_and_reveal(&mut self, path: &Path, line: u32) {
        self.revealed.push((path.to_path_buf(), line));
    }
}

/// Session over a temp project with a fixed author, so tests never
/// depend on the machine's git configuration.
fn setup(dir: &TempDir, host: &mut FakeHost) -> Session {
    init_logging();
    std::fs::write(dir.path().join(".sidenote.yml"), "author: tester\n").unwrap();
    Session::activate(Some(dir.path().to_path_buf()), Arc::new(PhysicalFileSystem), host)
}

fn select_text(host: &mut FakeHost, path: &Path, line: u32, text: &str) {
    host.active = Some(path.to_path_buf());
    host.selection = Some(Selection {
        line,
        text: text.to_string(),
    });
}

#[test]
fn add_note_persists_and_removes_the_selection() {
    let dir = TempDir::new().unwrap();
    let mut host = FakeHost::default();
    let mut session = setup(&dir, &mut host);

    let file = dir.path().join("main.rs");
    select_text(&mut host, &file, 4, "fix me");
    host.will_pick([Some(4)]); // Bug

    add_note(&mut session, &mut host);

    let notes = session.store.list(Some(&file));
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].message, "fix me");
    assert_eq!(notes[0].line, 4);
    assert_eq!(notes[0].author.as_deref(), Some("tester"));
    assert!(host.selection_deleted);

    let raw = std::fs::read_to_string(dir.path().join(".2do")).unwrap();
    assert!(raw.contains("\"type\": \"bug\""));
    assert!(raw.contains("fix me"));
    assert!(host.errors.is_empty());
}

#[test]
fn cancelled_type_prompt_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut host = FakeHost::default();
    let mut session = setup(&dir, &mut host);

    select_text(&mut host, &dir.path().join("main.rs"), 0, "keep me");
    host.will_pick([None]);

    add_note(&mut session, &mut host);

    assert!(session.store.is_empty());
    assert!(!host.selection_deleted);
    assert!(!dir.path().join(".2do").exists());
}

#[test]
fn add_note_requires_an_editor_and_a_selection() {
    let dir = TempDir::new().unwrap();
    let mut host = FakeHost::default();
    let mut session = setup(&dir, &mut host);

    host.will_pick([Some(0)]);
    add_note(&mut session, &mut host);
    assert_eq!(host.infos.last().unwrap(), "No active editor");

    host.active = Some(dir.path().join("main.rs"));
    host.selection = Some(Selection {
        line: 0,
        text: String::new(),
    });
    host.will_pick([Some(0)]);
    add_note(&mut session, &mut host);
    assert_eq!(host.infos.last().unwrap(), "No text selected");

    assert!(session.store.is_empty());
}

#[test]
fn list_notes_jumps_to_the_pick_and_highlights_it() {
    let dir = TempDir::new().unwrap();
    let mut host = FakeHost::default();
    let mut session = setup(&dir, &mut host);

    let file = dir.path().join("main.rs");
    select_text(&mut host, &file, 7, "why is this here");
    host.will_pick([Some(5)]); // Question
    add_note(&mut session, &mut host);

    // Root screen: two meta-entries, then the single note.
    host.will_pick([Some(2)]);
    list_notes(&mut session, &mut host);

    assert_eq!(host.revealed.last().unwrap(), &(file.clone(), 7));
    assert!(session.highlight.is_active());

    let (_, style) = host.registered.last().unwrap();
    assert_eq!(style.gutter_icon, "question.png");
    assert!(style.whole_line);

    let (_, path, line, render) = host.applied.last().unwrap();
    assert_eq!(path, &file);
    assert_eq!(*line, 7);
    assert_eq!(render.content_text, " why is this here - tester");
    assert_eq!(render.color, "#ddd342ff");
}

#[test]
fn a_new_highlight_releases_the_previous_one_first() {
    let dir = TempDir::new().unwrap();
    let mut host = FakeHost::default();
    let mut session = setup(&dir, &mut host);

    let file = dir.path().join("main.rs");
    select_text(&mut host, &file, 1, "first");
    host.will_pick([Some(0)]);
    add_note(&mut session, &mut host);
    select_text(&mut host, &file, 2, "second");
    host.will_pick([Some(0)]);
    add_note(&mut session, &mut host);

    host.will_pick([Some(2)]);
    list_notes(&mut session, &mut host);
    let first_token = *host.registered.last().map(|(token, _)| token).unwrap();

    host.will_pick([Some(3)]);
    list_notes(&mut session, &mut host);

    assert_eq!(host.disposed, vec![first_token]);
    assert_eq!(host.registered.len(), 2);
}

#[test]
fn empty_scopes_report_and_abort() {
    let dir = TempDir::new().unwrap();
    let mut host = FakeHost::default();
    let mut session = setup(&dir, &mut host);

    list_notes(&mut session, &mut host);
    assert_eq!(host.infos.last().unwrap(), "This project doesn't have any notes!");

    let file = dir.path().join("main.rs");
    host.active = Some(file.clone());
    list_notes(&mut session, &mut host);
    assert_eq!(
        host.infos.last().unwrap(),
        &format!("{} doesn't have any notes!", file.display())
    );
    assert!(host.revealed.is_empty());
}

#[test]
fn delete_note_removes_persists_and_clears_the_highlight() {
    let dir = TempDir::new().unwrap();
    let mut host = FakeHost::default();
    let mut session = setup(&dir, &mut host);

    let file = dir.path().join("main.rs");
    select_text(&mut host, &file, 3, "obsolete");
    host.will_pick([Some(0)]);
    add_note(&mut session, &mut host);

    host.will_pick([Some(2)]);
    list_notes(&mut session, &mut host);
    assert!(session.highlight.is_active());

    host.will_pick([Some(2)]);
    delete_note(&mut session, &mut host);

    assert!(session.store.is_empty());
    assert!(!session.highlight.is_active());
    let raw = std::fs::read_to_string(dir.path().join(".2do")).unwrap();
    assert!(!raw.contains("obsolete"));
}

#[test]
fn goto_note_reveals_the_line() {
    let dir = TempDir::new().unwrap();
    let mut host = FakeHost::default();
    let mut session = setup(&dir, &mut host);

    let file = dir.path().join("main.rs");
    select_text(&mut host, &file, 12, "here");
    host.will_pick([Some(0)]);
    add_note(&mut session, &mut host);
    let note = session.store.list(Some(&file))[0].clone();

    goto_note(&mut host, &note);

    assert_eq!(host.revealed.last().unwrap(), &(file, 12));
}

#[test]
fn document_changes_invalidate_the_highlight() {
    let dir = TempDir::new().unwrap();
    let mut host = FakeHost::default();
    let mut session = setup(&dir, &mut host);

    let file = dir.path().join("main.rs");
    select_text(&mut host, &file, 0, "x");
    host.will_pick([Some(0)]);
    add_note(&mut session, &mut host);
    host.will_pick([Some(2)]);
    list_notes(&mut session, &mut host);
    assert!(session.highlight.is_active());

    session.on_document_changed(&mut host);
    assert!(!session.highlight.is_active());
    assert_eq!(host.disposed.len(), 1);

    // Safe to clear again with nothing active.
    session.on_active_document_changed(&mut host);
    assert_eq!(host.disposed.len(), 1);
}

#[test]
fn malformed_notes_file_degrades_to_an_empty_store() {
    init_logging();
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".2do"), "{ not json").unwrap();

    let mut host = FakeHost::default();
    let session = Session::activate(
        Some(dir.path().to_path_buf()),
        Arc::new(PhysicalFileSystem),
        &mut host,
    );

    assert!(session.store.is_empty());
    assert!(host.errors.last().unwrap().contains("Failed to read notes file"));
}

#[test]
fn notes_persisted_without_ids_still_load() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let raw = r#"{
  "/a.ts": [
    {
      "path": "/a.ts",
      "line": 2,
      "timestamp": 1000,
      "type": "info",
      "message": "x",
      "author": null
    }
  ]
}"#;
    std::fs::write(dir.path().join(".2do"), raw).unwrap();

    let mut host = FakeHost::default();
    let session = Session::activate(
        Some(dir.path().to_path_buf()),
        Arc::new(PhysicalFileSystem),
        &mut host,
    );

    assert_eq!(session.store.len(), 1);
    assert_eq!(session.store.list(Some(Path::new("/a.ts")))[0].message, "x");
    assert!(host.errors.is_empty());
}

#[test]
fn saving_without_a_project_root_reports_an_error() {
    init_logging();
    let mut host = FakeHost::default();
    let session = Session::activate(None, Arc::new(PhysicalFileSystem), &mut host);

    session.save_notes(&mut host);

    assert_eq!(
        host.errors.last().unwrap(),
        "No workspace open — cannot save notes."
    );
}

#[test]
fn save_then_reactivate_round_trips_the_store() {
    let dir = TempDir::new().unwrap();
    let mut host = FakeHost::default();
    let mut session = setup(&dir, &mut host);

    let file = dir.path().join("main.rs");
    select_text(&mut host, &file, 9, "remember this");
    host.will_pick([Some(6)]); // Private
    add_note(&mut session, &mut host);

    let mut second_host = FakeHost::default();
    let reloaded = setup(&dir, &mut second_host);

    assert_eq!(reloaded.store.len(), 1);
    let notes = reloaded.store.list(Some(&file));
    assert_eq!(notes[0].message, "remember this");
    assert_eq!(
        persist::load(&dir.path().join(".2do"), &PhysicalFileSystem)
            .unwrap()
            .len(),
        1
    );
}
