use aacboard_cli::run_session;
use aacboard_core::{BoardSession, RecordingSpeech};
use std::io::Cursor;

fn run(script: &str) -> (String, BoardSession<RecordingSpeech>) {
    let mut session = BoardSession::with_default_catalog(RecordingSpeech::new());
    let mut output = Vec::new();
    run_session(&mut session, Cursor::new(script.to_string()), &mut output).unwrap();
    (String::from_utf8(output).unwrap(), session)
}

#[test]
fn tap_and_speak_script_sends_sentence() {
    let (output, session) = run("tap 0\ntap 1\nspeak\nquit\n");
    assert!(output.contains("Speaking: \"I want apple\""));

    let requests = session.speech().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].text, "I want apple");
}

#[test]
fn admin_script_adds_category_and_item() {
    let (output, session) =
        run("admin\nadd-category\ncategory orange Toys\nadd-item 6\nitem 🧸 teddy bear\n");
    assert!(output.contains("Category #6 added."));
    assert!(output.contains("Picture #27 added."));
    assert!(output.contains("🧸 teddy bear"));
    assert_eq!(session.store().category_count(), 7);
}

#[test]
fn invalid_commands_are_reported_without_stopping() {
    let (output, session) = run("dance\ntap\nrm 5\ntap 2\n");
    assert!(output.contains("unknown command `dance`"));
    assert!(output.contains("`tap` needs <symbol-id>"));
    assert!(output.contains("(nothing to do)"));
    assert_eq!(session.composer().len(), 1);
}

#[test]
fn json_command_prints_snapshot() {
    let (output, _) = run("json\nquit\n");
    assert!(output.contains("\"speak_enabled\": false"));
    assert!(output.contains("\"placeholder\": \"Select pictures below...\""));
}

#[test]
fn quit_stops_reading_further_commands() {
    let (_, session) = run("quit\ntap 0\n");
    assert!(session.composer().is_empty());
}
