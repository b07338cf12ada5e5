use std::io::Cursor;

use crate::{is_affirmative, Prompter, ScriptedPrompter, TerminalPrompter};

#[test]
fn affirmative_answers() {
    assert!(is_affirmative("y"));
    assert!(is_affirmative("YES\n"));
    assert!(is_affirmative("  Yes  "));
    assert!(!is_affirmative(""));
    assert!(!is_affirmative("no"));
    assert!(!is_affirmative("yeah"));
}

#[test]
fn terminal_prompter_reads_one_line_per_confirmation() {
    let input = Cursor::new(b"y\nn\n".to_vec());
    let mut prompter = TerminalPrompter::new(input, Vec::new());

    assert!(prompter.confirm("Delete?"));
    assert!(!prompter.confirm("Delete again?"));
    // input exhausted
    assert!(!prompter.confirm("And again?"));

    let (_, output) = prompter.into_parts();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Delete? [y/N] "));
    assert!(output.contains("And again? [y/N] "));
}

#[test]
fn terminal_prompter_writes_notices() {
    let mut prompter = TerminalPrompter::new(Cursor::new(Vec::new()), Vec::new());
    prompter.notify("Select a user first");

    let (_, output) = prompter.into_parts();
    assert_eq!(String::from_utf8(output).unwrap(), "! Select a user first\n");
}

#[test]
fn scripted_prompter_consumes_queue_then_default() {
    let mut prompter = ScriptedPrompter::always(true).with_answers([false]);

    assert!(!prompter.confirm("first"));
    assert!(prompter.confirm("second"));
    prompter.notify("hello");

    assert_eq!(prompter.confirmations(), ["first", "second"]);
    assert_eq!(prompter.notices(), ["hello"]);
}

#[test]
fn boxed_prompter_delegates() {
    let mut prompter: Box<dyn Prompter> = Box::new(ScriptedPrompter::new());
    assert!(!prompter.confirm("anything"));
}
