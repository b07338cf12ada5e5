use std::io::Cursor;

use domain::core::Directory;
use domain::data;
use domain::event::UiEvent;
use domain::prompt::ScriptedPrompter;
use domain::stock::DEFAULT_LOGO;
use domain::user::{UserId, UserRepoExt};
use domain::view::DirectoryView;

use super::{Command, ParseError, Shell};
use crate::page::HtmlPage;

const USERS: &str = r#"[
    {"id": 1, "user": {"firstname": "A", "lastname": "B"}, "portfolio": []},
    {"id": 2, "user": {"firstname": "Edsger", "lastname": "Dijkstra", "city": "Nuenen"},
     "portfolio": [{"symbol": "IBM", "owned": 10}]}
]"#;

const STOCKS: &str = r#"[
    {"symbol": "IBM", "name": "International Business Machines", "sector": "Information Technology",
     "subIndustry": "IT Consulting & Other Services", "address": "Armonk, New York"}
]"#;

fn shell(
    script: &str,
    prompter: ScriptedPrompter,
    render_path: std::path::PathBuf,
) -> Shell<ScriptedPrompter, Cursor<Vec<u8>>, Vec<u8>> {
    let directory = Directory::new(
        data::parse_users(USERS).unwrap(),
        data::parse_stocks(STOCKS).unwrap(),
        HtmlPage::new("/nonexistent-assets"),
        prompter,
    );
    Shell::new(
        directory,
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        render_path,
    )
}

#[test]
fn parse_commands() {
    assert_eq!(Command::parse("list"), Ok(Command::List));
    assert_eq!(
        Command::parse("  select  12 \n"),
        Ok(Command::Select(UserId::from(12)))
    );
    assert_eq!(
        Command::parse("set address 1 Main Street"),
        Ok(Command::Set {
            field: "address".into(),
            value: "1 Main Street".into(),
        })
    );
    assert_eq!(
        Command::parse("set city"),
        Ok(Command::Set {
            field: "city".into(),
            value: String::new(),
        })
    );
    assert_eq!(Command::parse("view AAPL"), Ok(Command::View("AAPL".into())));
    assert_eq!(Command::parse("save"), Ok(Command::Save));
    assert_eq!(Command::parse("delete"), Ok(Command::Delete));
    assert_eq!(Command::parse("render"), Ok(Command::Render));
    assert_eq!(Command::parse("exit"), Ok(Command::Quit));
}

#[test]
fn parse_errors() {
    assert_eq!(Command::parse("   "), Err(ParseError::Empty));
    assert_eq!(
        Command::parse("select"),
        Err(ParseError::MissingArgument("id"))
    );
    assert_eq!(
        Command::parse("view"),
        Err(ParseError::MissingArgument("symbol"))
    );
    assert_eq!(
        Command::parse("set phone 555"),
        Err(ParseError::UnknownField("phone".into()))
    );
    assert_eq!(
        Command::parse("frobnicate"),
        Err(ParseError::Unknown("frobnicate".into()))
    );
}

#[test]
fn edit_and_save_through_the_shell() {
    let out = tempfile::tempdir().unwrap();
    let mut shell = shell(
        "select 1\nset firstname C\nsave\nquit\nselect 2\n",
        ScriptedPrompter::new(),
        out.path().join("index.html"),
    );
    shell.run().unwrap();

    let user = shell.directory().users().find_user(&UserId::from(1)).unwrap();
    assert_eq!(user.profile.firstname(), "C");
    // input after quit is not read
    assert_eq!(shell.directory().view().form().user_id, "1");

    let output = String::from_utf8(shell.into_output()).unwrap();
    assert!(output.contains("[1] B, A"));
    assert!(output.contains("[1] B, C"));
}

#[test]
fn save_without_selection_notifies() {
    let out = tempfile::tempdir().unwrap();
    let mut shell = shell("save\n", ScriptedPrompter::new(), out.path().join("x.html"));
    shell.run().unwrap();

    assert_eq!(
        shell.directory().prompter().notices(),
        ["Select a user first"]
    );
}

#[test]
fn delete_asks_for_confirmation() {
    let out = tempfile::tempdir().unwrap();
    let mut shell = shell(
        "select 2\ndelete\nselect 1\ndelete\n",
        ScriptedPrompter::new().with_answers([false, true]),
        out.path().join("x.html"),
    );
    shell.run().unwrap();

    let directory = shell.directory();
    assert_eq!(
        directory.prompter().confirmations(),
        [
            "Are you sure you want to delete user: Edsger Dijkstra?",
            "Are you sure you want to delete user: A B?",
        ]
    );
    assert_eq!(directory.users().len(), 1);
    assert!(directory.users().find_user(&UserId::from(2)).is_some());
    assert_eq!(directory.view().form().user_id, "");
    assert!(directory.view().portfolio().rows.is_empty());
}

#[test]
fn missing_logo_falls_back_to_default() {
    let out = tempfile::tempdir().unwrap();
    let mut shell = shell("view IBM\n", ScriptedPrompter::new(), out.path().join("x.html"));
    shell.run().unwrap();

    let page = shell.directory().view();
    assert_eq!(page.stock().name, "International Business Machines");
    assert_eq!(page.logo(), DEFAULT_LOGO);
}

#[test]
fn unknown_stock_shows_placeholder() {
    let out = tempfile::tempdir().unwrap();
    let mut shell = shell("view NOPE\n", ScriptedPrompter::new(), out.path().join("x.html"));
    shell.execute(Command::View("NOPE".into())).unwrap();

    let page = shell.directory().view();
    assert_eq!(page.stock().name, "Not found");
    assert_eq!(page.logo(), DEFAULT_LOGO);
}

#[test]
fn render_writes_the_page() {
    let out = tempfile::tempdir().unwrap();
    let path = out.path().join("nested").join("index.html");
    let mut shell = shell(
        "select 2\nrender\n",
        ScriptedPrompter::new(),
        path.clone(),
    );
    shell.run().unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains(r#"<li id="2">Dijkstra, Edsger</li>"#));
    assert!(html.contains(r#"id="city" value="Nuenen""#));
    assert!(html.contains(r#"<button id="IBM">View</button>"#));
}

#[test]
fn follow_up_events_are_drained() {
    let out = tempfile::tempdir().unwrap();
    let mut shell = shell("", ScriptedPrompter::new(), out.path().join("x.html"));
    shell.directory.view_mut().set_logo("logos/IBM.svg");

    shell.dispatch(UiEvent::UserClicked(UserId::from(1)));
    assert_eq!(shell.directory().view().logo(), DEFAULT_LOGO);
}
