//! Unit tests for the terminal command grammar.

use mazemask::command::{Command, ParseError, parse};
use mazemask::events::UiEvent;

#[test]
fn test_button_words() {
    let cases = [
        ("go", UiEvent::GoClicked),
        ("refresh", UiEvent::RefreshClicked),
        ("config", UiEvent::ChangeConfigClicked),
        ("mask", UiEvent::EditMaskClicked),
        ("save", UiEvent::SaveMaskClicked),
        ("clear", UiEvent::ClearMaskClicked),
        ("apply", UiEvent::ApplyMaskClicked),
        ("end", UiEvent::PointerMoveEnd),
        ("resize", UiEvent::Resize),
    ];
    for (line, event) in cases {
        assert_eq!(parse(line), Ok(Some(Command::Event(event))), "{line}");
    }
}

#[test]
fn test_keywords_are_case_insensitive() {
    assert_eq!(parse("GO"), Ok(Some(Command::Event(UiEvent::GoClicked))));
    assert_eq!(parse("Size 15"), Ok(Some(Command::Event(UiEvent::SizeSelected(15)))));
}

#[test]
fn test_quit_and_help() {
    assert_eq!(parse("quit"), Ok(Some(Command::Quit)));
    assert_eq!(parse("exit"), Ok(Some(Command::Quit)));
    assert_eq!(parse("help"), Ok(Some(Command::Help)));
    assert!(Command::Quit.events().is_empty());
}

#[test]
fn test_drag_needs_four_numbers() {
    assert!(matches!(parse("drag 1 2 3"), Err(ParseError::MissingArgument { .. })));
    assert_eq!(parse("drag 1 2 3 x"), Err(ParseError::InvalidNumber("x".into())));
}

#[test]
fn test_move_rejects_extra_argument() {
    assert_eq!(parse("move 1 1 down"), Err(ParseError::TrailingArgument("move")));
    assert_eq!(parse("move 1 2 up junk"), Err(ParseError::TrailingArgument("move")));
}
