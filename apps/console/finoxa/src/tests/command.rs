use crate::terminal::Command;

use client_core::Action;

fn set_field(name: &str, value: &str) -> Command {
    Command::Action(Action::SetField {
        name: name.to_string(),
        value: value.to_string(),
    })
}

/// **VALUE**: Passwords keep their inner spaces.
///
/// **WHY THIS MATTERS**: A password is sent exactly as typed; splitting on every space
/// would silently change it and make login fail.
///
/// **BUG THIS CATCHES**: Would catch the value being taken from the second word only.
#[test]
fn given_password_with_spaces_when_parsed_then_value_kept_whole() {
    assert_eq!(
        Command::parse("password correct horse battery"),
        set_field("password", "correct horse battery")
    );
}

#[test]
fn given_field_shorthand_when_parsed_then_set_field() {
    assert_eq!(
        Command::parse("  Email ada@example.com  "),
        set_field("email", "ada@example.com")
    );
}

#[test]
fn given_set_command_when_parsed_then_set_field() {
    assert_eq!(Command::parse("set name Ada Lovelace"), set_field("name", "Ada Lovelace"));
    assert_eq!(Command::parse("set name"), set_field("name", ""));
}

#[test]
fn given_navigation_words_when_parsed_then_navigate_actions() {
    assert_eq!(
        Command::parse("go /signup"),
        Command::Action(Action::Navigate("/signup".to_string()))
    );
    assert_eq!(
        Command::parse("login"),
        Command::Action(Action::Navigate("/login".to_string()))
    );
    assert_eq!(
        Command::parse("home"),
        Command::Action(Action::Navigate("/".to_string()))
    );
    assert_eq!(Command::parse("back"), Command::Action(Action::Back));
}

#[test]
fn given_key_commands_when_parsed_then_dashboard_actions() {
    assert_eq!(Command::parse("new"), Command::Action(Action::NewKey));
    assert_eq!(Command::parse("rotate"), Command::Action(Action::RotateKey));
    assert_eq!(Command::parse("COPY"), Command::Action(Action::CopyKey));
    assert_eq!(Command::parse("delete"), Command::Action(Action::DeleteKey));
    assert_eq!(Command::parse("verify"), Command::Action(Action::VerifyKey));
    assert_eq!(Command::parse("logout"), Command::Action(Action::Logout));
}

#[test]
fn given_blank_or_unknown_when_parsed_then_empty_or_unknown() {
    assert_eq!(Command::parse("   "), Command::Empty);
    assert_eq!(Command::parse("go"), Command::Unknown("go".to_string()));
    assert_eq!(
        Command::parse("launch rockets"),
        Command::Unknown("launch rockets".to_string())
    );
    assert_eq!(Command::parse("q"), Command::Quit);
    assert_eq!(Command::parse("?"), Command::Help);
}
