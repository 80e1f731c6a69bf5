use crate::terminal::{HELP_TEXT, Terminal};

use client_core::{ApiClient, App};

/// Nothing listens on the discard port, and no test below makes a request.
const OFFLINE_BACKEND: &str = "http://127.0.0.1:9";

async fn offline_terminal() -> Terminal {
    let client = ApiClient::new(OFFLINE_BACKEND).unwrap();
    let mut app = App::new(client, None);
    app.boot("/").await.unwrap();
    Terminal::new(app)
}

/// **VALUE**: The loop prints the first view, handles commands and stops on `quit`.
///
/// **WHY THIS MATTERS**: This is the whole user-facing surface of the binary.
///
/// **BUG THIS CATCHES**: Would catch the view not being re-rendered after navigation.
#[tokio::test]
async fn given_commands_when_run_then_views_printed_until_quit() {
    // GIVEN: A signed-out terminal on the login page
    let mut terminal = offline_terminal().await;
    let input: &[u8] = b"help\nsignup\nquit\nlogin\n";
    let mut output = Vec::new();

    // WHEN: Running the command loop
    terminal.run(input, &mut output).await.unwrap();

    // THEN: Login, help and signup are printed; nothing after quit
    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("Log in\n"));
    assert!(text.contains(HELP_TEXT));
    assert!(text.contains("Create an account"));
    assert_eq!(text.matches("Log in\n").count(), 1);
    assert_eq!(terminal.app().router().current_path(), "/signup");
}

#[tokio::test]
async fn given_dashboard_action_on_login_page_when_run_then_not_available() {
    let mut terminal = offline_terminal().await;
    let input: &[u8] = b"rotate\n";
    let mut output = Vec::new();

    terminal.run(input, &mut output).await.unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Not available on this page"));
}

#[tokio::test]
async fn given_unknown_command_when_run_then_hint_printed() {
    let mut terminal = offline_terminal().await;
    let input: &[u8] = b"fly\n";
    let mut output = Vec::new();

    terminal.run(input, &mut output).await.unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Unknown command: fly (try help)"));
}

/// **VALUE**: The loading view is on screen while the startup session check runs.
///
/// **WHY THIS MATTERS**: The check is a network round trip; without it the terminal sits
/// blank until the backend answers.
///
/// **BUG THIS CATCHES**: Would catch boot finishing before anything is printed.
#[tokio::test]
async fn given_fresh_app_when_booted_then_loading_printed_before_first_page() {
    // GIVEN: An app that has not run its session check yet
    let client = ApiClient::new(OFFLINE_BACKEND).unwrap();
    let mut terminal = Terminal::new(App::new(client, None));
    let mut output = Vec::new();

    // WHEN: Booting through the terminal
    terminal.boot("/", &mut output).await.unwrap();

    // THEN: Loading was printed, and the app has since routed to the login page
    assert_eq!(String::from_utf8(output).unwrap(), "Loading...\n");
    assert_eq!(terminal.app().router().current_path(), "/login");
}
