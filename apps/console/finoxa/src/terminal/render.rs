//! Plain-text rendering of page views.

use client_core::View;
use client_core::pages::{DashboardView, KeyPanel, LoginView, SignupView};
use client_core::pages::{FieldError, PageLink};

use std::fmt::Write;

const RULE: &str = "----------------------------------------";

pub fn render(view: &View) -> String {
    match view {
        View::Loading => "Loading...\n".to_string(),
        View::Signup(view) => render_signup(view),
        View::Login(view) => render_login(view),
        View::Dashboard(view) => render_dashboard(view),
        View::NotFound { path } => format!("404 | Page not found: {path}\n"),
    }
}

fn render_signup(view: &SignupView) -> String {
    let mut out = header(view.title, view.description);

    if let Some(alert) = &view.alert {
        let _ = writeln!(out, "[{}] {}", alert.title, alert.description);
    }
    if let Some(error) = &view.field_error {
        push_field_error(&mut out, error);
    }

    let _ = writeln!(out, "  Name:     {}", view.name);
    let _ = writeln!(out, "  Email:    {}", view.email);
    let _ = writeln!(out, "  Password: {}", mask(view.password_length));
    let _ = writeln!(out, "  {}", button("Create account", "Creating account...", view.is_loading));
    push_link(&mut out, &view.link);
    out
}

fn render_login(view: &LoginView) -> String {
    let mut out = header(view.title, view.description);

    if let Some(error) = &view.field_error {
        push_field_error(&mut out, error);
    }

    let _ = writeln!(out, "  Email:    {}", view.email);
    let _ = writeln!(out, "  Password: {}", mask(view.password_length));
    let _ = writeln!(out, "  {}", button("Sign in", "Signing in...", view.is_loading));
    push_link(&mut out, &view.link);
    out
}

fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}    Docs: {}    [logout]", view.product_name, view.docs_url);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}", view.heading);
    let _ = writeln!(out, "{}", view.subheading);

    let new_key = if view.can_create_key {
        "[new] New Key"
    } else {
        "(New Key unavailable: a key already exists)"
    };
    let _ = writeln!(out, "  {new_key}");

    match &view.key {
        KeyPanel::Empty { text } => {
            let _ = writeln!(out, "  {text}");
        }
        KeyPanel::Key {
            preview,
            is_copying,
            is_generating,
        } => {
            let copy = if *is_copying { "copied" } else { "copy" };
            let rotate = if *is_generating { "rotating" } else { "rotate" };
            let _ = writeln!(out, "  {preview}");
            let _ = writeln!(out, "  [{copy}] [{rotate}] [delete] [verify]");
        }
    }

    if view.is_loading {
        let _ = writeln!(out, "  Loading...");
    }
    if let Some(verification) = &view.verification {
        let _ = writeln!(out, "  Verify: {verification}");
    }
    out
}

fn header(title: &str, description: &str) -> String {
    format!("{title}\n{description}\n{RULE}\n")
}

fn push_field_error(out: &mut String, error: &FieldError) {
    let _ = writeln!(out, "! {}: {}", error.field, error.message);
}

fn push_link(out: &mut String, link: &PageLink) {
    let _ = writeln!(out, "{} {} (go {})", link.prompt, link.label, link.to);
}

fn button(label: &'static str, busy_label: &'static str, is_loading: bool) -> &'static str {
    if is_loading { busy_label } else { label }
}

fn mask(length: usize) -> String {
    "*".repeat(length)
}
