use client_core::Action;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Help,
    Quit,
    Action(Action),
    Unknown(String),
}

/// Form fields that can be set with a bare `<field> <value>` line.
const FIELD_NAMES: [&str; 3] = ["name", "email", "password"];

impl Command {
    /// Parse a line like `email ada@example.com`, `go /signup` or `rotate`.
    ///
    /// Field values keep everything after the first space, so a password
    /// may contain spaces.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };
        let word = word.to_ascii_lowercase();

        if FIELD_NAMES.contains(&word.as_str()) {
            return Command::Action(Action::SetField {
                name: word,
                value: rest.to_string(),
            });
        }

        match word.as_str() {
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "set" => match rest.split_once(char::is_whitespace) {
                Some((name, value)) => Command::Action(Action::SetField {
                    name: name.to_ascii_lowercase(),
                    value: value.trim_start().to_string(),
                }),
                None if !rest.is_empty() => Command::Action(Action::SetField {
                    name: rest.to_ascii_lowercase(),
                    value: String::new(),
                }),
                None => Command::Unknown(line.to_string()),
            },
            "go" | "open" if !rest.is_empty() => Command::Action(Action::Navigate(rest.to_string())),
            "signup" => Command::Action(Action::Navigate("/signup".to_string())),
            "login" => Command::Action(Action::Navigate("/login".to_string())),
            "home" | "dashboard" => Command::Action(Action::Navigate("/".to_string())),
            "back" => Command::Action(Action::Back),
            "submit" => Command::Action(Action::Submit),
            "new" => Command::Action(Action::NewKey),
            "rotate" => Command::Action(Action::RotateKey),
            "copy" => Command::Action(Action::CopyKey),
            "delete" => Command::Action(Action::DeleteKey),
            "verify" => Command::Action(Action::VerifyKey),
            "refresh" => Command::Action(Action::Refresh),
            "logout" => Command::Action(Action::Logout),
            _ => Command::Unknown(line.to_string()),
        }
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  name <value> | email <value> | password <value>   fill a form field
  submit                                            send the form
  signup | login | home | go <path>                 open a page
  back                                              previous page
  new | rotate | copy | delete | verify             manage the API key
  refresh                                           reload the user
  logout                                            sign out
  help                                              show this text
  quit                                              exit";
