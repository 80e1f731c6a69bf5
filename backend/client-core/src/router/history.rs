/// Navigation history for the single-window application.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn push(&mut self, path: impl Into<String>) {
        self.entries.push(path.into());
    }

    /// Overwrite the current entry, or push when history is empty.
    pub fn replace(&mut self, path: impl Into<String>) {
        match self.entries.last_mut() {
            Some(current) => *current = path.into(),
            None => self.entries.push(path.into()),
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Drop the current entry and return the one before it.
    ///
    /// The first entry is never removed.
    pub fn back(&mut self) -> Option<&str> {
        if self.entries.len() < 2 {
            return None;
        }
        self.entries.pop();
        self.current()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
