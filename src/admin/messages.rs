//! User-facing messages surfaced to the admin after a save attempt.

/// Severity of a user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// The save (or part of it) succeeded.
    Success,
    /// Something degraded but the save proceeded.
    Warning,
    /// The save was rejected.
    Error,
}

/// One message shown to the admin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Severity.
    pub level: Level,
    /// Human-readable text.
    pub text: String,
}

/// Collects messages during form handling.
#[derive(Clone, Debug, Default)]
pub struct Messenger {
    messages: Vec<Message>,
}

impl Messenger {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a success message.
    pub fn success(&mut self, text: impl Into<String>) {
        self.push(Level::Success, text);
    }

    /// Record a non-fatal warning.
    pub fn warning(&mut self, text: impl Into<String>) {
        self.push(Level::Warning, text);
    }

    /// Record an error; the save is expected to be rejected.
    pub fn error(&mut self, text: impl Into<String>) {
        self.push(Level::Error, text);
    }

    fn push(&mut self, level: Level, text: impl Into<String>) {
        self.messages.push(Message {
            level,
            text: text.into(),
        });
    }

    /// Whether any error has been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.level == Level::Error)
    }

    /// Collected messages in recording order.
    #[must_use]
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messenger_tracks_levels_in_order() {
        let mut messenger = Messenger::new();
        messenger.warning("w");
        assert!(!messenger.has_errors());
        messenger.error("e");
        messenger.success("s");
        assert!(messenger.has_errors());
        let levels: Vec<_> = messenger
            .into_messages()
            .into_iter()
            .map(|m| m.level)
            .collect();
        assert_eq!(levels, vec![Level::Warning, Level::Error, Level::Success]);
    }
}
