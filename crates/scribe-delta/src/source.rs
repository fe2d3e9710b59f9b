//! Change origin tags.

use serde::{Deserialize, Serialize};

/// Who caused a change or selection notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Direct user input inside the widget.
    User,
    /// A programmatic call through the widget API.
    Api,
    /// A programmatic call that should not be observable as a change.
    Silent,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::User => "user",
            Source::Api => "api",
            Source::Silent => "silent",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
