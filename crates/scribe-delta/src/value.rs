//! The external content value: HTML string or structured document.

use crate::delta::Delta;

/// Which representation a [`Value`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Html,
    Document,
}

/// Externally visible editor content.
///
/// Callers supply content either as an HTML string or as a structured
/// [`Delta`]; once a caller starts using one representation, the bridge
/// reflects changes back in that same representation so equality stays
/// meaningful.
///
/// Equality is per-variant and deep: two HTML values compare as strings, two
/// document values compare their ops. A document value is *never* equal to
/// an HTML value, even when both would render identically. That asymmetry is
/// deliberate and load-bearing: collapsing it would change how often the
/// bridge decides an external value differs from the tracked one.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Html(String),
    Document(Delta),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Html(_) => ValueKind::Html,
            Value::Document(_) => ValueKind::Document,
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(self, Value::Document(_))
    }

    /// The empty self-managed seed.
    pub fn empty_html() -> Self {
        Value::Html(String::new())
    }

    /// The delta, when this value is structured.
    pub fn as_document(&self) -> Option<&Delta> {
        match self {
            Value::Document(delta) => Some(delta),
            Value::Html(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(html: &str) -> Self {
        Value::Html(html.to_owned())
    }
}

impl From<String> for Value {
    fn from(html: String) -> Self {
        Value::Html(html)
    }
}

impl From<Delta> for Value {
    fn from(delta: Delta) -> Self {
        Value::Document(delta)
    }
}
