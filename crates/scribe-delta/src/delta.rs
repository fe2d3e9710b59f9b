//! Structured document deltas.
//!
//! A [`Delta`] is an ordered sequence of typed operations describing document
//! content and formatting. The bridge treats it as opaque beyond equality and
//! ops-list access; the serde shape matches the widget engine's native JSON
//! (`{"ops":[{"insert":"a"}]}`), so deltas round-trip the wire unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Formatting attributes attached to an operation.
///
/// The attribute vocabulary belongs to the widget engine; the bridge only
/// needs deep equality, so values stay as raw JSON.
pub type Attributes = BTreeMap<SmolStr, serde_json::Value>;

/// The payload of an insert operation: either text or an embedded object
/// (image, video, formula - whatever the engine supports).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Insert {
    Text(SmolStr),
    Embed(serde_json::Value),
}

impl From<&str> for Insert {
    fn from(s: &str) -> Self {
        Insert::Text(s.into())
    }
}

/// A single typed edit operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Op {
    Insert {
        insert: Insert,
        #[serde(skip_serializing_if = "Option::is_none")]
        attributes: Option<Attributes>,
    },
    Retain {
        retain: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        attributes: Option<Attributes>,
    },
    Delete {
        delete: usize,
    },
}

/// Opaque monotonic stamp attached to every change payload the bridge emits.
///
/// Tokens exist for exactly one check: recognizing the situation where a
/// caller passes the delta from a change notification straight back in as
/// the new external value. They never participate in content equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChangeToken(u64);

/// Mints [`ChangeToken`]s in strictly increasing order.
#[derive(Debug, Default)]
pub struct TokenSource {
    next: u64,
}

impl TokenSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mint(&mut self) -> ChangeToken {
        self.next += 1;
        ChangeToken(self.next)
    }
}

/// An ordered sequence of edit operations.
///
/// Equality compares `ops` only; the change-token stamp is bookkeeping and
/// never affects whether two deltas count as the same content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Delta {
    pub ops: Vec<Op>,
    #[serde(skip)]
    token: Option<ChangeToken>,
}

impl PartialEq for Delta {
    fn eq(&self, other: &Self) -> bool {
        self.ops == other.ops
    }
}

impl Delta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Append a plain text insert.
    pub fn insert(mut self, text: impl Into<SmolStr>) -> Self {
        self.ops.push(Op::Insert {
            insert: Insert::Text(text.into()),
            attributes: None,
        });
        self
    }

    /// Append a text insert carrying formatting attributes.
    pub fn insert_with(mut self, text: impl Into<SmolStr>, attributes: Attributes) -> Self {
        self.ops.push(Op::Insert {
            insert: Insert::Text(text.into()),
            attributes: Some(attributes),
        });
        self
    }

    /// Append an embed insert.
    pub fn insert_embed(mut self, embed: serde_json::Value) -> Self {
        self.ops.push(Op::Insert {
            insert: Insert::Embed(embed),
            attributes: None,
        });
        self
    }

    pub fn retain(mut self, length: usize) -> Self {
        self.ops.push(Op::Retain {
            retain: length,
            attributes: None,
        });
        self
    }

    pub fn delete(mut self, length: usize) -> Self {
        self.ops.push(Op::Delete { delete: length });
        self
    }

    /// The change-token stamp, if this delta was emitted by the bridge.
    pub fn token(&self) -> Option<ChangeToken> {
        self.token
    }

    /// Stamp this delta as an emitted change payload.
    pub fn stamp(&mut self, token: ChangeToken) {
        self.token = Some(token);
    }

    /// Concatenated text of all text inserts. Embeds contribute nothing.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for op in &self.ops {
            if let Op::Insert {
                insert: Insert::Text(text),
                ..
            } = op
            {
                out.push_str(text);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_token() {
        let a = Delta::new().insert("hello");
        let mut b = Delta::new().insert("hello");

        let mut tokens = TokenSource::new();
        b.stamp(tokens.mint());

        assert_eq!(a, b);
        assert_ne!(a.token(), b.token());
    }

    #[test]
    fn test_equality_is_deep() {
        let bold: Attributes = [("bold".into(), serde_json::Value::Bool(true))].into();

        let a = Delta::new().insert_with("hi", bold.clone()).retain(3);
        let b = Delta::new().insert_with("hi", bold).retain(3);
        let c = Delta::new().insert("hi").retain(3);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_tokens_are_monotonic() {
        let mut tokens = TokenSource::new();
        let first = tokens.mint();
        let second = tokens.mint();
        assert_ne!(first, second);
    }

    #[test]
    fn test_serde_matches_engine_shape() {
        let delta = Delta::new().insert("a").delete(2).retain(1);
        let json = serde_json::to_value(&delta).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ops": [
                    {"insert": "a"},
                    {"delete": 2},
                    {"retain": 1},
                ]
            })
        );
    }

    #[test]
    fn test_deserialize_engine_json() {
        let delta: Delta = serde_json::from_str(
            r#"{"ops":[{"insert":"hi","attributes":{"bold":true}},{"insert":{"image":"x.png"}}]}"#,
        )
        .unwrap();

        assert_eq!(delta.ops.len(), 2);
        assert!(delta.token().is_none());
        assert_eq!(delta.plain_text(), "hi");
        match &delta.ops[1] {
            Op::Insert {
                insert: Insert::Embed(embed),
                ..
            } => assert_eq!(embed["image"], "x.png"),
            other => panic!("expected embed insert, got {other:?}"),
        }
    }
}
