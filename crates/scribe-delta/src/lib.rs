//! scribe-delta: the document value model for the scribe editor bridge.
//!
//! This crate provides:
//! - `Delta` - an ordered sequence of typed edit operations, the structured
//!   representation of rich-text content
//! - `Value` - the tagged union of HTML-string and structured-document content
//! - `Range` - a selection range (index + length)
//! - `Source` - origin tags for change notifications
//! - `ChangeToken` - monotonic stamps used to recognize an emitted change
//!   payload when a caller feeds it back in as new content
//!
//! Everything here is framework-free plain data; the bridging logic lives
//! in `scribe-bridge`.

pub mod delta;
pub mod range;
pub mod source;
pub mod value;

pub use delta::{Attributes, ChangeToken, Delta, Insert, Op, TokenSource};
pub use range::Range;
pub use smol_str::SmolStr;
pub use source::Source;
pub use value::{Value, ValueKind};
