//! Error types for the editor bridge.
//!
//! Every variant is a programming-contract violation: it surfaces
//! immediately, is fatal to the call that triggered it, and is never
//! retried. Expected absences (focusing or blurring with no live instance)
//! are plain no-ops and never reach this enum.

use thiserror::Error;

/// Contract violations detected by the bridge.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BridgeError {
    /// A second instantiate was attempted while a widget instance is live.
    #[error("a widget instance is already live; unmount it before mounting again")]
    AlreadyInstantiated,

    /// An operation that requires a live widget instance found none.
    #[error("no live widget instance")]
    NoInstance,

    /// More than one editing-area child was supplied.
    #[error("the editing area can only be a single element, got {0} children")]
    EditingAreaConflict(usize),

    /// The editing-area child cannot host the editor.
    #[error("invalid editing area: {0}")]
    InvalidEditingArea(String),

    /// A configuration key that was removed from the public surface.
    #[error("the `{name}` option was removed: {hint}")]
    RemovedOption {
        name: &'static str,
        hint: &'static str,
    },

    /// The delta payload from a change notification was passed back in as
    /// the new external value. Doing so would loop forever; the caller
    /// almost certainly wants the widget contents instead.
    #[error(
        "the change payload from `on_change` was supplied as the new value; \
         read the widget contents instead of echoing the delta"
    )]
    ValueEchoesChange,
}
