//! Controlled/self-managed value synchronization.
//!
//! The bridge tracks one externally visible value at all times. In
//! controlled mode the caller owns it and the bridge pushes differing
//! values into the instance; in self-managed mode the bridge seeds it once
//! and thereafter only pulls from the instance. Pull always reads back in
//! the representation the caller is using, so equality against the tracked
//! value stays meaningful.

use scribe_delta::{Source, Value, ValueKind};

use crate::bridge::EditorBridge;
use crate::error::BridgeError;
use crate::widget::{RichTextWidget, WidgetFactory};

/// Who owns the component's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    /// The caller supplies the value on every render.
    Controlled,
    /// The bridge owns the value after initial seeding.
    SelfManaged,
}

impl<F: WidgetFactory> EditorBridge<F> {
    /// Reject a value that is the change payload the bridge itself just
    /// emitted. Applying it would ping-pong between the widget and the
    /// host forever; surfacing the misuse beats looping silently.
    pub(crate) fn guard_against_echo(&self, value: &Value) -> Result<(), BridgeError> {
        if let (Value::Document(delta), Some(last)) = (value, self.last_emitted) {
            if delta.token() == Some(last) {
                return Err(BridgeError::ValueEchoesChange);
            }
        }
        Ok(())
    }

    /// Replace the instance's full document state with an external value,
    /// then put the tracked selection back so the content swap does not eat
    /// the caret. One mutation call from the caller's perspective.
    pub(crate) fn push_value(&mut self, incoming: &Value) -> Result<(), BridgeError> {
        self.guard_against_echo(incoming)?;

        let selection = self.selection;
        let widget = self.widget.as_mut().ok_or(BridgeError::NoInstance)?;
        match incoming {
            Value::Document(delta) => widget.set_contents(delta, Source::Api),
            Value::Html(html) => widget.set_html(html, Source::Api),
        }
        if let Some(range) = selection {
            let clamped = range.clamped(widget.length());
            widget.set_selection(Some(clamped), Source::Silent);
        }
        self.value = incoming.clone();
        tracing::trace!(kind = ?self.value.kind(), "pushed external value into instance");
        Ok(())
    }

    /// Read the instance's content back in the tracked representation.
    /// Returns `None` when it matches the tracked value, which is the
    /// signal to suppress the notification entirely.
    pub(crate) fn pull_value(&self) -> Result<Option<Value>, BridgeError> {
        let widget = self.widget.as_ref().ok_or(BridgeError::NoInstance)?;
        let next = match self.value.kind() {
            ValueKind::Document => Value::Document(widget.get_contents()),
            ValueKind::Html => Value::Html(widget.get_html()),
        };
        if next == self.value {
            Ok(None)
        } else {
            Ok(Some(next))
        }
    }
}
