//! Change-event normalization.
//!
//! Raw widget notifications arrive here. Notifications that do not
//! represent a real change are suppressed entirely (no callback, no state
//! write); real changes update the tracked state and fan out to the
//! caller's handlers. Focus and blur are not separate widget events: they
//! are derived from the selection going from absent to present and back.

use smol_str::SmolStr;

use scribe_delta::{Delta, Range, Source};

use crate::bridge::EditorBridge;
use crate::error::BridgeError;
use crate::widget::{EditorView, WidgetFactory};

/// Handler for content changes: (new value, change payload, origin,
/// read-only view of the editor).
pub type ChangeHandler = Box<dyn FnMut(&scribe_delta::Value, &Delta, Source, &EditorView)>;

/// Handler for selection, focus, and blur notifications. Selection-change
/// receives the new range; focus receives the gained range; blur receives
/// the range that was lost.
pub type SelectionHandler = Box<dyn FnMut(Option<&Range>, Source, &EditorView)>;

/// Handler for keyboard events forwarded from the container element.
pub type KeyHandler = Box<dyn FnMut(&KeyEvent)>;

/// A keyboard event on the editing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: SmolStr,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl KeyEvent {
    pub fn of(key: impl Into<SmolStr>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            alt: false,
            shift: false,
            meta: false,
        }
    }
}

/// Which keyboard phase a forwarded event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    Down,
    Press,
    Up,
}

/// External callback bindings. All optional; all swappable in place.
#[derive(Default)]
pub struct EditorEvents {
    pub on_change: Option<ChangeHandler>,
    pub on_change_selection: Option<SelectionHandler>,
    pub on_focus: Option<SelectionHandler>,
    pub on_blur: Option<SelectionHandler>,
    pub on_key_down: Option<KeyHandler>,
    pub on_key_press: Option<KeyHandler>,
    pub on_key_up: Option<KeyHandler>,
}

impl std::fmt::Debug for EditorEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorEvents")
            .field("on_change", &self.on_change.is_some())
            .field("on_change_selection", &self.on_change_selection.is_some())
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("on_key_down", &self.on_key_down.is_some())
            .field("on_key_press", &self.on_key_press.is_some())
            .field("on_key_up", &self.on_key_up.is_some())
            .finish()
    }
}

impl<F: WidgetFactory> EditorBridge<F> {
    /// Route a raw content-change notification from the widget.
    ///
    /// The next content is pulled from the instance in the tracked
    /// representation. When it matches the tracked value the notification
    /// is internal churn and gets dropped; otherwise the change payload is
    /// stamped as the loop-guard token, tracked state moves forward, and
    /// `on_change` fires.
    pub fn notify_text_change(&mut self, mut delta: Delta, source: Source) -> Result<(), BridgeError> {
        if !self.attached {
            return Err(BridgeError::NoInstance);
        }
        let Some(next) = self.pull_value()? else {
            tracing::trace!(%source, "change notification suppressed, contents unchanged");
            return Ok(());
        };

        let token = self.tokens.mint();
        delta.stamp(token);
        self.last_emitted = Some(token);
        self.value = next;
        tracing::debug!(%source, "content changed");

        let view = EditorView::capture(self.widget()?);
        if let Some(on_change) = self.events.on_change.as_mut() {
            on_change(&self.value, &delta, source, &view);
        }
        Ok(())
    }

    /// Route a raw selection-change notification from the widget.
    ///
    /// Deep-equal selections are suppressed. A real change fires
    /// `on_change_selection`, then derives exactly one of focus (no
    /// previous selection, a new one) or blur (a previous selection, none
    /// now) - blur hands the handler the range that was lost, not `None`.
    pub fn notify_selection_change(
        &mut self,
        range: Option<Range>,
        source: Source,
    ) -> Result<(), BridgeError> {
        if !self.attached {
            return Err(BridgeError::NoInstance);
        }
        if range == self.selection {
            tracing::trace!(%source, "selection notification suppressed, unchanged");
            return Ok(());
        }

        let previous = self.selection;
        self.selection = range;
        tracing::debug!(%source, ?previous, next = ?range, "selection changed");

        let view = EditorView::capture(self.widget()?);
        if let Some(on_change_selection) = self.events.on_change_selection.as_mut() {
            on_change_selection(range.as_ref(), source, &view);
        }
        if previous.is_none() && range.is_some() {
            if let Some(on_focus) = self.events.on_focus.as_mut() {
                on_focus(range.as_ref(), source, &view);
            }
        } else if previous.is_some() && range.is_none() {
            if let Some(on_blur) = self.events.on_blur.as_mut() {
                on_blur(previous.as_ref(), source, &view);
            }
        }
        Ok(())
    }

    /// Forward a keyboard event from the container element.
    pub fn notify_key(&mut self, phase: KeyPhase, event: &KeyEvent) {
        let handler = match phase {
            KeyPhase::Down => self.events.on_key_down.as_mut(),
            KeyPhase::Press => self.events.on_key_press.as_mut(),
            KeyPhase::Up => self.events.on_key_up.as_mut(),
        };
        if let Some(handler) = handler {
            handler(event);
        }
    }
}
