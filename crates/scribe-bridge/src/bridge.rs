//! The bridge component: state, construction, and the imperative surface.
//!
//! [`EditorBridge`] owns the single live widget instance (when one exists),
//! the tracked value and selection, and the generation counter. The three
//! cooperating responsibilities are split across sibling modules:
//! lifecycle reconciliation in [`crate::lifecycle`], value synchronization
//! in [`crate::sync`], and notification normalization in [`crate::events`].

use scribe_delta::{ChangeToken, Range, TokenSource, Value};

use crate::config::{ContainerProps, EditorConfig};
use crate::error::BridgeError;
use crate::events::EditorEvents;
use crate::lifecycle::RegenerationSnapshot;
use crate::sync::ControlMode;
use crate::widget::{RichTextWidget, WidgetFactory};

/// Binds one widget instance to one declarative component.
pub struct EditorBridge<F: WidgetFactory> {
    pub(crate) factory: F,
    pub(crate) config: EditorConfig,
    pub(crate) events: EditorEvents,

    /// Ownership slot for the live instance. Presence here is the sole
    /// source of truth for "is a widget live".
    pub(crate) widget: Option<F::Widget>,
    /// Whether widget notifications are routed into the normalizer.
    /// Cleared before destruction, set after creation.
    pub(crate) attached: bool,

    pub(crate) mode: ControlMode,
    pub(crate) value: Value,
    pub(crate) selection: Option<Range>,

    /// Re-render key for the container; bumping it forces the host to
    /// rebuild the container subtree.
    pub(crate) generation: u64,
    /// Generation the last completed lifecycle pass committed. While it
    /// trails `generation`, a regeneration is underway.
    pub(crate) committed_generation: u64,
    pub(crate) snapshot: Option<RegenerationSnapshot>,

    pub(crate) tokens: TokenSource,
    pub(crate) last_emitted: Option<ChangeToken>,
}

impl<F: WidgetFactory> EditorBridge<F> {
    /// Build an unmounted bridge. Fails when the configuration uses removed
    /// options or supplies an unusable editing area.
    ///
    /// The control mode is latched here for the component's lifetime: a
    /// caller that supplies `value` gets an externally-controlled bridge, a
    /// caller that does not gets a self-managed one seeded from
    /// `default_value`.
    pub fn new(
        factory: F,
        config: EditorConfig,
        events: EditorEvents,
    ) -> Result<Self, BridgeError> {
        config.validate()?;

        let (mode, value) = match &config.value {
            Some(value) => (ControlMode::Controlled, value.clone()),
            None => (
                ControlMode::SelfManaged,
                config.default_value.clone().unwrap_or_else(Value::empty_html),
            ),
        };
        tracing::debug!(?mode, "bridge constructed");

        Ok(Self {
            factory,
            config,
            events,
            widget: None,
            attached: false,
            mode,
            value,
            selection: None,
            generation: 0,
            committed_generation: 0,
            snapshot: None,
            tokens: TokenSource::new(),
            last_emitted: None,
        })
    }

    /// The currently tracked value, in whichever representation the caller
    /// is using.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The currently tracked selection.
    pub fn selection(&self) -> Option<Range> {
        self.selection
    }

    /// The active configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The container re-render key.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn is_mounted(&self) -> bool {
        self.widget.is_some()
    }

    /// The live widget instance. Accessing it before mount (or after
    /// unmount) is a contract violation.
    pub fn widget(&self) -> Result<&F::Widget, BridgeError> {
        self.widget.as_ref().ok_or(BridgeError::NoInstance)
    }

    /// Mutable access to the live widget instance.
    pub fn widget_mut(&mut self) -> Result<&mut F::Widget, BridgeError> {
        self.widget.as_mut().ok_or(BridgeError::NoInstance)
    }

    /// Replace the event callback bindings. Callbacks are always updatable
    /// in place; swapping them never touches the instance.
    pub fn set_events(&mut self, events: EditorEvents) {
        self.events = events;
    }

    /// Give the editor focus. A safe no-op without a live instance.
    pub fn focus(&mut self) {
        if let Some(widget) = self.widget.as_mut() {
            widget.focus();
        }
    }

    /// Remove focus by clearing the engine's selection. Tracked state is
    /// not touched here: the engine's selection-change notification flows
    /// back through the normalizer, which is what derives the blur
    /// callback. A safe no-op without a live instance.
    pub fn blur(&mut self) {
        if let Some(widget) = self.widget.as_mut() {
            widget.set_selection(None, scribe_delta::Source::Api);
        }
    }

    /// What the host should render as the container element this pass.
    pub fn container_props(&self) -> ContainerProps {
        let area = self.config.editing_area();
        ContainerProps {
            key: self.generation,
            tag: area.tag,
            id: self.config.id.clone(),
            class_name: self.config.container_class(),
            style: self.config.style.clone(),
            tab_index: self.config.tab_index,
        }
    }
}
