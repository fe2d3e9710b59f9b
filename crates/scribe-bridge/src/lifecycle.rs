//! Lifecycle reconciliation: create, destroy, regenerate, or leave alone.
//!
//! The host drives the bridge through discrete lifecycle calls:
//! [`mount`](EditorBridge::mount) once, [`should_update`](EditorBridge::should_update)
//! plus [`apply_update`](EditorBridge::apply_update) on every re-render, and
//! [`unmount`](EditorBridge::unmount) at teardown. `apply_update` folds the
//! host's pre-commit and post-commit phases into one synchronous pass:
//! snapshot and destroy happen before the configuration is adopted, so the
//! subsequent render mounts a fresh container; recreation and restore happen
//! after.

use scribe_delta::{Delta, Range, Source};

use crate::bridge::EditorBridge;
use crate::config::EditorConfig;
use crate::error::BridgeError;
use crate::widget::{Container, RichTextWidget, WidgetFactory};

/// Content and selection captured immediately before a regeneration
/// destroys the instance, consumed immediately after the replacement is
/// created. Never outlives one regeneration cycle.
#[derive(Debug, Clone)]
pub struct RegenerationSnapshot {
    pub contents: Delta,
    pub selection: Option<Range>,
}

/// What a lifecycle pass actually did, for callers that care.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// A classified key differed, so the pass went beyond in-place
    /// reconciliation.
    pub rerendered: bool,
    /// The instance was destroyed and recreated.
    pub regenerated: bool,
    /// A differing external value was pushed into the instance.
    pub value_pushed: bool,
    /// The read-only flag was applied in place.
    pub read_only_toggled: bool,
}

impl<F: WidgetFactory> EditorBridge<F> {
    /// Construct the widget instance and load the current value into it.
    pub fn mount(&mut self) -> Result<(), BridgeError> {
        self.instantiate()?;
        let seed = self.value.clone();
        self.push_value(&seed)
    }

    /// Destroy the live instance. Unmounting twice, like mounting twice, is
    /// a programming error.
    pub fn unmount(&mut self) -> Result<(), BridgeError> {
        self.destroy()
    }

    /// The pre-update decision: does this configuration warrant a pass at
    /// all? True when a regeneration is already underway, or when any
    /// classified key differs from the active configuration by deep
    /// equality.
    pub fn should_update(&self, next: &EditorConfig) -> bool {
        if self.generation != self.committed_generation {
            return true;
        }
        self.config.update_keys_differ(next)
    }

    /// Whether adopting `next` invalidates the live instance entirely.
    pub fn needs_regeneration(&self, next: &EditorConfig) -> bool {
        self.config.regeneration_keys_differ(next)
    }

    /// Run one full lifecycle pass against the next configuration.
    ///
    /// Value and read-only reconciliation are not render-triggering: they
    /// apply in place even when every classified key is unchanged. The
    /// generation check keeps both out of an open regeneration window.
    pub fn apply_update(&mut self, next: EditorConfig) -> Result<UpdateReport, BridgeError> {
        next.validate()?;

        let mut report = UpdateReport::default();

        if self.mode == crate::sync::ControlMode::Controlled {
            if let Some(incoming) = next.value.clone() {
                if incoming != self.value {
                    if self.widget.is_some() && self.generation == self.committed_generation {
                        self.push_value(&incoming)?;
                        report.value_pushed = true;
                    } else if self.widget.is_none() {
                        // Not mounted yet: adopt the value so mount seeds
                        // the latest one, not the construction-time one.
                        self.guard_against_echo(&incoming)?;
                        self.value = incoming;
                    }
                }
            }
        }
        if self.widget.is_some() && self.generation == self.committed_generation {
            if next.read_only != self.config.read_only {
                let enabled = !next.read_only;
                if let Some(widget) = self.widget.as_mut() {
                    tracing::debug!(enabled, "applying read-only flag in place");
                    widget.enable(enabled);
                    report.read_only_toggled = true;
                }
            }
        }

        if !self.should_update(&next) {
            tracing::trace!("update needs no render pass, no classified key changed");
            self.config = next;
            return Ok(report);
        }
        report.rerendered = true;

        // Nothing mounted: just adopt the configuration. mount() will pick
        // it up.
        if self.widget.is_none() {
            self.config = next;
            return Ok(report);
        }

        // Pre-commit: a structural change invalidates the instance. Capture
        // its state and tear it down synchronously so the render pass that
        // follows mounts a fresh container under the bumped generation key.
        if self.needs_regeneration(&next) {
            let snapshot = {
                let widget = self.widget()?;
                RegenerationSnapshot {
                    contents: widget.get_contents(),
                    selection: widget.get_selection(),
                }
            };
            self.snapshot = Some(snapshot);
            self.generation += 1;
            tracing::debug!(generation = self.generation, "regenerating widget instance");
            self.destroy()?;
        }

        // The re-render adopts the next configuration.
        self.config = next;

        // Post-commit: a bumped generation means a fresh container was
        // mounted; bind a new instance to it and hand back what the old
        // one held.
        if self.generation != self.committed_generation {
            self.instantiate()?;
            // The snapshot must not outlive this cycle.
            if let Some(snapshot) = self.snapshot.take() {
                let widget = self.widget_mut()?;
                widget.set_contents(&snapshot.contents, Source::Api);
                if let Some(range) = snapshot.selection {
                    let clamped = range.clamped(widget.length());
                    widget.set_selection(Some(clamped), Source::Silent);
                    widget.focus();
                }
                self.selection = snapshot.selection;
            }
            self.committed_generation = self.generation;
            report.regenerated = true;
        }

        Ok(report)
    }

    /// Create the instance against the generation-keyed container. Fails
    /// loudly if one is already live.
    pub(crate) fn instantiate(&mut self) -> Result<(), BridgeError> {
        if self.widget.is_some() {
            return Err(BridgeError::AlreadyInstantiated);
        }
        let container = Container {
            key: self.generation,
            area: self.config.editing_area(),
        };
        let options = self.config.widget_options();
        tracing::debug!(generation = self.generation, "creating widget instance");
        self.widget = Some(self.factory.create(&container, &options));
        self.attached = true;
        Ok(())
    }

    /// Destroy the live instance. Detaches event routing first, so no
    /// notification can ever be processed against a destroyed handle.
    pub(crate) fn destroy(&mut self) -> Result<(), BridgeError> {
        if self.widget.is_none() {
            return Err(BridgeError::NoInstance);
        }
        self.attached = false;
        self.widget = None;
        tracing::debug!(generation = self.generation, "destroyed widget instance");
        Ok(())
    }
}
