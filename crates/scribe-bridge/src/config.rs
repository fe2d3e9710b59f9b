//! Recognized configuration options and prop classification.
//!
//! Configuration keys fall into two disjoint sets with respect to updates:
//!
//! - *regeneration-triggering* keys invalidate the live widget instance
//!   entirely (engine configuration, supported formats, layout bounds,
//!   visual theme, the editing-area child);
//! - *in-place-updatable* keys can be applied without destroying the
//!   instance (container id/class/style, read-only flag, placeholder, tab
//!   order). Event callback bindings are held separately and are always
//!   updatable in place.
//!
//! Any other key is inert for the update decision. Value synchronization is
//! its own path and does not go through classification.

use std::collections::BTreeMap;

use smol_str::SmolStr;

use scribe_delta::Value;

use crate::error::BridgeError;
use crate::widget::WidgetOptions;

/// Element tags that cannot host a rich-text editing surface.
const INCOMPATIBLE_AREA_TAGS: &[&str] = &["input", "textarea", "select", "button"];

/// CSS class every container carries, merged with the caller's class.
const BASE_CLASS: &str = "scribe";

/// Description of the element the widget instance mounts into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingArea {
    pub tag: SmolStr,
    pub id: Option<SmolStr>,
    pub class_name: Option<SmolStr>,
}

impl EditingArea {
    pub fn new(tag: impl Into<SmolStr>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            class_name: None,
        }
    }
}

/// A child supplied for the editing area. Only a single element child is
/// acceptable; text children cannot host the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaChild {
    Element(EditingArea),
    Text(SmolStr),
}

/// Options that used to exist on the public surface and were removed.
///
/// They are rejected with a descriptive error at validation time rather
/// than silently ignored, so stale call sites surface during development.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemovedOptions {
    pub toolbar: Option<serde_json::Value>,
    pub styles: Option<serde_json::Value>,
    pub poll_interval: Option<u64>,
}

impl RemovedOptions {
    fn check(&self) -> Result<(), BridgeError> {
        if self.toolbar.is_some() {
            return Err(BridgeError::RemovedOption {
                name: "toolbar",
                hint: "configure the toolbar through the `modules` option",
            });
        }
        if self.styles.is_some() {
            return Err(BridgeError::RemovedOption {
                name: "styles",
                hint: "use `class_name`/`style` with a stylesheet",
            });
        }
        if self.poll_interval.is_some() {
            return Err(BridgeError::RemovedOption {
                name: "poll_interval",
                hint: "the widget reports changes through its own events, polling no longer exists",
            });
        }
        Ok(())
    }
}

/// The full recognized configuration surface of the bridge component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorConfig {
    pub bounds: Option<SmolStr>,
    pub children: Vec<AreaChild>,
    pub class_name: Option<SmolStr>,
    pub default_value: Option<Value>,
    pub formats: Option<Vec<SmolStr>>,
    pub id: Option<SmolStr>,
    pub modules: BTreeMap<SmolStr, serde_json::Value>,
    pub placeholder: Option<SmolStr>,
    pub preserve_whitespace: bool,
    pub read_only: bool,
    pub scrolling_container: Option<SmolStr>,
    pub style: Option<SmolStr>,
    pub tab_index: Option<i32>,
    pub theme: Option<SmolStr>,
    pub value: Option<Value>,
    pub removed: RemovedOptions,
}

impl EditorConfig {
    /// Reject configurations the bridge cannot honor. Called on
    /// construction and on every update, before any instance is touched.
    pub fn validate(&self) -> Result<(), BridgeError> {
        self.removed.check()?;

        match self.children.len() {
            0 | 1 => {}
            n => return Err(BridgeError::EditingAreaConflict(n)),
        }
        if let Some(child) = self.children.first() {
            match child {
                AreaChild::Text(_) => {
                    return Err(BridgeError::InvalidEditingArea(
                        "the editing area must be an element, not a text node".to_owned(),
                    ));
                }
                AreaChild::Element(area) => {
                    if INCOMPATIBLE_AREA_TAGS.contains(&area.tag.as_str()) {
                        return Err(BridgeError::InvalidEditingArea(format!(
                            "<{}> cannot host the editing surface",
                            area.tag
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// True when any regeneration-triggering key differs by deep equality.
    pub fn regeneration_keys_differ(&self, next: &Self) -> bool {
        self.modules != next.modules
            || self.formats != next.formats
            || self.bounds != next.bounds
            || self.theme != next.theme
            || self.children != next.children
    }

    /// True when any key in either classified set differs by deep equality.
    pub fn update_keys_differ(&self, next: &Self) -> bool {
        self.regeneration_keys_differ(next)
            || self.id != next.id
            || self.class_name != next.class_name
            || self.style != next.style
            || self.read_only != next.read_only
            || self.placeholder != next.placeholder
            || self.tab_index != next.tab_index
    }

    /// The engine-facing subset of the configuration.
    pub fn widget_options(&self) -> WidgetOptions {
        WidgetOptions {
            bounds: self.bounds.clone(),
            formats: self.formats.clone(),
            modules: self.modules.clone(),
            placeholder: self.placeholder.clone(),
            read_only: self.read_only,
            scrolling_container: self.scrolling_container.clone(),
            tab_index: self.tab_index,
            theme: self.theme.clone(),
        }
    }

    /// The element the widget mounts into: the supplied element child, or a
    /// synthesized default. Assumes [`validate`](Self::validate) passed.
    pub fn editing_area(&self) -> EditingArea {
        for child in &self.children {
            if let AreaChild::Element(area) = child {
                return area.clone();
            }
        }
        // Whitespace-preserving content needs a <pre> surface.
        EditingArea::new(if self.preserve_whitespace { "pre" } else { "div" })
    }

    /// Merged CSS class for the container.
    pub fn container_class(&self) -> String {
        match &self.class_name {
            Some(class) => format!("{BASE_CLASS} {class}"),
            None => BASE_CLASS.to_owned(),
        }
    }
}

/// Everything the host needs to render the container element.
///
/// `key` changes exactly when the bridge regenerates, forcing the host to
/// replace the container subtree instead of patching it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerProps {
    pub key: u64,
    pub tag: SmolStr,
    pub id: Option<SmolStr>,
    pub class_name: String,
    pub style: Option<SmolStr>,
    pub tab_index: Option<i32>,
}
