//! Trait seam to the external rich-text editing engine.
//!
//! The bridge never touches the engine's document model or rendering; it
//! consumes exactly this surface. Implementations wrap whatever the real
//! engine exposes (a DOM-bound editor, an FFI handle, a test double).

use std::collections::BTreeMap;

use smol_str::SmolStr;

use scribe_delta::{Delta, Range, Source};

use crate::config::EditingArea;

/// Engine configuration derived from the recognized bridge options.
///
/// This is what gets handed to [`WidgetFactory::create`]; it carries only
/// the keys the engine itself understands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetOptions {
    pub bounds: Option<SmolStr>,
    pub formats: Option<Vec<SmolStr>>,
    pub modules: BTreeMap<SmolStr, serde_json::Value>,
    pub placeholder: Option<SmolStr>,
    pub read_only: bool,
    pub scrolling_container: Option<SmolStr>,
    pub tab_index: Option<i32>,
    pub theme: Option<SmolStr>,
}

/// The host container a widget instance is bound to.
///
/// `key` is the bridge's generation counter; a regeneration produces a
/// container with a new key, which is how the host framework knows to tear
/// the old subtree down and mount a fresh one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub key: u64,
    pub area: EditingArea,
}

/// One live editing-engine instance bound to a container.
///
/// Dropping the handle destroys the instance; the bridge detaches event
/// routing before it ever lets go of a handle, so no notification can be
/// processed against a destroyed instance.
pub trait RichTextWidget {
    /// Full document state as a structured delta.
    fn get_contents(&self) -> Delta;

    /// Replace the full document state.
    fn set_contents(&mut self, contents: &Delta, source: Source);

    /// Full document state rendered as HTML markup.
    fn get_html(&self) -> String;

    /// Replace the full document state from HTML markup.
    fn set_html(&mut self, html: &str, source: Source);

    /// Current selection, or `None` when the editor holds no selection.
    fn get_selection(&self) -> Option<Range>;

    /// Set or clear the selection. Setting a range focuses the editor.
    fn set_selection(&mut self, range: Option<Range>, source: Source);

    /// Give the editor keyboard focus.
    fn focus(&mut self);

    /// Toggle whether the editor accepts user input.
    fn enable(&mut self, enabled: bool);

    /// Document length in characters, including the trailing newline the
    /// engine maintains.
    fn length(&self) -> usize;
}

/// Creates widget instances against a container.
pub trait WidgetFactory {
    type Widget: RichTextWidget;

    fn create(&mut self, container: &Container, options: &WidgetOptions) -> Self::Widget;
}

/// Read-only snapshot of a widget instance, handed to event callbacks.
///
/// Callbacks run to completion before the next notification is dispatched,
/// so a snapshot taken at emission time is equivalent to a live read-only
/// view - without lending callbacks a borrow of the instance itself.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorView {
    pub contents: Delta,
    pub html: String,
    pub selection: Option<Range>,
    pub length: usize,
}

impl EditorView {
    pub fn capture<W: RichTextWidget>(widget: &W) -> Self {
        Self {
            contents: widget.get_contents(),
            html: widget.get_html(),
            selection: widget.get_selection(),
            length: widget.length(),
        }
    }
}
