//! scribe-bridge: reconciles an imperative rich-text widget with a
//! declarative, re-render-driven component model.
//!
//! The widget owns its editing surface and mutates it directly; the hosting
//! framework expects to re-derive everything from configuration on every
//! update. This crate sits between the two and decides, on each lifecycle
//! pass, whether the live widget instance can be updated in place or must be
//! torn down and rebuilt - staging content through the rebuild so nothing is
//! lost.
//!
//! # Architecture
//!
//! - `bridge`: the [`EditorBridge`] component state and imperative surface
//! - `lifecycle`: mount/update/unmount reconciliation and regeneration
//! - `sync`: controlled/self-managed value synchronization
//! - `events`: change and selection notification normalization
//! - `config`: recognized options, prop classification, validation
//! - `widget`: the trait seam to the external editing engine
//!
//! # Re-exports
//!
//! `scribe-delta` is re-exported so consumers only need this crate.

pub use scribe_delta;
pub use scribe_delta::*;

pub mod bridge;
pub mod config;
pub mod error;
pub mod events;
pub mod lifecycle;
pub mod sync;
pub mod widget;

pub use bridge::EditorBridge;
pub use config::{
    AreaChild, ContainerProps, EditingArea, EditorConfig, RemovedOptions,
};
pub use error::BridgeError;
pub use events::{
    ChangeHandler, EditorEvents, KeyEvent, KeyHandler, KeyPhase, SelectionHandler,
};
pub use lifecycle::UpdateReport;
pub use sync::ControlMode;
pub use widget::{Container, EditorView, RichTextWidget, WidgetFactory, WidgetOptions};
