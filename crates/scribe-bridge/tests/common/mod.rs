//! Shared test double: a recording widget engine.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use scribe_bridge::{
    Container, Delta, EditorBridge, EditorConfig, EditorEvents, Range, RichTextWidget, Source,
    WidgetFactory, WidgetOptions,
};

/// Every trait call a widget instance receives, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetCall {
    Created { id: u64, generation: u64 },
    SetContents { id: u64 },
    SetHtml { id: u64 },
    SetSelection { id: u64, range: Option<Range> },
    Focus { id: u64 },
    Enable { id: u64, enabled: bool },
    Destroyed { id: u64 },
}

pub type CallLog = Rc<RefCell<Vec<WidgetCall>>>;

#[derive(Debug, Default)]
struct MockState {
    contents: Delta,
    html: String,
    selection: Option<Range>,
    enabled: bool,
}

/// A fake editing engine that renders structured content as its plain text
/// and treats incoming markup as opaque text.
pub struct MockWidget {
    pub id: u64,
    state: MockState,
    log: CallLog,
}

impl MockWidget {
    /// Mutate the document as if the user typed. Not an API mutation, so
    /// nothing is logged.
    pub fn simulate_user_edit(&mut self, html: &str, contents: Delta) {
        self.state.html = html.to_owned();
        self.state.contents = contents;
    }

    /// Place a selection as if the user clicked, without logging.
    pub fn simulate_selection(&mut self, range: Option<Range>) {
        self.state.selection = range;
    }

    pub fn enabled(&self) -> bool {
        self.state.enabled
    }
}

impl RichTextWidget for MockWidget {
    fn get_contents(&self) -> Delta {
        self.state.contents.clone()
    }

    fn set_contents(&mut self, contents: &Delta, _source: Source) {
        self.log
            .borrow_mut()
            .push(WidgetCall::SetContents { id: self.id });
        self.state.contents = contents.clone();
        self.state.html = contents.plain_text();
    }

    fn get_html(&self) -> String {
        self.state.html.clone()
    }

    fn set_html(&mut self, html: &str, _source: Source) {
        self.log.borrow_mut().push(WidgetCall::SetHtml { id: self.id });
        self.state.html = html.to_owned();
        self.state.contents = Delta::new().insert(html);
    }

    fn get_selection(&self) -> Option<Range> {
        self.state.selection
    }

    fn set_selection(&mut self, range: Option<Range>, _source: Source) {
        self.log.borrow_mut().push(WidgetCall::SetSelection {
            id: self.id,
            range,
        });
        self.state.selection = range;
    }

    fn focus(&mut self) {
        self.log.borrow_mut().push(WidgetCall::Focus { id: self.id });
    }

    fn enable(&mut self, enabled: bool) {
        self.log.borrow_mut().push(WidgetCall::Enable {
            id: self.id,
            enabled,
        });
        self.state.enabled = enabled;
    }

    fn length(&self) -> usize {
        // The engine always keeps a trailing newline.
        self.state.contents.plain_text().chars().count() + 1
    }
}

impl Drop for MockWidget {
    fn drop(&mut self) {
        self.log
            .borrow_mut()
            .push(WidgetCall::Destroyed { id: self.id });
    }
}

pub struct MockFactory {
    log: CallLog,
    next_id: u64,
}

impl MockFactory {
    pub fn new() -> (Self, CallLog) {
        let log: CallLog = Rc::default();
        (
            Self {
                log: log.clone(),
                next_id: 1,
            },
            log,
        )
    }
}

impl WidgetFactory for MockFactory {
    type Widget = MockWidget;

    fn create(&mut self, container: &Container, options: &WidgetOptions) -> MockWidget {
        let id = self.next_id;
        self.next_id += 1;
        self.log.borrow_mut().push(WidgetCall::Created {
            id,
            generation: container.key,
        });
        MockWidget {
            id,
            state: MockState {
                enabled: !options.read_only,
                ..MockState::default()
            },
            log: self.log.clone(),
        }
    }
}

/// Bridge over a fresh mock engine, plus the shared call log.
pub fn new_bridge(
    config: EditorConfig,
    events: EditorEvents,
) -> (EditorBridge<MockFactory>, CallLog) {
    let (factory, log) = MockFactory::new();
    let bridge = EditorBridge::new(factory, config, events).expect("valid config");
    (bridge, log)
}

pub fn count(log: &CallLog, pred: impl Fn(&WidgetCall) -> bool) -> usize {
    log.borrow().iter().filter(|call| pred(call)).count()
}

pub fn creates(log: &CallLog) -> usize {
    count(log, |call| matches!(call, WidgetCall::Created { .. }))
}

pub fn destroys(log: &CallLog) -> usize {
    count(log, |call| matches!(call, WidgetCall::Destroyed { .. }))
}

pub fn content_sets(log: &CallLog) -> usize {
    count(log, |call| {
        matches!(call, WidgetCall::SetContents { .. } | WidgetCall::SetHtml { .. })
    })
}
