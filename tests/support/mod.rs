#![allow(dead_code)]

use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

use chart_navigation::{ChartNavigation, NavigationHost, NavigationResult};
use serde_json::Value;

/// Minimal chart host carrying only the navigation slot.
#[derive(Default)]
pub struct TestChart {
    pub name: &'static str,
    navigation: OnceCell<ChartNavigation<TestChart, Value>>,
}

impl TestChart {
    pub fn shared(name: &'static str) -> Rc<Self> {
        Rc::new(Self {
            name,
            navigation: OnceCell::new(),
        })
    }
}

impl NavigationHost for TestChart {
    type Options = Value;

    fn navigation_slot(&self) -> &OnceCell<ChartNavigation<Self, Value>> {
        &self.navigation
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub label: &'static str,
    pub chart: *const TestChart,
    pub options: Value,
    pub redraw: Option<bool>,
}

pub type CallLog = Rc<RefCell<Vec<RecordedCall>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Builds an update callback that records every invocation under `label`.
pub fn recording_update(
    label: &'static str,
    log: &CallLog,
) -> impl Fn(&TestChart, &Value, Option<bool>) -> NavigationResult<()> + 'static {
    let log = Rc::clone(log);
    move |chart: &TestChart, options: &Value, redraw: Option<bool>| {
        log.borrow_mut().push(RecordedCall {
            label,
            chart: chart as *const TestChart,
            options: options.clone(),
            redraw,
        });
        Ok(())
    }
}

pub fn labels(log: &CallLog) -> Vec<&'static str> {
    log.borrow().iter().map(|call| call.label).collect()
}
