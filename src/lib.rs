//! chart-navigation: per-chart `update()` fan-out for chart subsystems.
//!
//! Exporting controls and navigation bindings each register their own
//! "apply options" callback on the chart they belong to. The chart's update
//! path then calls one `update(options, redraw)` and every registered
//! subsystem receives it, in registration order, without the chart knowing
//! which subsystems exist.

pub mod error;
pub mod navigation;
pub mod options;
pub mod telemetry;

pub use error::{NavigationError, NavigationResult};
pub use navigation::{
    ChartNavigation, NavigationHost, UpdateBinding, add_update, init_update, navigation,
};
pub use options::{ButtonAlign, ButtonVerticalAlign, NavigationButtonOptions, NavigationOptions};
