//! Lazy per-chart navigation registry.
//!
//! Subsystems call [`add_update`] while they set themselves up; the chart's
//! own update path later calls [`ChartNavigation::update`] on the registry
//! returned by [`navigation`].

mod binding;
mod dispatch;

use std::cell::OnceCell;
use std::rc::Rc;

use tracing::trace;

use crate::error::NavigationResult;

pub use binding::{UpdateBinding, UpdateFn};
pub use dispatch::ChartNavigation;

/// Chart-like object able to carry one navigation registry.
///
/// The registry lives in the slot for the whole lifetime of the host and is
/// never replaced.
pub trait NavigationHost: Sized {
    /// Options value forwarded to every registered update callback.
    type Options;

    fn navigation_slot(&self) -> &OnceCell<ChartNavigation<Self, Self::Options>>;
}

fn ensure_navigation<C: NavigationHost>(chart: &C) -> &ChartNavigation<C, C::Options> {
    chart.navigation_slot().get_or_init(|| {
        trace!("attach chart navigation registry");
        ChartNavigation::new()
    })
}

/// Attaches an empty registry to `chart` unless it already has one.
pub fn init_update<C: NavigationHost>(chart: &C) {
    ensure_navigation(chart);
}

/// Registers an `update()` callback invoked with `chart` as its context.
///
/// Registering the same callback twice yields two bindings.
pub fn add_update<C, F>(update: F, chart: &Rc<C>)
where
    C: NavigationHost + 'static,
    C::Options: 'static,
    F: Fn(&C, &C::Options, Option<bool>) -> NavigationResult<()> + 'static,
{
    let update: Rc<UpdateFn<C, C::Options>> = Rc::new(update);
    ensure_navigation(chart.as_ref()).push(UpdateBinding::new(Rc::downgrade(chart), update));
}

/// Returns the registry attached to `chart`, if any.
#[must_use]
pub fn navigation<C: NavigationHost>(chart: &C) -> Option<&ChartNavigation<C, C::Options>> {
    chart.navigation_slot().get()
}
