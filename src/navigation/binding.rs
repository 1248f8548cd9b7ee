use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::{NavigationError, NavigationResult};

/// Callback signature stored by a binding.
///
/// The execution context comes first, followed by the options value and the
/// optional redraw hint forwarded verbatim from `ChartNavigation::update`.
pub type UpdateFn<C, O> = dyn Fn(&C, &O, Option<bool>) -> NavigationResult<()>;

/// One subsystem's registered interest in configuration updates.
///
/// The context is held weakly: the chart owns its registry, not the other way
/// around.
pub struct UpdateBinding<C, O> {
    context: Weak<C>,
    update: Rc<UpdateFn<C, O>>,
}

impl<C, O> UpdateBinding<C, O> {
    pub(super) fn new(context: Weak<C>, update: Rc<UpdateFn<C, O>>) -> Self {
        Self { context, update }
    }

    /// Returns the execution context while its owner is still alive.
    #[must_use]
    pub fn context(&self) -> Option<Rc<C>> {
        self.context.upgrade()
    }

    /// Runs the callback with its stored context as receiver.
    ///
    /// `index` is only used to report a released context.
    pub fn invoke(&self, index: usize, options: &O, redraw: Option<bool>) -> NavigationResult<()> {
        let context = self
            .context
            .upgrade()
            .ok_or(NavigationError::ContextReleased { index })?;
        (self.update)(&context, options, redraw)
    }
}

impl<C, O> Clone for UpdateBinding<C, O> {
    fn clone(&self) -> Self {
        Self {
            context: Weak::clone(&self.context),
            update: Rc::clone(&self.update),
        }
    }
}

impl<C, O> fmt::Debug for UpdateBinding<C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateBinding")
            .field("context_alive", &(self.context.strong_count() > 0))
            .finish_non_exhaustive()
    }
}
