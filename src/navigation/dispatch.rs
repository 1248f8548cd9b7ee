use std::cell::RefCell;
use std::fmt;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::error::NavigationResult;

use super::UpdateBinding;

type BindingList<C, O> = SmallVec<[UpdateBinding<C, O>; 2]>;

/// Per-chart dispatch registry delegating `update()` to every registered
/// subsystem.
///
/// The binding sequence is append-only and keeps registration order.
pub struct ChartNavigation<C, O> {
    updates: RefCell<BindingList<C, O>>,
}

impl<C, O> ChartNavigation<C, O> {
    #[must_use]
    pub(super) fn new() -> Self {
        Self {
            updates: RefCell::new(SmallVec::new()),
        }
    }

    pub(super) fn push(&self, binding: UpdateBinding<C, O>) {
        let mut updates = self.updates.borrow_mut();
        updates.push(binding);
        trace!(count = updates.len(), "register navigation update");
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.updates.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.updates.borrow().is_empty()
    }

    /// Copy of the binding sequence in registration order.
    #[must_use]
    pub fn bindings(&self) -> Vec<UpdateBinding<C, O>> {
        self.updates.borrow().to_vec()
    }

    /// Forwards `options` and `redraw` to every binding in registration order.
    ///
    /// The sequence is snapshotted first: bindings registered by a callback
    /// are invoked from the next call on. The first failing binding aborts
    /// the remaining dispatch and its error is returned unchanged.
    pub fn update(&self, options: &O, redraw: Option<bool>) -> NavigationResult<()> {
        let snapshot: BindingList<C, O> = self.updates.borrow().clone();
        trace!(count = snapshot.len(), ?redraw, "dispatch navigation update");

        for (index, binding) in snapshot.iter().enumerate() {
            if let Err(err) = binding.invoke(index, options, redraw) {
                debug!(
                    index,
                    remaining = snapshot.len() - index - 1,
                    error = %err,
                    "navigation update aborted"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}

impl<C, O> fmt::Debug for ChartNavigation<C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartNavigation")
            .field("updates", &self.updates.borrow().len())
            .finish()
    }
}
