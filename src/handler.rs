use std::fmt;
use std::sync::Arc;

use crate::vartype::Arguments;

/// A route endpoint. Handlers receive the coerced placeholder values of the
/// matched request, keyed by name in template order.
pub trait Handler<R>: Send + Sync {
    fn call(&self, args: &Arguments) -> R;
}

impl<F, R> Handler<R> for F
where
    F: Fn(&Arguments) -> R + Send + Sync,
{
    fn call(&self, args: &Arguments) -> R {
        self(args)
    }
}

/// Outcome of a successful lookup: the bound handler and its arguments.
pub struct DispatchResult<H> {
    handler: Arc<H>,
    arguments: Arguments,
    position: usize,
}

impl<H> DispatchResult<H> {
    pub(crate) fn new(handler: Arc<H>, arguments: Arguments, position: usize) -> Self {
        Self {
            handler,
            arguments,
            position,
        }
    }

    pub fn handler(&self) -> &Arc<H> {
        &self.handler
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// Position of the matched route in the table.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn into_parts(self) -> (Arc<H>, Arguments) {
        (self.handler, self.arguments)
    }

    pub fn invoke<R>(&self) -> R
    where
        H: Handler<R>,
    {
        Handler::call(&*self.handler, &self.arguments)
    }
}

impl<H> fmt::Debug for DispatchResult<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchResult")
            .field("position", &self.position)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}
