use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

use crate::enums::{HTTP_METHOD_COUNT, HttpMethod, MethodSet};
use crate::pattern::CompiledTemplate;

type MethodHandlers<H> = SmallVec<[(HttpMethod, Arc<H>); HTTP_METHOD_COUNT]>;

/// A compiled template and the handlers bound to it, one per method, in the
/// order the methods were first registered.
pub struct Route<H> {
    template: CompiledTemplate,
    handlers: MethodHandlers<H>,
}

impl<H> Route<H> {
    pub(crate) fn new(template: CompiledTemplate) -> Self {
        Self {
            template,
            handlers: SmallVec::new(),
        }
    }

    /// Binds `handler` to `method`, replacing any previous binding in place.
    /// Returns `true` when a binding was replaced.
    pub(crate) fn bind(&mut self, method: HttpMethod, handler: Arc<H>) -> bool {
        if let Some(slot) = self.handlers.iter_mut().find(|(m, _)| *m == method) {
            slot.1 = handler;
            return true;
        }
        self.handlers.push((method, handler));
        false
    }

    pub fn template(&self) -> &CompiledTemplate {
        &self.template
    }

    pub fn handler(&self, method: HttpMethod) -> Option<&Arc<H>> {
        self.handlers
            .iter()
            .find(|(m, _)| *m == method)
            .map(|(_, h)| h)
    }

    /// Methods in registration order.
    pub fn methods(&self) -> impl Iterator<Item = HttpMethod> + '_ {
        self.handlers.iter().map(|(m, _)| *m)
    }

    pub fn allowed(&self) -> MethodSet {
        self.methods().collect()
    }

    /// `"<template> <METHOD,METHOD>"`, the line printed by route diagnostics.
    pub fn describe(&self) -> String {
        let methods = self
            .methods()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(",");
        format!("{} {}", self.template.normalized(), methods)
    }
}

impl<H> fmt::Debug for Route<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("template", &self.template.normalized())
            .field("source", &self.template.source())
            .field("methods", &self.methods().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::compile_template;

    #[test]
    fn rebinding_a_method_keeps_its_position() {
        let mut route = Route::new(compile_template("/ping", true).unwrap());
        assert!(!route.bind(HttpMethod::Post, Arc::new(1)));
        assert!(!route.bind(HttpMethod::Get, Arc::new(2)));
        assert!(route.bind(HttpMethod::Post, Arc::new(3)));

        assert_eq!(
            route.methods().collect::<Vec<_>>(),
            vec![HttpMethod::Post, HttpMethod::Get]
        );
        assert_eq!(route.handler(HttpMethod::Post).map(|h| **h), Some(3));
        assert_eq!(route.describe(), "/ping POST,GET");
        assert_eq!(route.allowed(), MethodSet::GET | MethodSet::POST);
    }
}
