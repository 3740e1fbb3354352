use std::fmt;

/// A request that resolved to a handler.
#[derive(Debug, Clone, Copy)]
pub struct MatchEvent<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub template: &'a str,
    pub position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissKind {
    RouteNotFound,
    MethodNotAllowed,
    Conversion,
}

/// A request that did not resolve. `template` is set once a route matched
/// structurally.
#[derive(Debug, Clone, Copy)]
pub struct MissEvent<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub template: Option<&'a str>,
    pub kind: MissKind,
}

/// Receives lookup outcomes. Both hooks default to doing nothing.
pub trait MatchObserver: Send + Sync + fmt::Debug {
    fn on_match(&self, _event: &MatchEvent<'_>) {}

    fn on_miss(&self, _event: &MissEvent<'_>) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl MatchObserver for NoopObserver {}

/// Reports lookups as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl MatchObserver for TracingObserver {
    fn on_match(&self, event: &MatchEvent<'_>) {
        tracing::debug!(
            method = event.method,
            path = event.path,
            template = event.template,
            position = event.position,
            "route matched"
        );
    }

    fn on_miss(&self, event: &MissEvent<'_>) {
        match event.kind {
            MissKind::Conversion => tracing::error!(
                method = event.method,
                path = event.path,
                template = event.template,
                "captured value failed conversion"
            ),
            kind => tracing::trace!(
                method = event.method,
                path = event.path,
                template = event.template,
                kind = ?kind,
                "route miss"
            ),
        }
    }
}
