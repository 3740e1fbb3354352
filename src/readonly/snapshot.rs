use regex::RegexSet;
use std::fmt;
use std::sync::Arc;

use super::{ReadOnlyError, ReadOnlyResult};
use crate::enums::HttpMethod;
use crate::handler::DispatchResult;
use crate::matcher::{
    MatchEvent, MatchObserver, MissEvent, MissKind, NoopObserver, coerce_captures, first_match,
};
use crate::path::{normalize_path, strip_prefix};
use crate::pattern::{PatternError, PatternResult};
use crate::registry::{Route, RouteTable};

/// Frozen route table built for lock-free concurrent lookups.
///
/// Holds only immutable data, so it is `Send + Sync` whenever `H` is and can
/// be shared across worker threads behind an `Arc`.
pub struct RouterReadOnly<H> {
    routes: Vec<Route<H>>,
    prefilter: RegexSet,
    prefix: Option<String>,
    observer: Arc<dyn MatchObserver>,
}

impl<H> RouterReadOnly<H> {
    pub fn from_table(
        table: RouteTable<H>,
        prefix: Option<String>,
        observer: Arc<dyn MatchObserver>,
    ) -> PatternResult<Self> {
        let prefilter = Self::prefilter_for(&table)?;
        Ok(Self::from_parts(table, prefilter, prefix, observer))
    }

    /// Builds the first-match prefilter over the table's matchers, in order.
    pub(crate) fn prefilter_for(table: &RouteTable<H>) -> PatternResult<RegexSet> {
        RegexSet::new(table.routes().iter().map(|r| r.template().source())).map_err(|err| {
            PatternError::MatcherSetBuild {
                routes: table.len(),
                source: err,
            }
        })
    }

    pub(crate) fn from_parts(
        table: RouteTable<H>,
        prefilter: RegexSet,
        prefix: Option<String>,
        observer: Arc<dyn MatchObserver>,
    ) -> Self {
        Self {
            routes: table.into_routes(),
            prefilter,
            prefix,
            observer,
        }
    }

    /// Snapshot without a mount prefix or observer.
    pub fn freeze(table: RouteTable<H>) -> PatternResult<Self> {
        Self::from_table(table, None, Arc::new(NoopObserver))
    }

    pub fn find(&self, method: HttpMethod, path: &str) -> ReadOnlyResult<DispatchResult<H>> {
        self.resolve(Some(method), method.as_str(), path)
    }

    /// Lookup by raw method name. Names outside the supported set never bind
    /// a handler, so a structurally matching path yields `MethodNotAllowed`.
    pub fn find_by_name(&self, method: &str, path: &str) -> ReadOnlyResult<DispatchResult<H>> {
        self.resolve(method.parse().ok(), method, path)
    }

    #[tracing::instrument(level = "trace", skip(self, method), fields(method = %method_name))]
    fn resolve(
        &self,
        method: Option<HttpMethod>,
        method_name: &str,
        path: &str,
    ) -> ReadOnlyResult<DispatchResult<H>> {
        let stripped = match self.prefix.as_deref() {
            Some(prefix) => strip_prefix(path, prefix),
            None => Some(path),
        };

        let Some(stripped) = stripped else {
            self.report_miss(method_name, path, None, MissKind::RouteNotFound);
            return Err(ReadOnlyError::RouteNotFound {
                path: path.to_string(),
            });
        };

        let normalized = normalize_path(stripped);

        let Some((position, route, captures)) =
            first_match(&self.routes, &self.prefilter, &normalized)
        else {
            self.report_miss(method_name, &normalized, None, MissKind::RouteNotFound);
            return Err(ReadOnlyError::RouteNotFound {
                path: normalized.clone(),
            });
        };

        let template = route.template().normalized();

        let arguments = match coerce_captures(route.template(), &captures) {
            Ok(arguments) => arguments,
            Err(err) => {
                self.report_miss(method_name, &normalized, Some(template), MissKind::Conversion);
                return Err(ReadOnlyError::Conversion(err));
            }
        };

        let Some(handler) = method.and_then(|m| route.handler(m)) else {
            self.report_miss(
                method_name,
                &normalized,
                Some(template),
                MissKind::MethodNotAllowed,
            );
            return Err(ReadOnlyError::MethodNotAllowed {
                method: method_name.to_string(),
                path: normalized.clone(),
                allowed: route.allowed(),
            });
        };

        self.observer.on_match(&MatchEvent {
            method: method_name,
            path: &normalized,
            template,
            position,
        });

        Ok(DispatchResult::new(handler.clone(), arguments, position))
    }

    fn report_miss(&self, method: &str, path: &str, template: Option<&str>, kind: MissKind) {
        self.observer.on_miss(&MissEvent {
            method,
            path,
            template,
            kind,
        });
    }

    pub fn routes(&self) -> &[Route<H>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn list_templates(&self) -> Vec<String> {
        self.routes
            .iter()
            .map(|r| r.template().normalized().to_string())
            .collect()
    }

    pub fn list_templates_with_methods(&self) -> Vec<String> {
        self.routes.iter().map(Route::describe).collect()
    }

    /// Emits the route table at DEBUG level, one event per route.
    pub fn log_routes(&self) {
        tracing::debug!(
            prefix = self.prefix.as_deref().unwrap_or("/"),
            count = self.routes.len(),
            "routes"
        );
        for line in self.list_templates_with_methods() {
            tracing::debug!("    - {line}");
        }
    }
}

impl<H> fmt::Debug for RouterReadOnly<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterReadOnly")
            .field("routes", &self.routes)
            .field("prefix", &self.prefix)
            .field("observer", &self.observer)
            .finish()
    }
}
