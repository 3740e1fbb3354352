use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::enums::HttpMethod;
use crate::handler::DispatchResult;
use crate::matcher::{MatchObserver, NoopObserver, TracingObserver};
use crate::readonly::RouterReadOnly;
use crate::registry::{RegistryMetrics, RouteTable};
use crate::router::{RouterError, RouterOptions, RouterResult};

struct RouterState<H> {
    registry: RouteTable<H>,
    readonly: OnceLock<Arc<RouterReadOnly<H>>>,
}

impl<H> RouterState<H> {
    fn new(options: &RouterOptions) -> Self {
        Self {
            registry: RouteTable::new(options.case_sensitive),
            readonly: OnceLock::new(),
        }
    }
}

/// Route registry with a setup phase and a serving phase.
///
/// Routes are registered while the router is mutable. [`Router::seal`] freezes
/// them into a [`RouterReadOnly`] snapshot; lookups are only served from the
/// snapshot and registration is rejected from then on.
pub struct Router<H> {
    inner: RwLock<RouterState<H>>,
    options: RouterOptions,
    observer: Arc<dyn MatchObserver>,
}

impl<H> Router<H> {
    /// Options are checked with [`RouterOptions::validate`] when the router is
    /// sealed, so hand-built or deserialized options fail before serving.
    pub fn new(options: Option<RouterOptions>) -> Self {
        let options = options.unwrap_or_default();
        let observer: Arc<dyn MatchObserver> = if options.debug {
            Arc::new(TracingObserver)
        } else {
            Arc::new(NoopObserver)
        };
        Self::with_observer(Some(options), observer)
    }

    pub fn with_observer(options: Option<RouterOptions>, observer: Arc<dyn MatchObserver>) -> Self {
        let options = options.unwrap_or_default();
        Self {
            inner: RwLock::new(RouterState::new(&options)),
            options,
            observer,
        }
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    /// Binds `handler` to one method of `template`. Returns the position of the
    /// route in the table.
    pub fn add(&self, method: HttpMethod, template: &str, handler: H) -> RouterResult<usize> {
        self.insert(&[method], template, Arc::new(handler))
    }

    /// Binds `handler` to every method named in `methods`. All names are
    /// validated before the table is touched.
    pub fn register<I, S>(&self, template: &str, methods: I, handler: H) -> RouterResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let methods = methods
            .into_iter()
            .map(|m| m.as_ref().parse::<HttpMethod>())
            .collect::<Result<Vec<_>, _>>()?;

        if methods.is_empty() {
            return Err(RouterError::EmptyMethods {
                template: template.to_string(),
            });
        }

        self.insert(&methods, template, Arc::new(handler))
    }

    #[tracing::instrument(level = "debug", skip(self, handler), fields(template = %template))]
    fn insert(
        &self,
        methods: &[HttpMethod],
        template: &str,
        handler: Arc<H>,
    ) -> RouterResult<usize> {
        let mut guard = self.inner.write();

        if guard.readonly.get().is_some() {
            return Err(RouterError::AddWhileSealed {
                template: template.to_string(),
            });
        }

        let mut position = 0;
        for method in methods {
            position = guard.registry.insert(*method, template, handler.clone())?;
        }
        Ok(position)
    }

    /// Freezes the table. Sealing twice returns the existing snapshot.
    pub fn seal(&self) -> RouterResult<Arc<RouterReadOnly<H>>> {
        let mut guard = self.inner.write();

        if let Some(existing) = guard.readonly.get() {
            return Ok(existing.clone());
        }

        self.options.validate()?;

        let prefilter = RouterReadOnly::prefilter_for(&guard.registry)?;
        let metrics = guard.registry.metrics().clone();
        let table = std::mem::replace(
            &mut guard.registry,
            RouteTable::with_metrics(self.options.case_sensitive, metrics.clone()),
        );
        let snapshot = Arc::new(RouterReadOnly::from_parts(
            table,
            prefilter,
            self.options.prefix.clone(),
            self.observer.clone(),
        ));

        tracing::debug!(
            routes = snapshot.len(),
            handlers = metrics.handlers_registered,
            "router sealed"
        );
        if self.options.debug {
            snapshot.log_routes();
        }

        let _ = guard.readonly.set(snapshot.clone());
        Ok(snapshot)
    }

    pub fn find(&self, method: HttpMethod, path: &str) -> RouterResult<DispatchResult<H>> {
        Ok(self.get_readonly_for_find()?.find(method, path)?)
    }

    pub fn find_by_name(&self, method: &str, path: &str) -> RouterResult<DispatchResult<H>> {
        Ok(self.get_readonly_for_find()?.find_by_name(method, path)?)
    }

    fn get_readonly_for_find(&self) -> RouterResult<Arc<RouterReadOnly<H>>> {
        let guard = self.inner.read();
        guard
            .readonly
            .get()
            .cloned()
            .ok_or(RouterError::FindWhileMutable)
    }

    pub fn get_readonly(&self) -> RouterResult<Arc<RouterReadOnly<H>>> {
        let guard = self.inner.read();
        guard
            .readonly
            .get()
            .cloned()
            .ok_or(RouterError::ReadOnlyUnavailable)
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.read().readonly.get().is_some()
    }

    pub fn list_templates(&self) -> Vec<String> {
        let guard = self.inner.read();
        match guard.readonly.get() {
            Some(ro) => ro.list_templates(),
            None => guard.registry.templates(),
        }
    }

    pub fn list_templates_with_methods(&self) -> Vec<String> {
        let guard = self.inner.read();
        match guard.readonly.get() {
            Some(ro) => ro.list_templates_with_methods(),
            None => guard.registry.templates_with_methods(),
        }
    }

    pub fn metrics(&self) -> RegistryMetrics {
        self.inner.read().registry.metrics().clone()
    }
}

impl<H> fmt::Debug for Router<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.inner.read();
        f.debug_struct("Router")
            .field("options", &self.options)
            .field("registry", &guard.registry)
            .field("readonly", &guard.readonly.get())
            .finish()
    }
}
