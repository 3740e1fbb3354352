use hashbrown::HashMap as FastHashMap;
use std::fmt;
use std::sync::Arc;

use super::{RegistryMetrics, Route};
use crate::enums::HttpMethod;
use crate::path::normalize_path;
use crate::pattern::{PatternResult, compile_template};

/// Insertion-ordered route table. At most one route exists per distinct
/// matcher; registering an equivalent template again only adds handlers, even
/// when it spells its variable names differently.
pub struct RouteTable<H> {
    routes: Vec<Route<H>>,
    // matcher key -> position
    index: FastHashMap<Box<str>, usize>,
    // normalized template -> position, skips recompiling known templates
    templates: FastHashMap<Box<str>, usize>,
    case_sensitive: bool,
    metrics: RegistryMetrics,
}

impl<H> RouteTable<H> {
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            routes: Vec::new(),
            index: FastHashMap::new(),
            templates: FastHashMap::new(),
            case_sensitive,
            metrics: RegistryMetrics::default(),
        }
    }

    pub(crate) fn with_metrics(case_sensitive: bool, metrics: RegistryMetrics) -> Self {
        Self {
            metrics,
            ..Self::new(case_sensitive)
        }
    }

    /// Compiles `template` unless an equivalent one is present, then binds
    /// `handler` to `method` on that route. Returns the route's position.
    pub fn insert(
        &mut self,
        method: HttpMethod,
        template: &str,
        handler: Arc<H>,
    ) -> PatternResult<usize> {
        let normalized = normalize_path(template);

        let position = match self.templates.get(normalized.as_str()) {
            Some(&existing) => existing,
            None => {
                let compiled = compile_template(template, self.case_sensitive)?;
                let position = match self.index.get(compiled.key()) {
                    Some(&existing) => {
                        let kept = self.routes[existing].template();
                        if kept.variables() != compiled.variables() {
                            tracing::warn!(
                                template = %normalized,
                                existing = kept.normalized(),
                                "template merged into an equivalent route; its variable names are used"
                            );
                        }
                        existing
                    }
                    None => {
                        let position = self.routes.len();
                        self.index.insert(compiled.key().into(), position);
                        self.routes.push(Route::new(compiled));
                        self.metrics.record_compile();
                        tracing::debug!(template = %normalized, position, "route template compiled");
                        position
                    }
                };
                self.templates.insert(normalized.into_boxed_str(), position);
                position
            }
        };

        let replaced = self.routes[position].bind(method, handler);
        self.metrics.record_handler(replaced);
        if replaced {
            tracing::debug!(template = %template, method = %method, "route handler replaced");
        }

        Ok(position)
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

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }

    pub fn templates(&self) -> Vec<String> {
        self.routes
            .iter()
            .map(|r| r.template().normalized().to_string())
            .collect()
    }

    pub fn templates_with_methods(&self) -> Vec<String> {
        self.routes.iter().map(Route::describe).collect()
    }

    pub(crate) fn into_routes(self) -> Vec<Route<H>> {
        self.routes
    }
}

impl<H> fmt::Debug for RouteTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.routes)
            .field("case_sensitive", &self.case_sensitive)
            .field("metrics", &self.metrics)
            .finish()
    }
}
