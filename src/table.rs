use crate::error::RouterError;
use crate::handler::{ArcHandler, Handler};
use crate::matcher::RouteMatcher;
use crate::middleware::{self, Middleware};
use crate::pattern::Pattern;

use std::sync::Arc;

use http::Method;

/// An ordered mapping from path pattern to per-method handlers.
///
/// Entries keep registration order, so the matcher lists produced by the
/// `*_matchers` methods — and therefore first-match-wins precedence in the
/// [`Router`](crate::Router) — are deterministic. Registering a
/// `(pattern, method)` pair twice replaces the earlier handler.
///
/// A table is mutable; finalize it (middleware applied, no more routes)
/// before building matchers from it.
#[derive(Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

struct RouteEntry {
    pattern: String,
    handlers: Vec<(Method, ArcHandler)>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered (pattern, method) pairs.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|e| e.handlers.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers `handler` for `(pattern, method)`, replacing any existing
    /// handler for that pair.
    pub fn route(
        &mut self,
        method: Method,
        pattern: &str,
        handler: impl Handler + 'static,
    ) -> &mut Self {
        let handler: ArcHandler = Arc::new(handler);

        let entry = match self.entries.iter_mut().find(|e| e.pattern == pattern) {
            Some(entry) => entry,
            None => {
                self.entries.push(RouteEntry {
                    pattern: pattern.to_owned(),
                    handlers: Vec::new(),
                });
                self.entries.last_mut().unwrap()
            }
        };

        match entry.handlers.iter_mut().find(|(m, _)| *m == method) {
            Some((_, slot)) => *slot = handler,
            None => entry.handlers.push((method, handler)),
        }
        self
    }

    /// Wraps every handler in the table with `middleware`, folding in the
    /// order supplied: the first middleware becomes the outermost wrapper.
    pub fn apply_middleware(&mut self, middleware: &[Middleware]) {
        for entry in &mut self.entries {
            let handlers = std::mem::take(&mut entry.handlers);
            entry.handlers = handlers
                .into_iter()
                .map(|(method, handler)| (method, middleware::apply(handler, middleware)))
                .collect();
        }
    }

    /// Visits every (pattern, method, handler) triple exactly once, in
    /// registration order.
    pub fn iterate(&self, mut f: impl FnMut(&str, &Method, &ArcHandler)) {
        for entry in &self.entries {
            for (method, handler) in &entry.handlers {
                f(&entry.pattern, method, handler);
            }
        }
    }

    /// Like [`iterate`](Self::iterate) but allows replacing handlers.
    pub fn iterate_mut(&mut self, mut f: impl FnMut(&str, &Method, &mut ArcHandler)) {
        for entry in &mut self.entries {
            for (method, handler) in &mut entry.handlers {
                f(&entry.pattern, method, handler);
            }
        }
    }

    /// Drops every (pattern, method) pair for which `f` returns `false`.
    pub fn retain(&mut self, mut f: impl FnMut(&str, &Method) -> bool) {
        for entry in &mut self.entries {
            let RouteEntry { pattern, handlers } = entry;
            handlers.retain(|(method, _)| f(pattern, method));
        }
        self.entries.retain(|e| !e.handlers.is_empty());
    }

    /// One exact matcher per (pattern, method, handler) triple.
    pub fn exact_matchers(&self) -> Vec<RouteMatcher> {
        self.build_matchers(|p| Pattern::exact(p))
    }

    /// One glob matcher per triple.
    pub fn glob_matchers(&self) -> Vec<RouteMatcher> {
        self.build_matchers(|p| Pattern::glob(p))
    }

    /// One variable-segment matcher per triple.
    pub fn variable_matchers(&self) -> Vec<RouteMatcher> {
        self.build_matchers(Pattern::variable)
    }

    /// One regex matcher per triple. Fails on the first pattern that is
    /// not a valid regular expression.
    pub fn regex_matchers(&self) -> Result<Vec<RouteMatcher>, RouterError> {
        let mut matchers = Vec::with_capacity(self.len());
        for entry in &self.entries {
            let pattern = Pattern::regex(&entry.pattern)?;
            for (method, handler) in &entry.handlers {
                matchers.push(RouteMatcher::new(
                    method.clone(),
                    pattern.clone(),
                    Arc::clone(handler),
                ));
            }
        }
        Ok(matchers)
    }

    fn build_matchers(&self, make: impl Fn(&str) -> Pattern) -> Vec<RouteMatcher> {
        let mut matchers = Vec::with_capacity(self.len());
        self.iterate(|pattern, method, handler| {
            matchers.push(RouteMatcher::new(
                method.clone(),
                make(pattern),
                Arc::clone(handler),
            ));
        });
        matchers
    }
}
