//! Path router.
//!
//! In the original deployment the platform owns routing; the embedded server
//! uses a radix tree as its stand-in. One tree for all methods — handlers do
//! their own method dispatch (405s included), so the router's only job is
//! path → handler. O(path-length) lookup via [`matchit`].

use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handlers::Handler;

/// The application router. Build it once at startup; pass it to
/// [`Server::serve`](crate::Server::serve).
pub struct Router {
    routes: MatchitRouter<Arc<dyn Handler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: MatchitRouter::new() }
    }

    /// Registers a handler at `path`. Returns `self` so registrations chain.
    ///
    /// # Panics
    ///
    /// Panics on a conflicting or malformed path — a startup-time programming
    /// error, not a runtime condition.
    pub fn at(mut self, path: &str, handler: impl Handler) -> Self {
        self.routes
            .insert(path, Arc::new(handler))
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(&self, path: &str) -> Option<Arc<dyn Handler>> {
        self.routes.at(path).ok().map(|m| Arc::clone(m.value))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::handlers::HealthHandler;

    #[test]
    fn lookup_hits_registered_path_only() {
        let router = Router::new().at("/health", HealthHandler::new(SystemClock));
        assert!(router.lookup("/health").is_some());
        assert!(router.lookup("/missing").is_none());
    }
}
