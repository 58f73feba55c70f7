use chrono::Duration;
use std::sync::Arc;

use storage::Storage;

use crate::Clock;
use crate::catalog_service::CatalogService;
use crate::sessions::SessionLifecycle;

/// Assembles the services the HTTP layer talks to.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<CatalogService>,
    sessions: Arc<SessionLifecycle>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, clock: Clock, idle_timeout: Option<Duration>) -> Self {
        let catalog = Arc::new(CatalogService::new(Arc::clone(&storage.questions)));
        let sessions = Arc::new(
            SessionLifecycle::new(
                clock,
                Arc::clone(&storage.questions),
                Arc::clone(&storage.sessions),
            )
            .with_idle_timeout(idle_timeout),
        );
        Self { catalog, sessions }
    }

    /// Services over the built-in catalog with no idle expiry.
    #[must_use]
    pub fn in_memory_seeded(clock: Clock) -> Self {
        Self::new(&Storage::seeded(), clock, None)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<SessionLifecycle> {
        Arc::clone(&self.sessions)
    }
}
