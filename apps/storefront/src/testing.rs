//! Shared fixture for unit tests: demo catalog plus recording seams.

use std::sync::Arc;

use petshop_catalog::MemoryCatalog;

use crate::context::AppContext;
use crate::services::{NoticeLog, RouteLog};
use crate::state::StorefrontConfig;

pub(crate) struct TestApp {
    pub ctx: AppContext,
    pub catalog: Arc<MemoryCatalog>,
    pub notices: Arc<NoticeLog>,
    pub routes: Arc<RouteLog>,
}

impl TestApp {
    pub fn demo() -> Self {
        Self::with_config(StorefrontConfig::default())
    }

    pub fn with_config(config: StorefrontConfig) -> Self {
        let catalog = Arc::new(MemoryCatalog::demo().unwrap());
        let notices = Arc::new(NoticeLog::new());
        let routes = Arc::new(RouteLog::new());
        let ctx = AppContext::with_memory_catalog(
            config,
            catalog.clone(),
            notices.clone(),
            routes.clone(),
        );
        TestApp {
            ctx,
            catalog,
            notices,
            routes,
        }
    }
}
