use std::sync::Arc;

use services::ContentProvider;

pub trait UiApp: Send + Sync {
    fn content_provider(&self) -> Arc<dyn ContentProvider>;
}

#[derive(Clone)]
pub struct AppContext {
    content_provider: Arc<dyn ContentProvider>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            content_provider: app.content_provider(),
        }
    }

    #[must_use]
    pub fn content_provider(&self) -> Arc<dyn ContentProvider> {
        Arc::clone(&self.content_provider)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
