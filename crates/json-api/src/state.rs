//! State

use std::sync::Arc;

use orchard_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Shared secret for the admin surface.
    pub(crate) admin_api_key: String,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, admin_api_key: String) -> Self {
        Self { app, admin_api_key }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, admin_api_key: String) -> Arc<Self> {
        Arc::new(Self::new(app, admin_api_key))
    }
}
