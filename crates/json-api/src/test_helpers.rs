//! Test helpers.

use std::sync::Arc;

use orchard_app::{
    context::AppContext,
    domain::{
        addresses::MockAddressesService, blog::MockBlogService, carts::MockCartsService,
        orders::MockOrdersService, products::MockProductsService, reviews::MockReviewsService,
        testimonials::MockTestimonialsService,
    },
    identity::{Identity, MockIdentityService, UserId},
    shipping::MockShippingService,
};
use salvo::{affix_state::inject, prelude::*};

use crate::state::State;

pub(crate) const TEST_ADMIN_KEY: &str = "test-admin-key";

/// One mock per service; swap in expectations on the ones under test and
/// let the rest panic on unexpected calls.
pub(crate) struct MockApp {
    pub(crate) products: MockProductsService,
    pub(crate) carts: MockCartsService,
    pub(crate) addresses: MockAddressesService,
    pub(crate) orders: MockOrdersService,
    pub(crate) reviews: MockReviewsService,
    pub(crate) testimonials: MockTestimonialsService,
    pub(crate) blog: MockBlogService,
    pub(crate) identity: MockIdentityService,
    pub(crate) shipping: MockShippingService,
}

impl MockApp {
    pub(crate) fn new() -> Self {
        Self {
            products: MockProductsService::new(),
            carts: MockCartsService::new(),
            addresses: MockAddressesService::new(),
            orders: MockOrdersService::new(),
            reviews: MockReviewsService::new(),
            testimonials: MockTestimonialsService::new(),
            blog: MockBlogService::new(),
            identity: MockIdentityService::new(),
            shipping: MockShippingService::new(),
        }
    }

    pub(crate) fn into_state(self) -> Arc<State> {
        let app = AppContext {
            products: Arc::new(self.products),
            carts: Arc::new(self.carts),
            addresses: Arc::new(self.addresses),
            orders: Arc::new(self.orders),
            reviews: Arc::new(self.reviews),
            testimonials: Arc::new(self.testimonials),
            blog: Arc::new(self.blog),
            identity: Arc::new(self.identity),
            shipping: Arc::new(self.shipping),
        };

        State::shared(app, TEST_ADMIN_KEY.to_string())
    }
}

pub(crate) fn test_identity() -> Identity {
    Identity {
        uid: UserId::new("user-1"),
        name: Some("Asha".to_string()),
        email: None,
    }
}

/// Stands in for the bearer middleware in handler tests.
#[salvo::handler]
pub(crate) async fn inject_identity(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.inject(test_identity());
    ctrl.call_next(req, depot, res).await;
}

/// A service around `route` with mocked state and a pre-verified identity.
pub(crate) fn authed_service(app: MockApp, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(app.into_state()))
            .hoop(inject_identity)
            .push(route),
    )
}

/// A service around `route` with mocked state and no identity.
pub(crate) fn public_service(app: MockApp, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(app.into_state())).push(route))
}
