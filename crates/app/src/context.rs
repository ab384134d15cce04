//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db, MIGRATOR},
    domain::{
        addresses::{AddressesService, PgAddressesService},
        blog::{BlogService, PgBlogService},
        carts::{CartsService, PgCartsService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
        reviews::{PgReviewsService, ReviewsService},
        testimonials::{PgTestimonialsService, TestimonialsService},
    },
    identity::{FirebaseIdentityService, IdentityService},
    shipping::{ShippingGateway, ShippingService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub addresses: Arc<dyn AddressesService>,
    pub orders: Arc<dyn OrdersService>,
    pub reviews: Arc<dyn ReviewsService>,
    pub testimonials: Arc<dyn TestimonialsService>,
    pub blog: Arc<dyn BlogService>,
    pub identity: Arc<dyn IdentityService>,
    pub shipping: Arc<dyn ShippingService>,
}

impl AppContext {
    /// Build application context from a database URL, applying pending
    /// migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or migrating fails.
    pub async fn from_database_url(
        url: &str,
        identity: FirebaseIdentityService,
        shipping: ShippingGateway,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        MIGRATOR.run(&pool).await.map_err(AppInitError::Migrate)?;

        let db = Db::new(pool);

        Ok(Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            addresses: Arc::new(PgAddressesService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            reviews: Arc::new(PgReviewsService::new(db.clone())),
            testimonials: Arc::new(PgTestimonialsService::new(db.clone())),
            blog: Arc::new(PgBlogService::new(db)),
            identity: Arc::new(identity),
            shipping: Arc::new(shipping),
        })
    }
}
