//! Carts service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::{Postgres, Transaction};

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{self, CartItem, NewCartItem},
            repository::PgCartsRepository,
        },
        products::{
            models::{Product, ProductId},
            repository::PgProductsRepository,
        },
    },
    identity::UserId,
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    repository: PgCartsRepository,
    products: PgProductsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCartsRepository::new(),
            products: PgProductsRepository::new(),
        }
    }

    async fn load_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: ProductId,
    ) -> Result<Product, CartsServiceError> {
        self.products.get_product(tx, id).await.map_err(|error| {
            if matches!(error, sqlx::Error::RowNotFound) {
                CartsServiceError::ProductNotFound
            } else {
                CartsServiceError::Sql(error)
            }
        })
    }

    /// Build a stored line from the catalog entry.
    ///
    /// Prices come from the catalog selection, never from the client.
    fn resolve_line(
        product: &Product,
        item: &NewCartItem,
    ) -> Result<CartItem, CartsServiceError> {
        let selection = product.select(item.variant_unit.as_deref())?;

        Ok(CartItem {
            product_id: product.id,
            name: product.name.clone(),
            price: selection.price,
            quantity: item.quantity,
            unit: selection.unit,
            variant_details: selection.variant_details,
            added_at: Timestamp::now(),
        })
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, user: &UserId) -> Result<Vec<CartItem>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.repository.get_cart(&mut tx, user).await?;

        tx.commit().await?;

        Ok(cart.map(|cart| cart.items).unwrap_or_default())
    }

    async fn upsert_item(
        &self,
        user: &UserId,
        item: NewCartItem,
    ) -> Result<Vec<CartItem>, CartsServiceError> {
        if item.quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin().await?;

        let product = self.load_product(&mut tx, item.product_id).await?;
        let line = Self::resolve_line(&product, &item)?;

        let mut items = self
            .repository
            .get_cart(&mut tx, user)
            .await?
            .map(|cart| cart.items)
            .unwrap_or_default();

        models::upsert_line(&mut items, line);

        let cart = self.repository.upsert_cart(&mut tx, user, &items).await?;

        tx.commit().await?;

        Ok(cart.items)
    }

    async fn remove_item(
        &self,
        user: &UserId,
        product_id: ProductId,
        variant_unit: Option<String>,
    ) -> Result<Vec<CartItem>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut items = self
            .repository
            .get_cart(&mut tx, user)
            .await?
            .ok_or(CartsServiceError::NotFound)?
            .items;

        let before = items.len();

        items.retain(|item| !item.matches_unit(product_id, variant_unit.as_deref()));

        if items.len() == before {
            return Err(CartsServiceError::ItemNotFound);
        }

        // An emptied cart is dropped entirely rather than kept as a row
        // with no items.
        let items = if items.is_empty() {
            self.repository.delete_cart(&mut tx, user).await?;

            items
        } else {
            self.repository.upsert_cart(&mut tx, user, &items).await?.items
        };

        tx.commit().await?;

        Ok(items)
    }

    async fn clear_cart(&self, user: &UserId) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_cart(&mut tx, user).await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Current cart contents; an absent cart reads as empty.
    async fn get_cart(&self, user: &UserId) -> Result<Vec<CartItem>, CartsServiceError>;

    /// Add a line or replace the quantity of an existing one.
    async fn upsert_item(
        &self,
        user: &UserId,
        item: NewCartItem,
    ) -> Result<Vec<CartItem>, CartsServiceError>;

    /// Remove the line matching `(product_id, variant_unit)`.
    async fn remove_item(
        &self,
        user: &UserId,
        product_id: ProductId,
        variant_unit: Option<String>,
    ) -> Result<Vec<CartItem>, CartsServiceError>;

    /// Drop the whole cart.
    async fn clear_cart(&self, user: &UserId) -> Result<(), CartsServiceError>;
}
