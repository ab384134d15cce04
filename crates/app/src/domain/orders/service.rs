//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::{
    database::Db,
    domain::{
        addresses::{models::AddressFields, repository::PgAddressesRepository},
        carts::repository::PgCartsRepository,
        orders::{
            errors::OrdersServiceError,
            models::{self, Order, OrderItem, OrderLineRequest},
            repository::PgOrdersRepository,
            status::OrderStatus,
        },
        products::repository::PgProductsRepository,
    },
    identity::UserId,
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
    carts: PgCartsRepository,
    addresses: PgAddressesRepository,
    products: PgProductsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
            carts: PgCartsRepository::new(),
            addresses: PgAddressesRepository::new(),
            products: PgProductsRepository::new(),
        }
    }

    async fn load_shipping_address(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
        address_id: Uuid,
    ) -> Result<AddressFields, OrdersServiceError> {
        let address = self
            .addresses
            .get_address(tx, user, address_id)
            .await
            .map_err(|error| {
                if matches!(error, sqlx::Error::RowNotFound) {
                    OrdersServiceError::AddressNotFound
                } else {
                    OrdersServiceError::Sql(error)
                }
            })?;

        Ok(AddressFields {
            name: address.name,
            phone_number: address.phone_number,
            street: address.street,
            city: address.city,
            state: address.state,
            postal_code: address.postal_code,
            country: address.country,
        })
    }

    async fn resolve_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        lines: &[OrderLineRequest],
    ) -> Result<Vec<OrderItem>, OrdersServiceError> {
        let mut items = Vec::with_capacity(lines.len());

        for line in lines {
            if line.quantity == 0 {
                return Err(OrdersServiceError::InvalidQuantity);
            }

            let product = self
                .products
                .get_product(tx, line.product_id)
                .await
                .map_err(|error| {
                    if matches!(error, sqlx::Error::RowNotFound) {
                        OrdersServiceError::ProductNotFound
                    } else {
                        OrdersServiceError::Sql(error)
                    }
                })?;

            let selection = product.select(line.variant_unit.as_deref())?;

            items.push(OrderItem {
                product_id: product.id,
                name: product.name,
                price: selection.price,
                quantity: line.quantity,
                unit: selection.unit,
                variant_details: selection.variant_details,
            });
        }

        Ok(items)
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn create_from_cart(
        &self,
        user: &UserId,
        address_id: Uuid,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let items: Vec<OrderItem> = self
            .carts
            .get_cart(&mut tx, user)
            .await?
            .map(|cart| cart.items)
            .unwrap_or_default()
            .into_iter()
            .map(OrderItem::from)
            .collect();

        if items.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let shipping_address = self.load_shipping_address(&mut tx, user, address_id).await?;
        let total_amount = models::order_total(&items);

        let order = self
            .repository
            .insert_order(
                &mut tx,
                user,
                &items,
                total_amount,
                &shipping_address,
                OrderStatus::Pending,
            )
            .await?;

        // Placing the order consumes the cart in the same transaction.
        self.carts.delete_cart(&mut tx, user).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn create_direct(
        &self,
        user: &UserId,
        address_id: Uuid,
        lines: Vec<OrderLineRequest>,
    ) -> Result<Order, OrdersServiceError> {
        if lines.is_empty() {
            return Err(OrdersServiceError::NoItems);
        }

        let mut tx = self.db.begin().await?;

        let items = self.resolve_lines(&mut tx, &lines).await?;
        let shipping_address = self.load_shipping_address(&mut tx, user, address_id).await?;
        let total_amount = models::order_total(&items);

        let order = self
            .repository
            .insert_order(
                &mut tx,
                user,
                &items,
                total_amount,
                &shipping_address,
                OrderStatus::Pending,
            )
            .await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn list_orders(&self, user: &UserId) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders_for_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(&self, user: &UserId, id: Uuid) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.repository.get_order(&mut tx, user, id).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn list_all_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_all_orders(&mut tx).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order_any(&self, id: Uuid) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.repository.get_order_any(&mut tx, id).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self.repository.get_order_any(&mut tx, id).await?;

        if !current.status.can_transition_to(status) {
            return Err(OrdersServiceError::InvalidTransition {
                from: current.status,
                to: status,
            });
        }

        let updated = self.repository.update_order_status(&mut tx, id, status).await?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Place an order from the user's cart, consuming the cart.
    async fn create_from_cart(
        &self,
        user: &UserId,
        address_id: Uuid,
    ) -> Result<Order, OrdersServiceError>;

    /// Place an order for the given lines directly; the cart is untouched.
    async fn create_direct(
        &self,
        user: &UserId,
        address_id: Uuid,
        lines: Vec<OrderLineRequest>,
    ) -> Result<Order, OrdersServiceError>;

    /// The user's orders, newest first.
    async fn list_orders(&self, user: &UserId) -> Result<Vec<Order>, OrdersServiceError>;

    /// One order owned by the user.
    async fn get_order(&self, user: &UserId, id: Uuid) -> Result<Order, OrdersServiceError>;

    /// Every order in the system, newest first.
    async fn list_all_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// One order regardless of owner.
    async fn get_order_any(&self, id: Uuid) -> Result<Order, OrdersServiceError>;

    /// Advance an order through its lifecycle.
    async fn set_status(&self, id: Uuid, status: OrderStatus)
    -> Result<Order, OrdersServiceError>;
}
