//! Order Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    domain::{
        addresses::models::AddressFields,
        carts::models::CartItem,
        orders::status::OrderStatus,
        products::models::{ProductId, Variant},
    },
    identity::UserId,
};

/// Order Model
///
/// Items and the shipping address are immutable snapshots taken at
/// placement time; later catalog or address edits do not touch them.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub total_amount: u64,
    pub shipping_address: AddressFields,
    pub status: OrderStatus,
    pub order_date: Timestamp,
    pub last_status_update: Option<Timestamp>,
}

/// One purchased line, frozen at placement time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
    pub unit: String,
    #[serde(default)]
    pub variant_details: Option<Variant>,
}

impl From<CartItem> for OrderItem {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
            unit: item.unit,
            variant_details: item.variant_details,
        }
    }
}

/// Total in minor units; overflow saturates rather than wrapping.
#[must_use]
pub fn order_total(items: &[OrderItem]) -> u64 {
    items.iter().fold(0u64, |total, item| {
        total.saturating_add(item.price.saturating_mul(u64::from(item.quantity)))
    })
}

/// One requested line for a direct ("buy now") order.
///
/// Like cart lines, pricing is resolved server-side from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineRequest {
    pub product_id: ProductId,
    pub quantity: u32,
    pub variant_unit: Option<String>,
}
