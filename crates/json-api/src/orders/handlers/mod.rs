//! Order Handlers

pub(crate) mod admin_get;
pub(crate) mod admin_index;
pub(crate) mod create;
pub(crate) mod create_direct;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod set_status;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orchard_app::domain::orders::models::{Order, OrderItem};

use crate::{addresses::handlers::AddressBody, products::handlers::get::VariantBody};

/// One purchased line, frozen at placement time.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    pub product_id: i64,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
    pub unit: String,
    pub variant_details: Option<VariantBody>,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
            unit: item.unit,
            variant_details: item.variant_details.map(Into::into),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub id: Uuid,
    pub user_id: String,
    pub items: Vec<OrderItemResponse>,

    /// Total in minor currency units
    pub total_amount: u64,

    /// Snapshot of the shipping address at placement time
    pub shipping_address: AddressBody,
    pub status: String,
    pub order_date: String,
    pub last_status_update: Option<String>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id.to_string(),
            items: order.items.into_iter().map(Into::into).collect(),
            total_amount: order.total_amount,
            shipping_address: order.shipping_address.into(),
            status: order.status.as_str().to_string(),
            order_date: order.order_date.to_string(),
            last_status_update: order.last_status_update.map(|at| at.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    pub orders: Vec<OrderResponse>,
}
