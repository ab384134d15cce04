//! Cart Handlers

pub(crate) mod clear;
pub(crate) mod get;
pub(crate) mod remove;
pub(crate) mod upsert;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use orchard_app::domain::carts::models::CartItem;

use crate::products::handlers::get::VariantBody;

/// One cart line.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    pub product_id: i64,
    pub name: String,

    /// Unit price in minor currency units, resolved from the catalog
    pub price: u64,
    pub quantity: u32,
    pub unit: String,
    pub variant_details: Option<VariantBody>,
    pub added_at: String,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
            unit: item.unit,
            variant_details: item.variant_details.map(Into::into),
            added_at: item.added_at.to_string(),
        }
    }
}

/// The cart as returned by every cart endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    pub items: Vec<CartItemResponse>,
}

impl CartResponse {
    pub(crate) fn from_items(items: Vec<CartItem>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}
