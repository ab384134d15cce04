//! Cart Models

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    domain::products::models::{ProductId, Variant},
    identity::UserId,
};

/// Cart Model
///
/// One cart per user, holding an ordered sequence of line items.
#[derive(Debug, Clone)]
pub struct Cart {
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// CartItem Model
///
/// Price and unit are denormalized at add-time from the catalog. Items of
/// the same product are distinguished by their variant details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,

    // Stored documents may predate the typed schema; a malformed amount
    // reads as zero rather than failing the whole cart.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub price: u64,

    #[serde(default, deserialize_with = "lenient_u32")]
    pub quantity: u32,

    pub unit: String,

    #[serde(default)]
    pub variant_details: Option<Variant>,

    pub added_at: Timestamp,
}

impl CartItem {
    /// Line identity: `(product_id, variant_details)`.
    #[must_use]
    pub fn same_line(&self, product_id: ProductId, variant_details: Option<&Variant>) -> bool {
        self.product_id == product_id && self.variant_details.as_ref() == variant_details
    }

    /// Match for removal by `(product_id, variant unit)`.
    #[must_use]
    pub fn matches_unit(&self, product_id: ProductId, variant_unit: Option<&str>) -> bool {
        self.product_id == product_id
            && self.variant_details.as_ref().map(|v| v.unit.as_str()) == variant_unit
    }
}

/// Merge a resolved line into the item sequence.
///
/// An existing line with the same identity has its quantity replaced (not
/// summed); otherwise the line is appended.
pub fn upsert_line(items: &mut Vec<CartItem>, line: CartItem) {
    if let Some(existing) = items
        .iter_mut()
        .find(|item| item.same_line(line.product_id, line.variant_details.as_ref()))
    {
        existing.quantity = line.quantity;
    } else {
        items.push(line);
    }
}

/// New Cart Item Model
///
/// The variant is selected by unit label only; price resolution happens
/// against the catalog, never from the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub variant_unit: Option<String>,
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    Ok(value.as_u64().unwrap_or(0))
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    Ok(value.as_u64().and_then(|n| u32::try_from(n).ok()).unwrap_or(0))
}
