//! Product Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Stable external product key.
pub type ProductId = i64;

/// A distinct purchasable configuration of a product (its own pack size and
/// price).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub unit: String,
    pub price: u64,
}

/// Product Model
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    pub unit: String,
    pub variants: Vec<Variant>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Product {
    /// Look up one of this product's own variants by unit label.
    #[must_use]
    pub fn variant(&self, unit: &str) -> Option<&Variant> {
        self.variants.iter().find(|variant| variant.unit == unit)
    }

    #[must_use]
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Resolve the price, unit and variant snapshot for a purchase.
    ///
    /// Products with variants require a unit selection and always take the
    /// variant's price; the base price and unit apply otherwise.
    pub fn select(&self, variant_unit: Option<&str>) -> Result<Selection, SelectionError> {
        if !self.has_variants() {
            return Ok(Selection {
                price: self.price,
                unit: self.unit.clone(),
                variant_details: None,
            });
        }

        let unit = variant_unit.ok_or(SelectionError::VariantRequired)?;

        let variant = self
            .variant(unit)
            .ok_or_else(|| SelectionError::UnknownVariant {
                unit: unit.to_string(),
            })?;

        Ok(Selection {
            price: variant.price,
            unit: variant.unit.clone(),
            variant_details: Some(variant.clone()),
        })
    }
}

/// Resolved price and unit for one purchased line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub price: u64,
    pub unit: String,
    pub variant_details: Option<Variant>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    VariantRequired,
    UnknownVariant { unit: String },
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    pub unit: String,
    pub variants: Vec<Variant>,
}

/// Product Update Model
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub price: u64,
    pub unit: String,
    pub variants: Vec<Variant>,
}
