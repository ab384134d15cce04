//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use orchard_app::domain::products::models::{Product, Variant};

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// A purchasable pack size with its own price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct VariantBody {
    /// Pack size label, e.g. "250g"
    pub unit: String,

    /// Price in minor currency units
    pub price: u64,
}

impl From<Variant> for VariantBody {
    fn from(variant: Variant) -> Self {
        Self {
            unit: variant.unit,
            price: variant.price,
        }
    }
}

impl From<VariantBody> for Variant {
    fn from(body: VariantBody) -> Self {
        Self {
            unit: body.unit,
            price: body.price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Catalog identifier of the product
    pub id: i64,

    /// Display name
    pub name: String,

    /// Base price in minor currency units
    pub price: u64,

    /// Base pack size label
    pub unit: String,

    /// Alternative pack sizes
    pub variants: Vec<VariantBody>,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            unit: product.unit,
            variants: product.variants.into_iter().map(Into::into).collect(),
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    product: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(product.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
