//! Test Helpers

use crate::{
    domain::{
        addresses::models::AddressFields,
        products::{
            ProductsService, ProductsServiceError,
            models::{NewProduct, Product, ProductId, Variant},
        },
    },
    test::TestContext,
};

pub(crate) async fn create_product(
    ctx: &TestContext,
    id: ProductId,
    price: u64,
) -> Result<Product, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            id,
            name: format!("Product {id}"),
            price,
            unit: "250g".to_string(),
            variants: vec![],
        })
        .await
}

/// A product with 250g/100 and 500g/180 variants.
pub(crate) async fn create_product_with_variants(
    ctx: &TestContext,
    id: ProductId,
) -> Result<Product, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            id,
            name: format!("Product {id}"),
            price: 100,
            unit: "250g".to_string(),
            variants: vec![
                Variant {
                    unit: "250g".to_string(),
                    price: 100,
                },
                Variant {
                    unit: "500g".to_string(),
                    price: 180,
                },
            ],
        })
        .await
}

pub(crate) fn address_fields() -> AddressFields {
    AddressFields {
        name: Some("Asha".to_string()),
        phone_number: Some("9999999999".to_string()),
        street: "12 MG Road".to_string(),
        city: "Pune".to_string(),
        state: "Maharashtra".to_string(),
        postal_code: "411001".to_string(),
        country: "India".to_string(),
    }
}
