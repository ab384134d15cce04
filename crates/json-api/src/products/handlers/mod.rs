//! Product Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use orchard_app::domain::products::models::{Product, Variant};

    pub(super) fn make_product(id: i64, price: u64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            price,
            unit: "250g".to_string(),
            variants: vec![],
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    pub(super) fn make_variant(unit: &str, price: u64) -> Variant {
        Variant {
            unit: unit.to_string(),
            price,
        }
    }
}
