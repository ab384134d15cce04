//! Orchard Domain Concerns

use sqlx::{Row, postgres::PgRow};

pub mod addresses;
pub mod blog;
pub mod carts;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod testimonials;

/// Decode a monetary column stored as `BIGINT` into a `u64`.
pub(crate) fn try_get_amount(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let amount_i64: i64 = row.try_get(col)?;

    u64::try_from(amount_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

/// Encode a `u64` amount for a `BIGINT` column.
pub(crate) fn amount_to_db(amount: u64, col: &str) -> Result<i64, sqlx::Error> {
    i64::try_from(amount).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
