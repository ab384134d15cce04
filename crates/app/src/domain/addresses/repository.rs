//! Addresses Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::{
    domain::addresses::models::{Address, AddressFields},
    identity::UserId,
};

const INSERT_ADDRESS_SQL: &str = include_str!("sql/insert_address.sql");
const LIST_ADDRESSES_SQL: &str = include_str!("sql/list_addresses.sql");
const GET_ADDRESS_SQL: &str = include_str!("sql/get_address.sql");
const UPDATE_ADDRESS_SQL: &str = include_str!("sql/update_address.sql");
const DELETE_ADDRESS_SQL: &str = include_str!("sql/delete_address.sql");
const UNSET_DEFAULTS_SQL: &str = include_str!("sql/unset_default_addresses.sql");
const PROMOTE_OLDEST_SQL: &str = include_str!("sql/promote_oldest_address.sql");
const COUNT_ADDRESSES_SQL: &str = include_str!("sql/count_addresses.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAddressesRepository;

impl PgAddressesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn insert_address(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
        fields: &AddressFields,
        is_default: bool,
    ) -> Result<Address, sqlx::Error> {
        query_as::<Postgres, Address>(INSERT_ADDRESS_SQL)
            .bind(Uuid::now_v7())
            .bind(user.as_str())
            .bind(&fields.name)
            .bind(&fields.phone_number)
            .bind(&fields.street)
            .bind(&fields.city)
            .bind(&fields.state)
            .bind(&fields.postal_code)
            .bind(&fields.country)
            .bind(is_default)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_addresses(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
    ) -> Result<Vec<Address>, sqlx::Error> {
        query_as::<Postgres, Address>(LIST_ADDRESSES_SQL)
            .bind(user.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_address(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
        id: Uuid,
    ) -> Result<Address, sqlx::Error> {
        query_as::<Postgres, Address>(GET_ADDRESS_SQL)
            .bind(user.as_str())
            .bind(id)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_address(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
        id: Uuid,
        fields: &AddressFields,
        is_default: bool,
    ) -> Result<Address, sqlx::Error> {
        query_as::<Postgres, Address>(UPDATE_ADDRESS_SQL)
            .bind(user.as_str())
            .bind(id)
            .bind(&fields.name)
            .bind(&fields.phone_number)
            .bind(&fields.street)
            .bind(&fields.city)
            .bind(&fields.state)
            .bind(&fields.postal_code)
            .bind(&fields.country)
            .bind(is_default)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_address(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
        id: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ADDRESS_SQL)
            .bind(user.as_str())
            .bind(id)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn unset_defaults(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
    ) -> Result<(), sqlx::Error> {
        query(UNSET_DEFAULTS_SQL)
            .bind(user.as_str())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn promote_oldest(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
    ) -> Result<(), sqlx::Error> {
        query(PROMOTE_OLDEST_SQL)
            .bind(user.as_str())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn count_addresses(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Postgres, i64>(COUNT_ADDRESSES_SQL)
            .bind(user.as_str())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Address {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("uuid")?,
            user_id: UserId::from(row.try_get::<String, _>("user_id")?),
            name: row.try_get("name")?,
            phone_number: row.try_get("phone_number")?,
            street: row.try_get("street")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            postal_code: row.try_get("postal_code")?,
            country: row.try_get("country")?,
            is_default: row.try_get("is_default")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
