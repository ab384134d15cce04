//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, types::Json};
use uuid::Uuid;

use crate::{
    domain::{
        addresses::models::AddressFields,
        amount_to_db,
        orders::{
            models::{Order, OrderItem},
            status::OrderStatus,
        },
        try_get_amount,
    },
    identity::UserId,
};

const INSERT_ORDER_SQL: &str = include_str!("sql/insert_order.sql");
const LIST_ORDERS_FOR_USER_SQL: &str = include_str!("sql/list_orders_for_user.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const LIST_ALL_ORDERS_SQL: &str = include_str!("sql/list_all_orders.sql");
const GET_ORDER_ANY_SQL: &str = include_str!("sql/get_order_any.sql");
const UPDATE_ORDER_STATUS_SQL: &str = include_str!("sql/update_order_status.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn insert_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
        items: &[OrderItem],
        total_amount: u64,
        shipping_address: &AddressFields,
        status: OrderStatus,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(INSERT_ORDER_SQL)
            .bind(Uuid::now_v7())
            .bind(user.as_str())
            .bind(Json(items))
            .bind(amount_to_db(total_amount, "total_amount")?)
            .bind(Json(shipping_address))
            .bind(status.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
    ) -> Result<Vec<Order>, sqlx::Error> {
        query_as::<Postgres, Order>(LIST_ORDERS_FOR_USER_SQL)
            .bind(user.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
        id: Uuid,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(GET_ORDER_SQL)
            .bind(user.as_str())
            .bind(id)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_all_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Order>, sqlx::Error> {
        query_as::<Postgres, Order>(LIST_ALL_ORDERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_order_any(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(GET_ORDER_ANY_SQL)
            .bind(id)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_order_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(UPDATE_ORDER_STATUS_SQL)
            .bind(id)
            .bind(status.as_str())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let items: Json<Vec<OrderItem>> = row.try_get("items")?;
        let shipping_address: Json<AddressFields> = row.try_get("shipping_address")?;
        let total_amount = try_get_amount(row, "total_amount")?;

        let status = row
            .try_get::<String, _>("status")?
            .parse::<OrderStatus>()
            .map_err(|error| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(error),
            })?;

        Ok(Self {
            id: row.try_get("uuid")?,
            user_id: UserId::from(row.try_get::<String, _>("user_id")?),
            items: items.0,
            total_amount,
            shipping_address: shipping_address.0,
            status,
            order_date: row.try_get::<SqlxTimestamp, _>("order_date")?.to_jiff(),
            last_status_update: row
                .try_get::<Option<SqlxTimestamp>, _>("last_status_update")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
