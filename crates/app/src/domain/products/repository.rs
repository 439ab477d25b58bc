//! Products Repository

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, MySql, MySqlPool, Row, mysql::MySqlRow, query, query_as};

use crate::domain::products::{
    data::ProductFields,
    records::{ProductId, ProductRecord},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const SEARCH_PRODUCTS_SQL: &str = include_str!("sql/search_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct MySqlProductsRepository;

impl MySqlProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        pool: &MySqlPool,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<MySql, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(pool)
            .await
    }

    pub(crate) async fn search_products(
        &self,
        pool: &MySqlPool,
        term: &str,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<MySql, ProductRecord>(SEARCH_PRODUCTS_SQL)
            .bind(format!("%{term}%"))
            .fetch_all(pool)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        pool: &MySqlPool,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<MySql, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_inner())
            .fetch_optional(pool)
            .await
    }

    /// Insert a product, returning the id assigned by the database.
    pub(crate) async fn create_product(
        &self,
        pool: &MySqlPool,
        fields: &ProductFields,
    ) -> Result<u64, sqlx::Error> {
        let last_insert_id = query(CREATE_PRODUCT_SQL)
            .bind(&fields.name)
            .bind(&fields.description)
            .bind(fields.price)
            .bind(fields.quantity)
            .execute(pool)
            .await?
            .last_insert_id();

        Ok(last_insert_id)
    }

    pub(crate) async fn update_product(
        &self,
        pool: &MySqlPool,
        product: ProductId,
        fields: &ProductFields,
    ) -> Result<(), sqlx::Error> {
        query(UPDATE_PRODUCT_SQL)
            .bind(&fields.name)
            .bind(&fields.description)
            .bind(fields.price)
            .bind(fields.quantity)
            .bind(product.into_inner())
            .execute(pool)
            .await?;

        Ok(())
    }

    pub(crate) async fn delete_product(
        &self,
        pool: &MySqlPool,
        product: ProductId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_inner())
            .execute(pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, MySqlRow> for ProductRecord {
    fn from_row(row: &'r MySqlRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row
                .try_get::<Option<String>, _>("description")?
                .unwrap_or_default(),
            price: row.try_get::<Decimal, _>("price")?,
            quantity: row
                .try_get::<Option<i32>, _>("quantity")?
                .unwrap_or_default(),
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        })
    }
}
