//! Database connection management

use clap::Args;
use sqlx::{
    MySqlPool, query,
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
};
use thiserror::Error;
use tracing::{error, info};

const CREATE_PRODUCTS_TABLE_SQL: &str = include_str!("sql/create_products_table.sql");

/// Default number of pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Database connection settings.
#[derive(Debug, Clone, Args)]
pub struct DatabaseSettings {
    /// Database host
    #[arg(id = "db_host", long = "db-host", env = "DB_HOST", default_value = "localhost")]
    pub host: String,

    /// Database port
    #[arg(id = "db_port", long = "db-port", env = "DB_PORT", default_value_t = 3306)]
    pub port: u16,

    /// Database user
    #[arg(id = "db_user", long = "db-user", env = "DB_USER", default_value = "root")]
    pub user: String,

    /// Database password
    #[arg(
        id = "db_password",
        long = "db-password",
        env = "DB_PASSWORD",
        default_value = "",
        hide_env_values = true
    )]
    pub password: String,

    /// Database name
    #[arg(id = "db_name", long = "db-name", env = "DB_NAME")]
    pub name: String,

    /// Maximum number of pooled connections
    #[arg(
        id = "db_max_connections",
        long = "db-max-connections",
        env = "DB_MAX_CONNECTIONS",
        default_value_t = DEFAULT_MAX_CONNECTIONS
    )]
    pub max_connections: u32,
}

impl DatabaseSettings {
    #[must_use]
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

#[derive(Debug, Error)]
#[error("failed to initialise products table")]
pub struct SchemaInitError(#[source] pub sqlx::Error);

/// Long-lived handle to the connection pool.
#[derive(Debug, Clone)]
pub struct Db {
    pool: MySqlPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Wait for checked-out connections to return, then close the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Connect to `MySQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(settings: &DatabaseSettings) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(settings.connect_options())
        .await
}

/// Create the `products` table if it does not exist yet.
///
/// # Errors
///
/// Returns [`SchemaInitError`] when the statement cannot be executed.
pub async fn init_schema(pool: &MySqlPool) -> Result<(), SchemaInitError> {
    match query(CREATE_PRODUCTS_TABLE_SQL).execute(pool).await {
        Ok(_) => {
            info!("products table ready");

            Ok(())
        }
        Err(source) => {
            error!("failed to initialise products table: {source}");

            Err(SchemaInitError(source))
        }
    }
}
