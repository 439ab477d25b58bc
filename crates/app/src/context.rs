//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, DatabaseSettings, Db, SchemaInitError},
    domain::products::{MySqlProductsService, ProductsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error(transparent)]
    Schema(#[from] SchemaInitError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    db: Db,
}

impl AppContext {
    /// Build application context from database settings.
    ///
    /// The `products` table is created when missing; the context is only
    /// returned once the schema is known to exist.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or
    /// initialising the schema fails.
    pub async fn from_settings(settings: &DatabaseSettings) -> Result<Self, AppInitError> {
        let pool = database::connect(settings)
            .await
            .map_err(AppInitError::Database)?;

        database::init_schema(&pool).await?;

        let db = Db::new(pool);

        Ok(Self {
            products: Arc::new(MySqlProductsService::new(db.clone())),
            db,
        })
    }

    /// Release every pooled connection.
    pub async fn close(&self) {
        self.db.close().await;
    }
}
