//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, instrument, warn};

use crate::{
    database::Db,
    domain::products::{
        data::ProductInput,
        errors::ProductsServiceError,
        records::{CreatedProductRecord, ProductId, ProductRecord},
        repository::MySqlProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct MySqlProductsService {
    db: Db,
    repository: MySqlProductsRepository,
}

impl MySqlProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: MySqlProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for MySqlProductsService {
    #[instrument(skip(self), err)]
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let products = self.repository.list_products(self.db.pool()).await?;

        Ok(products)
    }

    #[instrument(skip(self), err)]
    async fn search_products(
        &self,
        term: String,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let products = self.repository.search_products(self.db.pool(), &term).await?;

        debug!(matches = products.len(), "searched products");

        Ok(products)
    }

    #[instrument(skip(self), err)]
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        let record = self
            .repository
            .get_product(self.db.pool(), product)
            .await?
            .ok_or(ProductsServiceError::NotFound)?;

        Ok(record)
    }

    #[instrument(skip(self), err)]
    async fn create_product(
        &self,
        input: ProductInput,
    ) -> Result<CreatedProductRecord, ProductsServiceError> {
        let fields = input.validate()?;

        let last_insert_id = self.repository.create_product(self.db.pool(), &fields).await?;

        let id = ProductId::try_from(last_insert_id)?;

        debug!(%id, "created product");

        Ok(CreatedProductRecord { id, fields })
    }

    #[instrument(skip(self), err)]
    async fn update_product(
        &self,
        product: ProductId,
        input: ProductInput,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let existing = self
            .repository
            .get_product(self.db.pool(), product)
            .await?
            .ok_or(ProductsServiceError::NotFound)?;

        let fields = input.validate()?;

        self.repository
            .update_product(self.db.pool(), product, &fields)
            .await?;

        Ok(existing.with_fields(fields))
    }

    #[instrument(skip(self), err)]
    async fn delete_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        let existing = self
            .repository
            .get_product(self.db.pool(), product)
            .await?
            .ok_or(ProductsServiceError::NotFound)?;

        let rows_affected = self.repository.delete_product(self.db.pool(), product).await?;

        if rows_affected == 0 {
            warn!(%product, "product disappeared before it could be deleted");
        }

        Ok(existing)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieve every product, newest first.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve products whose name contains `term`, ignoring case.
    async fn search_products(&self, term: String)
    -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Validate `input` and insert it as a new product.
    async fn create_product(
        &self,
        input: ProductInput,
    ) -> Result<CreatedProductRecord, ProductsServiceError>;

    /// Overwrite every mutable field of an existing product.
    ///
    /// Existence is checked before `input` is validated, so an unknown id is
    /// reported as [`ProductsServiceError::NotFound`] even when the input is
    /// also invalid.
    async fn update_product(
        &self,
        product: ProductId,
        input: ProductInput,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Delete a product, returning the record as it was before deletion.
    async fn delete_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn input(name: &str, price: Decimal) -> ProductInput {
        ProductInput {
            name: Some(name.to_string()),
            price: Some(price),
            ..ProductInput::default()
        }
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn create_product_returns_assigned_id_and_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .products
            .create_product(ProductInput {
                name: Some("Keyboard".to_string()),
                description: Some("Mechanical".to_string()),
                price: Some(Decimal::new(4999, 2)),
                quantity: Some(3),
            })
            .await?;

        assert!(created.id.into_inner() > 0);
        assert_eq!(created.fields.name, "Keyboard");
        assert_eq!(created.fields.description, "Mechanical");
        assert_eq!(created.fields.price, Decimal::new(4999, 2));
        assert_eq!(created.fields.quantity, 3);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn get_product_returns_created_product_with_defaults() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .products
            .create_product(input("Mouse", Decimal::new(1999, 2)))
            .await?;

        let product = ctx.products.get_product(created.id).await?;

        assert_eq!(product.id, created.id);
        assert_eq!(product.name, "Mouse");
        assert_eq!(product.description, "");
        assert_eq!(product.price, Decimal::new(1999, 2));
        assert_eq!(product.quantity, 0);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn get_product_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.get_product(ProductId::new(999_999)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn list_products_returns_newest_first() -> TestResult {
        let ctx = TestContext::new().await;

        let first = ctx
            .products
            .create_product(input("First", Decimal::ONE))
            .await?;

        let second = ctx
            .products
            .create_product(input("Second", Decimal::TWO))
            .await?;

        let third = ctx
            .products
            .create_product(input("Third", Decimal::TEN))
            .await?;

        let ids: Vec<ProductId> = ctx
            .products
            .list_products()
            .await?
            .iter()
            .map(|product| product.id)
            .collect();

        assert_eq!(ids, vec![third.id, second.id, first.id]);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn list_products_empty_when_none_created() -> TestResult {
        let ctx = TestContext::new().await;

        let products = ctx.products.list_products().await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn search_products_matches_substring_ignoring_case() -> TestResult {
        let ctx = TestContext::new().await;

        let keyboard = ctx
            .products
            .create_product(input("Wireless Keyboard", Decimal::TEN))
            .await?;

        ctx.products
            .create_product(input("Desk Lamp", Decimal::TEN))
            .await?;

        let products = ctx.products.search_products("KEYB".to_string()).await?;

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, keyboard.id);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn search_products_without_matches_is_empty() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products
            .create_product(input("Desk Lamp", Decimal::TEN))
            .await?;

        let products = ctx.products.search_products("chair".to_string()).await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn create_product_without_price_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .create_product(ProductInput {
                name: Some("Chair".to_string()),
                ..ProductInput::default()
            })
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );

        assert!(ctx.products.list_products().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn update_product_overwrites_fields_and_keeps_created_at() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .products
            .create_product(ProductInput {
                quantity: Some(5),
                description: Some("Old".to_string()),
                ..input("Lamp", Decimal::new(1500, 2))
            })
            .await?;

        let before = ctx.products.get_product(created.id).await?;

        let updated = ctx
            .products
            .update_product(created.id, input("Lamp v2", Decimal::new(1750, 2)))
            .await?;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Lamp v2");
        assert_eq!(updated.price, Decimal::new(1750, 2));
        assert_eq!(updated.description, "");
        assert_eq!(updated.quantity, 0);
        assert_eq!(updated.created_at, before.created_at);

        let stored = ctx.products.get_product(created.id).await?;

        assert_eq!(stored, updated);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn update_product_unknown_id_returns_not_found_before_validation() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .update_product(ProductId::new(999_999), ProductInput::default())
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn update_product_with_invalid_input_leaves_record_untouched() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .products
            .create_product(input("Lamp", Decimal::TEN))
            .await?;

        let result = ctx
            .products
            .update_product(
                created.id,
                ProductInput {
                    name: Some(String::new()),
                    price: Some(Decimal::ONE),
                    ..ProductInput::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );

        let stored = ctx.products.get_product(created.id).await?;

        assert_eq!(stored.name, "Lamp");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn delete_product_returns_record_and_makes_it_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .products
            .create_product(input("Cable", Decimal::ONE))
            .await?;

        let deleted = ctx.products.delete_product(created.id).await?;

        assert_eq!(deleted.id, created.id);
        assert_eq!(deleted.name, "Cable");

        let result = ctx.products.get_product(created.id).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn delete_product_twice_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .products
            .create_product(input("Cable", Decimal::ONE))
            .await?;

        ctx.products.delete_product(created.id).await?;

        let result = ctx.products.delete_product(created.id).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn deleted_product_not_returned_in_list() -> TestResult {
        let ctx = TestContext::new().await;

        let kept = ctx
            .products
            .create_product(input("Kept", Decimal::ONE))
            .await?;

        let removed = ctx
            .products
            .create_product(input("Removed", Decimal::ONE))
            .await?;

        ctx.products.delete_product(removed.id).await?;

        let ids: Vec<ProductId> = ctx
            .products
            .list_products()
            .await?
            .iter()
            .map(|product| product.id)
            .collect();

        assert_eq!(ids, vec![kept.id]);

        Ok(())
    }
}
