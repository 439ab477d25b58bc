//! Product Errors

use tracing::error;

use product_manager_app::domain::products::ProductsServiceError;

use crate::envelope::ApiError;

/// Map a service error to the response envelope.
///
/// `action` completes the sentence "Server error while ..." for storage
/// failures, e.g. `"creating product"`.
pub(crate) fn into_api_error(error: ProductsServiceError, action: &str) -> ApiError {
    match error {
        ProductsServiceError::NotFound => ApiError::not_found("Product not found"),
        ProductsServiceError::MissingRequiredData => {
            ApiError::bad_request("Product name and price are required")
        }
        ProductsServiceError::InvalidData(reason) => {
            ApiError::bad_request(format!("Invalid product data: {reason}"))
        }
        ProductsServiceError::Sql(source) => {
            error!("server error while {action}: {source}");

            ApiError::internal(format!("Server error while {action}"), source.to_string())
        }
        ProductsServiceError::IdOutOfRange(source) => {
            error!("server error while {action}: {source}");

            ApiError::internal(format!("Server error while {action}"), source.to_string())
        }
    }
}
