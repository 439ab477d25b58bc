//! Delete Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    envelope::{ApiError, ApiResponse},
    extensions::*,
    products::{errors::into_api_error, extract, models::ProductDeletedResponse},
    state::State,
};

/// Delete Product Handler
///
/// Echoes the id and name of the removed product.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<ApiResponse<ProductDeletedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = extract::product_id(req)?;

    let deleted = state
        .products
        .delete_product(product)
        .await
        .map_err(|error| into_api_error(error, "deleting product"))?;

    Ok(ApiResponse::ok("Product deleted successfully", deleted.into()))
}
