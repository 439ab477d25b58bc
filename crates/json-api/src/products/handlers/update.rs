//! Update Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    envelope::{ApiError, ApiResponse},
    extensions::*,
    products::{errors::into_api_error, extract, models::ProductResponse},
    state::State,
};

/// Update Product Handler
///
/// Overwrites every mutable field. Omitted optional fields fall back to
/// their defaults rather than keeping the stored value.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<ApiResponse<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = extract::product_id(req)?;
    let input = extract::product_input(req).await;

    let updated = state
        .products
        .update_product(product, input)
        .await
        .map_err(|error| into_api_error(error, "updating product"))?;

    Ok(ApiResponse::ok("Product updated successfully", updated.into()))
}
