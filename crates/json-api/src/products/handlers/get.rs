//! Get Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    envelope::{ApiError, ApiResponse},
    extensions::*,
    products::{errors::into_api_error, extract, models::ProductResponse},
    state::State,
};

/// Get Product Handler
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<ApiResponse<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = extract::product_id(req)?;

    let product = state
        .products
        .get_product(product)
        .await
        .map_err(|error| into_api_error(error, "fetching product"))?;

    Ok(ApiResponse::ok("Product found", product.into()))
}
