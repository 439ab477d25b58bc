//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    envelope::{ApiError, ApiResponse},
    extensions::*,
    products::{errors::into_api_error, models::ProductResponse},
    state::State,
};

/// Product Index Handler
///
/// Returns every product, newest first.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<ApiResponse<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .products
        .list_products()
        .await
        .map_err(|error| into_api_error(error, "listing products"))?;

    Ok(ApiResponse::ok(
        format!("{} products", products.len()),
        products.into_iter().map(Into::into).collect(),
    ))
}
