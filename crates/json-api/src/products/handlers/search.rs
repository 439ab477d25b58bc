//! Product Search Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    envelope::{ApiError, ApiResponse},
    extensions::*,
    products::{errors::into_api_error, models::ProductResponse},
    state::State,
};

const NAME_QUERY: &str = "name";

/// Product Search Handler
///
/// Returns products whose name contains `?name=`, ignoring case. No match
/// is still a success with an empty list.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<ApiResponse<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let term = req
        .query::<String>(NAME_QUERY)
        .filter(|term| !term.is_empty())
        .ok_or_else(|| ApiError::bad_request("Please provide a search keyword (name)"))?;

    let products = state
        .products
        .search_products(term)
        .await
        .map_err(|error| into_api_error(error, "searching products"))?;

    Ok(ApiResponse::ok(
        format!("Found {} products", products.len()),
        products.into_iter().map(Into::into).collect(),
    ))
}
