//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    envelope::{ApiError, ApiResponse},
    extensions::*,
    products::{errors::into_api_error, extract, models::ProductCreatedResponse},
    state::State,
};

/// Create Product Handler
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<ApiResponse<ProductCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let input = extract::product_input(req).await;

    let created = state
        .products
        .create_product(input)
        .await
        .map_err(|error| into_api_error(error, "creating product"))?;

    res.add_header(LOCATION, format!("/api/products/{}", created.id), true)
        .or_500("failed to set location header")?;

    Ok(ApiResponse::created(
        "Product created successfully",
        created.into(),
    ))
}
