//! Request extraction for product routes.

use salvo::prelude::Request;
use tracing::debug;

use product_manager_app::domain::products::{data::ProductInput, records::ProductId};

use crate::{envelope::ApiError, products::models::ProductRequest};

/// Path parameter carrying the product id.
pub(super) const PRODUCT_ID_PARAM: &str = "id";

/// Resolve the `{id}` path segment.
///
/// An id that is not an integer cannot match any row, so it is reported the
/// same way as an unknown id.
pub(super) fn product_id(req: &Request) -> Result<ProductId, ApiError> {
    req.param::<String>(PRODUCT_ID_PARAM)
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| ApiError::not_found("Product not found"))
}

/// Read a JSON or form body.
///
/// Blank numeric fields count as absent. A body that still cannot be parsed
/// (malformed JSON or a non-numeric `price`/`quantity`) yields an empty
/// input, which the service then rejects as missing its required fields.
pub(super) async fn product_input(req: &mut Request) -> ProductInput {
    match req.parse_body::<ProductRequest>().await {
        Ok(request) => request.into(),
        Err(source) => {
            debug!("could not parse product body: {source}");

            ProductInput::default()
        }
    }
}
