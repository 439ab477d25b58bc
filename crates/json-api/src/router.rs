//! App Router

use salvo::Router;

use crate::{healthcheck, home, products};

/// Routes under `/api/products`.
///
/// `search` is registered before `{id}` so the literal segment is never
/// taken for a product id.
pub(crate) fn products_router() -> Router {
    Router::with_path("api/products")
        .get(products::index::handler)
        .post(products::create::handler)
        .push(Router::with_path("search").get(products::search::handler))
        .push(
            Router::with_path("{id}")
                .get(products::get::handler)
                .put(products::update::handler)
                .delete(products::delete::handler),
        )
}

pub(crate) fn app_router() -> Router {
    Router::new()
        .get(home::handler)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(products_router())
}
