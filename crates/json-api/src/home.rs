//! Service description served at the root path.

use salvo::prelude::*;
use serde::Serialize;

use crate::envelope::ApiResponse;

const ENDPOINTS: [(&str, &str); 7] = [
    ("GET /", "Service description"),
    ("POST /api/products", "Create a product"),
    ("GET /api/products", "List all products, newest first"),
    (
        "GET /api/products/search?name=...",
        "Search products by name (case-insensitive substring)",
    ),
    ("GET /api/products/{id}", "Get a product"),
    ("PUT /api/products/{id}", "Replace a product's fields"),
    ("DELETE /api/products/{id}", "Delete a product"),
];

#[derive(Debug, Serialize)]
pub(crate) struct EndpointDescription {
    pub route: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ServiceDescription {
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<EndpointDescription>,
}

#[handler]
pub(crate) async fn handler() -> ApiResponse<ServiceDescription> {
    let endpoints = ENDPOINTS
        .into_iter()
        .map(|(route, description)| EndpointDescription { route, description })
        .collect();

    ApiResponse::ok(
        "Welcome to the Product Manager API",
        ServiceDescription {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            endpoints,
        },
    )
}
