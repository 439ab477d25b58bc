//! Test helpers.

use std::sync::Arc;

use chrono::DateTime;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use product_manager_app::domain::products::{
    MockProductsService,
    records::{ProductId, ProductRecord},
};

use crate::state::State;

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    Arc::new(State::new(Arc::new(products)))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}

pub(crate) fn make_product(id: i32, name: &str) -> ProductRecord {
    ProductRecord {
        id: ProductId::new(id),
        name: name.to_string(),
        description: String::new(),
        price: Decimal::new(1999, 2),
        quantity: 1,
        created_at: DateTime::UNIX_EPOCH,
    }
}
