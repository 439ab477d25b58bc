//! Products

pub(crate) mod errors;
mod extract;
mod handlers;
pub(crate) mod models;

pub(crate) use handlers::*;
