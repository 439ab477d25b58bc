//! Product Manager Domain Concerns

pub mod products;
