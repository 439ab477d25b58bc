//! Product Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::{ParseIntError, TryFromIntError},
    str::FromStr,
};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::products::data::ProductFields;

/// Product ID
///
/// Assigned by the database on insert and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(i32);

impl ProductId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value.parse().map(Self)
    }
}

impl TryFrom<u64> for ProductId {
    type Error = TryFromIntError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        i32::try_from(value).map(Self)
    }
}

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

impl ProductRecord {
    /// Overwrite every mutable field, keeping `id` and `created_at`.
    #[must_use]
    pub fn with_fields(self, fields: ProductFields) -> Self {
        Self {
            name: fields.name,
            description: fields.description,
            price: fields.price,
            quantity: fields.quantity,
            ..self
        }
    }
}

/// Freshly inserted product: the assigned id plus the stored fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedProductRecord {
    pub id: ProductId,
    pub fields: ProductFields,
}
