//! Product request and response bodies.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    marker::PhantomData,
    str::FromStr,
};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{Error as DeError, Visitor},
};

use product_manager_app::domain::products::{
    data::ProductInput,
    records::{CreatedProductRecord, ProductRecord},
};

/// Create/update request body, accepted as JSON or form data.
///
/// `price` and `quantity` may be sent as numbers or numeric strings. An empty
/// string counts as absent, which is what HTML forms send for blank inputs.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,

    #[serde(default, deserialize_with = "optional_number")]
    pub price: Option<Decimal>,

    #[serde(default, deserialize_with = "optional_number")]
    pub quantity: Option<i32>,
}

fn optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    deserializer.deserialize_any(OptionalNumberVisitor(PhantomData))
}

struct OptionalNumberVisitor<T>(PhantomData<T>);

impl<T> OptionalNumberVisitor<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn parse<E: DeError>(raw: &str) -> Result<Option<T>, E> {
        let raw = raw.trim();

        if raw.is_empty() {
            return Ok(None);
        }

        raw.parse()
            .map(Some)
            .map_err(|error| E::custom(format!("invalid number `{raw}`: {error}")))
    }
}

impl<'de, T> Visitor<'de> for OptionalNumberVisitor<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Value = Option<T>;

    fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("a number, a numeric string or null")
    }

    fn visit_none<E: DeError>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: DeError>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_i64<E: DeError>(self, value: i64) -> Result<Self::Value, E> {
        Self::parse(&value.to_string())
    }

    fn visit_u64<E: DeError>(self, value: u64) -> Result<Self::Value, E> {
        Self::parse(&value.to_string())
    }

    fn visit_f64<E: DeError>(self, value: f64) -> Result<Self::Value, E> {
        Self::parse(&value.to_string())
    }

    fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
        Self::parse(value)
    }
}

impl From<ProductRequest> for ProductInput {
    fn from(request: ProductRequest) -> Self {
        ProductInput {
            name: request.name,
            description: request.description,
            price: request.price,
            quantity: request.quantity,
        }
    }
}

/// A stored product.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: String,

    /// Decimal string with two fractional digits, e.g. `"19.99"`
    pub price: Decimal,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into_inner(),
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
            created_at: product.created_at,
        }
    }
}

/// Assigned id plus the fields that were stored.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProductCreatedResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl From<CreatedProductRecord> for ProductCreatedResponse {
    fn from(created: CreatedProductRecord) -> Self {
        ProductCreatedResponse {
            id: created.id.into_inner(),
            name: created.fields.name,
            description: created.fields.description,
            price: created.fields.price,
            quantity: created.fields.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProductDeletedResponse {
    pub id: i32,
    pub name: String,
}

impl From<ProductRecord> for ProductDeletedResponse {
    fn from(product: ProductRecord) -> Self {
        ProductDeletedResponse {
            id: product.id.into_inner(),
            name: product.name,
        }
    }
}
