//! Products Data

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::products::errors::ProductsServiceError;

/// Longest name accepted by the `VARCHAR(255)` column.
pub const MAX_NAME_CHARS: usize = 255;

/// Number of fractional digits stored for prices.
pub const PRICE_SCALE: u32 = 2;

/// Largest price representable by `DECIMAL(10, 2)`.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Product fields as submitted by a client, before validation.
///
/// Used for both creation and update: an update always overwrites every
/// mutable field, so both carry the same shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<i32>,
}

/// Validated product fields, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl ProductInput {
    /// Check required fields and apply defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::MissingRequiredData`] when the name is
    /// missing or empty or the price is missing, and
    /// [`ProductsServiceError::InvalidData`] when a value is out of range.
    pub fn validate(self) -> Result<ProductFields, ProductsServiceError> {
        let name = self.name.filter(|name| !name.is_empty());

        let (Some(name), Some(price)) = (name, self.price) else {
            return Err(ProductsServiceError::MissingRequiredData);
        };

        if name.chars().count() > MAX_NAME_CHARS {
            return Err(ProductsServiceError::InvalidData(format!(
                "name must be at most {MAX_NAME_CHARS} characters"
            )));
        }

        let price =
            price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);

        if price <= Decimal::ZERO {
            return Err(ProductsServiceError::InvalidData(
                "price must be greater than zero".to_string(),
            ));
        }

        if price > MAX_PRICE {
            return Err(ProductsServiceError::InvalidData(format!(
                "price must not exceed {MAX_PRICE}"
            )));
        }

        let quantity = self.quantity.unwrap_or_default();

        if quantity < 0 {
            return Err(ProductsServiceError::InvalidData(
                "quantity must not be negative".to_string(),
            ));
        }

        Ok(ProductFields {
            name,
            description: self.description.unwrap_or_default(),
            price,
            quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn input(name: Option<&str>, price: Option<Decimal>) -> ProductInput {
        ProductInput {
            name: name.map(ToString::to_string),
            price,
            ..ProductInput::default()
        }
    }

    #[test]
    fn test_validate_applies_defaults() -> TestResult {
        let fields = input(Some("Keyboard"), Some(Decimal::new(4999, 2))).validate()?;

        assert_eq!(
            fields,
            ProductFields {
                name: "Keyboard".to_string(),
                description: String::new(),
                price: Decimal::new(4999, 2),
                quantity: 0,
            }
        );

        Ok(())
    }

    #[test]
    fn test_validate_keeps_optional_fields() -> TestResult {
        let fields = ProductInput {
            name: Some("Mouse".to_string()),
            description: Some("Wireless".to_string()),
            price: Some(Decimal::new(1999, 2)),
            quantity: Some(12),
        }
        .validate()?;

        assert_eq!(fields.description, "Wireless");
        assert_eq!(fields.quantity, 12);

        Ok(())
    }

    #[test]
    fn test_validate_rounds_price_to_two_places() -> TestResult {
        let fields = input(Some("Cable"), Some(Decimal::new(12_345, 3))).validate()?;

        assert_eq!(fields.price, Decimal::new(1235, 2));

        Ok(())
    }

    #[test]
    fn test_validate_requires_name() {
        let result = input(None, Some(Decimal::ONE)).validate();

        assert!(
            matches!(result, Err(ProductsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let result = input(Some(""), Some(Decimal::ONE)).validate();

        assert!(
            matches!(result, Err(ProductsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[test]
    fn test_validate_requires_price() {
        let result = input(Some("Desk"), None).validate();

        assert!(
            matches!(result, Err(ProductsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_price() {
        for price in [Decimal::ZERO, Decimal::new(-100, 2), Decimal::new(1, 3)] {
            let result = input(Some("Desk"), Some(price)).validate();

            assert!(
                matches!(result, Err(ProductsServiceError::InvalidData(_))),
                "expected InvalidData for {price}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_validate_rejects_price_beyond_column_range() {
        let result = input(Some("Desk"), Some(Decimal::new(100_000_000, 0))).validate();

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidData(_))),
            "expected InvalidData, got {result:?}"
        );
    }

    #[test]
    fn test_validate_accepts_largest_price() -> TestResult {
        let fields = input(Some("Desk"), Some(Decimal::new(9_999_999_999, 2))).validate()?;

        assert_eq!(fields.price, MAX_PRICE);

        Ok(())
    }

    #[test]
    fn test_validate_rejects_negative_quantity() {
        let result = ProductInput {
            quantity: Some(-1),
            ..input(Some("Desk"), Some(Decimal::ONE))
        }
        .validate();

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidData(_))),
            "expected InvalidData, got {result:?}"
        );
    }

    #[test]
    fn test_validate_rejects_long_names() {
        let name = "n".repeat(MAX_NAME_CHARS + 1);

        let result = input(Some(&name), Some(Decimal::ONE)).validate();

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidData(_))),
            "expected InvalidData, got {result:?}"
        );
    }
}
