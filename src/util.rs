//! Small input helpers shared by callers of the report builder.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PriceInputError {
    #[error("empty price input")]
    Empty,
    #[error("price uses both ',' and '.' as separators")]
    MixedSeparators,
    #[error("invalid price: {0}")]
    Invalid(#[from] rust_decimal::Error),
}

/// Parses a user-typed price, accepting either comma or dot as the decimal
/// separator. Sellers in RU locales habitually type `129,90`.
pub fn parse_price(input: &str) -> Result<Decimal, PriceInputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PriceInputError::Empty);
    }
    if trimmed.contains(',') && trimmed.contains('.') {
        return Err(PriceInputError::MixedSeparators);
    }
    let normalized = trimmed.replace(',', ".");
    Ok(Decimal::from_str(&normalized)?)
}
