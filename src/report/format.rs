//! Display formatting for scalar field values.

use rust_decimal::Decimal;
use thiserror::Error;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::i18n::Locale;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

/// A scalar value extracted from a model record, ready for formatting.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Absent/empty value, rendered as the locale placeholder.
    Absent,
    /// Exact decimal money amount, rendered with two fractional digits.
    Money(Decimal),
    Bool(bool),
    Timestamp(OffsetDateTime),
    Int(i64),
    Float(f64),
    Text(String),
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// Renders a field value as a display string.
///
/// Money is quantized to two fractional digits, booleans become the locale
/// yes/no tokens, timestamps use a fixed `YYYY-MM-DD HH:MM` pattern and the
/// remaining scalars keep their natural form.
pub fn format_value(value: &FieldValue, locale: &dyn Locale) -> Result<String, FormatError> {
    let text = match value {
        FieldValue::Absent => locale.placeholder().to_string(),
        FieldValue::Money(amount) => {
            let mut amount = amount.round_dp(2);
            amount.rescale(2);
            amount.to_string()
        }
        FieldValue::Bool(flag) => {
            if *flag {
                locale.yes().to_string()
            } else {
                locale.no().to_string()
            }
        }
        FieldValue::Timestamp(stamp) => stamp.format(TIMESTAMP_FORMAT)?,
        FieldValue::Int(number) => number.to_string(),
        FieldValue::Float(number) => number.to_string(),
        FieldValue::Text(text) => text.clone(),
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::RuLocale;
    use rust_decimal_macros::dec;
    use time::macros::datetime;

    fn fmt(value: FieldValue) -> String {
        format_value(&value, &RuLocale).unwrap()
    }

    #[test]
    fn money_always_shows_two_fractional_digits() {
        assert_eq!(fmt(FieldValue::Money(dec!(5))), "5.00");
        assert_eq!(fmt(FieldValue::Money(dec!(12.3))), "12.30");
        assert_eq!(fmt(FieldValue::Money(dec!(1990.0000))), "1990.00");
        assert_eq!(fmt(FieldValue::Money(dec!(-0.5))), "-0.50");
    }

    #[test]
    fn booleans_use_locale_tokens() {
        assert_eq!(fmt(FieldValue::Bool(true)), "Да");
        assert_eq!(fmt(FieldValue::Bool(false)), "Нет");
    }

    #[test]
    fn timestamps_use_fixed_pattern() {
        let stamp = datetime!(2024-03-01 15:04:59 UTC);
        assert_eq!(fmt(FieldValue::Timestamp(stamp)), "2024-03-01 15:04");
    }

    #[test]
    fn absent_renders_placeholder() {
        assert_eq!(fmt(FieldValue::Absent), "—");
    }

    #[test]
    fn other_scalars_keep_natural_form() {
        assert_eq!(fmt(FieldValue::Int(123456789)), "123456789");
        assert_eq!(fmt(FieldValue::Float(0.3)), "0.3");
        assert_eq!(fmt(FieldValue::Text("COLOR_INDEX_GREEN".into())), "COLOR_INDEX_GREEN");
    }
}
