use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

/// Per-fulfillment-mode fee components from the seller API.
///
/// FBO = fulfilled by Ozon, FBS = fulfilled by seller. Amounts are exact
/// decimals; the two `sales_percent_*` fields are rates in the 0–100 range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Commissions {
    pub fbo_deliv_to_customer_amount: Decimal,
    pub fbo_direct_flow_trans_max_amount: Decimal,
    pub fbo_direct_flow_trans_min_amount: Decimal,
    pub fbo_return_flow_amount: Decimal,
    pub fbs_deliv_to_customer_amount: Decimal,
    pub fbs_direct_flow_trans_max_amount: Decimal,
    pub fbs_direct_flow_trans_min_amount: Decimal,
    pub fbs_first_mile_max_amount: Decimal,
    pub fbs_first_mile_min_amount: Decimal,
    pub fbs_return_flow_amount: Decimal,
    pub sales_percent_fbo: Decimal,
    pub sales_percent_fbs: Decimal,
}

/// A single marketplace promotion the listing participates in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketingAction {
    #[serde(with = "time::serde::rfc3339")]
    pub date_from: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub date_to: OffsetDateTime,
    pub title: String,
    pub value: f64,
}

/// Promotion state for the listing. `actions` keeps the API order, which is
/// also the presentation order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketingActions {
    pub actions: Vec<MarketingAction>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub current_period_from: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub current_period_to: Option<OffsetDateTime>,
    pub ozon_actions_exist: bool,
}

/// The listing's pricing facts as reported by the marketplace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub auto_action_enabled: bool,
    pub auto_add_to_ozon_actions_list_enabled: bool,
    pub currency_code: String,
    pub marketing_price: Decimal,
    pub marketing_seller_price: Decimal,
    pub min_price: Decimal,
    pub net_price: Decimal,
    pub old_price: Decimal,
    pub price: Decimal,
    pub retail_price: Decimal,
    pub vat: Decimal,
}

/// One price-index snapshot (external, Ozon-wide or the seller's own
/// marketplaces). The index value is an analytic ratio, not money, so it
/// stays floating point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceIndexData {
    pub min_price: f64,
    pub min_price_currency: String,
    pub price_index_value: f64,
}

/// Color-coded price-index classification plus up to three snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceIndexes {
    pub color_index: String,
    pub external_index_data: Option<PriceIndexData>,
    pub ozon_index_data: Option<PriceIndexData>,
    pub self_marketplaces_index_data: Option<PriceIndexData>,
}

/// A fully-populated product record, the root of the pricing model.
///
/// Constructed once from a parsed API payload and read-only afterwards.
/// Commission and profit figures are derived on demand, see
/// [`crate::domain::pricing`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub acquiring: Decimal,
    pub commissions: Commissions,
    pub marketing_actions: MarketingActions,
    pub offer_id: String,
    pub price: Price,
    pub price_indexes: PriceIndexes,
    pub product_id: i64,
    pub volume_weight: f64,
}

impl Item {
    /// Builds an `Item` from a parsed JSON product record.
    ///
    /// Fails with [`ModelError`] when a required field is absent, of the
    /// wrong shape or not a valid number. The error is propagated as-is;
    /// no recovery is attempted here.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ModelError> {
        let item = serde_json::from_value(value)?;
        Ok(item)
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("malformed product record: {0}")]
    InvalidRecord(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn item_parses_from_full_record() {
        let item = Item::from_value(crate::test_payload::full_item()).unwrap();
        assert_eq!(item.offer_id, "ABC-123");
        assert_eq!(item.product_id, 123456789);
        assert_eq!(item.acquiring, dec!(12.50));
        assert_eq!(item.price.marketing_seller_price, dec!(1000.00));
        assert_eq!(item.commissions.sales_percent_fbs, dec!(10));
        assert!(item.price_indexes.external_index_data.is_some());
    }

    #[test]
    fn item_accepts_string_encoded_amounts() {
        // The price API sends decimals as strings ("1990.0000").
        let mut value = crate::test_payload::full_item();
        value["acquiring"] = json!("17.9900");
        let item = Item::from_value(value).unwrap();
        assert_eq!(item.acquiring, dec!(17.99));
    }

    #[test]
    fn missing_required_field_is_a_structural_error() {
        let mut value = crate::test_payload::full_item();
        value.as_object_mut().unwrap().remove("price");
        let err = Item::from_value(value).unwrap_err();
        assert!(matches!(err, ModelError::InvalidRecord(_)));
    }

    #[test]
    fn non_numeric_amount_is_a_structural_error() {
        let mut value = crate::test_payload::full_item();
        value["commissions"]["sales_percent_fbs"] = json!("not a number");
        assert!(Item::from_value(value).is_err());
    }
}
