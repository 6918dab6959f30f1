//! Ordered field tables for section rows.
//!
//! Each entity keeps an explicit (identifier, accessor) list matching its
//! definition order; the section builder walks these tables instead of
//! reflecting over struct fields. Accessors return a `Result` so a value
//! that cannot be extracted costs only its own row. Nested composites are
//! deliberately not listed here since they get sections of their own.

use super::format::{FieldValue, FormatError};
use crate::domain::{Commissions, Item, Price, PriceIndexData};

pub type Accessor<T> = fn(&T) -> Result<FieldValue, FormatError>;

/// Scalar fields of [`Item`] in declaration order, followed by the six
/// derived commission figures.
pub const ITEM_FIELDS: &[(&str, Accessor<Item>)] = &[
    ("acquiring", |item| Ok(FieldValue::Money(item.acquiring))),
    ("offer_id", |item| Ok(FieldValue::Text(item.offer_id.clone()))),
    ("product_id", |item| Ok(FieldValue::Int(item.product_id))),
    ("volume_weight", |item| Ok(FieldValue::Float(item.volume_weight))),
    ("fbs_commission_without_percent", |item| {
        Ok(FieldValue::Money(item.fbs_commission_without_percent()))
    }),
    ("fbo_commission_without_percent", |item| {
        Ok(FieldValue::Money(item.fbo_commission_without_percent()))
    }),
    ("fbs_ozon_percent", |item| {
        Ok(FieldValue::Money(item.fbs_ozon_percent()))
    }),
    ("fbo_ozon_percent", |item| {
        Ok(FieldValue::Money(item.fbo_ozon_percent()))
    }),
    ("fbs_total_commission", |item| {
        Ok(FieldValue::Money(item.fbs_total_commission()))
    }),
    ("fbo_total_commission", |item| {
        Ok(FieldValue::Money(item.fbo_total_commission()))
    }),
];

pub const COMMISSIONS_FIELDS: &[(&str, Accessor<Commissions>)] = &[
    ("fbo_deliv_to_customer_amount", |c| {
        Ok(FieldValue::Money(c.fbo_deliv_to_customer_amount))
    }),
    ("fbo_direct_flow_trans_max_amount", |c| {
        Ok(FieldValue::Money(c.fbo_direct_flow_trans_max_amount))
    }),
    ("fbo_direct_flow_trans_min_amount", |c| {
        Ok(FieldValue::Money(c.fbo_direct_flow_trans_min_amount))
    }),
    ("fbo_return_flow_amount", |c| {
        Ok(FieldValue::Money(c.fbo_return_flow_amount))
    }),
    ("fbs_deliv_to_customer_amount", |c| {
        Ok(FieldValue::Money(c.fbs_deliv_to_customer_amount))
    }),
    ("fbs_direct_flow_trans_max_amount", |c| {
        Ok(FieldValue::Money(c.fbs_direct_flow_trans_max_amount))
    }),
    ("fbs_direct_flow_trans_min_amount", |c| {
        Ok(FieldValue::Money(c.fbs_direct_flow_trans_min_amount))
    }),
    ("fbs_first_mile_max_amount", |c| {
        Ok(FieldValue::Money(c.fbs_first_mile_max_amount))
    }),
    ("fbs_first_mile_min_amount", |c| {
        Ok(FieldValue::Money(c.fbs_first_mile_min_amount))
    }),
    ("fbs_return_flow_amount", |c| {
        Ok(FieldValue::Money(c.fbs_return_flow_amount))
    }),
    ("sales_percent_fbo", |c| Ok(FieldValue::Money(c.sales_percent_fbo))),
    ("sales_percent_fbs", |c| Ok(FieldValue::Money(c.sales_percent_fbs))),
];

pub const PRICE_FIELDS: &[(&str, Accessor<Price>)] = &[
    ("auto_action_enabled", |p| {
        Ok(FieldValue::Bool(p.auto_action_enabled))
    }),
    ("auto_add_to_ozon_actions_list_enabled", |p| {
        Ok(FieldValue::Bool(p.auto_add_to_ozon_actions_list_enabled))
    }),
    ("currency_code", |p| Ok(FieldValue::Text(p.currency_code.clone()))),
    ("marketing_price", |p| Ok(FieldValue::Money(p.marketing_price))),
    ("marketing_seller_price", |p| {
        Ok(FieldValue::Money(p.marketing_seller_price))
    }),
    ("min_price", |p| Ok(FieldValue::Money(p.min_price))),
    ("net_price", |p| Ok(FieldValue::Money(p.net_price))),
    ("old_price", |p| Ok(FieldValue::Money(p.old_price))),
    ("price", |p| Ok(FieldValue::Money(p.price))),
    ("retail_price", |p| Ok(FieldValue::Money(p.retail_price))),
    ("vat", |p| Ok(FieldValue::Money(p.vat))),
];

pub const PRICE_INDEX_DATA_FIELDS: &[(&str, Accessor<PriceIndexData>)] = &[
    ("min_price", |d| Ok(FieldValue::Float(d.min_price))),
    ("min_price_currency", |d| {
        Ok(FieldValue::Text(d.min_price_currency.clone()))
    }),
    ("price_index_value", |d| Ok(FieldValue::Float(d.price_index_value))),
];
