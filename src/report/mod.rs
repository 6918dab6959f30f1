//! Turns a pricing-model item into ordered, labeled display sections.
//!
//! The builder knows nothing about presentation technology; it hands the
//! caller a list of titled label/value tables to iterate. Section order is
//! a fixed contract: optional profit sections first, then main fields,
//! commissions, price, price indexes and marketing actions.

pub mod fields;
pub mod format;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::domain::{pricing, Item, MarketingActions, PriceIndexes, ProfitBreakdown};
use crate::i18n::{Locale, SectionTitle};
use fields::Accessor;
use format::{format_value, FieldValue, FormatError};

/// A display unit: a title and ordered label/value rows.
///
/// Rows keep insertion order; labels need not be unique. Sections hold no
/// back-reference to the item they were built from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub rows: Vec<(String, String)>,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("purchase price must be non-negative, got {0}")]
    NegativePurchasePrice(Decimal),
}

/// Builds the full ordered section list for one item.
///
/// With a purchase price supplied the two profit sections lead the list;
/// the price must be non-negative. Construction is deterministic and
/// side-effect free: the same item and price always produce the same
/// sections.
pub fn build_sections(
    item: &Item,
    purchase_price: Option<Decimal>,
    locale: &dyn Locale,
) -> Result<Vec<Section>, ReportError> {
    if let Some(price) = purchase_price {
        if price < Decimal::ZERO {
            return Err(ReportError::NegativePurchasePrice(price));
        }
    }

    let mut sections = Vec::new();

    if let Some(price) = purchase_price {
        sections.push(profit_section(
            pricing::profit_at_marketing_price(item, price),
            "marketing_price",
            SectionTitle::ProfitAtMarketingPrice,
            locale,
        ));
        sections.push(profit_section(
            pricing::profit_at_min_price(item, price),
            "min_price",
            SectionTitle::ProfitAtMinPrice,
            locale,
        ));
    }

    sections.push(section_from_fields(
        item,
        fields::ITEM_FIELDS,
        SectionTitle::MainFields,
        locale,
    ));
    sections.push(section_from_fields(
        &item.commissions,
        fields::COMMISSIONS_FIELDS,
        SectionTitle::Commissions,
        locale,
    ));
    sections.push(section_from_fields(
        &item.price,
        fields::PRICE_FIELDS,
        SectionTitle::Price,
        locale,
    ));
    sections.extend(price_index_sections(&item.price_indexes, locale));
    sections.push(marketing_actions_section(&item.marketing_actions, locale));

    Ok(sections)
}

/// Appends one row, dropping it if extraction or formatting fails. A bad
/// value costs its own row only, never the section.
fn push_row(
    rows: &mut Vec<(String, String)>,
    label: String,
    value: Result<FieldValue, FormatError>,
    locale: &dyn Locale,
) {
    if let Ok(text) = value.and_then(|value| format_value(&value, locale)) {
        rows.push((label, text));
    }
}

fn section_from_fields<T>(
    model: &T,
    table: &[(&str, Accessor<T>)],
    title: SectionTitle,
    locale: &dyn Locale,
) -> Section {
    let mut rows = Vec::with_capacity(table.len());
    for (field, accessor) in table {
        push_row(&mut rows, locale.label(field), accessor(model), locale);
    }
    Section {
        title: locale.section_title(title),
        rows,
    }
}

fn profit_section(
    breakdown: ProfitBreakdown,
    base_price_field: &str,
    title: SectionTitle,
    locale: &dyn Locale,
) -> Section {
    let mut rows = Vec::with_capacity(5);
    push_row(
        &mut rows,
        locale.label("user_purchase_price"),
        Ok(FieldValue::Money(breakdown.purchase_price)),
        locale,
    );
    push_row(
        &mut rows,
        locale.label(base_price_field),
        Ok(FieldValue::Money(breakdown.base_price)),
        locale,
    );
    push_row(
        &mut rows,
        locale.label("total_commission"),
        Ok(FieldValue::Money(breakdown.total_commission)),
        locale,
    );
    push_row(
        &mut rows,
        locale.label("profit"),
        Ok(FieldValue::Money(breakdown.profit)),
        locale,
    );
    if let Ok(margin) = format_value(&FieldValue::Money(breakdown.profit_margin), locale) {
        rows.push((locale.label("profit_margin"), format!("{margin}%")));
    }
    Section {
        title: locale.section_title(title),
        rows,
    }
}

/// One section for the color index, then one per present snapshot in the
/// fixed external/Ozon/self-marketplaces order.
fn price_index_sections(indexes: &PriceIndexes, locale: &dyn Locale) -> Vec<Section> {
    let mut sections = Vec::with_capacity(4);

    let mut rows = Vec::with_capacity(1);
    push_row(
        &mut rows,
        locale.label("color_index"),
        Ok(FieldValue::Text(indexes.color_index.clone())),
        locale,
    );
    sections.push(Section {
        title: locale.section_title(SectionTitle::PriceIndexes),
        rows,
    });

    let snapshots = [
        (&indexes.external_index_data, SectionTitle::ExternalIndex),
        (&indexes.ozon_index_data, SectionTitle::OzonIndex),
        (
            &indexes.self_marketplaces_index_data,
            SectionTitle::SelfMarketplacesIndex,
        ),
    ];
    for (snapshot, title) in snapshots {
        if let Some(data) = snapshot {
            sections.push(section_from_fields(
                data,
                fields::PRICE_INDEX_DATA_FIELDS,
                title,
                locale,
            ));
        }
    }

    sections
}

fn marketing_actions_section(actions: &MarketingActions, locale: &dyn Locale) -> Section {
    let mut rows = Vec::new();

    if let Some(from) = actions.current_period_from {
        push_row(
            &mut rows,
            locale.label("current_period_from"),
            Ok(FieldValue::Timestamp(from)),
            locale,
        );
    }
    if let Some(to) = actions.current_period_to {
        push_row(
            &mut rows,
            locale.label("current_period_to"),
            Ok(FieldValue::Timestamp(to)),
            locale,
        );
    }
    push_row(
        &mut rows,
        locale.label("ozon_actions_exist"),
        Ok(FieldValue::Bool(actions.ozon_actions_exist)),
        locale,
    );

    if actions.actions.is_empty() {
        rows.push((locale.label("actions"), locale.placeholder().to_string()));
    } else {
        rows.push((
            locale.label("actions"),
            locale.actions_count(actions.actions.len()),
        ));
        for (index, action) in actions.actions.iter().enumerate() {
            let value = format_value(&FieldValue::Float(action.value), locale);
            let from = format_value(&FieldValue::Timestamp(action.date_from), locale);
            let to = format_value(&FieldValue::Timestamp(action.date_to), locale);
            // a promotion whose dates cannot be rendered is dropped whole
            if let (Ok(value), Ok(from), Ok(to)) = (value, from, to) {
                rows.push((
                    locale.action_label(index + 1),
                    format!("{} ({}) {} - {}", action.title, value, from, to),
                ));
            }
        }
    }

    Section {
        title: locale.section_title(SectionTitle::MarketingActions),
        rows,
    }
}
