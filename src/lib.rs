//! Per-SKU seller economics for Ozon listings.
//!
//! - Parses a product/price record into an immutable pricing model and
//!   derives commission and profit figures with exact decimal arithmetic.
//! - Builds ordered, localized label/value sections ready for any
//!   presentation layer to render.
//!
//! Fetching the record from the seller API, credential handling and the
//! terminal UI live outside this crate; it only computes and formats.

pub mod domain;
pub mod i18n;
pub mod report;
pub mod util;

#[cfg(test)]
pub(crate) mod test_payload;

pub use domain::{
    profit_at_marketing_price, profit_at_min_price, Commissions, Item, MarketingAction,
    MarketingActions, ModelError, Price, PriceIndexData, PriceIndexes, ProfitBreakdown,
};
pub use i18n::{Locale, RuLocale, SectionTitle};
pub use report::{build_sections, ReportError, Section};
pub use util::{parse_price, PriceInputError};
