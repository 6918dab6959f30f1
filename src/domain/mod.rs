//! The pricing model: product records and their derived economics.

pub mod entities;
pub mod pricing;

pub use entities::{
    Commissions, Item, MarketingAction, MarketingActions, ModelError, Price, PriceIndexData,
    PriceIndexes,
};
pub use pricing::{profit_at_marketing_price, profit_at_min_price, ProfitBreakdown};
