//! Derived commission figures and profit breakdowns.
//!
//! Everything here is a pure function of an immutable [`Item`]; values are
//! recomputed on every call, which is a handful of decimal operations.

use rust_decimal::{Decimal, RoundingStrategy};

use super::entities::Item;

/// Round-half-up to whole currency units. All "total" and "percent"
/// commission figures are reported as whole units under this policy.
fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Round-half-up to two fractional digits, used for margin percentages.
fn round_margin(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

impl Item {
    /// Fixed FBS fee components, before the percent-of-price commission.
    ///
    /// `fbs_return_flow_amount` is intentionally left out of the sum; the
    /// fee schedule treats the return flow separately.
    pub fn fbs_commission_without_percent(&self) -> Decimal {
        self.acquiring
            + self.commissions.fbs_deliv_to_customer_amount
            + self.commissions.fbs_first_mile_max_amount
            + self.commissions.fbs_direct_flow_trans_max_amount
    }

    /// Fixed FBO fee components, before the percent-of-price commission.
    /// No first mile in FBO; return flow excluded as in the FBS variant.
    pub fn fbo_commission_without_percent(&self) -> Decimal {
        self.acquiring
            + self.commissions.fbo_deliv_to_customer_amount
            + self.commissions.fbo_direct_flow_trans_max_amount
    }

    /// FBS percent commission, taken from the marketing seller price.
    pub fn fbs_ozon_percent(&self) -> Decimal {
        round_whole(
            self.price.marketing_seller_price * self.commissions.sales_percent_fbs
                / Decimal::from(100),
        )
    }

    /// FBO percent commission, taken from the marketing seller price.
    pub fn fbo_ozon_percent(&self) -> Decimal {
        round_whole(
            self.price.marketing_seller_price * self.commissions.sales_percent_fbo
                / Decimal::from(100),
        )
    }

    /// Full FBS commission: percent plus fixed components.
    pub fn fbs_total_commission(&self) -> Decimal {
        round_whole(self.fbs_ozon_percent() + self.fbs_commission_without_percent())
    }

    /// Full FBO commission: percent plus fixed components.
    pub fn fbo_total_commission(&self) -> Decimal {
        round_whole(self.fbo_ozon_percent() + self.fbo_commission_without_percent())
    }
}

/// Net-profit figures for one base price, ready for display or comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfitBreakdown {
    /// The purchase cost supplied by the seller.
    pub purchase_price: Decimal,
    /// The price the sale is assumed to happen at.
    pub base_price: Decimal,
    pub total_commission: Decimal,
    pub profit: Decimal,
    /// Profit relative to the purchase cost, percent, two fractional
    /// digits. Zero when the purchase cost is zero.
    pub profit_margin: Decimal,
}

fn margin(profit: Decimal, purchase_price: Decimal) -> Decimal {
    if purchase_price > Decimal::ZERO {
        round_margin(profit / purchase_price * Decimal::from(100))
    } else {
        Decimal::ZERO
    }
}

/// Profit if the item sells at the marketing seller price under FBS.
pub fn profit_at_marketing_price(item: &Item, purchase_price: Decimal) -> ProfitBreakdown {
    let base_price = item.price.marketing_seller_price;
    let total_commission = item.fbs_total_commission();
    let profit = base_price - total_commission - purchase_price;
    ProfitBreakdown {
        purchase_price,
        base_price,
        total_commission,
        profit,
        profit_margin: margin(profit, purchase_price),
    }
}

/// Profit if the item sells at the minimum allowed price under FBS.
///
/// The percent commission is recomputed from the minimum price; the fixed
/// components are the same as at the marketing price.
pub fn profit_at_min_price(item: &Item, purchase_price: Decimal) -> ProfitBreakdown {
    let base_price = item.price.min_price;
    let ozon_percent =
        round_whole(base_price * item.commissions.sales_percent_fbs / Decimal::from(100));
    let total_commission = item.fbs_commission_without_percent() + ozon_percent;
    let profit = base_price - total_commission - purchase_price;
    ProfitBreakdown {
        purchase_price,
        base_price,
        total_commission,
        profit,
        profit_margin: margin(profit, purchase_price),
    }
}
