//! Rough yearly savings potential, independent of the score.
//!
//! Illustrative only. Every amount is kept at or above zero.

use crate::config::SAVINGS_ESTIMATE;
use crate::models::{FinancialProfile, SavingsEstimate};

pub fn estimate_savings(profile: &FinancialProfile) -> SavingsEstimate {
    let debt_interest = debt_interest(profile.short_debt_balance);
    let mortgage_rate = mortgage_rate(profile.house_value, profile.house_loan);
    let buffer_opportunity =
        buffer_opportunity(profile.emergency_buffer_kr, profile.fixed_cost_avg_12m);
    let savings_gap = savings_gap(profile.net_income_12m, profile.savings_rate_pct);

    let total = (debt_interest + mortgage_rate + buffer_opportunity + savings_gap).round();

    SavingsEstimate {
        debt_interest,
        mortgage_rate,
        buffer_opportunity,
        savings_gap,
        total,
        premium_upsell: premium_upsell(total),
    }
}

/// Yearly interest on short-term debt at the assumed APR.
pub fn debt_interest(short_debt_balance: f64) -> f64 {
    (short_debt_balance * SAVINGS_ESTIMATE.short_debt_apr).max(0.0)
}

/// Flat rate improvement on the whole loan, only above the LTV threshold.
pub fn mortgage_rate(house_value: f64, house_loan: f64) -> f64 {
    if house_value <= 0.0 || house_loan <= 0.0 {
        return 0.0;
    }
    if house_loan / house_value > SAVINGS_ESTIMATE.mortgage_ltv_threshold {
        house_loan * SAVINGS_ESTIMATE.mortgage_rate_improvement
    } else {
        0.0
    }
}

/// Opportunity cost on the missing part of a three-month buffer.
pub fn buffer_opportunity(buffer: f64, fixed_costs: f64) -> f64 {
    let target = fixed_costs * SAVINGS_ESTIMATE.buffer_months;
    ((target - buffer) * SAVINGS_ESTIMATE.buffer_opportunity_rate).max(0.0)
}

/// Yearly gap between the target savings rate and what is actually saved.
pub fn savings_gap(net_income: f64, savings_rate_pct: f64) -> f64 {
    let target = net_income * SAVINGS_ESTIMATE.savings_target_rate;
    let actual = net_income * savings_rate_pct / 100.0;
    ((target - actual) * 12.0).max(0.0)
}

pub fn premium_upsell(total: f64) -> f64 {
    (total * SAVINGS_ESTIMATE.premium_share).max(0.0).round()
}
