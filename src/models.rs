use std::fmt;

use serde::{Deserialize, Serialize};

/// Employment situation, used for the job stability part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    Permanent,
    FixedTerm,
    SelfEmployed,
    UnemploymentBenefit,
    #[default]
    #[serde(alias = "student")]
    Other,
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            JobType::Permanent => "permanent",
            JobType::FixedTerm => "fixed-term contract",
            JobType::SelfEmployed => "self-employed",
            JobType::UnemploymentBenefit => "unemployment benefit",
            JobType::Other => "other / student",
        };
        write!(f, "{}", label)
    }
}

/// One of the five financial health areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    IncomeJob,
    Debt,
    Savings,
    Housing,
    Insurance,
}

impl Area {
    pub const ALL: [Area; 5] = [
        Area::IncomeJob,
        Area::Debt,
        Area::Savings,
        Area::Housing,
        Area::Insurance,
    ];

    pub fn from_id(id: u8) -> Option<Area> {
        match id {
            1 => Some(Area::IncomeJob),
            2 => Some(Area::Debt),
            3 => Some(Area::Savings),
            4 => Some(Area::Housing),
            5 => Some(Area::Insurance),
            _ => None,
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Area::IncomeJob => 1,
            Area::Debt => 2,
            Area::Savings => 3,
            Area::Housing => 4,
            Area::Insurance => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Area::IncomeJob => "income & job",
            Area::Debt => "debt",
            Area::Savings => "savings",
            Area::Housing => "housing",
            Area::Insurance => "insurance",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A snapshot of the figures a user enters.
///
/// Amounts are monthly averages over the last 12 months unless the field
/// name says otherwise. Only a subset feeds the score, see
/// [`FinancialProfile::unscored_fields`]; the rest are kept so that the
/// record round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialProfile {
    // income & job
    pub net_income_12m: f64,
    pub gross_income_12m: f64,
    pub job_type: JobType,
    pub years_in_job: f64,
    pub income_variation_pct: f64,

    // fixed costs & cash flow
    pub fixed_cost_avg_12m: f64,
    pub variable_cost_avg_12m: f64,
    pub months_negative_cashflow_12m: u32,

    // short-term debt
    pub short_debt_balance: f64,
    pub short_debt_monthly_payment: f64,
    pub short_debt_interest_pct: f64,
    pub credit_card_count: u32,
    pub missed_payments_12m: u32,

    // housing
    pub house_value: f64,
    pub house_loan: f64,
    pub mortgage_rate_pct: f64,
    pub mortgage_fixed_rate: bool,
    pub mortgage_years_left: u32,

    // savings
    pub emergency_buffer_kr: f64,
    pub savings_rate_pct: f64,
    pub investments_kr: f64,

    // pension
    pub pension_contribution_pct: f64,
    pub pension_savings_kr: f64,

    // insurance
    pub has_indbo: bool,
    pub has_ulykke: bool,
    pub has_liv: bool,
    pub has_kritisk: bool,
    pub has_erhvervsevne: bool,

    // behaviour
    pub overdrafts_12m: u32,
    pub subscription_spend_month: f64,
}

impl FinancialProfile {
    /// Field names (as serialized) that the scoring formula ignores.
    pub fn unscored_fields() -> &'static [&'static str] {
        &[
            "grossIncome12m",
            "yearsInJob",
            "incomeVariationPct",
            "variableCostAvg12m",
            "monthsNegativeCashflow12m",
            "shortDebtMonthlyPayment",
            "shortDebtInterestPct",
            "creditCardCount",
            "missedPayments12m",
            "mortgageRatePct",
            "mortgageFixedRate",
            "mortgageYearsLeft",
            "investmentsKr",
            "pensionContributionPct",
            "pensionSavingsKr",
            "hasKritisk",
            "hasErhvervsevne",
            "overdrafts12m",
            "subscriptionSpendMonth",
        ]
    }

    /// Every floating point field with its serialized name.
    pub fn amounts(&self) -> [(&'static str, f64); 18] {
        [
            ("netIncome12m", self.net_income_12m),
            ("grossIncome12m", self.gross_income_12m),
            ("yearsInJob", self.years_in_job),
            ("incomeVariationPct", self.income_variation_pct),
            ("fixedCostAvg12m", self.fixed_cost_avg_12m),
            ("variableCostAvg12m", self.variable_cost_avg_12m),
            ("shortDebtBalance", self.short_debt_balance),
            ("shortDebtMonthlyPayment", self.short_debt_monthly_payment),
            ("shortDebtInterestPct", self.short_debt_interest_pct),
            ("houseValue", self.house_value),
            ("houseLoan", self.house_loan),
            ("mortgageRatePct", self.mortgage_rate_pct),
            ("emergencyBufferKr", self.emergency_buffer_kr),
            ("savingsRatePct", self.savings_rate_pct),
            ("investmentsKr", self.investments_kr),
            ("pensionContributionPct", self.pension_contribution_pct),
            ("pensionSavingsKr", self.pension_savings_kr),
            ("subscriptionSpendMonth", self.subscription_spend_month),
        ]
    }
}

/// A single scored criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartScore {
    pub key: &'static str,
    pub label: &'static str,
    pub score: f64,
    pub max: f64,
    pub area: Area,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub total: f64,
    pub max: f64,
    pub percent: f64,
    pub parts: Vec<PartScore>,
}

/// Parts of one area summed together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaScore {
    pub area: Area,
    pub score: f64,
    pub max: f64,
    pub percent: f64,
}

impl AreaScore {
    pub fn lost(&self) -> f64 {
        self.max - self.score
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipSuggestion {
    pub area: Area,
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub boost: &'static str,
}

/// An area ranked by how many points it is missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Improvement {
    pub area: Area,
    pub lost: f64,
    pub tip: Option<TipSuggestion>,
}

/// Yearly amounts a user could plausibly save. The terms are raw amounts;
/// `total` and `premium_upsell` are rounded to whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsEstimate {
    pub debt_interest: f64,
    pub mortgage_rate: f64,
    pub buffer_opportunity: f64,
    pub savings_gap: f64,
    pub total: f64,
    pub premium_upsell: f64,
}
