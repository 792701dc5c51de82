//! Fixed, hand-tuned constants behind the score and the savings estimate.

pub struct IncomeCostsConfig {
    pub max: f64,
    /// Income/costs ratio at which the part starts earning points.
    pub break_even_ratio: f64,
    /// Ratio above break-even that earns full credit.
    pub full_credit_span: f64,
    pub curve_exponent: f64,
}

pub const INCOME_COSTS: IncomeCostsConfig = IncomeCostsConfig {
    max: 150.0,
    break_even_ratio: 1.0,
    full_credit_span: 0.5,
    curve_exponent: 0.7,
};

pub struct JobStabilityConfig {
    pub max: f64,
    pub permanent: f64,
    pub fixed_term: f64,
    pub self_employed: f64,
    pub unemployment_benefit: f64,
    pub other: f64,
}

pub const JOB_STABILITY: JobStabilityConfig = JobStabilityConfig {
    max: 50.0,
    permanent: 50.0,
    fixed_term: 35.0,
    self_employed: 25.0,
    unemployment_benefit: 10.0,
    other: 25.0,
};

pub struct DebtConfig {
    pub max: f64,
    /// Share of yearly net income at which the part drops to zero.
    pub zero_at_ratio: f64,
}

pub const DEBT: DebtConfig = DebtConfig {
    max: 150.0,
    zero_at_ratio: 0.3,
};

pub struct BufferConfig {
    pub max: f64,
    pub full_credit_months: f64,
}

pub const BUFFER: BufferConfig = BufferConfig {
    max: 100.0,
    full_credit_months: 3.0,
};

pub struct SavingsRateConfig {
    pub max: f64,
    pub full_credit_rate: f64,
}

pub const SAVINGS_RATE: SavingsRateConfig = SavingsRateConfig {
    max: 100.0,
    full_credit_rate: 0.10,
};

pub struct HousingConfig {
    pub max: f64,
    pub no_house: f64,
    pub debt_free: f64,
    /// `(ltv upper bound, score)` checked in order; first match wins.
    pub ltv_steps: [(f64, f64); 4],
    pub above_steps: f64,
}

pub const HOUSING: HousingConfig = HousingConfig {
    max: 100.0,
    no_house: 60.0,
    debt_free: 100.0,
    ltv_steps: [(0.50, 100.0), (0.70, 85.0), (0.85, 70.0), (0.95, 50.0)],
    above_steps: 25.0,
};

pub struct InsuranceConfig {
    pub max: f64,
    pub counted_policies: f64,
}

pub const INSURANCE: InsuranceConfig = InsuranceConfig {
    max: 100.0,
    counted_policies: 3.0,
};

pub struct SavingsEstimateConfig {
    pub short_debt_apr: f64,
    pub mortgage_ltv_threshold: f64,
    pub mortgage_rate_improvement: f64,
    pub buffer_months: f64,
    pub buffer_opportunity_rate: f64,
    pub savings_target_rate: f64,
    pub premium_share: f64,
}

pub const SAVINGS_ESTIMATE: SavingsEstimateConfig = SavingsEstimateConfig {
    short_debt_apr: 0.15,
    mortgage_ltv_threshold: 0.70,
    mortgage_rate_improvement: 0.005,
    buffer_months: 3.0,
    buffer_opportunity_rate: 0.05,
    savings_target_rate: 0.15,
    premium_share: 0.10,
};

/// Number of areas listed in the improvement ranking.
pub const TOP_IMPROVEMENTS: usize = 3;
