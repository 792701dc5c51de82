use rand::RngCore;
use tracing::debug;

use crate::config::{
    BUFFER, DEBT, HOUSING, INCOME_COSTS, INSURANCE, JOB_STABILITY, SAVINGS_RATE, TOP_IMPROVEMENTS,
};
use crate::models::{
    Area, AreaScore, FinancialProfile, Improvement, JobType, PartScore, ScoreBreakdown,
};
use crate::input::NamedProfile;
use crate::tips;

/// Scores a profile across all seven parts.
///
/// Total over any profile with finite amounts: every denominator is floored
/// at 1 before dividing.
pub fn compute_score(profile: &FinancialProfile) -> ScoreBreakdown {
    let parts = vec![
        PartScore {
            key: "income_vs_costs",
            label: "Income vs fixed costs",
            score: income_vs_costs(profile.net_income_12m, profile.fixed_cost_avg_12m),
            max: INCOME_COSTS.max,
            area: Area::IncomeJob,
        },
        PartScore {
            key: "job_stability",
            label: "Job stability",
            score: job_stability(profile.job_type),
            max: JOB_STABILITY.max,
            area: Area::IncomeJob,
        },
        PartScore {
            key: "debt_ratio",
            label: "Short-term debt",
            score: debt_ratio(profile.short_debt_balance, profile.net_income_12m),
            max: DEBT.max,
            area: Area::Debt,
        },
        PartScore {
            key: "emergency_buffer",
            label: "Emergency buffer",
            score: emergency_buffer(profile.emergency_buffer_kr, profile.fixed_cost_avg_12m),
            max: BUFFER.max,
            area: Area::Savings,
        },
        PartScore {
            key: "savings_rate",
            label: "Savings rate",
            score: savings_rate(profile.savings_rate_pct),
            max: SAVINGS_RATE.max,
            area: Area::Savings,
        },
        PartScore {
            key: "housing_ltv",
            label: "Housing loan-to-value",
            score: housing(profile.house_value, profile.house_loan),
            max: HOUSING.max,
            area: Area::Housing,
        },
        PartScore {
            key: "insurance",
            label: "Insurance coverage",
            score: insurance(profile),
            max: INSURANCE.max,
            area: Area::Insurance,
        },
    ];

    let total: f64 = parts.iter().map(|part| part.score).sum();
    let max: f64 = parts.iter().map(|part| part.max).sum();
    let percent = if max > 0.0 { total / max * 100.0 } else { 0.0 };

    debug!(total, max, percent, "computed score");

    ScoreBreakdown {
        total,
        max,
        percent,
        parts,
    }
}

pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

pub fn income_vs_costs(net_income: f64, fixed_costs: f64) -> f64 {
    let ratio = net_income / fixed_costs.max(1.0);
    // Below break-even the base is negative; powf would yield NaN.
    let base = ((ratio - INCOME_COSTS.break_even_ratio) / INCOME_COSTS.full_credit_span).max(0.0);
    INCOME_COSTS.max * clamp01(base.powf(INCOME_COSTS.curve_exponent))
}

pub fn job_stability(job_type: JobType) -> f64 {
    match job_type {
        JobType::Permanent => JOB_STABILITY.permanent,
        JobType::FixedTerm => JOB_STABILITY.fixed_term,
        JobType::SelfEmployed => JOB_STABILITY.self_employed,
        JobType::UnemploymentBenefit => JOB_STABILITY.unemployment_benefit,
        JobType::Other => JOB_STABILITY.other,
    }
}

pub fn debt_ratio(short_debt_balance: f64, net_income: f64) -> f64 {
    let ratio = short_debt_balance / (net_income * 12.0).max(1.0);
    DEBT.max * clamp01(1.0 - ratio / DEBT.zero_at_ratio)
}

pub fn emergency_buffer(buffer: f64, fixed_costs: f64) -> f64 {
    let months = buffer / fixed_costs.max(1.0);
    BUFFER.max * clamp01(months / BUFFER.full_credit_months)
}

pub fn savings_rate(savings_rate_pct: f64) -> f64 {
    SAVINGS_RATE.max * clamp01((savings_rate_pct / 100.0) / SAVINGS_RATE.full_credit_rate)
}

pub fn housing(house_value: f64, house_loan: f64) -> f64 {
    if house_value <= 0.0 {
        return HOUSING.no_house;
    }
    if house_loan <= 0.0 {
        return HOUSING.debt_free;
    }

    let ltv = house_loan / house_value;
    HOUSING
        .ltv_steps
        .iter()
        .find(|(bound, _)| ltv < *bound)
        .map(|(_, score)| *score)
        .unwrap_or(HOUSING.above_steps)
}

/// Only home contents, accident and life policies count. Critical illness
/// and income protection are collected but do not affect the score.
pub fn insurance(profile: &FinancialProfile) -> f64 {
    let count = [profile.has_indbo, profile.has_ulykke, profile.has_liv]
        .iter()
        .filter(|held| **held)
        .count();
    (INSURANCE.max / INSURANCE.counted_policies) * count as f64
}

/// Sums parts per area, in area order. Areas without parts are omitted.
pub fn area_rollup(breakdown: &ScoreBreakdown) -> Vec<AreaScore> {
    Area::ALL
        .iter()
        .filter_map(|area| {
            let mut parts = breakdown
                .parts
                .iter()
                .filter(|part| part.area == *area)
                .peekable();
            parts.peek()?;
            let (score, max) = parts.fold((0.0, 0.0), |(score, max), part| {
                (score + part.score, max + part.max)
            });
            Some(AreaScore {
                area: *area,
                score,
                max,
                percent: if max > 0.0 { score / max * 100.0 } else { 0.0 },
            })
        })
        .collect()
}

/// Ranks areas by points lost, keeping the first `TOP_IMPROVEMENTS`, each
/// with a randomly chosen tip.
pub fn top_improvements(breakdown: &ScoreBreakdown) -> Vec<Improvement> {
    top_improvements_with(breakdown, TOP_IMPROVEMENTS, &mut rand::thread_rng())
}

pub fn top_improvements_with(
    breakdown: &ScoreBreakdown,
    limit: usize,
    rng: &mut dyn RngCore,
) -> Vec<Improvement> {
    let mut areas = area_rollup(breakdown);
    // stable sort keeps area order on ties
    areas.sort_by(|a, b| {
        b.lost()
            .partial_cmp(&a.lost())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    areas
        .into_iter()
        .take(limit)
        .map(|area| Improvement {
            area: area.area,
            lost: area.lost(),
            tip: tips::pick_tip_with(area.area.id(), rng),
        })
        .collect()
}

/// Scores every profile and orders them by total, highest first.
pub fn rank_profiles(profiles: Vec<NamedProfile>) -> Vec<(String, ScoreBreakdown)> {
    let mut scored: Vec<(String, ScoreBreakdown)> = profiles
        .into_iter()
        .map(|named| {
            let breakdown = compute_score(&named.profile);
            (named.name, breakdown)
        })
        .collect();
    scored.sort_by(|a, b| {
        b.1.total
            .partial_cmp(&a.1.total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const EPS: f64 = 1e-6;

    fn scenario_a() -> FinancialProfile {
        FinancialProfile {
            net_income_12m: 35_000.0,
            fixed_cost_avg_12m: 25_000.0,
            job_type: JobType::Permanent,
            short_debt_balance: 0.0,
            emergency_buffer_kr: 75_000.0,
            savings_rate_pct: 10.0,
            house_value: 3_000_000.0,
            house_loan: 2_200_000.0,
            has_indbo: true,
            has_ulykke: true,
            has_liv: false,
            ..FinancialProfile::default()
        }
    }

    fn part<'a>(breakdown: &'a ScoreBreakdown, key: &str) -> &'a PartScore {
        breakdown
            .parts
            .iter()
            .find(|part| part.key == key)
            .unwrap()
    }

    #[test]
    fn scenario_a_parts() {
        let breakdown = compute_score(&scenario_a());

        assert_eq!(part(&breakdown, "job_stability").score, 50.0);
        assert_eq!(part(&breakdown, "debt_ratio").score, 150.0);
        assert!((part(&breakdown, "emergency_buffer").score - 100.0).abs() < EPS);
        assert!((part(&breakdown, "savings_rate").score - 100.0).abs() < EPS);
        assert!((part(&breakdown, "insurance").score - 200.0 / 3.0).abs() < EPS);

        let expected_income = 150.0 * 0.8f64.powf(0.7);
        assert!((part(&breakdown, "income_vs_costs").score - expected_income).abs() < EPS);
    }

    #[test]
    fn scenario_a_housing_follows_ltv_steps() {
        // 2.2M / 3.0M = 0.733, which sits in the [0.70, 0.85) step
        let breakdown = compute_score(&scenario_a());
        assert_eq!(part(&breakdown, "housing_ltv").score, 70.0);
    }

    #[test]
    fn totals_sum_parts_and_max_is_750() {
        let breakdown = compute_score(&scenario_a());
        let sum: f64 = breakdown.parts.iter().map(|part| part.score).sum();
        assert!((breakdown.total - sum).abs() < EPS);
        assert_eq!(breakdown.max, 750.0);
        assert!((breakdown.percent - breakdown.total / 750.0 * 100.0).abs() < EPS);
        assert_eq!(breakdown.parts.len(), 7);
    }

    #[test]
    fn parts_stay_within_bounds() {
        let profiles = vec![
            FinancialProfile::default(),
            scenario_a(),
            FinancialProfile {
                net_income_12m: 1_000_000.0,
                fixed_cost_avg_12m: 1.0,
                short_debt_balance: 1e9,
                emergency_buffer_kr: 1e9,
                savings_rate_pct: 500.0,
                house_value: 1.0,
                house_loan: 1e9,
                has_indbo: true,
                has_ulykke: true,
                has_liv: true,
                ..FinancialProfile::default()
            },
            FinancialProfile {
                net_income_12m: -5_000.0,
                savings_rate_pct: -20.0,
                emergency_buffer_kr: -100.0,
                ..FinancialProfile::default()
            },
        ];

        for profile in profiles {
            let breakdown = compute_score(&profile);
            for part in &breakdown.parts {
                assert!(part.score >= 0.0, "{} below zero", part.key);
                assert!(part.score <= part.max, "{} above max", part.key);
            }
            assert!(breakdown.total >= 0.0 && breakdown.total <= 750.0);
        }
    }

    #[test]
    fn zero_fixed_costs_stay_finite() {
        let profile = FinancialProfile {
            net_income_12m: 20_000.0,
            fixed_cost_avg_12m: 0.0,
            emergency_buffer_kr: 10_000.0,
            ..FinancialProfile::default()
        };
        let breakdown = compute_score(&profile);
        assert!(breakdown.total.is_finite());
        assert!(breakdown.parts.iter().all(|part| part.score.is_finite()));
        assert_eq!(part(&breakdown, "income_vs_costs").score, 150.0);
    }

    #[test]
    fn income_below_costs_scores_zero() {
        assert_eq!(income_vs_costs(20_000.0, 25_000.0), 0.0);
        assert_eq!(income_vs_costs(25_000.0, 25_000.0), 0.0);
        assert!((income_vs_costs(37_500.0, 25_000.0) - 150.0).abs() < EPS);
    }

    #[test]
    fn income_part_is_monotonic() {
        let mut previous = 0.0;
        for step in 0..200 {
            let income = 10_000.0 + step as f64 * 250.0;
            let score = income_vs_costs(income, 25_000.0);
            assert!(score >= previous);
            previous = score;
        }
    }

    #[test]
    fn debt_part_is_monotonic() {
        let mut previous = f64::MAX;
        for step in 0..200 {
            let debt = step as f64 * 1_000.0;
            let score = debt_ratio(debt, 35_000.0);
            assert!(score <= previous);
            previous = score;
        }
        // 30% of yearly income wipes the part out
        assert!(debt_ratio(126_000.0, 35_000.0) < EPS);
        assert_eq!(debt_ratio(200_000.0, 35_000.0), 0.0);
    }

    #[test]
    fn buffer_part_is_monotonic() {
        let mut previous = 0.0;
        for step in 0..200 {
            let buffer = step as f64 * 500.0;
            let score = emergency_buffer(buffer, 25_000.0);
            assert!(score >= previous);
            previous = score;
        }
    }

    #[test]
    fn job_lookup() {
        assert_eq!(job_stability(JobType::Permanent), 50.0);
        assert_eq!(job_stability(JobType::FixedTerm), 35.0);
        assert_eq!(job_stability(JobType::SelfEmployed), 25.0);
        assert_eq!(job_stability(JobType::UnemploymentBenefit), 10.0);
        assert_eq!(job_stability(JobType::Other), 25.0);
    }

    #[test]
    fn housing_defaults_and_steps() {
        assert_eq!(housing(0.0, 0.0), 60.0);
        assert_eq!(housing(1_000_000.0, 0.0), 100.0);
        assert_eq!(housing(1_000_000.0, 400_000.0), 100.0);
        assert_eq!(housing(1_000_000.0, 500_000.0), 85.0);
        assert_eq!(housing(1_000_000.0, 700_000.0), 70.0);
        assert_eq!(housing(1_000_000.0, 900_000.0), 50.0);
        assert_eq!(housing(1_000_000.0, 950_000.0), 25.0);
        assert_eq!(housing(1_000_000.0, 1_200_000.0), 25.0);
    }

    #[test]
    fn insurance_counts_three_policies_only() {
        let mut profile = FinancialProfile::default();
        assert_eq!(insurance(&profile), 0.0);

        profile.has_indbo = true;
        assert!((insurance(&profile) - 100.0 / 3.0).abs() < EPS);
        profile.has_ulykke = true;
        assert!((insurance(&profile) - 200.0 / 3.0).abs() < EPS);
        profile.has_liv = true;
        assert!((insurance(&profile) - 100.0).abs() < EPS);
    }

    #[test]
    fn critical_illness_and_income_protection_are_ignored() {
        // Both flags are collected but deliberately left out of the count.
        let profile = FinancialProfile {
            has_kritisk: true,
            has_erhvervsevne: true,
            ..FinancialProfile::default()
        };
        assert_eq!(insurance(&profile), 0.0);
    }

    #[test]
    fn rollup_groups_parts_by_area() {
        let breakdown = compute_score(&scenario_a());
        let areas = area_rollup(&breakdown);

        assert_eq!(areas.len(), 5);
        assert_eq!(areas[0].area, Area::IncomeJob);
        assert_eq!(areas[0].max, 200.0);
        assert_eq!(areas[1].max, 150.0);
        assert_eq!(areas[2].max, 200.0);
        assert!((areas[2].percent - 100.0).abs() < EPS);
        assert!((areas[3].percent - 70.0).abs() < EPS);
        let max: f64 = areas.iter().map(|area| area.max).sum();
        assert_eq!(max, 750.0);
    }

    #[test]
    fn improvements_rank_by_lost_points() {
        let breakdown = compute_score(&scenario_a());
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let improvements = top_improvements_with(&breakdown, 3, &mut rng);

        assert_eq!(improvements.len(), 3);
        // housing loses 30, insurance 33.3, income/job ~21.7
        assert_eq!(improvements[0].area, Area::Insurance);
        assert_eq!(improvements[1].area, Area::Housing);
        assert_eq!(improvements[2].area, Area::IncomeJob);
        assert!(improvements.windows(2).all(|pair| pair[0].lost >= pair[1].lost));
        for improvement in &improvements {
            let tip = improvement.tip.as_ref().unwrap();
            assert_eq!(tip.area, improvement.area);
        }
    }

    #[test]
    fn tied_areas_keep_area_order() {
        let lost = [
            (Area::IncomeJob, 0.0),
            (Area::Debt, 40.0),
            (Area::Savings, 10.0),
            (Area::Housing, 40.0),
            (Area::Insurance, 40.0),
        ];
        let parts = lost
            .iter()
            .map(|(area, lost)| PartScore {
                key: area.name(),
                label: area.name(),
                score: 100.0 - lost,
                max: 100.0,
                area: *area,
            })
            .collect();
        let breakdown = ScoreBreakdown {
            total: 370.0,
            max: 500.0,
            percent: 74.0,
            parts,
        };
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let ranked: Vec<Area> = top_improvements_with(&breakdown, 5, &mut rng)
            .into_iter()
            .map(|improvement| improvement.area)
            .collect();

        assert_eq!(
            ranked,
            vec![
                Area::Debt,
                Area::Housing,
                Area::Insurance,
                Area::Savings,
                Area::IncomeJob
            ]
        );
    }

    #[test]
    fn ranking_keeps_every_profile() {
        let profiles: Vec<NamedProfile> = (0..12)
            .map(|index| NamedProfile {
                name: format!("profile {}", index),
                profile: FinancialProfile {
                    net_income_12m: 20_000.0 + index as f64 * 400.0,
                    fixed_cost_avg_12m: 20_000.0,
                    ..FinancialProfile::default()
                },
            })
            .collect();

        let ranked = rank_profiles(profiles);

        assert_eq!(ranked.len(), 12);
        assert_eq!(ranked[0].0, "profile 11");
        assert!(ranked.windows(2).all(|pair| pair[0].1.total >= pair[1].1.total));
    }
}
