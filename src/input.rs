use std::io::Read;

use csv::StringRecord;
use tracing::debug;

use crate::errors::ProfileError;
use crate::models::{FinancialProfile, JobType};

/// Amounts that make no sense below zero.
const NON_NEGATIVE: [&str; 6] = [
    "netIncome12m",
    "fixedCostAvg12m",
    "shortDebtBalance",
    "emergencyBufferKr",
    "houseValue",
    "houseLoan",
];

/// A profile read from one CSV row.
#[derive(Debug, Clone)]
pub struct NamedProfile {
    pub name: String,
    pub profile: FinancialProfile,
}

/// Rejects profiles the scoring functions are not defined for.
pub fn validate(profile: &FinancialProfile) -> Result<(), ProfileError> {
    for (field, value) in profile.amounts() {
        if !value.is_finite() {
            return Err(ProfileError::NonFinite { field });
        }
        if value < 0.0 && NON_NEGATIVE.contains(&field) {
            return Err(ProfileError::Negative { field, value });
        }
    }
    Ok(())
}

/// Reads one JSON profile. Missing fields take their zero value.
pub fn read_profile<R: Read>(reader: R) -> Result<FinancialProfile, ProfileError> {
    let profile: FinancialProfile = serde_json::from_reader(reader)?;
    validate(&profile)?;
    Ok(profile)
}

/// Reads profiles from CSV, one per row, with camelCase profile columns and
/// an optional `name` column.
pub fn read_profiles_csv<R: Read>(reader: R) -> Result<Vec<NamedProfile>, ProfileError> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();
    let name_index = headers.iter().position(|header| header == "name");

    let mut profiles = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let name = name_index
            .and_then(|index| record.get(index))
            .filter(|name| !name.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("row {}", row + 1));

        let (profile_headers, fields) = profile_fields(&headers, &record, name_index);
        let profile: FinancialProfile = fields.deserialize(Some(&profile_headers))?;
        validate(&profile)?;
        profiles.push(NamedProfile { name, profile });
    }

    debug!(count = profiles.len(), "read profiles from CSV");
    Ok(profiles)
}

/// Pairs headers with cells, leaving out the name column and blank cells so
/// that missing values fall back to their defaults.
fn profile_fields(
    headers: &StringRecord,
    record: &StringRecord,
    skip: Option<usize>,
) -> (StringRecord, StringRecord) {
    let mut kept_headers = StringRecord::new();
    let mut kept_fields = StringRecord::new();
    for (index, (header, value)) in headers.iter().zip(record.iter()).enumerate() {
        if Some(index) == skip || value.trim().is_empty() {
            continue;
        }
        kept_headers.push_field(header);
        kept_fields.push_field(value);
    }
    (kept_headers, kept_fields)
}

/// A salaried homeowner with two of three counted policies.
pub fn sample_profile() -> FinancialProfile {
    FinancialProfile {
        net_income_12m: 35_000.0,
        gross_income_12m: 52_000.0,
        job_type: JobType::Permanent,
        years_in_job: 6.0,
        income_variation_pct: 5.0,
        fixed_cost_avg_12m: 25_000.0,
        variable_cost_avg_12m: 6_000.0,
        months_negative_cashflow_12m: 1,
        short_debt_balance: 0.0,
        emergency_buffer_kr: 75_000.0,
        savings_rate_pct: 10.0,
        investments_kr: 40_000.0,
        house_value: 3_000_000.0,
        house_loan: 2_200_000.0,
        mortgage_rate_pct: 4.0,
        mortgage_fixed_rate: true,
        mortgage_years_left: 24,
        pension_contribution_pct: 12.0,
        pension_savings_kr: 650_000.0,
        has_indbo: true,
        has_ulykke: true,
        subscription_spend_month: 450.0,
        ..FinancialProfile::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_camel_case_json_with_defaults() {
        let json = r#"{
            "netIncome12m": 35000,
            "fixedCostAvg12m": 25000,
            "jobType": "fixed_term",
            "hasIndbo": true
        }"#;
        let profile = read_profile(json.as_bytes()).unwrap();

        assert_eq!(profile.net_income_12m, 35_000.0);
        assert_eq!(profile.fixed_cost_avg_12m, 25_000.0);
        assert_eq!(profile.job_type, JobType::FixedTerm);
        assert!(profile.has_indbo);
        assert_eq!(profile.house_value, 0.0);
    }

    #[test]
    fn student_is_read_as_other() {
        let profile = read_profile(r#"{"jobType": "student"}"#.as_bytes()).unwrap();
        assert_eq!(profile.job_type, JobType::Other);
    }

    #[test]
    fn rejects_negative_amounts() {
        let result = read_profile(r#"{"houseLoan": -10}"#.as_bytes());
        assert!(matches!(
            result,
            Err(ProfileError::Negative { field: "houseLoan", .. })
        ));
    }

    #[test]
    fn rejects_non_finite_amounts() {
        let profile = FinancialProfile {
            emergency_buffer_kr: f64::INFINITY,
            ..FinancialProfile::default()
        };
        assert!(matches!(
            validate(&profile),
            Err(ProfileError::NonFinite { field: "emergencyBufferKr" })
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let result = read_profile("{ not json".as_bytes());
        assert!(matches!(result, Err(ProfileError::Json(_))));
    }

    #[test]
    fn sample_profile_is_valid_and_round_trips() {
        let sample = sample_profile();
        assert!(validate(&sample).is_ok());
        let json = serde_json::to_string(&sample).unwrap();
        let parsed = read_profile(json.as_bytes()).unwrap();
        assert_eq!(parsed, sample);
    }

    #[test]
    fn reads_named_csv_rows() {
        let data = "\
name,netIncome12m,fixedCostAvg12m,jobType,hasIndbo,houseValue,houseLoan
Avery,35000,25000,permanent,true,3000000,2200000
,20000,18000,self_employed,false,0,0
";
        let profiles = read_profiles_csv(data.as_bytes()).unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].name, "Avery");
        assert_eq!(profiles[0].profile.job_type, JobType::Permanent);
        assert!(profiles[0].profile.has_indbo);
        assert_eq!(profiles[0].profile.house_loan, 2_200_000.0);
        assert_eq!(profiles[1].name, "row 2");
        assert_eq!(profiles[1].profile.job_type, JobType::SelfEmployed);
    }

    #[test]
    fn csv_without_name_column() {
        let data = "netIncome12m,fixedCostAvg12m\n30000,20000\n";
        let profiles = read_profiles_csv(data.as_bytes()).unwrap();
        assert_eq!(profiles[0].name, "row 1");
        assert_eq!(profiles[0].profile.net_income_12m, 30_000.0);
    }

    #[test]
    fn csv_blank_cells_take_defaults() {
        let data = "name,netIncome12m,houseValue,jobType\nAvery,30000,,\n";
        let profiles = read_profiles_csv(data.as_bytes()).unwrap();

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, "Avery");
        assert_eq!(profiles[0].profile.net_income_12m, 30_000.0);
        assert_eq!(profiles[0].profile.house_value, 0.0);
        assert_eq!(profiles[0].profile.job_type, JobType::Other);
    }

    #[test]
    fn csv_rejects_bad_numbers() {
        let data = "name,netIncome12m\nAvery,lots\n";
        assert!(matches!(
            read_profiles_csv(data.as_bytes()),
            Err(ProfileError::Csv(_))
        ));
    }
}
