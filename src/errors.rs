use thiserror::Error;

/// Problems with a profile supplied from outside the scoring core.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("field `{field}` must be a finite number")]
    NonFinite { field: &'static str },

    #[error("field `{field}` must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("invalid profile JSON")]
    Json(#[from] serde_json::Error),

    #[error("invalid profile CSV")]
    Csv(#[from] csv::Error),
}
