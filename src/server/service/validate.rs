//! Field validation shared by the record services.

use crate::server::error::record::RecordError;

/// Returns the trimmed value, or `MissingField` when it is blank.
pub fn require_text(field: &'static str, value: &str) -> Result<String, RecordError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RecordError::MissingField(field));
    }

    Ok(trimmed.to_string())
}

/// Returns the value when present, or `MissingField`.
pub fn require<T>(field: &'static str, value: Option<T>) -> Result<T, RecordError> {
    value.ok_or(RecordError::MissingField(field))
}

/// Rejects amounts that are NaN, infinite or negative.
pub fn non_negative_amount(field: &'static str, value: f64) -> Result<f64, RecordError> {
    if !value.is_finite() {
        return Err(RecordError::InvalidValue {
            field,
            reason: "must be a finite number".to_string(),
        });
    }
    if value < 0.0 {
        return Err(RecordError::InvalidValue {
            field,
            reason: "must not be negative".to_string(),
        });
    }

    Ok(value)
}
