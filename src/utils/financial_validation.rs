//! Validation helpers for prices and coverage percentages
//!
//! Master data (operation prices, room rates, insurance coverage) is entered
//! by admins and later feeds the billing calculation, so it is checked once
//! at the API boundary.

use crate::error::AppError;

pub const MAX_COVERAGE_PERCENT: f64 = 100.0;

/// Validates that an amount is finite and non-negative
///
/// # Arguments
/// * `amount` - The amount to validate
/// * `field_name` - Field name used in the error message
///
/// # Returns
/// * `Ok(())` if the amount is valid
/// * `Err(AppError::Validation)` otherwise
pub fn validate_non_negative_amount(amount: f64, field_name: &str) -> Result<(), AppError> {
    if !amount.is_finite() {
        return Err(AppError::Validation(format!(
            "{} must be a finite number: {}",
            field_name, amount
        )));
    }

    if amount < 0.0 {
        return Err(AppError::Validation(format!(
            "{} cannot be negative: {}",
            field_name, amount
        )));
    }

    Ok(())
}

/// Validates that a percentage lies within [0, 100]
pub fn validate_percentage(percent: f64, field_name: &str) -> Result<(), AppError> {
    validate_non_negative_amount(percent, field_name)?;

    if percent > MAX_COVERAGE_PERCENT {
        return Err(AppError::Validation(format!(
            "{} cannot exceed {}: {}",
            field_name, MAX_COVERAGE_PERCENT, percent
        )));
    }

    Ok(())
}

/// Clamps a stored coverage value into [0, 100]. Documents written before
/// validation existed may carry out-of-range values.
pub fn clamp_percentage(percent: f64) -> f64 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, MAX_COVERAGE_PERCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount_valid() {
        assert!(validate_non_negative_amount(0.0, "Test").is_ok());
        assert!(validate_non_negative_amount(10.123456, "Test").is_ok());
    }

    #[test]
    fn test_validate_amount_negative() {
        assert!(validate_non_negative_amount(-10.0, "Test").is_err());
    }

    #[test]
    fn test_validate_amount_not_finite() {
        assert!(validate_non_negative_amount(f64::INFINITY, "Test").is_err());
        assert!(validate_non_negative_amount(f64::NAN, "Test").is_err());
    }

    #[test]
    fn test_validate_percentage_bounds() {
        assert!(validate_percentage(0.0, "coverage").is_ok());
        assert!(validate_percentage(100.0, "coverage").is_ok());
        assert!(validate_percentage(100.01, "coverage").is_err());
        assert!(validate_percentage(-1.0, "coverage").is_err());
    }

    #[test]
    fn test_clamp_percentage() {
        assert_eq!(clamp_percentage(150.0), 100.0);
        assert_eq!(clamp_percentage(-5.0), 0.0);
        assert_eq!(clamp_percentage(f64::NAN), 0.0);
        assert_eq!(clamp_percentage(20.0), 20.0);
    }
}
