use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::utils::financial_validation::{validate_non_negative_amount, validate_percentage};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    pub base_price: f64,
}

/// Room category; the name (e.g. "super-deluxe", "deluxe", "normal") is
/// what appointments and insurance policies refer to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roomtype {
    pub name: String,
    pub price_per_day: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsurancePolicy {
    pub name: String,
    #[serde(default)]
    pub allowed_roomtypes: Vec<String>,
    /// Percentage of the billable subtotal the policy covers, 0 to 100.
    #[serde(default)]
    pub coverage_percent: f64,
}

impl InsurancePolicy {
    pub fn allows_roomtype(&self, roomtype_name: &str) -> bool {
        self.allowed_roomtypes.iter().any(|allowed| allowed == roomtype_name)
    }
}

impl Operation {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_non_negative_amount(self.base_price, "base_price")
    }
}

impl Roomtype {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_non_negative_amount(self.price_per_day, "price_per_day")
    }
}

impl InsurancePolicy {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_percentage(self.coverage_percent, "coverage_percent")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationCreatedResponse {
    pub operation_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomtypeCreatedResponse {
    pub roomtype_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsurancePolicyCreatedResponse {
    pub insurance_policy_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_policy_defaults() {
        let policy: InsurancePolicy = serde_json::from_value(json!({"name": "basic"})).unwrap();
        assert!(policy.allowed_roomtypes.is_empty());
        assert_eq!(policy.coverage_percent, 0.0);
        assert!(!policy.allows_roomtype("normal"));
    }

    #[test]
    fn test_validation_bounds() {
        assert!(Operation { name: "x".into(), base_price: 0.0 }.validate().is_ok());
        assert!(Operation { name: "x".into(), base_price: -1.0 }.validate().is_err());
        assert!(Roomtype { name: "deluxe".into(), price_per_day: f64::NAN }.validate().is_err());

        let policy = |c: f64| InsurancePolicy { name: "p".into(), allowed_roomtypes: vec![], coverage_percent: c };
        assert!(policy(0.0).validate().is_ok());
        assert!(policy(100.0).validate().is_ok());
        assert!(policy(100.5).validate().is_err());
        assert!(policy(-0.1).validate().is_err());
    }
}
