use serde::{Deserialize, Serialize};

/// Salary multiplier used when a doctor has no profile or never set one.
pub const DEFAULT_RATE_PER_POINT: f64 = 100.0;

fn default_rate_per_point() -> f64 {
    DEFAULT_RATE_PER_POINT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub user_id: String,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default = "default_rate_per_point")]
    pub rate_per_point: f64,
}

impl DoctorProfile {
    pub fn with_defaults(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            specialty: None,
            rate_per_point: DEFAULT_RATE_PER_POINT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_policy_id: Option<String>,
}

impl PatientProfile {
    pub fn with_defaults(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            dob: None,
            insurance_policy_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_doctor_profile_rate_defaults_when_missing() {
        let profile: DoctorProfile = serde_json::from_value(json!({"user_id": "u1"})).unwrap();
        assert_eq!(profile.rate_per_point, DEFAULT_RATE_PER_POINT);
        assert_eq!(profile.specialty, None);
    }

    #[test]
    fn test_patient_profile_omits_empty_fields() {
        let value = serde_json::to_value(PatientProfile::with_defaults("u2")).unwrap();
        assert_eq!(value, json!({"user_id": "u2"}));
    }
}
