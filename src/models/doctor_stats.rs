use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorStats {
    pub treated_patients: u64,
    /// One point per completed appointment for now.
    pub points: u64,
    pub salary: f64,
}
