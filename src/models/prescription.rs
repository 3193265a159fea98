use serde::{Deserialize, Serialize};

use crate::models::appointment::Appointment;
use crate::models::stored::Stored;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub appointment_id: String,
    pub doctor_id: String,
    pub patient_id: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub follow_up_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrescriptionRequest {
    pub appointment_id: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub follow_up_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionCreatedResponse {
    pub prescription_id: String,
}

/// Everything on record for one patient.
#[derive(Debug, Clone, Serialize)]
pub struct PatientHistory {
    pub appointments: Vec<Stored<Appointment>>,
    pub prescriptions: Vec<Stored<Prescription>>,
}
