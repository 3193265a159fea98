use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub doctor_id: String,
    /// ISO date of the Monday starting the week.
    pub week_start: String,
    #[serde(default)]
    pub available_slots: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unavailability {
    pub doctor_id: String,
    pub date: String,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityRequest {
    pub week_start: String,
    #[serde(default)]
    pub available_slots: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnavailabilityRequest {
    pub date: String,
    #[serde(default)]
    pub reason: Option<String>,
}
