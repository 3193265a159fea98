use serde::{Deserialize, Serialize};

/// Note attached when the selected room type is outside the patient's policy.
pub const ROOM_NOT_COVERED_NOTE: &str = "Selected room type not covered by insurance";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillingDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Billing {
    pub appointment_id: String,
    pub subtotal: f64,
    #[serde(default)]
    pub insurance_discount: f64,
    pub total: f64,
    #[serde(default)]
    pub details: BillingDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillingRequest {
    #[serde(default)]
    pub operation_id: Option<String>,
    #[serde(default)]
    pub roomtype_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingResponse {
    pub billing_id: String,
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
    pub details: BillingDetails,
}
