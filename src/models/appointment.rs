use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Online,
    Cod,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Online => "online",
            PaymentMethod::Cod => "cod",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub patient_id: String,
    pub doctor_id: String,
    pub scheduled_at: String,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: PaymentStatus,
}

impl Appointment {
    /// A freshly booked appointment: scheduled, payment pending.
    pub fn scheduled(
        patient_id: impl Into<String>,
        doctor_id: impl Into<String>,
        scheduled_at: impl Into<String>,
        reason: Option<String>,
        payment_method: Option<PaymentMethod>,
    ) -> Self {
        Self {
            patient_id: patient_id.into(),
            doctor_id: doctor_id.into(),
            scheduled_at: scheduled_at.into(),
            reason,
            status: AppointmentStatus::Scheduled,
            payment_method,
            payment_status: PaymentStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppointmentRequest {
    pub doctor_id: String,
    pub scheduled_at: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminScheduleRequest {
    pub patient_id: String,
    pub doctor_id: String,
    pub scheduled_at: String,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentUpdateRequest {
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentCreatedResponse {
    pub appointment_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scheduled_defaults() {
        let appt = Appointment::scheduled("p", "d", "2026-10-20T09:00:00", None, Some(PaymentMethod::Online));
        assert_eq!(appt.status, AppointmentStatus::Scheduled);
        assert_eq!(appt.payment_status, PaymentStatus::Pending);

        let value = serde_json::to_value(&appt).unwrap();
        assert_eq!(value["status"], json!("scheduled"));
        assert_eq!(value["payment_method"], json!("online"));
        assert_eq!(value["payment_status"], json!("pending"));

        let mut fields: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        fields.sort_unstable();
        assert_eq!(
            fields,
            ["doctor_id", "patient_id", "payment_method", "payment_status", "reason", "scheduled_at", "status"]
        );
    }

    #[test]
    fn test_unknown_payment_status_rejected() {
        assert!(serde_json::from_value::<PaymentUpdateRequest>(json!({"status": "refunded"})).is_err());
        let ok: PaymentUpdateRequest = serde_json::from_value(json!({"status": "paid"})).unwrap();
        assert_eq!(ok.status, PaymentStatus::Paid);
    }
}
