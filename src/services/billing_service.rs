use std::sync::Arc;
use tracing::{info, warn};

use crate::db::repositories::{
    AppointmentRepository, BillingRepository, CatalogRepository, ProfileRepository,
};
use crate::error::AppError;
use crate::models::billing::{
    Billing, BillingDetails, BillingRequest, BillingResponse, LineItem, ROOM_NOT_COVERED_NOTE,
};
use crate::models::catalog::InsurancePolicy;
use crate::models::object_id::ObjectId;
use crate::utils::financial_validation::clamp_percentage;

/// Subtotal, insurance discount and payable total of one bill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeBreakdown {
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
}

/// Applies an insurance coverage percentage to a subtotal.
///
/// `discount = subtotal * coverage / 100`, `total = max(0, subtotal - discount)`.
pub fn apply_coverage(subtotal: f64, coverage_percent: f64) -> ChargeBreakdown {
    let discount = subtotal * coverage_percent / 100.0;
    let total = (subtotal - discount).max(0.0);
    ChargeBreakdown {
        subtotal,
        discount,
        total,
    }
}

/// Builds a bill for an appointment from optional operation and room charges,
/// discounted by the patient's insurance policy when one is on file.
#[derive(Clone)]
pub struct BillingService {
    appointment_repository: Arc<AppointmentRepository>,
    catalog_repository: Arc<CatalogRepository>,
    profile_repository: Arc<ProfileRepository>,
    billing_repository: Arc<BillingRepository>,
}

impl BillingService {
    pub fn new(
        appointment_repository: Arc<AppointmentRepository>,
        catalog_repository: Arc<CatalogRepository>,
        profile_repository: Arc<ProfileRepository>,
        billing_repository: Arc<BillingRepository>,
    ) -> Self {
        Self {
            appointment_repository,
            catalog_repository,
            profile_repository,
            billing_repository,
        }
    }

    pub async fn generate_bill(
        &self,
        appointment_id: &ObjectId,
        request: &BillingRequest,
    ) -> Result<BillingResponse, AppError> {
        // Reject malformed ids before touching the store
        let operation_id = ObjectId::parse_optional(request.operation_id.as_deref())?;
        // Rooms are matched by their exact stored name; only "" means no room
        let roomtype_name = request
            .roomtype_name
            .as_deref()
            .filter(|name| !name.is_empty());

        let appointment = self
            .appointment_repository
            .find_by_id(appointment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

        let mut subtotal = 0.0;
        let mut details = BillingDetails::default();

        if let Some(operation_id) = operation_id {
            let operation = self
                .catalog_repository
                .find_operation(&operation_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Operation not found".to_string()))?;
            subtotal += operation.base_price;
            details.operation = Some(LineItem {
                name: operation.name.clone(),
                price: operation.base_price,
            });
        }

        if let Some(roomtype_name) = roomtype_name {
            let room = self
                .catalog_repository
                .find_roomtype_by_name(roomtype_name)
                .await?
                .ok_or_else(|| AppError::NotFound("Room type not found".to_string()))?;
            subtotal += room.price_per_day;
            details.room = Some(LineItem {
                name: room.name.clone(),
                price: room.price_per_day,
            });
        }

        let mut coverage_percent = 0.0;
        if let Some(policy) = self.patient_policy(&appointment.patient_id).await? {
            // Advisory only: billing proceeds even when the room is not covered
            if let Some(roomtype_name) = roomtype_name {
                if !policy.allows_roomtype(roomtype_name) {
                    details.insurance_note = Some(ROOM_NOT_COVERED_NOTE.to_string());
                }
            }
            coverage_percent = clamp_percentage(policy.coverage_percent);
        }

        let charges = apply_coverage(subtotal, coverage_percent);

        let billing = Billing {
            appointment_id: appointment_id.to_hex(),
            subtotal: charges.subtotal,
            insurance_discount: charges.discount,
            total: charges.total,
            details: details.clone(),
        };
        let billing_id = self.billing_repository.create(&billing).await?;

        info!(
            appointment_id = %appointment_id,
            billing_id = %billing_id,
            subtotal = charges.subtotal,
            discount = charges.discount,
            total = charges.total,
            "bill_generated"
        );

        Ok(BillingResponse {
            billing_id: billing_id.to_hex(),
            subtotal: charges.subtotal,
            discount: charges.discount,
            total: charges.total,
            details,
        })
    }

    /// The insurance policy referenced by the patient's profile, if any.
    async fn patient_policy(&self, patient_id: &str) -> Result<Option<InsurancePolicy>, AppError> {
        let Some(profile) = self.profile_repository.find_patient_profile(patient_id).await? else {
            return Ok(None);
        };
        let Some(raw_policy_id) = profile.insurance_policy_id.as_deref() else {
            return Ok(None);
        };

        let policy_id = match ObjectId::parse(raw_policy_id) {
            Ok(id) => id,
            Err(_) => {
                warn!(
                    patient_id = %patient_id,
                    insurance_policy_id = %raw_policy_id,
                    "patient_profile_has_malformed_policy_reference"
                );
                return Ok(None);
            }
        };

        let policy = self.catalog_repository.find_insurance_policy(&policy_id).await?;
        if policy.is_none() {
            warn!(patient_id = %patient_id, insurance_policy_id = %policy_id, "insurance_policy_missing");
        }
        Ok(policy.map(|stored| stored.data))
    }
}
