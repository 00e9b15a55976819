use crate::enums::{
    InstanceTenancy, OfferingClass, OfferingScope, OfferingType, RecurringChargeFrequency,
    ReservedDuration,
};
use crate::errors::OfferingError;
use crate::products::ProductDescription;
use serde::{Deserialize, Serialize};

/// Offering identifier (UUID-shaped, derived from the offering's attributes)
pub type OfferingId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecurringCharge {
    pub amount: f64,
    pub frequency: RecurringChargeFrequency,
}

impl RecurringCharge {
    pub fn hourly(amount: f64) -> Self {
        Self {
            amount,
            frequency: RecurringChargeFrequency::Hourly,
        }
    }
}

/// One reserved-capacity purchase option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Offering {
    pub reserved_instances_offering_id: OfferingId,
    pub instance_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    pub duration: ReservedDuration,
    pub fixed_price: f64,
    pub usage_price: f64,
    pub product_description: ProductDescription,
    pub instance_tenancy: InstanceTenancy,
    pub currency_code: String,
    pub offering_type: OfferingType,
    pub offering_class: OfferingClass,
    pub recurring_charges: Vec<RecurringCharge>,
    pub marketplace: bool,
    pub scope: OfferingScope,
}

impl Offering {
    pub fn key(&self) -> &str {
        &self.reserved_instances_offering_id
    }
}

/// Success payload of a describe-offerings call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReservedInstancesOfferingsResponse {
    pub reserved_instances_offerings: Vec<Offering>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeReservedInstancesOfferingsResponse {
    pub fn as_json_string_pretty(&self) -> Result<String, OfferingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Failure payload: `{"Error": {"Code": ..., "Message": ...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

impl From<&OfferingError> for ErrorResponse {
    fn from(err: &OfferingError) -> Self {
        Self {
            error: ErrorDetail {
                code: err.code().to_string(),
                message: err.to_string(),
            },
        }
    }
}

impl ErrorResponse {
    pub fn as_json_string_pretty(&self) -> Result<String, OfferingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
