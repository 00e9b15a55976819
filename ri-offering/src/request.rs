use crate::catalog::RegionCatalog;
use crate::enums::{InstanceTenancy, OfferingClass, OfferingType, ReservedDuration};
use crate::errors::OfferingError;
use crate::instance_types::{find_instance_type, instance_type_names, InstanceTypeSpec};
use crate::products::ProductDescription;
use crate::suggest::closest_match;
use crate::types::OfferingId;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const MAX_RESULTS_LIMIT: i64 = 100;
const NEXT_TOKEN_PREFIX: &str = "offset:";

/// Describe-offerings request as it arrives on the wire. Every field is optional;
/// `validate` turns it into a typed `OfferingQuery`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReservedInstancesOfferingsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_tenancy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offering_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offering_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reserved_instances_offering_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_marketplace: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeReservedInstancesOfferingsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_instance_type(mut self, instance_type: &str) -> Self {
        self.instance_type = Some(instance_type.to_string());
        self
    }

    pub fn with_product_description(mut self, product_description: &str) -> Self {
        self.product_description = Some(product_description.to_string());
        self
    }

    pub fn with_instance_tenancy(mut self, tenancy: &str) -> Self {
        self.instance_tenancy = Some(tenancy.to_string());
        self
    }

    pub fn with_offering_class(mut self, offering_class: &str) -> Self {
        self.offering_class = Some(offering_class.to_string());
        self
    }

    pub fn with_offering_type(mut self, offering_type: &str) -> Self {
        self.offering_type = Some(offering_type.to_string());
        self
    }

    pub fn with_min_duration(mut self, seconds: i64) -> Self {
        self.min_duration = Some(seconds);
        self
    }

    pub fn with_max_duration(mut self, seconds: i64) -> Self {
        self.max_duration = Some(seconds);
        self
    }

    pub fn with_availability_zone(mut self, zone: &str) -> Self {
        self.availability_zone = Some(zone.to_string());
        self
    }

    pub fn with_offering_id(mut self, offering_id: &str) -> Self {
        self.reserved_instances_offering_ids
            .push(offering_id.to_string());
        self
    }

    pub fn with_max_results(mut self, max_results: i64) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn with_next_token(mut self, token: &str) -> Self {
        self.next_token = Some(token.to_string());
        self
    }

    /// Validate every provided field against its allowed values, in a fixed order.
    /// The first failing field aborts with `InvalidParameterValue`.
    pub fn validate(&self, catalog: &RegionCatalog) -> Result<OfferingQuery, OfferingError> {
        let instance_type = match self.instance_type.as_deref() {
            Some(name) => Some(find_instance_type(name).ok_or_else(|| {
                OfferingError::invalid_parameter_with_suggestion(
                    "InstanceType",
                    name,
                    closest_match(name, instance_type_names()),
                )
            })?),
            None => None,
        };
        let offering_class = parse_param::<OfferingClass>("OfferingClass", &self.offering_class)?;
        let offering_type = parse_param::<OfferingType>("OfferingType", &self.offering_type)?;
        let instance_tenancy =
            parse_param::<InstanceTenancy>("InstanceTenancy", &self.instance_tenancy)?;

        let duration = match self.max_duration {
            Some(seconds) => Some(
                u64::try_from(seconds)
                    .ok()
                    .and_then(ReservedDuration::from_seconds)
                    .ok_or_else(|| OfferingError::invalid_parameter("MaxDuration", seconds))?,
            ),
            None => None,
        };

        let product_description = match self.product_description.as_deref() {
            Some(name) => Some(ProductDescription::from_str(name).map_err(|_| {
                OfferingError::invalid_parameter_with_suggestion(
                    "ProductDescription",
                    name,
                    closest_match(name, ProductDescription::all_names()),
                )
            })?),
            None => None,
        };

        // Accepted for compatibility; results are filtered by MaxDuration only.
        let min_duration = match self.min_duration {
            Some(seconds) => Some(
                u64::try_from(seconds)
                    .map_err(|_| OfferingError::invalid_parameter("MinDuration", seconds))?,
            ),
            None => None,
        };

        let availability_zone = match self.availability_zone.as_deref() {
            Some(zone) if catalog.has_zone(zone) => Some(zone.to_string()),
            Some(zone) => {
                return Err(OfferingError::invalid_parameter_with_suggestion(
                    "AvailabilityZone",
                    zone,
                    closest_match(zone, catalog.availability_zones().iter().map(String::as_str)),
                ))
            }
            None => None,
        };

        let max_results = match self.max_results {
            Some(n) if (1..=MAX_RESULTS_LIMIT).contains(&n) => Some(n as usize),
            Some(n) => return Err(OfferingError::invalid_parameter("MaxResults", n)),
            None => None,
        };

        let offset = match self.next_token.as_deref() {
            Some(token) => decode_next_token(token)
                .ok_or_else(|| OfferingError::invalid_parameter("NextToken", token))?,
            None => 0,
        };

        Ok(OfferingQuery {
            instance_type,
            product_description,
            instance_tenancy,
            offering_class,
            offering_type,
            duration,
            min_duration,
            availability_zone,
            offering_ids: self.reserved_instances_offering_ids.clone(),
            include_marketplace: self.include_marketplace.unwrap_or(true),
            max_results,
            offset,
        })
    }
}

fn parse_param<T: FromStr>(
    parameter: &'static str,
    value: &Option<String>,
) -> Result<Option<T>, OfferingError> {
    match value.as_deref() {
        Some(raw) => T::from_str(raw)
            .map(Some)
            .map_err(|_| OfferingError::invalid_parameter(parameter, raw)),
        None => Ok(None),
    }
}

/// A validated request. Every constrained field is a typed value; `None` means
/// the attribute is unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferingQuery {
    pub instance_type: Option<&'static InstanceTypeSpec>,
    pub product_description: Option<ProductDescription>,
    pub instance_tenancy: Option<InstanceTenancy>,
    pub offering_class: Option<OfferingClass>,
    pub offering_type: Option<OfferingType>,
    pub duration: Option<ReservedDuration>,
    pub min_duration: Option<u64>,
    pub availability_zone: Option<String>,
    pub offering_ids: Vec<OfferingId>,
    pub include_marketplace: bool,
    pub max_results: Option<usize>,
    pub offset: usize,
}

pub fn encode_next_token(offset: usize) -> String {
    BASE64.encode(format!("{}{}", NEXT_TOKEN_PREFIX, offset))
}

/// Offset carried by a token. Zero is never issued, so it is rejected too.
pub fn decode_next_token(token: &str) -> Option<usize> {
    let bytes = BASE64.decode(token.trim()).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    let offset = text.strip_prefix(NEXT_TOKEN_PREFIX)?.parse::<usize>().ok()?;
    (offset > 0).then_some(offset)
}
