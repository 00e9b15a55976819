//! Reserved instance offerings: request validation and per-region catalog lookup.
//!
//! A describe-offerings request is validated against fixed enumerations
//! (instance types, product descriptions, tenancy, offering class and type,
//! reservation term) and, when valid, answered from the region's immutable
//! offering catalog. Every failure is an `OfferingError`; request failures carry
//! the wire code `InvalidParameterValue`.

pub mod catalog;
pub mod config;
pub mod enums;
pub mod errors;
pub mod instance_types;
pub mod pricing;
pub mod products;
pub mod regions;
pub mod registry;
pub mod request;
mod suggest;
pub mod types;

pub use catalog::{RegionCatalog, CURRENCY_CODE};
pub use config::{CatalogConfig, RegionConfig};
pub use enums::{
    InstanceTenancy, OfferingClass, OfferingScope, OfferingType, RecurringChargeFrequency,
    ReservedDuration,
};
pub use errors::OfferingError;
pub use instance_types::{find_instance_type, is_valid_instance_type, InstanceTypeSpec};
pub use products::ProductDescription;
pub use registry::OfferingRegistry;
pub use request::{DescribeReservedInstancesOfferingsRequest, OfferingQuery};
pub use types::{
    DescribeReservedInstancesOfferingsResponse, ErrorDetail, ErrorResponse, Offering, OfferingId,
    RecurringCharge,
};
