use crate::errors::OfferingError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::EnumIter;

// Parsing is case-sensitive: returned offerings echo the request spelling verbatim.

/// Tenancy of the reserved capacity. Dedicated hosts are sold through a
/// separate API and are not a valid value here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum InstanceTenancy {
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "dedicated")]
    Dedicated,
}

impl std::fmt::Display for InstanceTenancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceTenancy::Default => write!(f, "default"),
            InstanceTenancy::Dedicated => write!(f, "dedicated"),
        }
    }
}

impl FromStr for InstanceTenancy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(InstanceTenancy::Default),
            "dedicated" => Ok(InstanceTenancy::Dedicated),
            _ => Err(()),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum OfferingClass {
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "convertible")]
    Convertible,
}

impl std::fmt::Display for OfferingClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OfferingClass::Standard => write!(f, "standard"),
            OfferingClass::Convertible => write!(f, "convertible"),
        }
    }
}

impl FromStr for OfferingClass {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(OfferingClass::Standard),
            "convertible" => Ok(OfferingClass::Convertible),
            _ => Err(()),
        }
    }
}

/// Upfront payment structure of an offering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum OfferingType {
    #[serde(rename = "All Upfront")]
    AllUpfront,
    #[serde(rename = "Partial Upfront")]
    PartialUpfront,
    #[serde(rename = "No Upfront")]
    NoUpfront,
}

impl std::fmt::Display for OfferingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OfferingType::AllUpfront => write!(f, "All Upfront"),
            OfferingType::PartialUpfront => write!(f, "Partial Upfront"),
            OfferingType::NoUpfront => write!(f, "No Upfront"),
        }
    }
}

impl FromStr for OfferingType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All Upfront" => Ok(OfferingType::AllUpfront),
            "Partial Upfront" => Ok(OfferingType::PartialUpfront),
            "No Upfront" => Ok(OfferingType::NoUpfront),
            _ => Err(()),
        }
    }
}

/// Reservation term. Serialized as the number of seconds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
#[serde(into = "u64", try_from = "u64")]
pub enum ReservedDuration {
    OneYear,
    ThreeYear,
}

impl ReservedDuration {
    pub const ONE_YEAR_SECONDS: u64 = 31_536_000;
    pub const THREE_YEAR_SECONDS: u64 = 94_608_000;

    pub fn seconds(self) -> u64 {
        match self {
            ReservedDuration::OneYear => Self::ONE_YEAR_SECONDS,
            ReservedDuration::ThreeYear => Self::THREE_YEAR_SECONDS,
        }
    }

    pub fn hours(self) -> u64 {
        self.seconds() / 3600
    }

    pub fn from_seconds(seconds: u64) -> Option<Self> {
        match seconds {
            Self::ONE_YEAR_SECONDS => Some(ReservedDuration::OneYear),
            Self::THREE_YEAR_SECONDS => Some(ReservedDuration::ThreeYear),
            _ => None,
        }
    }
}

impl From<ReservedDuration> for u64 {
    fn from(duration: ReservedDuration) -> Self {
        duration.seconds()
    }
}

impl TryFrom<u64> for ReservedDuration {
    type Error = OfferingError;

    fn try_from(seconds: u64) -> Result<Self, Self::Error> {
        ReservedDuration::from_seconds(seconds)
            .ok_or_else(|| OfferingError::invalid_parameter("Duration", seconds))
    }
}

impl std::fmt::Display for ReservedDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.seconds())
    }
}

impl FromStr for ReservedDuration {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .ok()
            .and_then(ReservedDuration::from_seconds)
            .ok_or(())
    }
}

/// Whether an offering reserves capacity in one zone or applies region-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum OfferingScope {
    #[serde(rename = "Availability Zone")]
    AvailabilityZone,
    #[serde(rename = "Region")]
    Region,
}

impl std::fmt::Display for OfferingScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OfferingScope::AvailabilityZone => write!(f, "Availability Zone"),
            OfferingScope::Region => write!(f, "Region"),
        }
    }
}

impl FromStr for OfferingScope {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Availability Zone" => Ok(OfferingScope::AvailabilityZone),
            "Region" => Ok(OfferingScope::Region),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurringChargeFrequency {
    Hourly,
}

impl std::fmt::Display for RecurringChargeFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecurringChargeFrequency::Hourly => write!(f, "Hourly"),
        }
    }
}
