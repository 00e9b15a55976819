//! Catalog configuration: which regions exist, which zones sell zonal
//! reservations, and which instance types each region stocks.
//!
//! The built-in configuration covers every region in `regions::REGIONS` with all
//! supported instance types. A YAML or JSON file can replace it:
//!
//! ```yaml
//! regions:
//!   - name: us-east-2
//!     availability_zones: [us-east-2a, us-east-2b]
//!     instance_types: [m5.large, m5.xlarge]
//! ```
//!
//! `availability_zones` may be omitted for built-in regions; `instance_types`
//! defaults to the whole supported catalog.

use crate::catalog::RegionCatalog;
use crate::errors::OfferingError;
use crate::instance_types::{
    find_instance_type, instance_type_names, InstanceTypeSpec, INSTANCE_TYPES,
};
use crate::regions::{reservable_zones, zone_belongs_to_region, REGIONS};
use crate::suggest::closest_match;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub regions: Vec<RegionConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_types: Option<Vec<String>>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CatalogConfig {
    pub fn builtin() -> Self {
        Self {
            regions: REGIONS
                .iter()
                .map(|(name, _)| RegionConfig {
                    name: name.to_string(),
                    availability_zones: None,
                    instance_types: None,
                })
                .collect(),
        }
    }

    pub fn new_from_file(path: &str) -> Result<Self, OfferingError> {
        let input = fs_err::read_to_string(path)?;

        let lower = path.to_lowercase();
        if lower.ends_with(".json") {
            Self::new_from_str(&input, "json")
        } else if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            Self::new_from_str(&input, "yaml")
        } else {
            Err(OfferingError::ParseError(
                "Unsupported file format. Use '.json' or '.yaml'.".to_string(),
            ))
        }
    }

    pub fn new_from_str(input: &str, format: &str) -> Result<Self, OfferingError> {
        let config: CatalogConfig = match format {
            "yaml" => serde_yaml_ng::from_str(input)?,
            "json" => serde_json::from_str(input)?,
            _ => {
                return Err(OfferingError::ParseError(
                    "Unsupported format. Use 'yaml' or 'json'.".to_string(),
                ))
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is internally consistent.
    pub fn validate(&self) -> Result<(), OfferingError> {
        if self.regions.is_empty() {
            return Err(OfferingError::ParseError(
                "Catalog configuration lists no regions".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for region in &self.regions {
            if region.name.trim().is_empty() {
                return Err(OfferingError::ParseError(
                    "Region name cannot be empty".to_string(),
                ));
            }
            if !seen.insert(region.name.as_str()) {
                return Err(OfferingError::ParseError(format!(
                    "Duplicate region '{}'",
                    region.name
                )));
            }
            region.resolve_zones()?;
            region.resolve_instance_types()?;
        }
        Ok(())
    }

    pub fn build_catalogs(&self) -> Result<Vec<RegionCatalog>, OfferingError> {
        self.validate()?;
        self.regions
            .iter()
            .map(|region| {
                Ok(RegionCatalog::new(
                    &region.name,
                    region.resolve_zones()?,
                    region.resolve_instance_types()?,
                ))
            })
            .collect()
    }
}

impl RegionConfig {
    fn resolve_zones(&self) -> Result<Vec<String>, OfferingError> {
        let zones: Vec<String> = match &self.availability_zones {
            Some(zones) => zones.clone(),
            None => reservable_zones(&self.name)
                .ok_or_else(|| {
                    OfferingError::ParseError(format!(
                        "Region '{}' is not built in and lists no availability_zones",
                        self.name
                    ))
                })?
                .iter()
                .map(|z| z.to_string())
                .collect(),
        };

        if zones.is_empty() {
            return Err(OfferingError::ParseError(format!(
                "Region '{}' needs at least one availability zone",
                self.name
            )));
        }
        let mut seen = HashSet::new();
        for zone in &zones {
            if !zone_belongs_to_region(zone, &self.name) {
                return Err(OfferingError::ParseError(format!(
                    "Availability zone '{}' does not belong to region '{}'",
                    zone, self.name
                )));
            }
            if !seen.insert(zone.as_str()) {
                return Err(OfferingError::ParseError(format!(
                    "Duplicate availability zone '{}' in region '{}'",
                    zone, self.name
                )));
            }
        }
        Ok(zones)
    }

    fn resolve_instance_types(&self) -> Result<Vec<&'static InstanceTypeSpec>, OfferingError> {
        let Some(names) = &self.instance_types else {
            return Ok(INSTANCE_TYPES.iter().collect());
        };
        let mut seen = HashSet::new();
        let mut specs = Vec::with_capacity(names.len());
        for name in names {
            let spec = find_instance_type(name).ok_or_else(|| {
                let hint = closest_match(name, instance_type_names())
                    .map(|s| format!(" (did you mean '{}'?)", s))
                    .unwrap_or_default();
                OfferingError::ParseError(format!(
                    "Unknown instance type '{}' in region '{}'{}",
                    name, self.name, hint
                ))
            })?;
            if seen.insert(spec.name) {
                specs.push(spec);
            }
        }
        Ok(specs)
    }
}
