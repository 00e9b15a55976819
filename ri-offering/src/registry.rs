use crate::catalog::RegionCatalog;
use crate::config::CatalogConfig;
use crate::errors::OfferingError;
use crate::request::DescribeReservedInstancesOfferingsRequest;
use crate::types::{DescribeReservedInstancesOfferingsResponse, Offering};
use indexmap::IndexMap;

/// All region catalogs, built once from a `CatalogConfig` and read-only afterwards
#[derive(Debug, Clone)]
pub struct OfferingRegistry {
    // Region name -> catalog, in configuration order
    regions: IndexMap<String, RegionCatalog>,
}

impl OfferingRegistry {
    /// Build every region catalog of the configuration
    pub fn new(config: &CatalogConfig) -> Result<Self, OfferingError> {
        let regions: IndexMap<String, RegionCatalog> = config
            .build_catalogs()?
            .into_iter()
            .map(|catalog| (catalog.name().to_string(), catalog))
            .collect();
        log::info!(
            "Offering registry ready: {} regions, {} offerings",
            regions.len(),
            regions.values().map(RegionCatalog::count).sum::<usize>()
        );
        Ok(Self { regions })
    }

    /// Registry over the built-in regions
    pub fn builtin() -> Result<Self, OfferingError> {
        Self::new(&CatalogConfig::builtin())
    }

    pub fn region(&self, name: &str) -> Result<&RegionCatalog, OfferingError> {
        self.regions
            .get(name)
            .ok_or_else(|| OfferingError::RegionNotFound(name.to_string()))
    }

    pub fn regions(&self) -> impl Iterator<Item = &RegionCatalog> {
        self.regions.values()
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Get total number of offerings across all regions
    pub fn count(&self) -> usize {
        self.regions.values().map(RegionCatalog::count).sum()
    }

    /// Describe the offerings of one region
    pub fn describe_offerings(
        &self,
        region: &str,
        request: &DescribeReservedInstancesOfferingsRequest,
    ) -> Result<DescribeReservedInstancesOfferingsResponse, OfferingError> {
        log::debug!("describe-offerings in {}: {:?}", region, request);
        self.region(region)?.describe_offerings(request)
    }

    /// Get a specific offering by region and id
    pub fn get_offering(&self, region: &str, offering_id: &str) -> Option<Offering> {
        self.regions.get(region)?.get_offering(offering_id)
    }
}
