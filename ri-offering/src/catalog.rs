use crate::enums::{
    InstanceTenancy, OfferingClass, OfferingScope, OfferingType, ReservedDuration,
};
use crate::errors::OfferingError;
use crate::instance_types::{InstanceTypeSpec, INSTANCE_TYPES};
use crate::pricing::price_terms;
use crate::products::ProductDescription;
use crate::regions::reservable_zones;
use crate::request::{encode_next_token, DescribeReservedInstancesOfferingsRequest, OfferingQuery};
use crate::types::{DescribeReservedInstancesOfferingsResponse, Offering, OfferingId};
use sha2::{Digest, Sha256};
use strum::IntoEnumIterator;

pub const CURRENCY_CODE: &str = "USD";

/// Where an offering reserves capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement<'a> {
    Zone(&'a str),
    Region,
}

/// One point of the catalog's cross product.
#[derive(Debug, Clone, Copy)]
struct Attributes<'a> {
    spec: &'static InstanceTypeSpec,
    product: ProductDescription,
    tenancy: InstanceTenancy,
    class: OfferingClass,
    offering_type: OfferingType,
    duration: ReservedDuration,
    placement: Placement<'a>,
}

/// Immutable offering catalog of one region.
///
/// Offerings are the cross product of the stocked instance types, product
/// descriptions, tenancies, classes, offering types and durations, each placed
/// once per reservable zone and once region-wide. They are synthesized on lookup
/// in a fixed order, so identical queries always return identical results.
#[derive(Debug, Clone)]
pub struct RegionCatalog {
    name: String,
    availability_zones: Vec<String>,
    instance_types: Vec<&'static InstanceTypeSpec>,
}

impl RegionCatalog {
    pub fn new(
        name: &str,
        availability_zones: Vec<String>,
        instance_types: Vec<&'static InstanceTypeSpec>,
    ) -> Self {
        Self {
            name: name.to_string(),
            availability_zones,
            instance_types,
        }
    }

    /// Catalog of a built-in region stocking every supported instance type
    pub fn builtin(region: &str) -> Result<Self, OfferingError> {
        let zones = reservable_zones(region)
            .ok_or_else(|| OfferingError::RegionNotFound(region.to_string()))?;
        Ok(Self::new(
            region,
            zones.iter().map(|z| z.to_string()).collect(),
            INSTANCE_TYPES.iter().collect(),
        ))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn availability_zones(&self) -> &[String] {
        &self.availability_zones
    }

    pub fn has_zone(&self, zone: &str) -> bool {
        self.availability_zones.iter().any(|z| z == zone)
    }

    pub fn instance_types(&self) -> &[&'static InstanceTypeSpec] {
        &self.instance_types
    }

    pub fn stocks(&self, instance_type: &str) -> bool {
        self.instance_types.iter().any(|spec| spec.name == instance_type)
    }

    /// Total number of offerings in the catalog
    pub fn count(&self) -> usize {
        self.instance_types.len()
            * ProductDescription::iter().count()
            * InstanceTenancy::iter().count()
            * OfferingClass::iter().count()
            * OfferingType::iter().count()
            * ReservedDuration::iter().count()
            * (self.availability_zones.len() + 1)
    }

    /// Validate the request, look up the matching offerings and apply pagination.
    ///
    /// Only the requested page is built, plus one offering to decide whether a
    /// `NextToken` is needed.
    pub fn describe_offerings(
        &self,
        request: &DescribeReservedInstancesOfferingsRequest,
    ) -> Result<DescribeReservedInstancesOfferingsResponse, OfferingError> {
        let query = request.validate(self).inspect_err(|e| {
            log::warn!("{}: rejected describe-offerings request: {}", self.name, e);
        })?;
        let mut matches = self.lookup(&query).skip(query.offset);
        let offerings: Vec<Offering> = match query.max_results {
            Some(limit) => matches.by_ref().take(limit).collect(),
            None => matches.by_ref().collect(),
        };

        if query.offset > 0 && offerings.is_empty() {
            return Err(OfferingError::invalid_parameter(
                "NextToken",
                request.next_token.as_deref().unwrap_or_default(),
            ));
        }
        let next_token = matches
            .next()
            .map(|_| encode_next_token(query.offset + offerings.len()));
        log::debug!(
            "{}: returning {} offerings from offset {}{}",
            self.name,
            offerings.len(),
            query.offset,
            if next_token.is_some() { " (more available)" } else { "" }
        );

        Ok(DescribeReservedInstancesOfferingsResponse {
            reserved_instances_offerings: offerings,
            next_token,
        })
    }

    /// Offerings matching a validated query, in catalog order, built on demand.
    pub fn lookup<'a>(&'a self, query: &'a OfferingQuery) -> impl Iterator<Item = Offering> + 'a {
        self.combinations(query).filter_map(move |attributes| {
            let id = self.offering_id(&attributes);
            if !query.offering_ids.is_empty() && !query.offering_ids.contains(&id) {
                return None;
            }
            let offering = self.build_offering(&attributes, id);
            (query.include_marketplace || !offering.marketplace).then_some(offering)
        })
    }

    /// Look up a single offering by id
    pub fn get_offering(&self, offering_id: &str) -> Option<Offering> {
        let query = OfferingQuery {
            offering_ids: vec![offering_id.to_string()],
            include_marketplace: true,
            ..OfferingQuery::default()
        };
        let mut matches = self.lookup(&query);
        matches.next()
    }

    // Private helper methods

    fn placements<'a>(&'a self, zone: Option<&'a str>) -> Vec<Placement<'a>> {
        match zone {
            Some(zone) => vec![Placement::Zone(zone)],
            None => self
                .availability_zones
                .iter()
                .map(|z| Placement::Zone(z.as_str()))
                .chain(std::iter::once(Placement::Region))
                .collect(),
        }
    }

    /// Every attribute tuple the query leaves open, in catalog order: instance
    /// type outermost, placement innermost.
    fn combinations<'a>(
        &'a self,
        query: &'a OfferingQuery,
    ) -> impl Iterator<Item = Attributes<'a>> + 'a {
        let instance_types: Vec<&'static InstanceTypeSpec> = self
            .instance_types
            .iter()
            .copied()
            .filter(|spec| {
                query
                    .instance_type
                    .map_or(true, |wanted| wanted.name == spec.name)
            })
            .collect();
        let products = candidates(query.product_description);
        let tenancies = candidates(query.instance_tenancy);
        let classes = candidates(query.offering_class);
        let offering_types = candidates(query.offering_type);
        let durations = candidates(query.duration);
        let placements = self.placements(query.availability_zone.as_deref());

        let total = instance_types.len()
            * products.len()
            * tenancies.len()
            * classes.len()
            * offering_types.len()
            * durations.len()
            * placements.len();
        (0..total).map(move |index| {
            let mut rest = index;
            let mut pick = |len: usize| {
                let i = rest % len;
                rest /= len;
                i
            };
            let placement = placements[pick(placements.len())];
            let duration = durations[pick(durations.len())];
            let offering_type = offering_types[pick(offering_types.len())];
            let class = classes[pick(classes.len())];
            let tenancy = tenancies[pick(tenancies.len())];
            let product = products[pick(products.len())];
            let spec = instance_types[pick(instance_types.len())];
            Attributes {
                spec,
                product,
                tenancy,
                class,
                offering_type,
                duration,
                placement,
            }
        })
    }

    /// UUID-shaped identifier derived from the offering's attributes.
    fn offering_id(&self, attributes: &Attributes<'_>) -> OfferingId {
        let zone = match attributes.placement {
            Placement::Zone(zone) => zone,
            Placement::Region => self.name.as_str(),
        };
        let parts = [
            self.name.as_str(),
            zone,
            attributes.spec.name,
            attributes.product.as_str(),
            &attributes.tenancy.to_string(),
            &attributes.class.to_string(),
            &attributes.offering_type.to_string(),
            &attributes.duration.to_string(),
        ];
        digest_id(&parts)
    }

    fn build_offering(&self, attributes: &Attributes<'_>, id: OfferingId) -> Offering {
        let (availability_zone, scope) = match attributes.placement {
            Placement::Zone(zone) => (Some(zone.to_string()), OfferingScope::AvailabilityZone),
            Placement::Region => (None, OfferingScope::Region),
        };
        let terms = price_terms(
            attributes.spec,
            attributes.product,
            attributes.tenancy,
            attributes.class,
            attributes.offering_type,
            attributes.duration,
        );

        Offering {
            reserved_instances_offering_id: id,
            instance_type: attributes.spec.name.to_string(),
            availability_zone,
            duration: attributes.duration,
            fixed_price: terms.fixed_price,
            usage_price: terms.usage_price,
            product_description: attributes.product,
            instance_tenancy: attributes.tenancy,
            currency_code: CURRENCY_CODE.to_string(),
            offering_type: attributes.offering_type,
            offering_class: attributes.class,
            recurring_charges: terms.recurring_charges,
            marketplace: false,
            scope,
        }
    }
}

fn candidates<T: IntoEnumIterator>(constraint: Option<T>) -> Vec<T> {
    match constraint {
        Some(value) => vec![value],
        None => T::iter().collect(),
    }
}

fn digest_id(parts: &[&str]) -> OfferingId {
    let digest = Sha256::digest(parts.join("|").as_bytes());
    let hex = hex::encode(&digest[..16]);
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}
