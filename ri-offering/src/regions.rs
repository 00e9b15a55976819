//! Built-in region definitions.
//!
//! Provides:
//! - `REGIONS`: supported region names with display names
//! - `reservable_zones()`: the availability zones that sell zonal reservations
//! - `is_valid_region()`: validates region names
//!
//! Not every zone of a region sells zonal reservations; us-east-2 has three
//! zones but only two of them appear in the offering catalog.

/// All supported regions with display names.
pub const REGIONS: &[(&str, &str)] = &[
    ("us-east-1", "US East (N. Virginia)"),
    ("us-east-2", "US East (Ohio)"),
    ("us-west-1", "US West (N. California)"),
    ("us-west-2", "US West (Oregon)"),
    ("ca-central-1", "Canada (Central)"),
    ("eu-west-1", "EU (Ireland)"),
    ("eu-west-2", "EU (London)"),
    ("eu-central-1", "EU (Frankfurt)"),
    ("ap-south-1", "Asia Pacific (Mumbai)"),
    ("ap-southeast-1", "Asia Pacific (Singapore)"),
    ("ap-southeast-2", "Asia Pacific (Sydney)"),
    ("ap-northeast-1", "Asia Pacific (Tokyo)"),
    ("sa-east-1", "South America (Sao Paulo)"),
];

/// Check if a region name is one of the built-in regions.
pub fn is_valid_region(region: &str) -> bool {
    REGIONS.iter().any(|(name, _)| *name == region)
}

/// Get the display name for a built-in region.
pub fn region_display_name(region: &str) -> Option<&'static str> {
    REGIONS
        .iter()
        .find(|(name, _)| *name == region)
        .map(|(_, display)| *display)
}

/// Availability zones of a built-in region that sell zonal reservations.
///
/// Returns `None` for unknown regions.
pub fn reservable_zones(region: &str) -> Option<&'static [&'static str]> {
    let zones: &'static [&'static str] = match region {
        "us-east-1" => &[
            "us-east-1a",
            "us-east-1b",
            "us-east-1c",
            "us-east-1d",
            "us-east-1f",
        ],
        "us-east-2" => &["us-east-2a", "us-east-2b"],
        "us-west-1" => &["us-west-1b", "us-west-1c"],
        "us-west-2" => &["us-west-2a", "us-west-2b", "us-west-2c"],
        "ca-central-1" => &["ca-central-1a", "ca-central-1b"],
        "eu-west-1" => &["eu-west-1a", "eu-west-1b", "eu-west-1c"],
        "eu-west-2" => &["eu-west-2a", "eu-west-2b"],
        "eu-central-1" => &["eu-central-1a", "eu-central-1b", "eu-central-1c"],
        "ap-south-1" => &["ap-south-1a", "ap-south-1b"],
        "ap-southeast-1" => &["ap-southeast-1a", "ap-southeast-1b"],
        "ap-southeast-2" => &["ap-southeast-2a", "ap-southeast-2b", "ap-southeast-2c"],
        "ap-northeast-1" => &["ap-northeast-1a", "ap-northeast-1c", "ap-northeast-1d"],
        "sa-east-1" => &["sa-east-1a", "sa-east-1c"],
        _ => return None,
    };
    Some(zones)
}

/// A zone belongs to a region when its name is the region name plus one letter.
pub fn zone_belongs_to_region(zone: &str, region: &str) -> bool {
    zone.strip_prefix(region)
        .map(|suffix| suffix.len() == 1 && suffix.chars().all(|c| c.is_ascii_lowercase()))
        .unwrap_or(false)
}
