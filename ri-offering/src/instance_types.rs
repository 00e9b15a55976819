//! Supported instance types and their Linux on-demand hourly rates (USD).
//!
//! The rates seed the deterministic price terms of generated offerings; they are
//! reference values and are not kept in sync with any live price list.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InstanceTypeSpec {
    pub name: &'static str,
    pub vcpus: u32,
    pub memory_gib: f64,
    pub on_demand_hourly: f64,
}

const fn spec(
    name: &'static str,
    vcpus: u32,
    memory_gib: f64,
    on_demand_hourly: f64,
) -> InstanceTypeSpec {
    InstanceTypeSpec {
        name,
        vcpus,
        memory_gib,
        on_demand_hourly,
    }
}

pub const INSTANCE_TYPES: &[InstanceTypeSpec] = &[
    // General purpose, burstable
    spec("t2.nano", 1, 0.5, 0.0058),
    spec("t2.micro", 1, 1.0, 0.0116),
    spec("t2.small", 1, 2.0, 0.023),
    spec("t2.medium", 2, 4.0, 0.0464),
    spec("t2.large", 2, 8.0, 0.0928),
    spec("t2.xlarge", 4, 16.0, 0.1856),
    spec("t2.2xlarge", 8, 32.0, 0.3712),
    spec("t3.nano", 2, 0.5, 0.0052),
    spec("t3.micro", 2, 1.0, 0.0104),
    spec("t3.small", 2, 2.0, 0.0208),
    spec("t3.medium", 2, 4.0, 0.0416),
    spec("t3.large", 2, 8.0, 0.0832),
    spec("t3.xlarge", 4, 16.0, 0.1664),
    spec("t3.2xlarge", 8, 32.0, 0.3328),
    // General purpose
    spec("m4.large", 2, 8.0, 0.10),
    spec("m4.xlarge", 4, 16.0, 0.20),
    spec("m4.2xlarge", 8, 32.0, 0.40),
    spec("m4.4xlarge", 16, 64.0, 0.80),
    spec("m4.10xlarge", 40, 160.0, 2.00),
    spec("m4.16xlarge", 64, 256.0, 3.20),
    spec("m5.large", 2, 8.0, 0.096),
    spec("m5.xlarge", 4, 16.0, 0.192),
    spec("m5.2xlarge", 8, 32.0, 0.384),
    spec("m5.4xlarge", 16, 64.0, 0.768),
    spec("m5.12xlarge", 48, 192.0, 2.304),
    spec("m5.24xlarge", 96, 384.0, 4.608),
    spec("m5d.large", 2, 8.0, 0.113),
    spec("m5d.xlarge", 4, 16.0, 0.226),
    spec("m5d.2xlarge", 8, 32.0, 0.452),
    spec("m5d.4xlarge", 16, 64.0, 0.904),
    // Compute optimized
    spec("c4.large", 2, 3.75, 0.10),
    spec("c4.xlarge", 4, 7.5, 0.199),
    spec("c4.2xlarge", 8, 15.0, 0.398),
    spec("c4.4xlarge", 16, 30.0, 0.796),
    spec("c4.8xlarge", 36, 60.0, 1.591),
    spec("c5.large", 2, 4.0, 0.085),
    spec("c5.xlarge", 4, 8.0, 0.17),
    spec("c5.2xlarge", 8, 16.0, 0.34),
    spec("c5.4xlarge", 16, 32.0, 0.68),
    spec("c5.9xlarge", 36, 72.0, 1.53),
    spec("c5.18xlarge", 72, 144.0, 3.06),
    spec("c5d.large", 2, 4.0, 0.096),
    spec("c5d.xlarge", 4, 8.0, 0.192),
    spec("c5d.2xlarge", 8, 16.0, 0.384),
    spec("c5d.4xlarge", 16, 32.0, 0.768),
    spec("c5d.9xlarge", 36, 72.0, 1.728),
    spec("c5d.18xlarge", 72, 144.0, 3.456),
    // Memory optimized
    spec("r4.large", 2, 15.25, 0.133),
    spec("r4.xlarge", 4, 30.5, 0.266),
    spec("r4.2xlarge", 8, 61.0, 0.532),
    spec("r4.4xlarge", 16, 122.0, 1.064),
    spec("r4.8xlarge", 32, 244.0, 2.128),
    spec("r4.16xlarge", 64, 488.0, 4.256),
    spec("r5.large", 2, 16.0, 0.126),
    spec("r5.xlarge", 4, 32.0, 0.252),
    spec("r5.2xlarge", 8, 64.0, 0.504),
    spec("r5.4xlarge", 16, 128.0, 1.008),
    spec("r5.12xlarge", 48, 384.0, 3.024),
    spec("r5.24xlarge", 96, 768.0, 6.048),
    spec("x1.16xlarge", 64, 976.0, 6.669),
    spec("x1.32xlarge", 128, 1952.0, 13.338),
    spec("x1e.xlarge", 4, 122.0, 0.834),
    spec("x1e.2xlarge", 8, 244.0, 1.668),
    // Storage optimized
    spec("i3.large", 2, 15.25, 0.156),
    spec("i3.xlarge", 4, 30.5, 0.312),
    spec("i3.2xlarge", 8, 61.0, 0.624),
    spec("i3.4xlarge", 16, 122.0, 1.248),
    spec("i3.8xlarge", 32, 244.0, 2.496),
    spec("i3.16xlarge", 64, 488.0, 4.992),
    spec("d2.xlarge", 4, 30.5, 0.69),
    spec("d2.2xlarge", 8, 61.0, 1.38),
    // Accelerated computing
    spec("p2.xlarge", 4, 61.0, 0.90),
    spec("p2.8xlarge", 32, 488.0, 7.20),
    spec("p3.2xlarge", 8, 61.0, 3.06),
    spec("p3.8xlarge", 32, 244.0, 12.24),
    spec("g3.4xlarge", 16, 122.0, 1.14),
    spec("g3.8xlarge", 32, 244.0, 2.28),
];

/// Look up a supported instance type by exact name.
pub fn find_instance_type(name: &str) -> Option<&'static InstanceTypeSpec> {
    INSTANCE_TYPES.iter().find(|spec| spec.name == name)
}

pub fn is_valid_instance_type(name: &str) -> bool {
    find_instance_type(name).is_some()
}

pub fn instance_type_names() -> impl Iterator<Item = &'static str> {
    INSTANCE_TYPES.iter().map(|spec| spec.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_are_unique() {
        let names: HashSet<_> = instance_type_names().collect();
        assert_eq!(names.len(), INSTANCE_TYPES.len());
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(is_valid_instance_type("m5.xlarge"));
        assert!(is_valid_instance_type("c5d.large"));
        assert!(!is_valid_instance_type("m5.xxlarge"));
        assert!(!is_valid_instance_type("M5.XLARGE"));
        assert!(!is_valid_instance_type(""));
    }

    #[test]
    fn test_specs() {
        let spec = find_instance_type("x1.16xlarge").unwrap();
        assert_eq!(spec.vcpus, 64);
        assert_eq!(spec.memory_gib, 976.0);
    }

    #[test]
    fn test_rates_are_positive() {
        assert!(INSTANCE_TYPES.iter().all(|s| s.on_demand_hourly > 0.0 && s.vcpus > 0));
    }
}
