//! Common test utilities and shared request builders for the ri-offering crate
#![allow(dead_code)]

use ri_offering::{
    DescribeReservedInstancesOfferingsRequest, DescribeReservedInstancesOfferingsResponse,
    OfferingError, OfferingRegistry,
};

pub const ONE_YEAR: i64 = 31_536_000;
pub const THREE_YEAR: i64 = 94_608_000;

/// Catalog file with two restricted regions, shared by config and registry tests
pub const SAMPLE_CATALOG_YAML: &str = r#"
regions:
  - name: us-east-2
    availability_zones: [us-east-2a, us-east-2b]
    instance_types: [m4.large, m5.large, m5.xlarge]
  - name: lab-1
    availability_zones: [lab-1a, lab-1b, lab-1c]
    instance_types: [t2.nano]
"#;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn builtin_registry() -> OfferingRegistry {
    init_logging();
    OfferingRegistry::builtin().expect("built-in registry")
}

/// Request with every filter set, as issued by the reserved-instance client tests
pub fn full_request(
    instance_type: &str,
    product_description: &str,
    tenancy: &str,
    offering_class: &str,
    offering_type: &str,
    max_duration: i64,
) -> DescribeReservedInstancesOfferingsRequest {
    DescribeReservedInstancesOfferingsRequest::new()
        .with_instance_type(instance_type)
        .with_product_description(product_description)
        .with_instance_tenancy(tenancy)
        .with_offering_class(offering_class)
        .with_offering_type(offering_type)
        .with_max_duration(max_duration)
        .with_min_duration(THREE_YEAR)
}

/// m4.large / Windows / default / standard / All Upfront / 3 years
pub fn baseline_request() -> DescribeReservedInstancesOfferingsRequest {
    full_request(
        "m4.large",
        "Windows",
        "default",
        "standard",
        "All Upfront",
        THREE_YEAR,
    )
}

pub fn describe(
    region: &str,
    request: &DescribeReservedInstancesOfferingsRequest,
) -> Result<DescribeReservedInstancesOfferingsResponse, OfferingError> {
    builtin_registry().describe_offerings(region, request)
}

/// Assert the call failed with InvalidParameterValue for the given parameter
pub fn assert_invalid_parameter(
    result: Result<DescribeReservedInstancesOfferingsResponse, OfferingError>,
    expected_parameter: &str,
) {
    match result {
        Err(OfferingError::InvalidParameterValue { parameter, .. }) => {
            assert_eq!(parameter, expected_parameter);
        }
        Err(other) => panic!("Expected InvalidParameterValue, got {:?}", other),
        Ok(response) => panic!(
            "Expected InvalidParameterValue for {}, got {} offerings",
            expected_parameter,
            response.reserved_instances_offerings.len()
        ),
    }
}

/// Test case-sensitive enum parsing
pub fn test_enum_parsing<T, P>(test_cases: Vec<(&str, T)>, parse_func: P)
where
    T: std::fmt::Debug + PartialEq,
    P: Fn(&str) -> Result<T, ()>,
{
    for (input, expected) in test_cases {
        let parsed = parse_func(input).unwrap_or_else(|_| {
            panic!("Failed to parse enum value: {}", input);
        });
        assert_eq!(parsed, expected);
    }
}

/// Test invalid enum parsing
pub fn test_enum_invalid_parsing<T, P>(invalid_inputs: Vec<&str>, parse_func: P)
where
    P: Fn(&str) -> Result<T, ()>,
{
    for input in invalid_inputs {
        assert!(parse_func(input).is_err(), "Expected error for input: {}", input);
    }
}
