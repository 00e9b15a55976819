use ri_offering::{
    DescribeReservedInstancesOfferingsRequest, InstanceTenancy, OfferingClass, OfferingScope,
    OfferingType, ProductDescription, ReservedDuration,
};
mod common;
use common::*;

#[test]
fn test_invalid_instance_type() {
    let request = full_request(
        "m5.xxlarge",
        "Windows",
        "dedicated",
        "standard",
        "Partial Upfront",
        THREE_YEAR,
    );
    assert_invalid_parameter(describe("us-east-2", &request), "InstanceType");
}

#[test]
fn test_invalid_instance_type_suggests_nearest() {
    let request = baseline_request().with_instance_type("m5.xxlarge");
    let err = describe("us-east-2", &request).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid value 'm5.xxlarge' for InstanceType. Did you mean 'm5.xlarge'?"
    );
}

#[test]
fn test_valid_instance_type() {
    let request = full_request(
        "m5.xlarge",
        "Windows",
        "dedicated",
        "standard",
        "Partial Upfront",
        THREE_YEAR,
    );
    let response = describe("us-east-2", &request).unwrap();
    assert_eq!(response.reserved_instances_offerings[0].instance_type, "m5.xlarge");
}

#[test]
fn test_invalid_offering_class() {
    // standard and convertible are the only classes
    let request = full_request(
        "m4.large",
        "Windows",
        "dedicated",
        "All Upfront",
        "Partial Upfront",
        THREE_YEAR,
    );
    assert_invalid_parameter(describe("us-east-2", &request), "OfferingClass");
}

#[test]
fn test_valid_offering_class() {
    for class in ["standard", "convertible"] {
        let request = full_request(
            "m4.large",
            "Windows",
            "dedicated",
            class,
            "Partial Upfront",
            THREE_YEAR,
        );
        let response = describe("us-east-2", &request).unwrap();
        assert_eq!(
            response.reserved_instances_offerings[0]
                .offering_class
                .to_string(),
            class
        );
    }
}

#[test]
fn test_invalid_offering_type() {
    let request = full_request(
        "m4.large",
        "Windows",
        "dedicated",
        "standard",
        "standard",
        THREE_YEAR,
    );
    assert_invalid_parameter(describe("us-east-2", &request), "OfferingType");
}

#[test]
fn test_valid_offering_type() {
    for offering_type in ["All Upfront", "Partial Upfront", "No Upfront"] {
        let request = full_request(
            "m4.large",
            "Windows",
            "dedicated",
            "standard",
            offering_type,
            THREE_YEAR,
        );
        let response = describe("us-east-2", &request).unwrap();
        assert_eq!(
            response.reserved_instances_offerings[0]
                .offering_type
                .to_string(),
            offering_type
        );
    }
}

#[test]
fn test_invalid_instance_tenancy_host() {
    // host reservations are sold through a different call
    let request = baseline_request().with_instance_tenancy("host");
    assert_invalid_parameter(describe("us-east-2", &request), "InstanceTenancy");
}

#[test]
fn test_valid_instance_tenancy() {
    let response = describe("us-east-2", &baseline_request()).unwrap();
    assert_eq!(
        response.reserved_instances_offerings[0].instance_tenancy,
        InstanceTenancy::Default
    );
}

#[test]
fn test_invalid_max_duration() {
    // only 1 and 3 year terms exist
    let request = baseline_request().with_max_duration(12345678);
    assert_invalid_parameter(describe("us-east-2", &request), "MaxDuration");

    let request = baseline_request().with_max_duration(-ONE_YEAR);
    assert_invalid_parameter(describe("us-east-2", &request), "MaxDuration");
}

#[test]
fn test_valid_max_duration() {
    for seconds in [ONE_YEAR, THREE_YEAR] {
        let request = baseline_request().with_max_duration(seconds);
        let response = describe("us-east-2", &request).unwrap();
        assert!(!response.reserved_instances_offerings.is_empty());
        for offering in &response.reserved_instances_offerings {
            assert_eq!(offering.duration.seconds() as i64, seconds);
        }
    }
}

#[test]
fn test_invalid_product_description() {
    let request = baseline_request().with_product_description("Windows without SQL Server Web");
    assert_invalid_parameter(describe("us-east-2", &request), "ProductDescription");
}

#[test]
fn test_valid_product_descriptions_per_region() {
    let cases = [
        ("us-east-2", "m5.large", "Windows with SQL Server Web"),
        ("ap-south-1", "r4.8xlarge", "Windows with SQL Server Enterprise"),
        ("ap-south-1", "r4.4xlarge", "Red Hat Enterprise Linux"),
        ("ap-south-1", "r4.4xlarge", "Linux with SQL Server Enterprise"),
        ("us-west-1", "t2.nano", "Windows BYOL"),
        ("eu-west-1", "x1.16xlarge", "SUSE Linux"),
        ("eu-central-1", "c5d.large", "Linux/UNIX"),
    ];
    for (region, instance_type, product) in cases {
        let request = full_request(
            instance_type,
            product,
            "default",
            "standard",
            "All Upfront",
            THREE_YEAR,
        );
        let response = describe(region, &request)
            .unwrap_or_else(|e| panic!("{} {} {}: {}", region, instance_type, product, e));
        let first = &response.reserved_instances_offerings[0];
        assert_eq!(first.product_description.as_str(), product);
        assert_eq!(first.instance_type, instance_type);
    }
}

#[test]
fn test_number_of_offerings_in_ohio() {
    // Two of the three Ohio zones sell zonal reservations, plus one regional offering
    let request = full_request(
        "m5.large",
        "Windows",
        "default",
        "standard",
        "All Upfront",
        THREE_YEAR,
    );
    let first = describe("us-east-2", &request).unwrap();
    assert_eq!(first.reserved_instances_offerings.len(), 3);
    assert!(first.next_token.is_none());

    let zonal: Vec<_> = first
        .reserved_instances_offerings
        .iter()
        .filter_map(|o| o.availability_zone.as_deref())
        .collect();
    assert_eq!(zonal, vec!["us-east-2a", "us-east-2b"]);
    let regional = &first.reserved_instances_offerings[2];
    assert_eq!(regional.scope, OfferingScope::Region);
    assert!(regional.availability_zone.is_none());

    let second = describe("us-east-2", &request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_number_of_offerings_follows_zone_count() {
    let request = baseline_request();
    let response = describe("us-east-1", &request).unwrap();
    assert_eq!(response.reserved_instances_offerings.len(), 5 + 1);
}

#[test]
fn test_returned_offerings_match_every_constrained_field() {
    let request = full_request(
        "r4.large",
        "Linux with SQL Server Standard",
        "dedicated",
        "convertible",
        "No Upfront",
        ONE_YEAR,
    );
    let response = describe("eu-west-1", &request).unwrap();
    assert_eq!(response.reserved_instances_offerings.len(), 4);
    for offering in &response.reserved_instances_offerings {
        assert_eq!(offering.instance_type, "r4.large");
        assert_eq!(
            offering.product_description,
            ProductDescription::LinuxWithSqlServerStandard
        );
        assert_eq!(offering.instance_tenancy, InstanceTenancy::Dedicated);
        assert_eq!(offering.offering_class, OfferingClass::Convertible);
        assert_eq!(offering.offering_type, OfferingType::NoUpfront);
        assert_eq!(offering.duration, ReservedDuration::OneYear);
        assert_eq!(offering.currency_code, "USD");
        assert!(!offering.marketplace);
        assert_eq!(offering.fixed_price, 0.0);
        assert_eq!(offering.recurring_charges.len(), 1);
    }
}

#[test]
fn test_unconstrained_fields_fan_out() {
    // Only the instance type and term are fixed: every product, tenancy, class
    // and offering type comes back for each placement.
    let request = DescribeReservedInstancesOfferingsRequest::new()
        .with_instance_type("t2.nano")
        .with_max_duration(ONE_YEAR);
    let response = describe("us-east-2", &request).unwrap();
    assert_eq!(response.reserved_instances_offerings.len(), 11 * 2 * 2 * 3 * 3);
    assert!(response
        .reserved_instances_offerings
        .iter()
        .all(|o| o.instance_type == "t2.nano" && o.duration == ReservedDuration::OneYear));
}

#[test]
fn test_min_duration_does_not_filter() {
    let with_min = baseline_request().with_min_duration(ONE_YEAR);
    let mut without_min = baseline_request();
    without_min.min_duration = None;

    let a = describe("us-east-2", &with_min).unwrap();
    let b = describe("us-east-2", &without_min).unwrap();
    let c = describe("us-east-2", &baseline_request().with_min_duration(0)).unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);

    // No MaxDuration: both terms are returned whatever MinDuration says
    let mut request = baseline_request().with_min_duration(THREE_YEAR);
    request.max_duration = None;
    let response = describe("us-east-2", &request).unwrap();
    assert!(response
        .reserved_instances_offerings
        .iter()
        .any(|o| o.duration == ReservedDuration::OneYear));
}

#[test]
fn test_negative_min_duration_rejected() {
    let request = baseline_request().with_min_duration(-1);
    assert_invalid_parameter(describe("us-east-2", &request), "MinDuration");
}

#[test]
fn test_validation_order_reports_first_invalid_field() {
    let request = full_request(
        "m5.xxlarge",
        "Windows without SQL Server Web",
        "host",
        "All Upfront",
        "standard",
        12345678,
    );
    assert_invalid_parameter(describe("us-east-2", &request), "InstanceType");

    let request = request.with_instance_type("m5.large");
    assert_invalid_parameter(describe("us-east-2", &request), "OfferingClass");

    let request = request.with_offering_class("standard");
    assert_invalid_parameter(describe("us-east-2", &request), "OfferingType");

    let request = request.with_offering_type("All Upfront");
    assert_invalid_parameter(describe("us-east-2", &request), "InstanceTenancy");

    let request = request.with_instance_tenancy("default");
    assert_invalid_parameter(describe("us-east-2", &request), "MaxDuration");

    let request = request.with_max_duration(THREE_YEAR);
    assert_invalid_parameter(describe("us-east-2", &request), "ProductDescription");

    let request = request.with_product_description("Windows");
    assert_eq!(
        describe("us-east-2", &request)
            .unwrap()
            .reserved_instances_offerings
            .len(),
        3
    );
}

#[test]
fn test_values_are_case_sensitive() {
    let request = baseline_request().with_offering_class("Standard");
    assert_invalid_parameter(describe("us-east-2", &request), "OfferingClass");

    let request = baseline_request().with_product_description("windows");
    assert_invalid_parameter(describe("us-east-2", &request), "ProductDescription");
}

#[test]
fn test_availability_zone_filter() {
    let request = baseline_request().with_availability_zone("us-east-2b");
    let response = describe("us-east-2", &request).unwrap();
    assert_eq!(response.reserved_instances_offerings.len(), 1);
    let offering = &response.reserved_instances_offerings[0];
    assert_eq!(offering.availability_zone.as_deref(), Some("us-east-2b"));
    assert_eq!(offering.scope, OfferingScope::AvailabilityZone);
}

#[test]
fn test_availability_zone_must_sell_reservations() {
    // us-east-2c exists but sells no zonal reservations
    for zone in ["us-east-2c", "us-east-1a", "nowhere"] {
        let request = baseline_request().with_availability_zone(zone);
        assert_invalid_parameter(describe("us-east-2", &request), "AvailabilityZone");
    }
}

#[test]
fn test_lookup_by_offering_id() {
    let all = describe("us-east-2", &baseline_request()).unwrap();
    let wanted = &all.reserved_instances_offerings[1];

    let request = DescribeReservedInstancesOfferingsRequest::new().with_offering_id(wanted.key());
    let response = describe("us-east-2", &request).unwrap();
    assert_eq!(response.reserved_instances_offerings, vec![wanted.clone()]);

    // A valid id combined with a contradicting filter matches nothing
    let request = baseline_request()
        .with_offering_id(wanted.key())
        .with_offering_type("No Upfront");
    let response = describe("us-east-2", &request).unwrap();
    assert!(response.reserved_instances_offerings.is_empty());
}

#[test]
fn test_offering_ids_unique_and_stable() {
    let request = DescribeReservedInstancesOfferingsRequest::new().with_instance_type("m5.large");
    let first = describe("us-east-2", &request).unwrap();
    let ids: std::collections::HashSet<_> = first
        .reserved_instances_offerings
        .iter()
        .map(|o| o.reserved_instances_offering_id.clone())
        .collect();
    assert_eq!(ids.len(), first.reserved_instances_offerings.len());

    let second = describe("us-east-2", &request).unwrap();
    assert_eq!(first, second);

    // The same attributes in another region produce different ids
    let other = describe("eu-west-1", &baseline_request()).unwrap();
    let ohio = describe("us-east-2", &baseline_request()).unwrap();
    assert_ne!(
        other.reserved_instances_offerings[0].reserved_instances_offering_id,
        ohio.reserved_instances_offerings[0].reserved_instances_offering_id
    );
}

#[test]
fn test_response_wire_format() {
    let response = describe("us-east-2", &baseline_request()).unwrap();
    let json = serde_json::to_value(&response).unwrap();
    let offerings = json["ReservedInstancesOfferings"].as_array().unwrap();
    assert_eq!(offerings.len(), 3);

    let zonal = &offerings[0];
    assert_eq!(zonal["InstanceType"], "m4.large");
    assert_eq!(zonal["ProductDescription"], "Windows");
    assert_eq!(zonal["InstanceTenancy"], "default");
    assert_eq!(zonal["OfferingClass"], "standard");
    assert_eq!(zonal["OfferingType"], "All Upfront");
    assert_eq!(zonal["Duration"], 94608000);
    assert_eq!(zonal["AvailabilityZone"], "us-east-2a");
    assert_eq!(zonal["Scope"], "Availability Zone");
    assert_eq!(zonal["CurrencyCode"], "USD");
    assert_eq!(zonal["Marketplace"], false);
    assert!(zonal["ReservedInstancesOfferingId"].is_string());

    let regional = &offerings[2];
    assert!(regional.get("AvailabilityZone").is_none());
    assert_eq!(regional["Scope"], "Region");
    assert!(json.get("NextToken").is_none());
}

#[test]
fn test_error_wire_format() {
    let request = baseline_request().with_instance_tenancy("host");
    let err = describe("us-east-2", &request).unwrap_err();
    let envelope = ri_offering::ErrorResponse::from(&err);
    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json["Error"]["Code"], "InvalidParameterValue");
    assert_eq!(
        json["Error"]["Message"],
        "Invalid value 'host' for InstanceTenancy"
    );
}

#[test]
fn test_valid_instance_type_not_stocked_returns_empty() {
    let config = ri_offering::CatalogConfig::new_from_str(SAMPLE_CATALOG_YAML, "yaml").unwrap();
    let registry = ri_offering::OfferingRegistry::new(&config).unwrap();
    let request = baseline_request().with_instance_type("c5d.large");
    let response = registry.describe_offerings("us-east-2", &request).unwrap();
    assert!(response.reserved_instances_offerings.is_empty());
}

#[test]
fn test_include_marketplace_does_not_change_results() {
    // Every catalog offering is sold by the provider, none through the marketplace
    let request = DescribeReservedInstancesOfferingsRequest::new()
        .with_instance_type("m5.large")
        .with_max_duration(ONE_YEAR);
    let default = describe("us-east-2", &request).unwrap();

    let mut excluded = request.clone();
    excluded.include_marketplace = Some(false);
    let mut included = request.clone();
    included.include_marketplace = Some(true);

    assert_eq!(describe("us-east-2", &excluded).unwrap(), default);
    assert_eq!(describe("us-east-2", &included).unwrap(), default);
    assert!(default
        .reserved_instances_offerings
        .iter()
        .all(|o| !o.marketplace));
}
