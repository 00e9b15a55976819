use crate::argparse::DescribeArgs;
use crate::CliError;
use anyhow::Context;
use ri_offering::{DescribeReservedInstancesOfferingsRequest, ErrorResponse, OfferingRegistry};
use std::io::Write;

pub fn handle_describe_command<W: Write>(
    args: DescribeArgs,
    registry: &OfferingRegistry,
    out: &mut W,
) -> Result<(), CliError> {
    let request = build_request(&args).map_err(CliError::RequestFile)?;

    match registry.describe_offerings(&args.region, &request) {
        Ok(response) => {
            let json = response
                .as_json_string_pretty()
                .map_err(|e| CliError::Output(e.into()))?;
            writeln!(out, "{}", json)?;
            Ok(())
        }
        Err(e) => {
            let json = ErrorResponse::from(&e)
                .as_json_string_pretty()
                .map_err(|e| CliError::Output(e.into()))?;
            writeln!(out, "{}", json)?;
            Err(CliError::RequestRejected(e))
        }
    }
}

/// Request from `--request-file` (if any) with the command-line flags applied on top.
pub fn build_request(
    args: &DescribeArgs,
) -> anyhow::Result<DescribeReservedInstancesOfferingsRequest> {
    let mut request = match &args.request_file {
        Some(path) => {
            let input = fs_err::read_to_string(path)?;
            serde_json::from_str::<DescribeReservedInstancesOfferingsRequest>(&input)
                .with_context(|| format!("{} is not a valid describe-offerings request", path))?
        }
        None => DescribeReservedInstancesOfferingsRequest::new(),
    };

    override_field(&mut request.instance_type, &args.instance_type);
    override_field(&mut request.product_description, &args.product_description);
    override_field(&mut request.instance_tenancy, &args.instance_tenancy);
    override_field(&mut request.offering_class, &args.offering_class);
    override_field(&mut request.offering_type, &args.offering_type);
    override_field(&mut request.min_duration, &args.min_duration);
    override_field(&mut request.max_duration, &args.max_duration);
    override_field(&mut request.availability_zone, &args.availability_zone);
    override_field(&mut request.include_marketplace, &args.include_marketplace);
    override_field(&mut request.max_results, &args.max_results);
    override_field(&mut request.next_token, &args.next_token);
    if !args.offering_ids.is_empty() {
        request.reserved_instances_offering_ids = args.offering_ids.clone();
    }
    Ok(request)
}

fn override_field<T: Clone>(field: &mut Option<T>, flag: &Option<T>) {
    if flag.is_some() {
        field.clone_from(flag);
    }
}
