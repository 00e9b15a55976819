use crate::argparse::ValuesArgs;
use crate::CliError;
use ri_offering::instance_types::{instance_type_names, INSTANCE_TYPES};
use ri_offering::{
    InstanceTenancy, OfferingClass, OfferingType, ProductDescription, ReservedDuration,
};
use std::io::Write;
use strum::IntoEnumIterator;
use tabular::{Row, Table};

/// Request parameters with an enumerated set of values
pub const PARAMETERS: &[&str] = &[
    "InstanceType",
    "ProductDescription",
    "InstanceTenancy",
    "OfferingClass",
    "OfferingType",
    "MaxDuration",
];

fn display_all<T: IntoEnumIterator + std::fmt::Display>() -> Vec<String> {
    T::iter().map(|v| v.to_string()).collect()
}

pub fn parameter_values(parameter: &str) -> Option<Vec<String>> {
    let values = match parameter {
        "InstanceType" => instance_type_names().map(str::to_string).collect(),
        "ProductDescription" => display_all::<ProductDescription>(),
        "InstanceTenancy" => display_all::<InstanceTenancy>(),
        "OfferingClass" => display_all::<OfferingClass>(),
        "OfferingType" => display_all::<OfferingType>(),
        "MaxDuration" => display_all::<ReservedDuration>(),
        _ => return None,
    };
    Some(values)
}

pub fn handle_values_command<W: Write>(args: ValuesArgs, out: &mut W) -> Result<(), CliError> {
    if args.parameter == "InstanceType" {
        return write_instance_types(out);
    }
    let values = parameter_values(&args.parameter)
        .ok_or_else(|| CliError::UnknownParameter(args.parameter.clone()))?;
    for value in values {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}

/// Instance types with their sizing and the on-demand rate prices derive from
fn write_instance_types<W: Write>(out: &mut W) -> Result<(), CliError> {
    #[allow(clippy::literal_string_with_formatting_args)]
    let mut table = Table::new("{:<}  {:>}  {:>}  {:>}").with_row(Row::from_cells(
        ["Instance type", "vCPUs", "Memory (GiB)", "On-demand USD/h"]
            .iter()
            .cloned(),
    ));
    for spec in INSTANCE_TYPES {
        table.add_row(
            Row::new()
                .with_cell(spec.name)
                .with_cell(spec.vcpus)
                .with_cell(spec.memory_gib)
                .with_cell(format!("{:.4}", spec.on_demand_hourly)),
        );
    }
    write!(out, "{}", table)?;
    Ok(())
}
