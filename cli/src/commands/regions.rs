use crate::CliError;
use ri_offering::regions::region_display_name;
use ri_offering::OfferingRegistry;
use std::io::Write;
use tabular::{Row, Table};

pub fn handle_regions_command<W: Write>(
    registry: &OfferingRegistry,
    out: &mut W,
) -> Result<(), CliError> {
    #[allow(clippy::literal_string_with_formatting_args)]
    let mut table = Table::new("{:<}  {:<}  {:<}  {:>}").with_row(Row::from_cells(
        ["Region", "Name", "Reservable zones", "Instance types"]
            .iter()
            .cloned(),
    ));

    for catalog in registry.regions() {
        table.add_row(
            Row::new()
                .with_cell(catalog.name())
                .with_cell(region_display_name(catalog.name()).unwrap_or("-"))
                .with_cell(catalog.availability_zones().join(", "))
                .with_cell(catalog.instance_types().len()),
        );
    }
    write!(out, "{}", table)?;
    Ok(())
}
