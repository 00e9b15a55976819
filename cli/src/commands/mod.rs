mod describe;
mod regions;
mod values;

use crate::argparse::{Cli, Commands};
use crate::CliError;
pub use describe::{build_request, handle_describe_command};
pub use regions::handle_regions_command;
use ri_offering::{CatalogConfig, OfferingRegistry};
use std::io::Write;
pub use values::{handle_values_command, parameter_values, PARAMETERS};

pub fn handle_command<W: Write>(cli: Cli, out: &mut W) -> Result<(), CliError> {
    match cli.command {
        Commands::Describe(args) => {
            let registry = load_registry(cli.catalog.as_deref())?;
            handle_describe_command(args, &registry, out)
        }
        Commands::Regions => {
            let registry = load_registry(cli.catalog.as_deref())?;
            handle_regions_command(&registry, out)
        }
        Commands::Values(args) => handle_values_command(args, out),
    }
}

/// Registry over the catalog file, or over the built-in regions when none is given
pub fn load_registry(catalog: Option<&str>) -> Result<OfferingRegistry, CliError> {
    let path = catalog.unwrap_or("<built-in>");
    let config = match catalog {
        Some(path) => CatalogConfig::new_from_file(path),
        None => Ok(CatalogConfig::builtin()),
    };
    config
        .and_then(|config| OfferingRegistry::new(&config))
        .map_err(|source| CliError::CatalogLoad {
            path: path.to_string(),
            source,
        })
}
