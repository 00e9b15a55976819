pub mod argparse;
pub mod commands;
pub mod utils;

use ri_offering::OfferingError;

/// Error type for CLI failures
#[derive(Debug)]
pub enum CliError {
    CatalogLoad { path: String, source: OfferingError },
    RequestFile(anyhow::Error),
    UnknownParameter(String),
    /// The request reached the catalog and was rejected; the error envelope has already been printed.
    RequestRejected(OfferingError),
    Output(anyhow::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::CatalogLoad { path, source } => {
                write!(
                    f,
                    "Failed to load catalog '{path}': {source}\n\nPossible fixes:\n  - Check the file exists and ends in .yaml, .yml or .json\n  - Every availability zone must be the region name plus one letter\n  - Run without --catalog to use the built-in regions"
                )
            }
            CliError::RequestFile(e) => {
                write!(
                    f,
                    "Failed to read request file: {e:#}\n\nThe file must hold one JSON object with PascalCase fields, for example:\n  {{\"InstanceType\": \"m5.large\", \"MaxDuration\": 94608000}}"
                )
            }
            CliError::UnknownParameter(parameter) => {
                write!(
                    f,
                    "Unknown parameter: '{}'\n\nValid parameters are: {}",
                    parameter,
                    commands::PARAMETERS.join(", ")
                )
            }
            CliError::RequestRejected(e) => {
                write!(f, "Request rejected ({}): {}", e.code(), e)
            }
            CliError::Output(e) => write!(f, "Failed to write output: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::CatalogLoad { source, .. } => Some(source),
            CliError::RequestFile(e) => Some(e.as_ref()),
            CliError::UnknownParameter(_) => None,
            CliError::RequestRejected(e) => Some(e),
            CliError::Output(e) => Some(e.as_ref()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Output(err.into())
    }
}
