/// Error types for request validation, catalog configuration and I/O
#[derive(Debug)]
pub enum OfferingError {
    /// A request parameter is outside its allowed set of values.
    InvalidParameterValue {
        parameter: &'static str,
        value: String,
        suggestion: Option<String>,
    },
    RegionNotFound(String),
    ParseError(String),
    IoError(std::io::Error),
    SerdeJsonError(serde_json::Error),
    SerdeYamlError(serde_yaml_ng::Error),
}

impl OfferingError {
    pub fn invalid_parameter(parameter: &'static str, value: impl ToString) -> Self {
        OfferingError::InvalidParameterValue {
            parameter,
            value: value.to_string(),
            suggestion: None,
        }
    }

    /// Same as `invalid_parameter`, with a "did you mean" hint for near misses.
    pub fn invalid_parameter_with_suggestion(
        parameter: &'static str,
        value: impl ToString,
        suggestion: Option<String>,
    ) -> Self {
        OfferingError::InvalidParameterValue {
            parameter,
            value: value.to_string(),
            suggestion,
        }
    }

    /// Wire error code reported in the `Error.Code` field.
    pub fn code(&self) -> &'static str {
        match self {
            OfferingError::InvalidParameterValue { .. } => "InvalidParameterValue",
            OfferingError::RegionNotFound(_) => "InvalidRegion",
            OfferingError::ParseError(_) | OfferingError::SerdeYamlError(_) => {
                "InvalidConfiguration"
            }
            OfferingError::SerdeJsonError(_) | OfferingError::IoError(_) => "InternalError",
        }
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, OfferingError::InvalidParameterValue { .. })
    }
}

impl From<std::io::Error> for OfferingError {
    fn from(err: std::io::Error) -> Self {
        OfferingError::IoError(err)
    }
}

impl From<serde_json::Error> for OfferingError {
    fn from(err: serde_json::Error) -> Self {
        OfferingError::SerdeJsonError(err)
    }
}

impl From<serde_yaml_ng::Error> for OfferingError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        OfferingError::SerdeYamlError(err)
    }
}

impl std::fmt::Display for OfferingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OfferingError::InvalidParameterValue {
                parameter,
                value,
                suggestion,
            } => {
                write!(f, "Invalid value '{}' for {}", value, parameter)?;
                if let Some(suggestion) = suggestion {
                    write!(f, ". Did you mean '{}'?", suggestion)?;
                }
                Ok(())
            }
            OfferingError::RegionNotFound(region) => write!(f, "Region not found: {}", region),
            OfferingError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            OfferingError::IoError(err) => write!(f, "IO error: {}", err),
            OfferingError::SerdeJsonError(err) => write!(f, "Serde JSON error: {}", err),
            OfferingError::SerdeYamlError(err) => write!(f, "Serde YAML error: {}", err),
        }
    }
}

impl std::error::Error for OfferingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OfferingError::IoError(err) => Some(err),
            OfferingError::SerdeJsonError(err) => Some(err),
            OfferingError::SerdeYamlError(err) => Some(err),
            _ => None,
        }
    }
}
