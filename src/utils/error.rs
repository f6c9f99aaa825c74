use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("The following required options are missing: {}", .missing.join(", "))]
    OptionMissing { missing: Vec<String> },

    #[error("The following options do not exist: {}", .invalid.join(", "))]
    OptionNotExist { invalid: Vec<String> },

    #[error("need markers, or both center and zoom, to build a url")]
    BuildDataMissing,

    #[error("Invalid marker {field} '{value}': {reason}")]
    InvalidMarker {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl MapError {
    /// Errors caused by the caller's input, as opposed to the environment.
    pub fn is_usage_error(&self) -> bool {
        !matches!(self, MapError::Io(_) | MapError::TomlParse(_))
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MapError::OptionMissing { .. } => "Supply key, size and sensor in the [map] table",
            MapError::OptionNotExist { .. } => {
                "Remove unknown options; allowed are key, size, sensor, center, zoom, format, maptype, mobile, language"
            }
            MapError::BuildDataMissing => "Add at least one marker, or set both center and zoom",
            MapError::InvalidMarker { .. } => "Check the marker's coordinates and style attributes",
            MapError::Config { .. } => "Check the map definition file for malformed entries",
            MapError::Io(_) => "Make sure the file exists and is readable",
            MapError::TomlParse(_) => "Make sure the file is valid TOML",
        }
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
