pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use config::{MapConfig, MarkerConfig};
pub use self::core::{
    grouping::MarkerGroup,
    map::{MapBuilder, API_URL},
    marker_set::MarkerSet,
};
pub use domain::{
    marker::{Location, Marker, MarkerSize, MarkerStyle},
    model::{MapOptions, OptionValue},
    ports::MapMarker,
};
pub use utils::error::{MapError, Result};
