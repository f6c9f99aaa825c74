use crate::config::toml_config::MarkerConfig;
use crate::utils::error::{MapError, Result};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "static-map-url")]
#[command(about = "Print a static map image URL for a TOML map definition")]
pub struct CliArgs {
    /// Path to the TOML map definition
    #[arg(short, long, default_value = "map.toml")]
    pub config: String,

    /// Extra marker: `LAT,LNG` or an address, optionally followed by
    /// `;name=value` style pairs (color, size, label, icon)
    #[arg(short, long = "marker")]
    pub markers: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn extra_markers(&self) -> Result<Vec<MarkerConfig>> {
        self.markers.iter().map(|arg| parse_marker_arg(arg)).collect()
    }
}

/// Parses `48.85,2.35;color=red;label=A` or `Paris;size=mid`.
pub fn parse_marker_arg(arg: &str) -> Result<MarkerConfig> {
    let mut parts = arg.split(';');
    let location = parts.next().unwrap_or_default().trim();

    let mut marker = MarkerConfig::default();
    let coordinates = location.split_once(',').and_then(|(lat, lng)| {
        Some((lat.trim().parse::<f64>().ok()?, lng.trim().parse::<f64>().ok()?))
    });
    match coordinates {
        Some((lat, lng)) => {
            marker.lat = Some(lat);
            marker.lng = Some(lng);
        }
        None => marker.address = Some(location.to_string()),
    }

    for part in parts {
        let (name, value) = part.split_once('=').ok_or_else(|| MapError::Config {
            message: format!("expected name=value in marker argument, got '{}'", part),
        })?;
        let value = Some(value.trim().to_string());
        match name.trim() {
            "color" => marker.color = value,
            "size" => marker.size = value,
            "label" => marker.label = value,
            "icon" => marker.icon = value,
            other => {
                return Err(MapError::Config {
                    message: format!("unknown marker attribute '{}'", other),
                })
            }
        }
    }

    Ok(marker)
}
