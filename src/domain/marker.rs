use crate::domain::ports::MapMarker;
use crate::utils::error::{MapError, Result};
use crate::utils::escape::escape;
use crate::utils::validation::{
    validate_icon_url, validate_non_empty_string, validate_one_of, validate_range,
};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

pub const NAMED_COLORS: [&str; 10] = [
    "black", "brown", "green", "purple", "yellow", "blue", "gray", "orange", "red", "white",
];

#[derive(Debug, Clone)]
pub enum Location {
    Coordinates { lat: f64, lng: f64 },
    Address(String),
}

impl Location {
    // -0.0 and 0.0 must hash and compare the same
    fn normalized(value: f64) -> f64 {
        value + 0.0
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Location::Coordinates { lat, lng },
                Location::Coordinates {
                    lat: other_lat,
                    lng: other_lng,
                },
            ) => {
                Location::normalized(*lat).to_bits() == Location::normalized(*other_lat).to_bits()
                    && Location::normalized(*lng).to_bits()
                        == Location::normalized(*other_lng).to_bits()
            }
            (Location::Address(a), Location::Address(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Location::Coordinates { lat, lng } => {
                0u8.hash(state);
                Location::normalized(*lat).to_bits().hash(state);
                Location::normalized(*lng).to_bits().hash(state);
            }
            Location::Address(address) => {
                1u8.hash(state);
                address.hash(state);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerSize {
    Tiny,
    Mid,
    Small,
}

impl MarkerSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerSize::Tiny => "tiny",
            MarkerSize::Mid => "mid",
            MarkerSize::Small => "small",
        }
    }
}

impl FromStr for MarkerSize {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_ascii_lowercase();
        validate_one_of("size", &lowered, &["tiny", "mid", "small"])?;
        Ok(match lowered.as_str() {
            "tiny" => MarkerSize::Tiny,
            "mid" => MarkerSize::Mid,
            _ => MarkerSize::Small,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MarkerStyle {
    pub color: Option<String>,
    pub icon: Option<String>,
    pub label: Option<char>,
    pub size: Option<MarkerSize>,
}

/// A point on the map with optional styling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker {
    location: Location,
    style: MarkerStyle,
}

impl Marker {
    pub fn at(lat: f64, lng: f64) -> Result<Self> {
        validate_range("lat", lat, -90.0, 90.0)?;
        validate_range("lng", lng, -180.0, 180.0)?;
        Ok(Self {
            location: Location::Coordinates { lat, lng },
            style: MarkerStyle::default(),
        })
    }

    pub fn address(address: impl Into<String>) -> Result<Self> {
        let address = address.into();
        validate_non_empty_string("address", &address)?;
        Ok(Self {
            location: Location::Address(address.trim().to_string()),
            style: MarkerStyle::default(),
        })
    }

    /// Accepts a named color or a `0xRRGGBB` hex value.
    pub fn with_color(mut self, color: &str) -> Result<Self> {
        let lowered = color.trim().to_ascii_lowercase();
        let normalized = match lowered.strip_prefix("0x") {
            Some(hex) if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) => {
                format!("0x{}", hex.to_ascii_uppercase())
            }
            _ => {
                validate_one_of("color", &lowered, &NAMED_COLORS).map_err(|_| {
                    MapError::InvalidMarker {
                        field: "color".to_string(),
                        value: color.to_string(),
                        reason: format!(
                            "Expected 0xRRGGBB or one of: {}",
                            NAMED_COLORS.join(", ")
                        ),
                    }
                })?;
                lowered
            }
        };
        self.style.color = Some(normalized);
        Ok(self)
    }

    pub fn with_size(mut self, size: &str) -> Result<Self> {
        self.style.size = Some(size.parse()?);
        Ok(self)
    }

    /// A single letter or digit; letters are upper-cased.
    pub fn with_label(mut self, label: &str) -> Result<Self> {
        let mut chars = label.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphanumeric() => {
                self.style.label = Some(c.to_ascii_uppercase());
                Ok(self)
            }
            _ => Err(MapError::InvalidMarker {
                field: "label".to_string(),
                value: label.to_string(),
                reason: "Label must be a single character A-Z or 0-9".to_string(),
            }),
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Result<Self> {
        validate_icon_url("icon", icon)?;
        self.style.icon = Some(icon.to_string());
        Ok(self)
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }
}

impl MapMarker for Marker {
    fn location_to_url(&self) -> String {
        match &self.location {
            Location::Coordinates { lat, lng } => format!(
                "{},{}",
                Location::normalized(*lat),
                Location::normalized(*lng)
            ),
            Location::Address(address) => escape(address),
        }
    }

    fn options_to_url_params(&self) -> String {
        let mut params = Vec::new();
        if let Some(color) = &self.style.color {
            params.push(format!("color:{}", color));
        }
        if let Some(icon) = &self.style.icon {
            params.push(format!("icon:{}", escape(icon)));
        }
        if let Some(label) = self.style.label {
            params.push(format!("label:{}", label));
        }
        if let Some(size) = self.style.size {
            params.push(format!("size:{}", size.as_str()));
        }
        params.join("|")
    }
}
