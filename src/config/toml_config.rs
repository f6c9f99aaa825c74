use crate::core::map::MapBuilder;
use crate::domain::marker::Marker;
use crate::domain::model::{MapOptions, OptionValue};
use crate::utils::error::{MapError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A map definition: the `[map]` option table plus `[[markers]]` entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub map: toml::Table,
    #[serde(default)]
    pub markers: Vec<MarkerConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkerConfig {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub address: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub label: Option<String>,
    pub icon: Option<String>,
}

impl MarkerConfig {
    pub fn to_marker(&self) -> Result<Marker> {
        let mut marker = match (self.lat, self.lng, &self.address) {
            (Some(lat), Some(lng), None) => Marker::at(lat, lng)?,
            (None, None, Some(address)) => Marker::address(address.as_str())?,
            _ => {
                return Err(MapError::Config {
                    message: "marker needs either lat and lng, or address".to_string(),
                })
            }
        };

        if let Some(color) = &self.color {
            marker = marker.with_color(color)?;
        }
        if let Some(size) = &self.size {
            marker = marker.with_size(size)?;
        }
        if let Some(label) = &self.label {
            marker = marker.with_label(label)?;
        }
        if let Some(icon) = &self.icon {
            marker = marker.with_icon(icon)?;
        }
        Ok(marker)
    }
}

impl MapConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MapError::Config {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// The `[map]` table in document order.
    pub fn options(&self) -> Result<MapOptions> {
        let mut options = MapOptions::new();
        for (name, value) in &self.map {
            let value = match value {
                toml::Value::String(text) => OptionValue::Text(text.clone()),
                toml::Value::Integer(number) => OptionValue::Integer(*number),
                toml::Value::Float(number) => OptionValue::Float(*number),
                toml::Value::Boolean(flag) => OptionValue::Bool(*flag),
                other => {
                    return Err(MapError::Config {
                        message: format!(
                            "option '{}' must be a string, number or boolean, got {}",
                            name,
                            other.type_str()
                        ),
                    })
                }
            };
            options.insert(name.as_str(), value);
        }
        Ok(options)
    }

    pub fn markers(&self) -> Result<Vec<Marker>> {
        self.markers.iter().map(MarkerConfig::to_marker).collect()
    }

    pub fn into_builder(self) -> Result<MapBuilder<Marker>> {
        let mut builder = MapBuilder::new(self.options()?)?;
        builder.extend(self.markers()?);
        Ok(builder)
    }
}

impl Validate for MapConfig {
    fn validate(&self) -> Result<()> {
        self.options()?.validate()?;
        self.markers()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MapMarker;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_map_config() {
        let toml_content = r#"
[map]
sensor = false
key = "K"
size = "200x200"

[[markers]]
lat = 48.85
lng = 2.35
color = "red"

[[markers]]
address = "Berlin"
"#;

        let config = MapConfig::from_toml_str(toml_content).unwrap();
        let names: Vec<String> = config.options().unwrap().names().map(str::to_string).collect();
        assert_eq!(names, vec!["sensor", "key", "size"]);

        let markers = config.markers().unwrap();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].options_to_url_params(), "color:red");
        assert_eq!(markers[1].location_to_url(), "Berlin");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STATIC_MAP_TEST_KEY", "secret-key");

        let toml_content = r#"
[map]
key = "${STATIC_MAP_TEST_KEY}"
size = "1x1"
sensor = true
"#;

        let config = MapConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.options().unwrap().get("key"),
            Some(&OptionValue::from("secret-key"))
        );

        std::env::remove_var("STATIC_MAP_TEST_KEY");
    }

    #[test]
    fn test_marker_needs_exactly_one_location_form() {
        let both = MarkerConfig {
            lat: Some(1.0),
            lng: Some(2.0),
            address: Some("Paris".to_string()),
            ..Default::default()
        };
        assert!(matches!(both.to_marker(), Err(MapError::Config { .. })));

        let neither = MarkerConfig::default();
        assert!(neither.to_marker().is_err());

        let half = MarkerConfig {
            lat: Some(1.0),
            ..Default::default()
        };
        assert!(half.to_marker().is_err());
    }

    #[test]
    fn test_non_scalar_option_rejected() {
        let toml_content = r#"
[map]
key = "K"
size = ["1", "1"]
sensor = false
"#;
        let config = MapConfig::from_toml_str(toml_content).unwrap();
        assert!(config.options().is_err());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_reports_unknown_option() {
        let toml_content = r#"
[map]
key = "K"
size = "1x1"
sensor = false
colour = "red"
"#;
        let config = MapConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(MapError::OptionNotExist { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[map]
key = "K"
size = "100x100"
sensor = false
center = "Oslo"
zoom = 5
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = MapConfig::from_file(temp_file.path()).unwrap();
        let url = config.into_builder().unwrap().build_url().unwrap();
        assert!(url.ends_with("center=Oslo&zoom=5"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = MapConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, MapError::Io(_)));
    }
}
