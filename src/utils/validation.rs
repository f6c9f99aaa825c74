use crate::utils::error::{MapError, Result};
use url::Url;

pub const REQUIRED_OPTIONS: [&str; 3] = ["key", "size", "sensor"];
pub const OPTIONAL_OPTIONS: [&str; 7] = [
    "center", "zoom", "size", "format", "maptype", "mobile", "language",
];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks the supplied option names against the schema.
///
/// Missing required options win over unknown ones when both are present.
pub fn validate_option_names<'a, I>(names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    validate_required_options(names.clone())?;
    validate_known_options(names)
}

pub fn validate_required_options<'a, I>(names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let supplied: Vec<&str> = names.into_iter().collect();
    let missing: Vec<String> = REQUIRED_OPTIONS
        .iter()
        .filter(|required| !supplied.contains(*required))
        .map(|required| required.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MapError::OptionMissing { missing })
    }
}

pub fn validate_known_options<'a, I>(names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let invalid: Vec<String> = names
        .into_iter()
        .filter(|name| !REQUIRED_OPTIONS.contains(name) && !OPTIONAL_OPTIONS.contains(name))
        .map(str::to_string)
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(MapError::OptionNotExist { invalid })
    }
}

pub fn validate_icon_url(field_name: &str, url_str: &str) -> Result<()> {
    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only".to_string(),
        ));
    }
    Ok(())
}

/// NaN fails both comparisons, so it is rejected too.
pub fn validate_range(field_name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ))
    }
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(invalid(
        field_name,
        value,
        format!("Allowed values: {}", allowed.join(", ")),
    ))
}

fn invalid(field_name: &str, value: &str, reason: String) -> MapError {
    MapError::InvalidMarker {
        field: field_name.to_string(),
        value: value.to_string(),
        reason,
    }
}
