use crate::core::grouping::{group_by_signature, MarkerGroup};
use crate::core::marker_set::MarkerSet;
use crate::domain::marker::Marker;
use crate::domain::model::{MapOptions, OptionValue};
use crate::domain::ports::MapMarker;
use crate::utils::error::{MapError, Result};
use crate::utils::escape::escape;
use crate::utils::validation::{validate_option_names, Validate};

pub const API_URL: &str = "http://maps.google.com/staticmap";

/// Holds validated map options plus a set of markers and renders them as a
/// static map URL.
///
/// A builder is never reset: make a new one for a new map. `add` takes
/// `&mut self`, so sharing one builder across threads needs external locking.
#[derive(Debug, Clone)]
pub struct MapBuilder<M: MapMarker = Marker> {
    options: MapOptions,
    markers: MarkerSet<M>,
}

impl<M: MapMarker> MapBuilder<M> {
    pub fn new(options: MapOptions) -> Result<Self> {
        options.validate()?;
        tracing::debug!("Created map builder with {} options", options.len());
        Ok(Self {
            options,
            markers: MarkerSet::new(),
        })
    }

    /// Adds a marker unless an identical one is already on the map.
    pub fn add(&mut self, marker: M) -> bool {
        let added = self.markers.add(marker);
        if !added {
            tracing::debug!("Skipped duplicate marker");
        }
        added
    }

    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    pub fn markers(&self) -> &MarkerSet<M> {
        &self.markers
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn grouped_markers(&self) -> Vec<MarkerGroup<'_, M>> {
        group_by_signature(&self.markers)
    }

    pub fn can_build(&self) -> bool {
        !self.markers.is_empty() || (self.options.contains("center") && self.options.contains("zoom"))
    }

    pub fn build_url(&self) -> Result<String> {
        if !self.can_build() {
            return Err(MapError::BuildDataMissing);
        }

        let mut out = format!("{}?", API_URL);

        let params: Vec<String> = self
            .options
            .iter()
            .map(|(name, value)| format!("{}={}", name, escape(&value.to_string())))
            .collect();
        out.push_str(&params.join("&"));

        let marker_params: Vec<String> = self
            .grouped_markers()
            .iter()
            .map(|group| {
                let locations: Vec<String> =
                    group.markers.iter().map(|m| m.location_to_url()).collect();
                format!("markers={}|{}", group.signature, locations.join("|"))
            })
            .collect();
        if !marker_params.is_empty() {
            out.push('&');
            out.push_str(&marker_params.join("&"));
        }

        tracing::debug!(
            "Built url with {} options and {} marker groups",
            self.options.len(),
            marker_params.len()
        );
        Ok(out)
    }
}

impl<M: MapMarker> Extend<M> for MapBuilder<M> {
    fn extend<I: IntoIterator<Item = M>>(&mut self, iter: I) {
        for marker in iter {
            self.add(marker);
        }
    }
}

impl<'a, M: MapMarker> IntoIterator for &'a MapBuilder<M> {
    type Item = &'a M;
    type IntoIter = std::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}

impl Validate for MapOptions {
    fn validate(&self) -> Result<()> {
        validate_option_names(self.names())
    }
}
