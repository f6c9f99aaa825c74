use std::hash::Hash;

/// What a map needs from a marker.
///
/// Equality and hashing must be structural (location plus style) since the
/// map de-duplicates markers on insertion.
pub trait MapMarker: Clone + Eq + Hash {
    /// URL-safe encoding of the marker's position.
    fn location_to_url(&self) -> String;

    /// Encoding of the style attributes only, used as the grouping key.
    fn options_to_url_params(&self) -> String;
}
