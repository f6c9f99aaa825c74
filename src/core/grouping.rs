use crate::domain::ports::MapMarker;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerGroup<'a, M> {
    pub signature: String,
    pub markers: Vec<&'a M>,
}

/// Partitions markers by style signature in one stable pass.
///
/// Groups come out in order of each signature's first appearance and members
/// keep their input order. Nothing is cached; call again after mutating.
pub fn group_by_signature<'a, M, I>(markers: I) -> Vec<MarkerGroup<'a, M>>
where
    M: MapMarker + 'a,
    I: IntoIterator<Item = &'a M>,
{
    let mut groups: Vec<MarkerGroup<'a, M>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for marker in markers {
        let signature = marker.options_to_url_params();
        match index.get(&signature) {
            Some(&position) => groups[position].markers.push(marker),
            None => {
                index.insert(signature.clone(), groups.len());
                groups.push(MarkerGroup {
                    signature,
                    markers: vec![marker],
                });
            }
        }
    }

    tracing::trace!("Grouped markers into {} signature groups", groups.len());
    groups
}
