use super::models::{Location, SourceConfig};

/// Projects the configured location ids, in their configured order, to
/// location entries named from `location_names` (falling back to the id).
pub fn derive_locations(config: &SourceConfig) -> Vec<Location> {
    config
        .locations
        .iter()
        .map(|id| Location {
            id: id.clone(),
            name: config
                .location_names
                .get(id)
                .cloned()
                .unwrap_or_else(|| id.clone()),
            clients: Vec::new(),
        })
        .collect()
}
