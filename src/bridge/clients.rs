use std::collections::HashMap;

use super::models::{Bucket, ClientBuckets, ClientType, SourceConfig, TagCollision};

/// Partitions the client records of every location into the U-type and
/// S-type buckets, keyed by client tag.
///
/// Locations and tags are visited in file order. When a tag is already in a
/// bucket from an earlier location, the later record replaces it and the
/// collision is logged and recorded. Records of any other type are dropped.
pub fn derive_clients(config: &SourceConfig) -> ClientBuckets {
    let mut buckets = ClientBuckets::default();
    let mut origins: HashMap<(Bucket, &str), &str> = HashMap::new();

    for (location, location_clients) in &config.clients {
        let Some(location_clients) = location_clients.as_object() else {
            log::warn!("Clients of location '{location}' are not an object; skipping");
            continue;
        };
        for (tag, record) in location_clients {
            let (bucket, target) = match ClientType::of(record) {
                ClientType::U => (Bucket::UType, &mut buckets.u_type),
                ClientType::S => (Bucket::SType, &mut buckets.s_type),
                ClientType::Other => {
                    log::debug!("Dropping client '{tag}' at '{location}' of unknown type");
                    continue;
                }
            };
            if let Some(previous) = origins.insert((bucket, tag.as_str()), location.as_str()) {
                log::warn!(
                    "Client tag '{tag}' appears under both '{previous}' and '{location}'; keeping '{location}'"
                );
                buckets.collisions.push(TagCollision {
                    bucket,
                    tag: tag.clone(),
                    kept_location: location.clone(),
                    replaced_location: previous.to_string(),
                });
            }
            target.insert(tag.clone(), record.clone());
        }
    }
    buckets
}
