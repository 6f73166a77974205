use crate::constants::defaults;
use crate::helpers::now_iso;

use super::clients::derive_clients;
use super::locations::derive_locations;
use super::models::{Metadata, PointConfig, SourceConfig};

/// Builds the full pointconfig document from the source config, stamped with
/// the current time.
pub fn build_pointconfig(config: &SourceConfig) -> PointConfig {
    let clients = derive_clients(config);
    PointConfig {
        locations: derive_locations(config),
        u_type_clients: clients.u_type,
        s_type_clients: clients.s_type,
        metadata: Metadata {
            last_synced: now_iso(),
            source: defaults::SOURCE_LABEL.into(),
            version: defaults::POINTCONFIG_VERSION.into(),
        },
    }
}
