use crate::constants::defaults;
use crate::helpers::now_iso;

use super::models::{Credentials, SourceConfig};

pub fn derive_credentials(config: &SourceConfig) -> Credentials {
    Credentials {
        password: config
            .admin_password
            .clone()
            .unwrap_or_else(|| defaults::ADMIN_PASSWORD.into()),
        username: config
            .admin_username
            .clone()
            .unwrap_or_else(|| defaults::ADMIN_USERNAME.into()),
        synced: now_iso(),
    }
}
