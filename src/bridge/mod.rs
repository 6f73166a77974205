mod clients;
mod credentials;
mod locations;
mod pointconfig;
mod writer;

pub mod models;

pub use clients::derive_clients;
pub use credentials::derive_credentials;
pub use locations::derive_locations;
pub use models::{ClientBuckets, Credentials, DbStats, PointConfig, SourceConfig};
pub use pointconfig::build_pointconfig;
pub use writer::write_pointconfig;
