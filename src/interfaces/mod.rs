mod app_db;
mod source_config;

pub use app_db::{inspect_database, list_tables};
pub use source_config::read_config;
