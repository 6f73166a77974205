mod db_stats;
mod preview;
mod sync;

pub use db_stats::db_stats;
pub use preview::preview;
pub use sync::sync;
