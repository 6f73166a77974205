pub mod bridge;
pub mod command;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod interfaces;

pub use error::{BridgeError, ErrorKind};
