pub mod config;
pub mod error;
pub mod setup;

pub use config::{Config, ConfigPaths};
pub use error::PireneaError;
pub use setup::{SetupCode, PREFIX_MARKER};
