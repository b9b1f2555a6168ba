pub mod config;
pub mod error;
pub mod helpers;
pub mod loader;
pub mod logging;
pub mod services;

pub use config::{LoadTarget, LoaderConfig};
pub use error::LoadError;
pub use loader::{LoadReport, Loader, read_records};
