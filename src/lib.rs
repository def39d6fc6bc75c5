pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::AppConfig;
pub use crate::core::{agenda, export, salon::Salon};
pub use utils::error::{Result, SalonError};
