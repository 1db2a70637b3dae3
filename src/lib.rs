#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig, Command};

pub use self::core::store::{PropertyRecordStore, STORAGE_KEY};
pub use domain::model::{Condition, PropertyRecord, PropertyType, RawPropertyInput, ValuationResult};
pub use domain::ports::KeyValueStore;
pub use utils::error::{Result, ValuadorError};
