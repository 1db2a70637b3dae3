pub mod store;
pub mod valuation;

pub use crate::domain::model::{PropertyRecord, RawPropertyInput, ValuationResult};
pub use crate::domain::ports::KeyValueStore;
pub use crate::utils::error::Result;
