pub mod engine;
pub mod fetcher;
pub mod parser;
pub mod query;
pub mod store;

pub use crate::domain::model::{GeographicRecord, MarkerSnapshot};
pub use crate::domain::ports::{ConfigProvider, MapRenderer, Storage};
pub use crate::utils::error::Result;
