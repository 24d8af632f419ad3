pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::LocalStorage;
pub use core::{
    engine::MapEngine, fetcher::SparqlFetcher, query::QuerySpec, store::MarkerStore,
};
pub use domain::model::{GeographicRecord, MarkerSnapshot};
pub use render::leaflet::LeafletRenderer;
pub use utils::error::{MapError, Result};
