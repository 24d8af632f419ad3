pub mod cli;
pub mod toml_config;

pub const DEFAULT_ENDPOINT: &str = "https://query.wikidata.org/sparql";
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

#[cfg(feature = "cli")]
use crate::core::query::QuerySpec;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "birthmap")]
#[command(about = "Fetches notable people and their birthplaces from Wikidata and renders them on a map")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub sparql_endpoint: String,

    /// Property linking a person to the category entity.
    #[arg(long, default_value = "P140")]
    pub category_property: String,

    /// Entity whose members are plotted.
    #[arg(long, default_value = "Q9268")]
    pub category_entity: String,

    /// Label service language preference.
    #[arg(long, default_value = "[AUTO_LANGUAGE],en")]
    pub languages: String,

    /// Hard cap on the number of query results.
    #[arg(long, default_value = "1000")]
    pub result_limit: usize,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_TILE_URL)]
    pub tile_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn query_spec(&self) -> QuerySpec {
        QuerySpec {
            category_property: self.category_property.clone(),
            category_entity: self.category_entity.clone(),
            languages: self.languages.clone(),
            limit: self.result_limit,
            ..QuerySpec::default()
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn sparql_endpoint(&self) -> &str {
        &self.sparql_endpoint
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn tile_url(&self) -> &str {
        &self.tile_url
    }

    fn result_limit(&self) -> usize {
        self.result_limit
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("sparql_endpoint", &self.sparql_endpoint)?;
        validation::validate_entity_id("category_property", &self.category_property, 'P')?;
        validation::validate_entity_id("category_entity", &self.category_entity, 'Q')?;
        validation::validate_non_empty_string("languages", &self.languages)?;
        validation::validate_positive_number("result_limit", self.result_limit, 1)?;
        validation::validate_path("output_path", &self.output_path)?;
        // Tile URLs carry {z}/{x}/{y} placeholders, so a strict URL parse
        // would reject them.
        validation::validate_non_empty_string("tile_url", &self.tile_url)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn default_config() -> CliConfig {
        CliConfig {
            sparql_endpoint: DEFAULT_ENDPOINT.to_string(),
            category_property: "P140".to_string(),
            category_entity: "Q9268".to_string(),
            languages: "[AUTO_LANGUAGE],en".to_string(),
            result_limit: 1000,
            output_path: "./output".to_string(),
            tile_url: DEFAULT_TILE_URL.to_string(),
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_validates() {
        assert!(default_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_entity_id_rejected() {
        let mut config = default_config();
        config.category_entity = "9268".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_result_limit_rejected() {
        let mut config = default_config();
        config.result_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_query_spec_carries_cli_values() {
        let mut config = default_config();
        config.category_entity = "Q901".to_string();
        config.result_limit = 25;

        let spec = config.query_spec();
        assert_eq!(spec.category_entity, "Q901");
        assert_eq!(spec.limit, 25);
        assert_eq!(spec.birthplace_property, "P19");
        assert_eq!(spec.coordinate_property, "P625");
    }
}
