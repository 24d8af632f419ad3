use crate::config::{DEFAULT_ENDPOINT, DEFAULT_TILE_URL};
use crate::core::query::QuerySpec;
use crate::core::ConfigProvider;
use crate::utils::error::{MapError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub map: MapConfig,
    pub source: SourceConfig,
    pub query: QueryConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    pub category_property: Option<String>,
    pub category_entity: Option<String>,
    pub birthplace_property: Option<String>,
    pub coordinate_property: Option<String>,
    pub languages: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub output_path: String,
    pub tile_url: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MapError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| MapError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value; unset variables
    /// are left as-is so validation can point at them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn query_spec(&self) -> QuerySpec {
        let defaults = QuerySpec::default();
        QuerySpec {
            category_property: self
                .query
                .category_property
                .clone()
                .unwrap_or(defaults.category_property),
            category_entity: self
                .query
                .category_entity
                .clone()
                .unwrap_or(defaults.category_entity),
            birthplace_property: self
                .query
                .birthplace_property
                .clone()
                .unwrap_or(defaults.birthplace_property),
            coordinate_property: self
                .query
                .coordinate_property
                .clone()
                .unwrap_or(defaults.coordinate_property),
            languages: self.query.languages.clone().unwrap_or(defaults.languages),
            limit: self.query.limit.unwrap_or(defaults.limit),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn sparql_endpoint(&self) -> &str {
        self.source.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    fn output_path(&self) -> &str {
        &self.render.output_path
    }

    fn tile_url(&self) -> &str {
        self.render.tile_url.as_deref().unwrap_or(DEFAULT_TILE_URL)
    }

    fn result_limit(&self) -> usize {
        self.query.limit.unwrap_or(1000)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("map.name", &self.map.name)?;
        validation::validate_url("source.endpoint", self.sparql_endpoint())?;
        validation::validate_path("render.output_path", &self.render.output_path)?;
        validation::validate_non_empty_string("render.tile_url", self.tile_url())?;

        if let Some(prop) = &self.query.category_property {
            validation::validate_entity_id("query.category_property", prop, 'P')?;
        }
        if let Some(entity) = &self.query.category_entity {
            validation::validate_entity_id("query.category_entity", entity, 'Q')?;
        }
        if let Some(prop) = &self.query.birthplace_property {
            validation::validate_entity_id("query.birthplace_property", prop, 'P')?;
        }
        if let Some(prop) = &self.query.coordinate_property {
            validation::validate_entity_id("query.coordinate_property", prop, 'P')?;
        }
        if let Some(limit) = self.query.limit {
            validation::validate_positive_number("query.limit", limit, 1)?;
        }

        Ok(())
    }
}
