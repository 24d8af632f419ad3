use serde::{Deserialize, Serialize};

/// Structured description of the SPARQL pattern "member of category X, has
/// birthplace Y, birthplace has coordinates". Rendering to text is a pure
/// function of this value, so query construction is testable without a
/// network in sight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Property linking a person to the category entity, e.g. "P140" (religion).
    pub category_property: String,
    /// The category entity itself, e.g. "Q9268" (Judaism).
    pub category_entity: String,
    /// Property linking a person to a birthplace, e.g. "P19".
    pub birthplace_property: String,
    /// Property holding the birthplace coordinates, e.g. "P625".
    pub coordinate_property: String,
    /// Label service language preference.
    pub languages: String,
    /// Hard cap on returned bindings.
    pub limit: usize,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            category_property: "P140".to_string(),
            category_entity: "Q9268".to_string(),
            birthplace_property: "P19".to_string(),
            coordinate_property: "P625".to_string(),
            languages: "[AUTO_LANGUAGE],en".to_string(),
            limit: 1000,
        }
    }
}

impl QuerySpec {
    /// Renders the SPARQL text. Deterministic: the same spec always yields
    /// byte-identical output.
    pub fn to_sparql(&self) -> String {
        format!(
            "SELECT ?person ?personLabel ?birthPlace ?birthPlaceLabel ?coord WHERE {{\n  \
             ?person wdt:{category_prop} wd:{category};\n          \
             wdt:{birth_prop} ?birthPlace.\n  \
             ?birthPlace wdt:{coord_prop} ?coord.\n  \
             SERVICE wikibase:label {{ bd:serviceParam wikibase:language \"{langs}\". }}\n}}\n\
             LIMIT {limit}",
            category_prop = self.category_property,
            category = self.category_entity,
            birth_prop = self.birthplace_property,
            coord_prop = self.coordinate_property,
            langs = self.languages,
            limit = self.limit,
        )
    }
}
