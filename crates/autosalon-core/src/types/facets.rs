//! Distinct filterable values present in the catalog.

use serde::{Deserialize, Serialize};

/// Global facet values used to populate the filter controls.
/// `types` is the body type facet, keyed to match the `type` query parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Facets {
    pub makes: Vec<String>,
    pub types: Vec<String>,
    pub transmissions: Vec<String>,
    pub years: Vec<i32>,
}
