use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::schema::Dimension;
use super::scoring::DimensionScore;
use super::strings::{ContentError, StringBundle};

/// A career path and the minimum dimension averages it asks for.
///
/// Requirement keys may name a dimension directly or any competency a
/// dimension owns; either way the comparison runs against that dimension's
/// average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPath {
    pub id: String,
    pub requirements: BTreeMap<String, f64>,
}

impl CareerPath {
    /// Localized display name, falling back to the identifier.
    pub fn display_name(&self, bundle: &StringBundle) -> String {
        bundle.string_or_default(&format!("careerPathNames.{}", self.id), &self.id)
    }

    /// A path matches iff every requirement resolves to a dimension whose
    /// average meets the minimum. A requirement key that resolves to no
    /// dimension is skipped, leaving the path eligible for that entry; the
    /// leniency is deliberate and pinned by a test.
    pub fn matches(&self, scores: &[DimensionScore]) -> bool {
        self.requirements.iter().all(|(key, minimum)| {
            let Some(dimension) = resolve_requirement_key(key) else {
                return true;
            };
            scores
                .iter()
                .find(|score| score.dimension == dimension)
                .map(|score| score.average >= *minimum)
                .unwrap_or(true)
        })
    }
}

fn resolve_requirement_key(key: &str) -> Option<Dimension> {
    Dimension::from_key(key).or_else(|| Dimension::owning(key))
}

/// The set of career paths the results view can suggest. Requirements are
/// structural input supplied by the host; names stay in the string bundle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CareerPathCatalog {
    paths: Vec<CareerPath>,
}

impl CareerPathCatalog {
    pub fn new(paths: Vec<CareerPath>) -> Self {
        Self { paths }
    }

    /// Load from a JSON requirements document, either the host wrapper shape
    /// `{"careerPathRequirements": {id: {key: min}}}` or the bare map.
    pub fn from_json(value: &Value) -> Self {
        let map = value
            .get("careerPathRequirements")
            .unwrap_or(value)
            .as_object()
            .cloned()
            .unwrap_or_default();

        let paths = map
            .into_iter()
            .map(|(id, requirements)| CareerPath {
                id,
                requirements: requirements
                    .as_object()
                    .map(|entries| {
                        entries
                            .iter()
                            .filter_map(|(key, minimum)| {
                                minimum.as_f64().map(|value| (key.clone(), value))
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect();

        Self { paths }
    }

    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&raw).map_err(|source| ContentError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&value))
    }

    pub fn paths(&self) -> &[CareerPath] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Paths whose requirements the scored dimensions satisfy, in catalog
    /// order.
    pub fn matching<'a>(&'a self, scores: &[DimensionScore]) -> Vec<&'a CareerPath> {
        self.paths.iter().filter(|path| path.matches(scores)).collect()
    }
}
