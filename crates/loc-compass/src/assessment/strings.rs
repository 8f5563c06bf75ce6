use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};

/// Resolved localized string bundle.
///
/// The bundle is a nested JSON document (`dimensions.*`, `ui.*`, `alerts.*`,
/// `careerPathNames.*`, `recommendations.*`, `results.*`, `chart.*`). Lookups
/// never fail: every consumer supplies a built-in English default, so a
/// sparse or empty bundle degrades to readable text instead of erroring.
#[derive(Debug, Clone, Default)]
pub struct StringBundle {
    root: Value,
}

impl StringBundle {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Bundle with no entries; every lookup falls back.
    pub fn empty() -> Self {
        Self { root: Value::Null }
    }

    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let root = serde_json::from_str(&raw).map_err(|source| ContentError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Built-in fallback bundle for a locale tag. Spanish (`es-*`) gets the
    /// es-MX table; everything else gets en-US.
    pub fn builtin(locale: &str) -> Self {
        if locale.to_ascii_lowercase().starts_with("es") {
            Self::new(builtin_es_mx())
        } else {
            Self::new(builtin_en_us())
        }
    }

    pub(crate) fn node(&self, path: &str) -> Option<&Value> {
        let mut current = &self.root;
        for segment in path.split('.') {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// String at a dotted path, if present and a string leaf.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        self.node(path)?.as_str()
    }

    /// Typed accessor used uniformly across the components: localized string
    /// when present, the supplied default otherwise.
    pub fn string_or_default(&self, path: &str, default: &str) -> String {
        self.lookup(path).unwrap_or(default).to_string()
    }

    /// Scale-legend label for a rating value 1-5. Accepts both an object
    /// keyed `"1"`..`"5"` and an array indexed from the 1-rating.
    pub fn scale_label(&self, value: u8) -> Option<&str> {
        match self.node("ui.scaleLabels")? {
            Value::Object(map) => map.get(&value.to_string())?.as_str(),
            Value::Array(items) => items.get(usize::from(value).checked_sub(1)?)?.as_str(),
            _ => None,
        }
    }
}

/// Failure loading an external content file (string bundle or career-path
/// requirements).
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn builtin_en_us() -> Value {
    json!({
        "dimensions": {
            "language": "Language, Culture & Communication",
            "research": "Research & Critical Thinking",
            "market": "Market Awareness",
            "subject": "Subject Matter Expertise",
            "gilt": "GILT",
            "technology": "Technology",
            "management": "Management"
        },
        "ui": {
            "calculateBtn": "Calculate Results",
            "evalTitle": "Self-Evaluation",
            "evalDesc": "Rate your competency level in each area on a scale of 1-5, where:",
            "resultsTitle": "Your Localization Competency Results"
        },
        "alerts": {
            "incomplete": "Please complete all ratings before calculating your results."
        }
    })
}

fn builtin_es_mx() -> Value {
    json!({
        "dimensions": {
            "language": "Idioma, Cultura y Comunicación",
            "research": "Investigación y Pensamiento Crítico",
            "market": "Conocimiento del Mercado",
            "subject": "Conocimiento de la Materia",
            "gilt": "GILT",
            "technology": "Tecnología",
            "management": "Gestión"
        },
        "ui": {
            "calculateBtn": "Calcular Resultados",
            "evalTitle": "Autoevaluación",
            "evalDesc": "Califique su nivel de competencia en cada área en una escala de 1 a 5, donde:",
            "resultsTitle": "Sus Resultados de Competencia en Localización"
        },
        "alerts": {
            "incomplete": "Por favor, complete todas las calificaciones antes de calcular sus resultados."
        }
    })
}
