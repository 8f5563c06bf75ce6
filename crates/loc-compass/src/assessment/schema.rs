use serde::{Deserialize, Serialize};

use super::strings::StringBundle;

/// The seven competency dimensions of the assessment.
///
/// Defined once and shared by form construction, scoring, and career-path
/// matching so the rendered fields and the aggregation can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Language,
    Research,
    Market,
    Subject,
    Gilt,
    Technology,
    Management,
}

impl Dimension {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Language,
            Self::Research,
            Self::Market,
            Self::Subject,
            Self::Gilt,
            Self::Technology,
            Self::Management,
        ]
    }

    /// Stable key used in bundle paths, requirement maps, and element ids.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Research => "research",
            Self::Market => "market",
            Self::Subject => "subject",
            Self::Gilt => "gilt",
            Self::Technology => "technology",
            Self::Management => "management",
        }
    }

    /// English display name used when the bundle carries no localized entry.
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::Language => "Language, Culture & Communication",
            Self::Research => "Research & Critical Thinking",
            Self::Market => "Market Awareness",
            Self::Subject => "Subject Matter Expertise",
            Self::Gilt => "GILT",
            Self::Technology => "Technology",
            Self::Management => "Management",
        }
    }

    /// Ordered competency keys belonging to this dimension. Never empty.
    pub const fn competencies(self) -> &'static [&'static str] {
        match self {
            Self::Language => &["multilingual", "cultural", "communication"],
            Self::Research => &["analytical", "research-skills", "evaluation-skills"],
            Self::Market => &[
                "source-market",
                "target-market",
                "marketplace",
                "industry-knowledge",
            ],
            Self::Subject => &["specialization", "legal", "data-security"],
            Self::Gilt => &[
                "translation",
                "localization",
                "internationalization",
                "globalization",
            ],
            Self::Technology => &[
                "general-tech",
                "cat-tools",
                "mt",
                "web-dev",
                "dtp",
                "software",
                "gai",
            ],
            Self::Management => &["stakeholder", "account", "project", "quality", "operations"],
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|dimension| dimension.key() == key)
    }

    /// The dimension whose competency list contains `competency`.
    pub fn owning(competency: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|dimension| dimension.competencies().contains(&competency))
    }

    pub fn name(self, bundle: &StringBundle) -> String {
        bundle.string_or_default(&format!("dimensions.{}", self.key()), self.default_name())
    }
}

/// Canonical `'static` form of a competency key, if the schema knows it.
pub fn canonical_competency(key: &str) -> Option<&'static str> {
    Dimension::owning(key)?
        .competencies()
        .iter()
        .copied()
        .find(|candidate| *candidate == key)
}

/// Total number of competencies across all dimensions.
pub fn competency_count() -> usize {
    Dimension::ordered()
        .iter()
        .map(|dimension| dimension.competencies().len())
        .sum()
}

/// Label shown next to a competency's radio group when the bundle has no
/// `competencyLabels` entry: first letter capitalized, separators spaced,
/// trailing colon.
pub fn default_competency_label(key: &str) -> String {
    let spaced = key.replace('-', " ");
    let mut chars = spaced.chars();
    let label = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    format!("{label}:")
}

pub fn competency_label(bundle: &StringBundle, key: &str) -> String {
    match bundle.lookup(&format!("competencyLabels.{key}")) {
        Some(label) => label.to_string(),
        None => default_competency_label(key),
    }
}
