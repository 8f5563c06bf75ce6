use std::collections::BTreeMap;

use serde::Serialize;

use super::schema::{canonical_competency, Dimension};
use super::strings::StringBundle;

/// Averages at or above this are strengths; everything below is an area for
/// development.
pub const STRENGTH_THRESHOLD: f64 = 4.0;

/// User-entered ratings, one per competency, each 1-5. Entries are absent
/// until answered and the whole sheet is cleared on reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingSheet {
    ratings: BTreeMap<&'static str, u8>,
}

impl RatingSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rating, overwriting any previous answer for the competency.
    pub fn rate(&mut self, competency: &str, value: u8) -> Result<(), RatingError> {
        let canonical = canonical_competency(competency)
            .ok_or_else(|| RatingError::UnknownCompetency(competency.to_string()))?;
        if !(1..=5).contains(&value) {
            return Err(RatingError::OutOfRange {
                competency: canonical,
                value,
            });
        }
        self.ratings.insert(canonical, value);
        Ok(())
    }

    pub fn rating(&self, competency: &str) -> Option<u8> {
        self.ratings.get(competency).copied()
    }

    pub fn clear(&mut self) {
        self.ratings.clear();
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

/// Rejected rating input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RatingError {
    #[error("unknown competency '{0}'")]
    UnknownCompetency(String),
    #[error("rating {value} for '{competency}' is outside 1-5")]
    OutOfRange { competency: &'static str, value: u8 },
}

/// Competencies without a rating, in schema order.
pub fn missing_competencies(sheet: &RatingSheet) -> Vec<&'static str> {
    Dimension::ordered()
        .iter()
        .flat_map(|dimension| dimension.competencies().iter().copied())
        .filter(|competency| sheet.rating(competency).is_none())
        .collect()
}

/// A submission is valid iff every competency in every dimension is rated.
pub fn validate_complete(sheet: &RatingSheet) -> Result<(), IncompleteSubmission> {
    let missing = missing_competencies(sheet);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(IncompleteSubmission { missing })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} competency rating(s) missing", .missing.len())]
pub struct IncompleteSubmission {
    pub missing: Vec<&'static str>,
}

/// Aggregated score for one dimension: the localized name, the average over
/// its rated competencies, and the raw per-competency ratings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub name: String,
    pub average: f64,
    pub competencies: BTreeMap<&'static str, u8>,
}

impl DimensionScore {
    /// Display form used in score lists and strength/weakness entries.
    pub fn display_average(&self) -> String {
        format!("{:.1}/5", self.average)
    }
}

/// Score every dimension in schema order. The average divides by the number
/// of rated competencies, which equals the dimension's competency count once
/// validation has passed.
pub fn score_sheet(sheet: &RatingSheet, bundle: &StringBundle) -> Vec<DimensionScore> {
    Dimension::ordered()
        .into_iter()
        .map(|dimension| {
            let mut competencies = BTreeMap::new();
            let mut total = 0u32;
            for key in dimension.competencies() {
                if let Some(value) = sheet.rating(key) {
                    competencies.insert(*key, value);
                    total += u32::from(value);
                }
            }
            let rated = competencies.len();
            let average = if rated == 0 {
                0.0
            } else {
                f64::from(total) / rated as f64
            };
            DimensionScore {
                dimension,
                name: dimension.name(bundle),
                average,
                competencies,
            }
        })
        .collect()
}

/// Scores ordered by descending average. The sort is stable, so ties keep
/// the schema iteration order.
pub fn sorted_by_average(scores: &[DimensionScore]) -> Vec<DimensionScore> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| {
        b.average
            .partial_cmp(&a.average)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted
}

pub fn strengths(sorted: &[DimensionScore]) -> Vec<DimensionScore> {
    sorted
        .iter()
        .filter(|score| score.average >= STRENGTH_THRESHOLD)
        .cloned()
        .collect()
}

pub fn weaknesses(sorted: &[DimensionScore]) -> Vec<DimensionScore> {
    sorted
        .iter()
        .filter(|score| score.average < STRENGTH_THRESHOLD)
        .cloned()
        .collect()
}
