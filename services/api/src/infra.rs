use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use loc_compass::assessment::{
    CareerPath, CareerPathCatalog, ChartRenderer, StringBundle, SvgRadarRenderer,
};
use loc_compass::config::ContentConfig;
use loc_compass::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Resolve the localized bundle: an explicit JSON file when configured,
/// otherwise the built-in table for the configured locale.
pub(crate) fn load_string_bundle(content: &ContentConfig) -> Result<StringBundle, AppError> {
    match &content.strings_path {
        Some(path) => Ok(StringBundle::from_path(path)?),
        None => Ok(StringBundle::builtin(&content.locale)),
    }
}

/// Resolve the career-path requirements: an explicit JSON file when
/// configured, otherwise the built-in catalog.
pub(crate) fn load_career_catalog(content: &ContentConfig) -> Result<CareerPathCatalog, AppError> {
    match &content.career_paths_path {
        Some(path) => Ok(CareerPathCatalog::from_path(path)?),
        None => Ok(default_career_catalog()),
    }
}

pub(crate) fn default_chart_renderer() -> Box<dyn ChartRenderer + Send> {
    Box::new(SvgRadarRenderer::default())
}

pub(crate) fn default_career_catalog() -> CareerPathCatalog {
    let requirements: &[(&str, &[(&str, f64)])] = &[
        ("translator", &[("gilt", 4.0), ("language", 4.0)]),
        ("localization-engineer", &[("technology", 4.0), ("gilt", 3.5)]),
        (
            "localization-project-manager",
            &[("management", 4.0), ("communication", 3.5)],
        ),
        (
            "language-quality-specialist",
            &[("language", 4.0), ("research-skills", 3.5)],
        ),
        (
            "localization-strategist",
            &[("market", 4.0), ("management", 4.0), ("research", 3.5)],
        ),
    ];

    CareerPathCatalog::new(
        requirements
            .iter()
            .map(|(id, entries)| CareerPath {
                id: (*id).to_string(),
                requirements: entries
                    .iter()
                    .map(|(key, minimum)| ((*key).to_string(), *minimum))
                    .collect::<BTreeMap<_, _>>(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use loc_compass::assessment::{score_sheet, uniform_ratings, RatingSheet};

    #[test]
    fn default_catalog_matches_strong_profiles() {
        let catalog = default_career_catalog();
        assert_eq!(catalog.paths().len(), 5);

        let mut sheet = RatingSheet::new();
        for (competency, value) in uniform_ratings(5) {
            sheet.rate(&competency, value).expect("valid rating");
        }
        let scores = score_sheet(&sheet, &StringBundle::builtin("en-US"));
        assert_eq!(catalog.matching(&scores).len(), 5);
    }
}
