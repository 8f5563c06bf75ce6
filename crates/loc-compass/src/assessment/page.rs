use std::collections::BTreeMap;

use super::career::CareerPathCatalog;
use super::chart::{ChartRenderer, ChartSpec, RadarChart, CHART_UNAVAILABLE_NOTICE};
use super::form;
use super::recommend;
use super::results::{self, NextStepItem, ResultsContent, CHART_CANVAS_ID};
use super::schema::Dimension;
use super::scoring::{
    score_sheet, sorted_by_average, strengths, validate_complete, weaknesses, DimensionScore,
    IncompleteSubmission, RatingError, RatingSheet,
};
use super::shell::{PageShell, EVALUATION_SECTION, RESULTS_SECTION};
use super::strings::StringBundle;

/// Which section the page currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView {
    Evaluating,
    Reviewing,
}

/// Everything a completed calculation produced, for callers that report the
/// outcome outside the rendered page (CLI demo, tests).
#[derive(Debug, Clone)]
pub struct ScoreReport {
    pub scores: Vec<DimensionScore>,
    pub strengths: Vec<DimensionScore>,
    pub weaknesses: Vec<DimensionScore>,
    pub career_paths: Vec<String>,
    pub next_steps: Vec<NextStepItem>,
}

/// One assessment page session: the form, the results view, the user's
/// ratings, and the interactive lifecycle between them.
///
/// `Evaluating` (form visible) moves to `Reviewing` (results visible) on a
/// valid calculation and back on reset. The rendered chart instance is a
/// single-owner slot: it is dropped before every redraw and on reset, never
/// handed out.
#[derive(Debug)]
pub struct AssessmentPage {
    bundle: StringBundle,
    catalog: CareerPathCatalog,
    chart_renderer: Box<dyn ChartRenderer + Send>,
    sheet: RatingSheet,
    view: PageView,
    chart: Option<RadarChart>,
    shell: PageShell,
}

impl AssessmentPage {
    pub fn new(
        bundle: StringBundle,
        catalog: CareerPathCatalog,
        chart_renderer: Box<dyn ChartRenderer + Send>,
    ) -> Self {
        let sheet = RatingSheet::new();
        let mut shell = PageShell::standard();
        shell.replace_content(
            EVALUATION_SECTION,
            form::build_evaluation_section(&bundle, &sheet),
        );
        shell.replace_content(RESULTS_SECTION, results::build_results_section(&bundle));
        shell.set_hidden(EVALUATION_SECTION, false);
        shell.set_hidden(RESULTS_SECTION, true);

        Self {
            bundle,
            catalog,
            chart_renderer,
            sheet,
            view: PageView::Evaluating,
            chart: None,
            shell,
        }
    }

    pub fn view(&self) -> PageView {
        self.view
    }

    pub fn bundle(&self) -> &StringBundle {
        &self.bundle
    }

    pub fn ratings(&self) -> &RatingSheet {
        &self.sheet
    }

    pub fn chart(&self) -> Option<&RadarChart> {
        self.chart.as_ref()
    }

    /// Record one rating and re-render the form so the selection shows.
    pub fn rate(&mut self, competency: &str, value: u8) -> Result<(), RatingError> {
        self.sheet.rate(competency, value)?;
        self.rebuild_form();
        Ok(())
    }

    /// Validate and apply a batch of ratings. Nothing is committed unless
    /// every entry is acceptable.
    pub fn apply_ratings(&mut self, ratings: &BTreeMap<String, u8>) -> Result<(), RatingError> {
        let mut staged = self.sheet.clone();
        for (competency, value) in ratings {
            staged.rate(competency, *value)?;
        }
        self.sheet = staged;
        self.rebuild_form();
        Ok(())
    }

    /// The user-facing message for an incomplete submission.
    pub fn incomplete_alert(&self) -> String {
        self.bundle.string_or_default(
            "alerts.incomplete",
            "Please complete all ratings before calculating your results.",
        )
    }

    /// Handle the calculate action.
    ///
    /// On an incomplete sheet nothing is computed, nothing is rendered, and
    /// the form stays visible. On success the results section is filled, the
    /// chart slot is replaced, and the page flips to `Reviewing`.
    pub fn calculate(&mut self) -> Result<ScoreReport, IncompleteSubmission> {
        validate_complete(&self.sheet)?;

        let scores = score_sheet(&self.sheet, &self.bundle);
        let sorted = sorted_by_average(&scores);
        let strengths = strengths(&sorted);
        let weaknesses = weaknesses(&sorted);

        let career_paths: Vec<String> = self
            .catalog
            .matching(&scores)
            .into_iter()
            .map(|path| path.display_name(&self.bundle))
            .collect();

        let next_steps = if weaknesses.is_empty() {
            vec![NextStepItem {
                emphasis: None,
                text: recommend::high_performer_message(&self.bundle),
            }]
        } else {
            weaknesses
                .iter()
                .map(|score| NextStepItem {
                    emphasis: Some(score.name.clone()),
                    text: recommend::development_recommendation(&self.bundle, score.dimension),
                })
                .collect()
        };

        let (chart_markup, chart_notice) = self.redraw_chart(&scores);

        let content = ResultsContent {
            dimension_scores: scores
                .iter()
                .map(|score| (score.name.clone(), score.display_average()))
                .collect(),
            strengths: self.strength_lines(&strengths),
            weaknesses: self.weakness_lines(&weaknesses),
            career_paths: self.career_path_lines(&career_paths),
            next_steps: next_steps.clone(),
            chart_markup,
            chart_notice,
        };

        self.shell.replace_content(
            RESULTS_SECTION,
            results::build_results_section_with(&self.bundle, &content),
        );
        self.shell.set_hidden(EVALUATION_SECTION, true);
        self.shell.set_hidden(RESULTS_SECTION, false);
        self.view = PageView::Reviewing;

        Ok(ScoreReport {
            scores,
            strengths,
            weaknesses,
            career_paths,
            next_steps,
        })
    }

    /// Handle the reset action: clear ratings, drop the chart, show the
    /// form again.
    pub fn reset(&mut self) {
        self.sheet.clear();
        self.chart = None;
        self.rebuild_form();
        self.shell
            .replace_content(RESULTS_SECTION, results::build_results_section(&self.bundle));
        self.shell.set_hidden(EVALUATION_SECTION, false);
        self.shell.set_hidden(RESULTS_SECTION, true);
        self.view = PageView::Evaluating;
    }

    /// Render the complete page document for the current state.
    pub fn render(&self) -> String {
        let title = self.bundle.string_or_default(
            "ui.pageTitle",
            "Localization Competency Self-Assessment",
        );
        self.shell.render(&title)
    }

    /// Current markup of one container, for assertions against the id
    /// contract.
    pub fn section_content(&self, id: &str) -> Option<&str> {
        self.shell.content(id)
    }

    pub fn section_hidden(&self, id: &str) -> Option<bool> {
        self.shell.is_hidden(id)
    }

    fn rebuild_form(&mut self) {
        self.shell.replace_content(
            EVALUATION_SECTION,
            form::build_evaluation_section(&self.bundle, &self.sheet),
        );
    }

    /// Drop any prior chart instance, then draw against the fixed 0-5 scale
    /// with averages rounded to one decimal. A failing capability becomes an
    /// inline notice, never an error.
    fn redraw_chart(&mut self, scores: &[DimensionScore]) -> (Option<String>, Option<String>) {
        self.chart = None;

        let spec = ChartSpec {
            target_id: CHART_CANVAS_ID.to_string(),
            dataset_label: self
                .bundle
                .string_or_default("chart.score", "Competency Score"),
            labels: scores.iter().map(|score| score.name.clone()).collect(),
            values: scores
                .iter()
                .map(|score| (score.average * 10.0).round() / 10.0)
                .collect(),
        };

        match self.chart_renderer.draw(&spec) {
            Ok(instance) => {
                let markup = instance.markup.clone();
                self.chart = Some(instance);
                (Some(markup), None)
            }
            Err(error) => {
                tracing::error!(%error, "unable to render results chart");
                (None, Some(CHART_UNAVAILABLE_NOTICE.to_string()))
            }
        }
    }

    fn strength_lines(&self, strengths: &[DimensionScore]) -> Vec<String> {
        if strengths.is_empty() {
            vec![self.bundle.string_or_default(
                "results.emergingCompetencies",
                "You're building your foundation across all dimensions. Focus on areas that align with your career goals.",
            )]
        } else {
            strengths.iter().map(score_line).collect()
        }
    }

    fn weakness_lines(&self, weaknesses: &[DimensionScore]) -> Vec<String> {
        if weaknesses.is_empty() {
            vec![self.bundle.string_or_default(
                "results.ongoingGrowth",
                "Excellent! All dimensions score 4 or above. You have strong competencies across the board.",
            )]
        } else {
            weaknesses.iter().map(score_line).collect()
        }
    }

    fn career_path_lines(&self, matched: &[String]) -> Vec<String> {
        if matched.is_empty() {
            vec![self.bundle.string_or_default(
                "careerPathNames.none",
                "Continue developing your skills in weaker areas to match specific career paths.",
            )]
        } else {
            matched.to_vec()
        }
    }
}

fn score_line(score: &DimensionScore) -> String {
    format!("{}: {}", score.name, score.display_average())
}

/// Convenience used by hosts that want every dimension rated the same, e.g.
/// demos and smoke tests.
pub fn uniform_ratings(value: u8) -> BTreeMap<String, u8> {
    Dimension::ordered()
        .iter()
        .flat_map(|dimension| dimension.competencies().iter())
        .map(|competency| ((*competency).to_string(), value))
        .collect()
}
