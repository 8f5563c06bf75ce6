//! Self-assessment page: form construction, results skeleton, and the
//! scoring lifecycle between them.
//!
//! The schema is the single source of truth shared by every component; the
//! string bundle is consulted through one typed accessor so a missing
//! localization always degrades to built-in English text.

pub mod career;
pub mod chart;
pub mod form;
pub mod page;
pub mod recommend;
pub mod results;
pub mod router;
pub mod schema;
pub mod scoring;
pub mod shell;
pub mod strings;

#[cfg(test)]
mod tests;

pub use career::{CareerPath, CareerPathCatalog};
pub use chart::{
    ChartError, ChartRenderer, ChartSpec, RadarChart, SvgRadarRenderer, UnavailableChartRenderer,
};
pub use page::{uniform_ratings, AssessmentPage, PageView, ScoreReport};
pub use results::NextStepItem;
pub use router::{assessment_router, CalculateRequest, SharedPage};
pub use schema::Dimension;
pub use scoring::{
    score_sheet, DimensionScore, IncompleteSubmission, RatingError, RatingSheet,
    STRENGTH_THRESHOLD,
};
pub use shell::{PageShell, EVALUATION_SECTION, RESULTS_SECTION};
pub use strings::{ContentError, StringBundle};
