use std::fmt::Write as _;

use super::shell::escape_text;
use super::strings::StringBundle;

/// Canvas id the chart capability draws into.
pub const CHART_CANVAS_ID: &str = "results-chart";

/// One entry of the next-steps list. Weakness recommendations carry the
/// dimension name as emphasis; the high-performer message renders plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextStepItem {
    pub emphasis: Option<String>,
    pub text: String,
}

/// Fully-resolved content for the results view. Fallback messages for empty
/// lists are applied by the scoring component before this is rendered, so
/// every list here renders verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsContent {
    pub dimension_scores: Vec<(String, String)>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub career_paths: Vec<String>,
    pub next_steps: Vec<NextStepItem>,
    pub chart_markup: Option<String>,
    pub chart_notice: Option<String>,
}

/// Build the empty results skeleton shown before any calculation.
pub fn build_results_section(bundle: &StringBundle) -> String {
    render(bundle, None)
}

/// Build the results section with computed content filled in.
pub fn build_results_section_with(bundle: &StringBundle, content: &ResultsContent) -> String {
    render(bundle, Some(content))
}

fn render(bundle: &StringBundle, content: Option<&ResultsContent>) -> String {
    let mut html = String::new();

    let title = bundle.string_or_default("ui.resultsTitle", "Your Localization Competency Results");
    let _ = write!(html, "<h2 id=\"results-title\">{}</h2>", escape_text(&title));

    let intro = bundle.string_or_default(
        "ui.resultsIntro",
        "Here's an overview of your strengths and areas for development across the seven LMCC dimensions:",
    );
    let _ = write!(html, "<p id=\"results-intro\">{}</p>", escape_text(&intro));

    html.push_str("<div class=\"results-chart\">");
    let _ = write!(html, "<canvas id=\"{CHART_CANVAS_ID}\"></canvas>");
    if let Some(content) = content {
        if let Some(chart) = &content.chart_markup {
            html.push_str(chart);
        }
        if let Some(notice) = &content.chart_notice {
            let _ = write!(
                html,
                "<div class=\"chart-error\">{}</div>",
                escape_text(notice)
            );
        }
    }
    html.push_str("</div>");

    html.push_str("<div class=\"dimension-scores\">");
    let scores_title = bundle.string_or_default("ui.dimensionScoresTitle", "Dimension Scores");
    let _ = write!(
        html,
        "<h3 id=\"dimension-scores-title\">{}</h3>",
        escape_text(&scores_title)
    );
    html.push_str("<div id=\"dimension-scores-list\">");
    if let Some(content) = content {
        for (name, value) in &content.dimension_scores {
            let _ = write!(
                html,
                "<div class=\"dimension-score-item\">\
                 <span class=\"dimension-score-name\">{}</span>\
                 <span class=\"dimension-score-value\">{}</span>\
                 </div>",
                escape_text(name),
                escape_text(value)
            );
        }
    }
    html.push_str("</div></div>");

    html.push_str("<div class=\"strengths-weaknesses\">");
    html.push_str("<div class=\"strengths\">");
    let strengths_title = bundle.string_or_default("ui.strengthsTitle", "Your Strengths");
    let _ = write!(
        html,
        "<h3 id=\"strengths-title\">{}</h3>",
        escape_text(&strengths_title)
    );
    write_list(
        &mut html,
        "strengths-list",
        content.map(|content| content.strengths.as_slice()),
    );
    html.push_str("</div>");

    html.push_str("<div class=\"weaknesses\">");
    let weaknesses_title = bundle.string_or_default("ui.weaknessesTitle", "Areas for Development");
    let _ = write!(
        html,
        "<h3 id=\"weaknesses-title\">{}</h3>",
        escape_text(&weaknesses_title)
    );
    write_list(
        &mut html,
        "weaknesses-list",
        content.map(|content| content.weaknesses.as_slice()),
    );
    html.push_str("</div></div>");

    html.push_str("<div class=\"career-paths\">");
    let paths_title = bundle.string_or_default("ui.careerPathsTitle", "Suggested Career Paths");
    let _ = write!(
        html,
        "<h3 id=\"career-paths-title\">{}</h3>",
        escape_text(&paths_title)
    );
    let paths_intro = bundle.string_or_default(
        "ui.careerPathsIntro",
        "Based on your current competencies, these career paths might be a good fit:",
    );
    let _ = write!(
        html,
        "<p id=\"career-paths-intro\">{}</p>",
        escape_text(&paths_intro)
    );
    write_list(
        &mut html,
        "career-paths-list",
        content.map(|content| content.career_paths.as_slice()),
    );
    let disclaimer = bundle.string_or_default(
        "ui.careerPathsDisclaimer",
        "Note: This list is not exhaustive. If you'd like to see additional roles added, please contact us at info@locessentials.com",
    );
    let _ = write!(
        html,
        "<p id=\"career-paths-disclaimer\" \
         style=\"font-style: italic; font-size: 0.9em; margin-top: 1rem;\">{}</p>",
        escape_text(&disclaimer)
    );
    html.push_str("</div>");

    html.push_str("<div class=\"next-steps\">");
    let steps_title = bundle.string_or_default("ui.nextStepsTitle", "Recommended Next Steps");
    let _ = write!(
        html,
        "<h3 id=\"next-steps-title\">{}</h3>",
        escape_text(&steps_title)
    );
    let steps_intro = bundle.string_or_default(
        "ui.nextStepsIntro",
        "To further develop your localization management skills:",
    );
    let _ = write!(
        html,
        "<p id=\"next-steps-intro\">{}</p>",
        escape_text(&steps_intro)
    );
    html.push_str("<ul id=\"next-steps-list\">");
    if let Some(content) = content {
        for step in &content.next_steps {
            match &step.emphasis {
                Some(emphasis) => {
                    let _ = write!(
                        html,
                        "<li><strong>{}:</strong> {}</li>",
                        escape_text(emphasis),
                        escape_text(&step.text)
                    );
                }
                None => {
                    let _ = write!(html, "<li>{}</li>", escape_text(&step.text));
                }
            }
        }
    }
    html.push_str("</ul></div>");

    let print = bundle.string_or_default("ui.printResults", "Print Results");
    let reset = bundle.string_or_default("ui.resetEvaluation", "Start Over");
    let _ = write!(
        html,
        "<div class=\"action-buttons\">\
         <button id=\"print-results\" onclick=\"window.print()\">{}</button>\
         <button id=\"reset-evaluation\">{}</button>\
         </div>",
        escape_text(&print),
        escape_text(&reset)
    );

    html
}

fn write_list(html: &mut String, id: &str, items: Option<&[String]>) {
    let _ = write!(html, "<ul id=\"{id}\">");
    if let Some(items) = items {
        for item in items {
            let _ = write!(html, "<li>{}</li>", escape_text(item));
        }
    }
    html.push_str("</ul>");
}
