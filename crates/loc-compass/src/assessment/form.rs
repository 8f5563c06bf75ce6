use std::fmt::Write as _;

use super::schema::{competency_label, Dimension};
use super::scoring::RatingSheet;
use super::shell::escape_text;
use super::strings::StringBundle;

/// Legend labels used when the bundle has no `ui.scaleLabels` table.
pub const FALLBACK_SCALE_LABELS: [&str; 5] = [
    "Novice (No experience or basic awareness)",
    "Beginner (Limited experience, require guidance)",
    "Intermediate (Working knowledge, some independence)",
    "Advanced (Comprehensive knowledge, work independently)",
    "Expert (Deep expertise, can teach others)",
];

/// Build the evaluation section: title, description, rating-scale legend,
/// one radio-group per competency grouped by dimension, and the calculate
/// control.
///
/// Everything is re-derived from the schema, the bundle, and the current
/// sheet on each call, so repeated invocations simply re-render from
/// scratch. Radios are marked checked from the sheet so a re-render keeps
/// the user's selections.
pub fn build_evaluation_section(bundle: &StringBundle, sheet: &RatingSheet) -> String {
    let mut html = String::new();

    let title = bundle.string_or_default("ui.evalTitle", "Self-Evaluation");
    let _ = write!(html, "<h2 id=\"eval-title\">{}</h2>", escape_text(&title));

    let description = bundle.string_or_default(
        "ui.evalDesc",
        "Rate your competency level in each area on a scale of 1-5, where:",
    );
    let _ = write!(html, "<p id=\"eval-desc\">{}</p>", escape_text(&description));

    html.push_str("<ul class=\"rating-scale\">");
    for value in 1..=5u8 {
        let label = bundle
            .scale_label(value)
            .unwrap_or(FALLBACK_SCALE_LABELS[usize::from(value) - 1]);
        let _ = write!(
            html,
            "<li id=\"scale-{value}\"><strong>{value}</strong> - {}</li>",
            escape_text(label)
        );
    }
    html.push_str("</ul>");

    html.push_str("<form id=\"evaluation-form\">");
    for dimension in Dimension::ordered() {
        html.push_str("<div class=\"eval-section\">");
        let _ = write!(
            html,
            "<h3 id=\"{}-title\">{}</h3>",
            dimension.key(),
            escape_text(&dimension.name(bundle))
        );

        for competency in dimension.competencies() {
            html.push_str("<div class=\"competency\">");
            let _ = write!(
                html,
                "<label id=\"label-{competency}\">{}</label>",
                escape_text(&competency_label(bundle, competency))
            );

            html.push_str("<div class=\"rating\">");
            for value in 1..=5u8 {
                let checked = if sheet.rating(competency) == Some(value) {
                    " checked"
                } else {
                    ""
                };
                let _ = write!(
                    html,
                    "<input type=\"radio\" name=\"{competency}\" \
                     id=\"{competency}-{value}\" value=\"{value}\"{checked}>\
                     <label for=\"{competency}-{value}\">{value}</label>"
                );
            }
            html.push_str("</div></div>");
        }
        html.push_str("</div>");
    }

    let calculate = bundle.string_or_default("ui.calculateBtn", "Calculate Results");
    let _ = write!(
        html,
        "<div class=\"submit-area\">\
         <button type=\"button\" id=\"calculate-btn\">{}</button>\
         </div>",
        escape_text(&calculate)
    );
    html.push_str("</form>");

    html
}
