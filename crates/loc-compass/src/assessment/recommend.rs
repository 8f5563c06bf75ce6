use super::schema::Dimension;
use super::strings::StringBundle;

/// Built-in development recommendation per dimension, used when the bundle
/// carries no `recommendations` entry.
pub const fn default_recommendation(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Language => "Improve your proficiency in additional languages.",
        Dimension::Research => "Develop analytical skills through research projects.",
        Dimension::Market => "Follow industry publications and learn about standards.",
        Dimension::Subject => "Focus on a specific industry and develop expertise.",
        Dimension::Gilt => "Gain experience in practical translation and localization projects.",
        Dimension::Technology => "Familiarize yourself with CAT tools and machine translation.",
        Dimension::Management => "Take formal project management courses or certification.",
    }
}

pub fn development_recommendation(bundle: &StringBundle, dimension: Dimension) -> String {
    bundle.string_or_default(
        &format!("recommendations.{}", dimension.key()),
        default_recommendation(dimension),
    )
}

/// Next-steps message when every dimension scored as a strength.
pub fn high_performer_message(bundle: &StringBundle) -> String {
    bundle.string_or_default(
        "recommendations.highPerformer",
        "Excellent work! Continue to maintain and grow your expertise across all dimensions.",
    )
}
