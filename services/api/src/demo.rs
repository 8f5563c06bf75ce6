use std::collections::BTreeMap;

use chrono::Local;
use clap::Args;
use loc_compass::assessment::form::build_evaluation_section;
use loc_compass::assessment::{
    uniform_ratings, AssessmentPage, Dimension, RatingSheet, ScoreReport, StringBundle,
};
use loc_compass::error::AppError;

use crate::infra::{default_career_catalog, default_chart_renderer};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Locale for the built-in string bundle (en-US or es-MX)
    #[arg(long)]
    pub(crate) locale: Option<String>,
    /// Rate every competency with this value instead of the sample profile
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub(crate) uniform: Option<u8>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct FormArgs {
    /// Locale for the built-in string bundle (en-US or es-MX)
    #[arg(long)]
    pub(crate) locale: Option<String>,
}

/// Mixed profile: strong GILT and language skills, thin technology coverage.
fn sample_ratings() -> BTreeMap<String, u8> {
    let mut ratings = uniform_ratings(3);
    for competency in Dimension::Gilt.competencies() {
        ratings.insert((*competency).to_string(), 5);
    }
    for competency in Dimension::Language.competencies() {
        ratings.insert((*competency).to_string(), 4);
    }
    for competency in Dimension::Technology.competencies() {
        ratings.insert((*competency).to_string(), 2);
    }
    ratings
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let locale = args.locale.unwrap_or_else(|| "en-US".to_string());
    let bundle = StringBundle::builtin(&locale);
    let mut page = AssessmentPage::new(bundle, default_career_catalog(), default_chart_renderer());

    let ratings = match args.uniform {
        Some(value) => uniform_ratings(value),
        None => sample_ratings(),
    };
    if let Err(error) = page.apply_ratings(&ratings) {
        println!("demo ratings rejected: {error}");
        return Ok(());
    }

    match page.calculate() {
        Ok(report) => print_report(&page, &report),
        Err(_) => println!("{}", page.incomplete_alert()),
    }

    Ok(())
}

fn print_report(page: &AssessmentPage, report: &ScoreReport) {
    println!("Localization Competency Self-Assessment");
    println!("Report generated {}", Local::now().format("%Y-%m-%d"));
    println!();

    println!("Dimension scores:");
    for score in &report.scores {
        println!("  {:<45} {}", score.name, score.display_average());
    }

    println!();
    println!("Strengths:");
    if report.strengths.is_empty() {
        println!(
            "  {}",
            page.bundle().string_or_default(
                "results.emergingCompetencies",
                "You're building your foundation across all dimensions. Focus on areas that align with your career goals.",
            )
        );
    } else {
        for score in &report.strengths {
            println!("  {}: {}", score.name, score.display_average());
        }
    }

    println!();
    println!("Areas for development:");
    if report.weaknesses.is_empty() {
        println!(
            "  {}",
            page.bundle().string_or_default(
                "results.ongoingGrowth",
                "Excellent! All dimensions score 4 or above. You have strong competencies across the board.",
            )
        );
    } else {
        for score in &report.weaknesses {
            println!("  {}: {}", score.name, score.display_average());
        }
    }

    println!();
    println!("Suggested career paths:");
    if report.career_paths.is_empty() {
        println!(
            "  {}",
            page.bundle().string_or_default(
                "careerPathNames.none",
                "Continue developing your skills in weaker areas to match specific career paths.",
            )
        );
    } else {
        for name in &report.career_paths {
            println!("  {name}");
        }
    }

    println!();
    println!("Recommended next steps:");
    for step in &report.next_steps {
        match &step.emphasis {
            Some(emphasis) => println!("  {emphasis}: {}", step.text),
            None => println!("  {}", step.text),
        }
    }

    println!();
    match page.chart() {
        Some(chart) => println!("Radar chart rendered ({} bytes of SVG).", chart.markup.len()),
        None => println!("Radar chart unavailable."),
    }
}

pub(crate) fn print_form(args: FormArgs) -> Result<(), AppError> {
    let locale = args.locale.unwrap_or_else(|| "en-US".to_string());
    let bundle = StringBundle::builtin(&locale);
    println!("{}", build_evaluation_section(&bundle, &RatingSheet::new()));
    Ok(())
}
