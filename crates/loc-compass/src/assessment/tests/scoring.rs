use super::common::*;
use crate::assessment::schema::{competency_count, Dimension};
use crate::assessment::scoring::{
    missing_competencies, score_sheet, sorted_by_average, strengths, validate_complete, weaknesses,
    RatingError, RatingSheet,
};

#[test]
fn schema_exposes_seven_dimensions_with_competencies() {
    assert_eq!(Dimension::ordered().len(), 7);
    for dimension in Dimension::ordered() {
        assert!(!dimension.competencies().is_empty());
    }
    assert_eq!(competency_count(), 29);
}

#[test]
fn rejects_unknown_competency() {
    let mut sheet = RatingSheet::new();
    match sheet.rate("piloting", 3) {
        Err(RatingError::UnknownCompetency(key)) => assert_eq!(key, "piloting"),
        other => panic!("expected unknown competency, got {other:?}"),
    }
}

#[test]
fn rejects_out_of_range_rating() {
    let mut sheet = RatingSheet::new();
    assert!(matches!(
        sheet.rate("translation", 0),
        Err(RatingError::OutOfRange { value: 0, .. })
    ));
    assert!(matches!(
        sheet.rate("translation", 6),
        Err(RatingError::OutOfRange { value: 6, .. })
    ));
}

#[test]
fn rating_overwrites_previous_answer() {
    let mut sheet = RatingSheet::new();
    sheet.rate("translation", 2).expect("valid");
    sheet.rate("translation", 5).expect("valid");
    assert_eq!(sheet.rating("translation"), Some(5));
    assert_eq!(sheet.len(), 1);
}

#[test]
fn validation_lists_every_unrated_competency() {
    let sheet = RatingSheet::new();
    let missing = missing_competencies(&sheet);
    assert_eq!(missing.len(), competency_count());
    assert_eq!(missing[0], "multilingual");
}

#[test]
fn single_unrated_competency_fails_validation() {
    let mut sheet = full_sheet(3);
    let mut partial = RatingSheet::new();
    for dimension in Dimension::ordered() {
        for competency in dimension.competencies() {
            if *competency != "dtp" {
                partial
                    .rate(competency, sheet.rating(competency).expect("rated"))
                    .expect("valid");
            }
        }
    }
    sheet = partial;

    let error = validate_complete(&sheet).expect_err("dtp is unrated");
    assert_eq!(error.missing, vec!["dtp"]);
}

#[test]
fn uniform_fives_average_to_five_everywhere() {
    let sheet = full_sheet(5);
    let scores = score_sheet(&sheet, &empty_bundle());
    assert_eq!(scores.len(), 7);
    for score in &scores {
        assert_eq!(score.average, 5.0);
        assert_eq!(score.competencies.len(), score.dimension.competencies().len());
    }

    let sorted = sorted_by_average(&scores);
    assert_eq!(strengths(&sorted).len(), 7);
    assert!(weaknesses(&sorted).is_empty());
}

#[test]
fn uniform_ones_are_all_weaknesses() {
    let sheet = full_sheet(1);
    let scores = score_sheet(&sheet, &empty_bundle());
    for score in &scores {
        assert_eq!(score.average, 1.0);
    }

    let sorted = sorted_by_average(&scores);
    assert!(strengths(&sorted).is_empty());
    assert_eq!(weaknesses(&sorted).len(), 7);
}

#[test]
fn mixed_ratings_average_per_dimension() {
    let mut sheet = full_sheet(1);
    // Gilt has four competencies; rating them 5,4,4,3 averages 4.0 exactly.
    sheet.rate("translation", 5).expect("valid");
    sheet.rate("localization", 4).expect("valid");
    sheet.rate("internationalization", 4).expect("valid");
    sheet.rate("globalization", 3).expect("valid");

    let scores = score_sheet(&sheet, &empty_bundle());
    let gilt = scores
        .iter()
        .find(|score| score.dimension == Dimension::Gilt)
        .expect("gilt scored");
    assert_eq!(gilt.average, 4.0);
    assert_eq!(gilt.display_average(), "4.0/5");

    let sorted = sorted_by_average(&scores);
    assert_eq!(sorted[0].dimension, Dimension::Gilt);
    assert_eq!(strengths(&sorted).len(), 1);
    assert_eq!(weaknesses(&sorted).len(), 6);
}

#[test]
fn equal_averages_keep_schema_order() {
    let sheet = full_sheet(3);
    let scores = score_sheet(&sheet, &empty_bundle());
    let sorted = sorted_by_average(&scores);
    let order: Vec<_> = sorted.iter().map(|score| score.dimension).collect();
    assert_eq!(order, Dimension::ordered().to_vec());
}

#[test]
fn dimension_names_prefer_bundle_entries() {
    let sheet = full_sheet(3);
    let scores = score_sheet(&sheet, &localized_bundle());
    let gilt = scores
        .iter()
        .find(|score| score.dimension == Dimension::Gilt)
        .expect("gilt scored");
    assert_eq!(
        gilt.name,
        "Globalization, Internationalization, Localization & Translation"
    );
    let language = scores
        .iter()
        .find(|score| score.dimension == Dimension::Language)
        .expect("language scored");
    assert_eq!(language.name, "Language, Culture & Communication");
}
