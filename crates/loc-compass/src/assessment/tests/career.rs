use std::collections::BTreeMap;

use serde_json::json;

use super::common::*;
use crate::assessment::career::{CareerPath, CareerPathCatalog};
use crate::assessment::schema::Dimension;
use crate::assessment::scoring::score_sheet;

fn gilt_path() -> CareerPath {
    CareerPath {
        id: "translator".to_string(),
        requirements: BTreeMap::from([("gilt".to_string(), 4.0)]),
    }
}

#[test]
fn path_matches_on_dimension_average_alone() {
    let mut sheet = full_sheet(1);
    for competency in Dimension::Gilt.competencies() {
        sheet.rate(competency, 4).expect("valid");
    }
    let scores = score_sheet(&sheet, &empty_bundle());

    assert!(gilt_path().matches(&scores));
}

#[test]
fn path_fails_when_required_average_is_below_minimum() {
    let mut sheet = full_sheet(5);
    for competency in Dimension::Gilt.competencies() {
        sheet.rate(competency, 3).expect("valid");
    }
    let scores = score_sheet(&sheet, &empty_bundle());

    assert!(!gilt_path().matches(&scores));
}

#[test]
fn requirement_keyed_by_competency_resolves_to_owning_dimension() {
    // "communication" belongs to the language dimension.
    let path = CareerPath {
        id: "localization-project-manager".to_string(),
        requirements: BTreeMap::from([("communication".to_string(), 3.5)]),
    };

    let mut sheet = full_sheet(4);
    let scores = score_sheet(&sheet, &empty_bundle());
    assert!(path.matches(&scores));

    for competency in Dimension::Language.competencies() {
        sheet.rate(competency, 2).expect("valid");
    }
    let scores = score_sheet(&sheet, &empty_bundle());
    assert!(!path.matches(&scores));
}

#[test]
fn career_path_with_unknown_requirement_key_stays_eligible() {
    // Pins the known leniency: a requirement key that resolves to no
    // dimension is skipped rather than failing the path.
    let path = CareerPath {
        id: "interstellar-localizer".to_string(),
        requirements: BTreeMap::from([
            ("warp-navigation".to_string(), 5.0),
            ("gilt".to_string(), 4.0),
        ]),
    };

    let mut sheet = full_sheet(1);
    for competency in Dimension::Gilt.competencies() {
        sheet.rate(competency, 5).expect("valid");
    }
    let scores = score_sheet(&sheet, &empty_bundle());

    assert!(path.matches(&scores));
}

#[test]
fn matching_keeps_catalog_order() {
    let catalog = catalog();
    let scores = score_sheet(&full_sheet(5), &empty_bundle());
    let matched = catalog.matching(&scores);
    assert_eq!(matched.len(), 2);
    assert_eq!(matched[0].id, "translator");
}

#[test]
fn display_name_prefers_bundle_and_falls_back_to_id() {
    let path = gilt_path();
    assert_eq!(path.display_name(&localized_bundle()), "Translator");
    assert_eq!(path.display_name(&empty_bundle()), "translator");
}

#[test]
fn catalog_loads_host_wrapper_document() {
    let document = json!({
        "careerPathRequirements": {
            "translator": { "gilt": 4, "language": 4 },
            "localization-engineer": { "technology": 4.0, "gilt": 3.5 }
        }
    });
    let catalog = CareerPathCatalog::from_json(&document);
    assert_eq!(catalog.paths().len(), 2);
    let translator = catalog
        .paths()
        .iter()
        .find(|path| path.id == "translator")
        .expect("translator present");
    assert_eq!(translator.requirements.get("gilt"), Some(&4.0));
}

#[test]
fn catalog_loads_bare_requirements_map() {
    let document = json!({ "translator": { "gilt": 4.0 } });
    let catalog = CareerPathCatalog::from_json(&document);
    assert_eq!(catalog.paths().len(), 1);
}
