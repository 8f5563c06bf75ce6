use std::collections::BTreeMap;

use serde_json::json;

use crate::assessment::career::{CareerPath, CareerPathCatalog};
use crate::assessment::chart::{SvgRadarRenderer, UnavailableChartRenderer};
use crate::assessment::page::AssessmentPage;
use crate::assessment::schema::Dimension;
use crate::assessment::scoring::RatingSheet;
use crate::assessment::strings::StringBundle;

pub(super) fn empty_bundle() -> StringBundle {
    StringBundle::empty()
}

pub(super) fn localized_bundle() -> StringBundle {
    StringBundle::new(json!({
        "dimensions": {
            "gilt": "Globalization, Internationalization, Localization & Translation"
        },
        "ui": {
            "evalTitle": "Skills Check",
            "scaleLabels": {
                "1": "Just starting",
                "2": "Getting going",
                "3": "Comfortable",
                "4": "Confident",
                "5": "Leading others"
            }
        },
        "alerts": {
            "incomplete": "Finish every rating first."
        },
        "careerPathNames": {
            "translator": "Translator"
        },
        "recommendations": {
            "technology": "Spend a week inside a CAT tool."
        }
    }))
}

pub(super) fn catalog() -> CareerPathCatalog {
    CareerPathCatalog::new(vec![
        CareerPath {
            id: "translator".to_string(),
            requirements: BTreeMap::from([("gilt".to_string(), 4.0)]),
        },
        CareerPath {
            id: "localization-project-manager".to_string(),
            requirements: BTreeMap::from([
                ("management".to_string(), 4.0),
                ("communication".to_string(), 3.5),
            ]),
        },
    ])
}

pub(super) fn full_sheet(value: u8) -> RatingSheet {
    let mut sheet = RatingSheet::new();
    for dimension in Dimension::ordered() {
        for competency in dimension.competencies() {
            sheet.rate(competency, value).expect("valid rating");
        }
    }
    sheet
}

pub(super) fn page(bundle: StringBundle) -> AssessmentPage {
    AssessmentPage::new(bundle, catalog(), Box::new(SvgRadarRenderer::default()))
}

pub(super) fn page_without_chart(bundle: StringBundle) -> AssessmentPage {
    AssessmentPage::new(bundle, catalog(), Box::new(UnavailableChartRenderer))
}

pub(super) fn rate_all(page: &mut AssessmentPage, value: u8) {
    for dimension in Dimension::ordered() {
        for competency in dimension.competencies() {
            page.rate(competency, value).expect("valid rating");
        }
    }
}
