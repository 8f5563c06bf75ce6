use serde_json::json;

use crate::assessment::strings::StringBundle;

#[test]
fn lookup_walks_nested_paths() {
    let bundle = StringBundle::new(json!({
        "ui": { "evalTitle": "Self-Evaluation" }
    }));
    assert_eq!(bundle.lookup("ui.evalTitle"), Some("Self-Evaluation"));
    assert_eq!(bundle.lookup("ui.missing"), None);
    assert_eq!(bundle.lookup("missing.evalTitle"), None);
}

#[test]
fn lookup_ignores_non_string_leaves() {
    let bundle = StringBundle::new(json!({ "ui": { "count": 3 } }));
    assert_eq!(bundle.lookup("ui.count"), None);
    assert_eq!(bundle.string_or_default("ui.count", "fallback"), "fallback");
}

#[test]
fn string_or_default_returns_default_on_empty_bundle() {
    let bundle = StringBundle::empty();
    assert_eq!(
        bundle.string_or_default("alerts.incomplete", "Please complete all ratings."),
        "Please complete all ratings."
    );
}

#[test]
fn scale_labels_accept_object_and_array_shapes() {
    let keyed = StringBundle::new(json!({
        "ui": { "scaleLabels": { "1": "Novice", "5": "Expert" } }
    }));
    assert_eq!(keyed.scale_label(1), Some("Novice"));
    assert_eq!(keyed.scale_label(5), Some("Expert"));
    assert_eq!(keyed.scale_label(3), None);

    let indexed = StringBundle::new(json!({
        "ui": { "scaleLabels": ["One", "Two", "Three", "Four", "Five"] }
    }));
    assert_eq!(indexed.scale_label(1), Some("One"));
    assert_eq!(indexed.scale_label(5), Some("Five"));
}

#[test]
fn builtin_bundles_cover_both_locales() {
    let english = StringBundle::builtin("en-US");
    assert_eq!(
        english.lookup("dimensions.language"),
        Some("Language, Culture & Communication")
    );

    let spanish = StringBundle::builtin("es-MX");
    assert_eq!(
        spanish.lookup("dimensions.research"),
        Some("Investigación y Pensamiento Crítico")
    );
    assert_eq!(
        spanish.lookup("alerts.incomplete"),
        Some("Por favor, complete todas las calificaciones antes de calcular sus resultados.")
    );

    // Unknown locales degrade to English.
    let other = StringBundle::builtin("fr-FR");
    assert_eq!(other.lookup("dimensions.gilt"), Some("GILT"));
}
