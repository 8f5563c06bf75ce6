use crate::assessment::schema::{canonical_competency, Dimension};
use crate::assessment::shell::{PageShell, EVALUATION_SECTION, RESULTS_SECTION};

#[test]
fn standard_shell_hosts_both_containers() {
    let shell = PageShell::standard();
    assert_eq!(shell.is_hidden(EVALUATION_SECTION), Some(true));
    assert_eq!(shell.is_hidden(RESULTS_SECTION), Some(true));
    assert_eq!(shell.content(EVALUATION_SECTION), Some(""));
}

#[test]
fn writing_into_a_missing_container_is_non_fatal() {
    let mut shell = PageShell::with_sections(&[EVALUATION_SECTION]);
    assert!(!shell.replace_content(RESULTS_SECTION, "<p>lost</p>".to_string()));
    assert!(!shell.set_hidden(RESULTS_SECTION, false));

    // The rest of the page still renders.
    assert!(shell.replace_content(EVALUATION_SECTION, "<p>kept</p>".to_string()));
    shell.set_hidden(EVALUATION_SECTION, false);
    let html = shell.render("Assessment");
    assert!(html.contains("<p>kept</p>"));
    assert!(!html.contains("lost"));
}

#[test]
fn render_toggles_the_hidden_class() {
    let mut shell = PageShell::standard();
    shell.set_hidden(EVALUATION_SECTION, false);
    let html = shell.render("Assessment");
    assert!(html.contains("<section id=\"evaluation\">"));
    assert!(html.contains("<section id=\"results\" class=\"hidden\">"));
    assert!(html.contains("<title>Assessment</title>"));
}

#[test]
fn schema_key_lookups_round_trip() {
    assert_eq!(Dimension::from_key("gilt"), Some(Dimension::Gilt));
    assert_eq!(Dimension::from_key("piloting"), None);
    assert_eq!(Dimension::owning("cat-tools"), Some(Dimension::Technology));
    assert_eq!(Dimension::owning("gilt"), None);
    assert_eq!(canonical_competency("mt"), Some("mt"));
    assert_eq!(canonical_competency("warp-navigation"), None);
}
