use std::fmt::Write as _;

/// Container id hosting the rating form.
pub const EVALUATION_SECTION: &str = "evaluation";
/// Container id hosting the results view.
pub const RESULTS_SECTION: &str = "results";

/// Minimal page scaffolding: the fixed host containers the builders write
/// into, plus their visibility state.
///
/// Writing into a container that does not exist logs an error and leaves the
/// rest of the page intact, so a malformed shell degrades one section at a
/// time instead of failing the whole render.
#[derive(Debug, Clone)]
pub struct PageShell {
    sections: Vec<Section>,
}

#[derive(Debug, Clone)]
struct Section {
    id: String,
    content: String,
    hidden: bool,
}

impl PageShell {
    pub fn with_sections(ids: &[&str]) -> Self {
        Self {
            sections: ids
                .iter()
                .map(|id| Section {
                    id: (*id).to_string(),
                    content: String::new(),
                    hidden: true,
                })
                .collect(),
        }
    }

    /// The standard two-container shell of the assessment page.
    pub fn standard() -> Self {
        Self::with_sections(&[EVALUATION_SECTION, RESULTS_SECTION])
    }

    fn section_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|section| section.id == id)
    }

    fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Replace a container's content. Returns false (and logs) when the
    /// container is missing; the caller's construction is aborted, nothing
    /// else is.
    pub fn replace_content(&mut self, id: &str, markup: String) -> bool {
        match self.section_mut(id) {
            Some(section) => {
                section.content = markup;
                true
            }
            None => {
                tracing::error!(container = id, "cannot find page container");
                false
            }
        }
    }

    pub fn set_hidden(&mut self, id: &str, hidden: bool) -> bool {
        match self.section_mut(id) {
            Some(section) => {
                section.hidden = hidden;
                true
            }
            None => {
                tracing::error!(container = id, "cannot find page container");
                false
            }
        }
    }

    pub fn is_hidden(&self, id: &str) -> Option<bool> {
        self.section(id).map(|section| section.hidden)
    }

    pub fn content(&self, id: &str) -> Option<&str> {
        self.section(id).map(|section| section.content.as_str())
    }

    /// Emit the complete page document.
    pub fn render(&self, title: &str) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = write!(html, "<title>{}</title>\n", escape_text(title));
        html.push_str("<style>.hidden { display: none; }</style>\n");
        html.push_str("</head>\n<body>\n<main>\n");
        for section in &self.sections {
            let class = if section.hidden { " class=\"hidden\"" } else { "" };
            let _ = write!(html, "<section id=\"{}\"{}>", section.id, class);
            html.push_str(&section.content);
            html.push_str("</section>\n");
        }
        html.push_str("</main>\n</body>\n</html>\n");
        html
    }
}

/// Escape text for use in markup text nodes and attribute values.
pub(crate) fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
