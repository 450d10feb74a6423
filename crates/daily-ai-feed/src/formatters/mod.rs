//! Output formatters for the feed page, the JSON listing and the debug report.

pub mod html;
pub mod styles;
pub mod text;

/// Readable names for arXiv category codes.
const CATEGORY_NAMES: &[(&str, &str)] = &[
    ("cs.AI", "Artificial Intelligence"),
    ("cs.LG", "Machine Learning"),
    ("cs.CV", "Computer Vision"),
    ("cs.CL", "Natural Language Processing"),
    ("cs.NE", "Neural Networks"),
    ("stat.ML", "Statistical ML"),
    ("cs.RO", "Robotics"),
    ("cs.IR", "Information Retrieval"),
    ("cs.HC", "Human-Computer Interaction"),
    ("cs.CR", "Cryptography"),
    ("cs.DC", "Distributed Computing"),
    ("cs.DS", "Data Structures"),
    ("cs.GT", "Game Theory"),
    ("cs.IT", "Information Theory"),
    ("cs.MA", "Multiagent Systems"),
    ("cs.MM", "Multimedia"),
    ("cs.NI", "Networking"),
    ("cs.PL", "Programming Languages"),
    ("cs.SE", "Software Engineering"),
    ("cs.SY", "Systems and Control"),
];

/// Display name for a category code, the code itself when unknown.
#[must_use]
pub fn category_display_name(code: &str) -> &str {
    CATEGORY_NAMES.iter().find(|(c, _)| *c == code).map_or(code, |&(_, name)| name)
}

/// Badge colour class for a category code.
#[must_use]
pub fn category_css_class(code: &str) -> &'static str {
    match code {
        "cs.AI" => "category-ai",
        "cs.LG" => "category-ml",
        "cs.CV" => "category-cv",
        "cs.CL" => "category-cl",
        "cs.NE" => "category-ne",
        "stat.ML" => "category-stat",
        _ => "category-default",
    }
}

/// Escape HTML special characters.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
