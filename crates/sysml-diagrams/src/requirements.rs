//! Requirements diagram.

use sysml_model::{Category, Model};

use crate::puml::{Puml, quoted};

const KIND_COLORS: &[(&str, &str)] = &[
    ("functional", "LightBlue"),
    ("performance", "Wheat"),
    ("interface", "LightGreen"),
    ("constraint", "LightCoral"),
    ("business", "Lavender"),
];

/// Requirement text shown in a class body is cut to this many characters.
const TEXT_LIMIT: usize = 80;

/// One class per requirement tagged with its kind, plus derive and refine
/// edges. Trace edges are left out.
pub fn render_requirements(model: &Model) -> String {
    let requirements = model.elements(Category::Requirement);

    let mut doc = Puml::start("Requirements Diagram");
    doc.class_colors(KIND_COLORS);

    for requirement in requirements {
        doc.line(format!(
            "class \"{}\" <<{}>> as {} {{",
            quoted(requirement.label()),
            requirement.requirement_kind(),
            requirement.id
        ));
        doc.line(format!(
            "  {}",
            summary(requirement.text.as_deref().unwrap_or_default())
        ));
        doc.line("}");
        doc.blank();
    }

    for requirement in requirements {
        for target in &requirement.derive_refs {
            doc.line(format!("{} ..> {target} : <<deriveReqt>>", requirement.id));
        }
        for target in &requirement.refine_refs {
            doc.line(format!("{} ..> {target} : <<refine>>", requirement.id));
        }
    }

    doc.finish()
}

fn summary(text: &str) -> String {
    let text = text.trim();
    let mut shown = quoted(&text.chars().take(TEXT_LIMIT).collect::<String>());
    if text.chars().count() > TEXT_LIMIT {
        shown.push_str("...");
    }
    shown
}
