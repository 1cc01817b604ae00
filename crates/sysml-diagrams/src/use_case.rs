//! Use case diagram.

use sysml_model::{Category, Model};

use crate::puml::{Puml, quoted};

/// Actors, the system boundary holding every use case, actor associations
/// and include/extend dependencies.
pub fn render_use_cases(model: &Model, system_name: &str) -> String {
    let actors = model.elements(Category::Actor);
    let use_cases = model.elements(Category::UseCase);

    let mut doc = Puml::start("Use Case Diagram");
    doc.line("left to right direction");
    doc.line("skinparam packageStyle rectangle");
    doc.blank();

    for actor in actors {
        doc.line(format!("actor \"{}\" as {}", quoted(actor.label()), actor.id));
    }
    doc.blank();

    doc.line(format!("rectangle \"{}\" {{", quoted(system_name)));
    for use_case in use_cases {
        doc.line(format!(
            "  usecase \"{}\" as {}",
            quoted(use_case.label()),
            use_case.id
        ));
    }
    doc.line("}");
    doc.blank();

    for actor in actors {
        for use_case in &actor.use_case_refs {
            doc.line(format!("{} --> {use_case}", actor.id));
        }
    }
    for use_case in use_cases {
        for included in &use_case.include_refs {
            doc.line(format!("{} ..> {included} : <<include>>", use_case.id));
        }
    }
    for use_case in use_cases {
        for extended in &use_case.extend_refs {
            doc.line(format!("{} ..> {extended} : <<extend>>", use_case.id));
        }
    }

    doc.finish()
}
