//! Line builder shared by the PlantUML renderers.

use sysml_model::Stereotype;

/// Accumulates the lines of one `@startuml` ... `@enduml` document.
#[derive(Debug)]
pub(crate) struct Puml {
    lines: Vec<String>,
}

impl Puml {
    pub(crate) fn start(title: &str) -> Self {
        Self {
            lines: vec![format!("@startuml {title}")],
        }
    }

    pub(crate) fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub(crate) fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// `skinparam class` block mapping stereotypes to background colors.
    pub(crate) fn class_colors(&mut self, colors: &[(&str, &str)]) {
        self.line("skinparam class {");
        for (stereotype, color) in colors {
            self.line(format!("  BackgroundColor<<{stereotype}>> {color}"));
        }
        self.line("}");
        self.blank();
    }

    /// Close the document. Lines are joined with `\n`, no trailing newline.
    pub(crate) fn finish(mut self) -> String {
        self.blank();
        self.line("@enduml");
        self.lines.join("\n")
    }
}

/// Text safe to place inside a double-quoted PlantUML label.
pub(crate) fn quoted(text: &str) -> String {
    text.replace('"', "'")
}

/// ` <<stereotype>>` suffix, or nothing when absent.
pub(crate) fn stereotype_tag(stereotype: Option<&Stereotype>) -> String {
    match stereotype {
        Some(stereotype) if !stereotype.as_str().is_empty() => format!(" <<{stereotype}>>"),
        _ => String::new(),
    }
}

/// `logical` → `Logical`.
pub(crate) fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
