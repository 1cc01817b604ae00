//! Source content checks.

use sysml_model::{Category, Issue, Model, Rule};

pub fn check(model: &Model) -> Vec<Issue> {
    let mut issues = Vec::new();

    for source in model.elements(Category::SourceContent) {
        if !source.has_name() {
            issues.push(Issue::new(
                Rule::ArtifactName,
                &source.id,
                "",
                "Source content must be named",
            ));
        }
        if source.file_or_url.as_deref().is_none_or(str::is_empty) {
            issues.push(Issue::new(
                Rule::SourceContent,
                &source.id,
                source.display_name(),
                "Source content must have a file name or URL",
            ));
        }
    }

    issues
}
