//! Requirement checks.

use sysml_model::{Category, Issue, Model, ModelIndex, RequirementKind, Rule};

use crate::refs::check_refs;

pub fn check(model: &Model, index: &ModelIndex<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();

    for requirement in model.elements(Category::Requirement) {
        let id = requirement.id.as_str();
        let name = requirement.display_name();

        if !requirement.has_text() {
            issues.push(Issue::new(
                Rule::RequirementText,
                id,
                name,
                "Requirement must have text",
            ));
        }
        if !requirement.has_name() {
            issues.push(Issue::new(
                Rule::RequirementName,
                id,
                id,
                "Requirement should have a short summary name",
            ));
        }

        let has_refine = !requirement.refine_refs.is_empty();
        if requirement.trace_refs.is_empty() && requirement.derive_refs.is_empty() && !has_refine
        {
            issues.push(Issue::new(
                Rule::RequirementTrace,
                id,
                name,
                "Requirement must have at least one trace, derive, or refine relationship",
            ));
        }
        if requirement.requirement_kind() == RequirementKind::Performance && !has_refine {
            issues.push(Issue::new(
                Rule::PerformanceRefine,
                id,
                name,
                "Performance requirements must refine at least one functional requirement",
            ));
        }

        check_refs(&mut issues, index, requirement, &requirement.trace_refs);
        check_refs(&mut issues, index, requirement, &requirement.refine_refs);
        check_refs(&mut issues, index, requirement, &requirement.derive_refs);
    }

    issues
}
