//! Use case checks.
//!
//! A use case reached through another use case's `includeRefs`, or one that
//! extends another, needs neither its own actor nor its own trace.

use std::collections::HashSet;

use sysml_model::{Category, Issue, Model, ModelIndex, Rule};

use crate::refs::check_refs;

pub fn check(model: &Model, index: &ModelIndex<'_>) -> Vec<Issue> {
    let use_cases = model.elements(Category::UseCase);
    let included: HashSet<&str> = use_cases
        .iter()
        .flat_map(|use_case| use_case.include_refs.iter().map(String::as_str))
        .collect();

    let mut issues = Vec::new();

    for use_case in use_cases {
        let id = use_case.id.as_str();
        let name = use_case.display_name();
        let has_include_in = included.contains(id);
        let has_extend_out = !use_case.extend_refs.is_empty();

        if !use_case.has_name() {
            issues.push(Issue::new(Rule::UseCaseName, id, "", "Use case must be named"));
        }
        if !use_case.has_documentation() {
            issues.push(Issue::new(
                Rule::UseCaseDocumentation,
                id,
                name,
                "Use case must have documentation",
            ));
        }
        if use_case.actor_refs.is_empty() && !has_include_in && !has_extend_out {
            issues.push(Issue::new(
                Rule::UseCaseActor,
                id,
                name,
                "Use case must be associated with at least one actor \
                 (unless connected via extend/include)",
            ));
        }
        if use_case.trace_refs.is_empty() && !has_extend_out && !has_include_in {
            issues.push(Issue::new(
                Rule::UseCaseTrace,
                id,
                name,
                "Use case must have a trace, extend, refine, or incoming include relationship",
            ));
        }

        check_refs(&mut issues, index, use_case, &use_case.actor_refs);
        check_refs(&mut issues, index, use_case, &use_case.trace_refs);
        check_refs(&mut issues, index, use_case, &use_case.include_refs);
    }

    issues
}
