//! Actor checks.

use sysml_model::{Category, Issue, Model, ModelIndex, Rule};

use crate::refs::check_refs;

pub fn check(model: &Model, index: &ModelIndex<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();

    for actor in model.elements(Category::Actor) {
        if !actor.has_name() {
            issues.push(Issue::new(Rule::ActorName, &actor.id, "", "Actor must be named"));
        }
        if !actor.has_documentation() {
            issues.push(Issue::new(
                Rule::ActorDocumentation,
                &actor.id,
                actor.display_name(),
                "Actor must have documentation",
            ));
        }
        if actor.use_case_refs.is_empty() && actor.generalization_refs.is_empty() {
            issues.push(Issue::new(
                Rule::ActorUseCase,
                &actor.id,
                actor.display_name(),
                "Actor must be associated with at least one use case or specialize another actor",
            ));
        }
        check_refs(&mut issues, index, actor, &actor.use_case_refs);
    }

    issues
}
