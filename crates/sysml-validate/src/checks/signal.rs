//! Signal checks.

use sysml_model::{Category, Issue, Model, Rule};

pub fn check(model: &Model) -> Vec<Issue> {
    let mut issues = Vec::new();

    for signal in model.elements(Category::Signal) {
        if !signal.has_name() {
            issues.push(Issue::new(Rule::SignalName, &signal.id, "", "Signal must be named"));
        }
        if !signal.has_documentation() {
            issues.push(Issue::new(
                Rule::SignalDocumentation,
                &signal.id,
                signal.display_name(),
                "Signal must have documentation",
            ));
        }
    }

    issues
}
