//! Package checks.

use sysml_model::{Category, Issue, Model, Rule};

pub fn check(model: &Model) -> Vec<Issue> {
    model
        .elements(Category::Package)
        .iter()
        .filter(|package| !package.has_name())
        .map(|package| Issue::new(Rule::PackageName, &package.id, "", "Package must be named"))
        .collect()
}
