//! Duplicate identifier check.
//!
//! Every repeat of an identifier already seen yields one `UNIQUE_ID` issue
//! naming where the previous occurrence lives. Under the top-level scope,
//! nested parts, ports, flow properties and operations are not scanned.

use std::collections::HashMap;

use sysml_model::{Element, Issue, Model, Rule, UniquenessScope};

pub fn check(model: &Model, scope: UniquenessScope) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut seen: HashMap<&str, String> = HashMap::new();

    for (key, elements) in model.lists() {
        for element in elements {
            record(&mut issues, &mut seen, element, key.to_string());
            if scope == UniquenessScope::Full {
                for (collection, nested) in nested_lists(element) {
                    let location = format!("{}.{collection}", element.id);
                    for child in nested {
                        record(&mut issues, &mut seen, child, location.clone());
                    }
                }
            }
        }
    }

    issues
}

fn record<'a>(
    issues: &mut Vec<Issue>,
    seen: &mut HashMap<&'a str, String>,
    element: &'a Element,
    location: String,
) {
    if let Some(previous) = seen.insert(&element.id, location) {
        issues.push(Issue::new(
            Rule::UniqueId,
            &element.id,
            element.display_name(),
            format!("Duplicate ID (also in {previous})"),
        ));
    }
}

fn nested_lists(element: &Element) -> [(&'static str, &[Element]); 4] {
    [
        ("parts", element.parts()),
        ("ports", element.ports()),
        ("flowProperties", element.flow_properties()),
        ("operations", element.operations()),
    ]
}
