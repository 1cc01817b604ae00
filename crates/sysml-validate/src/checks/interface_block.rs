//! Interface block checks.

use sysml_model::{Category, FlowDirection, Issue, Model, ModelIndex, ResolveError, Rule};

use crate::refs;

pub fn check(model: &Model, index: &ModelIndex<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();

    for interface in model.elements(Category::InterfaceBlock) {
        if interface.flow_properties().is_empty() && interface.ports().is_empty() {
            issues.push(Issue::new(
                Rule::InterfaceBlockFlow,
                &interface.id,
                interface.display_name(),
                "Interface block must own at least one flow property or port",
            ));
        }

        for flow in interface.flow_properties() {
            if !flow.direction.as_ref().is_some_and(FlowDirection::is_outward) {
                issues.push(Issue::new(
                    Rule::FlowDirection,
                    &flow.id,
                    flow.display_name(),
                    format!(
                        "Flow property direction must be 'out' or 'inout' (found: {})",
                        flow.direction.as_ref().map_or("none", FlowDirection::as_str)
                    ),
                ));
            }

            let untyped = || {
                Issue::new(
                    Rule::FlowType,
                    &flow.id,
                    flow.display_name(),
                    "Flow property must be typed by a signal",
                )
            };
            let Some(type_ref) = flow.type_ref() else {
                issues.push(untyped());
                continue;
            };
            match index.resolve_signal(type_ref) {
                Ok(_) => {}
                Err(ResolveError::Missing { .. }) => {
                    issues.push(refs::unresolved_type(flow, type_ref));
                }
                Err(ResolveError::KindMismatch { .. }) => issues.push(untyped()),
            }
        }
    }

    issues
}
