//! Block checks: naming, context-block shape, part and port typing.

use sysml_model::{
    Category, Element, Issue, Model, ModelIndex, ResolveError, Rule, Stereotype,
};

use crate::refs;

pub fn check(model: &Model, index: &ModelIndex<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();

    for block in model.elements(Category::Block) {
        if !block.has_name() {
            issues.push(Issue::new(Rule::BlockName, &block.id, "", "Block must be named"));
        }

        let stereotype = block.stereotype();
        let is_context = stereotype == Some(&Stereotype::Context);

        if is_context && !block.ports().is_empty() {
            issues.push(Issue::new(
                Rule::ContextPorts,
                &block.id,
                block.display_name(),
                "System context blocks may not own ports",
            ));
        }
        if is_context && block.parts().is_empty() {
            issues.push(Issue::new(
                Rule::ContextParts,
                &block.id,
                block.display_name(),
                "System context blocks must own at least one part property",
            ));
        }

        for part in block.parts() {
            check_part(&mut issues, index, stereotype, part);
        }
        for port in block.ports() {
            check_port(&mut issues, index, stereotype, port);
        }

        if is_context {
            check_context_documentation(&mut issues, index, block);
        }
    }

    issues
}

fn check_part(
    issues: &mut Vec<Issue>,
    index: &ModelIndex<'_>,
    owner: Option<&Stereotype>,
    part: &Element,
) {
    let Some(type_ref) = part.type_ref() else {
        issues.push(Issue::new(
            Rule::PartType,
            &part.id,
            part.display_name(),
            "Part property must be typed",
        ));
        return;
    };
    let Some(part_type) = refs::check_type_ref(issues, index, part, type_ref) else {
        return;
    };

    let accepts = |required: &Stereotype| {
        matches!(part_type.stereotype(), Some(s) if s == required || *s == Stereotype::External)
    };
    match owner {
        Some(Stereotype::Logical) if !accepts(&Stereotype::Logical) => {
            issues.push(Issue::new(
                Rule::LogicalArchitecture,
                &part.id,
                part.display_name(),
                format!(
                    "Part in logical block must be typed by logical block (found: {})",
                    part_type.stereotype_label()
                ),
            ));
        }
        Some(Stereotype::Physical) if !accepts(&Stereotype::Physical) => {
            issues.push(Issue::new(
                Rule::PhysicalArchitecture,
                &part.id,
                part.display_name(),
                format!(
                    "Part in physical block must be typed by physical block (found: {})",
                    part_type.stereotype_label()
                ),
            ));
        }
        _ => {}
    }
}

fn check_port(
    issues: &mut Vec<Issue>,
    index: &ModelIndex<'_>,
    owner: Option<&Stereotype>,
    port: &Element,
) {
    let Some(type_ref) = port.type_ref() else {
        issues.push(Issue::new(
            Rule::ProxyPortType,
            &port.id,
            port.display_name(),
            "Proxy port must be typed by an interface block",
        ));
        return;
    };

    // A port typed by something other than an interface block is still
    // held to its owner's stereotype.
    let port_type = match index.resolve_interface_block(type_ref) {
        Ok(interface) => interface,
        Err(ResolveError::Missing { .. }) => {
            issues.push(refs::unresolved_type(port, type_ref));
            return;
        }
        Err(ResolveError::KindMismatch { found, .. }) => {
            issues.push(Issue::new(
                Rule::ProxyPortType,
                &port.id,
                port.display_name(),
                format!("Proxy port must be typed by an interface block (found: {found})"),
            ));
            let Some(element) = index.element(type_ref) else {
                return;
            };
            element
        }
    };

    let accepts = |required: &Stereotype| {
        matches!(port_type.stereotype(), Some(s) if s == required || *s == Stereotype::External)
    };
    match owner {
        Some(Stereotype::Logical) if !accepts(&Stereotype::Logical) => {
            issues.push(Issue::new(
                Rule::LogicalPort,
                &port.id,
                port.display_name(),
                "Port on logical block must be typed by logical interface block",
            ));
        }
        Some(Stereotype::Physical) if !accepts(&Stereotype::Physical) => {
            issues.push(Issue::new(
                Rule::PhysicalPort,
                &port.id,
                port.display_name(),
                "Port on physical block must be typed by physical interface block",
            ));
        }
        _ => {}
    }
}

/// Every block typing a part of a context block must be documented. The
/// issue is attributed to the typing block.
fn check_context_documentation(issues: &mut Vec<Issue>, index: &ModelIndex<'_>, block: &Element) {
    for part in block.parts() {
        let Some(type_ref) = part.type_ref() else {
            continue;
        };
        let Ok(typed) = index.resolve_block(type_ref) else {
            continue;
        };
        if !typed.has_documentation() {
            issues.push(Issue::new(
                Rule::ContextBlockDocumentation,
                &typed.id,
                typed.display_name(),
                "Block typing a context part must have documentation",
            ));
        }
    }
}
