//! Block definition and interface block diagrams for one architecture layer.

use sysml_model::{Category, Element, FlowDirection, Model, ModelIndex, Stereotype};

use crate::puml::{Puml, quoted, stereotype_tag, title_case};

const BLOCK_COLORS: &[(&str, &str)] = &[
    ("logical", "LightBlue"),
    ("physical", "Plum"),
    ("context", "LightGreen"),
    ("external", "LightGray"),
    ("software", "LightYellow"),
];

const INTERFACE_COLORS: &[(&str, &str)] = &[("logical", "LightBlue"), ("physical", "Plum")];

/// Blocks of the given layer together with context and external blocks,
/// their features, and composition, realization and generalization edges
/// to resolvable targets.
pub fn render_block_definition(
    model: &Model,
    index: &ModelIndex<'_>,
    layer: &Stereotype,
) -> String {
    let blocks: Vec<&Element> = model
        .elements(Category::Block)
        .iter()
        .filter(|block| {
            matches!(
                block.stereotype(),
                Some(s) if s == layer || *s == Stereotype::Context || *s == Stereotype::External
            )
        })
        .collect();

    let title = format!(
        "Block Definition Diagram - {} Architecture",
        title_case(layer.as_str())
    );
    let mut doc = Puml::start(&title);
    doc.class_colors(BLOCK_COLORS);

    for block in &blocks {
        doc.line(format!(
            "class \"{}\"{} as {} {{",
            quoted(block.label()),
            stereotype_tag(block.stereotype()),
            block.id
        ));
        for value in block.value_properties() {
            doc.line(format!(
                "  {} : {}",
                feature_name(value),
                type_name(index, value)
            ));
        }
        for operation in block.operations() {
            doc.line(format!("  {}()", feature_name(operation)));
        }
        for port in block.ports() {
            let conjugated = if port.conjugated { "~" } else { "" };
            doc.line(format!(
                "  <<port>> {conjugated}{} : {}",
                feature_name(port),
                type_name(index, port)
            ));
        }
        doc.line("}");
        doc.blank();
    }

    for block in &blocks {
        for part in block.parts() {
            if let Some(type_ref) = part.type_ref().filter(|id| index.contains(id)) {
                doc.line(format!(
                    "{} *-- {type_ref} : {}",
                    block.id,
                    part.display_name()
                ));
            }
        }
    }
    for block in &blocks {
        for target in resolved(index, &block.realization_refs) {
            doc.line(format!("{} ..|> {target} : <<realize>>", block.id));
        }
    }
    for block in &blocks {
        for target in resolved(index, &block.generalization_refs) {
            doc.line(format!("{} --|> {target}", block.id));
        }
    }

    doc.finish()
}

/// Interface blocks of the given layer with their flow properties, the
/// signals of that layer (or untagged), and conveys edges to flow types.
pub fn render_interface_blocks(
    model: &Model,
    index: &ModelIndex<'_>,
    layer: &Stereotype,
) -> String {
    let interfaces: Vec<&Element> = model
        .elements(Category::InterfaceBlock)
        .iter()
        .filter(|interface| interface.stereotype() == Some(layer))
        .collect();

    let title = format!("Interface Blocks - {}", title_case(layer.as_str()));
    let mut doc = Puml::start(&title);
    doc.class_colors(INTERFACE_COLORS);

    for interface in &interfaces {
        doc.line(format!(
            "class \"{}\"{} as {} {{",
            quoted(interface.label()),
            stereotype_tag(interface.stereotype()),
            interface.id
        ));
        for flow in interface.flow_properties() {
            let direction = flow.direction.as_ref().map_or("?", FlowDirection::as_str);
            doc.line(format!(
                "  {direction} {} : {}",
                feature_name(flow),
                type_name(index, flow)
            ));
        }
        doc.line("}");
        doc.blank();
    }

    for signal in model.elements(Category::Signal) {
        if signal.stereotype().is_none_or(|s| s == layer) {
            doc.line(format!(
                "class \"{}\" <<signal>> as {}",
                quoted(signal.label()),
                signal.id
            ));
        }
    }
    doc.blank();

    for interface in &interfaces {
        for flow in interface.flow_properties() {
            if let Some(type_ref) = flow.type_ref().filter(|id| index.contains(id)) {
                doc.line(format!("{} ..> {type_ref} : <<conveys>>", interface.id));
            }
        }
    }

    doc.finish()
}

fn feature_name(feature: &Element) -> &str {
    feature
        .name
        .as_deref()
        .unwrap_or(sysml_model::UNRESOLVED_NAME)
}

fn type_name<'a>(index: &ModelIndex<'a>, feature: &Element) -> &'a str {
    index.display_name(feature.type_ref().unwrap_or_default())
}

fn resolved<'r>(index: &ModelIndex<'_>, refs: &'r [String]) -> impl Iterator<Item = &'r str> {
    refs.iter()
        .map(String::as_str)
        .filter(|id| index.contains(id))
}
