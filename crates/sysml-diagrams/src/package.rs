//! Package structure diagram.

use std::collections::{HashMap, HashSet};

use sysml_model::{Category, Element, Model};

use crate::puml::{Puml, quoted};

/// Nested package tree built from `ownerRef`. Packages whose owner is not
/// a rendered package do not appear.
pub fn render_package_structure(model: &Model) -> String {
    let packages = model.elements(Category::Package);
    let mut children: HashMap<&str, Vec<&Element>> = HashMap::new();
    for package in packages {
        if let Some(owner) = owner_of(package) {
            children.entry(owner).or_default().push(package);
        }
    }

    let mut doc = Puml::start("Package Structure");
    doc.blank();

    let mut visited = HashSet::new();
    for root in packages.iter().filter(|package| owner_of(package).is_none()) {
        render_package(&mut doc, &children, &mut visited, root, 0);
    }

    doc.finish()
}

fn owner_of(package: &Element) -> Option<&str> {
    package.owner_ref.as_deref().filter(|owner| !owner.is_empty())
}

fn render_package<'a>(
    doc: &mut Puml,
    children: &HashMap<&str, Vec<&'a Element>>,
    visited: &mut HashSet<&'a str>,
    package: &'a Element,
    depth: usize,
) {
    // Duplicate identifiers can make the owner graph cyclic.
    if !visited.insert(package.id.as_str()) {
        return;
    }

    let indent = "  ".repeat(depth);
    let header = format!(
        "{indent}package \"{}\" as {}",
        quoted(package.label()),
        package.id
    );
    match children.get(package.id.as_str()) {
        Some(nested) => {
            doc.line(format!("{header} {{"));
            for child in nested {
                render_package(doc, children, visited, child, depth + 1);
            }
            doc.line(format!("{indent}}}"));
        }
        None => doc.line(header),
    }
}
