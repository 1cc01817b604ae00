//! Reference resolution shared by the category validators.
//!
//! Resolution here is presence only: an identifier that names any indexed
//! element passes, whatever its kind. Kind expectations are checked by the
//! validators that own them.

use sysml_model::{Element, Issue, ModelIndex, Rule, UNRESOLVED_NAME};

/// Append one `REF_INTEGRITY` issue per identifier in `refs` that does not
/// resolve, attributed to `carrier`.
pub fn check_refs(
    issues: &mut Vec<Issue>,
    index: &ModelIndex<'_>,
    carrier: &Element,
    refs: &[String],
) {
    for id in refs {
        if !index.contains(id) {
            issues.push(Issue::new(
                Rule::ReferenceIntegrity,
                &carrier.id,
                carrier.name.as_deref().unwrap_or(UNRESOLVED_NAME),
                format!("Unresolved reference: {id}"),
            ));
        }
    }
}

/// Resolve a single type reference, appending `REF_INTEGRITY` when it does
/// not resolve.
pub fn check_type_ref<'a>(
    issues: &mut Vec<Issue>,
    index: &ModelIndex<'a>,
    carrier: &Element,
    type_ref: &str,
) -> Option<&'a Element> {
    let resolved = index.element(type_ref);
    if resolved.is_none() {
        issues.push(unresolved_type(carrier, type_ref));
    }
    resolved
}

/// Issue for a type reference that names no indexed element.
pub fn unresolved_type(carrier: &Element, type_ref: &str) -> Issue {
    Issue::new(
        Rule::ReferenceIntegrity,
        &carrier.id,
        carrier.display_name(),
        format!("Unresolved typeRef: {type_ref}"),
    )
}
