//! Category validators.
//!
//! Each module checks one category. Validators are independent of each
//! other and never stop on a malformed element.

mod actor;
mod block;
mod interface_block;
mod package;
mod requirement;
mod signal;
mod source;
mod uniqueness;
mod use_case;

use sysml_model::{Model, ModelIndex, ValidationOptions, ValidationReport};

/// Run every validator in the fixed order.
pub fn run_all(
    model: &Model,
    index: &ModelIndex<'_>,
    options: &ValidationOptions,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    // 1. Duplicate identifiers
    for issue in uniqueness::check(model, options.uniqueness) {
        report.add(issue);
    }

    // 2. Packages
    for issue in package::check(model) {
        report.add(issue);
    }

    // 3. Source content
    for issue in source::check(model) {
        report.add(issue);
    }

    // 4. Requirements
    for issue in requirement::check(model, index) {
        report.add(issue);
    }

    // 5. Actors
    for issue in actor::check(model, index) {
        report.add(issue);
    }

    // 6. Use cases
    for issue in use_case::check(model, index) {
        report.add(issue);
    }

    // 7. Blocks (parts, ports, context cascade)
    for issue in block::check(model, index) {
        report.add(issue);
    }

    // 8. Interface blocks
    for issue in interface_block::check(model, index) {
        report.add(issue);
    }

    // 9. Signals
    for issue in signal::check(model) {
        report.add(issue);
    }

    report
}
