//! Fixed rule battery for systems models.
//!
//! Every validator reads the [`Model`] and a [`ModelIndex`] built from it
//! and appends [`Issue`](sysml_model::Issue) values. Model-quality findings
//! are never errors in the Rust sense; they are always issues in the report.

mod checks;
mod engine;
pub mod refs;

pub use engine::RuleEngine;

use sysml_model::{Model, ValidationOptions, ValidationReport};

/// Index the model and run every validator with the given options.
pub fn validate_model(model: &Model, options: ValidationOptions) -> ValidationReport {
    RuleEngine::new(options).run(model)
}
