//! Rule engine driving the category validators.

use std::time::Instant;

use tracing::{debug, info, info_span};

use sysml_model::{Model, ModelIndex, ValidationOptions, ValidationReport};

use crate::checks;

/// Runs the fixed validator battery over a loaded model.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine {
    options: ValidationOptions,
}

impl RuleEngine {
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    /// Build the index and validate the model.
    pub fn run(&self, model: &Model) -> ValidationReport {
        let index = ModelIndex::build(model);
        debug!(indexed = index.len(), "model indexed");
        self.run_with_index(model, &index)
    }

    /// Validate against an index the caller already built for `model`.
    pub fn run_with_index(&self, model: &Model, index: &ModelIndex<'_>) -> ValidationReport {
        let span = info_span!("validate", uniqueness = ?self.options.uniqueness);
        let _guard = span.enter();
        let start = Instant::now();

        let report = checks::run_all(model, index, &self.options);

        info!(
            issue_count = report.len(),
            error_count = report.error_count(),
            info_count = report.info_count(),
            duration_ms = start.elapsed().as_millis(),
            "validation complete"
        );
        report
    }
}
