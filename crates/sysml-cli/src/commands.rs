use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use sysml_diagrams::{DiagramOptions, write_diagrams};
use sysml_ingest::load_model;
use sysml_model::{CategoryPolicy, Model, ValidationOptions};
use sysml_validate::RuleEngine;

use crate::cli::{DiagramArgs, ValidateArgs};
use crate::types::{DiagramResult, ValidateResult};

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateResult> {
    let span = info_span!("validate_command", model_dir = %args.model_dir.display());
    let _guard = span.enter();
    let start = Instant::now();

    let model = load(&args.model_dir, args.policy())?;
    let options = ValidationOptions::new().with_uniqueness(args.uniqueness.into());
    let report = RuleEngine::new(options).run(&model);

    info!(
        issues = report.len(),
        errors = report.error_count(),
        duration_ms = start.elapsed().as_millis(),
        "validate finished"
    );
    Ok(ValidateResult {
        model_dir: args.model_dir.clone(),
        element_count: model.element_count(),
        category_count: model.category_count(),
        report,
    })
}

pub fn run_generate_diagrams(args: &DiagramArgs) -> Result<DiagramResult> {
    let span = info_span!(
        "generate_diagrams_command",
        model_dir = %args.model_dir.display(),
        output_dir = %args.output_dir.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let model = load(&args.model_dir, args.policy())?;
    let options = DiagramOptions::new(args.system_name.clone())
        .with_architecture(args.architecture.into());
    let files = write_diagrams(&model, &args.output_dir, &options)
        .with_context(|| format!("write diagrams to {}", args.output_dir.display()))?;

    info!(
        files = files.len(),
        duration_ms = start.elapsed().as_millis(),
        "generate-diagrams finished"
    );
    Ok(DiagramResult {
        model_dir: args.model_dir.clone(),
        output_dir: args.output_dir.clone(),
        files,
    })
}

fn load(model_dir: &Path, policy: CategoryPolicy) -> Result<Model> {
    load_model(model_dir, policy).with_context(|| format!("load model {}", model_dir.display()))
}
