use std::path::PathBuf;

use sysml_model::ValidationReport;

#[derive(Debug)]
pub struct ValidateResult {
    pub model_dir: PathBuf,
    pub element_count: usize,
    pub category_count: usize,
    pub report: ValidationReport,
}

impl ValidateResult {
    pub fn has_errors(&self) -> bool {
        self.report.has_errors()
    }
}

#[derive(Debug)]
pub struct DiagramResult {
    pub model_dir: PathBuf,
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
}
