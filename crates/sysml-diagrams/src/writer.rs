//! Rendering the full artifact set and writing it to disk.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, info_span};

use sysml_model::{Model, ModelIndex};

use crate::error::{DiagramError, Result};
use crate::options::DiagramOptions;
use crate::{
    render_block_definition, render_interface_blocks, render_package_structure,
    render_requirements, render_use_cases,
};

/// The artifacts produced by one generation run, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagram {
    UseCases,
    BlockDefinition,
    InterfaceBlocks,
    Requirements,
    PackageStructure,
}

impl Diagram {
    pub fn all() -> &'static [Diagram] {
        &[
            Self::UseCases,
            Self::BlockDefinition,
            Self::InterfaceBlocks,
            Self::Requirements,
            Self::PackageStructure,
        ]
    }

    /// Output file name. Layered diagrams carry the layer name.
    pub fn file_name(&self, options: &DiagramOptions) -> String {
        let layer = options.architecture.as_str();
        match self {
            Self::UseCases => "use-case-diagram.puml".to_string(),
            Self::BlockDefinition => format!("bdd-{layer}.puml"),
            Self::InterfaceBlocks => format!("interface-blocks-{layer}.puml"),
            Self::Requirements => "requirements-diagram.puml".to_string(),
            Self::PackageStructure => "package-structure.puml".to_string(),
        }
    }

    pub fn render(&self, model: &Model, index: &ModelIndex<'_>, options: &DiagramOptions) -> String {
        match self {
            Self::UseCases => render_use_cases(model, &options.system_name),
            Self::BlockDefinition => render_block_definition(model, index, &options.architecture),
            Self::InterfaceBlocks => render_interface_blocks(model, index, &options.architecture),
            Self::Requirements => render_requirements(model),
            Self::PackageStructure => render_package_structure(model),
        }
    }
}

/// One rendered artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDiagram {
    pub diagram: Diagram,
    pub file_name: String,
    pub content: String,
}

/// Render every artifact in memory.
pub fn render_diagrams(model: &Model, options: &DiagramOptions) -> Vec<RenderedDiagram> {
    let index = ModelIndex::build(model);
    Diagram::all()
        .iter()
        .map(|diagram| RenderedDiagram {
            diagram: *diagram,
            file_name: diagram.file_name(options),
            content: diagram.render(model, &index, options),
        })
        .collect()
}

/// Render every artifact and write it into `output_dir`, creating the
/// directory when needed. Existing files are overwritten.
pub fn write_diagrams(
    model: &Model,
    output_dir: &Path,
    options: &DiagramOptions,
) -> Result<Vec<PathBuf>> {
    let span = info_span!("generate_diagrams", output_dir = %output_dir.display());
    let _guard = span.enter();
    let start = Instant::now();

    std::fs::create_dir_all(output_dir).map_err(|e| DiagramError::CreateDir {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let mut outputs = Vec::new();
    for rendered in render_diagrams(model, options) {
        let path = output_dir.join(&rendered.file_name);
        std::fs::write(&path, &rendered.content).map_err(|e| DiagramError::Write {
            path: path.clone(),
            source: e,
        })?;
        debug!(path = %path.display(), bytes = rendered.content.len(), "diagram written");
        outputs.push(path);
    }

    info!(
        diagram_count = outputs.len(),
        duration_ms = start.elapsed().as_millis(),
        "diagrams generated"
    );
    Ok(outputs)
}
