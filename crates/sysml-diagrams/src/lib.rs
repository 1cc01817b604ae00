//! PlantUML diagram generation for systems models.
//!
//! Every renderer is pure text templating over the loaded [`Model`](sysml_model::Model) and its
//! [`ModelIndex`](sysml_model::ModelIndex). References that do not resolve
//! are shown as `?` or left out; rendering never fails.
//!
//! - **Use cases**: actors, the system boundary and use case dependencies
//! - **Block definition**: blocks of one architecture layer
//! - **Interface blocks**: flow properties and the signals they convey
//! - **Requirements**: requirement kinds with derive and refine edges
//! - **Package structure**: the nested package tree

mod error;
mod options;
mod package;
mod puml;
mod requirements;
mod structure;
mod use_case;
mod writer;

pub use error::{DiagramError, Result};
pub use options::DiagramOptions;
pub use package::render_package_structure;
pub use requirements::render_requirements;
pub use structure::{render_block_definition, render_interface_blocks};
pub use use_case::render_use_cases;
pub use writer::{Diagram, RenderedDiagram, render_diagrams, write_diagrams};
