//! Diagram generation options.

use sysml_model::Stereotype;

/// Options for diagram generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramOptions {
    /// Title of the system boundary in the use case diagram.
    pub system_name: String,
    /// Architecture layer shown by the block and interface diagrams.
    pub architecture: Stereotype,
}

impl DiagramOptions {
    pub fn new(system_name: impl Into<String>) -> Self {
        Self {
            system_name: system_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_architecture(mut self, architecture: Stereotype) -> Self {
        self.architecture = architecture;
        self
    }
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            system_name: "System".to_string(),
            architecture: Stereotype::Logical,
        }
    }
}
