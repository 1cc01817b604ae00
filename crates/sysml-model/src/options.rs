//! Configuration options for loading and validation.

use serde::{Deserialize, Serialize};

/// How the loader treats document keys outside the fixed category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryPolicy {
    /// Ignore unknown keys.
    #[default]
    Strict,
    /// Keep unknown keys as passthrough categories.
    Permissive,
}

/// Which elements the duplicate-identifier rule scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UniquenessScope {
    /// Top-level category lists only. Nested parts, ports, flow properties
    /// and operations may collide silently.
    #[default]
    TopLevel,
    /// Top-level lists plus every nested element.
    Full,
}

/// Options controlling a validation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    pub uniqueness: UniquenessScope,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate-identifier scan scope.
    #[must_use]
    pub fn with_uniqueness(mut self, scope: UniquenessScope) -> Self {
        self.uniqueness = scope;
        self
    }
}
