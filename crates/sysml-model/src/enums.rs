//! Type-safe enumerations for model concepts.
//!
//! Categories and element kinds are closed sets. Stereotypes, flow
//! directions and requirement kinds are open: values outside the known set
//! are preserved verbatim so diagnostics can quote what the author wrote.

use serde::{Serialize, Serializer};
use std::fmt;

/// Top-level element category, in document declaration order.
///
/// The derived ordering is the order categories are indexed, scanned for
/// duplicate identifiers, and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Package,
    Requirement,
    SourceContent,
    Actor,
    UseCase,
    Block,
    InterfaceBlock,
    Signal,
    Term,
    TestCase,
}

impl Category {
    /// All categories in declaration order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Package,
            Self::Requirement,
            Self::SourceContent,
            Self::Actor,
            Self::UseCase,
            Self::Block,
            Self::InterfaceBlock,
            Self::Signal,
            Self::Term,
            Self::TestCase,
        ]
    }

    /// Document key holding this category's element list.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Package => "packages",
            Self::Requirement => "requirements",
            Self::SourceContent => "sources",
            Self::Actor => "actors",
            Self::UseCase => "useCases",
            Self::Block => "blocks",
            Self::InterfaceBlock => "interfaceBlocks",
            Self::Signal => "signals",
            Self::Term => "terms",
            Self::TestCase => "testCases",
        }
    }

    /// Look up a category by its document key (exact match).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|category| category.key() == key)
    }

    /// Element kind assigned to top-level elements of this category.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Package => ElementKind::Package,
            Self::Requirement => ElementKind::Requirement,
            Self::SourceContent => ElementKind::SourceContent,
            Self::Actor => ElementKind::Actor,
            Self::UseCase => ElementKind::UseCase,
            Self::Block => ElementKind::Block,
            Self::InterfaceBlock => ElementKind::InterfaceBlock,
            Self::Signal => ElementKind::Signal,
            Self::Term => ElementKind::Term,
            Self::TestCase => ElementKind::TestCase,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Kind discriminant attached to every indexed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementKind {
    Package,
    Requirement,
    SourceContent,
    Actor,
    UseCase,
    Block,
    InterfaceBlock,
    Signal,
    Term,
    TestCase,
    /// Nested under a Block: composition to another block.
    PartProperty,
    /// Nested under a Block: interaction point typed by an interface block.
    ProxyPort,
    /// Nested under an InterfaceBlock: a directed, signal-typed flow.
    FlowProperty,
    /// Nested under a Block or InterfaceBlock.
    Operation,
    /// Top-level element of a passthrough category outside the fixed set.
    Unclassified,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Package => "Package",
            Self::Requirement => "Requirement",
            Self::SourceContent => "SourceContent",
            Self::Actor => "Actor",
            Self::UseCase => "UseCase",
            Self::Block => "Block",
            Self::InterfaceBlock => "InterfaceBlock",
            Self::Signal => "Signal",
            Self::Term => "Term",
            Self::TestCase => "TestCase",
            Self::PartProperty => "PartProperty",
            Self::ProxyPort => "ProxyPort",
            Self::FlowProperty => "FlowProperty",
            Self::Operation => "Operation",
            Self::Unclassified => "Unclassified",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Architectural role tag on blocks, interface blocks and signals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stereotype {
    Logical,
    Physical,
    Context,
    External,
    Software,
    Other(String),
}

impl Stereotype {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Logical => "logical",
            Self::Physical => "physical",
            Self::Context => "context",
            Self::External => "external",
            Self::Software => "software",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for Stereotype {
    fn from(value: String) -> Self {
        match value.as_str() {
            "logical" => Self::Logical,
            "physical" => Self::Physical,
            "context" => Self::Context,
            "external" => Self::External,
            "software" => Self::Software,
            _ => Self::Other(value),
        }
    }
}

impl fmt::Display for Stereotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Stereotype {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Direction of a flow property relative to its interface block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlowDirection {
    In,
    Out,
    InOut,
    Other(String),
}

impl FlowDirection {
    pub fn as_str(&self) -> &str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "inout",
            Self::Other(value) => value,
        }
    }

    /// Interface blocks describe what they convey outward.
    pub fn is_outward(&self) -> bool {
        matches!(self, Self::Out | Self::InOut)
    }
}

impl From<String> for FlowDirection {
    fn from(value: String) -> Self {
        match value.as_str() {
            "in" => Self::In,
            "out" => Self::Out,
            "inout" => Self::InOut,
            _ => Self::Other(value),
        }
    }
}

impl fmt::Display for FlowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FlowDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Requirement classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RequirementKind {
    #[default]
    Functional,
    Performance,
    Interface,
    Constraint,
    Business,
    Other(String),
}

impl RequirementKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Functional => "functional",
            Self::Performance => "performance",
            Self::Interface => "interface",
            Self::Constraint => "constraint",
            Self::Business => "business",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for RequirementKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "functional" => Self::Functional,
            "performance" => Self::Performance,
            "interface" => Self::Interface,
            "constraint" => Self::Constraint,
            "business" => Self::Business,
            _ => Self::Other(value),
        }
    }
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RequirementKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_keys_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::from_key(category.key()), Some(*category));
        }
        assert_eq!(Category::from_key("diagrams"), None);
        assert_eq!(Category::from_key("UseCases"), None);
    }

    #[test]
    fn category_order_follows_declaration() {
        let mut sorted = Category::all().to_vec();
        sorted.sort();
        assert_eq!(sorted, Category::all());
        assert!(Category::Package < Category::TestCase);
    }

    #[test]
    fn unknown_stereotype_is_preserved() {
        let stereo = Stereotype::from("subsystem".to_string());
        assert_eq!(stereo, Stereotype::Other("subsystem".to_string()));
        assert_eq!(stereo.to_string(), "subsystem");
        assert_eq!(Stereotype::from("logical".to_string()), Stereotype::Logical);
    }

    #[test]
    fn flow_direction_outward() {
        assert!(FlowDirection::Out.is_outward());
        assert!(FlowDirection::InOut.is_outward());
        assert!(!FlowDirection::In.is_outward());
        assert!(!FlowDirection::from("both".to_string()).is_outward());
    }

    #[test]
    fn category_kinds() {
        assert_eq!(Category::Block.kind(), ElementKind::Block);
        assert_eq!(Category::InterfaceBlock.kind(), ElementKind::InterfaceBlock);
    }
}
