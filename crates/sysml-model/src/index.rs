//! Flat identifier lookup over a loaded [`Model`].
//!
//! The index borrows the model and never touches its records. Each entry
//! carries the kind assigned at indexing time and, for nested elements, the
//! identifier of the owning block.

use std::collections::HashMap;

use crate::element::Element;
use crate::enums::{Category, ElementKind};
use crate::error::ResolveError;
use crate::model::Model;

/// Placeholder rendered for identifiers that do not resolve.
pub const UNRESOLVED_NAME: &str = "?";

/// One indexed element.
#[derive(Debug, Clone, Copy)]
pub struct IndexEntry<'a> {
    pub element: &'a Element,
    pub kind: ElementKind,
    /// Owning block for nested elements.
    pub owner: Option<&'a str>,
}

/// Identifier → element lookup covering top-level and nested elements.
#[derive(Debug, Clone, Default)]
pub struct ModelIndex<'a> {
    entries: HashMap<&'a str, IndexEntry<'a>>,
}

impl<'a> ModelIndex<'a> {
    /// Index every element of the model.
    ///
    /// Later insertions overwrite earlier ones on identifier collision;
    /// duplicates are reported by the uniqueness rule, not here.
    pub fn build(model: &'a Model) -> Self {
        let mut index = Self::default();
        for category in Category::all() {
            for element in model.elements(*category) {
                index.register(element, category.kind());
            }
        }
        for key in model.passthrough_keys() {
            for element in model.passthrough(key) {
                index.register(element, ElementKind::Unclassified);
            }
        }
        index
    }

    fn register(&mut self, element: &'a Element, kind: ElementKind) {
        self.insert(element, kind, None);
        let owner = Some(element.id.as_str());
        for part in element.parts() {
            self.insert(part, ElementKind::PartProperty, owner);
        }
        for port in element.ports() {
            self.insert(port, ElementKind::ProxyPort, owner);
        }
        for flow in element.flow_properties() {
            self.insert(flow, ElementKind::FlowProperty, owner);
        }
        for operation in element.operations() {
            self.insert(operation, ElementKind::Operation, owner);
        }
    }

    fn insert(&mut self, element: &'a Element, kind: ElementKind, owner: Option<&'a str>) {
        self.entries.insert(
            element.id.as_str(),
            IndexEntry {
                element,
                kind,
                owner,
            },
        );
    }

    pub fn get(&self, id: &str) -> Option<&IndexEntry<'a>> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn element(&self, id: &str) -> Option<&'a Element> {
        self.get(id).map(|entry| entry.element)
    }

    pub fn kind(&self, id: &str) -> Option<ElementKind> {
        self.get(id).map(|entry| entry.kind)
    }

    pub fn owner(&self, id: &str) -> Option<&'a str> {
        self.get(id).and_then(|entry| entry.owner)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display name of the referenced element, or `"?"` when it does not
    /// resolve or has no name.
    pub fn display_name(&self, id: &str) -> &'a str {
        self.element(id)
            .and_then(|element| element.name.as_deref())
            .unwrap_or(UNRESOLVED_NAME)
    }

    /// Resolve an identifier that must name an element of `expected` kind.
    pub fn resolve(&self, id: &str, expected: ElementKind) -> Result<&'a Element, ResolveError> {
        let entry = self.get(id).ok_or_else(|| ResolveError::Missing { id: id.to_string() })?;
        if entry.kind != expected {
            return Err(ResolveError::KindMismatch {
                id: id.to_string(),
                expected,
                found: entry.kind,
            });
        }
        Ok(entry.element)
    }

    pub fn resolve_signal(&self, id: &str) -> Result<&'a Element, ResolveError> {
        self.resolve(id, ElementKind::Signal)
    }

    pub fn resolve_interface_block(&self, id: &str) -> Result<&'a Element, ResolveError> {
        self.resolve(id, ElementKind::InterfaceBlock)
    }

    pub fn resolve_block(&self, id: &str) -> Result<&'a Element, ResolveError> {
        self.resolve(id, ElementKind::Block)
    }
}
