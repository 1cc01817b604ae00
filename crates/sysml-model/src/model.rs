//! The loaded model: element lists grouped by category.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::element::Element;
use crate::enums::Category;

/// A merged, read-only snapshot of every loaded document.
///
/// Known categories are kept in declaration order. Lists under keys outside
/// the fixed category set are only present when the loader ran with
/// [`CategoryPolicy::Permissive`](crate::CategoryPolicy); they are kept in
/// key order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Model {
    categories: BTreeMap<Category, Vec<Element>>,
    passthrough: BTreeMap<String, Vec<Element>>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements of a category in insertion order.
    pub fn elements(&self, category: Category) -> &[Element] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Append elements to a category.
    pub fn extend(&mut self, category: Category, elements: impl IntoIterator<Item = Element>) {
        self.categories.entry(category).or_default().extend(elements);
    }

    /// Append a single element to a category.
    pub fn push(&mut self, category: Category, element: Element) {
        self.categories.entry(category).or_default().push(element);
    }

    /// Builder form of [`Model::push`].
    #[must_use]
    pub fn with(mut self, category: Category, element: Element) -> Self {
        self.push(category, element);
        self
    }

    /// Append elements to a category outside the fixed set.
    pub fn extend_passthrough(
        &mut self,
        key: impl Into<String>,
        elements: impl IntoIterator<Item = Element>,
    ) {
        self.passthrough
            .entry(key.into())
            .or_default()
            .extend(elements);
    }

    /// Elements of a passthrough category.
    pub fn passthrough(&self, key: &str) -> &[Element] {
        self.passthrough
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Keys of passthrough categories, in key order.
    pub fn passthrough_keys(&self) -> impl Iterator<Item = &str> {
        self.passthrough.keys().map(String::as_str)
    }

    /// Every top-level list with its document key: known categories in
    /// declaration order (empty ones included), then passthrough lists.
    pub fn lists(&self) -> impl Iterator<Item = (&str, &[Element])> {
        Category::all()
            .iter()
            .map(|category| (category.key(), self.elements(*category)))
            .chain(
                self.passthrough
                    .iter()
                    .map(|(key, elements)| (key.as_str(), elements.as_slice())),
            )
    }

    /// Number of top-level elements across all lists.
    pub fn element_count(&self) -> usize {
        self.lists().map(|(_, elements)| elements.len()).sum()
    }

    /// Number of top-level lists (fixed categories plus passthrough).
    pub fn category_count(&self) -> usize {
        Category::all().len() + self.passthrough.len()
    }
}
