//! Element records as they appear in model documents.

use serde::{Deserialize, Serialize};

use crate::de;
use crate::enums::{FlowDirection, RequirementKind, Stereotype};

/// A model element of any kind.
///
/// One record shape serves every category; fields that do not apply to a
/// kind are simply absent. The kind itself is not stored here, it is
/// assigned by [`ModelIndex`](crate::ModelIndex) from the category (or
/// nesting position) the record was found in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    #[serde(default, deserialize_with = "de::text")]
    pub id: String,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub documentation: Option<String>,
    #[serde(default, deserialize_with = "de::opt_parsed")]
    pub stereotype: Option<Stereotype>,

    // Requirement
    #[serde(default, deserialize_with = "de::opt_text")]
    pub text: Option<String>,
    #[serde(default, rename = "kind", deserialize_with = "de::opt_parsed")]
    pub requirement_kind: Option<RequirementKind>,

    // SourceContent
    #[serde(default, deserialize_with = "de::opt_text")]
    pub file_or_url: Option<String>,

    // FlowProperty / ProxyPort / PartProperty
    #[serde(default, deserialize_with = "de::opt_parsed")]
    pub direction: Option<FlowDirection>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub type_ref: Option<String>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub conjugated: bool,

    // Packages
    #[serde(default, deserialize_with = "de::opt_text")]
    pub owner_ref: Option<String>,

    // Reference lists
    #[serde(default, deserialize_with = "de::text_list")]
    pub use_case_refs: Vec<String>,
    #[serde(default, deserialize_with = "de::text_list")]
    pub actor_refs: Vec<String>,
    #[serde(default, deserialize_with = "de::text_list")]
    pub include_refs: Vec<String>,
    #[serde(default, deserialize_with = "de::text_list")]
    pub extend_refs: Vec<String>,
    #[serde(default, deserialize_with = "de::text_list")]
    pub trace_refs: Vec<String>,
    #[serde(default, deserialize_with = "de::text_list")]
    pub derive_refs: Vec<String>,
    #[serde(default, deserialize_with = "de::text_list")]
    pub refine_refs: Vec<String>,
    #[serde(default, deserialize_with = "de::text_list")]
    pub generalization_refs: Vec<String>,
    #[serde(default, deserialize_with = "de::text_list")]
    pub realization_refs: Vec<String>,

    // Nested elements
    #[serde(default, deserialize_with = "de::nullable")]
    pub parts: Vec<Element>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub ports: Vec<Element>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub flow_properties: Vec<Element>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub operations: Vec<Element>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub value_properties: Vec<Element>,
}

impl Element {
    /// Create an element with only an identifier set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the documentation.
    #[must_use]
    pub fn documented(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Set the stereotype.
    #[must_use]
    pub fn stereotyped(mut self, stereotype: Stereotype) -> Self {
        self.stereotype = Some(stereotype);
        self
    }

    /// Set the type reference.
    #[must_use]
    pub fn typed(mut self, type_ref: impl Into<String>) -> Self {
        self.type_ref = Some(type_ref.into());
        self
    }

    /// Name, or the empty string when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Name, falling back to the identifier.
    pub fn label(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.id,
        }
    }

    /// An empty name counts as missing.
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// Whitespace-only documentation counts as missing.
    pub fn has_documentation(&self) -> bool {
        has_content(self.documentation.as_deref())
    }

    /// Whitespace-only requirement text counts as missing.
    pub fn has_text(&self) -> bool {
        has_content(self.text.as_deref())
    }

    pub fn stereotype(&self) -> Option<&Stereotype> {
        self.stereotype.as_ref()
    }

    /// Stereotype for messages; `none` when absent.
    pub fn stereotype_label(&self) -> &str {
        self.stereotype.as_ref().map_or("none", Stereotype::as_str)
    }

    /// Requirement kind, defaulting to functional.
    pub fn requirement_kind(&self) -> RequirementKind {
        self.requirement_kind.clone().unwrap_or_default()
    }

    /// Non-empty type reference.
    pub fn type_ref(&self) -> Option<&str> {
        self.type_ref.as_deref().filter(|id| !id.is_empty())
    }

    pub fn parts(&self) -> &[Element] {
        &self.parts
    }

    pub fn ports(&self) -> &[Element] {
        &self.ports
    }

    pub fn flow_properties(&self) -> &[Element] {
        &self.flow_properties
    }

    pub fn operations(&self) -> &[Element] {
        &self.operations
    }

    pub fn value_properties(&self) -> &[Element] {
        &self.value_properties
    }
}

fn has_content(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.trim().is_empty())
}
