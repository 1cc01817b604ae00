mod de;
pub mod element;
pub mod enums;
pub mod error;
pub mod index;
pub mod issue;
pub mod model;
pub mod options;
pub mod report;

pub use element::Element;
pub use enums::{Category, ElementKind, FlowDirection, RequirementKind, Stereotype};
pub use error::ResolveError;
pub use index::{IndexEntry, ModelIndex, UNRESOLVED_NAME};
pub use issue::{Issue, Rule, RuleCategory, Severity};
pub use model::Model;
pub use options::{CategoryPolicy, UniquenessScope, ValidationOptions};
pub use report::ValidationReport;
