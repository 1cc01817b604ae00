use thiserror::Error;

use crate::enums::ElementKind;

/// Failure of a typed lookup in the [`ModelIndex`](crate::ModelIndex).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unresolved reference: {id}")]
    Missing { id: String },
    #[error("{id} is a {found}, expected a {expected}")]
    KindMismatch {
        id: String,
        expected: ElementKind,
        found: ElementKind,
    },
}
