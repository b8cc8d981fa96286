//! Errors raised when a slug cannot be produced from the supplied inputs.

use thiserror::Error;

/// A slug request is missing something it needs.
///
/// The first two variants come from the slug builder itself. The attribute
/// and method variants come from the record layer, which names the offending
/// entity so the caller can tell which record was misconfigured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("missing identifier")]
    MissingIdentifier,

    #[error("missing source text")]
    MissingSourceText,

    #[error(
        "cannot build a slug for {entity} (id={key}): it has no attribute named '{attribute}'"
    )]
    MissingAttribute {
        entity: String,
        key: String,
        attribute: String,
    },

    #[error(
        "cannot build a slug for {entity} (id={key}): it has no method named '{method}' to prepare the source text"
    )]
    MissingPrepareMethod {
        entity: String,
        key: String,
        method: String,
    },
}
