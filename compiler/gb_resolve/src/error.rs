//! Resolution errors.

use std::num::ParseIntError;

/// A node is missing something the manifest needs, or carries a value that
/// cannot be interpreted. Every variant names the offending node.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("node '{node}' has no '{attr}' attribute")]
    MissingAttribute { node: String, attr: String },

    #[error("node '{node}' has no parent")]
    MissingParent { node: String },

    #[error("'{attr}' of node '{node}' refers to unknown node '{target}'")]
    UnknownNode {
        node: String,
        attr: String,
        target: String,
    },

    #[error("'{attr}' of node '{node}' is not a valid integer: '{value}' ({source})")]
    InvalidInteger {
        node: String,
        attr: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("more than one interface node: '{first}' and '{second}'")]
    DuplicateInterface { first: String, second: String },
}
