//! Error types for natlog

use std::fmt;

use thiserror::Error;

/// The kind of enumeration code that failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// A natural-logic relation code.
    Relation,
    /// A monotonicity code.
    Monotonicity,
    /// An additivity class code.
    QuantifierType,
    /// A mutation-edit type code.
    MutationType,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputKind::Relation => "relation",
            InputKind::Monotonicity => "monotonicity",
            InputKind::QuantifierType => "quantifier type",
            InputKind::MutationType => "mutation type",
        };
        f.write_str(name)
    }
}

/// Main error type for natlog operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NatlogError {
    /// An unrecognized code reached projection, transition or cost logic.
    #[error("Invalid projection input: unknown {kind} code {code}")]
    InvalidProjectionInput { kind: InputKind, code: u8 },

    /// No token of the tree is governed by the root sentinel.
    #[error("Dependency tree has no root token")]
    NoRoot,

    /// More than one token is governed by the root sentinel.
    #[error("Dependency tree has a second root token at index {index}")]
    MultipleRoots { index: u8 },

    /// The tree has more tokens than the fixed capacity.
    #[error("Dependency tree has {length} tokens; at most {max} are supported")]
    TreeTooLong { length: usize, max: usize },

    /// A governor index points outside the tree.
    #[error("Token {index} has governor {governor}, which is outside the tree")]
    GovernorOutOfRange { index: u8, governor: usize },
}

impl NatlogError {
    /// Returns true for the unrecoverable contract-violation class.
    ///
    /// These errors mean an upstream invariant was already broken; callers
    /// must not silently continue past them.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            NatlogError::InvalidProjectionInput { .. }
                | NatlogError::NoRoot
                | NatlogError::MultipleRoots { .. }
        )
    }
}

/// Result type alias for natlog operations
pub type Result<T> = std::result::Result<T, NatlogError>;
