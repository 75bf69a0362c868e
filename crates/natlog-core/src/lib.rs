//! natlog Core - Core types and tables for natural-logic inference
//!
//! This crate provides the fundamental building blocks shared by the
//! dependency tree, the search state and the fact index:
//! - Token and edge value types
//! - Dependency labels and mutation-edit types
//! - The seven natural-logic relations, monotonicity projection and
//!   truth transitions
//! - Quantifier tables, delete masks and the incremental fact hash

pub mod constants;
pub mod error;
pub mod hash;
pub mod label;
pub mod logic;
pub mod mask;
pub mod mutation;
pub mod quantifier;
pub mod token;

pub use constants::*;
pub use error::{InputKind, NatlogError, Result};
pub use hash::{hash_edge, mix, DependencyEdge};
pub use label::DepLabel;
pub use logic::{
    project, reverse_transition, transition, Monotonicity, NatlogRelation, QuantifierType,
};
pub use mask::DeleteMask;
pub use mutation::MutationType;
pub use quantifier::{QuantifierMonotonicity, QuantifierSpan, QuantifierTable};
pub use token::{Edge, TaggedWord, Word};
