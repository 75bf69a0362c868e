//! Natural-logic relations, monotonicity projection and truth transitions.
//!
//! A lexical relation between two words becomes a sentence-level relation
//! by passing through every quantifier scope enclosing the edited token
//! ([`project`]). The sentence-level relation then decides whether the
//! edit preserves or flips the truth of the sentence ([`transition`]).
//!
//! # Examples
//!
//! ```
//! use natlog_core::{project, Monotonicity, NatlogRelation, QuantifierType};
//!
//! // "all cats" is downward monotone in its subject: cat -> animal flips direction.
//! let projected = project(
//!     Monotonicity::Down,
//!     QuantifierType::Additive,
//!     NatlogRelation::ForwardEntailment,
//! );
//! assert_eq!(projected, NatlogRelation::ReverseEntailment);
//! ```

mod project;
mod relation;
mod transition;


pub use project::{project, project_code};
pub use relation::{parse_marker, Monotonicity, NatlogRelation, QuantifierType};
pub use transition::{reverse_transition, reverse_transition_code, transition, transition_code};
