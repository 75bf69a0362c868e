//! Dependency-relation labels.
//!
//! Labels arrive as strings in serialized trees and are mapped to a small
//! integer code. Collapsed prepositions (`prep_with`, `prepc_before`),
//! collapsed conjunctions (`conj_and`) and subtyped nominal modifiers
//! (`nmod:of`) fold into their base label.

use std::fmt;

use crate::logic::NatlogRelation;
use crate::token::Word;

/// Every known label, indexed by its code.
pub const DEPENDENCY_LABELS: [&str; 59] = [
    "root", "dep", "aux", "auxpass", "cop", "arg", "agent", "comp", "acomp", "ccomp", "xcomp",
    "obj", "dobj", "iobj", "pobj", "subj", "nsubj", "nsubjpass", "csubj", "csubjpass", "cc",
    "conj", "expl", "mod", "amod", "appos", "advcl", "det", "predet", "preconj", "vmod", "mwe",
    "mark", "advmod", "neg", "rcmod", "quantmod", "nn", "npadvmod", "tmod", "num", "number",
    "prep", "poss", "possessive", "prt", "parataxis", "goeswith", "punct", "ref", "sdep", "xsubj",
    "discourse", "op", "nmod", "case", "compound", "nummod", "acl",
];

/// A dependency-relation label code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DepLabel(u8);

impl DepLabel {
    pub const ROOT: DepLabel = DepLabel(0);
    pub const DEP: DepLabel = DepLabel(1);
    pub const COP: DepLabel = DepLabel(4);
    pub const DOBJ: DepLabel = DepLabel(12);
    pub const NSUBJ: DepLabel = DepLabel(16);
    pub const CC: DepLabel = DepLabel(20);
    pub const CONJ: DepLabel = DepLabel(21);
    pub const AMOD: DepLabel = DepLabel(24);
    pub const DET: DepLabel = DepLabel(27);
    pub const ADVMOD: DepLabel = DepLabel(33);
    pub const NEG: DepLabel = DepLabel(34);
    pub const PREP: DepLabel = DepLabel(42);
    pub const PUNCT: DepLabel = DepLabel(48);
    /// The quantifier-operator edge; it never contributes to a fact hash.
    pub const OP: DepLabel = DepLabel(53);
    pub const NMOD: DepLabel = DepLabel(54);

    /// Returns the label with the given code, if it exists.
    pub fn from_code(code: u8) -> Option<DepLabel> {
        ((code as usize) < DEPENDENCY_LABELS.len()).then_some(DepLabel(code))
    }

    /// Maps a label string to its code.
    ///
    /// Returns `None` for unknown labels; the tree parser reports those and
    /// substitutes [`DepLabel::DEP`].
    pub fn from_name(name: &str) -> Option<DepLabel> {
        let base = if let Some(rest) = name.strip_prefix("prepc_") {
            if rest.is_empty() {
                return None;
            }
            "prep"
        } else if let Some(rest) = name.strip_prefix("prep_") {
            if rest.is_empty() {
                return None;
            }
            "prep"
        } else if name.starts_with("conj_") {
            "conj"
        } else if name.starts_with("nmod:") {
            "nmod"
        } else {
            name
        };
        DEPENDENCY_LABELS
            .iter()
            .position(|&l| l == base)
            .map(|i| DepLabel(i as u8))
    }

    /// Returns the numeric code.
    #[inline]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Returns the index into per-label cost tables.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the canonical label string.
    pub fn name(self) -> &'static str {
        DEPENDENCY_LABELS[self.index()]
    }

    /// Lexical relation between a sentence and the same sentence with a
    /// dependent inserted under this label.
    ///
    /// Inserting a modifier specializes the governor (reverse entailment),
    /// inserting a negation negates it, and structural or clause-level
    /// attachments are independent of the original.
    pub fn insertion_relation(self, _dependent: Word) -> NatlogRelation {
        match self.name() {
            "neg" => NatlogRelation::Negation,
            "root" | "dep" | "cc" | "conj" | "parataxis" | "discourse" | "goeswith" | "punct"
            | "ref" | "sdep" | "op" | "ccomp" | "csubj" | "csubjpass" | "advcl" | "mark"
            | "expl" => NatlogRelation::Independence,
            "aux" | "auxpass" | "cop" | "det" | "predet" | "case" | "possessive" | "prt"
            | "mwe" => NatlogRelation::Equivalent,
            _ => NatlogRelation::ReverseEntailment,
        }
    }

    /// Lexical relation of deleting a dependent attached under this label:
    /// the converse of [`insertion_relation`](Self::insertion_relation).
    pub fn deletion_relation(self, dependent: Word) -> NatlogRelation {
        self.insertion_relation(dependent).converse()
    }
}

impl fmt::Debug for DepLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DepLabel({})", self.name())
    }
}

impl fmt::Display for DepLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
