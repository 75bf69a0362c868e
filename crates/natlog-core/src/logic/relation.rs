//! The seven natural-logic relations and quantifier properties.

use std::fmt;

use crate::error::{InputKind, NatlogError};

/// A natural-logic relation between two terms (or two sentences).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum NatlogRelation {
    /// `x ≡ y`
    Equivalent = 0,
    /// `x ⊑ y`
    ForwardEntailment = 1,
    /// `x ⊒ y`
    ReverseEntailment = 2,
    /// `x ^ y`: exhaustive and exclusive.
    Negation = 3,
    /// `x | y`: exclusive, not exhaustive.
    Alternation = 4,
    /// `x ‿ y`: exhaustive, not exclusive.
    Cover = 5,
    /// `x # y`
    Independence = 6,
}

impl NatlogRelation {
    /// Every relation, indexed by its code.
    pub const ALL: [NatlogRelation; 7] = [
        NatlogRelation::Equivalent,
        NatlogRelation::ForwardEntailment,
        NatlogRelation::ReverseEntailment,
        NatlogRelation::Negation,
        NatlogRelation::Alternation,
        NatlogRelation::Cover,
        NatlogRelation::Independence,
    ];

    /// Returns the numeric code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the index into per-relation cost tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The relation read in the opposite direction: forward and reverse
    /// entailment swap, every other relation is symmetric.
    pub fn converse(self) -> NatlogRelation {
        match self {
            NatlogRelation::ForwardEntailment => NatlogRelation::ReverseEntailment,
            NatlogRelation::ReverseEntailment => NatlogRelation::ForwardEntailment,
            other => other,
        }
    }

    /// Returns true if an edit under this relation flips sentence truth.
    #[inline]
    pub fn negates(self) -> bool {
        matches!(
            self,
            NatlogRelation::Negation | NatlogRelation::Alternation | NatlogRelation::Cover
        )
    }
}

impl TryFrom<u8> for NatlogRelation {
    type Error = NatlogError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        NatlogRelation::ALL
            .get(code as usize)
            .copied()
            .ok_or(NatlogError::InvalidProjectionInput {
                kind: InputKind::Relation,
                code,
            })
    }
}

impl fmt::Display for NatlogRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            NatlogRelation::Equivalent => "=",
            NatlogRelation::ForwardEntailment => "<",
            NatlogRelation::ReverseEntailment => ">",
            NatlogRelation::Negation => "^",
            NatlogRelation::Alternation => "|",
            NatlogRelation::Cover => "_",
            NatlogRelation::Independence => "#",
        };
        f.write_str(symbol)
    }
}

/// Direction in which a quantifier argument propagates entailment.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Monotonicity {
    /// Non-monotone: only equivalence survives.
    Flat = 0,
    /// Upward monotone.
    Up = 1,
    /// Downward monotone (antitone).
    Down = 2,
}

impl TryFrom<u8> for Monotonicity {
    type Error = NatlogError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Monotonicity::Flat),
            1 => Ok(Monotonicity::Up),
            2 => Ok(Monotonicity::Down),
            _ => Err(NatlogError::InvalidProjectionInput {
                kind: InputKind::Monotonicity,
                code,
            }),
        }
    }
}

/// Additivity class of a quantifier argument.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum QuantifierType {
    None = 0,
    Additive = 1,
    Multiplicative = 2,
    /// Both additive and multiplicative.
    Both = 3,
}

impl TryFrom<u8> for QuantifierType {
    type Error = NatlogError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(QuantifierType::None),
            1 => Ok(QuantifierType::Additive),
            2 => Ok(QuantifierType::Multiplicative),
            3 => Ok(QuantifierType::Both),
            _ => Err(NatlogError::InvalidProjectionInput {
                kind: InputKind::QuantifierType,
                code,
            }),
        }
    }
}

/// Parses a monotonicity marker from a serialized tree.
///
/// Returns `None` for unknown markers.
pub fn parse_marker(marker: &str) -> Option<(Monotonicity, QuantifierType)> {
    let parsed = match marker {
        "monotone" => (Monotonicity::Up, QuantifierType::None),
        "additive" => (Monotonicity::Up, QuantifierType::Additive),
        "multiplicative" => (Monotonicity::Up, QuantifierType::Multiplicative),
        "additive-multiplicative" => (Monotonicity::Up, QuantifierType::Both),
        "antitone" => (Monotonicity::Down, QuantifierType::None),
        "anti-additive" => (Monotonicity::Down, QuantifierType::Additive),
        "anti-multiplicative" => (Monotonicity::Down, QuantifierType::Multiplicative),
        "anti-additive-multiplicative" => (Monotonicity::Down, QuantifierType::Both),
        "nonmonotone" => (Monotonicity::Flat, QuantifierType::None),
        _ => return None,
    };
    Some(parsed)
}
