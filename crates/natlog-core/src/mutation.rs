//! Mutation-edit types.
//!
//! Every mutation edge in the lexical graph carries one of these types as
//! its `edge_type` code. Each type has an intrinsic lexical relation between
//! the word being replaced and its replacement.

use crate::error::{InputKind, NatlogError};
use crate::logic::NatlogRelation;

/// The kind of lexical substitution a mutation edge performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum MutationType {
    WordnetUp = 0,
    WordnetDown = 1,
    WordnetNounAntonym = 2,
    WordnetNounSynonym = 3,
    WordnetVerbAntonym = 4,
    WordnetAdjectiveAntonym = 5,
    WordnetAdverbAntonym = 6,
    WordnetAdjectivePertainym = 7,
    WordnetAdverbPertainym = 8,
    WordnetAdjectiveRelated = 9,
    /// Nearest neighbour in a word-embedding space. Fishy.
    AngleNearestNeighbor = 10,
    FreebaseUp = 11,
    FreebaseDown = 12,
    /// Verb entailment from a mined resource. Fishy.
    VerbEntail = 13,
    QuantifierWeaken = 14,
    QuantifierStrengthen = 15,
    QuantifierNegate = 16,
    QuantifierReword = 17,
    SenseRemove = 18,
    SenseAdd = 19,
}

impl MutationType {
    /// Every mutation type, indexed by its code.
    pub const ALL: [MutationType; 20] = [
        MutationType::WordnetUp,
        MutationType::WordnetDown,
        MutationType::WordnetNounAntonym,
        MutationType::WordnetNounSynonym,
        MutationType::WordnetVerbAntonym,
        MutationType::WordnetAdjectiveAntonym,
        MutationType::WordnetAdverbAntonym,
        MutationType::WordnetAdjectivePertainym,
        MutationType::WordnetAdverbPertainym,
        MutationType::WordnetAdjectiveRelated,
        MutationType::AngleNearestNeighbor,
        MutationType::FreebaseUp,
        MutationType::FreebaseDown,
        MutationType::VerbEntail,
        MutationType::QuantifierWeaken,
        MutationType::QuantifierStrengthen,
        MutationType::QuantifierNegate,
        MutationType::QuantifierReword,
        MutationType::SenseRemove,
        MutationType::SenseAdd,
    ];

    /// Returns the numeric code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the index into per-type cost tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true for the two low-precision edge sources that the
    /// reference cost table prices at the bad level.
    pub fn is_fishy(self) -> bool {
        matches!(
            self,
            MutationType::AngleNearestNeighbor | MutationType::VerbEntail
        )
    }

    /// The lexical relation between a word and its replacement along an
    /// edge of this type.
    pub fn lexical_relation(self) -> NatlogRelation {
        use MutationType::*;
        match self {
            WordnetUp | FreebaseUp | VerbEntail | QuantifierWeaken => {
                NatlogRelation::ForwardEntailment
            }
            WordnetDown | FreebaseDown | QuantifierStrengthen => NatlogRelation::ReverseEntailment,
            WordnetNounAntonym | WordnetVerbAntonym | WordnetAdjectiveAntonym
            | WordnetAdverbAntonym => NatlogRelation::Alternation,
            QuantifierNegate => NatlogRelation::Negation,
            WordnetNounSynonym | WordnetAdjectivePertainym | WordnetAdverbPertainym
            | WordnetAdjectiveRelated | AngleNearestNeighbor | QuantifierReword | SenseRemove
            | SenseAdd => NatlogRelation::Equivalent,
        }
    }
}

impl TryFrom<u8> for MutationType {
    type Error = NatlogError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        MutationType::ALL
            .get(code as usize)
            .copied()
            .ok_or(NatlogError::InvalidProjectionInput {
                kind: InputKind::MutationType,
                code,
            })
    }
}
