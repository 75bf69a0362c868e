//! Quantifier scopes and the per-tree quantifier table.

use crate::constants::MAX_QUANTIFIER_COUNT;
use crate::hash::mix;
use crate::logic::{Monotonicity, QuantifierType};

/// Token ranges over which a quantifier has scope.
///
/// Ranges are half-open (`begin..end`). Spans of different quantifiers may
/// overlap. An empty object span (`obj_begin == obj_end`) means the
/// quantifier has no object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct QuantifierSpan {
    pub subj_begin: u8,
    pub subj_end: u8,
    pub obj_begin: u8,
    pub obj_end: u8,
    /// Token index of the quantifier word itself.
    pub quantifier_index: u8,
}

impl QuantifierSpan {
    /// Returns true if `index` lies in the subject span.
    #[inline]
    pub fn in_subject(&self, index: u8) -> bool {
        index >= self.subj_begin && index < self.subj_end
    }

    /// Returns true if `index` lies in the object span.
    #[inline]
    pub fn in_object(&self, index: u8) -> bool {
        index >= self.obj_begin && index < self.obj_end
    }

    /// Distance from `index` to the nearer edge of the span containing it,
    /// or `None` if neither span contains it. The subject span wins when
    /// both do.
    pub fn scope_distance(&self, index: u8) -> Option<u8> {
        let (begin, end) = if self.in_subject(index) {
            (self.subj_begin, self.subj_end)
        } else if self.in_object(index) {
            (self.obj_begin, self.obj_end)
        } else {
            return None;
        };
        Some((index - begin).min(end - index))
    }
}

/// Monotonicity and additivity of both arguments of a quantifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuantifierMonotonicity {
    pub subj_mono: Monotonicity,
    pub subj_type: QuantifierType,
    pub obj_mono: Monotonicity,
    pub obj_type: QuantifierType,
}

impl QuantifierMonotonicity {
    /// Creates a quantifier record.
    pub const fn new(
        subj_mono: Monotonicity,
        subj_type: QuantifierType,
        obj_mono: Monotonicity,
        obj_type: QuantifierType,
    ) -> Self {
        Self {
            subj_mono,
            subj_type,
            obj_mono,
            obj_type,
        }
    }

    /// Returns true for existential-like quantifiers ("some", "a") that
    /// leave the fact hash unchanged: an upward additive subject with a
    /// flat or upward additive object.
    pub fn is_trivial_existential(&self) -> bool {
        let additive = |t: QuantifierType| {
            matches!(t, QuantifierType::Additive | QuantifierType::Both)
        };
        self.subj_mono == Monotonicity::Up
            && additive(self.subj_type)
            && (self.obj_mono == Monotonicity::Flat
                || (self.obj_mono == Monotonicity::Up && additive(self.obj_type)))
    }

    /// Packs the record into 32 bits for hashing.
    #[inline]
    pub fn pack(&self) -> u32 {
        (self.subj_mono as u32)
            | (self.subj_type as u32) << 8
            | (self.obj_mono as u32) << 16
            | (self.obj_type as u32) << 24
    }
}

/// Fixed-size table of quantifier slots. An empty slot means no quantifier
/// is registered there.
///
/// The table is a plain value: search states copy it wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct QuantifierTable {
    slots: [Option<QuantifierMonotonicity>; MAX_QUANTIFIER_COUNT],
}

impl QuantifierTable {
    /// Creates an empty table.
    pub const fn new() -> Self {
        Self {
            slots: [None; MAX_QUANTIFIER_COUNT],
        }
    }

    /// Returns the record at `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= MAX_QUANTIFIER_COUNT`.
    #[inline]
    pub fn get(&self, slot: usize) -> Option<QuantifierMonotonicity> {
        self.slots[slot]
    }

    /// Overwrites `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= MAX_QUANTIFIER_COUNT`.
    #[inline]
    pub fn set(&mut self, slot: usize, quantifier: QuantifierMonotonicity) {
        self.slots[slot] = Some(quantifier);
    }

    /// Empties `slot`.
    #[inline]
    pub fn clear(&mut self, slot: usize) {
        self.slots[slot] = None;
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns true if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterates over occupied slots.
    pub fn iter(&self) -> impl Iterator<Item = (usize, QuantifierMonotonicity)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, q)| q.map(|q| (i, q)))
    }

    /// XOR-combined hash of every occupied, non-trivial slot.
    ///
    /// The slot index is part of each contribution, so two identical
    /// quantifiers in different slots do not cancel.
    pub fn hash(&self) -> u64 {
        self.iter()
            .filter(|(_, q)| !q.is_trivial_existential())
            .fold(0, |acc, (slot, q)| {
                acc ^ mix(((slot as u64) << 32) | q.pack() as u64)
            })
    }
}
