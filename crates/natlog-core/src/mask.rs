//! Bitset of deleted token indices.

use std::ops::{BitOr, BitOrAssign};

/// Set of token indices marked as deleted. Covers every index below
/// [`ABSENT`](crate::ABSENT).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeleteMask {
    bits: [u64; 4],
}

impl DeleteMask {
    /// The empty mask.
    pub const EMPTY: DeleteMask = DeleteMask { bits: [0; 4] };

    /// A mask containing only `index`.
    pub fn single(index: u8) -> Self {
        let mut mask = Self::EMPTY;
        mask.insert(index);
        mask
    }

    /// Marks `index` as deleted. Returns true if it was not already marked.
    #[inline]
    pub fn insert(&mut self, index: u8) -> bool {
        let (word, bit) = Self::locate(index);
        let was_set = self.bits[word] & bit != 0;
        self.bits[word] |= bit;
        !was_set
    }

    /// Returns true if `index` is marked as deleted.
    #[inline]
    pub fn contains(&self, index: u8) -> bool {
        let (word, bit) = Self::locate(index);
        self.bits[word] & bit != 0
    }

    /// Indices marked here but not in `other`.
    pub fn difference(&self, other: &DeleteMask) -> DeleteMask {
        let mut bits = self.bits;
        for (lhs, rhs) in bits.iter_mut().zip(other.bits) {
            *lhs &= !rhs;
        }
        DeleteMask { bits }
    }

    /// Returns true if no index is marked.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// Number of marked indices.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterates over marked indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&i| self.contains(i))
    }

    #[inline]
    fn locate(index: u8) -> (usize, u64) {
        ((index >> 6) as usize, 1u64 << (index & 63))
    }
}

impl BitOr for DeleteMask {
    type Output = DeleteMask;

    fn bitor(mut self, rhs: DeleteMask) -> DeleteMask {
        self |= rhs;
        self
    }
}

impl BitOrAssign for DeleteMask {
    fn bitor_assign(&mut self, rhs: DeleteMask) {
        for (lhs, rhs) in self.bits.iter_mut().zip(rhs.bits) {
            *lhs |= rhs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut mask = DeleteMask::EMPTY;
        assert!(mask.insert(3));
        assert!(!mask.insert(3));
        assert!(mask.insert(200));
        assert!(mask.contains(3));
        assert!(mask.contains(200));
        assert!(!mask.contains(4));
        assert_eq!(mask.len(), 2);
        assert_eq!(mask.iter().collect::<Vec<_>>(), vec![3, 200]);
    }

    #[test]
    fn test_union_accumulates() {
        let a = DeleteMask::single(1);
        let b = DeleteMask::single(70);
        let both = a | b;
        assert!(both.contains(1) && both.contains(70));
        assert_eq!(both | a, both);
        assert_eq!(both.difference(&a), b);
        assert!(a.difference(&both).is_empty());
    }
}
