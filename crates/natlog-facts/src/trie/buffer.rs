//! Fixed-capacity completion output.

use natlog_core::{Edge, Word, MAX_COMPLETIONS};

use super::Trie;

/// Output buffer for completion candidates.
///
/// Holds at most [`MAX_COMPLETIONS`] edges. When fewer are written, the
/// slot after the last one holds [`Edge::EMPTY`].
#[derive(Debug, Clone)]
pub struct CompletionBuffer {
    edges: [Edge; MAX_COMPLETIONS],
    len: usize,
}

impl CompletionBuffer {
    pub fn new() -> Self {
        Self {
            edges: [Edge::EMPTY; MAX_COMPLETIONS],
            len: 0,
        }
    }

    /// Number of candidates written.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len >= MAX_COMPLETIONS
    }

    /// The written candidates.
    pub fn as_slice(&self) -> &[Edge] {
        &self.edges[..self.len]
    }

    /// The whole backing array, including the terminator.
    pub fn raw(&self) -> &[Edge; MAX_COMPLETIONS] {
        &self.edges
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.as_slice().iter()
    }

    /// Forgets every candidate.
    pub fn clear(&mut self) {
        self.len = 0;
        self.terminate();
    }

    /// Writes the sentinel after the last candidate, if there is room.
    pub fn terminate(&mut self) {
        if let Some(slot) = self.edges.get_mut(self.len) {
            *slot = Edge::EMPTY;
        }
    }

    /// Appends the recorded edges of `child`, re-sourced to `word`, until
    /// the buffer is full.
    pub(crate) fn push_completions(&mut self, child: &Trie, word: Word) {
        for edge in child.edges() {
            if self.is_full() {
                break;
            }
            self.edges[self.len] = Edge {
                source: word,
                ..*edge
            };
            self.len += 1;
        }
    }
}

impl Default for CompletionBuffer {
    fn default() -> Self {
        Self::new()
    }
}
