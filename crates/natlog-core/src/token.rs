//! Token and edge value types.

/// A word identifier. Word 0 is reserved and marks empty slots.
pub type Word = u32;

/// A word together with its sense tag.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct TaggedWord {
    pub word: Word,
    pub sense: u8,
}

impl TaggedWord {
    /// Creates a tagged word.
    #[inline]
    pub const fn new(word: Word, sense: u8) -> Self {
        Self { word, sense }
    }
}

/// One step of a fact chain, or one mutation edge between two words.
///
/// An edge with `source == 0` is the empty sentinel used to terminate
/// completion buffers.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edge {
    pub source: Word,
    pub source_sense: u8,
    pub sink: Word,
    pub sink_sense: u8,
    pub edge_type: u8,
    pub cost: f32,
}

impl Edge {
    /// The empty sentinel edge.
    pub const EMPTY: Edge = Edge {
        source: 0,
        source_sense: 0,
        sink: 0,
        sink_sense: 0,
        edge_type: 0,
        cost: 0.0,
    };

    /// Creates a plain fact edge for a word with no sense information.
    pub fn fact(source: Word) -> Self {
        Self {
            source,
            cost: 1.0,
            ..Self::EMPTY
        }
    }

    /// Creates a mutation edge from `source` to `sink`.
    pub fn mutation(source: TaggedWord, sink: TaggedWord, edge_type: u8, cost: f32) -> Self {
        Self {
            source: source.word,
            source_sense: source.sense,
            sink: sink.word,
            sink_sense: sink.sense,
            edge_type,
            cost,
        }
    }

    /// Returns the source as a tagged word.
    #[inline]
    pub fn source_token(&self) -> TaggedWord {
        TaggedWord::new(self.source, self.source_sense)
    }

    /// Returns the sink as a tagged word.
    #[inline]
    pub fn sink_token(&self) -> TaggedWord {
        TaggedWord::new(self.sink, self.sink_sense)
    }

    /// Returns true for the empty sentinel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source == 0
    }
}
