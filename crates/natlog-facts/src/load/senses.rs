//! Word-sense table.

use std::collections::HashMap;
use std::io::BufRead;

use natlog_core::{Edge, Word};
use tracing::warn;

use crate::error::FactLoadError;

/// Sense-tagged edges per base word.
///
/// The first edge registered for a word is its canonical sense; the rest
/// are alternates. Facts are indexed once with canonical senses and once
/// more per alternate sense.
#[derive(Debug, Clone, Default)]
pub struct WordSenseTable {
    senses: HashMap<Word, Vec<Edge>>,
}

impl WordSenseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a sense edge under its source word.
    pub fn insert(&mut self, edge: Edge) {
        self.senses.entry(edge.source).or_default().push(edge);
    }

    /// Registers `sense` of `word`, reached through an edge of `edge_type`.
    pub fn register(&mut self, word: Word, sense: u8, edge_type: u8) {
        self.insert(Edge {
            source: word,
            source_sense: sense,
            edge_type,
            ..Edge::fact(word)
        });
    }

    /// Every sense edge for `word`, canonical first.
    pub fn senses(&self, word: Word) -> &[Edge] {
        self.senses
            .get(&word)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of words with sense information.
    pub fn len(&self) -> usize {
        self.senses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }

    /// Reads `word<TAB>sense<TAB>edge_type` lines.
    ///
    /// Malformed lines are reported and skipped.
    pub fn from_tsv<R: BufRead>(reader: R) -> Result<Self, FactLoadError> {
        let mut table = Self::new();
        for (line_number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_sense_row(&line) {
                Some((word, sense, edge_type)) if word != 0 => {
                    table.register(word, sense, edge_type)
                }
                _ => warn!(
                    event = "malformed_sense_row",
                    line = line_number + 1,
                    "expected word, sense and edge type"
                ),
            }
        }
        Ok(table)
    }
}

fn parse_sense_row(line: &str) -> Option<(Word, u8, u8)> {
    let mut fields = line.split('\t').map(str::trim);
    let word = fields.next()?.parse().ok()?;
    let sense = fields.next()?.parse().ok()?;
    let edge_type = fields.next()?.parse().ok()?;
    Some((word, sense, edge_type))
}

impl FromIterator<Edge> for WordSenseTable {
    fn from_iter<T: IntoIterator<Item = Edge>>(iter: T) -> Self {
        let mut table = Self::new();
        for edge in iter {
            table.insert(edge);
        }
        table
    }
}
