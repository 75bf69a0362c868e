//! Fact sources.

use std::io::BufRead;

use tracing::warn;

use crate::error::FactLoadError;

/// One row of the fact table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactRecord {
    /// Comma-separated word ids after one leading throwaway character.
    pub gloss: String,
    /// Popularity count.
    pub weight: u32,
}

impl FactRecord {
    pub fn new(gloss: impl Into<String>, weight: u32) -> Self {
        Self {
            gloss: gloss.into(),
            weight,
        }
    }
}

/// A stream of fact records, read once in order.
///
/// Sources are expected to yield records by descending weight. Any
/// iterator over record results is a source.
pub trait FactSource: Iterator<Item = Result<FactRecord, FactLoadError>> {}

impl<I> FactSource for I where I: Iterator<Item = Result<FactRecord, FactLoadError>> {}

/// Reads `gloss<TAB>weight` lines.
///
/// Blank lines are skipped. Malformed lines are reported and skipped; read
/// failures end the stream with [`FactLoadError::Io`].
#[derive(Debug)]
pub struct TsvFactSource<R> {
    reader: R,
    line: String,
    line_number: u64,
    failed: bool,
}

impl<R: BufRead> TsvFactSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_number: 0,
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for TsvFactSource<R> {
    type Item = Result<FactRecord, FactLoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => {
                    self.failed = true;
                    return Some(Err(FactLoadError::Io(err)));
                }
            }
            self.line_number += 1;

            let line = self.line.trim_end_matches(['\n', '\r']);
            if line.is_empty() {
                continue;
            }
            let parsed = line
                .rsplit_once('\t')
                .and_then(|(gloss, weight)| Some((gloss, weight.trim().parse::<u32>().ok()?)));
            match parsed {
                Some((gloss, weight)) => return Some(Ok(FactRecord::new(gloss, weight))),
                None => warn!(
                    event = "malformed_fact_row",
                    line = self.line_number,
                    "expected gloss and weight"
                ),
            }
        }
    }
}

/// In-memory fact source.
#[derive(Debug, Clone, Default)]
pub struct VecFactSource {
    records: std::vec::IntoIter<FactRecord>,
}

impl VecFactSource {
    pub fn new(records: Vec<FactRecord>) -> Self {
        Self {
            records: records.into_iter(),
        }
    }
}

impl FromIterator<FactRecord> for VecFactSource {
    fn from_iter<T: IntoIterator<Item = FactRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Iterator for VecFactSource {
    type Item = Result<FactRecord, FactLoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(Ok)
    }
}
