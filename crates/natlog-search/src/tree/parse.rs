//! CoNLL-style tree parsing.
//!
//! One token per non-empty line, tab separated:
//!
//! | field | content                                   |
//! |-------|-------------------------------------------|
//! | 0     | word id                                   |
//! | 1     | governor, 1-based; 0 is the root          |
//! | 2     | dependency label                          |
//! | 3     | word sense                                |
//! | 4     | subject monotonicity marker, or `-`       |
//! | 5     | subject span `begin-end`, or `-`          |
//! | 6     | object monotonicity marker, or `-`        |
//! | 7     | object span `begin-end`, or `-`           |
//! | 8     | flags (`l` / `L`: location)               |
//!
//! Lines carry 3, 8 or 9 fields. Malformed content is reported through
//! `tracing` and replaced with a safe default; only structural problems
//! (no root, bad governor, too many tokens) fail the parse.

use natlog_core::logic::parse_marker;
use natlog_core::{
    DepLabel, Monotonicity, NatlogError, QuantifierMonotonicity, QuantifierSpan, QuantifierType,
    Result, Word, ABSENT, MAX_TOKEN_COUNT,
};
use tracing::{debug, warn};

use super::{Tree, TreeNode};

impl Tree {
    /// Parses a tree from its tab-separated serialization.
    ///
    /// # Errors
    ///
    /// Fails if the record has more than [`MAX_TOKEN_COUNT`] tokens, a
    /// governor points outside the tree, or there is not exactly one root.
    pub fn from_conll(conll: &str) -> Result<Self> {
        let lines: Vec<&str> = conll.lines().filter(|line| !line.is_empty()).collect();
        if lines.len() > MAX_TOKEN_COUNT {
            return Err(NatlogError::TreeTooLong {
                length: lines.len(),
                max: MAX_TOKEN_COUNT,
            });
        }

        let mut nodes = Vec::with_capacity(lines.len());
        let mut quantifiers = Vec::new();
        for (line_index, line) in lines.iter().enumerate() {
            let index = line_index as u8;
            let record = parse_line(index, line, lines.len())?;
            nodes.push(record.node);
            if let Some(quantifier) = record.quantifier {
                quantifiers.push(quantifier);
            }
        }

        let tree = Self::from_parts(nodes, &quantifiers)?;
        debug!(
            event = "tree_parsed",
            tokens = tree.len(),
            quantifiers = tree.quantifier_count(),
            root = tree.root(),
        );
        Ok(tree)
    }
}

struct ParsedLine {
    node: TreeNode,
    quantifier: Option<(QuantifierSpan, QuantifierMonotonicity)>,
}

fn parse_line(index: u8, line: &str, length: usize) -> Result<ParsedLine> {
    let fields: Vec<&str> = line.split('\t').collect();
    if !matches!(fields.len(), 3 | 8 | 9) {
        warn!(
            event = "malformed_line",
            line = index,
            fields = fields.len(),
            "expected 3, 8 or 9 CoNLL fields"
        );
    }
    let field = |i: usize| fields.get(i).copied();

    let word: Word = field(0).map_or(0, |f| parse_number(index, "word", f));
    let governor = match field(1).map_or(0, |f| parse_number::<usize>(index, "governor", f)) {
        0 => ABSENT,
        g if g > length => {
            return Err(NatlogError::GovernorOutOfRange {
                index,
                governor: g - 1,
            })
        }
        g => (g - 1) as u8,
    };
    let relation = field(2).map_or(DepLabel::DEP, |name| {
        DepLabel::from_name(name).unwrap_or_else(|| {
            warn!(event = "unknown_label", line = index, label = name, "assuming dep");
            DepLabel::DEP
        })
    });
    let sense: u8 = field(3).map_or(0, |f| parse_number(index, "sense", f));

    let mut node = TreeNode::new(word, governor, relation);
    node.sense = sense;

    let subject_marker = field(4).filter(|f| is_present(f));
    let quantifier = subject_marker.map(|marker| {
        let (subj_mono, subj_type) = parse_monotonicity(index, marker);
        let (subj_begin, subj_end) = field(5)
            .filter(|f| is_present(f))
            .map_or((0, 0), |f| parse_span(index, f));
        let (obj_mono, obj_type) = field(6)
            .filter(|f| is_present(f))
            .map_or((Monotonicity::Flat, QuantifierType::None), |f| {
                parse_monotonicity(index, f)
            });
        let (obj_begin, obj_end) = field(7)
            .filter(|f| is_present(f))
            .map_or((0, 0), |f| parse_span(index, f));
        let span = QuantifierSpan {
            subj_begin,
            subj_end,
            obj_begin,
            obj_end,
            quantifier_index: index,
        };
        (
            span,
            QuantifierMonotonicity::new(subj_mono, subj_type, obj_mono, obj_type),
        )
    });

    if let Some(flags) = field(8) {
        for flag in flags.chars() {
            match flag {
                'l' | 'L' => node.is_location = true,
                other => warn!(event = "invalid_flag", line = index, flag = %other, "ignoring flag"),
            }
        }
    }

    Ok(ParsedLine { node, quantifier })
}

#[inline]
fn is_present(field: &str) -> bool {
    !field.is_empty() && !field.starts_with('-')
}

fn parse_number<T: std::str::FromStr + Default>(line: u8, name: &'static str, field: &str) -> T {
    field.trim().parse().unwrap_or_else(|_| {
        warn!(event = "malformed_field", line, field = name, value = field, "assuming 0");
        T::default()
    })
}

fn parse_monotonicity(line: u8, marker: &str) -> (Monotonicity, QuantifierType) {
    parse_marker(marker).unwrap_or_else(|| {
        warn!(
            event = "unknown_monotonicity",
            line,
            marker,
            "assuming nonmonotone"
        );
        (Monotonicity::Flat, QuantifierType::None)
    })
}

/// Parses `begin-end` into a 0-based half-open range.
fn parse_span(line: u8, field: &str) -> (u8, u8) {
    let mut bounds = field.splitn(2, '-').map(|bound| {
        parse_number::<u16>(line, "span", bound).saturating_sub(1).min(u8::MAX as u16) as u8
    });
    let begin = bounds.next().unwrap_or(0);
    let end = bounds.next().unwrap_or(begin);
    (begin, end)
}
