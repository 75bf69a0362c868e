//! Programmatic tree construction.

use std::ops::Range;

use natlog_core::{
    DepLabel, QuantifierMonotonicity, QuantifierSpan, Result, Word, ABSENT,
};

use super::{Tree, TreeNode};

/// Builder for [`Tree`]s assembled in code rather than parsed.
///
/// Tokens are appended in index order. Sense, location and quantifier
/// setters apply to the most recently added token.
///
/// # Example
///
/// ```
/// use natlog_core::{DepLabel, Monotonicity, QuantifierMonotonicity, QuantifierType};
/// use natlog_search::TreeBuilder;
///
/// let all = QuantifierMonotonicity::new(
///     Monotonicity::Down,
///     QuantifierType::Additive,
///     Monotonicity::Up,
///     QuantifierType::Multiplicative,
/// );
///
/// // all cats have tails
/// let tree = TreeBuilder::new()
///     .token(10, Some(1), DepLabel::DET)
///     .with_quantifier(1..2, Some(2..4), all)
///     .token(11, Some(2), DepLabel::NSUBJ)
///     .token(12, None, DepLabel::ROOT)
///     .token(13, Some(2), DepLabel::DOBJ)
///     .build()
///     .unwrap();
///
/// assert_eq!(tree.root(), 2);
/// assert_eq!(tree.quantifier_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    nodes: Vec<TreeNode>,
    quantifiers: Vec<(QuantifierSpan, QuantifierMonotonicity)>,
}

impl TreeBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token. A `None` governor makes it the root.
    pub fn token(mut self, word: Word, governor: Option<u8>, relation: DepLabel) -> Self {
        self.nodes
            .push(TreeNode::new(word, governor.unwrap_or(ABSENT), relation));
        self
    }

    /// Sets the sense of the last token.
    pub fn with_sense(mut self, sense: u8) -> Self {
        if let Some(node) = self.nodes.last_mut() {
            node.sense = sense;
        }
        self
    }

    /// Flags the last token as a location.
    pub fn with_location(mut self) -> Self {
        if let Some(node) = self.nodes.last_mut() {
            node.is_location = true;
        }
        self
    }

    /// Registers the last token as a quantifier over `subject` and an
    /// optional `object` token range.
    pub fn with_quantifier(
        mut self,
        subject: Range<u8>,
        object: Option<Range<u8>>,
        monotonicity: QuantifierMonotonicity,
    ) -> Self {
        let Some(last) = self.nodes.len().checked_sub(1) else {
            return self;
        };
        let object = object.unwrap_or(0..0);
        let span = QuantifierSpan {
            subj_begin: subject.start,
            subj_end: subject.end,
            obj_begin: object.start,
            obj_end: object.end,
            quantifier_index: last as u8,
        };
        self.quantifiers.push((span, monotonicity));
        self
    }

    /// Validates and freezes the tree.
    ///
    /// # Errors
    ///
    /// Same as [`Tree::from_parts`].
    pub fn build(self) -> Result<Tree> {
        Tree::from_parts(self.nodes, &self.quantifiers)
    }
}
