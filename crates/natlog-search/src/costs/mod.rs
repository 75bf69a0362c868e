//! Edit cost model.
//!
//! Every edit (mutation, insertion, deletion) is priced as a lexical cost
//! for the kind of edit plus a transition cost for the projected relation.
//! The transition table is chosen by the truth value the state must have
//! had *before* the edit, recovered with
//! [`reverse_transition`](natlog_core::reverse_transition).

#[cfg(test)]
mod tests;

use natlog_config::{ConfigError, CostConfig, InvalidInputPolicy};
use natlog_core::{
    reverse_transition, DepLabel, MutationType, NatlogRelation, Result, Word,
    NUM_DEPENDENCY_LABELS, NUM_MUTATION_TYPES, NUM_RELATIONS,
};

use crate::node::SearchNode;
use crate::tree::Tree;

/// Price of one edit and the truth value it starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditCost {
    pub cost: f32,
    /// Truth of the state before the edit, given the requested end truth.
    pub start_truth: bool,
}

/// Cost tables for every edit kind and truth transition.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCosts {
    pub mutation_lexical_cost: [f32; NUM_MUTATION_TYPES],
    pub insertion_lexical_cost: [f32; NUM_DEPENDENCY_LABELS],
    pub deletion_lexical_cost: [f32; NUM_DEPENDENCY_LABELS],
    pub transition_cost_from_true: [f32; NUM_RELATIONS],
    pub transition_cost_from_false: [f32; NUM_RELATIONS],
    /// Applied to corrupt codes reaching the raw-code entry points.
    pub invalid_input: InvalidInputPolicy,
}

impl SearchCosts {
    /// The reference cost table.
    ///
    /// Every lexical cost is `small_constant_cost` except the fishy
    /// mutation types, which cost `bad_cost`. Transitions cost `ok_cost`
    /// or `bad_cost` depending on the relation and the starting truth.
    pub fn strict(small_constant_cost: f32, ok_cost: f32, bad_cost: f32) -> Self {
        let mut mutation_lexical_cost = [small_constant_cost; NUM_MUTATION_TYPES];
        for mutation in MutationType::ALL {
            if mutation.is_fishy() {
                mutation_lexical_cost[mutation.index()] = bad_cost;
            }
        }

        let from_true = |relation: NatlogRelation| match relation {
            NatlogRelation::Equivalent
            | NatlogRelation::ForwardEntailment
            | NatlogRelation::Negation
            | NatlogRelation::Alternation => ok_cost,
            NatlogRelation::ReverseEntailment
            | NatlogRelation::Cover
            | NatlogRelation::Independence => bad_cost,
        };
        let from_false = |relation: NatlogRelation| match relation {
            NatlogRelation::Equivalent
            | NatlogRelation::ReverseEntailment
            | NatlogRelation::Negation
            | NatlogRelation::Cover => ok_cost,
            NatlogRelation::ForwardEntailment
            | NatlogRelation::Alternation
            | NatlogRelation::Independence => bad_cost,
        };

        Self {
            mutation_lexical_cost,
            insertion_lexical_cost: [small_constant_cost; NUM_DEPENDENCY_LABELS],
            deletion_lexical_cost: [small_constant_cost; NUM_DEPENDENCY_LABELS],
            transition_cost_from_true: NatlogRelation::ALL.map(from_true),
            transition_cost_from_false: NatlogRelation::ALL.map(from_false),
            invalid_input: InvalidInputPolicy::default(),
        }
    }

    /// Sets how corrupt edge-type codes are handled.
    pub fn with_invalid_input(mut self, policy: InvalidInputPolicy) -> Self {
        self.invalid_input = policy;
        self
    }

    /// The reference table at the configured cost levels.
    pub fn from_config(config: &CostConfig) -> Self {
        Self::strict(config.small_constant_cost, config.ok_cost, config.bad_cost)
    }

    /// Checks that every entry is finite and non-negative.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let tables: [(&str, &[f32]); 5] = [
            ("mutation_lexical_cost", &self.mutation_lexical_cost),
            ("insertion_lexical_cost", &self.insertion_lexical_cost),
            ("deletion_lexical_cost", &self.deletion_lexical_cost),
            ("transition_cost_from_true", &self.transition_cost_from_true),
            ("transition_cost_from_false", &self.transition_cost_from_false),
        ];
        for (name, table) in tables {
            if let Some((i, cost)) = table
                .iter()
                .enumerate()
                .find(|(_, c)| !c.is_finite() || **c < 0.0)
            {
                return Err(ConfigError::Invalid(format!(
                    "{name}[{i}] must be finite and non-negative, got {cost}"
                )));
            }
        }
        Ok(())
    }

    /// Cost of arriving at `relation` from a state with `start_truth`.
    #[inline]
    pub fn transition_cost(&self, start_truth: bool, relation: NatlogRelation) -> f32 {
        let table = if start_truth {
            &self.transition_cost_from_true
        } else {
            &self.transition_cost_from_false
        };
        table[relation.index()]
    }

    /// Cost of mutating the node's focus token along an edge of
    /// `edge_type`, ending at `end_truth`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidProjectionInput`](natlog_core::NatlogError::InvalidProjectionInput)
    /// if `edge_type` is not a mutation-type code. Under
    /// [`InvalidInputPolicy::Panic`] that case panics instead.
    pub fn mutation_cost(
        &self,
        tree: &Tree,
        node: &SearchNode,
        edge_type: u8,
        end_truth: bool,
    ) -> Result<EditCost> {
        let mutation = self.invalid_input.enforce(MutationType::try_from(edge_type))?;
        let projected = tree.project_at_focus(node, mutation.lexical_relation());
        Ok(self.priced(
            self.mutation_lexical_cost[mutation.index()],
            projected,
            end_truth,
        ))
    }

    /// Cost of inserting `dependent` under `governor` with `label`.
    pub fn insertion_cost(
        &self,
        tree: &Tree,
        governor: &SearchNode,
        label: DepLabel,
        dependent: Word,
        end_truth: bool,
    ) -> EditCost {
        let projected = tree.project_at_focus(governor, label.insertion_relation(dependent));
        self.priced(self.insertion_lexical_cost[label.index()], projected, end_truth)
    }

    /// Cost of deleting `dependent`, attached under `governor` with
    /// `label`.
    pub fn deletion_cost(
        &self,
        tree: &Tree,
        governor: &SearchNode,
        label: DepLabel,
        dependent: Word,
        end_truth: bool,
    ) -> EditCost {
        let projected = tree.project_at_focus(governor, label.deletion_relation(dependent));
        self.priced(self.deletion_lexical_cost[label.index()], projected, end_truth)
    }

    fn priced(&self, lexical_cost: f32, projected: NatlogRelation, end_truth: bool) -> EditCost {
        let start_truth = reverse_transition(end_truth, projected);
        EditCost {
            cost: lexical_cost + self.transition_cost(start_truth, projected),
            start_truth,
        }
    }
}

impl Default for SearchCosts {
    fn default() -> Self {
        Self::from_config(&CostConfig::default())
    }
}
