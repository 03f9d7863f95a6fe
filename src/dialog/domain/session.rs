//! Table of active flows keyed by operator.

use chrono::{DateTime, TimeDelta, Utc};
use std::collections::{BTreeMap, HashMap};

use super::{FlowKind, FlowState, InputKind};
use crate::task::domain::OperatorId;

/// A flow waiting for operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveFlow {
    /// Current state.
    pub state: FlowState,
    /// Last time the flow started or advanced.
    pub touched_at: DateTime<Utc>,
}

/// Active flows of every operator.
///
/// Each operator holds at most one flow per [`FlowKind`]; flows of different
/// kinds coexist independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionTable {
    operators: HashMap<OperatorId, BTreeMap<FlowKind, ActiveFlow>>,
}

impl SessionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state of the operator's flow of the given kind.
    #[must_use]
    pub fn state(&self, operator: &OperatorId, kind: FlowKind) -> Option<FlowState> {
        self.operators
            .get(operator)
            .and_then(|flows| flows.get(&kind))
            .map(|flow| flow.state)
    }

    /// Returns the operator's active flow kinds in routing order.
    #[must_use]
    pub fn active_kinds(&self, operator: &OperatorId) -> Vec<FlowKind> {
        self.operators
            .get(operator)
            .map(|flows| flows.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Picks the flow that receives input of the given kind.
    ///
    /// The first active flow, in [`FlowKind`] order, whose state waits for
    /// that kind of input wins.
    #[must_use]
    pub fn route(&self, operator: &OperatorId, input: InputKind) -> Option<FlowKind> {
        self.operators.get(operator).and_then(|flows| {
            flows
                .iter()
                .find(|(_, flow)| flow.state.expects() == input)
                .map(|(kind, _)| *kind)
        })
    }

    /// Records the outcome of a transition for one flow.
    ///
    /// `Some` stores the state, replacing any previous one of the same kind;
    /// `None` ends the flow.
    pub fn apply(
        &mut self,
        operator: &OperatorId,
        kind: FlowKind,
        next: Option<FlowState>,
        at: DateTime<Utc>,
    ) {
        match next {
            Some(state) => {
                self.operators.entry(operator.clone()).or_default().insert(
                    kind,
                    ActiveFlow {
                        state,
                        touched_at: at,
                    },
                );
            }
            None => {
                self.finish(operator, kind);
            }
        }
    }

    /// Ends one flow, returning its last state.
    pub fn finish(&mut self, operator: &OperatorId, kind: FlowKind) -> Option<FlowState> {
        let flows = self.operators.get_mut(operator)?;
        let removed = flows.remove(&kind).map(|flow| flow.state);
        if flows.is_empty() {
            self.operators.remove(operator);
        }
        removed
    }

    /// Ends every flow of the operator, returning the kinds that were active.
    pub fn cancel_all(&mut self, operator: &OperatorId) -> Vec<FlowKind> {
        self.operators
            .remove(operator)
            .map(|flows| flows.into_keys().collect())
            .unwrap_or_default()
    }

    /// Ends the operator's flows idle for longer than `timeout`, returning
    /// their kinds.
    pub fn expire_idle(
        &mut self,
        operator: &OperatorId,
        now: DateTime<Utc>,
        timeout: TimeDelta,
    ) -> Vec<FlowKind> {
        let Some(flows) = self.operators.get_mut(operator) else {
            return Vec::new();
        };
        let expired: Vec<FlowKind> = flows
            .iter()
            .filter(|(_, flow)| now - flow.touched_at > timeout)
            .map(|(kind, _)| *kind)
            .collect();
        for kind in &expired {
            flows.remove(kind);
        }
        if flows.is_empty() {
            self.operators.remove(operator);
        }
        expired
    }

    /// Returns `true` when no operator has an active flow.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}
