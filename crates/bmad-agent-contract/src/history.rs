//! Append-only execution history with an optional retention cap.

use serde::{Deserialize, Serialize};

use crate::result::ExecutionResult;

/// Ordered record of every result an agent has produced.
///
/// Entries can only be appended. With a `limit`, appending beyond it drops
/// the oldest entries first; without one the history grows for the lifetime
/// of the owning agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionHistory {
    entries: Vec<ExecutionResult>,
    limit: Option<usize>,
}

impl ExecutionHistory {
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// History keeping at most `limit` entries. A limit of zero keeps nothing.
    pub fn bounded(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append `result`, returning how many old entries were evicted.
    pub fn push(&mut self, result: ExecutionResult) -> usize {
        self.entries.push(result);
        match self.limit {
            Some(limit) if self.entries.len() > limit => {
                let excess = self.entries.len() - limit;
                self.entries.drain(..excess);
                excess
            }
            _ => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&ExecutionResult> {
        self.entries.last()
    }

    pub fn as_slice(&self) -> &[ExecutionResult] {
        &self.entries
    }

    /// Owned copy; later appends do not show up in it.
    pub fn to_vec(&self) -> Vec<ExecutionResult> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capability;

    fn result(n: u32) -> ExecutionResult {
        ExecutionResult::succeeded(format!("agent-{n}"), Capability::Analysis, 0.5)
    }

    #[test]
    fn test_unbounded_keeps_everything_in_order() {
        let mut history = ExecutionHistory::unbounded();
        for n in 0..5 {
            assert_eq!(history.push(result(n)), 0);
        }
        let ids: Vec<&str> = history.as_slice().iter().map(|r| r.agent_id.as_str()).collect();
        assert_eq!(ids, vec!["agent-0", "agent-1", "agent-2", "agent-3", "agent-4"]);
    }

    #[test]
    fn test_bounded_evicts_oldest_first() {
        let mut history = ExecutionHistory::bounded(2);
        history.push(result(1));
        history.push(result(2));
        let evicted = history.push(result(3));

        assert_eq!(evicted, 1);
        assert_eq!(history.len(), 2);
        assert_eq!(history.as_slice()[0].agent_id, "agent-2");
        assert_eq!(history.last().unwrap().agent_id, "agent-3");
    }

    #[test]
    fn test_zero_limit_keeps_nothing() {
        let mut history = ExecutionHistory::bounded(0);
        assert_eq!(history.push(result(1)), 1);
        assert!(history.is_empty());
    }

    #[test]
    fn test_to_vec_is_detached_copy() {
        let mut history = ExecutionHistory::unbounded();
        history.push(result(1));
        let mut copy = history.to_vec();
        copy.clear();
        assert_eq!(history.len(), 1);
    }
}
