//! Frontier containers. Every engine keeps its open entries in one of these;
//! the container alone decides the order in which entries are expanded.

use crate::search::{HeuristicValue, NodeId};
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, collections::VecDeque};

pub trait Frontier: Default {
    /// Add an entry. Containers that expand in insertion order ignore
    /// `priority`.
    fn push(&mut self, node_id: NodeId, priority: HeuristicValue);

    /// Remove and return the entry to expand next.
    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node_id: NodeId, _priority: HeuristicValue) {
        self.queue.push_back(node_id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl Frontier for LifoFrontier {
    fn push(&mut self, node_id: NodeId, _priority: HeuristicValue) {
        self.stack.push(node_id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Lowest priority first. Entries of equal priority come out in the order
/// they went in: each entry carries a sequence number that is compared after
/// the priority, so the order never depends on how the underlying queue
/// breaks ties.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    queue: PriorityQueue<NodeId, Reverse<(HeuristicValue, u64)>>,
    next_sequence: u64,
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node_id: NodeId, priority: HeuristicValue) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue.push(node_id, Reverse((priority, sequence)));
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(node_id, _)| node_id)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
