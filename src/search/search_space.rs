use crate::search::{HeuristicValue, NodeId, Plan, SearchNode, NO_NODE};
use segvec::{Linear, SegVec};

/// A [`SearchSpace`] owns every node generated during one search. Nodes are
/// never removed, so a node id stays valid for the lifetime of the space and
/// the path to any node can be recovered from parent links.
///
/// A state reached along several paths gets one node per path; deduplication
/// is the job of the engine's explored set and cost map.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    nodes: SegVec<SearchNode<S, A>, Linear>,
}

impl<S, A: Clone> SearchSpace<S, A> {
    pub fn new(initial_state: S, initial_h: HeuristicValue) -> Self {
        let mut nodes = SegVec::new();
        nodes.push(SearchNode::new_without_parent(
            NodeId::new(0),
            initial_state,
            initial_h,
        ));
        Self { nodes }
    }

    pub fn insert_node(
        &mut self,
        state: S,
        action: A,
        parent_id: NodeId,
        g: HeuristicValue,
        h: HeuristicValue,
    ) -> &SearchNode<S, A> {
        let node_id = NodeId::new(self.nodes.len());
        let node = SearchNode::new_with_parent(node_id, state, self.get_node(parent_id), action, g, h);
        self.nodes.push(node);
        self.get_node(node_id)
    }

    pub fn extract_plan(&self, goal_id: NodeId) -> Plan<A> {
        let mut steps = vec![];
        let mut current_node = self.get_node(goal_id);
        while NO_NODE != current_node.get_parent_id() {
            if let Some(action) = current_node.get_action() {
                steps.push(action.clone());
            }
            current_node = self.get_node(current_node.get_parent_id());
        }
        steps.reverse();
        Plan::new(steps)
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode<S, A> {
        self.get_node(NodeId::new(0))
    }

    /// Panics if the id was not handed out by this space.
    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S, A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.get_node(node_id).get_state()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }
}
