use crate::search::HeuristicValue;

/// Index of a node in a [`SearchSpace`](crate::search::SearchSpace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchNode`] is one entry that has been put on the frontier: the state
/// it reaches, the parent entry it was generated from and the action that was
/// applied there. Following the parent links back to the root yields the path
/// of the entry.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    node_id: NodeId,
    state: S,
    /// Action that led to this node, `None` only for the root.
    action: Option<A>,
    parent_id: NodeId,
    /// G-value of the node. For engines that ignore step costs this is the
    /// number of actions from the root.
    g: HeuristicValue,
    /// H-value of the node. Zero for uninformed engines.
    h: HeuristicValue,
    /// Number of actions from the root.
    depth: usize,
}

impl<S, A> SearchNode<S, A> {
    /// Create the root node of a search space, see
    /// [`SearchNode::new_with_parent`] for all other nodes.
    pub fn new_without_parent(node_id: NodeId, state: S, h: HeuristicValue) -> Self {
        Self {
            node_id,
            state,
            action: None,
            parent_id: NO_NODE,
            g: (0.).into(),
            h,
            depth: 0,
        }
    }

    pub fn new_with_parent(
        node_id: NodeId,
        state: S,
        parent: &SearchNode<S, A>,
        action: A,
        g: HeuristicValue,
        h: HeuristicValue,
    ) -> Self {
        Self {
            node_id,
            state,
            action: Some(action),
            parent_id: parent.node_id,
            g,
            h,
            depth: parent.depth + 1,
        }
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.g + self.h
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }
}
