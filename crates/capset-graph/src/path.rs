//! Ancestor stack handed to fold callbacks.

use std::sync::Arc;

use crate::NodeId;

#[derive(Debug)]
struct Frame {
    node: NodeId,
    parent: Option<Arc<Frame>>,
    depth: usize,
}

/// Immutable stack of node ids from the fold's start node down to the
/// node being visited. Pushing shares the tail, so clones are cheap and
/// sibling subtrees never see each other's frames.
#[derive(Clone, Debug)]
pub struct PathStack {
    top: Arc<Frame>,
}

impl PathStack {
    pub(crate) fn start(node: NodeId) -> Self {
        Self {
            top: Arc::new(Frame {
                node,
                parent: None,
                depth: 1,
            }),
        }
    }

    pub(crate) fn push(&self, node: NodeId) -> Self {
        Self {
            top: Arc::new(Frame {
                node,
                parent: Some(Arc::clone(&self.top)),
                depth: self.top.depth + 1,
            }),
        }
    }

    /// The node being visited.
    pub fn current(&self) -> NodeId {
        self.top.node
    }

    /// Parent of the current node, if it is not the start node.
    pub fn parent(&self) -> Option<NodeId> {
        self.top.parent.as_ref().map(|p| p.node)
    }

    /// Number of nodes on the stack; the start node has depth 1.
    pub fn depth(&self) -> usize {
        self.top.depth
    }

    /// Current node first, start node last.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(self.top.as_ref()), |f| f.parent.as_deref()).map(|f| f.node)
    }

    /// Start node first.
    pub fn to_vec(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.iter().collect();
        nodes.reverse();
        nodes
    }
}
