//! Hierarchy construction.
//!
//! Items are partitioned recursively: each item in turn claims every other
//! still-unclaimed item it is provably a strict superset of, then the claimed
//! bucket is partitioned the same way to find grandchildren. An edge is
//! only ever created from a definite `True`. Indecisive pairs end up as
//! siblings, which flattens the tree but never corrupts it.

use std::collections::BTreeSet;
use std::fmt;

use capset_algebra::Tri;
use tracing::{debug, instrument, trace};

use crate::CapabilityProfile;

/// Index of a node in a [`HierarchyGraph`]'s arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct HierarchyNode<P> {
    payload: Option<P>,
    children: Vec<NodeId>,
}

impl<P> HierarchyNode<P> {
    /// `None` only for the synthetic root.
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Direct strict subsets, in input order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_synthetic_root(&self) -> bool {
        self.payload.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HierarchyOptions {
    /// Group the top-level items under one payload-less root.
    pub wrap_in_root: bool,
}

impl Default for HierarchyOptions {
    fn default() -> Self {
        Self { wrap_in_root: true }
    }
}

/// Forest of profiles ordered by capability containment. Read-only once built.
#[derive(Clone, Debug)]
pub struct HierarchyGraph<P> {
    nodes: Vec<HierarchyNode<P>>,
    roots: Vec<NodeId>,
}

/// A working-array entry. `built` entries already carry their subtree and
/// are only ever claimed, never re-partitioned.
#[derive(Clone, Copy)]
struct Slot {
    id: NodeId,
    built: bool,
}

impl<P: CapabilityProfile> HierarchyGraph<P> {
    #[instrument(skip_all, fields(items = items.len()))]
    pub fn build(items: Vec<P>, options: HierarchyOptions) -> Self {
        let mut graph = Self {
            nodes: items
                .into_iter()
                .map(|p| HierarchyNode {
                    payload: Some(p),
                    children: Vec::new(),
                })
                .collect(),
            roots: Vec::new(),
        };

        let mut slots: Vec<Option<Slot>> = (0..graph.nodes.len())
            .map(|i| {
                Some(Slot {
                    id: NodeId(i),
                    built: false,
                })
            })
            .collect();
        graph.partition(&mut slots, 0);
        let top: Vec<NodeId> = slots.into_iter().flatten().map(|s| s.id).collect();
        debug!(roots = top.len(), "hierarchy built");

        graph.roots = if options.wrap_in_root {
            let root = NodeId(graph.nodes.len());
            graph.nodes.push(HierarchyNode {
                payload: None,
                children: top,
            });
            vec![root]
        } else {
            top
        };
        graph
    }

    fn partition(&mut self, slots: &mut [Option<Slot>], level: usize) {
        for it in 0..slots.len() {
            let master = match slots[it] {
                Some(s) if !s.built => s.id,
                _ => continue,
            };

            let mut bucket: Vec<Option<Slot>> = vec![None; slots.len()];
            for it2 in 0..slots.len() {
                if it2 == it {
                    continue;
                }
                if let Some(other) = slots[it2] {
                    // equivalent items stay siblings
                    if self.is_superset(master, other.id).is_true()
                        && !self.is_superset(other.id, master).is_true()
                    {
                        bucket[it2] = slots[it2].take();
                    }
                }
            }
            trace!(
                level,
                node = %master,
                claimed = bucket.iter().flatten().count(),
                "partitioned"
            );

            self.partition(&mut bucket, level + 1);
            self.nodes[master.0].children = bucket.into_iter().flatten().map(|s| s.id).collect();
            slots[it] = Some(Slot {
                id: master,
                built: true,
            });
        }
    }

    /// Whether `i` provably holds everything `j` holds.
    ///
    /// When both declare a capability set, a definite answer from the sets
    /// is final. Otherwise the names decide: every name of `j` and of its
    /// current descendants must be declared by `i`, and `i` must declare
    /// something more. This assumes feature sets grow monotonically. A
    /// missing name is not taken as proof of anything, so the heuristic
    /// answers `True` or `Unknown`, never `False`.
    pub fn is_superset(&self, i: NodeId, j: NodeId) -> Tri {
        let (Some(pi), Some(pj)) = (self.payload(i), self.payload(j)) else {
            return Tri::Unknown;
        };
        if let (Some(si), Some(sj)) = (pi.declared_set(), pj.declared_set()) {
            let answer = si.contains_set(sj);
            if !answer.is_unknown() {
                return answer;
            }
        }

        let mine = pi.capability_names();
        let theirs = self.subtree_names(j);
        if theirs.iter().all(|n| mine.contains(*n)) && mine.len() > theirs.len() {
            Tri::True
        } else {
            Tri::Unknown
        }
    }

    /// The nodes among `candidates` that are strict subsets of `node`.
    pub fn find_subsets(&self, node: NodeId, candidates: impl IntoIterator<Item = NodeId>) -> Vec<NodeId> {
        candidates
            .into_iter()
            .filter(|&c| {
                c != node
                    && self.is_superset(node, c).is_true()
                    && !self.is_superset(c, node).is_true()
            })
            .collect()
    }

    /// Each provably holds the other.
    pub fn equivalent(&self, a: NodeId, b: NodeId) -> bool {
        self.is_superset(a, b).is_true() && self.is_superset(b, a).is_true()
    }

    fn subtree_names(&self, id: NodeId) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            let node = &self.nodes[n.0];
            if let Some(p) = &node.payload {
                names.extend(p.capability_names().iter().map(String::as_str));
            }
            stack.extend(node.children.iter().copied());
        }
        names
    }
}

impl<P> HierarchyGraph<P> {
    /// Top-level nodes: the synthetic root alone when wrapped.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// The synthetic root, if the graph was wrapped.
    pub fn root(&self) -> Option<NodeId> {
        match self.roots.as_slice() {
            [only] if self.nodes[only.0].payload.is_none() => Some(*only),
            _ => None,
        }
    }

    /// Panics if `id` did not come from this graph.
    pub fn node(&self, id: NodeId) -> &HierarchyNode<P> {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&HierarchyNode<P>> {
        self.nodes.get(id.0)
    }

    pub fn payload(&self, id: NodeId) -> Option<&P> {
        self.nodes.get(id.0).and_then(|n| n.payload.as_ref())
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id.0).map_or(&[], |n| n.children.as_slice())
    }

    /// Node count, synthetic root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids in arena order: input items first, then the synthetic root.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }
}
