//! Views derived from a hierarchy by folding it.
//!
//! Both views share one splicing rule: a node that is not kept disappears
//! and its kept descendants take its place in the parent's child list.

use tracing::{debug, instrument};

use crate::fold::{fold, fold_async};
use crate::{HierarchyGraph, NodeId, PathStack, Requirements, SatisfactionResult};

/// A node of a derived view. `shadow` points back into the hierarchy the
/// view was derived from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedNode<V> {
    pub shadow: NodeId,
    pub verdict: V,
    pub children: Vec<DerivedNode<V>>,
}

impl<V> DerivedNode<V> {
    pub fn payload<'g, P>(&self, graph: &'g HierarchyGraph<P>) -> Option<&'g P> {
        graph.payload(self.shadow)
    }

    /// Shadow ids of this node and its descendants, pre-order.
    pub fn shadows(&self) -> Vec<NodeId> {
        let mut out = vec![self.shadow];
        for child in &self.children {
            out.extend(child.shadows());
        }
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterOptions {
    /// Splice out profiles that fail instead of keeping them with their verdict.
    pub hide_unsupported: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            hide_unsupported: true,
        }
    }
}

/// Keeps the profiles that satisfy `requirements`.
///
/// Every profile is checked; only the synthetic root is spliced
/// unchecked. Sibling subtrees are checked concurrently.
#[instrument(skip_all, fields(hide_unsupported = options.hide_unsupported))]
pub async fn filtered_view<P, Q>(
    graph: &HierarchyGraph<P>,
    requirements: &Q,
    options: FilterOptions,
) -> Vec<DerivedNode<SatisfactionResult>>
where
    P: Sync,
    Q: Requirements<P> + ?Sized,
{
    let step = move |path: PathStack, children: Vec<Vec<DerivedNode<SatisfactionResult>>>| async move {
        let children: Vec<_> = children.into_iter().flatten().collect();
        let id = path.current();
        let Some(profile) = graph.payload(id) else {
            return children;
        };

        let verdict = requirements.satisfied_by(profile).await;
        if verdict.is_ok() || !options.hide_unsupported {
            debug!(node = %id, %verdict, "kept");
            vec![DerivedNode {
                shadow: id,
                verdict,
                children,
            }]
        } else {
            debug!(node = %id, %verdict, "spliced");
            children
        }
    };

    let mut view = Vec::new();
    for &root in graph.roots() {
        view.extend(fold_async(graph, root, &step).await);
    }
    view
}

/// Collapses single-child chains: a node survives only when its flattened
/// child list does not have exactly one entry.
pub fn simplified_view<P: Sync>(graph: &HierarchyGraph<P>) -> Vec<DerivedNode<()>> {
    let step = |path: &PathStack, children: Vec<Vec<DerivedNode<()>>>| {
        let children: Vec<_> = children.into_iter().flatten().collect();
        let id = path.current();
        if children.len() == 1 || graph.payload(id).is_none() {
            return children;
        }
        vec![DerivedNode {
            shadow: id,
            verdict: (),
            children,
        }]
    };

    graph
        .roots()
        .iter()
        .flat_map(|&root| fold(graph, root, &step))
        .collect()
}
