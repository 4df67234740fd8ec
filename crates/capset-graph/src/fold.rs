//! Depth-first combinators over a [`HierarchyGraph`].
//!
//! There is a single recursive fold; a [`Fanout`] strategy decides whether
//! a node's children are driven one after another or all at once. The
//! synchronous entry points run the sequential strategy over futures that
//! are always ready.

use std::future::Future;

use futures::executor::block_on;
use futures::future::{self, BoxFuture, FutureExt};

use crate::{HierarchyGraph, NodeId, PathStack};

/// How the child computations of one node are driven to completion.
///
/// Results always come back in child order, whatever order the
/// computations finish in.
pub trait Fanout: Copy + Send + Sync + 'static {
    fn join<'a, R: Send + 'a>(children: Vec<BoxFuture<'a, R>>) -> BoxFuture<'a, Vec<R>>;
}

/// One child at a time, in order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sequential;

/// All children polled together. Dropping the join drops every pending
/// child; a panic in any child resumes in the caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct Concurrent;

impl Fanout for Sequential {
    fn join<'a, R: Send + 'a>(children: Vec<BoxFuture<'a, R>>) -> BoxFuture<'a, Vec<R>> {
        async move {
            let mut results = Vec::with_capacity(children.len());
            for child in children {
                results.push(child.await);
            }
            results
        }
        .boxed()
    }
}

impl Fanout for Concurrent {
    fn join<'a, R: Send + 'a>(children: Vec<BoxFuture<'a, R>>) -> BoxFuture<'a, Vec<R>> {
        future::join_all(children).boxed()
    }
}

/// Post-order fold from `start` using fan-out strategy `S`.
///
/// `f` receives the path from `start` to the current node and the results
/// of the node's children, and runs only after every child has finished.
pub fn fold_with<'a, S, P, R, F, Fut>(
    graph: &'a HierarchyGraph<P>,
    start: NodeId,
    f: &'a F,
) -> BoxFuture<'a, R>
where
    S: Fanout,
    P: Sync,
    R: Send + 'a,
    F: Fn(PathStack, Vec<R>) -> Fut + Sync,
    Fut: Future<Output = R> + Send + 'a,
{
    fold_from::<S, P, R, F, Fut>(graph, PathStack::start(start), f)
}

fn fold_from<'a, S, P, R, F, Fut>(
    graph: &'a HierarchyGraph<P>,
    path: PathStack,
    f: &'a F,
) -> BoxFuture<'a, R>
where
    S: Fanout,
    P: Sync,
    R: Send + 'a,
    F: Fn(PathStack, Vec<R>) -> Fut + Sync,
    Fut: Future<Output = R> + Send + 'a,
{
    async move {
        let children = graph
            .children(path.current())
            .iter()
            .map(|&child| fold_from::<S, P, R, F, Fut>(graph, path.push(child), f))
            .collect();
        let results = S::join(children).await;
        f(path, results).await
    }
    .boxed()
}

/// Synchronous post-order fold; children are folded in order.
pub fn fold<P, R, F>(graph: &HierarchyGraph<P>, start: NodeId, f: F) -> R
where
    P: Sync,
    R: Send,
    F: Fn(&PathStack, Vec<R>) -> R + Sync,
{
    let step = |path: PathStack, children: Vec<R>| future::ready(f(&path, children));
    block_on(fold_with::<Sequential, _, _, _, _>(graph, start, &step))
}

/// Asynchronous post-order fold; the children of each node are folded
/// concurrently and their results passed to `f` in child order.
pub async fn fold_async<'a, P, R, F, Fut>(graph: &'a HierarchyGraph<P>, start: NodeId, f: F) -> R
where
    P: Sync,
    R: Send + 'a,
    F: Fn(PathStack, Vec<R>) -> Fut + Send + Sync + 'a,
    Fut: Future<Output = R> + Send + 'a,
{
    fold_with::<Concurrent, _, _, _, _>(graph, start, &f).await
}

fn visit_from<'a, P, F, Fut>(
    graph: &'a HierarchyGraph<P>,
    path: PathStack,
    f: &'a mut F,
) -> BoxFuture<'a, ()>
where
    P: Sync,
    F: FnMut(PathStack) -> Fut + Send,
    Fut: Future<Output = ()> + Send + 'a,
{
    async move {
        f(path.clone()).await;
        for &child in graph.children(path.current()) {
            visit_from(graph, path.push(child), &mut *f).await;
        }
    }
    .boxed()
}

/// Pre-order walk from `start`, parents before children.
pub fn visit<P, F>(graph: &HierarchyGraph<P>, start: NodeId, mut f: F)
where
    P: Sync,
    F: FnMut(&PathStack) + Send,
{
    let mut step = |path: PathStack| {
        f(&path);
        future::ready(())
    };
    block_on(visit_from(graph, PathStack::start(start), &mut step));
}

/// Pre-order walk awaiting `f` on each node before descending.
pub async fn visit_async<'a, P, F, Fut>(graph: &'a HierarchyGraph<P>, start: NodeId, mut f: F)
where
    P: Sync,
    F: FnMut(PathStack) -> Fut + Send + 'a,
    Fut: Future<Output = ()> + Send + 'a,
{
    visit_from(graph, PathStack::start(start), &mut f).await;
}
