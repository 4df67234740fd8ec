#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]
#![forbid(unsafe_code)]

//! Organizes a flat collection of capability profiles into a hierarchy
//! where each node's children are its nearest known strict subsets, and
//! derives filtered and simplified views of it through generic folds.

mod cache;
pub mod fold;
mod graph;
mod path;
mod profile;
mod requirements;
mod view;


pub use cache::ProfileCache;
pub use fold::{fold, fold_async, visit, visit_async, Concurrent, Fanout, Sequential};
pub use graph::{HierarchyGraph, HierarchyNode, HierarchyOptions, NodeId};
pub use path::PathStack;
pub use profile::{CapabilityProfile, ProfileEntry};
pub use requirements::{Diagnostic, Requirements, SatisfactionResult, Severity};
pub use view::{filtered_view, simplified_view, DerivedNode, FilterOptions};
