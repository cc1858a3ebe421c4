//! JSON document to positioned node-link tree, plus path search over it.
//!
//! Everything in here is pure: no browser types, no rendering vocabulary.
//! The canvas layer derives colors and highlight styling from [`NodeKind`]
//! and selection state on its own.

mod config;
mod error;
pub mod expr;
mod graph;
pub mod label;
mod layout;
pub mod path;
mod resolve;
mod value;

pub use config::LayoutConfig;
pub use error::{ExpressionError, TreeError};
pub use graph::{Bounds, GraphEdge, GraphNode, NodeId, NodeKey, NodeKind, Position, TreeGraph};
pub use layout::{layout, layout_shared, layout_with};
pub use resolve::{MatchMode, MatchResult, SearchOutcome, resolve, resolve_with, search};
pub use value::{Children, child_count, children};
