//! Single-turn orchestration.
//!
//! A [`TurnGraph`] sequences nodes for exactly one conversation turn:
//! each node emits a partial [`TurnUpdate`], the executor merges it into
//! the [`TurnState`], and edges (fixed or conditional on the merged
//! state) pick the next node until [`graph::END`] is reached.

pub mod error;
pub mod graph;
pub mod node;
pub mod state;

pub use error::GraphError;
pub use graph::{TurnGraph, TurnGraphBuilder, END};
pub use node::TurnNode;
pub use state::{Next, TurnState, TurnUpdate};
