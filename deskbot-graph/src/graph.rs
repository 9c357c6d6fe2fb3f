use crate::error::{GraphError, Result};
use crate::node::TurnNode;
use crate::state::TurnState;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Sentinel target that terminates the turn.
pub const END: &str = "end";

const DEFAULT_STEP_LIMIT: usize = 10;

type Router = Box<dyn Fn(&TurnState) -> String + Send + Sync>;

enum Edge {
    Fixed(String),
    Conditional(Router),
}

/// A validated, immutable graph of [`TurnNode`]s executed one step at a
/// time until an edge reaches [`END`] or the step limit trips.
pub struct TurnGraph {
    nodes: HashMap<String, Arc<dyn TurnNode>>,
    edges: HashMap<String, Edge>,
    entry: String,
    step_limit: usize,
    step_timeout: Option<Duration>,
}

impl TurnGraph {
    pub fn builder() -> TurnGraphBuilder {
        TurnGraphBuilder::default()
    }

    /// Run one turn to completion, merging each node's partial update
    /// into the state.
    pub async fn run(&self, mut state: TurnState) -> Result<TurnState> {
        let mut current = self.entry.clone();
        let mut steps = 0;

        while current != END {
            steps += 1;
            if steps > self.step_limit {
                return Err(GraphError::StepLimitExceeded(self.step_limit));
            }

            let node = self
                .nodes
                .get(&current)
                .ok_or_else(|| GraphError::NodeNotFound(current.clone()))?;
            tracing::debug!(node = %current, step = steps, "executing node");

            let update = match self.step_timeout {
                Some(limit) => tokio::time::timeout(limit, node.run(&state))
                    .await
                    .map_err(|_| GraphError::NodeTimeout(current.clone()))?,
                None => node.run(&state).await,
            }
            .map_err(|source| GraphError::NodeExecutionFailed { node: current.clone(), source })?;
            state.apply(update);

            current = match self.edges.get(&current) {
                Some(Edge::Fixed(target)) => target.clone(),
                Some(Edge::Conditional(router)) => router(&state),
                None => END.to_string(),
            };
        }

        Ok(state)
    }
}

#[derive(Default)]
pub struct TurnGraphBuilder {
    nodes: HashMap<String, Arc<dyn TurnNode>>,
    edges: HashMap<String, Edge>,
    entry: Option<String>,
    step_limit: Option<usize>,
    step_timeout: Option<Duration>,
}

impl TurnGraphBuilder {
    pub fn node(mut self, node: Arc<dyn TurnNode>) -> Self {
        self.nodes.insert(node.name().to_string(), node);
        self
    }

    pub fn entry(mut self, name: impl Into<String>) -> Self {
        self.entry = Some(name.into());
        self
    }

    /// Unconditional edge. `END` is a valid target.
    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.edges.insert(from.into(), Edge::Fixed(to.into()));
        self
    }

    /// Edge whose target is chosen from the state after `from` runs.
    pub fn conditional_edge(
        mut self,
        from: impl Into<String>,
        router: impl Fn(&TurnState) -> String + Send + Sync + 'static,
    ) -> Self {
        self.edges.insert(from.into(), Edge::Conditional(Box::new(router)));
        self
    }

    pub fn step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Upper bound on a single node's execution, off by default.
    pub fn step_timeout(mut self, timeout: Duration) -> Self {
        self.step_timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<TurnGraph> {
        let entry = self.entry.ok_or(GraphError::NoEntryPoint)?;
        if !self.nodes.contains_key(&entry) {
            return Err(GraphError::NodeNotFound(entry));
        }
        for target in self.edges.values() {
            if let Edge::Fixed(name) = target {
                if name != END && !self.nodes.contains_key(name) {
                    return Err(GraphError::NodeNotFound(name.clone()));
                }
            }
        }

        Ok(TurnGraph {
            nodes: self.nodes,
            edges: self.edges,
            entry,
            step_limit: self.step_limit.unwrap_or(DEFAULT_STEP_LIMIT),
            step_timeout: self.step_timeout,
        })
    }
}
