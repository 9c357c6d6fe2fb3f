use crate::state::{TurnState, TurnUpdate};
use async_trait::async_trait;
use deskbot_core::Result;

/// One step of a turn. Nodes read the shared state and emit a partial
/// update; the executor merges updates and decides what runs next.
#[async_trait]
pub trait TurnNode: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self, state: &TurnState) -> Result<TurnUpdate>;
}
