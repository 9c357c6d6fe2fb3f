//! The supervisor and the two domain agents.
//!
//! Each agent is a [`deskbot_graph::TurnNode`]: the supervisor emits a
//! routing decision, the domain agents emit exactly one assistant
//! message per turn and never propagate an error past their boundary.

pub mod accounting;
pub mod context;
pub mod prompts;
pub mod supervisor;
pub mod support;

pub use accounting::AccountingAgent;
pub use supervisor::SupervisorAgent;
pub use support::SupportAgent;
