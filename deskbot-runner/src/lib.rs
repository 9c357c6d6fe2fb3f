//! Turn runner.
//!
//! [`Chatbot`] assembles the supervisor and domain agents into a
//! three-node graph and drives one turn at a time: read the session
//! history, run the graph, persist the updated history, return the
//! assistant reply.

pub mod runner;
pub mod telemetry;

pub use runner::{Chatbot, ChatbotBuilder};
pub use telemetry::init_tracing;
