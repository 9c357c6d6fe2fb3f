//! # deskbot-core
//!
//! Core traits and types for deskbot agents, tools, and models.
//!
//! ## Overview
//!
//! This crate provides the foundational abstractions shared by the rest
//! of the workspace:
//!
//! - [`Message`] / [`Role`] / [`ToolCall`] - conversation wire types
//! - [`ChatModel`] - the completion capability (one reply per call,
//!   optionally requesting tool invocations)
//! - [`Tool`] / [`ToolName`] - the closed tool set agents can execute
//! - [`BotError`] / [`Result`] - unified error handling

pub mod error;
pub mod message;
pub mod model;
pub mod tool;

pub use error::{BotError, Result};
pub use message::{Message, Role, ToolCall};
pub use model::{ChatModel, ChatRequest, ChatResponse, ToolSpec};
pub use tool::{execute_to_string, Tool, ToolName};
