//! Chat completion providers.
//!
//! [`OpenAiClient`] talks to any OpenAI-compatible chat completions
//! endpoint over HTTP; [`MockChatModel`] replays scripted responses for
//! tests.

pub mod config;
pub mod mock;
pub mod openai;
pub mod wire;

pub use config::{OpenAiConfig, OPENAI_API_BASE};
pub use mock::MockChatModel;
pub use openai::OpenAiClient;
