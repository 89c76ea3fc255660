//! Langfuse prompt-management API
//!
//! Only the one call the demo needs: creating a prompt version.

pub mod client;
mod error;
mod types;

pub use client::{LangfuseClient, PROMPTS_PATH, PromptStore};
pub use error::LangfuseError;
pub use types::{CreatePromptRequest, CreatedPrompt, PromptConfig, PromptType};
