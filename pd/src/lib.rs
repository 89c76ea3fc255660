//! PromptDemo - hardcoded prompts vs. managed prompts
//!
//! A walkthrough of why prompts baked into application code are painful to
//! change, and a setup command that seeds a Langfuse instance with the same
//! prompts so they can be managed outside the code instead.
//!
//! # Modules
//!
//! - [`prompts`] - The hardcoded email prompt and the sample catalog
//! - [`demo`] - Console narration (hardcoded demo, pain walkthrough)
//! - [`langfuse`] - Minimal Langfuse prompt API client
//! - [`setup`] - Sequential creation of the sample prompts
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod demo;
pub mod langfuse;
pub mod prompts;
pub mod setup;

// Re-export commonly used types
pub use config::{Config, LangfuseConfig, SetupConfig};
pub use langfuse::{CreatePromptRequest, CreatedPrompt, LangfuseClient, LangfuseError, PromptConfig, PromptStore};
pub use prompts::{EMAIL_PROMPT_TEMPLATE, SAMPLE_PROMPTS, SamplePrompt, email_prompt_config, find_sample};
pub use setup::{SetupSummary, run_setup, run_until};
