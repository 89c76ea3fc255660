//! Prompt texts
//!
//! The hardcoded email prompt and the sample prompts pushed to Langfuse are
//! the same `.pmt` files under `prompts/`, embedded at build time.

mod catalog;
pub mod embedded;

pub use catalog::{EMAIL_PROMPT_TEMPLATE, SAMPLE_PROMPTS, SamplePrompt, email_prompt_config, find_sample};
