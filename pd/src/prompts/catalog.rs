//! Hardcoded prompt and the sample prompt catalog

use prompttemplate::Template;

use super::embedded;
use crate::langfuse::{CreatePromptRequest, PromptConfig, PromptType};

/// The email prompt as it ships inside the application
pub const EMAIL_PROMPT_TEMPLATE: &str = embedded::EMAIL_WRITER;

/// Model settings that ship alongside [`EMAIL_PROMPT_TEMPLATE`]
pub fn email_prompt_config() -> PromptConfig {
    PromptConfig::new("gpt-3.5-turbo", 0.7, 300)
}

/// A prompt the setup command pushes to Langfuse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePrompt {
    pub name: &'static str,
    pub template: &'static str,
    pub model: &'static str,
    pub temperature: f64,
    pub max_tokens: u32,
    pub labels: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub commit_message: &'static str,
}

impl SamplePrompt {
    pub fn config(&self) -> PromptConfig {
        PromptConfig::new(self.model, self.temperature, self.max_tokens)
    }

    pub fn template(&self) -> Template {
        Template::new(self.template)
    }

    pub fn to_request(&self) -> CreatePromptRequest {
        CreatePromptRequest {
            name: self.name.to_string(),
            prompt_type: PromptType::Text,
            labels: self.labels.iter().map(|s| s.to_string()).collect(),
            prompt: self.template.to_string(),
            config: self.config(),
            tags: self.tags.iter().map(|s| s.to_string()).collect(),
            commit_message: self.commit_message.to_string(),
        }
    }
}

/// Prompts created by `pd setup`, in creation order
pub const SAMPLE_PROMPTS: &[SamplePrompt] = &[
    SamplePrompt {
        name: "email-writer-v1",
        template: embedded::EMAIL_WRITER,
        model: "gpt-3.5-turbo",
        temperature: 0.7,
        max_tokens: 300,
        labels: &["production"],
        tags: &["demo", "email", "communication"],
        commit_message: "Initial email writer prompt for demo",
    },
    SamplePrompt {
        name: "product-description-v1",
        template: embedded::PRODUCT_DESCRIPTION,
        model: "gpt-3.5-turbo",
        temperature: 0.8,
        max_tokens: 200,
        labels: &["production"],
        tags: &["demo", "marketing", "ecommerce"],
        commit_message: "Initial product description prompt for demo",
    },
    SamplePrompt {
        name: "code-reviewer-v1",
        template: embedded::CODE_REVIEWER,
        model: "gpt-4",
        temperature: 0.3,
        max_tokens: 500,
        labels: &["production"],
        tags: &["demo", "code-review", "development"],
        commit_message: "Initial code reviewer prompt for demo",
    },
];

/// Look up a sample prompt by its Langfuse name
pub fn find_sample(name: &str) -> Option<&'static SamplePrompt> {
    SAMPLE_PROMPTS.iter().find(|p| p.name == name)
}
