//! Langfuse prompt API payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Model parameters stored alongside a prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptConfig {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl PromptConfig {
    pub fn new(model: impl Into<String>, temperature: f64, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            temperature,
            max_tokens,
        }
    }
}

/// Kind of prompt body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptType {
    #[default]
    Text,
}

/// Body of `POST /api/public/v2/prompts`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromptRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub prompt_type: PromptType,
    pub labels: Vec<String>,
    pub prompt: String,
    pub config: PromptConfig,
    pub tags: Vec<String>,
    pub commit_message: String,
}

/// The parts of a created prompt the demo reports back
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedPrompt {
    pub name: String,
    pub version: u32,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_wire_format() {
        let req = CreatePromptRequest {
            name: "email-writer-v1".to_string(),
            prompt_type: PromptType::Text,
            labels: vec!["production".to_string()],
            prompt: "Write a {{tone}} email".to_string(),
            config: PromptConfig::new("gpt-3.5-turbo", 0.7, 300),
            tags: vec!["demo".to_string()],
            commit_message: "Initial email writer prompt for demo".to_string(),
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["commitMessage"], "Initial email writer prompt for demo");
        assert_eq!(json["config"]["max_tokens"], 300);
        assert_eq!(json["config"]["temperature"], 0.7);
        assert_eq!(json["labels"][0], "production");
        assert!(json.get("commit_message").is_none());
        assert!(json.get("prompt_type").is_none());
    }

    #[test]
    fn test_created_prompt_ignores_extra_fields() {
        let body = r#"{
            "id": "clx123",
            "name": "email-writer-v1",
            "version": 3,
            "type": "text",
            "labels": ["production", "latest"],
            "createdAt": "2025-01-15T10:30:00.000Z",
            "config": {"model": "gpt-3.5-turbo"}
        }"#;
        let created: CreatedPrompt = serde_json::from_str(body).unwrap();
        assert_eq!(created.name, "email-writer-v1");
        assert_eq!(created.version, 3);
        assert_eq!(created.labels, vec!["production", "latest"]);
        assert!(created.created_at.is_some());
    }

    #[test]
    fn test_created_prompt_minimal() {
        let created: CreatedPrompt = serde_json::from_str(r#"{"name": "x", "version": 1}"#).unwrap();
        assert!(created.labels.is_empty());
        assert!(created.created_at.is_none());
    }
}
