mod de;
mod parser;
mod validator;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};

pub use parser::{load_session, load_tasks};

/// Descriptive context shared by a batch of tasks
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Session {
    /// What the batch is meant to produce
    pub objective: String,
    /// Identifier of the policy pack the batch runs under
    pub policy_pack_id: String,
    /// Advertised task limit. Informational only, never enforced
    #[serde(deserialize_with = "de::whole_u64")]
    pub max_tasks: u64,
}

/// A single generation request
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Task {
    /// Unique identifier of the task
    pub task_id: String,
    /// Prompt containing `{{name}}` placeholders
    pub prompt_template: String,
    /// Values substituted into the prompt template
    pub variables: BTreeMap<String, String>,
    /// Distribution channels, display only
    #[serde(default)]
    pub channels: Vec<String>,
    /// Optional generation overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardrails: Option<Guardrails>,
}

impl Task {
    /// Locale variable used in the localization marker, empty when unset
    pub fn locale(&self) -> &str {
        self.variables
            .get("locale")
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Generation parameters with defaults applied to every unset field
    pub fn generation_params(&self) -> GenerationParams {
        self.guardrails
            .as_ref()
            .map(Guardrails::resolve)
            .unwrap_or_default()
    }
}

/// Per-task overrides for generation parameters
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Guardrails {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_whole_u32")]
    pub max_tokens: Option<u32>,
}

impl Guardrails {
    /// Applies the default of each field the task left unset
    pub fn resolve(&self) -> GenerationParams {
        let defaults = GenerationParams::default();
        GenerationParams {
            temperature: self.temperature.unwrap_or(defaults.temperature),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
        }
    }
}

/// Fully resolved generation parameters
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_with(guardrails: Option<Guardrails>) -> Task {
        Task {
            task_id: "t-001".to_string(),
            prompt_template: "Hi".to_string(),
            variables: BTreeMap::new(),
            channels: vec![],
            guardrails,
        }
    }

    #[test]
    fn missing_guardrails_use_defaults() {
        let params = task_with(None).generation_params();
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.max_tokens, 256);
    }

    #[test]
    fn partial_guardrails_keep_default_for_unset_field() {
        let params = task_with(Some(Guardrails {
            temperature: Some(0.2),
            max_tokens: None,
        }))
        .generation_params();
        assert_eq!(params.temperature, 0.2);
        assert_eq!(params.max_tokens, 256);
    }

    #[test]
    fn null_guardrail_fields_deserialize_as_unset() {
        let guardrails: Guardrails =
            serde_json::from_str(r#"{"temperature": null, "max_tokens": 512}"#).unwrap();
        let params = guardrails.resolve();
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.max_tokens, 512);
    }

    #[test]
    fn task_without_channels_or_locale() {
        let task: Task = serde_json::from_str(
            r#"{"task_id": "t-9", "prompt_template": "x", "variables": {}}"#,
        )
        .unwrap();
        assert!(task.channels.is_empty());
        assert_eq!(task.locale(), "");
        assert!(task.guardrails.is_none());
    }
}
