use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use super::template::render_prompt;
use crate::config::Task;
use crate::constants::*;

/// Lifecycle status of a synthesized artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactStatus {
    /// The only state a synthesized artifact can be in
    Ready,
}

/// Reviewer assigned to an artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

impl Default for Reviewer {
    fn default() -> Self {
        Self {
            kind: REVIEWER_KIND.to_string(),
            id: REVIEWER_ID.to_string(),
        }
    }
}

/// How an artifact's content was produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub model: String,
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub mime: String,
    pub body: String,
}

impl Content {
    /// First line of the body, used as a preview in the run trace
    pub fn preview(&self) -> &str {
        self.body.split('\n').next().unwrap_or_default()
    }
}

/// Output record synthesized from one task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub artifact_id: String,
    /// Source task, by reference only
    pub task_id: String,
    pub status: ArtifactStatus,
    pub reviewer: Reviewer,
    pub provenance: Provenance,
    pub content: Content,
}

/// Derives the artifact identifier of a task
///
/// The identifier is `art_` followed by the first ten lowercase hex characters of the
/// SHA-1 digest of `task_id`, so it depends on nothing but the task identifier.
pub fn artifact_id_for(task_id: &str) -> String {
    let digest = Sha1::digest(task_id.as_bytes());
    let hex_digest = hex::encode(digest);
    format!("{}{}", ARTIFACT_ID_PREFIX, &hex_digest[..ARTIFACT_ID_HEX_LEN])
}

/// Body of the artifact content: the prompt, a blank line and the localization marker
pub fn localized_body(prompt: &str, locale: &str) -> String {
    format!("{}\n\n(Localized copy synthesized for {})", prompt, locale)
}

/// Synthesizes the artifact for a single task
///
/// # Arguments
/// * `task` - The task to synthesize
///
/// # Returns
/// * `Artifact` - The rendered artifact with defaults applied to unset guardrails
pub fn synthesize_artifact(task: &Task) -> Artifact {
    let prompt = render_prompt(&task.prompt_template, &task.variables);
    let params = task.generation_params();
    let body = localized_body(&prompt, task.locale());

    Artifact {
        artifact_id: artifact_id_for(&task.task_id),
        task_id: task.task_id.clone(),
        status: ArtifactStatus::Ready,
        reviewer: Reviewer::default(),
        provenance: Provenance {
            model: MODEL_NAME.to_string(),
            prompt,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        },
        content: Content {
            mime: CONTENT_MIME.to_string(),
            body,
        },
    }
}
