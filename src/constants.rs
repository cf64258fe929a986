/// Model name recorded in every artifact provenance block
pub const MODEL_NAME: &str = "gpt-5-codex-large";

/// Reviewer kind attached to generated artifacts
pub const REVIEWER_KIND: &str = "human";

/// Placeholder reviewer assigned to every artifact
pub const REVIEWER_ID: &str = "ops_reviewer_42";

/// Temperature used when a task carries no guardrail override
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Token budget used when a task carries no guardrail override
pub const DEFAULT_MAX_TOKENS: u32 = 256;

/// Prefix of every artifact identifier
pub const ARTIFACT_ID_PREFIX: &str = "art_";

/// Number of digest hex characters kept in an artifact identifier
pub const ARTIFACT_ID_HEX_LEN: usize = 10;

/// Mime type of synthesized artifact content
pub const CONTENT_MIME: &str = "text/plain";

/// Directory searched for fixtures when none is given
pub const DEFAULT_DATA_DIR: &str = "fixtures";

pub const DEFAULT_SESSION_FILE: &str = "creation_codex_session.json";
pub const DEFAULT_TASKS_FILE: &str = "creation_codex_tasks.json";

/// Banner printed at the top of every run trace
pub const TRACE_BANNER: &str = "Creation Codex Mass Generation Protocol Demo";
