use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::errors::{Error, Result};

static SESSION_SCHEMA: &str = include_str!("../schemas/session.schema.json");
static TASKS_SCHEMA: &str = include_str!("../schemas/tasks.schema.json");

/// Which fixture document a value is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureKind {
    Session,
    Tasks,
}

impl FixtureKind {
    fn schema(self) -> &'static str {
        match self {
            FixtureKind::Session => SESSION_SCHEMA,
            FixtureKind::Tasks => TASKS_SCHEMA,
        }
    }
}

static SESSION_VALIDATOR: Lazy<Result<Validator>> =
    Lazy::new(|| build_validator(FixtureKind::Session.schema()));
static TASKS_VALIDATOR: Lazy<Result<Validator>> =
    Lazy::new(|| build_validator(FixtureKind::Tasks.schema()));

/// Creates a JSON Schema validator from a schema string
///
/// # Arguments
/// * `schema_content` - The JSON Schema as a string
///
/// # Returns
/// * `Result<Validator>` - The compiled validator on success, or an error
pub fn build_validator(schema_content: &str) -> Result<Validator> {
    let schema: Value = serde_json::from_str(schema_content)?;
    jsonschema::validator_for(&schema).map_err(|e| Error::Schema(e.to_string()))
}

/// Validates a parsed fixture document against its embedded schema
///
/// Every violation is reported, each prefixed by the instance path it was found at.
///
/// # Arguments
/// * `kind` - Which fixture the document is
/// * `source_name` - Name used in the error message, usually the file path
/// * `document` - The parsed document
pub fn validate_fixture(kind: FixtureKind, source_name: &str, document: &Value) -> Result<()> {
    let validator = match kind {
        FixtureKind::Session => &*SESSION_VALIDATOR,
        FixtureKind::Tasks => &*TASKS_VALIDATOR,
    };
    let validator = validator.as_ref().map_err(|e| Error::Schema(e.to_string()))?;

    let details: Vec<String> = validator
        .iter_errors(document)
        .map(|err| {
            let path = err.instance_path.to_string();
            if path.is_empty() {
                format!("(root): {}", err)
            } else {
                format!("{}: {}", path, err)
            }
        })
        .collect();

    if details.is_empty() {
        Ok(())
    } else {
        Err(Error::MalformedInput {
            source_name: source_name.to_string(),
            details,
        })
    }
}
