use super::validator::{validate_fixture, FixtureKind};
use super::{Session, Task};
use crate::errors::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

/// Loads and validates the session descriptor
///
/// # Arguments
///
/// * `file_path` - Path to a JSON (or YAML) session fixture
///
/// # Errors
///
/// Returns an error if:
/// * The file cannot be read
/// * The content is not valid JSON/YAML
/// * The document does not have the shape of a session
pub fn load_session(file_path: &Path) -> Result<Session> {
    let session: Session = load_fixture(file_path, FixtureKind::Session)?;
    info!("Loaded session: {:?}", session.objective);
    Ok(session)
}

/// Loads and validates the ordered task list
///
/// # Arguments
///
/// * `file_path` - Path to a JSON (or YAML) task list fixture
///
/// # Errors
///
/// Same conditions as [`load_session`], against the task list shape.
pub fn load_tasks(file_path: &Path) -> Result<Vec<Task>> {
    let tasks: Vec<Task> = load_fixture(file_path, FixtureKind::Tasks)?;
    info!("Loaded {} task(s) from {}", tasks.len(), file_path.display());
    Ok(tasks)
}

fn load_fixture<T: DeserializeOwned>(file_path: &Path, kind: FixtureKind) -> Result<T> {
    let raw = fs::read_to_string(file_path).map_err(|e| Error::io(file_path, e))?;
    let document = parse_document(file_path, &raw)?;
    validate_fixture(kind, &file_path.display().to_string(), &document)?;
    Ok(serde_json::from_value(document)?)
}

/// YAML for `.yaml`/`.yml` files, JSON for everything else
fn parse_document(file_path: &Path, raw: &str) -> Result<Value> {
    let is_yaml = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);

    if is_yaml {
        debug!("Parsing {} as YAML", file_path.display());
        Ok(serde_yaml::from_str(raw)?)
    } else {
        Ok(serde_json::from_str(raw)?)
    }
}
