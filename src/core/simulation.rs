use serde::Serialize;
use std::io::Write;

use super::artifact::{synthesize_artifact, Artifact};
use super::summary::Summary;
use super::template::missing_variables;
use crate::config::{Session, Task};
use crate::constants::TRACE_BANNER;
use crate::errors::Result;
use crate::utils::{write_section, write_table};

use tracing::{debug, info, warn};

/// Everything a run consumed and produced
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub session: Session,
    pub tasks: Vec<Task>,
    pub artifacts: Vec<Artifact>,
    pub summary: Summary,
}

/// Runs one mass generation batch and writes its trace to `out`
///
/// Tasks are synthesized strictly in input order, one artifact per task. The session
/// task limit is reported but never enforced.
///
/// # Arguments
/// * `session` - Descriptive context of the batch
/// * `tasks` - Tasks to synthesize
/// * `out` - Stream receiving the human-readable trace
///
/// # Returns
/// * `Result<RunReport>` - The full run record, or an error if the trace could not be written
pub fn run_simulation(
    session: Session,
    tasks: Vec<Task>,
    out: &mut impl Write,
) -> Result<RunReport> {
    if tasks.len() as u64 > session.max_tasks {
        warn!(
            "Batch holds {} task(s), above the session limit of {}",
            tasks.len(),
            session.max_tasks
        );
    }

    write_session(out, &session)?;
    write_submissions(out, &tasks)?;

    let artifacts: Vec<Artifact> = tasks
        .iter()
        .map(|task| {
            let missing = missing_variables(&task.prompt_template, &task.variables);
            if !missing.is_empty() {
                debug!(
                    "Task {} has no value for placeholder(s): {}",
                    task.task_id,
                    missing.join(", ")
                );
            }
            let artifact = synthesize_artifact(task);
            debug!("Synthesized {} for {}", artifact.artifact_id, task.task_id);
            artifact
        })
        .collect();
    write_artifacts(out, &artifacts)?;

    let summary = Summary::for_batch(tasks.len(), artifacts.len());
    write_section(out, "Session summary")?;
    write_table(out, &summary.table_rows())?;

    info!(
        "Run complete: {} artifact(s) from {} task(s)",
        artifacts.len(),
        tasks.len()
    );

    Ok(RunReport {
        session,
        tasks,
        artifacts,
        summary,
    })
}

fn write_session(out: &mut impl Write, session: &Session) -> Result<()> {
    write_section(out, TRACE_BANNER)?;
    writeln!(out, "Session objective: {}", session.objective)?;
    writeln!(out, "Policy pack: {}", session.policy_pack_id)?;
    writeln!(out, "Max tasks allowed: {}", session.max_tasks)?;
    Ok(())
}

fn write_submissions(out: &mut impl Write, tasks: &[Task]) -> Result<()> {
    write_section(out, "Submitting tasks")?;
    for (idx, task) in tasks.iter().enumerate() {
        writeln!(
            out,
            "Task {}: {} -> channels {}",
            idx + 1,
            task.task_id,
            task.channels.join(", ")
        )?;
    }
    Ok(())
}

fn write_artifacts(out: &mut impl Write, artifacts: &[Artifact]) -> Result<()> {
    write_section(out, "Generating artifacts")?;
    for artifact in artifacts {
        writeln!(out, "Artifact {} for {}", artifact.artifact_id, artifact.task_id)?;
        writeln!(out, "  Reviewer: {}", artifact.reviewer.id)?;
        writeln!(out, "  Model: {}", artifact.provenance.model)?;
        writeln!(out, "  Content preview: {}", artifact.content.preview())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Guardrails;
    use crate::core::SummaryStatus;
    use std::collections::BTreeMap;
    use std::io;

    fn session(max_tasks: u64) -> Session {
        Session {
            objective: "Spring launch copy".to_string(),
            policy_pack_id: "policy-eu-1".to_string(),
            max_tasks,
        }
    }

    fn task(task_id: &str, locale: &str) -> Task {
        Task {
            task_id: task_id.to_string(),
            prompt_template: "Write a tagline for {{product}} in {{locale}}".to_string(),
            variables: BTreeMap::from([
                ("product".to_string(), "Nimbus".to_string()),
                ("locale".to_string(), locale.to_string()),
            ]),
            channels: vec!["web".to_string(), "social".to_string()],
            guardrails: None,
        }
    }

    #[test]
    fn produces_one_artifact_per_task_in_order() {
        let tasks = vec![task("t-001", "es-ES"), task("t-002", "fr-FR")];
        let report = run_simulation(session(10), tasks, &mut io::sink()).unwrap();

        let ids: Vec<&str> = report.artifacts.iter().map(|a| a.task_id.as_str()).collect();
        assert_eq!(ids, vec!["t-001", "t-002"]);
        assert_eq!(report.artifacts[0].artifact_id, "art_82bf8aa4f1");
        assert_eq!(report.artifacts[1].artifact_id, "art_657af051ad");
    }

    #[test]
    fn summary_reflects_batch_size_only() {
        let mut odd = task("t-003", "");
        odd.prompt_template = "{{missing}}".to_string();
        odd.guardrails = Some(Guardrails {
            temperature: Some(1.5),
            max_tokens: Some(1),
        });
        let tasks = vec![task("t-001", "es-ES"), odd, task("t-002", "de-DE")];

        // Above the session limit on purpose: the limit is informational.
        let report = run_simulation(session(1), tasks, &mut io::sink()).unwrap();

        assert_eq!(report.summary.status, SummaryStatus::Accepted);
        assert_eq!(report.summary.submitted_tasks, 3);
        assert_eq!(report.summary.completed_tasks, 3);
        assert_eq!(report.summary.pending_review, 0);
        assert_eq!(report.tasks.len(), 3);
    }

    #[test]
    fn empty_batch_still_summarizes() {
        let report = run_simulation(session(0), Vec::new(), &mut io::sink()).unwrap();
        assert!(report.artifacts.is_empty());
        assert_eq!(report.summary.submitted_tasks, 0);
        assert_eq!(report.summary.completed_tasks, 0);
    }

    #[test]
    fn trace_lists_inputs_and_outputs() {
        let mut out: Vec<u8> = Vec::new();
        run_simulation(session(5), vec![task("t-001", "es-ES")], &mut out).unwrap();
        let trace = String::from_utf8(out).unwrap();

        assert!(trace.contains("Creation Codex Mass Generation Protocol Demo"));
        assert!(trace.contains("Session objective: Spring launch copy"));
        assert!(trace.contains("Policy pack: policy-eu-1"));
        assert!(trace.contains("Max tasks allowed: 5"));
        assert!(trace.contains("Task 1: t-001 -> channels web, social"));
        assert!(trace.contains("Artifact art_82bf8aa4f1 for t-001"));
        assert!(trace.contains("  Reviewer: ops_reviewer_42"));
        assert!(trace.contains("  Model: gpt-5-codex-large"));
        assert!(trace.contains("  Content preview: Write a tagline for Nimbus in es-ES\n"));
        assert!(trace.contains("'accepted'"));

        let submitted = trace.find("Submitting tasks").unwrap();
        let generating = trace.find("Generating artifacts").unwrap();
        let summary = trace.find("Session summary").unwrap();
        assert!(submitted < generating && generating < summary);
    }

    #[test]
    fn report_serializes_all_sections() {
        let report = run_simulation(session(5), vec![task("t-001", "es-ES")], &mut io::sink())
            .unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["session"]["policy_pack_id"], "policy-eu-1");
        assert_eq!(value["tasks"][0]["task_id"], "t-001");
        assert_eq!(value["artifacts"][0]["status"], "ready");
        assert_eq!(value["summary"]["status"], "accepted");
    }
}
