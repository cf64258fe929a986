use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall verdict of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStatus {
    Accepted,
}

impl fmt::Display for SummaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryStatus::Accepted => write!(f, "accepted"),
        }
    }
}

/// Fixed-shape record closing a run
///
/// `status` and `pending_review` are constant: they are not derived from the
/// artifacts that were produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub status: SummaryStatus,
    pub submitted_tasks: usize,
    pub completed_tasks: usize,
    pub pending_review: usize,
}

impl Summary {
    pub fn for_batch(submitted_tasks: usize, completed_tasks: usize) -> Self {
        Self {
            status: SummaryStatus::Accepted,
            submitted_tasks,
            completed_tasks,
            pending_review: 0,
        }
    }

    /// Rows shown in the summary table, in display order
    ///
    /// String values are single-quoted, numbers are left bare.
    pub fn table_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("status", format!("'{}'", self.status)),
            ("submitted_tasks", self.submitted_tasks.to_string()),
            ("completed_tasks", self.completed_tasks.to_string()),
            ("pending_review", self.pending_review.to_string()),
        ]
    }
}
