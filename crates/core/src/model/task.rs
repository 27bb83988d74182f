//! Follow-up task model definitions

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::domain::EnumDomain;
use super::record::{require, NewRecord, Record};
use crate::storage::Collection;
use crate::Error;

/// Task progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    #[serde(alias = "pending")]
    Pending,
    #[serde(rename = "In Progress", alias = "in_progress", alias = "in progress")]
    InProgress,
    #[serde(alias = "completed")]
    Completed,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl EnumDomain for TaskStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::InProgress, Self::Completed];

    fn label(self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for TaskStatus {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().replace('_', " ").as_str() {
            "pending" => Ok(Self::Pending),
            "in progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(Error::InvalidInput(format!(
                "Unsupported task status '{}'",
                value
            ))),
        }
    }
}

/// A follow-up task.
///
/// `lead` is the lead's display name, not its id, and may dangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub task: String,
    pub lead: String,
    pub due: NaiveDate,
    pub status: TaskStatus,
}

impl Record for Task {
    type Patch = TaskPatch;
    const COLLECTION: Collection = Collection::Tasks;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: TaskPatch) {
        if let Some(task) = patch.task {
            self.task = task;
        }
        if let Some(lead) = patch.lead {
            self.lead = lead;
        }
        if let Some(due) = patch.due {
            self.due = due;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub task: String,
    pub lead: String,
    pub due: NaiveDate,
    #[serde(default)]
    pub status: TaskStatus,
}

impl NewTask {
    pub fn new(task: impl Into<String>, lead: impl Into<String>, due: NaiveDate) -> Self {
        Self {
            task: task.into(),
            lead: lead.into(),
            due,
            status: TaskStatus::default(),
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn validate(&self) -> crate::Result<()> {
        require(&self.task, "task")?;
        require(&self.lead, "lead")
    }
}

impl NewRecord for NewTask {
    type Record = Task;

    fn into_record(self, id: String, _created_at: DateTime<Utc>) -> Task {
        Task {
            id,
            task: self.task,
            lead: self.lead,
            due: self.due,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub task: Option<String>,
    pub lead: Option<String>,
    pub due: Option<NaiveDate>,
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
