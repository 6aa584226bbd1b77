#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Closed,
    Draft,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub department: String,
    pub description: String,
    pub location: String,
    pub employment_type: String,
    pub status: JobStatus,
    pub applicants: u32,
    pub created_at: DateTime<Utc>,
}

/// Job creation input. Status defaults to active when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub department: String,
    pub description: String,
    pub location: String,
    #[serde(default = "default_employment_type")]
    pub employment_type: String,
    pub status: Option<JobStatus>,
}

fn default_employment_type() -> String {
    "Full-time".to_string()
}

/// Partial job update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobUpdate {
    pub title: Option<String>,
    pub department: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub status: Option<JobStatus>,
}

impl Job {
    pub fn apply(&mut self, updates: JobUpdate) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        if let Some(department) = updates.department {
            self.department = department;
        }
        if let Some(description) = updates.description {
            self.description = description;
        }
        if let Some(location) = updates.location {
            self.location = location;
        }
        if let Some(employment_type) = updates.employment_type {
            self.employment_type = employment_type;
        }
        if let Some(status) = updates.status {
            self.status = status;
        }
    }
}

/// Application input as submitted by an applicant.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationInput {
    pub applicant_name: String,
    pub applicant_email: String,
    pub cover_note: Option<String>,
}

/// Fabricated application record. The mock never stores these; callers get
/// the record back and that is the whole transaction.
#[derive(Debug, Clone, Serialize)]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub applicant_name: String,
    pub applicant_email: String,
    pub cover_note: Option<String>,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}
