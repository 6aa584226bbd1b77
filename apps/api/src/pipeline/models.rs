#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pipeline::stage::Stage;

/// A candidate in a job's pipeline. The match score is fixture-supplied —
/// nothing in this system computes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub stage: Stage,
    pub match_score: u8,
    pub skills: Vec<String>,
    pub applied_at: DateTime<Utc>,
    pub resume_url: Option<String>,
    pub feedback_history: Vec<FeedbackEntry>,
}

/// Append-only feedback record. Feedback never affects stage transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub stage: Stage,
    pub feedback: String,
    pub date: DateTime<Utc>,
    pub by: String,
}

/// Offer form. Salary and start date are required; benefits are free text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfferDetails {
    pub salary: String,
    pub start_date: String,
    pub benefits: String,
}
