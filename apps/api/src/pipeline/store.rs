#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use rand::Rng;

use crate::errors::AppError;
use crate::notify::Notifier;
use crate::pipeline::models::{Candidate, FeedbackEntry, OfferDetails};
use crate::pipeline::stage::{check_transition, Stage, TransitionCheck};

/// Outcome of a requested stage change. Refusals are surfaced as
/// notifications, not errors — the store state simply does not move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageChange {
    Moved(Stage),
    /// Target skips ahead of the sequential order; stage left unchanged.
    OutOfOrder,
    /// Candidate is already rejected; stage left unchanged.
    Terminal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackResult {
    Recorded,
    /// Blank feedback text; nothing appended.
    MissingText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfferResult {
    Extended {
        /// Decorative audit string, `0x` + 64 hex chars. Not a hash of
        /// anything and stored nowhere — it only dresses the notification.
        audit_hash: String,
    },
    /// Salary or start date missing; stage left unchanged.
    MissingFields,
    /// The sequential rule refused the advance to `Offer`.
    NotAdvanced,
}

/// In-memory candidate store for the hiring pipeline, seeded from fixtures.
/// Every operation reports its outcome through the shared notifier, the way
/// the original surfaces everything as toasts.
#[derive(Clone)]
pub struct CandidateStore {
    inner: Arc<CandidateStoreInner>,
}

struct CandidateStoreInner {
    candidates: Mutex<Vec<Candidate>>,
    latency: Duration,
    notifier: Notifier,
}

impl CandidateStore {
    pub fn new(latency: Duration, notifier: Notifier) -> Self {
        Self {
            inner: Arc::new(CandidateStoreInner {
                candidates: Mutex::new(seed_candidates()),
                latency,
                notifier,
            }),
        }
    }

    /// All candidates attached to a job. The fixture pool is shared across
    /// jobs — there are no referential checks in the mock.
    pub async fn candidates_for_job(&self, _job_id: &str) -> Vec<Candidate> {
        self.simulate_latency().await;
        self.lock_candidates().clone()
    }

    /// Shortlist view: candidates ranked by match score, best first.
    pub async fn shortlist_for_job(&self, job_id: &str) -> Vec<Candidate> {
        crate::insights::rank_by_match_score(self.candidates_for_job(job_id).await)
    }

    pub async fn get(&self, candidate_id: &str) -> Result<Candidate, AppError> {
        self.simulate_latency().await;
        self.lock_candidates()
            .iter()
            .find(|c| c.id == candidate_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Candidate not found".to_string()))
    }

    /// Requests a stage change, applying the sequential-progression rule.
    pub async fn change_stage(
        &self,
        candidate_id: &str,
        target: Stage,
    ) -> Result<StageChange, AppError> {
        self.simulate_latency().await;

        let mut candidates = self.lock_candidates();
        let candidate = candidates
            .iter_mut()
            .find(|c| c.id == candidate_id)
            .ok_or_else(|| AppError::NotFound("Candidate not found".to_string()))?;

        match check_transition(candidate.stage, target) {
            TransitionCheck::SkipsAhead => {
                self.inner
                    .notifier
                    .warning("Please progress through stages sequentially");
                Ok(StageChange::OutOfOrder)
            }
            TransitionCheck::FromTerminal => Ok(StageChange::Terminal),
            TransitionCheck::Allowed => {
                candidate.stage = target;
                if target == Stage::Rejected {
                    self.inner.notifier.warning("Candidate rejected");
                } else {
                    self.inner
                        .notifier
                        .success(format!("Candidate moved to {} stage", target.label()));
                }
                Ok(StageChange::Moved(target))
            }
        }
    }

    /// Rejects the candidate. Reachable from any stage; a no-op once there.
    pub async fn reject(&self, candidate_id: &str) -> Result<StageChange, AppError> {
        self.change_stage(candidate_id, Stage::Rejected).await
    }

    /// Appends a feedback entry at the candidate's current stage.
    pub async fn submit_feedback(
        &self,
        candidate_id: &str,
        text: &str,
        author: &str,
    ) -> Result<FeedbackResult, AppError> {
        self.simulate_latency().await;

        if text.trim().is_empty() {
            self.inner.notifier.error("Please enter feedback");
            return Ok(FeedbackResult::MissingText);
        }

        let mut candidates = self.lock_candidates();
        let candidate = candidates
            .iter_mut()
            .find(|c| c.id == candidate_id)
            .ok_or_else(|| AppError::NotFound("Candidate not found".to_string()))?;

        candidate.feedback_history.push(FeedbackEntry {
            stage: candidate.stage,
            feedback: text.trim().to_string(),
            date: Utc::now(),
            by: author.to_string(),
        });
        self.inner.notifier.success("Feedback submitted successfully");
        Ok(FeedbackResult::Recorded)
    }

    /// Extends an offer: both required fields must be present, and the stage
    /// advance to `Offer` goes through the normal sequential rule.
    pub async fn submit_offer(
        &self,
        candidate_id: &str,
        details: &OfferDetails,
    ) -> Result<OfferResult, AppError> {
        if details.salary.trim().is_empty() || details.start_date.trim().is_empty() {
            self.inner
                .notifier
                .error("Please fill in all required offer details");
            return Ok(OfferResult::MissingFields);
        }

        match self.change_stage(candidate_id, Stage::Offer).await? {
            StageChange::Moved(_) => {
                let audit_hash = mock_audit_hash();
                self.inner.notifier.success(format!(
                    "Offer extended! Audit hash: {}...",
                    &audit_hash[..12]
                ));
                self.inner
                    .notifier
                    .info("Immutable audit record created on blockchain");
                Ok(OfferResult::Extended { audit_hash })
            }
            StageChange::OutOfOrder | StageChange::Terminal => Ok(OfferResult::NotAdvanced),
        }
    }

    async fn simulate_latency(&self) {
        if !self.inner.latency.is_zero() {
            tokio::time::sleep(self.inner.latency).await;
        }
    }

    fn lock_candidates(&self) -> std::sync::MutexGuard<'_, Vec<Candidate>> {
        self.inner
            .candidates
            .lock()
            .expect("candidate store lock poisoned")
    }
}

/// Fabricates the decorative audit string: `0x` plus 64 random hex chars.
/// Deliberately not a hash of the offer — the source labels a random string
/// this way and nothing downstream reads it.
fn mock_audit_hash() -> String {
    let mut rng = rand::thread_rng();
    let hex: String = (0..32).map(|_| format!("{:02x}", rng.gen::<u8>())).collect();
    format!("0x{hex}")
}

fn seed_candidates() -> Vec<Candidate> {
    fn fixture_date(day: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, day, 0, 0, 0)
            .single()
            .expect("valid fixture date")
    }

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    vec![
        Candidate {
            id: "1".to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah.j@email.com".to_string(),
            phone: Some("+1 (555) 123-4567".to_string()),
            stage: Stage::Applied,
            match_score: 92,
            skills: skills(&["React", "Node.js", "TypeScript", "MongoDB", "AWS"]),
            applied_at: fixture_date(16),
            resume_url: Some("/resumes/sarah-johnson.pdf".to_string()),
            feedback_history: Vec::new(),
        },
        Candidate {
            id: "2".to_string(),
            name: "Michael Chen".to_string(),
            email: "mchen@email.com".to_string(),
            phone: None,
            stage: Stage::Applied,
            match_score: 88,
            skills: skills(&["Python", "Django", "PostgreSQL", "Docker", "Redis"]),
            applied_at: fixture_date(17),
            resume_url: None,
            feedback_history: Vec::new(),
        },
        Candidate {
            id: "3".to_string(),
            name: "Emily Rodriguez".to_string(),
            email: "emily.r@email.com".to_string(),
            phone: None,
            stage: Stage::Applied,
            match_score: 95,
            skills: skills(&[
                "Java",
                "Spring Boot",
                "Kubernetes",
                "GraphQL",
                "Microservices",
            ]),
            applied_at: fixture_date(15),
            resume_url: None,
            feedback_history: Vec::new(),
        },
        Candidate {
            id: "4".to_string(),
            name: "David Kim".to_string(),
            email: "dkim@email.com".to_string(),
            phone: None,
            stage: Stage::Applied,
            match_score: 85,
            skills: skills(&["JavaScript", "Vue.js", "Express", "MySQL"]),
            applied_at: fixture_date(18),
            resume_url: None,
            feedback_history: Vec::new(),
        },
    ]
}
