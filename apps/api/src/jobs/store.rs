#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::models::{Application, ApplicationInput, Job, JobStatus, JobUpdate, NewJob};

/// In-memory job store, seeded once at construction. Single-writer,
/// single-reader semantics — there is no conflict resolution to do.
#[derive(Clone)]
pub struct JobStore {
    inner: Arc<JobStoreInner>,
}

struct JobStoreInner {
    jobs: Mutex<Vec<Job>>,
    latency: Duration,
}

impl JobStore {
    pub fn new(latency: Duration) -> Self {
        Self {
            inner: Arc::new(JobStoreInner {
                jobs: Mutex::new(seed_jobs()),
                latency,
            }),
        }
    }

    /// Snapshot of all postings, newest first.
    pub async fn fetch_jobs(&self) -> Vec<Job> {
        self.simulate_latency().await;
        self.lock_jobs().clone()
    }

    pub async fn fetch_job(&self, id: &str) -> Result<Job, AppError> {
        self.simulate_latency().await;
        self.lock_jobs()
            .iter()
            .find(|j| j.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Job not found".to_string()))
    }

    /// Creates a posting and prepends it to the list. Exactly one record is
    /// added per call; the new posting starts with zero applicants.
    pub async fn create_job(&self, input: NewJob) -> Result<Job, AppError> {
        validate_new_job(&input)?;
        self.simulate_latency().await;

        let job = Job {
            id: format!("job-{}", Uuid::new_v4()),
            title: input.title,
            department: input.department,
            description: input.description,
            location: input.location,
            employment_type: input.employment_type,
            status: input.status.unwrap_or(JobStatus::Active),
            applicants: 0,
            created_at: Utc::now(),
        };

        tracing::info!("Created job {} ({})", job.id, job.title);
        self.lock_jobs().insert(0, job.clone());
        Ok(job)
    }

    pub async fn update_job(&self, id: &str, updates: JobUpdate) -> Result<Job, AppError> {
        self.simulate_latency().await;

        let mut jobs = self.lock_jobs();
        let job = jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;
        job.apply(updates);
        Ok(job.clone())
    }

    /// Fabricates an application record. The mock neither stores it nor
    /// bumps the posting's applicant count — no referential checks exist.
    pub async fn apply_to_job(
        &self,
        job_id: &str,
        input: ApplicationInput,
    ) -> Result<Application, AppError> {
        self.simulate_latency().await;

        Ok(Application {
            id: format!("app-{}", Uuid::new_v4()),
            job_id: job_id.to_string(),
            applicant_name: input.applicant_name,
            applicant_email: input.applicant_email,
            cover_note: input.cover_note,
            status: "applied".to_string(),
            applied_at: Utc::now(),
        })
    }

    async fn simulate_latency(&self) {
        if !self.inner.latency.is_zero() {
            tokio::time::sleep(self.inner.latency).await;
        }
    }

    fn lock_jobs(&self) -> std::sync::MutexGuard<'_, Vec<Job>> {
        self.inner.jobs.lock().expect("job store lock poisoned")
    }
}

fn validate_new_job(input: &NewJob) -> Result<(), AppError> {
    let mut missing = Vec::new();
    if input.title.trim().is_empty() {
        missing.push("title");
    }
    if input.department.trim().is_empty() {
        missing.push("department");
    }
    if input.location.trim().is_empty() {
        missing.push("location");
    }
    if input.description.trim().is_empty() {
        missing.push("description");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// Seed fixture, loaded once. Applicant counts here are fixture values, not
/// derived from any application records.
fn seed_jobs() -> Vec<Job> {
    fn fixture_date(day: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, day, 0, 0, 0)
            .single()
            .expect("valid fixture date")
    }

    vec![
        Job {
            id: "1".to_string(),
            title: "Senior Backend Engineer".to_string(),
            department: "Engineering".to_string(),
            description: "We are looking for an experienced backend engineer to join our \
                          growing team and help build scalable systems."
                .to_string(),
            location: "San Francisco, CA".to_string(),
            employment_type: "Full-time".to_string(),
            status: JobStatus::Active,
            applicants: 45,
            created_at: fixture_date(10),
        },
        Job {
            id: "2".to_string(),
            title: "Product Designer".to_string(),
            department: "Design".to_string(),
            description: "Join our design team to create beautiful and functional user \
                          experiences for our products."
                .to_string(),
            location: "Remote".to_string(),
            employment_type: "Full-time".to_string(),
            status: JobStatus::Active,
            applicants: 32,
            created_at: fixture_date(12),
        },
        Job {
            id: "3".to_string(),
            title: "Data Scientist".to_string(),
            department: "Data & Analytics".to_string(),
            description: "Help us unlock insights from our data to drive business decisions \
                          and product improvements."
                .to_string(),
            location: "New York, NY".to_string(),
            employment_type: "Full-time".to_string(),
            status: JobStatus::Active,
            applicants: 28,
            created_at: fixture_date(15),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_store() -> JobStore {
        JobStore::new(Duration::ZERO)
    }

    fn make_input(title: &str) -> NewJob {
        NewJob {
            title: title.to_string(),
            department: "Eng".to_string(),
            description: "d".to_string(),
            location: "Remote".to_string(),
            employment_type: "Full-time".to_string(),
            status: None,
        }
    }

    #[tokio::test]
    async fn test_store_is_seeded_with_fixture() {
        let store = make_store();
        let jobs = store.fetch_jobs().await;
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].title, "Senior Backend Engineer");
    }

    #[tokio::test]
    async fn test_create_appends_exactly_one_active_job() {
        let store = make_store();
        let before = store.fetch_jobs().await.len();

        let job = store.create_job(make_input("X")).await.unwrap();
        let jobs = store.fetch_jobs().await;

        assert_eq!(jobs.len(), before + 1);
        assert!(job.id.starts_with("job-"));
        assert_eq!(job.status, JobStatus::Active);
        assert_eq!(job.applicants, 0);
        // New postings land at the head of the list.
        assert_eq!(jobs[0].id, job.id);
    }

    #[tokio::test]
    async fn test_create_honors_explicit_status() {
        let store = make_store();
        let mut input = make_input("Draft role");
        input.status = Some(JobStatus::Draft);

        let job = store.create_job(input).await.unwrap();
        assert_eq!(job.status, JobStatus::Draft);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_required_fields() {
        let store = make_store();
        let mut input = make_input("");
        input.description = "  ".to_string();

        let err = store.create_job(input).await.unwrap_err();
        match err {
            AppError::Validation(msg) => {
                assert!(msg.contains("title"));
                assert!(msg.contains("description"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(store.fetch_jobs().await.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_job_unknown_id_is_not_found() {
        let store = make_store();
        let err = store.fetch_job("nope").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let store = make_store();
        let updated = store
            .update_job(
                "1",
                JobUpdate {
                    status: Some(JobStatus::Closed),
                    location: Some("Austin, TX".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, JobStatus::Closed);
        assert_eq!(updated.location, "Austin, TX");
        assert_eq!(updated.title, "Senior Backend Engineer");
    }

    #[tokio::test]
    async fn test_apply_fabricates_record_without_touching_count() {
        let store = make_store();
        let before = store.fetch_job("1").await.unwrap().applicants;

        let application = store
            .apply_to_job(
                "1",
                ApplicationInput {
                    applicant_name: "Sam Park".to_string(),
                    applicant_email: "sam@park.dev".to_string(),
                    cover_note: None,
                },
            )
            .await
            .unwrap();

        assert!(application.id.starts_with("app-"));
        assert_eq!(application.status, "applied");
        assert_eq!(store.fetch_job("1").await.unwrap().applicants, before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_operations_await_mock_latency() {
        let store = JobStore::new(Duration::from_millis(500));
        let started = tokio::time::Instant::now();
        store.fetch_jobs().await;
        assert!(started.elapsed() >= Duration::from_millis(500));
    }
}
