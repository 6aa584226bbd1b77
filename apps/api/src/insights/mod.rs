#![allow(dead_code)]

//! AI insight generation — pluggable, trait-based analyzer over shortlisted
//! candidates.
//!
//! Default: `MockAnalyzer` (canned content after a simulated delay; the
//! match score it interpolates is fixture-supplied, never computed).
//! Whether a real ML/ranking service ever backs this is an open question in
//! the source — the trait is the seam where one would plug in.
//!
//! `AppState` holds an `Arc<dyn CandidateAnalyzer>`, swapped at startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::AppError;
use crate::pipeline::models::Candidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapSeverity {
    Low,
    Medium,
    High,
}

/// A skill the job asks for that the analysis flags as missing or weak.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub severity: GapSeverity,
    pub note: String,
}

/// Full analysis returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: String,
    pub strengths: Vec<String>,
    pub skill_gaps: Vec<SkillGap>,
    pub interview_questions: Vec<String>,
}

/// The analyzer trait. Implement this to swap backends without touching
/// callers.
#[async_trait]
pub trait CandidateAnalyzer: Send + Sync {
    async fn analyze(&self, candidate: &Candidate) -> Result<AnalysisReport, AppError>;
}

/// Canned-content analyzer. The only thing it takes from the candidate is
/// the fixture match score; the delay mimics a round-trip to the
/// never-built ML service.
pub struct MockAnalyzer {
    latency: Duration,
}

impl MockAnalyzer {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl CandidateAnalyzer for MockAnalyzer {
    async fn analyze(&self, candidate: &Candidate) -> Result<AnalysisReport, AppError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(canned_report(candidate))
    }
}

fn canned_report(candidate: &Candidate) -> AnalysisReport {
    AnalysisReport {
        summary: format!(
            "Strong candidate with {}% match to job requirements. Demonstrates solid \
             technical foundation and relevant experience.",
            candidate.match_score
        ),
        strengths: vec![
            "Extensive experience with required tech stack".to_string(),
            "Strong problem-solving capabilities".to_string(),
            "Excellent communication skills based on application".to_string(),
            "Relevant project experience".to_string(),
        ],
        skill_gaps: vec![
            SkillGap {
                skill: "Kubernetes".to_string(),
                severity: GapSeverity::Medium,
                note: "Listed in job requirements but not in resume".to_string(),
            },
            SkillGap {
                skill: "CI/CD pipelines".to_string(),
                severity: GapSeverity::Low,
                note: "Would strengthen deployment knowledge".to_string(),
            },
        ],
        interview_questions: vec![
            "Can you describe your experience building scalable microservices architectures?"
                .to_string(),
            "Walk me through how you would optimize a slow database query in production."
                .to_string(),
            "Tell me about a time you had to debug a complex distributed system issue."
                .to_string(),
            "How do you approach code reviews and ensuring code quality in a team?".to_string(),
            "What strategies do you use for handling technical debt?".to_string(),
        ],
    }
}

/// Ranks candidates by match score, best first. Stable, so equal scores
/// keep their fixture order.
pub fn rank_by_match_score(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Stage;
    use chrono::Utc;

    fn make_candidate(id: &str, match_score: u8) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: format!("Candidate {id}"),
            email: format!("{id}@email.com"),
            phone: None,
            stage: Stage::Applied,
            match_score,
            skills: vec!["Rust".to_string()],
            applied_at: Utc::now(),
            resume_url: None,
            feedback_history: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_mock_analyzer_interpolates_match_score() {
        let analyzer = MockAnalyzer::new(Duration::ZERO);
        let report = analyzer.analyze(&make_candidate("1", 92)).await.unwrap();
        assert!(report.summary.contains("92% match"));
    }

    #[tokio::test]
    async fn test_mock_report_carries_canned_sections() {
        let analyzer = MockAnalyzer::new(Duration::ZERO);
        let report = analyzer.analyze(&make_candidate("1", 80)).await.unwrap();

        assert_eq!(report.strengths.len(), 4);
        assert_eq!(report.interview_questions.len(), 5);
        assert_eq!(report.skill_gaps.len(), 2);
        assert_eq!(report.skill_gaps[0].severity, GapSeverity::Medium);
        assert_eq!(report.skill_gaps[1].severity, GapSeverity::Low);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_analyzer_awaits_its_latency() {
        let analyzer = MockAnalyzer::new(Duration::from_secs(2));
        let started = tokio::time::Instant::now();
        analyzer.analyze(&make_candidate("1", 70)).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[test]
    fn test_ranking_sorts_descending_and_is_stable() {
        let ranked = rank_by_match_score(vec![
            make_candidate("a", 85),
            make_candidate("b", 95),
            make_candidate("c", 85),
            make_candidate("d", 92),
        ]);

        let order: Vec<(&str, u8)> = ranked
            .iter()
            .map(|c| (c.id.as_str(), c.match_score))
            .collect();
        assert_eq!(order, vec![("b", 95), ("d", 92), ("a", 85), ("c", 85)]);
    }
}
