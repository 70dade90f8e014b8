// src/core/backend/mock.rs

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use super::AnalysisBackend;
use crate::core::error::{ScanError, Stage};
use crate::core::models::{MatchJobsResponse, ParsedResume, RawJobMatch, UploadedFile};

const SAMPLE_SKILLS: [&str; 6] = ["Rust", "Python", "SQL", "Docker", "React", "Git"];

struct CatalogJob {
    title: &'static str,
    company: &'static str,
    required: &'static [&'static str],
    requirements: &'static [&'static str],
    url: &'static str,
}

const CATALOG: [CatalogJob; 4] = [
    CatalogJob {
        title: "Backend Engineer",
        company: "Ferrous Systems Ltd",
        required: &["Rust", "SQL", "Docker", "Kubernetes"],
        requirements: &[
            "3+ years building production services",
            "Proficiency with relational databases and SQL",
            "Experience shipping containerised workloads",
        ],
        url: "https://jobs.example.com/backend-engineer",
    },
    CatalogJob {
        title: "Full Stack Developer",
        company: "Brightline Labs",
        required: &["React", "TypeScript", "Node.js", "SQL"],
        requirements: &[
            "Knowledge of modern React patterns",
            "Familiarity with REST API design",
            "Experience writing automated tests",
        ],
        url: "https://jobs.example.com/full-stack-developer",
    },
    CatalogJob {
        title: "Data Engineer",
        company: "Northwind Analytics",
        required: &["Python", "SQL", "Airflow", "AWS"],
        requirements: &[
            "Programming experience in Python",
            "Proficiency in SQL and data modelling",
            "Familiarity with cloud data platforms",
        ],
        url: "https://jobs.example.com/data-engineer",
    },
    CatalogJob {
        title: "DevOps Engineer",
        company: "Cloudward",
        required: &["Docker", "Kubernetes", "Terraform", "Git"],
        requirements: &[
            "Scripting experience in Bash or Python",
            "Knowledge of CI/CD pipelines",
            "Experience operating Kubernetes clusters",
        ],
        url: "https://jobs.example.com/devops-engineer",
    },
];

/// Stand-in for the analysis service: waits on a timer, then answers with a
/// fixed skill set and job matches synthesized from a small catalog.
pub struct MockBackend {
    delay: Duration,
}

impl MockBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl AnalysisBackend for MockBackend {
    fn describe(&self) -> String {
        "mock".to_string()
    }

    async fn upload_resume(&self, file: &UploadedFile) -> Result<ParsedResume, ScanError> {
        info!(file = %file.name, "Mock upload.");
        tokio::time::sleep(self.delay / 2).await;
        ParsedResume::from_json(json!({ "technical_skills": SAMPLE_SKILLS }))
            .map_err(|reason| ScanError::Malformed { stage: Stage::Upload, reason })
    }

    async fn match_jobs(&self, resume: &ParsedResume) -> Result<MatchJobsResponse, ScanError> {
        tokio::time::sleep(self.delay - self.delay / 2).await;
        let mut matches: Vec<RawJobMatch> =
            CATALOG.iter().map(|job| synthesize_match(job, &resume.technical_skills)).collect();
        // Stable sort keeps catalog order for ties.
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        info!(matches = matches.len(), "Mock job matches ready.");
        Ok(MatchJobsResponse { matches })
    }
}

/// Splits a job's required skills into the ones the résumé has and the ones
/// it lacks, so `matched ∪ missing == required` holds exactly.
fn synthesize_match(job: &CatalogJob, skills: &[String]) -> RawJobMatch {
    let (matched, missing): (Vec<String>, Vec<String>) = job
        .required
        .iter()
        .map(|s| s.to_string())
        .partition(|required| skills.iter().any(|have| have.eq_ignore_ascii_case(required)));

    let score = if job.required.is_empty() { 0.0 } else { matched.len() as f64 / job.required.len() as f64 };
    let improvement_advice = missing
        .iter()
        .map(|skill| format!("Build hands-on experience with {skill}"))
        .collect();

    RawJobMatch {
        title: job.title.to_string(),
        company: job.company.to_string(),
        score,
        required_skills: job.required.iter().map(|s| s.to_string()).collect(),
        matched_skills: matched,
        missing_skills: missing,
        requirements: job.requirements.iter().map(|s| s.to_string()).collect(),
        url: job.url.to_string(),
        improvement_advice,
    }
}
