// src/core/pipeline.rs

use tracing::{info, warn};

use crate::core::backend::AnalysisBackend;
use crate::core::enrichment::Placeholders;
use crate::core::error::ScanError;
use crate::core::models::{
    AnalysisResult, JobMatch, MatchJobsResponse, ParsedResume, SkillsBreakdown, UploadedFile,
};

/// Runs one analysis attempt end to end.
///
/// The file is validated again before anything leaves the machine, then the
/// two backend calls run strictly in sequence: the job-match request carries
/// the upload's answer, so it cannot start earlier. The first failure ends the
/// attempt; nothing is retried.
pub async fn run_analysis(backend: &dyn AnalysisBackend, file: &UploadedFile) -> Result<AnalysisResult, ScanError> {
    if let Err(e) = file.validate() {
        warn!(file = %file.name, error = %e, "Upload rejected before any request.");
        return Err(e.into());
    }

    let resume = backend.upload_resume(file).await?;
    let matches = backend.match_jobs(&resume).await?;

    let placeholders = Placeholders::generate(&mut rand::thread_rng());
    let analysis = assemble(&resume, matches, placeholders);
    info!(
        file = %file.name,
        keywords = analysis.keywords.len(),
        jobs = analysis.job_matches.len(),
        "Analysis complete."
    );
    Ok(analysis)
}

/// Combines backend-sourced data with placeholder enrichment. Keywords,
/// technical skills and job matches come from the backend; every other field
/// comes from `placeholders`.
pub fn assemble(resume: &ParsedResume, matches: MatchJobsResponse, placeholders: Placeholders) -> AnalysisResult {
    let job_matches = matches
        .matches
        .into_iter()
        .enumerate()
        .map(|(index, raw)| JobMatch::from_backend(index, raw))
        .collect();

    AnalysisResult {
        score: placeholders.score,
        strengths: placeholders.strengths,
        improvements: placeholders.improvements,
        keywords: resume.technical_skills.clone(),
        experience: placeholders.experience,
        skills: SkillsBreakdown {
            technical: resume.technical_skills.clone(),
            soft: placeholders.soft_skills,
        },
        education: placeholders.education,
        contact: placeholders.contact,
        job_matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Stage;
    use crate::core::models::{MAX_UPLOAD_BYTES, PDF_MEDIA_TYPE};
    use async_trait::async_trait;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use reqwest::StatusCode;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    /// Replays canned answers and records which calls were made.
    struct ScriptedBackend {
        upload: Result<Value, StatusCode>,
        match_jobs: Result<Value, StatusCode>,
        calls: Mutex<Vec<&'static str>>,
        forwarded: Mutex<Option<Value>>,
    }

    impl ScriptedBackend {
        fn new(upload: Result<Value, StatusCode>, match_jobs: Result<Value, StatusCode>) -> Self {
            Self { upload, match_jobs, calls: Mutex::new(Vec::new()), forwarded: Mutex::new(None) }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AnalysisBackend for ScriptedBackend {
        fn describe(&self) -> String {
            "scripted".into()
        }

        async fn upload_resume(&self, _file: &UploadedFile) -> Result<ParsedResume, ScanError> {
            self.calls.lock().unwrap().push("upload");
            match &self.upload {
                Ok(body) => ParsedResume::from_json(body.clone())
                    .map_err(|reason| ScanError::Malformed { stage: Stage::Upload, reason }),
                Err(status) => Err(ScanError::status(Stage::Upload, *status, "upload exploded")),
            }
        }

        async fn match_jobs(&self, resume: &ParsedResume) -> Result<MatchJobsResponse, ScanError> {
            self.calls.lock().unwrap().push("match");
            *self.forwarded.lock().unwrap() = Some(resume.raw.clone());
            match &self.match_jobs {
                Ok(body) => serde_json::from_value(body.clone())
                    .map_err(|e| ScanError::Malformed { stage: Stage::MatchJobs, reason: e.to_string() }),
                Err(status) => Err(ScanError::status(Stage::MatchJobs, *status, "no jobs today")),
            }
        }
    }

    fn happy_backend() -> ScriptedBackend {
        ScriptedBackend::new(
            Ok(json!({ "technical_skills": ["Go", "SQL"] })),
            Ok(json!({ "matches": [{ "title": "X", "company": "Y", "score": 0.8 }] })),
        )
    }

    fn pdf(size: usize) -> UploadedFile {
        UploadedFile::new("cv.pdf", PDF_MEDIA_TYPE, vec![0u8; size])
    }

    #[tokio::test]
    async fn non_pdf_is_rejected_without_network() {
        let backend = happy_backend();
        let file = UploadedFile::new("cv.docx", "application/msword", vec![1, 2, 3]);

        let err = run_analysis(&backend, &file).await.unwrap_err();
        assert!(matches!(err, ScanError::Validation(_)));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn oversized_pdf_is_rejected_without_network() {
        let backend = happy_backend();
        let err = run_analysis(&backend, &pdf(MAX_UPLOAD_BYTES as usize + 1)).await.unwrap_err();
        assert_eq!(err.to_string(), "File size must be less than 10MB.");
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn successful_exchange_builds_the_aggregate() {
        let backend = happy_backend();
        let analysis = run_analysis(&backend, &pdf(16)).await.unwrap();

        assert_eq!(backend.calls(), vec!["upload", "match"]);
        assert_eq!(analysis.keywords, vec!["Go", "SQL"]);
        assert_eq!(analysis.skills.technical, vec!["Go", "SQL"]);
        assert_eq!(analysis.job_matches.len(), 1);
        assert_eq!(analysis.job_matches[0].alignment_score, 80);
        assert_eq!(analysis.job_matches[0].title, "X");
        assert!((70..=99).contains(&analysis.score));
    }

    #[tokio::test]
    async fn upload_body_is_forwarded_verbatim() {
        let upload = json!({ "technical_skills": ["Go"], "email": "ada@example.com", "extra": { "n": 1 } });
        let backend = ScriptedBackend::new(Ok(upload.clone()), Ok(json!({ "matches": [] })));

        run_analysis(&backend, &pdf(4)).await.unwrap();
        assert_eq!(backend.forwarded.lock().unwrap().clone(), Some(upload));
    }

    #[tokio::test]
    async fn failed_upload_skips_job_matching() {
        let backend = ScriptedBackend::new(
            Err(StatusCode::INTERNAL_SERVER_ERROR),
            Ok(json!({ "matches": [] })),
        );

        let err = run_analysis(&backend, &pdf(4)).await.unwrap_err();
        assert_eq!(err.to_string(), "Upload failed: 500 Internal Server Error - upload exploded");
        assert_eq!(backend.calls(), vec!["upload"]);
    }

    #[tokio::test]
    async fn failed_job_matching_reports_status() {
        let backend = ScriptedBackend::new(
            Ok(json!({ "technical_skills": ["Go"] })),
            Err(StatusCode::SERVICE_UNAVAILABLE),
        );

        let err = run_analysis(&backend, &pdf(4)).await.unwrap_err();
        assert!(err.to_string().contains("503"));
        assert_eq!(err.stage(), Some(Stage::MatchJobs));
    }

    #[tokio::test]
    async fn malformed_match_body_is_an_error() {
        let backend = ScriptedBackend::new(
            Ok(json!({ "technical_skills": ["Go"] })),
            Ok(json!({ "jobs": [] })),
        );

        let err = run_analysis(&backend, &pdf(4)).await.unwrap_err();
        assert!(matches!(err, ScanError::Malformed { stage: Stage::MatchJobs, .. }));
    }

    #[test]
    fn assemble_keeps_backend_order_and_ids() {
        let resume = ParsedResume::from_json(json!({ "technical_skills": ["Rust"] })).unwrap();
        let matches: MatchJobsResponse = serde_json::from_value(json!({ "matches": [
            { "title": "A", "company": "C1", "score": 0.35, "matched_skills": ["Rust"], "missing_skills": ["Go"] },
            { "title": "B", "company": "C2", "score": 0.9, "url": "https://jobs.example.com/b" },
        ]}))
        .unwrap();
        let placeholders = Placeholders::generate(&mut StdRng::seed_from_u64(1));

        let analysis = assemble(&resume, matches, placeholders.clone());
        let ids: Vec<&str> = analysis.job_matches.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(analysis.job_matches[0].alignment_score, 35);
        assert_eq!(analysis.job_matches[0].missing_skills, vec!["Go"]);
        assert_eq!(analysis.job_matches[1].url, "https://jobs.example.com/b");
        assert_eq!(analysis.score, placeholders.score);
        assert_eq!(analysis.contact, placeholders.contact);
    }
}
