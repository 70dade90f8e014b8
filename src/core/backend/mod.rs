// src/core/backend/mod.rs

// The analysis backend is a strategy: the controller only ever sees
// `AnalysisBackend`, and `build` picks the implementation from settings.
pub mod live;
pub mod mock;

use std::sync::Arc;

use async_trait::async_trait;
use color_eyre::eyre::Result;

use crate::config::{BackendMode, Settings};
use crate::core::error::ScanError;
use crate::core::models::{MatchJobsResponse, ParsedResume, UploadedFile};

use self::live::LiveBackend;
use self::mock::MockBackend;

/// The two round-trips of one analysis. Implementations must not retry.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Short label for the header bar and the log.
    fn describe(&self) -> String;

    /// Sends the résumé and returns the backend's parse result.
    async fn upload_resume(&self, file: &UploadedFile) -> Result<ParsedResume, ScanError>;

    /// Sends a parse result back and returns matching jobs.
    async fn match_jobs(&self, resume: &ParsedResume) -> Result<MatchJobsResponse, ScanError>;
}

pub fn build(settings: &Settings) -> Result<Arc<dyn AnalysisBackend>> {
    let backend: Arc<dyn AnalysisBackend> = match settings.backend.mode {
        BackendMode::Live => Arc::new(LiveBackend::new(&settings.backend.base_url)?),
        BackendMode::Mock => Arc::new(MockBackend::new(settings.mock.delay())),
    };
    Ok(backend)
}
