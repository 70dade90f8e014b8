// src/app.rs

use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Local};
use ratatui::widgets::{ListState, ScrollbarState};
use tracing::{debug, info, warn};

use crate::core::error::ScanError;
use crate::core::models::{AnalysisResult, JobMatch, UploadedFile};
use crate::core::progress::ProgressSnapshot;
use crate::core::validation::{load_upload, normalize_dropped_path};

/// Which screen is showing, together with the only data that screen needs.
/// Results and an error message can never be held at the same time.
#[derive(Debug)]
pub enum ViewState {
    Upload {
        /// Inline rejection of the last submitted file.
        notice: Option<String>,
    },
    Scanning {
        file_name: String,
        started: Instant,
    },
    Results {
        file_name: String,
        analysis: Box<AnalysisResult>,
        analyzed_at: DateTime<Local>,
    },
    Error {
        message: String,
    },
}

impl Default for ViewState {
    fn default() -> Self {
        Self::Upload { notice: None }
    }
}

pub struct App {
    pub should_quit: bool,
    pub state: ViewState,
    pub input: String,
    pub backend_label: String,
    pub job_list_state: ListState,
    pub scroll_offset: usize,
    pub overview_scroll_state: ScrollbarState,
}

impl App {
    pub fn new(backend_label: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            state: ViewState::default(),
            input: String::new(),
            backend_label: backend_label.into(),
            job_list_state: ListState::default(),
            scroll_offset: 0,
            overview_scroll_state: ScrollbarState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// File-picker path: submits whatever has been typed into the input box.
    pub fn submit_input(&mut self) -> Option<UploadedFile> {
        if self.input.trim().is_empty() {
            return None;
        }
        let path = normalize_dropped_path(&self.input);
        self.submit(&path)
    }

    /// Drag-and-drop path: terminals deliver a dropped file as pasted text.
    pub fn submit_dropped(&mut self, pasted: &str) -> Option<UploadedFile> {
        if !matches!(self.state, ViewState::Upload { .. }) {
            return None;
        }
        let path = normalize_dropped_path(pasted);
        self.input = path.display().to_string();
        self.submit(&path)
    }

    /// `upload -> scanning`. A rejected file leaves the app on the upload
    /// screen with a notice; an accepted one is returned so the caller can
    /// start the backend exchange.
    fn submit(&mut self, path: &Path) -> Option<UploadedFile> {
        if !matches!(self.state, ViewState::Upload { .. }) {
            return None;
        }
        match load_upload(path) {
            Ok(file) => {
                info!(file = %file.name, bytes = file.size(), "Scan started.");
                self.state = ViewState::Scanning { file_name: file.name.clone(), started: Instant::now() };
                Some(file)
            }
            Err(rejection) => {
                warn!(path = %path.display(), reason = %rejection, "File rejected.");
                self.state = ViewState::Upload { notice: Some(rejection.to_string()) };
                None
            }
        }
    }

    /// `scanning -> results | error`. Outcomes arriving in any other state
    /// (there is no cancellation, so this only happens after a reset race)
    /// are dropped.
    pub fn complete_scan(&mut self, outcome: Result<AnalysisResult, ScanError>) {
        let ViewState::Scanning { file_name, .. } = &self.state else {
            debug!("Scan outcome arrived outside the scanning state; ignored.");
            return;
        };
        let file_name = file_name.clone();

        self.state = match outcome {
            Ok(analysis) => {
                info!(file = %file_name, score = analysis.score, jobs = analysis.job_matches.len(), "Showing results.");
                self.job_list_state = ListState::default();
                if !analysis.job_matches.is_empty() {
                    self.job_list_state.select(Some(0));
                }
                ViewState::Results { file_name, analysis: Box::new(analysis), analyzed_at: Local::now() }
            }
            Err(e) => {
                warn!(file = %file_name, stage = ?e.stage(), error = %e, "Scan failed.");
                ViewState::Error { message: e.to_string() }
            }
        };
    }

    /// `* -> upload`, dropping every trace of the previous attempt.
    pub fn reset(&mut self) {
        info!("Starting over.");
        self.state = ViewState::default();
        self.input = String::new();
        self.job_list_state = ListState::default();
        self.scroll_offset = 0;
        self.overview_scroll_state = ScrollbarState::default();
    }

    pub fn file_name(&self) -> Option<&str> {
        match &self.state {
            ViewState::Scanning { file_name, .. } | ViewState::Results { file_name, .. } => Some(file_name.as_str()),
            _ => None,
        }
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        match &self.state {
            ViewState::Results { analysis, .. } => Some(analysis.as_ref()),
            _ => None,
        }
    }

    pub fn progress(&self) -> Option<ProgressSnapshot> {
        match &self.state {
            ViewState::Scanning { started, .. } => Some(ProgressSnapshot::at(started.elapsed())),
            _ => None,
        }
    }

    pub fn selected_job(&self) -> Option<&JobMatch> {
        let index = self.job_list_state.selected()?;
        self.analysis()?.job_matches.get(index)
    }

    pub fn select_next_job(&mut self) {
        let Some(count) = self.analysis().map(|a| a.job_matches.len()).filter(|n| *n > 0) else {
            return;
        };
        let next = self.job_list_state.selected().map_or(0, |i| (i + 1).min(count - 1));
        self.job_list_state.select(Some(next));
    }

    pub fn select_previous_job(&mut self) {
        if self.analysis().is_none_or(|a| a.job_matches.is_empty()) {
            return;
        }
        let previous = self.job_list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.job_list_state.select(Some(previous));
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.overview_scroll_state = self.overview_scroll_state.position(self.scroll_offset);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
        self.overview_scroll_state = self.overview_scroll_state.position(self.scroll_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::enrichment::Placeholders;
    use crate::core::error::Stage;
    use crate::core::models::{MatchJobsResponse, ParsedResume};
    use crate::core::pipeline::assemble;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use reqwest::StatusCode;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn pdf_on_disk() -> NamedTempFile {
        let mut file = tempfile::Builder::new().prefix("resume").suffix(".pdf").tempfile().unwrap();
        file.write_all(b"%PDF-1.4\n").unwrap();
        file
    }

    fn sample_analysis() -> AnalysisResult {
        let resume = ParsedResume::from_json(json!({ "technical_skills": ["Go", "SQL"] })).unwrap();
        let matches: MatchJobsResponse = serde_json::from_value(json!({ "matches": [
            { "title": "X", "company": "Y", "score": 0.8 },
            { "title": "Z", "company": "W", "score": 0.4 },
        ]}))
        .unwrap();
        assemble(&resume, matches, Placeholders::generate(&mut StdRng::seed_from_u64(9)))
    }

    fn scanning_app() -> App {
        let pdf = pdf_on_disk();
        let mut app = App::new("test");
        app.input = pdf.path().display().to_string();
        assert!(app.submit_input().is_some());
        app
    }

    fn assert_clean_upload(app: &App) {
        assert!(matches!(app.state, ViewState::Upload { notice: None }));
        assert!(app.input.is_empty());
        assert_eq!(app.file_name(), None);
        assert!(app.analysis().is_none());
        assert!(app.selected_job().is_none());
    }

    #[test]
    fn starts_on_upload() {
        assert_clean_upload(&App::new("test"));
    }

    #[test]
    fn valid_pdf_moves_to_scanning() {
        let app = scanning_app();
        assert!(matches!(app.state, ViewState::Scanning { .. }));
        assert!(app.file_name().unwrap().starts_with("resume"));
        assert_eq!(app.progress().unwrap().current_step, 0);
    }

    #[test]
    fn wrong_type_stays_on_upload_with_notice() {
        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        let mut app = App::new("test");
        app.input = file.path().display().to_string();

        assert!(app.submit_input().is_none());
        match &app.state {
            ViewState::Upload { notice: Some(notice) } => assert_eq!(notice, "Please upload a PDF file only."),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn dropped_and_typed_paths_share_the_same_message() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let path = file.path().display().to_string();

        let mut typed = App::new("test");
        typed.input = path.clone();
        typed.submit_input();

        let mut dropped = App::new("test");
        dropped.submit_dropped(&format!("'{path}'\n"));

        let notice = |app: &App| match &app.state {
            ViewState::Upload { notice } => notice.clone(),
            _ => None,
        };
        assert!(notice(&typed).is_some());
        assert_eq!(notice(&typed), notice(&dropped));
    }

    #[test]
    fn empty_input_does_nothing() {
        let mut app = App::new("test");
        app.input = "   ".into();
        assert!(app.submit_input().is_none());
        assert!(matches!(app.state, ViewState::Upload { notice: None }));
    }

    #[test]
    fn second_submission_while_scanning_is_ignored() {
        let pdf = pdf_on_disk();
        let mut app = scanning_app();
        assert!(app.submit_dropped(&pdf.path().display().to_string()).is_none());
        assert!(matches!(app.state, ViewState::Scanning { .. }));
    }

    #[test]
    fn success_shows_results_with_first_job_selected() {
        let mut app = scanning_app();
        app.complete_scan(Ok(sample_analysis()));

        assert!(matches!(app.state, ViewState::Results { .. }));
        assert_eq!(app.analysis().unwrap().keywords, vec!["Go", "SQL"]);
        assert_eq!(app.selected_job().unwrap().alignment_score, 80);

        app.select_next_job();
        app.select_next_job();
        assert_eq!(app.selected_job().unwrap().title, "Z");
        app.select_previous_job();
        assert_eq!(app.selected_job().unwrap().title, "X");
    }

    #[test]
    fn failure_shows_error_with_status() {
        let mut app = scanning_app();
        app.complete_scan(Err(ScanError::status(Stage::MatchJobs, StatusCode::NOT_FOUND, "gone")));

        match &app.state {
            ViewState::Error { message } => assert!(message.contains("404")),
            other => panic!("unexpected state {other:?}"),
        }
        assert!(app.analysis().is_none());
    }

    #[test]
    fn late_outcome_after_reset_is_dropped() {
        let mut app = scanning_app();
        app.reset();
        app.complete_scan(Ok(sample_analysis()));
        assert_clean_upload(&app);
    }

    #[test]
    fn reset_from_results_clears_everything() {
        let mut app = scanning_app();
        app.complete_scan(Ok(sample_analysis()));
        app.scroll_down();
        app.reset();
        assert_clean_upload(&app);
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn reset_from_error_clears_everything() {
        let mut app = scanning_app();
        app.complete_scan(Err(ScanError::status(Stage::Upload, StatusCode::BAD_REQUEST, "nope")));
        app.reset();
        assert_clean_upload(&app);
    }
}
