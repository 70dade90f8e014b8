// src/core/error.rs

use reqwest::StatusCode;
use strum::Display;
use thiserror::Error;

use crate::core::validation::ValidationError;

/// Which of the two backend round-trips an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Stage {
    Upload,
    #[strum(to_string = "Match jobs")]
    MatchJobs,
}

/// Everything that can end a scan in the error view.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{stage} failed: {status} {status_text} - {body}")]
    Status {
        stage: Stage,
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("{stage} request failed: {source}")]
    Transport {
        stage: Stage,
        #[source]
        source: reqwest::Error,
    },

    #[error("{stage} returned a malformed response: {reason}")]
    Malformed { stage: Stage, reason: String },
}

impl ScanError {
    pub fn status(stage: Stage, status: StatusCode, body: impl Into<String>) -> Self {
        Self::Status {
            stage,
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.into(),
        }
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Validation(_) => None,
            Self::Status { stage, .. } | Self::Transport { stage, .. } | Self::Malformed { stage, .. } => {
                Some(*stage)
            }
        }
    }
}
