// src/core/models.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::Display;

// --- Upload Contract ---

/// The only media type the backend accepts.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Largest résumé we are willing to send: 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// A résumé that passed validation and has been read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub media_type: String,
    pub content: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self { name: name.into(), media_type: media_type.into(), content }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

// --- Backend Wire Types ---

/// What `/upload_resume` answered, kept verbatim so it can be forwarded
/// unchanged to `/match-jobs`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResume {
    pub raw: Value,
    pub technical_skills: Vec<String>,
}

impl ParsedResume {
    /// Extracts `technical_skills` from the top level of the body, falling back
    /// to the `parsed_resume` envelope some backend builds wrap it in.
    pub fn from_json(raw: Value) -> Result<Self, String> {
        let skills = raw
            .get("technical_skills")
            .or_else(|| raw.pointer("/parsed_resume/technical_skills"))
            .ok_or_else(|| "missing `technical_skills`".to_string())?;
        let technical_skills = skills_from_value(skills)?;
        Ok(Self { raw, technical_skills })
    }
}

fn skills_from_value(value: &Value) -> Result<Vec<String>, String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(String::from)
                    .ok_or_else(|| format!("`technical_skills` entry is not a string: {item}"))
            })
            .collect(),
        Value::String(text) => Ok(split_skill_text(text)),
        other => Err(format!("`technical_skills` has unexpected type: {other}")),
    }
}

/// Splits the free-text skills section the parser returns when it could not
/// produce a list. "Not found" is the parser's sentinel for an empty section.
pub fn split_skill_text(text: &str) -> Vec<String> {
    if text.trim().is_empty() || text.trim() == "Not found" {
        return Vec::new();
    }
    text.split(|c| matches!(c, ';' | ',' | '|' | '\n'))
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Body of a successful `/match-jobs` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchJobsResponse {
    pub matches: Vec<RawJobMatch>,
}

/// One job as the backend describes it. `score` is a 0..1 fraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawJobMatch {
    pub title: String,
    pub company: String,
    pub score: f64,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub improvement_advice: Vec<String>,
}

// --- Analysis Aggregate ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum ExperienceLevel {
    Junior,
    #[serde(rename = "Mid-level")]
    #[strum(to_string = "Mid-level")]
    MidLevel,
    Senior,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub years: u32,
    pub level: ExperienceLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsBreakdown {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPresence {
    pub email: bool,
    pub phone: bool,
    pub linkedin: bool,
}

/// A job as the results view shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub alignment_score: u8,
    pub required_skills: Vec<String>,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub description: String,
    pub requirements: Vec<String>,
    pub url: String,
    pub improvement_advice: Vec<String>,
}

impl JobMatch {
    /// Builds the display record for the job at `index` (0-based) of a
    /// `/match-jobs` answer. Fields the backend never sends get fixed fillers.
    pub fn from_backend(index: usize, raw: RawJobMatch) -> Self {
        Self {
            id: (index + 1).to_string(),
            alignment_score: alignment_percent(raw.score),
            title: raw.title,
            company: raw.company,
            location: "Unknown".to_string(),
            salary: "Unknown".to_string(),
            employment_type: "Full-time".to_string(),
            required_skills: raw.required_skills,
            matching_skills: raw.matched_skills,
            missing_skills: raw.missing_skills,
            description: "No description available".to_string(),
            requirements: raw.requirements,
            url: raw.url,
            improvement_advice: raw.improvement_advice,
        }
    }
}

/// Scales a 0..1 fit fraction to a whole percentage.
pub fn alignment_percent(fraction: f64) -> u8 {
    if fraction.is_nan() {
        return 0;
    }
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Everything the results view renders for one analysed résumé.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub keywords: Vec<String>,
    pub experience: Experience,
    pub skills: SkillsBreakdown,
    pub education: String,
    pub contact: ContactPresence,
    pub job_matches: Vec<JobMatch>,
}
