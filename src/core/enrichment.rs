// src/core/enrichment.rs

//! Placeholder enrichment.
//!
//! The backend only extracts technical skills and job matches. Everything
//! else the results view shows (score, experience, contact details, ...)
//! is generated here until a real analysis engine supplies it. Nothing in
//! the control flow depends on this module beyond `Placeholders::generate`.

use rand::Rng;

use crate::core::models::{ContactPresence, Experience, ExperienceLevel};

const STRENGTHS: [&str; 5] = [
    "Strong technical background in relevant technologies",
    "Clear and concise work experience descriptions",
    "Good educational qualifications",
    "Professional email and contact information",
    "Well-structured resume format",
];

const IMPROVEMENTS: [&str; 5] = [
    "Add more quantified achievements with specific metrics",
    "Include relevant certifications or training",
    "Expand on leadership experience",
    "Add volunteer work or side projects",
    "Include a brief professional summary",
];

const SOFT_SKILLS: [&str; 4] = ["Leadership", "Communication", "Problem-solving", "Team collaboration"];

const EDUCATION: &str = "Bachelor's Degree in Computer Science";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub experience: Experience,
    pub soft_skills: Vec<String>,
    pub education: String,
    pub contact: ContactPresence,
}

impl Placeholders {
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let level = if rng.gen_bool(0.4) {
            ExperienceLevel::Senior
        } else if rng.gen_bool(0.7) {
            ExperienceLevel::MidLevel
        } else {
            ExperienceLevel::Junior
        };

        Self {
            score: rng.gen_range(70..=99),
            strengths: to_owned(&STRENGTHS),
            improvements: to_owned(&IMPROVEMENTS),
            experience: Experience { years: rng.gen_range(2..=9), level },
            soft_skills: to_owned(&SOFT_SKILLS),
            education: EDUCATION.to_string(),
            contact: ContactPresence {
                email: true,
                phone: rng.gen_bool(0.7),
                linkedin: rng.gen_bool(0.6),
            },
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
