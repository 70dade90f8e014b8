// src/ui/widgets/mod.rs

pub mod error_popup; // Popup shown when a scan fails.
pub mod footer;      // Key hints for the current screen.
pub mod header;      // Title bar with backend and file info.
pub mod results;     // Job list and job details.
pub mod scanning;    // Progress animation while the backend works.
pub mod summary;     // Score, experience, contact and skills overview.
pub mod upload;      // Path input and drop zone.
