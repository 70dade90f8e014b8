// src/core/mod.rs

/// Data shared by the controller, the backends and the views: the upload,
/// the backend wire types and the `AnalysisResult` aggregate.
pub mod models;

/// The single upload precondition check and file loading.
pub mod validation;

/// `ScanError`, the reasons an analysis attempt can fail.
pub mod error;

/// The `AnalysisBackend` strategy and its live and mock implementations.
pub mod backend;

/// Drives the two sequential backend calls and assembles the result.
pub mod pipeline;

/// Client-side placeholder values for fields no backend supplies yet.
pub mod enrichment;

/// Time-driven progress model for the scanning screen.
pub mod progress;
