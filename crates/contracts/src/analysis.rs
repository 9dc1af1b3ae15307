//! Wire contract of the resume analysis service

use serde::{Deserialize, Serialize};

/// Report returned by the analysis service for one resume/vacancy pair.
///
/// Deserialization is strict: a body missing any of the four fields fails to
/// parse, so an incomplete response surfaces as an exchange failure instead
/// of rendering half-empty sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Resume-to-vacancy fit, percent in the 0..=100 range
    pub match_score: f64,
    /// What the resume already covers
    pub strengths: Vec<String>,
    /// Skills the vacancy asks for that the resume lacks
    pub missing_skills: Vec<String>,
    /// Concrete edits the candidate should make
    pub suggestions: Vec<String>,
}
