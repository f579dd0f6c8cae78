//! Admission score domain model

use serde::{Deserialize, Serialize};

/// Raw inputs for the admission score calculation
///
/// Three state-exam subjects plus the physical fitness assessment, all in
/// points. Missing values are treated as zero by the callers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamScores {
    pub russian: u32,
    pub math: u32,
    pub specialty: u32,
    pub fitness: u32,
}

/// Qualitative band for a combined score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Average,
    NeedsImprovement,
}

impl ScoreBand {
    /// Guidance line shown alongside the band
    pub fn guidance(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "A good result for most universities",
            ScoreBand::Average => "An average result, sufficient for a number of universities",
            ScoreBand::NeedsImprovement => "Raising the scores is recommended",
        }
    }
}

/// Derived totals for a set of exam scores
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    /// Sum of the three exam subjects
    pub exam_total: u32,
    /// Physical fitness points, reported separately
    pub fitness: u32,
    /// Exam total plus fitness
    pub total: u32,
    /// Total scaled to a 0-100 bar
    pub progress_percent: u32,
    pub band: ScoreBand,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_guidance_is_distinct() {
        assert_ne!(
            ScoreBand::Strong.guidance(),
            ScoreBand::NeedsImprovement.guidance()
        );
    }
}
