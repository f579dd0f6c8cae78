//! Scoring service - admission score calculation

use crate::domain::{ExamScores, ScoreBand, ScoreSummary};

/// Scoring service for combined admission totals
pub struct ScoringService;

impl ScoringService {
    pub fn new() -> Self {
        Self
    }

    /// Compute the combined total and its qualitative band
    ///
    /// The exam subjects sum separately from the fitness points, then both
    /// feed the grand total. The progress bar scales the total against a
    /// 300-point ceiling.
    pub fn calculate(&self, scores: &ExamScores) -> ScoreSummary {
        let exam_total = scores.russian + scores.math + scores.specialty;
        let total = exam_total + scores.fitness;

        let band = if total >= 200 {
            ScoreBand::Strong
        } else if total >= 150 {
            ScoreBand::Average
        } else {
            ScoreBand::NeedsImprovement
        };

        ScoreSummary {
            exam_total,
            fitness: scores.fitness,
            total,
            progress_percent: (total / 3).min(100),
            band,
        }
    }
}

impl Default for ScoringService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(russian: u32, math: u32, specialty: u32, fitness: u32) -> ScoreSummary {
        ScoringService::new().calculate(&ExamScores {
            russian,
            math,
            specialty,
            fitness,
        })
    }

    #[test]
    fn test_totals_split_exams_from_fitness() {
        let s = summary(70, 65, 60, 40);
        assert_eq!(s.exam_total, 195);
        assert_eq!(s.fitness, 40);
        assert_eq!(s.total, 235);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(summary(70, 70, 60, 0).band, ScoreBand::Strong); // 200
        assert_eq!(summary(70, 70, 59, 0).band, ScoreBand::Average); // 199
        assert_eq!(summary(50, 50, 50, 0).band, ScoreBand::Average); // 150
        assert_eq!(summary(50, 50, 49, 0).band, ScoreBand::NeedsImprovement); // 149
    }

    #[test]
    fn test_progress_is_capped_at_100() {
        assert_eq!(summary(100, 100, 100, 50).progress_percent, 100);
        assert_eq!(summary(50, 50, 50, 0).progress_percent, 50);
        assert_eq!(summary(0, 0, 0, 0).progress_percent, 0);
    }

    #[test]
    fn test_zero_inputs_are_valid() {
        let s = summary(0, 0, 0, 0);
        assert_eq!(s.total, 0);
        assert_eq!(s.band, ScoreBand::NeedsImprovement);
    }
}
