//! Fitness service - entrance assessment standards

use crate::domain::{Exercise, FitnessStandard};

/// Fitness service answering standard lookups
pub struct FitnessService;

impl FitnessService {
    pub fn new() -> Self {
        Self
    }

    /// Required marks for one exercise
    pub fn standard_for(&self, exercise: Exercise) -> FitnessStandard {
        match exercise {
            Exercise::PullUps => FitnessStandard {
                satisfactory: "12 reps",
                good: "18 reps",
                excellent: "25 reps",
            },
            Exercise::Sprint100m => FitnessStandard {
                satisfactory: "15.5 s",
                good: "13.5 s",
                excellent: "12.5 s",
            },
            Exercise::Run3km => FitnessStandard {
                satisfactory: "14:00",
                good: "12:00",
                excellent: "10:30",
            },
            Exercise::Swimming100m => FitnessStandard {
                satisfactory: "2:40",
                good: "2:05",
                excellent: "1:35",
            },
        }
    }

    /// The full standards table
    pub fn all(&self) -> Vec<(Exercise, FitnessStandard)> {
        Exercise::ALL
            .iter()
            .map(|&e| (e, self.standard_for(e)))
            .collect()
    }
}

impl Default for FitnessService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_up_standards() {
        let std = FitnessService::new().standard_for(Exercise::PullUps);
        assert_eq!(std.satisfactory, "12 reps");
        assert_eq!(std.good, "18 reps");
        assert_eq!(std.excellent, "25 reps");
    }

    #[test]
    fn test_all_covers_every_exercise() {
        let table = FitnessService::new().all();
        assert_eq!(table.len(), Exercise::ALL.len());
    }
}
