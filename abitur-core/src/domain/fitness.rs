//! Physical fitness standards domain model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Exercises covered by the entrance fitness assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Exercise {
    PullUps,
    Sprint100m,
    Run3km,
    Swimming100m,
}

impl Exercise {
    pub const ALL: [Exercise; 4] = [
        Exercise::PullUps,
        Exercise::Sprint100m,
        Exercise::Run3km,
        Exercise::Swimming100m,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Exercise::PullUps => "pull-ups",
            Exercise::Sprint100m => "100m sprint",
            Exercise::Run3km => "3km run",
            Exercise::Swimming100m => "100m swimming",
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exercise {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pull-ups" | "pullups" => Ok(Exercise::PullUps),
            "sprint" | "100m" | "run100" => Ok(Exercise::Sprint100m),
            "run" | "3km" | "run3km" => Ok(Exercise::Run3km),
            "swimming" | "swim" => Ok(Exercise::Swimming100m),
            other => Err(format!(
                "unknown exercise '{}' (expected pull-ups, sprint, run, or swimming)",
                other
            )),
        }
    }
}

/// Required marks for one exercise at the three grading levels
///
/// Values are display strings (rep counts or times) exactly as published in
/// the assessment tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FitnessStandard {
    pub satisfactory: &'static str,
    pub good: &'static str,
    pub excellent: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_parsing() {
        assert_eq!("pull-ups".parse::<Exercise>().unwrap(), Exercise::PullUps);
        assert_eq!("100m".parse::<Exercise>().unwrap(), Exercise::Sprint100m);
        assert_eq!("3km".parse::<Exercise>().unwrap(), Exercise::Run3km);
        assert_eq!("swim".parse::<Exercise>().unwrap(), Exercise::Swimming100m);
        assert!("javelin".parse::<Exercise>().is_err());
    }

    #[test]
    fn test_all_lists_every_exercise() {
        assert_eq!(Exercise::ALL.len(), 4);
    }
}
