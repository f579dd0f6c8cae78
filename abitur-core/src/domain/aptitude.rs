//! Aptitude test domain model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A yes/no answer to one test question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
}

impl FromStr for Answer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" => Ok(Answer::Yes),
            "no" | "n" => Ok(Answer::No),
            other => Err(format!("expected yes or no, got '{}'", other)),
        }
    }
}

/// One question of the aptitude test
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
}

/// Suitability category derived from the test result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AptitudeCategory {
    First,
    Second,
    Third,
}

impl AptitudeCategory {
    /// Guidance line shown alongside the category
    pub fn guidance(&self) -> &'static str {
        match self {
            AptitudeCategory::First => {
                "You are well suited for a military career. Universities with \
                 high entry requirements are worth considering."
            }
            AptitudeCategory::Second => {
                "You have good potential. Developing military-professional \
                 skills is recommended."
            }
            AptitudeCategory::Third => {
                "A consultation with a counselor is recommended to find the \
                 best development path."
            }
        }
    }
}

impl fmt::Display for AptitudeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AptitudeCategory::First => "Category I",
            AptitudeCategory::Second => "Category II",
            AptitudeCategory::Third => "Category III",
        };
        f.write_str(label)
    }
}

/// Scored outcome of a completed test
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AptitudeOutcome {
    /// Number of "yes" answers
    pub points: u32,
    /// Number of questions answered
    pub total: u32,
    /// Share of "yes" answers, rounded to whole percent
    pub percentage: u32,
    pub category: AptitudeCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_parsing() {
        assert_eq!("yes".parse::<Answer>().unwrap(), Answer::Yes);
        assert_eq!("Y".parse::<Answer>().unwrap(), Answer::Yes);
        assert_eq!(" no ".parse::<Answer>().unwrap(), Answer::No);
        assert!("maybe".parse::<Answer>().is_err());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(AptitudeCategory::First.to_string(), "Category I");
        assert_eq!(AptitudeCategory::Third.to_string(), "Category III");
    }
}
