//! Aptitude service - professional suitability test scoring

use crate::domain::result::{Error, Result};
use crate::domain::{Answer, AptitudeCategory, AptitudeOutcome, Question};

/// The default question set for the suitability test
pub fn default_questions() -> &'static [Question] {
    &[
        Question {
            id: "discipline",
            text: "Do you find it easy to follow a strict daily schedule?",
        },
        Question {
            id: "teamwork",
            text: "Do you prefer working as part of a close-knit team?",
        },
        Question {
            id: "stress",
            text: "Do you stay composed under time pressure and stress?",
        },
        Question {
            id: "fitness",
            text: "Do you exercise regularly and enjoy physical training?",
        },
        Question {
            id: "orders",
            text: "Are you comfortable both giving and carrying out instructions?",
        },
        Question {
            id: "relocation",
            text: "Are you ready to live away from home for extended periods?",
        },
        Question {
            id: "technical",
            text: "Are you interested in operating complex technical systems?",
        },
        Question {
            id: "responsibility",
            text: "Are you willing to take responsibility for other people?",
        },
    ]
}

/// Aptitude service scoring yes/no answer sets
pub struct AptitudeService {
    questions: &'static [Question],
}

impl AptitudeService {
    pub fn new() -> Self {
        Self {
            questions: default_questions(),
        }
    }

    /// The questions a caller should present, in order
    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    /// Score a completed answer set
    ///
    /// Each "yes" is worth one point; the category falls out of the share
    /// of points earned. An empty answer set cannot be scored.
    pub fn evaluate(&self, answers: &[Answer]) -> Result<AptitudeOutcome> {
        if answers.is_empty() {
            return Err(Error::validation("no answers to score"));
        }

        let points = answers.iter().filter(|a| **a == Answer::Yes).count() as u32;
        let total = answers.len() as u32;
        // Round to the nearest whole percent
        let percentage = (points * 100 + total / 2) / total;

        let category = if percentage >= 80 {
            AptitudeCategory::First
        } else if percentage >= 60 {
            AptitudeCategory::Second
        } else {
            AptitudeCategory::Third
        };

        Ok(AptitudeOutcome {
            points,
            total,
            percentage,
            category,
        })
    }
}

impl Default for AptitudeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(yes: usize, no: usize) -> Vec<Answer> {
        let mut v = vec![Answer::Yes; yes];
        v.extend(vec![Answer::No; no]);
        v
    }

    #[test]
    fn test_all_yes_is_first_category() {
        let outcome = AptitudeService::new().evaluate(&answers(8, 0)).unwrap();
        assert_eq!(outcome.points, 8);
        assert_eq!(outcome.percentage, 100);
        assert_eq!(outcome.category, AptitudeCategory::First);
    }

    #[test]
    fn test_category_thresholds() {
        let svc = AptitudeService::new();
        // 8/10 = 80% -> I
        assert_eq!(
            svc.evaluate(&answers(8, 2)).unwrap().category,
            AptitudeCategory::First
        );
        // 6/10 = 60% -> II
        assert_eq!(
            svc.evaluate(&answers(6, 4)).unwrap().category,
            AptitudeCategory::Second
        );
        // 5/10 = 50% -> III
        assert_eq!(
            svc.evaluate(&answers(5, 5)).unwrap().category,
            AptitudeCategory::Third
        );
    }

    #[test]
    fn test_percentage_rounds_to_nearest() {
        // 5/8 = 62.5% -> 63
        let outcome = AptitudeService::new().evaluate(&answers(5, 3)).unwrap();
        assert_eq!(outcome.percentage, 63);
        assert_eq!(outcome.category, AptitudeCategory::Second);
    }

    #[test]
    fn test_empty_answer_set_is_rejected() {
        assert!(AptitudeService::new().evaluate(&[]).is_err());
    }

    #[test]
    fn test_default_questions_have_unique_ids() {
        let questions = default_questions();
        let mut ids: Vec<_> = questions.iter().map(|q| q.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), questions.len());
    }
}
