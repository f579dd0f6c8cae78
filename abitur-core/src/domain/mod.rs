//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod aptitude;
mod fitness;
mod profile;
pub mod result;
mod scores;
mod session;
mod university;

pub use aptitude::{Answer, AptitudeCategory, AptitudeOutcome, Question};
pub use fitness::{Exercise, FitnessStandard};
pub use profile::{ProfileUpdate, Role, UserProfile};
pub use scores::{ExamScores, ScoreBand, ScoreSummary};
pub use session::{Navigation, Session};
pub use university::{University, UniversityKind};
