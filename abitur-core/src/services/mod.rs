//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod account;
mod aptitude;
mod catalog;
mod fitness;
pub mod logging;
mod scoring;
mod status;
pub mod validation;

pub use account::{AccountService, Registered};
pub use aptitude::{default_questions, AptitudeService};
pub use catalog::{CatalogColumn, CatalogService};
pub use fitness::FitnessService;
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use scoring::ScoringService;
pub use status::{StatusService, StatusSummary};
