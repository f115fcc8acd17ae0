//! Error audit trail
//!
//! Organizers get an append-only record of everything that went wrong
//! while judging: compile and runtime failures of submitted programs,
//! failed sandbox calls, and failed requests. Participants never see it.

pub mod classifier;
pub mod error_log;

pub use classifier::{classify, Classification};
pub use error_log::{ErrorLog, ErrorLogQuery};
