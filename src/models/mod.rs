//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod error_log;
pub mod execution;
pub mod problem;
pub mod submission;
pub mod team;
pub mod test_case;
pub mod verdict;

pub use error_log::*;
pub use execution::*;
pub use problem::*;
pub use submission::*;
pub use team::*;
pub use test_case::*;
pub use verdict::*;
