//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod problem_repo;
pub mod submission_repo;
pub mod team_repo;

pub use problem_repo::ProblemRepository;
pub use submission_repo::SubmissionRepository;
pub use team_repo::TeamRepository;
