//! Business logic services

pub mod admin_service;
pub mod auth_service;
pub mod judge_service;
pub mod problem_service;
pub mod run_service;
pub mod submission_service;

pub use admin_service::AdminService;
pub use auth_service::AuthService;
pub use judge_service::{Judge, JudgeContext};
pub use problem_service::ProblemService;
pub use run_service::RunService;
pub use submission_service::SubmissionService;
