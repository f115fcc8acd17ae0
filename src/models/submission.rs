//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Submission database model
///
/// Keyed by `(team_id, problem_id)`; a resubmission overwrites the row.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub team_id: i32,
    pub problem_id: i32,
    pub submitted_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub code_file_blob: String,
    pub status: String,
}

/// Overall status of a judged submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[serde(rename = "Accepted")]
    Accepted,
    #[serde(rename = "Wrong Answer")]
    WrongAnswer,
}

impl SubmissionStatus {
    /// Get status as stored and returned to clients
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::WrongAnswer => "Wrong Answer",
        }
    }

    /// Accepted iff every case passed; an empty set is vacuously accepted
    pub fn from_verdicts<I>(passed: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        if passed.into_iter().all(|p| p) {
            Self::Accepted
        } else {
            Self::WrongAnswer
        }
    }
}

/// A stored status string that is neither verdict
#[derive(Debug, thiserror::Error)]
#[error("unknown submission status: {0}")]
pub struct UnknownStatus(pub String);

impl std::str::FromStr for SubmissionStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Accepted" => Ok(Self::Accepted),
            "Wrong Answer" => Ok(Self::WrongAnswer),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_storage_form() {
        for status in [SubmissionStatus::Accepted, SubmissionStatus::WrongAnswer] {
            assert_eq!(status.as_str().parse::<SubmissionStatus>().unwrap(), status);
        }
        assert!("accepted".parse::<SubmissionStatus>().is_err());
    }

    #[test]
    fn test_single_failure_means_wrong_answer() {
        assert_eq!(
            SubmissionStatus::from_verdicts([true, true, true]),
            SubmissionStatus::Accepted
        );
        assert_eq!(
            SubmissionStatus::from_verdicts([true, false, true]),
            SubmissionStatus::WrongAnswer
        );
        assert_eq!(
            SubmissionStatus::from_verdicts(Vec::<bool>::new()),
            SubmissionStatus::Accepted
        );
    }

    #[test]
    fn test_serializes_with_display_names() {
        let json = serde_json::to_string(&SubmissionStatus::WrongAnswer).unwrap();
        assert_eq!(json, "\"Wrong Answer\"");
    }
}
