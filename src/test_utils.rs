//! Test doubles for the sandbox and the persistence layer
//!
//! Shared by the service and handler tests; nothing here touches the
//! network or a database.

#[cfg(test)]
pub mod executor {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::{
        executor::{CodeExecutor, ExecutorError},
        models::{ExecutionResult, StageResult},
    };

    type Respond = dyn Fn(&str, &str) -> Result<ExecutionResult, ExecutorError> + Send + Sync;
    type Delay = dyn Fn(&str) -> Duration + Send + Sync;

    /// Executor answering from a closure over (code, stdin), with
    /// optional per-call latency and in-flight accounting
    pub struct ScriptedExecutor {
        respond: Box<Respond>,
        delay: Box<Delay>,
        calls: AtomicUsize,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl ScriptedExecutor {
        pub fn new<F>(respond: F) -> Self
        where
            F: Fn(&str, &str) -> Result<ExecutionResult, ExecutorError> + Send + Sync + 'static,
        {
            Self {
                respond: Box::new(respond),
                delay: Box::new(|_: &str| Duration::ZERO),
                calls: AtomicUsize::new(0),
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
            }
        }

        /// Latency per call, chosen from stdin
        pub fn with_delay<D>(mut self, delay: D) -> Self
        where
            D: Fn(&str) -> Duration + Send + Sync + 'static,
        {
            self.delay = Box::new(delay);
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn max_in_flight(&self) -> usize {
            self.max_in_flight.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CodeExecutor for ScriptedExecutor {
        async fn execute(
            &self,
            _language: &str,
            code: &str,
            stdin: &str,
        ) -> Result<ExecutionResult, ExecutorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);

            let delay = (self.delay)(stdin);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let result = (self.respond)(code, stdin);

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            result
        }
    }

    /// A result with only a run stage
    pub fn ran(stdout: &str, stderr: &str, code: i32) -> ExecutionResult {
        ExecutionResult {
            language: Some("python".to_string()),
            version: Some("3.10.0".to_string()),
            compile: None,
            run: Some(StageResult {
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
                code: Some(code),
                signal: None,
                output: Some(format!("{stdout}{stderr}")),
            }),
        }
    }

    /// Pretend to run a two-number program: `a - b` in the source
    /// subtracts, anything else adds. Prints the result with a newline.
    pub fn arithmetic(code: &str, stdin: &str) -> Result<ExecutionResult, ExecutorError> {
        let numbers: Vec<i64> = stdin
            .split_whitespace()
            .filter_map(|n| n.parse().ok())
            .collect();
        let &[a, b] = numbers.as_slice() else {
            return Ok(ran("", "ValueError: not enough values to unpack", 1));
        };

        let answer = if code.contains("a - b") { a - b } else { a + b };
        Ok(ran(&format!("{answer}\n"), "", 0))
    }

    /// A sandbox that is down
    pub fn unavailable() -> ExecutorError {
        ExecutorError::Status {
            status: 503,
            message: "sandbox unavailable".to_string(),
        }
    }
}

#[cfg(test)]
pub mod store {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{DateTime, Utc};

    use crate::{
        db::ContestStore,
        error::{AppError, AppResult},
        models::{Problem, Submission, SubmissionStatus, Team, TestCase},
    };

    /// `ContestStore` over hash maps, keyed like the real tables
    #[derive(Default)]
    pub struct InMemoryStore {
        problems: Mutex<HashMap<i32, Problem>>,
        teams: Mutex<HashMap<i32, Team>>,
        test_cases: Mutex<Vec<TestCase>>,
        submissions: Mutex<HashMap<(i32, i32), Submission>>,
        lookups_fail: Mutex<bool>,
    }

    impl InMemoryStore {
        pub fn with_problem(self, id: i32) -> Self {
            self.problems.lock().unwrap().insert(
                id,
                Problem {
                    id,
                    title: format!("Problem {id}"),
                    buggy_file_blob: "def add(a, b):\n    return a - b\n".to_string(),
                },
            );
            self
        }

        pub fn with_team(self, id: i32) -> Self {
            self.teams.lock().unwrap().insert(
                id,
                Team {
                    id,
                    name: format!("team-{id}"),
                    password_hash: String::new(),
                },
            );
            self
        }

        pub fn with_test_case(self, problem_id: i32, input: &str, expected: &str, is_hidden: bool) -> Self {
            {
                let mut cases = self.test_cases.lock().unwrap();
                let test_case_id = cases.len() as i32 + 1;
                cases.push(TestCase {
                    test_case_id,
                    problem_id,
                    input_data: input.to_string(),
                    expected_output: expected.to_string(),
                    is_hidden,
                });
            }
            self
        }

        /// Make every lookup fail as if the database were unreachable
        pub fn failing(self) -> Self {
            *self.lookups_fail.lock().unwrap() = true;
            self
        }

        pub fn submission_count(&self) -> usize {
            self.submissions.lock().unwrap().len()
        }

        fn check(&self) -> AppResult<()> {
            if *self.lookups_fail.lock().unwrap() {
                return Err(AppError::Database("connection refused".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ContestStore for InMemoryStore {
        async fn find_problem(&self, id: i32) -> AppResult<Option<Problem>> {
            self.check()?;
            Ok(self.problems.lock().unwrap().get(&id).cloned())
        }

        async fn find_team(&self, id: i32) -> AppResult<Option<Team>> {
            self.check()?;
            Ok(self.teams.lock().unwrap().get(&id).cloned())
        }

        async fn list_test_cases(&self, problem_id: i32, include_hidden: bool) -> AppResult<Vec<TestCase>> {
            self.check()?;
            Ok(self
                .test_cases
                .lock()
                .unwrap()
                .iter()
                .filter(|tc| tc.problem_id == problem_id && (include_hidden || !tc.is_hidden))
                .cloned()
                .collect())
        }

        async fn find_submission(&self, team_id: i32, problem_id: i32) -> AppResult<Option<Submission>> {
            self.check()?;
            Ok(self.submissions.lock().unwrap().get(&(team_id, problem_id)).cloned())
        }

        async fn upsert_submission(
            &self,
            team_id: i32,
            problem_id: i32,
            code: &str,
            status: SubmissionStatus,
            submitted_at: DateTime<Utc>,
        ) -> AppResult<Submission> {
            self.check()?;
            let submission = Submission {
                team_id,
                problem_id,
                submitted_at,
                code_file_blob: code.to_string(),
                status: status.as_str().to_string(),
            };
            self.submissions
                .lock()
                .unwrap()
                .insert((team_id, problem_id), submission.clone());
            Ok(submission)
        }
    }
}
