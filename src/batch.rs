//! Best-effort fan-out over per-target Discord calls.
//!
//! The sweep commands issue one API call per member or channel. A single
//! rejection must not abort the rest of the batch, and the final reply has
//! to report what actually happened, so every call is settled individually
//! and failures are collected instead of swallowed.

use std::fmt::Display;
use std::future::Future;

use futures::future::join_all;

/// What happened to a fan-out once every per-target call settled.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Number of targets whose call succeeded.
    pub succeeded: usize,
    /// One entry per failed target.
    pub failures: Vec<BatchFailure>,
}

/// A single target whose call was rejected.
#[derive(Debug)]
pub struct BatchFailure {
    /// Human-readable target label (member tag, channel name).
    pub target: String,
    /// Display form of the rejection.
    pub reason: String,
}

impl BatchOutcome {
    /// True if every target settled successfully.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of targets in the batch.
    pub fn total(&self) -> usize {
        self.succeeded + self.failures.len()
    }

    /// One-line report for the invoker, e.g. `Banned 4 of 5 members (1 failed).`
    pub fn summary(&self, action: &str, noun: &str) -> String {
        if self.is_clean() {
            format!("{action} {total} {noun}.", total = self.total())
        } else {
            format!(
                "{action} {ok} of {total} {noun} ({failed} failed).",
                ok = self.succeeded,
                total = self.total(),
                failed = self.failures.len(),
            )
        }
    }
}

/// Run every per-target future to completion, concurrently.
///
/// Rejections are logged and recorded per-target; they never abort the
/// remaining calls.
pub async fn settle<F, T, E>(targets: Vec<(String, F)>) -> BatchOutcome
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    let (labels, calls): (Vec<_>, Vec<_>) = targets.into_iter().unzip();

    let results = join_all(calls).await;

    let mut outcome = BatchOutcome::default();
    for (target, result) in labels.into_iter().zip(results) {
        match result {
            Ok(_) => outcome.succeeded += 1,
            Err(reason) => {
                tracing::warn!("Batch call against '{target}' failed: {reason}");
                outcome.failures.push(BatchFailure {
                    target,
                    reason: reason.to_string(),
                });
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn attempt(fail: bool) -> Result<(), &'static str> {
        if fail {
            Err("rejected")
        } else {
            Ok(())
        }
    }

    #[tokio::test]
    async fn one_rejection_does_not_abort_the_rest() {
        let targets = vec![
            ("a".to_string(), attempt(false)),
            ("b".to_string(), attempt(true)),
            ("c".to_string(), attempt(false)),
        ];

        let outcome = settle(targets).await;

        assert_eq!(outcome.succeeded, 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].target, "b");
        assert_eq!(outcome.failures[0].reason, "rejected");
        assert_eq!(outcome.total(), 3);
    }

    #[tokio::test]
    async fn empty_batch_settles_clean() {
        let targets: Vec<(String, std::future::Ready<Result<(), &str>>)> = Vec::new();
        let outcome = settle(targets).await;
        assert!(outcome.is_clean());
        assert_eq!(outcome.total(), 0);
    }

    #[tokio::test]
    async fn summary_reports_counts() {
        let clean = settle(vec![("a".to_string(), attempt(false))]).await;
        assert_eq!(clean.summary("Banned", "members"), "Banned 1 members.");

        let partial = settle(vec![
            ("a".to_string(), attempt(false)),
            ("b".to_string(), attempt(true)),
        ])
        .await;
        assert_eq!(
            partial.summary("Banned", "members"),
            "Banned 1 of 2 members (1 failed)."
        );
    }
}
