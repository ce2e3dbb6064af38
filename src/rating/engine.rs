//! Rating-update seam
//!
//! Rating computation is delegated to an external process that rewrites the
//! ranking file as a side effect. The tracker talks to it through the
//! [`RatingEngine`] trait so tests can substitute a recording stub instead of
//! spawning real processes.

use crate::error::{Result, TrackerError};
use crate::types::{GoalTally, PlayerId};
use std::process::Command;
use std::sync::RwLock;
use tracing::debug;

/// Everything the external rating process needs about one finalized match.
///
/// Side entries are substitution-annotated (`original#substitute`) when a
/// stand-in played, so the rating change lands on the original participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub red_side: Vec<String>,
    pub blue_side: Vec<String>,
    pub red_ratings: Vec<i32>,
    pub blue_ratings: Vec<i32>,
    pub goals: GoalTally,
}

/// Seam to the rating-update collaborator
#[cfg_attr(test, mockall::automock)]
pub trait RatingEngine: Send + Sync {
    /// Submit a finalized result. Blocks until the collaborator is done;
    /// the ranking file is expected to be rewritten once this returns.
    fn submit(&self, report: &MatchReport) -> Result<()>;
}

/// Rating engine that runs the configured external command.
///
/// The per-match positional arguments, appended after any fixed arguments,
/// are: red side (space-joined), blue side, red ratings (space-joined), blue
/// ratings, red goals, blue goals. The command's output and exit code are not
/// inspected; only spawn/wait failures are reported.
#[derive(Debug, Clone)]
pub struct ProcessRatingEngine {
    command: String,
    leading_args: Vec<String>,
}

impl ProcessRatingEngine {
    pub fn new(command: impl Into<String>, leading_args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            leading_args,
        }
    }
}

impl RatingEngine for ProcessRatingEngine {
    fn submit(&self, report: &MatchReport) -> Result<()> {
        let join = |values: &[i32]| {
            values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };

        debug!(
            "Invoking rating update command {} for {} vs {}",
            self.command,
            report.red_side.join(" "),
            report.blue_side.join(" ")
        );

        let status = Command::new(&self.command)
            .args(&self.leading_args)
            .arg(report.red_side.join(" "))
            .arg(report.blue_side.join(" "))
            .arg(join(&report.red_ratings))
            .arg(join(&report.blue_ratings))
            .arg(report.goals.red.to_string())
            .arg(report.goals.blue.to_string())
            .status()
            .map_err(|e| TrackerError::RatingProcessFailed {
                message: format!("{}: {}", self.command, e),
            })?;

        debug!("Rating update command exited with {}", status);
        Ok(())
    }
}

/// Recording rating engine for tests: never spawns anything, keeps every
/// submitted report for inspection.
#[derive(Debug, Default)]
pub struct RecordingRatingEngine {
    reports: RwLock<Vec<MatchReport>>,
}

impl RecordingRatingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// All reports submitted so far
    pub fn reports(&self) -> Vec<MatchReport> {
        self.reports
            .read()
            .map(|reports| reports.clone())
            .unwrap_or_default()
    }

    pub fn submission_count(&self) -> usize {
        self.reports.read().map(|r| r.len()).unwrap_or(0)
    }
}

impl RatingEngine for RecordingRatingEngine {
    fn submit(&self, report: &MatchReport) -> Result<()> {
        if let Ok(mut reports) = self.reports.write() {
            reports.push(report.clone());
        }
        Ok(())
    }
}

/// Convenience for one side's rating lookup
pub(crate) fn side_ratings(
    side: &[PlayerId],
    table: &crate::rating::table::RatingTable,
) -> Vec<i32> {
    side.iter().map(|p| table.get(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> MatchReport {
        MatchReport {
            red_side: vec!["alice".to_string()],
            blue_side: vec!["bob".to_string()],
            red_ratings: vec![1600],
            blue_ratings: vec![1500],
            goals: GoalTally::new(3, 1),
        }
    }

    #[test]
    fn test_recording_engine_keeps_reports() {
        let engine = RecordingRatingEngine::new();
        assert_eq!(engine.submission_count(), 0);

        engine.submit(&sample_report()).unwrap();
        engine.submit(&sample_report()).unwrap();

        assert_eq!(engine.submission_count(), 2);
        assert_eq!(engine.reports()[0], sample_report());
    }

    #[test]
    fn test_process_engine_reports_spawn_failure() {
        let engine = ProcessRatingEngine::new("/nonexistent/update_rankings", vec![]);
        assert!(engine.submit(&sample_report()).is_err());
    }

    #[test]
    fn test_process_engine_runs_command() {
        // `true` ignores its arguments and exits 0
        let engine = ProcessRatingEngine::new("true", vec![]);
        assert!(engine.submit(&sample_report()).is_ok());
    }

    #[test]
    fn test_process_engine_ignores_exit_code() {
        let engine = ProcessRatingEngine::new("false", vec![]);
        assert!(engine.submit(&sample_report()).is_ok());
    }
}
