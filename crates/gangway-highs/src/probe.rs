//! Process memory instrumentation for solve logging.

use std::time::Instant;
use sysinfo::System;

/// A snapshot of resident memory at a named stage.
#[derive(Debug, Clone)]
pub struct MemorySnapshot {
    /// Resident set size in bytes.
    pub rss_bytes: u64,
    /// When the snapshot was captured.
    pub timestamp: Instant,
    /// Stage name (e.g., "solve_start").
    pub stage: String,
}

/// Errors produced by memory instrumentation.
#[derive(Debug, Clone)]
pub enum ProbeError {
    ProcessNotFound { pid: u32 },
}

impl std::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeError::ProcessNotFound { pid } => {
                write!(f, "failed to locate process {}", pid)
            }
        }
    }
}

impl std::error::Error for ProbeError {}

impl MemorySnapshot {
    /// Capture current memory state for a given stage.
    ///
    /// # Errors
    ///
    /// Returns an error if the current process cannot be located.
    pub fn capture(stage: &str) -> Result<Self, ProbeError> {
        let pid = sysinfo::Pid::from(std::process::id() as usize);

        // Refresh only this process, not the whole system.
        let mut sys = System::new();
        sys.refresh_processes_specifics(
            sysinfo::ProcessesToUpdate::Some(&[pid]),
            true,
            sysinfo::ProcessRefreshKind::nothing().with_memory(),
        );

        let process = sys.process(pid).ok_or(ProbeError::ProcessNotFound {
            pid: std::process::id(),
        })?;

        Ok(MemorySnapshot {
            rss_bytes: process.memory(),
            timestamp: Instant::now(),
            stage: stage.to_string(),
        })
    }

    /// Difference in RSS bytes against another snapshot (positive means
    /// growth).
    pub fn diff(&self, other: &Self) -> i64 {
        self.rss_bytes as i64 - other.rss_bytes as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_capture() {
        let snapshot = MemorySnapshot::capture("fixture").unwrap_or_else(|err| panic!("{}", err));
        assert_eq!(snapshot.stage, "fixture");
        assert!(snapshot.rss_bytes > 0);
    }

    #[test]
    fn test_snapshot_diff() {
        let first = MemorySnapshot {
            rss_bytes: 1000,
            timestamp: Instant::now(),
            stage: "first".to_string(),
        };
        let second = MemorySnapshot {
            rss_bytes: 1600,
            timestamp: Instant::now(),
            stage: "second".to_string(),
        };
        assert_eq!(second.diff(&first), 600);
        assert_eq!(first.diff(&second), -600);
    }
}
