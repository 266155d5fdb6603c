//! n8n process lifecycle management
//!
//! Start spawns the server detached with output redirected to the log
//! file. Stop is name-based and idempotent. Nothing is retried; a
//! failed stop carries suggested manual remedies instead.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use flowforge_core::N8nConfig;

use crate::exec::ProcessRunner;

/// Kind of lifecycle operation a result describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessOperation {
    Start,
    Stop,
    Restart,
    StatusCheck,
}

/// Result of a background start
#[derive(Debug, Clone, Serialize)]
pub struct ProcessStartResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Structured result of a lifecycle operation
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOperationResult {
    pub success: bool,
    pub operation: ProcessOperation,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggested_actions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<u32>,
}

impl ProcessOperationResult {
    pub fn succeeded(operation: ProcessOperation, message: impl Into<String>) -> Self {
        Self {
            success: true,
            operation,
            message: message.into(),
            details: None,
            suggested_actions: Vec::new(),
            pid: None,
        }
    }

    pub fn succeeded_with_pid(
        operation: ProcessOperation,
        message: impl Into<String>,
        pid: Option<u32>,
    ) -> Self {
        Self {
            pid,
            ..Self::succeeded(operation, message)
        }
    }

    pub fn failed(
        operation: ProcessOperation,
        message: impl Into<String>,
        details: Option<String>,
        suggested_actions: Vec<String>,
    ) -> Self {
        Self {
            success: false,
            operation,
            message: message.into(),
            details,
            suggested_actions,
            pid: None,
        }
    }
}

/// Manages the n8n server process by executable name
pub struct ProcessManager<R: ProcessRunner> {
    runner: R,
    process_name: String,
    log_path: PathBuf,
}

impl<R: ProcessRunner> ProcessManager<R> {
    pub fn new(runner: R, config: &N8nConfig, log_path: PathBuf) -> Self {
        Self {
            runner,
            process_name: config.process_name.clone(),
            log_path,
        }
    }

    pub fn log_path(&self) -> &PathBuf {
        &self.log_path
    }

    #[cfg(test)]
    pub(crate) fn runner(&self) -> &R {
        &self.runner
    }

    pub async fn is_running(&self) -> bool {
        self.runner.is_running(&self.process_name).await
    }

    pub async fn start(&self) -> ProcessStartResult {
        info!("starting {} in the background", self.process_name);

        match self
            .runner
            .spawn_background(&self.process_name, &[], &self.log_path)
            .await
        {
            Ok(pid) => ProcessStartResult {
                success: true,
                pid: Some(pid),
                error: None,
            },
            Err(err) => {
                warn!("failed to start {}: {}", self.process_name, err);
                ProcessStartResult {
                    success: false,
                    pid: None,
                    error: Some(err.to_string()),
                }
            }
        }
    }

    /// Idempotent: a server that is not running is a success and the
    /// kill primitive is never invoked.
    pub async fn stop(&self) -> ProcessOperationResult {
        if !self.is_running().await {
            return ProcessOperationResult::succeeded(
                ProcessOperation::Stop,
                format!("{} process is not running", self.process_name),
            );
        }

        if self.runner.kill_by_name(&self.process_name).await {
            info!("{} process stopped", self.process_name);
            ProcessOperationResult::succeeded(
                ProcessOperation::Stop,
                format!("{} process stopped successfully", self.process_name),
            )
        } else {
            warn!("failed to stop {} process", self.process_name);
            ProcessOperationResult::failed(
                ProcessOperation::Stop,
                format!("Failed to stop {} process", self.process_name),
                Some(
                    "The process could not be terminated. This may be due to insufficient permissions."
                        .to_string(),
                ),
                stop_remedies(&self.process_name),
            )
        }
    }

    /// Stop-if-running then start. The stop phase is skipped entirely
    /// when the server is not running; a failed stop short-circuits.
    pub async fn restart(&self) -> ProcessOperationResult {
        if self.is_running().await {
            let stopped = self.stop().await;
            if !stopped.success {
                return ProcessOperationResult::failed(
                    ProcessOperation::Restart,
                    stopped.message,
                    stopped.details,
                    stopped.suggested_actions,
                );
            }
        }

        let started = self.start().await;
        if started.success {
            ProcessOperationResult::succeeded_with_pid(
                ProcessOperation::Restart,
                format!("{} process restarted", self.process_name),
                started.pid,
            )
        } else {
            ProcessOperationResult::failed(
                ProcessOperation::Restart,
                format!("Failed to start {} process", self.process_name),
                started.error,
                Vec::new(),
            )
        }
    }
}

/// Manual remedies offered when a kill attempt fails
fn stop_remedies(name: &str) -> Vec<String> {
    vec![
        "Try running with elevated permissions (sudo on Linux/macOS)".to_string(),
        format!("Use 'pkill -f {name}' or 'taskkill /F /IM {name}.exe' manually"),
        "Check if the process is system-protected or locked".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::RecordingRunner;

    fn manager(runner: RecordingRunner) -> ProcessManager<RecordingRunner> {
        let config = N8nConfig::default();
        let log = std::env::temp_dir().join("flowforge_pm_test.log");
        ProcessManager::new(runner, &config, log)
    }

    #[tokio::test]
    async fn test_stop_when_not_running_never_kills() {
        let pm = manager(RecordingRunner::with_running(false));

        let result = pm.stop().await;
        assert!(result.success);
        assert_eq!(result.operation, ProcessOperation::Stop);
        assert_eq!(result.message, "n8n process is not running");
        assert!(result.suggested_actions.is_empty());
        assert!(!pm.runner.recorded().iter().any(|c| c.starts_with("kill:")));
    }

    #[tokio::test]
    async fn test_stop_running_process() {
        let pm = manager(RecordingRunner::with_running(true));

        let result = pm.stop().await;
        assert!(result.success);
        assert_eq!(result.message, "n8n process stopped successfully");
        assert!(result.suggested_actions.is_empty());
    }

    #[tokio::test]
    async fn test_stop_failure_carries_three_remedies() {
        let runner = RecordingRunner {
            running: std::sync::Mutex::new(true),
            kill_succeeds: false,
            ..RecordingRunner::default()
        };
        let pm = manager(runner);

        let result = pm.stop().await;
        assert!(!result.success);
        assert_eq!(result.suggested_actions.len(), 3);
        assert!(result.suggested_actions[0].contains("elevated permissions"));
        assert!(result.suggested_actions[1].contains("pkill -f n8n"));
        assert!(result
            .details
            .as_deref()
            .unwrap()
            .contains("insufficient permissions"));
    }

    #[tokio::test]
    async fn test_restart_stops_before_starting_when_running() {
        let pm = manager(RecordingRunner::with_running(true));

        let result = pm.restart().await;
        assert!(result.success);
        assert_eq!(result.operation, ProcessOperation::Restart);
        assert_eq!(result.pid, Some(4242));

        let calls = pm.runner.recorded();
        let kill = calls.iter().position(|c| c == "kill:n8n").unwrap();
        let spawn = calls.iter().position(|c| c == "spawn:n8n").unwrap();
        assert!(kill < spawn, "kill must run before spawn: {:?}", calls);
    }

    #[tokio::test]
    async fn test_restart_skips_stop_when_not_running() {
        let pm = manager(RecordingRunner::with_running(false));

        let result = pm.restart().await;
        assert!(result.success);

        let calls = pm.runner.recorded();
        assert!(!calls.iter().any(|c| c.starts_with("kill:")), "{:?}", calls);
        assert!(calls.iter().any(|c| c == "spawn:n8n"));
    }

    #[tokio::test]
    async fn test_restart_short_circuits_on_stop_failure() {
        let runner = RecordingRunner {
            running: std::sync::Mutex::new(true),
            kill_succeeds: false,
            ..RecordingRunner::default()
        };
        let pm = manager(runner);

        let result = pm.restart().await;
        assert!(!result.success);
        assert_eq!(result.operation, ProcessOperation::Restart);
        assert_eq!(result.suggested_actions.len(), 3);
        assert!(!pm.runner.recorded().iter().any(|c| c.starts_with("spawn:")));
    }

    #[tokio::test]
    async fn test_start_failure_reports_error() {
        let runner = RecordingRunner {
            fail_spawn: true,
            ..RecordingRunner::default()
        };
        let pm = manager(runner);

        let result = pm.start().await;
        assert!(!result.success);
        assert!(result.pid.is_none());
        assert!(result.error.as_deref().unwrap().contains("failed to start"));
    }
}
