//! Process execution infrastructure
//!
//! Foreground commands with captured output, plus detached background
//! spawning with stdout/stderr redirected to a log file. The n8n
//! lifecycle goes through the `ProcessRunner` trait so the service
//! layer can be exercised without spawning real processes.

use std::io::Write;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use chrono::Local;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::errors::FlowForgeError;

/// Captured result of a foreground command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Process execution seam
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run a command to completion and capture its output. Spawn
    /// failures are reported as exit code -1 with the error text.
    async fn run(&self, program: &str, args: &[&str]) -> CommandOutput;

    /// Spawn a detached process with output redirected to `log_path`.
    /// Returns the child pid.
    async fn spawn_background(
        &self,
        program: &str,
        args: &[&str],
        log_path: &Path,
    ) -> Result<u32, FlowForgeError>;

    /// Whether a process matching `name` is currently running
    async fn is_running(&self, name: &str) -> bool;

    /// Terminate all processes matching `name`. Returns false when the
    /// kill primitive reports failure.
    async fn kill_by_name(&self, name: &str) -> bool;
}

/// Production runner backed by tokio::process
pub struct SystemRunner;

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str]) -> CommandOutput {
        debug!("exec: {} {}", program, args.join(" "));

        match Command::new(program).args(args).output().await {
            Ok(output) => CommandOutput {
                exit_code: output.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            },
            Err(err) => {
                warn!("failed to execute {}: {}", program, err);
                CommandOutput {
                    exit_code: -1,
                    stdout: String::new(),
                    stderr: err.to_string(),
                }
            }
        }
    }

    async fn spawn_background(
        &self,
        program: &str,
        args: &[&str],
        log_path: &Path,
    ) -> Result<u32, FlowForgeError> {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut log = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;
        writeln!(
            log,
            "[{}] flowforge: starting {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            program
        )?;

        let stdout = log.try_clone()?;
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(log))
            .spawn()
            .map_err(|err| {
                FlowForgeError::Process(format!("failed to start {}: {}", program, err))
            })?;

        let pid = child.id().ok_or_else(|| {
            FlowForgeError::Process(format!("{} exited before a pid was assigned", program))
        })?;

        debug!("spawned {} with pid {}", program, pid);
        Ok(pid)
    }

    async fn is_running(&self, name: &str) -> bool {
        flowforge_core::process::is_running(name)
    }

    async fn kill_by_name(&self, name: &str) -> bool {
        #[cfg(unix)]
        let output = self.run("pkill", &["-f", name]).await;

        #[cfg(windows)]
        let output = {
            let image = format!("{}.exe", name);
            self.run("taskkill", &["/F", "/IM", &image]).await
        };

        output.success()
    }
}

/// Fake runner recording every invocation, for service-layer tests
#[cfg(test)]
#[derive(Default)]
pub struct RecordingRunner {
    pub running: std::sync::Mutex<bool>,
    pub kill_succeeds: bool,
    pub fail_spawn: bool,
    pub calls: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingRunner {
    pub fn with_running(running: bool) -> Self {
        Self {
            running: std::sync::Mutex::new(running),
            kill_succeeds: true,
            ..Self::default()
        }
    }

    pub fn recorded(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl ProcessRunner for RecordingRunner {
    async fn run(&self, program: &str, args: &[&str]) -> CommandOutput {
        self.calls
            .lock()
            .unwrap()
            .push(format!("run:{} {}", program, args.join(" ")));
        CommandOutput {
            exit_code: 0,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    async fn spawn_background(
        &self,
        program: &str,
        _args: &[&str],
        _log_path: &Path,
    ) -> Result<u32, FlowForgeError> {
        self.calls.lock().unwrap().push(format!("spawn:{}", program));
        if self.fail_spawn {
            return Err(FlowForgeError::Process(format!(
                "failed to start {}: not found",
                program
            )));
        }
        *self.running.lock().unwrap() = true;
        Ok(4242)
    }

    async fn is_running(&self, name: &str) -> bool {
        self.calls.lock().unwrap().push(format!("is_running:{}", name));
        *self.running.lock().unwrap()
    }

    async fn kill_by_name(&self, name: &str) -> bool {
        self.calls.lock().unwrap().push(format!("kill:{}", name));
        if self.kill_succeeds {
            *self.running.lock().unwrap() = false;
        }
        self.kill_succeeds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_captures_output() {
        let runner = SystemRunner;
        let output = runner.run("echo", &["hello"]).await;
        assert!(output.success());
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[tokio::test]
    async fn test_run_missing_program_reports_failure() {
        let runner = SystemRunner;
        let output = runner.run("flowforge-no-such-binary-a7f3", &[]).await;
        assert!(!output.success());
        assert_eq!(output.exit_code, -1);
        assert!(!output.stderr.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_spawn_background_writes_session_header() {
        let dir = std::env::temp_dir().join("flowforge_exec_test");
        let _ = std::fs::remove_dir_all(&dir);
        let log_path = dir.join("server.log");

        let runner = SystemRunner;
        let pid = runner
            .spawn_background("sleep", &["0"], &log_path)
            .await
            .unwrap();
        assert!(pid > 0);

        let contents = std::fs::read_to_string(&log_path).unwrap();
        assert!(contents.contains("flowforge: starting sleep"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
