//! `restart` - stop-if-running, start, then verify

use std::time::Duration;

use anyhow::Result;

use crate::exec::ProcessRunner;
use crate::health::HealthCheck;
use crate::output;
use crate::process::ProcessManager;

pub async fn run<R: ProcessRunner, H: HealthCheck>(
    manager: &ProcessManager<R>,
    health: &H,
    warmup: Duration,
    base_url: &str,
) -> Result<i32> {
    output::banner("Restart n8n");

    let restarted = manager.restart().await;

    if !restarted.success {
        output::failure(&restarted.message);
        if let Some(details) = &restarted.details {
            output::hint(details);
        }
        if !restarted.suggested_actions.is_empty() {
            println!();
            output::warn("Suggested actions:");
            for action in &restarted.suggested_actions {
                output::bullet(action);
            }
        } else {
            output::hint("Make sure n8n is installed: npm install -g n8n");
        }
        return Ok(1);
    }

    if let Some(pid) = restarted.pid {
        output::success(&format!("n8n process started (PID: {})", pid));
    }
    println!();

    output::warmup_wait("Waiting for n8n to start", warmup).await;

    let result = health.check().await;
    if result.healthy {
        output::success("n8n restarted successfully");
        output::info(&format!("Access n8n at: {}", base_url));
        output::hint(&format!(
            "Logs are written to: {}",
            manager.log_path().display()
        ));
        Ok(0)
    } else {
        output::failure("n8n process started but is not responding properly");
        output::hint(&result.message);
        output::hint(&format!(
            "Check logs: tail -f {}",
            manager.log_path().display()
        ));
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::RecordingRunner;
    use crate::health::StaticHealth;
    use flowforge_core::N8nConfig;

    fn manager(runner: RecordingRunner) -> ProcessManager<RecordingRunner> {
        let log = std::env::temp_dir().join("flowforge_restart_test.log");
        ProcessManager::new(runner, &N8nConfig::default(), log)
    }

    #[tokio::test]
    async fn test_restart_unhealthy_after_start_exits_one() {
        let pm = manager(RecordingRunner::with_running(true));
        let code = run(&pm, &StaticHealth(false), Duration::ZERO, "http://localhost:5678")
            .await
            .unwrap();
        assert_eq!(code, 1);
    }

    #[tokio::test]
    async fn test_restart_healthy_exits_zero() {
        let pm = manager(RecordingRunner::with_running(true));
        let code = run(&pm, &StaticHealth(true), Duration::ZERO, "http://localhost:5678")
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_restart_stop_failure_skips_health_check() {
        let runner = RecordingRunner {
            running: std::sync::Mutex::new(true),
            kill_succeeds: false,
            ..RecordingRunner::default()
        };
        let pm = manager(runner);
        let code = run(&pm, &StaticHealth(true), Duration::ZERO, "http://localhost:5678")
            .await
            .unwrap();
        assert_eq!(code, 1);
        assert!(!pm
            .runner()
            .recorded()
            .iter()
            .any(|c| c.starts_with("spawn:")));
    }
}
