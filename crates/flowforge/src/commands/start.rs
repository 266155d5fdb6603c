//! `start` - launch n8n in the background, then verify it came up

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
    output::banner("Start n8n");

    if manager.is_running().await {
        output::warn("n8n is already running");

        let result = health.check().await;
        if result.healthy {
            output::success("n8n is running and healthy");
            output::info(&format!("Access n8n at: {}", base_url));
        } else {
            output::failure("n8n is running but not responding properly");
            output::hint(&result.message);
        }
        return Ok(0);
    }

    output::info("Starting n8n in background...");
    let started = manager.start().await;

    if !started.success {
        output::failure("Failed to start n8n process");
        if let Some(error) = &started.error {
            output::hint(&format!("Error: {}", error));
        }
        output::hint("Make sure n8n is installed: npm install -g n8n");
        return Ok(1);
    }

    if let Some(pid) = started.pid {
        output::success(&format!("n8n process started (PID: {})", pid));
    }
    println!();

    output::warmup_wait("Waiting for n8n to start", warmup).await;

    let result = health.check().await;
    if result.healthy {
        output::success("n8n started successfully");
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
        let log = std::env::temp_dir().join("flowforge_start_test.log");
        ProcessManager::new(runner, &N8nConfig::default(), log)
    }

    #[tokio::test]
    async fn test_unhealthy_after_spawn_exits_one() {
        let pm = manager(RecordingRunner::with_running(false));
        let code = run(&pm, &StaticHealth(false), Duration::ZERO, "http://localhost:5678")
            .await
            .unwrap();
        assert_eq!(code, 1);
    }

    #[tokio::test]
    async fn test_healthy_after_spawn_exits_zero() {
        let pm = manager(RecordingRunner::with_running(false));
        let code = run(&pm, &StaticHealth(true), Duration::ZERO, "http://localhost:5678")
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_already_running_exits_zero_without_spawning() {
        let pm = manager(RecordingRunner::with_running(true));
        let code = run(&pm, &StaticHealth(true), Duration::ZERO, "http://localhost:5678")
            .await
            .unwrap();
        assert_eq!(code, 0);

        let calls = pm.runner().recorded();
        assert!(!calls.iter().any(|c| c.starts_with("spawn:")), "{:?}", calls);
    }

    #[tokio::test]
    async fn test_spawn_failure_exits_one() {
        let runner = RecordingRunner {
            fail_spawn: true,
            ..RecordingRunner::default()
        };
        let pm = manager(runner);
        let code = run(&pm, &StaticHealth(true), Duration::ZERO, "http://localhost:5678")
            .await
            .unwrap();
        assert_eq!(code, 1);
    }
}
