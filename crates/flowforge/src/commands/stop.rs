//! `stop` - terminate the n8n process by name

use anyhow::Result;

use crate::exec::ProcessRunner;
use crate::output;
use crate::process::ProcessManager;

pub async fn run<R: ProcessRunner>(manager: &ProcessManager<R>) -> Result<i32> {
    output::banner("Stop n8n");

    let result = manager.stop().await;

    if result.success {
        output::success(&result.message);
        return Ok(0);
    }

    output::failure(&result.message);
    if let Some(details) = &result.details {
        output::hint(details);
    }
    if !result.suggested_actions.is_empty() {
        println!();
        output::warn("Suggested actions:");
        for action in &result.suggested_actions {
            output::bullet(action);
        }
    }

    Ok(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::RecordingRunner;
    use flowforge_core::N8nConfig;

    fn manager(runner: RecordingRunner) -> ProcessManager<RecordingRunner> {
        let log = std::env::temp_dir().join("flowforge_stop_test.log");
        ProcessManager::new(runner, &N8nConfig::default(), log)
    }

    #[tokio::test]
    async fn test_stop_idempotent_exit_zero() {
        let pm = manager(RecordingRunner::with_running(false));
        assert_eq!(run(&pm).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_failed_stop_exits_one() {
        let runner = RecordingRunner {
            running: std::sync::Mutex::new(true),
            kill_succeeds: false,
            ..RecordingRunner::default()
        };
        let pm = manager(runner);
        assert_eq!(run(&pm).await.unwrap(), 1);
    }
}
