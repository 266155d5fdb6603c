//! `doctor` - dependency report plus a health check

use anyhow::Result;

use crate::exec::ProcessRunner;
use crate::health::HealthCheck;
use crate::output;
use crate::system::SystemChecker;

pub async fn run<R: ProcessRunner, H: HealthCheck>(
    system: &SystemChecker<R>,
    health: &H,
) -> Result<i32> {
    output::banner("FlowForge System Check");

    let mut healthy = true;

    output::section("Dependencies");
    let report = system.check_requirements().await;
    for check in &report.checks {
        if check.installed {
            let version = check
                .version
                .as_deref()
                .map(|v| format!(" ({})", v))
                .unwrap_or_default();
            output::success(&format!("{}{}", check.name, version));
        } else {
            output::failure(&format!(
                "{} - {}",
                check.name,
                check.issue.as_deref().unwrap_or("not found")
            ));
            if let Some(hint) = &check.install_hint {
                output::hint(&format!("Install with: {}", hint));
            }
            healthy = false;
        }
    }

    println!();
    output::section("n8n Health");
    let health_result = health.check().await;
    if health_result.healthy {
        output::success("n8n is running and responding");
    } else {
        output::failure(&format!(
            "n8n health check failed: {}",
            health_result.message
        ));
        for issue in &health_result.issues {
            output::bullet(issue);
        }
        healthy = false;
    }

    println!();
    if healthy {
        output::success("System is ready. You can now create workflows.");
        Ok(0)
    } else {
        output::failure("System not ready. Fix the issues above.");
        output::hint("Run 'flowforge doctor' again after fixing dependencies");
        Ok(1)
    }
}
