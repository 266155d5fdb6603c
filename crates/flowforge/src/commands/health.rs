//! `health` - single HTTP probe against the n8n health endpoint

use anyhow::Result;
use serde_json::json;

use crate::health::{HealthCheck, HealthResult};
use crate::output;

pub async fn run<H: HealthCheck>(checker: &H, json: bool) -> Result<i32> {
    let result = checker.check().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&json_payload(&result))?);
        return Ok(exit_code(&result));
    }

    output::banner("Health Check");

    if result.healthy {
        output::success("n8n is healthy");
        output::hint(&result.message);
    } else {
        output::failure("n8n is not healthy");
        output::hint(&result.message);

        if !result.issues.is_empty() {
            println!();
            output::warn("Issues found:");
            for issue in &result.issues {
                output::bullet(issue);
            }
        }
    }

    Ok(exit_code(&result))
}

fn exit_code(result: &HealthResult) -> i32 {
    if result.healthy {
        0
    } else {
        1
    }
}

fn json_payload(result: &HealthResult) -> serde_json::Value {
    json!({
        "success": result.healthy,
        "healthy": result.healthy,
        "message": &result.message,
        "issues": &result.issues,
    })
}
