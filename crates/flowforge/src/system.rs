//! System requirements checking
//!
//! Probes the fixed toolchain n8n needs: presence via a PATH lookup,
//! version via `--version`. Sequential, no caching across runs.

use serde::Serialize;
use tracing::debug;
use which::which;

use crate::exec::ProcessRunner;

/// Commands expected on PATH
const REQUIRED_COMMANDS: &[&str] = &["node", "npm", "jq", "curl", "nc"];

/// Tools probed via `--version` rather than a PATH lookup
const REQUIRED_TOOLS: &[&str] = &["n8n"];

/// Result of probing one dependency
#[derive(Debug, Clone, Serialize)]
pub struct SystemCheck {
    pub name: String,
    pub installed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_hint: Option<String>,
}

impl SystemCheck {
    fn installed(name: &str, version: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            installed: true,
            version,
            issue: None,
            install_hint: None,
        }
    }

    fn missing(name: &str) -> Self {
        Self {
            name: name.to_string(),
            installed: false,
            version: None,
            issue: Some("Command not found".to_string()),
            install_hint: Some(install_hint(name).to_string()),
        }
    }
}

/// Aggregated dependency report
#[derive(Debug, Clone, Serialize)]
pub struct SystemCheckReport {
    pub healthy: bool,
    pub checks: Vec<SystemCheck>,
    pub missing: Vec<String>,
}

/// Probes the required toolchain
pub struct SystemChecker<R: ProcessRunner> {
    runner: R,
}

impl<R: ProcessRunner> SystemChecker<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub async fn check_requirements(&self) -> SystemCheckReport {
        let mut checks = Vec::new();
        let mut missing = Vec::new();

        for command in REQUIRED_COMMANDS {
            let check = self.check_command(command).await;
            if !check.installed {
                missing.push(command.to_string());
            }
            checks.push(check);
        }

        for tool in REQUIRED_TOOLS {
            let check = self.check_tool(tool).await;
            if !check.installed {
                missing.push(tool.to_string());
            }
            checks.push(check);
        }

        SystemCheckReport {
            healthy: missing.is_empty(),
            checks,
            missing,
        }
    }

    async fn check_command(&self, command: &str) -> SystemCheck {
        if which(command).is_err() {
            debug!("{} not found on PATH", command);
            return SystemCheck::missing(command);
        }
        SystemCheck::installed(command, self.read_version(command).await)
    }

    async fn check_tool(&self, tool: &str) -> SystemCheck {
        let output = self.runner.run(tool, &["--version"]).await;
        if output.success() {
            SystemCheck::installed(tool, Some(extract_version(&output.stdout)))
        } else {
            debug!("{} --version failed", tool);
            SystemCheck::missing(tool)
        }
    }

    async fn read_version(&self, command: &str) -> Option<String> {
        let output = self.runner.run(command, &["--version"]).await;
        output.success().then(|| extract_version(&output.stdout))
    }
}

/// First non-empty line of `--version` output, `unknown` when there is none
pub fn extract_version(output: &str) -> String {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("unknown")
        .to_string()
}

/// Static install hints keyed by dependency name
pub fn install_hint(name: &str) -> &'static str {
    match name {
        "node" => "sudo apt install nodejs",
        "npm" => "sudo apt install npm",
        "jq" => "sudo apt install jq",
        "curl" => "sudo apt install curl",
        "nc" => "sudo apt install netcat-openbsd",
        "n8n" => "npm install -g n8n",
        _ => "check your package manager",
    }
}
