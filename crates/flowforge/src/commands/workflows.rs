//! `list-workflows` / `get-workflow` - read-only views of the server's
//! workflow inventory

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use crate::output;
use crate::workflows::{WorkflowDetailsResult, WorkflowListResult, WorkflowService};

pub async fn list(service: &WorkflowService, json: bool) -> Result<i32> {
    let result = service.list().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&list_payload(&result))?);
        return Ok(if result.success { 0 } else { 1 });
    }

    output::banner("Workflows");

    if !result.success {
        output::failure(
            result
                .error
                .as_deref()
                .unwrap_or("Failed to retrieve workflows"),
        );
        return Ok(1);
    }

    if result.workflows.is_empty() {
        output::warn("No workflows found");
        return Ok(0);
    }

    println!(
        "{:<18} {:<32} {:<10} {:>5}  {:<16}",
        "ID", "NAME", "STATUS", "NODES", "UPDATED"
    );
    println!("{}", "-".repeat(85));

    for workflow in &result.workflows {
        let status = if workflow.active {
            format!("{:<10}", "Active").green()
        } else {
            format!("{:<10}", "Inactive").dimmed()
        };

        println!(
            "{:<18} {:<32} {} {:>5}  {:<16}",
            output::truncate(&workflow.id, 16),
            output::truncate(&workflow.name, 30),
            status,
            workflow.node_count,
            workflow.updated_at.format("%Y-%m-%d %H:%M")
        );
    }

    println!();
    println!("{}", format!("Total: {} workflows", result.total).dimmed());

    Ok(0)
}

pub async fn get(service: &WorkflowService, id: &str, json: bool) -> Result<i32> {
    let result = service.get(id).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&get_payload(&result))?);
        return Ok(if result.success { 0 } else { 1 });
    }

    let Some(workflow) = &result.workflow else {
        output::failure(
            result
                .error
                .as_deref()
                .unwrap_or("Failed to retrieve workflow"),
        );
        return Ok(1);
    };

    output::banner(&format!("Workflow: {}", workflow.name));

    let status = if workflow.active {
        "Active".green().to_string()
    } else {
        "Inactive".dimmed().to_string()
    };

    println!("{:<14} {}", "ID", workflow.id);
    println!("{:<14} {}", "Name", workflow.name);
    println!("{:<14} {}", "Status", status);
    println!("{:<14} {}", "Nodes", workflow.node_count);
    println!(
        "{:<14} {}",
        "Description",
        workflow
            .description
            .as_deref()
            .unwrap_or("(no description)")
    );
    println!(
        "{:<14} {}",
        "Tags",
        if workflow.tags.is_empty() {
            "(no tags)".to_string()
        } else {
            workflow.tags.join(", ")
        }
    );
    println!(
        "{:<14} {}",
        "Created",
        workflow.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "{:<14} {}",
        "Updated",
        workflow.updated_at.format("%Y-%m-%d %H:%M:%S")
    );

    if !workflow.nodes.is_empty() {
        println!();
        output::section("Nodes");
        for node in &workflow.nodes {
            println!(
                "  {:<26} {:<26} {}",
                output::truncate(&node.id, 24),
                output::truncate(&node.name, 24),
                node.node_type.dimmed()
            );
        }
    }

    Ok(0)
}

fn list_payload(result: &WorkflowListResult) -> serde_json::Value {
    if result.success {
        json!({
            "success": true,
            "total": result.total,
            "workflows": &result.workflows,
        })
    } else {
        json!({
            "error": &result.error,
            "success": false,
        })
    }
}

fn get_payload(result: &WorkflowDetailsResult) -> serde_json::Value {
    if result.success {
        json!({
            "success": true,
            "workflow": &result.workflow,
        })
    } else {
        json!({
            "error": &result.error,
            "success": false,
        })
    }
}
