//! Terminal output helpers
//!
//! Colored status lines and fixed-width tables for humans. JSON output
//! paths in the commands bypass this module entirely.

use std::io::Write;
use std::time::Duration;

use colored::Colorize;

/// Section banner
pub fn banner(title: &str) {
    println!("{}", title.bold());
    println!("{}", "=".repeat(title.chars().count()));
    println!();
}

/// Bold sub-section heading
pub fn section(title: &str) {
    println!("{}", title.bold());
}

pub fn success(msg: &str) {
    println!("{} {}", "ok".green(), msg);
}

pub fn failure(msg: &str) {
    println!("{} {}", "error:".red(), msg);
}

pub fn warn(msg: &str) {
    println!("{}  {}", "!".yellow(), msg);
}

pub fn info(msg: &str) {
    println!("{} {}", "info:".blue(), msg);
}

pub fn hint(msg: &str) {
    println!("   {}", msg.dimmed());
}

pub fn bullet(msg: &str) {
    println!("  {} {}", "•".red(), msg);
}

/// Truncate for a fixed-width table cell
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", cut)
}

/// Fixed-duration warm-up wait with a dot indicator. A time-based
/// guess, not a readiness probe.
pub async fn warmup_wait(label: &str, total: Duration) {
    print!("{}", label.dimmed());
    let _ = std::io::stdout().flush();

    let ticks = (total.as_millis() / 100).max(1) as u64;
    for tick in 0..ticks {
        tokio::time::sleep(Duration::from_millis(100)).await;
        if tick % 5 == 4 {
            print!(".");
            let _ = std::io::stdout().flush();
        }
    }
    println!();
}
