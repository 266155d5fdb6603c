//! Process lookup utilities

use std::process::Command;
use sysinfo::System;

/// Check if a process matching the given name is running
pub fn is_running(name: &str) -> bool {
    let mut sys = System::new();
    sys.refresh_processes(sysinfo::ProcessesToUpdate::All, true);

    let found = sys.processes().values().any(|p| {
        p.name().to_string_lossy().contains(name)
            || p.cmd().iter().any(|arg| arg.to_string_lossy().contains(name))
    });

    if found {
        return true;
    }

    // sysinfo misses interpreters running under a different image name;
    // ask the OS process table directly
    #[cfg(unix)]
    {
        if let Ok(output) = Command::new("pgrep").args(["-f", name]).output() {
            return output.status.success();
        }
    }

    #[cfg(windows)]
    {
        let image = format!("{}.exe", name);
        if let Ok(output) = Command::new("tasklist")
            .args(["/FI", &format!("IMAGENAME eq {}", image)])
            .output()
        {
            return String::from_utf8_lossy(&output.stdout).contains(&image);
        }
    }

    false
}

/// Get PIDs of processes matching a name
pub fn find_pids(name: &str) -> Vec<u32> {
    let mut sys = System::new();
    sys.refresh_processes(sysinfo::ProcessesToUpdate::All, true);

    let mut pids: Vec<u32> = sys
        .processes()
        .iter()
        .filter(|(_, p)| {
            p.name().to_string_lossy().contains(name)
                || p.cmd().iter().any(|arg| arg.to_string_lossy().contains(name))
        })
        .map(|(pid, _)| pid.as_u32())
        .collect();

    #[cfg(unix)]
    if pids.is_empty() {
        if let Ok(output) = Command::new("pgrep").args(["-f", name]).output() {
            if output.status.success() {
                let stdout = String::from_utf8_lossy(&output.stdout);
                for line in stdout.lines() {
                    if let Ok(pid) = line.trim().parse::<u32>() {
                        pids.push(pid);
                    }
                }
            }
        }
    }

    pids
}
