use crate::error::{CcuError, Result};
use std::process::Command;
use tracing::debug;

#[cfg(test)]
use mockall::automock;

/// Looks up the process that invoked us
#[cfg_attr(test, automock)]
pub trait ProcessInspector {
    /// Command name of the parent process (e.g. "claude")
    fn parent_command(&self) -> Result<String>;
}

/// Inspector backed by `ps`, with `/proc` as fallback
#[derive(Debug, Clone, Copy, Default)]
pub struct PsInspector;

impl ProcessInspector for PsInspector {
    fn parent_command(&self) -> Result<String> {
        let ppid = parent_pid()?;

        match command_name_via_ps(ppid) {
            Ok(name) => Ok(name),
            Err(err) => {
                debug!("ps lookup for pid {} failed: {}", ppid, err);
                command_name_via_proc(ppid)
            }
        }
    }
}

#[cfg(unix)]
fn parent_pid() -> Result<u32> {
    Ok(std::os::unix::process::parent_id())
}

#[cfg(not(unix))]
fn parent_pid() -> Result<u32> {
    Err(CcuError::UnsupportedPlatform)
}

// Get command name from `ps -p <pid> -o comm=`
fn command_name_via_ps(pid: u32) -> Result<String> {
    let output = Command::new("ps")
        .args(["-p", &pid.to_string(), "-o", "comm="])
        .output()?;

    if !output.status.success() {
        return Err(CcuError::ProcessInspect {
            message: format!("ps exited with {}", output.status),
        });
    }

    parse_command_name(&output.stdout).ok_or_else(|| CcuError::ProcessInspect {
        message: format!("no command name for pid {}", pid),
    })
}

// Get command name from /proc/<pid>/comm
fn command_name_via_proc(pid: u32) -> Result<String> {
    let path = format!("/proc/{}/comm", pid);
    let content = std::fs::read(&path).map_err(|e| CcuError::ProcessInspect {
        message: format!("{}: {}", path, e),
    })?;

    parse_command_name(&content).ok_or_else(|| CcuError::ProcessInspect {
        message: format!("{} is empty", path),
    })
}

fn parse_command_name(raw: &[u8]) -> Option<String> {
    let name = String::from_utf8_lossy(raw).trim().to_string();
    if name.is_empty() { None } else { Some(name) }
}
