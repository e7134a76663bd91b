use crate::utils::ProcessInspector;
use tracing::debug;

/// Result of checking who invoked us
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// Parent process looks like the host tool
    Host { parent: String },
    /// Parent is something else, or could not be inspected
    NotHost { parent: Option<String> },
}

/// Decides whether the parent process is the host tool
#[derive(Debug)]
pub struct ContextDetector<'a, P: ProcessInspector> {
    inspector: &'a P,
    host_tool: String,
}

impl<'a, P: ProcessInspector> ContextDetector<'a, P> {
    pub fn new(inspector: &'a P, host_tool: &str) -> Self {
        Self {
            inspector,
            host_tool: host_tool.to_lowercase(),
        }
    }

    pub fn detect(&self) -> Detection {
        match self.inspector.parent_command() {
            Ok(parent) if matches_host(&parent, &self.host_tool) => Detection::Host { parent },
            Ok(parent) => Detection::NotHost {
                parent: Some(parent),
            },
            Err(err) => {
                debug!("parent process inspection failed: {}", err);
                Detection::NotHost { parent: None }
            }
        }
    }
}

/// Case-insensitive substring match. `host_tool` must already be lowercase.
#[inline]
pub fn matches_host(command: &str, host_tool: &str) -> bool {
    !host_tool.is_empty() && command.to_lowercase().contains(host_tool)
}
