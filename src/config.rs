use crate::constants::{
    DEFAULT_CACHE_FILE, DEFAULT_HOST_TOOL, ENV_CACHE_FILE, ENV_HOST_TOOL, ENV_SESSION_ID,
};
use crate::utils::expand_home;
use std::env;
use std::path::PathBuf;

/// Runtime settings, resolved from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Where the usage snapshot lives
    pub cache_path: PathBuf,
    /// Substring the parent command name must contain (lowercase)
    pub host_tool: String,
    /// Host session, only logged
    pub session_id: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cache_path: PathBuf::from(DEFAULT_CACHE_FILE),
            host_tool: DEFAULT_HOST_TOOL.to_string(),
            session_id: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();

        Self {
            cache_path: get(ENV_CACHE_FILE)
                .map(|raw| expand_home(&raw))
                .unwrap_or(defaults.cache_path),
            host_tool: get(ENV_HOST_TOOL)
                .map(|tool| tool.to_lowercase())
                .unwrap_or(defaults.host_tool),
            session_id: get(ENV_SESSION_ID),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = settings_from(&[]);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.cache_path, PathBuf::from("/tmp/claude-usage-cache.json"));
        assert_eq!(settings.host_tool, "claude");
        assert_eq!(settings.session_id, None);
    }

    #[test]
    fn test_overrides() {
        let settings = settings_from(&[
            ("CCU_CACHE_FILE", "/var/tmp/usage.json"),
            ("CCU_HOST_TOOL", "Claude-Dev"),
            ("CLAUDE_SESSION_ID", "abc-123"),
        ]);

        assert_eq!(settings.cache_path, PathBuf::from("/var/tmp/usage.json"));
        assert_eq!(settings.host_tool, "claude-dev");
        assert_eq!(settings.session_id.as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_session_id_is_trimmed() {
        let settings = settings_from(&[("CLAUDE_SESSION_ID", "  sess-42\n")]);
        assert_eq!(settings.session_id, Some("sess-42".to_string()));
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let settings = settings_from(&[
            ("CCU_CACHE_FILE", "  "),
            ("CCU_HOST_TOOL", ""),
            ("CLAUDE_SESSION_ID", ""),
        ]);
        assert_eq!(settings, Settings::default());
    }
}
