/// Token limit of the rolling session window
pub const SESSION_LIMIT: u64 = 500_000;

/// Token limit of the weekly window
pub const WEEKLY_LIMIT: u64 = 3_000_000;

/// Estimated percentage points consumed per minute of active use
pub const ESTIMATED_RATE_PER_MINUTE: f64 = 0.5;

/// Command name substring identifying the host tool
pub const DEFAULT_HOST_TOOL: &str = "claude";

/// Cache file shared with statusline consumers
pub const DEFAULT_CACHE_FILE: &str = "/tmp/claude-usage-cache.json";

/// Value of the `_note` marker on estimated snapshots.
/// Statusline readers match on this exact text.
pub const ESTIMATION_NOTE: &str = "UltraThink intelligent estimation";

// Environment variables
pub const ENV_SESSION_ID: &str = "CLAUDE_SESSION_ID";
pub const ENV_CACHE_FILE: &str = "CCU_CACHE_FILE";
pub const ENV_HOST_TOOL: &str = "CCU_HOST_TOOL";
pub const ENV_LOG: &str = "CCU_LOG";
