use super::percentage::Percentage;
use super::window::UsageWindow;
use crate::constants::{ESTIMATION_NOTE, SESSION_LIMIT, WEEKLY_LIMIT};
use crate::error::{CcuError, Result};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Persisted usage record for the session and weekly windows
///
/// The on-disk keys (`5h_window`, `_note`) are shared with statusline
/// scripts that read the same cache file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    timestamp: String,
    #[serde(rename = "5h_window", alias = "session")]
    session: UsageWindow,
    weekly: UsageWindow,
    #[serde(
        rename = "_note",
        alias = "note",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    note: Option<String>,
}

impl UsageSnapshot {
    /// Build a snapshot marked as heuristically estimated
    pub fn estimated(session: Percentage, weekly: Percentage, at: DateTime<Utc>) -> Self {
        Self {
            timestamp: at.to_rfc3339_opts(SecondsFormat::Micros, true),
            session: UsageWindow::from_percentage(session, SESSION_LIMIT),
            weekly: UsageWindow::from_percentage(weekly, WEEKLY_LIMIT),
            note: Some(ESTIMATION_NOTE.to_string()),
        }
    }

    #[inline]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    #[inline]
    pub fn session(&self) -> &UsageWindow {
        &self.session
    }

    #[inline]
    pub fn weekly(&self) -> &UsageWindow {
        &self.weekly
    }

    #[inline]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn is_estimated(&self) -> bool {
        self.note.is_some()
    }

    /// Instant of the last write
    pub fn updated_at(&self) -> Result<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }
}

/// Parse an ISO-8601 timestamp. Naive timestamps are taken as UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| CcuError::TimestampParse {
            value: value.to_string(),
        })
}
