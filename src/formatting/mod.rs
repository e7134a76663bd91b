use crate::estimator::Estimate;
use crate::types::{Percentage, UsageSnapshot};
use chrono::Duration;
use colored::{ColoredString, Colorize};

// Force colored output on or off, independent of stdout's TTY state
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}

// Color a percentage by how close it is to the limit
pub fn colored_percentage(percentage: Percentage) -> ColoredString {
    let text = percentage.to_formatted_string();
    if percentage.value() < 50.0 {
        text.green()
    } else if percentage.value() < 80.0 {
        text.yellow()
    } else {
        text.red()
    }
}

// "session / weekly" summary line
pub fn usage_summary(snapshot: &UsageSnapshot) -> String {
    format!(
        "{} / {}",
        colored_percentage(snapshot.session().percentage),
        colored_percentage(snapshot.weekly().percentage)
    )
}

// "+5.0% over 10m"
pub fn estimate_summary(estimate: &Estimate) -> String {
    format!(
        "+{:.1}% over {}",
        estimate.increase,
        format_elapsed(estimate.elapsed)
    )
}

// Format elapsed time (e.g., "45m", "2h", "2h 5m")
pub fn format_elapsed(elapsed: Duration) -> String {
    let minutes = elapsed.num_minutes().max(0);
    if minutes < 60 {
        format!("{}m", minutes)
    } else {
        let hours = minutes / 60;
        let mins = minutes % 60;
        if mins > 0 {
            format!("{}h {}m", hours, mins)
        } else {
            format!("{}h", hours)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn estimate_over(minutes: i64, increase: f64) -> Estimate {
        Estimate {
            session: Percentage::new(increase),
            weekly: Percentage::new(increase),
            increase,
            elapsed: Duration::minutes(minutes),
        }
    }

    #[test]
    fn test_colored_percentage_text() {
        // Color testing is difficult, so we just verify the text
        for (value, expected) in [(12.0, "12.0%"), (65.5, "65.5%"), (100.0, "100.0%")] {
            assert!(
                colored_percentage(Percentage::new(value))
                    .to_string()
                    .contains(expected)
            );
        }
    }

    #[test]
    fn test_usage_summary() {
        let snapshot =
            UsageSnapshot::estimated(Percentage::new(15.0), Percentage::new(10.0), Utc::now());
        let summary = usage_summary(&snapshot);
        assert!(summary.contains("15.0%"));
        assert!(summary.contains("10.0%"));
        assert!(summary.contains(" / "));
    }

    #[test]
    fn test_color_disabled_emits_no_escape_codes() {
        let snapshot =
            UsageSnapshot::estimated(Percentage::new(15.0), Percentage::new(90.0), Utc::now());

        set_color_enabled(false);
        let summary = usage_summary(&snapshot);
        colored::control::unset_override();

        assert_eq!(summary, "15.0% / 90.0%");
        assert!(!summary.contains('\x1b'));
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::zero()), "0m");
        assert_eq!(format_elapsed(Duration::seconds(90)), "1m");
        assert_eq!(format_elapsed(Duration::minutes(45)), "45m");
        assert_eq!(format_elapsed(Duration::minutes(120)), "2h");
        assert_eq!(format_elapsed(Duration::minutes(125)), "2h 5m");
        assert_eq!(format_elapsed(Duration::minutes(-5)), "0m");
    }

    #[test]
    fn test_estimate_summary() {
        assert_eq!(estimate_summary(&estimate_over(10, 5.0)), "+5.0% over 10m");
        assert_eq!(estimate_summary(&estimate_over(125, 62.5)), "+62.5% over 2h 5m");
        assert_eq!(estimate_summary(&estimate_over(0, 0.0)), "+0.0% over 0m");
    }
}
