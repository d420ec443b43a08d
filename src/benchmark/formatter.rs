use std::time::Duration;

/// Format a Duration for display
pub(crate) fn format_duration(duration: &Duration) -> String {
    format!("{duration:?}")
}

/// Format a Duration for CSV (as nanoseconds)
pub(crate) fn format_duration_csv(duration: &Duration) -> String {
    duration.as_nanos().to_string()
}
