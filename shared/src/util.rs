//! Small shared utilities

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Format a cent amount as a decimal display string
///
/// # Examples
///
/// ```
/// use shared::util::format_cents;
///
/// assert_eq!(format_cents(1250), "12.50");
/// assert_eq!(format_cents(5), "0.05");
/// assert_eq!(format_cents(0), "0.00");
/// ```
pub fn format_cents(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, (cents % 100).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(350), "3.50");
        assert_eq!(format_cents(500), "5.00");
        assert_eq!(format_cents(1200), "12.00");
        assert_eq!(format_cents(99), "0.99");
    }
}
