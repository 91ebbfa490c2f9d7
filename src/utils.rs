pub fn parse_f64_input(value: &str, fallback: f64) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    match trimmed.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => parsed,
        _ => fallback,
    }
}

/// Coerce free-form text into a non-negative number of seconds.
/// Anything that does not parse becomes zero.
pub fn parse_seconds_input(value: &str) -> f64 {
    parse_f64_input(value, 0.0).max(0.0)
}

/// Whether a field's text was edited away from what it last displayed.
/// Committing unedited text would replace the stored value with its rounded display.
pub fn should_commit(shown: &str, raw: &str) -> bool {
    shown.trim() != raw.trim()
}

/// Round to two decimal places.
pub fn round_centis(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}

/// Format seconds as `m:ss.cc` for display.
pub fn format_timecode(seconds: f64) -> String {
    let total_centis = (seconds.max(0.0) * 100.0).round() as u64;
    let minutes = total_centis / 6000;
    let secs = (total_centis % 6000) / 100;
    let centis = total_centis % 100;
    format!("{}:{:02}.{:02}", minutes, secs, centis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seconds_clamps_negative() {
        assert_eq!(parse_seconds_input("-5"), 0.0);
        assert_eq!(parse_seconds_input(" 12.5 "), 12.5);
    }

    #[test]
    fn test_parse_seconds_non_numeric_is_zero() {
        assert_eq!(parse_seconds_input("abc"), 0.0);
        assert_eq!(parse_seconds_input(""), 0.0);
        assert_eq!(parse_seconds_input("inf"), 0.0);
        assert_eq!(parse_seconds_input("NaN"), 0.0);
    }

    #[test]
    fn test_should_commit_only_edited_text() {
        assert!(!should_commit("3.14", "3.14"));
        assert!(!should_commit("3.14", " 3.14 "));
        assert!(should_commit("3.14", "3.15"));
        assert!(should_commit("3.14", ""));
    }

    #[test]
    fn test_round_centis() {
        assert_eq!(round_centis(12.345678), 12.35);
        assert_eq!(round_centis(0.004), 0.0);
    }

    #[test]
    fn test_format_timecode() {
        assert_eq!(format_timecode(0.0), "0:00.00");
        assert_eq!(format_timecode(75.5), "1:15.50");
    }
}
