use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use serde_json::Value;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Render a backend timestamp for the feed.
///
/// Accepts RFC 3339 and naive ISO-8601 (read as UTC). Anything else is
/// returned unchanged.
pub fn format_created_at(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Utc).format(DISPLAY_FORMAT).to_string();
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.and_utc().format(DISPLAY_FORMAT).to_string();
    }

    raw.to_string()
}

/// Render `created_at` in whatever JSON shape it arrived.
///
/// Strings go through [`format_created_at`], integers are epoch
/// milliseconds, anything else is shown as its JSON text.
pub fn format_created_value(value: &Value) -> String {
    match value {
        Value::String(raw) => format_created_at(raw),
        Value::Number(number) => number
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|parsed| parsed.format(DISPLAY_FORMAT).to_string())
            .unwrap_or_else(|| number.to_string()),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_timestamp() {
        let ts = current_timestamp();
        // Should be a reasonable timestamp (after 2020-01-01)
        assert!(ts > 1577836800);
        // Should be before 2100-01-01
        assert!(ts < 4102444800);
    }

    #[test]
    fn test_current_year() {
        assert!(current_year() >= 2024);
    }

    #[test]
    fn test_format_rfc3339() {
        assert_eq!(format_created_at("2025-03-14T09:26:53Z"), "2025-03-14 09:26 UTC");
        assert_eq!(
            format_created_at("2025-03-14T15:00:00+05:30"),
            "2025-03-14 09:30 UTC"
        );
    }

    #[test]
    fn test_format_naive_iso() {
        assert_eq!(
            format_created_at("2025-03-14T09:26:53.123456"),
            "2025-03-14 09:26 UTC"
        );
        assert_eq!(format_created_at("2025-03-14T09:26:53"), "2025-03-14 09:26 UTC");
    }

    #[test]
    fn test_unparseable_passes_through() {
        assert_eq!(format_created_at("yesterday-ish"), "yesterday-ish");
        assert_eq!(format_created_at(""), "");
    }

    #[test]
    fn test_format_created_value_shapes() {
        assert_eq!(
            format_created_value(&serde_json::json!("2025-03-14T09:26:53Z")),
            "2025-03-14 09:26 UTC"
        );
        assert_eq!(
            format_created_value(&serde_json::json!(1741944413000_i64)),
            "2025-03-14 09:26 UTC"
        );
        assert_eq!(format_created_value(&serde_json::json!(1.5)), "1.5");
        assert_eq!(format_created_value(&serde_json::json!(true)), "true");
    }
}
