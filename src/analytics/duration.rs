//! ISO 8601 の動画長（`PT1H2M3S`）の解析と表示

use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

static ISO_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$").unwrap()
});

/// `PT4M13S` 形式を解析。形式が不正なら `None`
pub fn parse_iso8601_duration(value: &str) -> Option<Duration> {
    let value = value.trim();
    if value.len() < 2 || value == "PT" {
        return None;
    }

    let captures = ISO_DURATION.captures(value)?;
    let part = |index: usize| -> u64 {
        captures
            .get(index)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };

    let seconds = part(1) * 86_400 + part(2) * 3_600 + part(3) * 60 + part(4);
    Some(Duration::from_secs(seconds))
}

/// `H:MM:SS`（1時間未満は `M:SS`）
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes_seconds() {
        assert_eq!(
            parse_iso8601_duration("PT4M13S"),
            Some(Duration::from_secs(253))
        );
    }

    #[test]
    fn test_parse_hours_and_days() {
        assert_eq!(
            parse_iso8601_duration("PT1H2M3S"),
            Some(Duration::from_secs(3_723))
        );
        assert_eq!(
            parse_iso8601_duration("P1DT2H"),
            Some(Duration::from_secs(93_600))
        );
        assert_eq!(parse_iso8601_duration("PT45S"), Some(Duration::from_secs(45)));
        // ライブ配信待機中は P0D が返る
        assert_eq!(parse_iso8601_duration("P0D"), Some(Duration::ZERO));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_iso8601_duration(""), None);
        assert_eq!(parse_iso8601_duration("PT"), None);
        assert_eq!(parse_iso8601_duration("4:13"), None);
        assert_eq!(parse_iso8601_duration("PT4X"), None);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(253)), "4:13");
        assert_eq!(format_duration(Duration::from_secs(3_723)), "1:02:03");
        assert_eq!(format_duration(Duration::ZERO), "0:00");
    }
}
