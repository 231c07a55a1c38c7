use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a due date given as `YYYY-MM-DD` (midnight UTC) or RFC 3339.
pub fn parse_due(raw: &str) -> anyhow::Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|error| anyhow::anyhow!("invalid due date '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use lore_core::enums::{LearningCategory, LearningStatus};

    use super::*;

    #[test]
    fn parses_snake_case_enum() {
        let status: LearningStatus = parse_enum("done", "status").expect("status should parse");
        assert_eq!(status, LearningStatus::Done);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let status: LearningStatus =
            parse_enum("in-progress", "status").expect("status should parse");
        assert_eq!(status, LearningStatus::InProgress);

        let category: LearningCategory =
            parse_enum("Podcast", "category").expect("category should parse");
        assert_eq!(category, LearningCategory::Podcast);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<LearningStatus>("finished", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'finished'"));
    }

    #[test]
    fn parses_plain_date_as_midnight_utc() {
        let due = parse_due("2026-04-01").expect("date should parse");
        assert_eq!(due, Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let due = parse_due("2026-04-01T10:00:00+02:00").expect("timestamp should parse");
        assert_eq!(due, Utc.with_ymd_and_hms(2026, 4, 1, 8, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage_due_date() {
        assert!(parse_due("next tuesday").is_err());
    }
}
