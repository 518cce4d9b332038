use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Parses a dataset timestamp.
///
/// Accepted forms: RFC 3339, a naive date-time read as UTC, or a bare date
/// read as midnight UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub(crate) fn required_timestamp(
    details: &Value,
    field: &str,
    id: &str,
) -> crate::model::Result<DateTime<Utc>> {
    let Some(raw) = details[field].as_str() else {
        return Err(format!("Not found '{field}' field (id `{id}`)").into());
    };
    let Some(datetime) = parse_timestamp(raw) else {
        return Err(format!("Not a valid date time: {raw} (id `{id}`)").into());
    };
    Ok(datetime)
}

pub(crate) fn optional_timestamp(
    details: &Value,
    field: &str,
    id: &str,
) -> crate::model::Result<Option<DateTime<Utc>>> {
    match details[field].as_str() {
        Some(_) => required_timestamp(details, field, id).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
pub(crate) fn ts(raw: &str) -> DateTime<Utc> {
    parse_timestamp(raw).expect("valid test timestamp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn accepts_all_three_forms() {
        let rfc = parse_timestamp("2023-06-01T10:30:00+02:00").unwrap();
        assert_eq!(rfc.hour(), 8);

        let naive = parse_timestamp("2023-06-01T10:30:00").unwrap();
        assert_eq!(naive.hour(), 10);
        assert_eq!(naive.minute(), 30);

        let date = parse_timestamp("2023-01-01").unwrap();
        assert_eq!(date.to_rfc3339(), "2023-01-01T00:00:00+00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
