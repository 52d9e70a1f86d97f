//! Due Date Drafts
//!
//! Forms edit a due date as two separate inputs (calendar date and time of
//! day). These helpers split a persisted value into that shape and compose
//! it back.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::error::{DomainError, DomainResult};

/// Wire format for composed due dates (local wall clock, no offset)
pub const DUE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
const TIME_INPUT_FORMAT: &str = "%H:%M";

/// Parse a persisted due date into `tz`.
///
/// Values carrying an offset are converted; naive values are read as wall
/// clock time in `tz`. A bare date means midnight.
pub fn parse_due<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(tz));
    }
    let naive = NaiveDateTime::parse_from_str(raw, DUE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_INPUT_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })?;
    tz.from_local_datetime(&naive).earliest()
}

/// Date and time inputs as the user sees them (`YYYY-MM-DD`, `HH:MM`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DueDraft {
    pub date: String,
    pub time: String,
}

impl DueDraft {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
        }
    }

    /// Split a persisted due date in the viewer's time zone.
    /// Absent or unreadable values give empty fields.
    pub fn from_due<Tz: TimeZone>(due: Option<&str>, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        match due.and_then(|raw| parse_due(raw, tz)) {
            Some(at) => Self {
                date: at.format(DATE_INPUT_FORMAT).to_string(),
                time: at.format(TIME_INPUT_FORMAT).to_string(),
            },
            None => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.date.trim().is_empty() && self.time.trim().is_empty()
    }

    /// Compose the persisted value.
    ///
    /// date + time gives `dateTtime:00`, date alone gives midnight, and no
    /// date gives `None` whatever the time field holds.
    pub fn compose(&self) -> DomainResult<Option<String>> {
        let date = self.date.trim();
        if date.is_empty() {
            return Ok(None);
        }
        let day = NaiveDate::parse_from_str(date, DATE_INPUT_FORMAT)
            .map_err(|_| DomainError::InvalidDate(date.to_string()))?;

        let time = self.time.trim();
        let at = if time.is_empty() {
            NaiveTime::MIN
        } else {
            NaiveTime::parse_from_str(time, TIME_INPUT_FORMAT)
                .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
                .map_err(|_| DomainError::InvalidTime(time.to_string()))?
        };

        Ok(Some(day.and_time(at).format(DUE_FORMAT).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike, Utc};

    #[test]
    fn test_compose_date_and_time() {
        let draft = DueDraft::new("2024-05-01", "09:30");
        assert_eq!(draft.compose().unwrap().as_deref(), Some("2024-05-01T09:30:00"));
    }

    #[test]
    fn test_compose_date_only_is_midnight() {
        let draft = DueDraft::new("2024-05-01", "");
        assert_eq!(draft.compose().unwrap().as_deref(), Some("2024-05-01T00:00:00"));
    }

    #[test]
    fn test_compose_time_without_date_is_none() {
        let draft = DueDraft::new("", "09:30");
        assert_eq!(draft.compose().unwrap(), None);
    }

    #[test]
    fn test_compose_rejects_garbage() {
        assert_eq!(
            DueDraft::new("tomorrow", "").compose(),
            Err(DomainError::InvalidDate("tomorrow".into()))
        );
        assert_eq!(
            DueDraft::new("2024-05-01", "9h").compose(),
            Err(DomainError::InvalidTime("9h".into()))
        );
    }

    #[test]
    fn test_split_naive_value_keeps_wall_clock() {
        let draft = DueDraft::from_due(Some("2024-05-01T09:30:00"), &Utc);
        assert_eq!(draft, DueDraft::new("2024-05-01", "09:30"));
    }

    #[test]
    fn test_split_converts_offset_values_to_viewer_zone() {
        let jakarta = FixedOffset::east_opt(7 * 3600).unwrap();
        let draft = DueDraft::from_due(Some("2024-05-01T20:15:00Z"), &jakarta);
        assert_eq!(draft, DueDraft::new("2024-05-02", "03:15"));
    }

    #[test]
    fn test_split_absent_or_unreadable_is_empty() {
        assert!(DueDraft::from_due(None, &Utc).is_empty());
        assert!(DueDraft::from_due(Some("soon"), &Utc).is_empty());
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        let at = parse_due("2024-05-01", &Utc).unwrap();
        assert_eq!(at.hour(), 0);
        assert_eq!(at.date_naive(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn test_split_then_compose_is_stable() {
        let draft = DueDraft::from_due(Some("2024-12-31T23:05:00"), &Utc);
        assert_eq!(draft.compose().unwrap().as_deref(), Some("2024-12-31T23:05:00"));
    }
}
