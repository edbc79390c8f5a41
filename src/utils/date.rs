//! Date helpers shared by the row normalizer, the report filter and the
//! submission path.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Date-time layouts a stored cell may carry (form, import or spreadsheet).
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Current local instant, as written into the `timestamp` column.
pub fn now_rfc3339() -> String {
    Local::now().to_rfc3339()
}

/// Parse a date or date-time cell. A bare date is taken at midnight;
/// RFC 3339 values with an offset are converted to local time.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .map(start_of_day)
}

/// Calendar date of a date or date-time cell.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    parse_datetime(s).map(|dt| dt.date())
}

/// 00:00:00.000 of the given day.
pub fn start_of_day(d: NaiveDate) -> NaiveDateTime {
    d.and_time(NaiveTime::MIN)
}

/// 23:59:59.999 of the given day.
pub fn end_of_day(d: NaiveDate) -> NaiveDateTime {
    d.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| start_of_day(d))
}
