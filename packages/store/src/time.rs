//! # Time helpers
//!
//! Transactions carry epoch-millisecond timestamps on the wire, while the form
//! and the list rows deal in `YYYY-MM-DD` calendar dates. The conversions here
//! are pure Gregorian day arithmetic in UTC, so they behave identically in the
//! browser and in native tests. [`now_millis`] is the only platform-aware part.

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Current time as epoch milliseconds.
pub fn now_millis() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// Today's date as `YYYY-MM-DD`, the date input's default value.
pub fn today_ymd() -> String {
    millis_to_ymd(now_millis())
}

/// Parse a `YYYY-MM-DD` date into epoch milliseconds at UTC midnight.
pub fn ymd_to_millis(value: &str) -> Option<i64> {
    let mut parts = value.splitn(3, '-');
    let year: i64 = parts.next()?.parse().ok()?;
    let month: i64 = parts.next()?.parse().ok()?;
    let day: i64 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some(days_from_civil(year, month, day) * MILLIS_PER_DAY)
}

/// Format epoch milliseconds as the `YYYY-MM-DD` of its UTC day.
pub fn millis_to_ymd(millis: i64) -> String {
    let (y, m, d) = civil_from_days(millis.div_euclid(MILLIS_PER_DAY));
    format!("{y:04}-{m:02}-{d:02}")
}

// Gregorian date <-> days since 1970-01-01, valid far beyond any date the
// app will see.
fn days_from_civil(y: i64, m: i64, d: i64) -> i64 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    (if m <= 2 { y + 1 } else { y }, m, d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_day_zero() {
        assert_eq!(ymd_to_millis("1970-01-01"), Some(0));
        assert_eq!(millis_to_ymd(0), "1970-01-01");
    }

    #[test]
    fn test_known_dates() {
        assert_eq!(ymd_to_millis("2025-01-01"), Some(1_735_689_600_000));
        assert_eq!(ymd_to_millis("2025-01-10"), Some(1_736_467_200_000));
        assert_eq!(millis_to_ymd(1_735_689_600_000), "2025-01-01");
    }

    #[test]
    fn test_mid_day_millis_keep_their_date() {
        // 2025-01-01T10:00:00Z
        assert_eq!(millis_to_ymd(1_735_725_600_000), "2025-01-01");
        // One millisecond before the next day
        assert_eq!(millis_to_ymd(1_735_775_999_999), "2025-01-01");
        assert_eq!(millis_to_ymd(1_735_776_000_000), "2025-01-02");
    }

    #[test]
    fn test_leap_day_roundtrip() {
        let millis = ymd_to_millis("2024-02-29").unwrap();
        assert_eq!(millis_to_ymd(millis), "2024-02-29");
        assert_eq!(millis_to_ymd(millis + MILLIS_PER_DAY), "2024-03-01");
    }

    #[test]
    fn test_dates_before_the_epoch() {
        assert_eq!(ymd_to_millis("1969-12-31"), Some(-MILLIS_PER_DAY));
        assert_eq!(millis_to_ymd(-1), "1969-12-31");
        assert_eq!(millis_to_ymd(-MILLIS_PER_DAY), "1969-12-31");
    }

    #[test]
    fn test_roundtrip_across_year_boundaries() {
        for date in ["1999-12-31", "2000-01-01", "2023-06-15", "2025-08-26"] {
            let millis = ymd_to_millis(date).unwrap();
            assert_eq!(millis_to_ymd(millis), date);
        }
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert_eq!(ymd_to_millis(""), None);
        assert_eq!(ymd_to_millis("2025"), None);
        assert_eq!(ymd_to_millis("2025-13-01"), None);
        assert_eq!(ymd_to_millis("2025-00-10"), None);
        assert_eq!(ymd_to_millis("2025-01-32"), None);
        assert_eq!(ymd_to_millis("jan 1 2025"), None);
    }

    #[test]
    fn test_now_is_after_2024() {
        assert!(now_millis() > 1_704_067_200_000);
    }
}
