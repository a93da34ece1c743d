//! Header rendering
//!
//! Renders the leading bytes of a log line (date, time, microseconds and
//! prefix) straight into a caller-owned byte buffer. Nothing here allocates
//! beyond growing that buffer.

use super::format_flags::FormatFlags;
use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Timelike};

/// Appends `value` in decimal, zero-padded on the left to at least `width`
/// digits. Wider values are written in full.
///
/// # Examples
///
/// ```
/// use rust_category_logger::core::header::append_padded;
///
/// let mut buf = Vec::new();
/// append_padded(&mut buf, 7, 2);
/// buf.push(b':');
/// append_padded(&mut buf, 12345, 4);
/// assert_eq!(buf, b"07:12345");
/// ```
pub fn append_padded(buf: &mut Vec<u8>, mut value: u64, width: usize) {
    let mut digits = [0u8; 20];
    let mut pos = digits.len();
    let mut remaining_width = width.min(digits.len());

    loop {
        pos -= 1;
        digits[pos] = b'0' + (value % 10) as u8;
        value /= 10;
        remaining_width = remaining_width.saturating_sub(1);
        if value == 0 && remaining_width == 0 {
            break;
        }
    }
    buf.extend_from_slice(&digits[pos..]);
}

/// Appends the header for `now` according to `flags`.
///
/// Layout, each part present only when its flag is set:
/// `YYYY/MM/DD ` then `HH:MM:SS` (with `.ffffff` for microseconds) and a
/// space, then `prefix` verbatim. The prefix carries its own separator.
pub fn format_header<Tz: TimeZone>(
    buf: &mut Vec<u8>,
    now: &DateTime<Tz>,
    flags: FormatFlags,
    prefix: &str,
) {
    if flags.has_timestamp() {
        let fields = if flags.contains(FormatFlags::UTC) {
            now.naive_utc()
        } else {
            now.naive_local()
        };
        append_timestamp(buf, &fields, flags);
    }

    if flags.contains(FormatFlags::PREFIX) {
        buf.extend_from_slice(prefix.as_bytes());
    }
}

fn append_timestamp(buf: &mut Vec<u8>, t: &NaiveDateTime, flags: FormatFlags) {
    if flags.contains(FormatFlags::DATE) {
        let year = t.year();
        if year < 0 {
            buf.push(b'-');
        }
        append_padded(buf, u64::from(year.unsigned_abs()), 4);
        buf.push(b'/');
        append_padded(buf, u64::from(t.month()), 2);
        buf.push(b'/');
        append_padded(buf, u64::from(t.day()), 2);
        buf.push(b' ');
    }

    if flags.intersects(FormatFlags::TIME | FormatFlags::MICROSECONDS) {
        append_padded(buf, u64::from(t.hour()), 2);
        buf.push(b':');
        append_padded(buf, u64::from(t.minute()), 2);
        buf.push(b':');
        append_padded(buf, u64::from(t.second()), 2);
        if flags.contains(FormatFlags::MICROSECONDS) {
            buf.push(b'.');
            // leap seconds report nanoseconds past 1e9
            let nanos = t.nanosecond().min(999_999_999);
            append_padded(buf, u64::from(nanos / 1_000), 6);
        }
        buf.push(b' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};

    fn fixed_utc() -> DateTime<Utc> {
        // 2025-01-08 03:04:05.012345678 UTC
        NaiveDate::from_ymd_opt(2025, 1, 8)
            .and_then(|d| d.and_hms_nano_opt(3, 4, 5, 12_345_678))
            .expect("valid datetime")
            .and_utc()
    }

    fn render(now: &DateTime<impl TimeZone>, flags: FormatFlags, prefix: &str) -> String {
        let mut buf = Vec::new();
        format_header(&mut buf, now, flags, prefix);
        String::from_utf8(buf).expect("header is ascii")
    }

    #[test]
    fn test_append_padded_widths() {
        let mut buf = Vec::new();
        append_padded(&mut buf, 0, 1);
        buf.push(b' ');
        append_padded(&mut buf, 0, 0);
        buf.push(b' ');
        append_padded(&mut buf, 5, 6);
        buf.push(b' ');
        append_padded(&mut buf, 2025, 4);
        buf.push(b' ');
        append_padded(&mut buf, 123_456, 2);
        assert_eq!(buf, b"0 0 000005 2025 123456");
    }

    #[test]
    fn test_append_padded_max_value() {
        let mut buf = Vec::new();
        append_padded(&mut buf, u64::MAX, 30);
        assert_eq!(buf, u64::MAX.to_string().as_bytes());
    }

    #[test]
    fn test_append_padded_keeps_existing_bytes() {
        let mut buf = b"year=".to_vec();
        append_padded(&mut buf, 99, 4);
        assert_eq!(buf, b"year=0099");
    }

    #[test]
    fn test_no_flags_renders_nothing() {
        assert_eq!(render(&fixed_utc(), FormatFlags::NONE, "app: "), "");
    }

    #[test]
    fn test_prefix_only() {
        assert_eq!(render(&fixed_utc(), FormatFlags::PREFIX, "app: "), "app: ");
    }

    #[test]
    fn test_utc_alone_renders_nothing() {
        assert_eq!(render(&fixed_utc(), FormatFlags::UTC, "app: "), "");
    }

    #[test]
    fn test_date_only() {
        assert_eq!(render(&fixed_utc(), FormatFlags::DATE, ""), "2025/01/08 ");
    }

    #[test]
    fn test_time_only() {
        assert_eq!(render(&fixed_utc(), FormatFlags::TIME, ""), "03:04:05 ");
    }

    #[test]
    fn test_microseconds_imply_time() {
        assert_eq!(render(&fixed_utc(), FormatFlags::MICROSECONDS, ""), "03:04:05.012345 ");
    }

    #[test]
    fn test_full_header() {
        let flags = FormatFlags::DATE | FormatFlags::TIME | FormatFlags::MICROSECONDS | FormatFlags::PREFIX;
        assert_eq!(render(&fixed_utc(), flags, "X"), "2025/01/08 03:04:05.012345 X");
    }

    #[test]
    fn test_utc_conversion() {
        let offset = FixedOffset::east_opt(9 * 3600).expect("valid offset");
        let tokyo = fixed_utc().with_timezone(&offset);

        let flags = FormatFlags::DATE | FormatFlags::TIME;
        assert_eq!(render(&tokyo, flags, ""), "2025/01/08 12:04:05 ");
        assert_eq!(render(&tokyo, flags | FormatFlags::UTC, ""), "2025/01/08 03:04:05 ");
    }

    #[test]
    fn test_local_date_crosses_midnight() {
        let offset = FixedOffset::west_opt(5 * 3600).expect("valid offset");
        let new_york = fixed_utc().with_timezone(&offset);
        assert_eq!(render(&new_york, FormatFlags::DATE | FormatFlags::TIME, ""), "2025/01/07 22:04:05 ");
    }

    #[test]
    fn test_wide_and_short_years() {
        let far = NaiveDate::from_ymd_opt(12345, 6, 7)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid datetime")
            .and_utc();
        assert_eq!(render(&far, FormatFlags::DATE, ""), "12345/06/07 ");

        let early = NaiveDate::from_ymd_opt(7, 6, 5)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid datetime")
            .and_utc();
        assert_eq!(render(&early, FormatFlags::DATE, ""), "0007/06/05 ");
    }

    #[test]
    fn test_leap_second_is_clamped() {
        let leap = NaiveDate::from_ymd_opt(2016, 12, 31)
            .and_then(|d| d.and_hms_nano_opt(23, 59, 59, 1_500_000_000))
            .expect("valid leap second")
            .and_utc();
        assert_eq!(render(&leap, FormatFlags::MICROSECONDS, ""), "23:59:59.999999 ");
    }
}
