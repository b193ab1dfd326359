//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that formats it in the system timezone.
///
/// # Format
///
/// `YYYY-MM-DD HH:MM TZ`, 24-hour clock, e.g. `2024-05-01 14:03 UTC`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_datetime_shape() {
        let ts = Timestamp::from_second(1_640_995_200).unwrap();
        let output = LocalDateTime(&ts).to_string();
        // Date part depends on the local zone; only the layout is stable.
        assert_eq!(output.as_bytes()[4], b'-');
        assert_eq!(output.as_bytes()[13], b':');
    }
}
