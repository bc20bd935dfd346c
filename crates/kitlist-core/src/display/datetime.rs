//! Local-time display for stored timestamps.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Display wrapper formatting a UTC timestamp in the system timezone.
///
/// Zero-cost: holds a reference and formats on demand as
/// `YYYY-MM-DD HH:MM TZ`.
pub struct LocalStamp<'a>(pub &'a Timestamp);

impl fmt::Display for LocalStamp<'_> {
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
