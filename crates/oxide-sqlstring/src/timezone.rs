//! Timezone used when rendering dates.

use std::fmt;
use std::str::FromStr;

use chrono::{FixedOffset, Offset, Utc};

use crate::error::EscapeError;

/// A fixed UTC offset applied to dates before they are formatted.
///
/// Parsed from `Z`, `UTC`, `+HH:MM`, `-HH:MM` or `+HHMM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeZone(FixedOffset);

impl TimeZone {
    /// UTC (`+00:00`).
    #[must_use]
    pub fn utc() -> Self {
        Self(Utc.fix())
    }

    /// Creates a timezone from an offset.
    #[must_use]
    pub const fn new(offset: FixedOffset) -> Self {
        Self(offset)
    }

    /// Creates a timezone `seconds` east of UTC.
    ///
    /// Returns `None` when the offset is a day or more.
    #[must_use]
    pub fn east(seconds: i32) -> Option<Self> {
        FixedOffset::east_opt(seconds).map(Self)
    }

    /// Returns the underlying offset.
    #[must_use]
    pub const fn offset(self) -> FixedOffset {
        self.0
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl From<FixedOffset> for TimeZone {
    fn from(offset: FixedOffset) -> Self {
        Self(offset)
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TimeZone {
    type Err = EscapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.eq_ignore_ascii_case("z") || text.eq_ignore_ascii_case("utc") {
            return Ok(Self::utc());
        }

        let invalid = || EscapeError::InvalidTimeZone(s.to_string());
        if !text.is_ascii() {
            return Err(invalid());
        }
        let (sign, rest) = match text.as_bytes().first() {
            Some(b'+') => (1, &text[1..]),
            Some(b'-') => (-1, &text[1..]),
            _ => return Err(invalid()),
        };
        let (hours, minutes) = match rest.split_once(':') {
            Some(parts) => parts,
            None if rest.len() == 4 => rest.split_at(2),
            None => return Err(invalid()),
        };
        if hours.len() != 2 || minutes.len() != 2 {
            return Err(invalid());
        }
        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
        if minutes >= 60 {
            return Err(invalid());
        }
        Self::east(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_utc_aliases() {
        assert_eq!("Z".parse::<TimeZone>().unwrap(), TimeZone::utc());
        assert_eq!("utc".parse::<TimeZone>().unwrap(), TimeZone::utc());
        assert_eq!("+00:00".parse::<TimeZone>().unwrap(), TimeZone::utc());
    }

    #[test]
    fn test_parse_offsets() {
        let tz: TimeZone = "+05:30".parse().unwrap();
        assert_eq!(tz.offset().local_minus_utc(), 5 * 3600 + 30 * 60);
        let tz: TimeZone = "-0800".parse().unwrap();
        assert_eq!(tz.offset().local_minus_utc(), -8 * 3600);
        assert_eq!(tz.to_string(), "-08:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "05:00", "+5:00", "+05:60", "+24:00", "Europe/Paris", "+0a:00"] {
            assert!(
                matches!(bad.parse::<TimeZone>(), Err(EscapeError::InvalidTimeZone(_))),
                "accepted {bad:?}"
            );
        }
    }
}
