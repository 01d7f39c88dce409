//! Baseline instants for cumulative times.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Date used when only a time of day is given.
pub const TIME_ONLY_DATE: &str = "1900-01-01";

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Errors that can occur during baseline parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BaselineError {
    /// The baseline string is empty.
    #[error("Empty baseline string")]
    EmptyString,

    /// The baseline string matched no supported format.
    #[error("Invalid baseline: {0}")]
    InvalidFormat(String),
}

/// The reference instant cumulative times are measured from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Baseline {
    /// Report plain elapsed time.
    #[default]
    None,
    /// Report elapsed time offset from this instant.
    At(NaiveDateTime),
}

impl Baseline {
    /// Parses a baseline from text.
    ///
    /// Accepts `YYYY-MM-DD HH:MM[:SS]` (space or `T` separator) or a bare
    /// `HH:MM[:SS]`, which is placed on [`TIME_ONLY_DATE`].
    ///
    /// # Errors
    ///
    /// Returns [`BaselineError`] if the input is empty or matches no format.
    pub fn parse(input: &str) -> Result<Self, BaselineError> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(BaselineError::EmptyString);
        }

        for fmt in DATE_TIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
                return Ok(Self::At(dt));
            }
        }

        let anchored = format!("{TIME_ONLY_DATE} {trimmed}");
        for fmt in TIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(&anchored, &format!("%Y-%m-%d {fmt}")) {
                return Ok(Self::At(dt));
            }
        }

        Err(BaselineError::InvalidFormat(trimmed.to_string()))
    }

    /// Returns the baseline instant, if any.
    #[must_use]
    pub const fn instant(&self) -> Option<NaiveDateTime> {
        match self {
            Self::None => None,
            Self::At(dt) => Some(*dt),
        }
    }

    /// Seconds from midnight of the baseline's date to the baseline itself.
    #[must_use]
    pub fn clock_offset_seconds(&self) -> u64 {
        self.instant()
            .map_or(0, |dt| u64::from(dt.time().num_seconds_from_midnight()))
    }

    /// The absolute instant `elapsed_seconds` after the baseline.
    ///
    /// `None` without a baseline or if the result leaves chrono's range.
    #[must_use]
    pub fn instant_after(&self, elapsed_seconds: u64) -> Option<NaiveDateTime> {
        let delta = i64::try_from(elapsed_seconds)
            .ok()
            .and_then(chrono::Duration::try_seconds)?;
        self.instant()?.checked_add_signed(delta)
    }
}

impl std::str::FromStr for Baseline {
    type Err = BaselineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_date_time() {
        let baseline = Baseline::parse("2024-05-01 09:30:15").unwrap();
        let dt = baseline.instant().unwrap();

        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 5);
        assert_eq!(baseline.clock_offset_seconds(), 9 * 3600 + 30 * 60 + 15);
    }

    #[test]
    fn test_parse_iso_separator_and_minutes() {
        assert!(Baseline::parse("2024-05-01T09:30").is_ok());
        assert!(Baseline::parse("2024-05-01 09:30").is_ok());
    }

    #[test]
    fn test_parse_time_only_uses_fixed_date() {
        let dt = Baseline::parse("08:00").unwrap().instant().unwrap();

        assert_eq!(dt.year(), 1900);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 1);
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Baseline::parse("  "), Err(BaselineError::EmptyString));
        assert!(matches!(
            Baseline::parse("tomorrow"),
            Err(BaselineError::InvalidFormat(_))
        ));
        assert!(Baseline::parse("25:00:00").is_err());
    }

    #[test]
    fn test_instant_after() {
        let baseline: Baseline = "2024-05-01 23:59:30".parse().unwrap();
        let later = baseline.instant_after(45).unwrap();

        assert_eq!(later.day(), 2);
        assert_eq!(later.second(), 15);
        assert_eq!(Baseline::None.instant_after(45), None);
        assert_eq!(Baseline::None.clock_offset_seconds(), 0);
    }
}
