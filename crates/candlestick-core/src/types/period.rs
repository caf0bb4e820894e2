//! Period tokens for resampling targets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ResampleError;

/// Canonical minute count for the `y` unit.
///
/// This does not equal 365 * 1440 (525600) or any common calendar-year
/// definition. The value is pinned by upstream feed behavior and kept
/// verbatim; do not "correct" it without confirming intended semantics.
pub const MINUTES_PER_YEAR: u32 = 3_588_480;

/// Unit suffix of a period token such as `"15m"` or `"2w"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    /// Minutes
    Minute,
    /// Hours
    Hour,
    /// Days (linear rule, 24 * 60; not exercised by upstream feeds)
    Day,
    /// Weeks
    Week,
    /// Years (anomalous canonical value, see [`MINUTES_PER_YEAR`])
    Year,
}

impl PeriodUnit {
    /// Get the canonical number of minutes for one unit.
    pub fn minutes(&self) -> u32 {
        match self {
            PeriodUnit::Minute => 1,
            PeriodUnit::Hour => 60,
            PeriodUnit::Day => 1440,
            PeriodUnit::Week => 10080,
            PeriodUnit::Year => MINUTES_PER_YEAR,
        }
    }

    /// Parse a unit letter, case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'm' => Some(PeriodUnit::Minute),
            'h' => Some(PeriodUnit::Hour),
            'd' => Some(PeriodUnit::Day),
            'w' => Some(PeriodUnit::Week),
            'y' => Some(PeriodUnit::Year),
            _ => None,
        }
    }

    /// Get all supported units, coarsest first.
    pub fn all() -> &'static [PeriodUnit] {
        &[
            PeriodUnit::Year,
            PeriodUnit::Week,
            PeriodUnit::Day,
            PeriodUnit::Hour,
            PeriodUnit::Minute,
        ]
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PeriodUnit::Minute => "m",
            PeriodUnit::Hour => "h",
            PeriodUnit::Day => "d",
            PeriodUnit::Week => "w",
            PeriodUnit::Year => "y",
        };
        write!(f, "{}", s)
    }
}

/// Parse a period token into a canonical minute count.
///
/// Accepts digits followed by exactly one unit letter (`m`, `h`, `d`, `w`,
/// `y`, case-insensitive). Anything else, including leading or trailing
/// garbage, is rejected. Pure: the same token always yields the same result.
pub fn parse_minutes(token: &str) -> Result<u32, ResampleError> {
    let invalid = || ResampleError::InvalidPeriodToken(token.to_string());

    let mut chars = token.chars();
    let unit_char = chars.next_back().ok_or_else(invalid)?;
    let unit = PeriodUnit::from_char(unit_char).ok_or_else(invalid)?;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let count: u32 = digits.parse().map_err(|_| invalid())?;

    count.checked_mul(unit.minutes()).ok_or_else(invalid)
}

/// A resampling target period, canonically a positive minute count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    minutes: u32,
}

impl Period {
    /// Create a period from a raw minute count.
    pub fn from_minutes(minutes: u32) -> Result<Self, ResampleError> {
        if minutes == 0 {
            return Err(ResampleError::InvalidConfiguration(
                "target period must be a positive number of minutes".to_string(),
            ));
        }
        Ok(Self { minutes })
    }

    /// Get the canonical minute count.
    #[inline]
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Get the bucket width in seconds.
    #[inline]
    pub fn as_secs(&self) -> i64 {
        i64::from(self.minutes) * 60
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in PeriodUnit::all() {
            if self.minutes % unit.minutes() == 0 {
                return write!(f, "{}{}", self.minutes / unit.minutes(), unit);
            }
        }
        write!(f, "{}m", self.minutes)
    }
}

impl FromStr for Period {
    type Err = ResampleError;

    /// Parse either a bare minute count (`"15"`) or a token (`"15m"`, `"1H"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let minutes = match s.parse::<u32>() {
            Ok(n) => n,
            Err(_) => parse_minutes(s)?,
        };
        Period::from_minutes(minutes)
    }
}
