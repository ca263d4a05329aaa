//! Time-related types: seasons and game dates.

use crate::core::params::ParamValue;
use crate::error::{NbaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Season used when an endpoint template does not say otherwise.
pub const CURRENT_SEASON: Season = Season(2015);

/// A season, identified by the year it starts in and written `2015-16`.
///
/// # Examples
///
/// ```rust
/// use nba_stats::Season;
///
/// let season: Season = "2015-16".parse().unwrap();
/// assert_eq!(season.start_year(), 2015);
/// assert_eq!(season.to_string(), "2015-16");
/// assert!("2015-17".parse::<Season>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Season(u16);

impl Season {
    pub fn new(start_year: u16) -> Self {
        Self(start_year)
    }

    pub fn start_year(&self) -> u16 {
        self.0
    }

    /// The following season, or `None` past the last representable year.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Two-digit suffix of the year the season ends in.
    fn end_suffix(&self) -> u32 {
        (u32::from(self.0) + 1) % 100
    }
}

impl Default for Season {
    fn default() -> Self {
        CURRENT_SEASON
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.0, self.end_suffix())
    }
}

impl FromStr for Season {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NbaError::InvalidSeason {
            value: s.to_string(),
        };

        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        let digits = |part: &str, len: usize| {
            part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits(start, 4) || !digits(end, 2) {
            return Err(invalid());
        }
        let season = Self(start.parse().map_err(|_| invalid())?);
        let end: u32 = end.parse().map_err(|_| invalid())?;
        if season.end_suffix() != end {
            return Err(invalid());
        }
        Ok(season)
    }
}

impl Serialize for Season {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl From<Season> for ParamValue {
    fn from(season: Season) -> Self {
        ParamValue::Str(season.to_string())
    }
}

/// A calendar date in the `MM/DD/YYYY` form the scoreboard expects.
///
/// Parses either `MM/DD/YYYY` or ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameDate {
    year: u16,
    month: u8,
    day: u8,
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl GameDate {
    /// Build a date, rejecting days past the end of the month.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(NbaError::InvalidParameterValue {
                key: "GameDate".to_string(),
                kind: crate::core::ParamKind::Str,
                value: format!("{:04}-{:02}-{:02}", year, month, day),
            });
        }
        Ok(Self { year, month, day })
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.month, self.day, self.year)
    }
}

impl FromStr for GameDate {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NbaError::InvalidParameterValue {
            key: "GameDate".to_string(),
            kind: crate::core::ParamKind::Str,
            value: s.to_string(),
        };

        let s = s.trim();
        let parts: Vec<&str> = if s.contains('/') {
            s.split('/').collect()
        } else {
            s.split('-').collect()
        };
        let [a, b, c] = parts.as_slice() else {
            return Err(invalid());
        };

        let (year, month, day) = if s.contains('/') {
            (*c, *a, *b)
        } else {
            (*a, *b, *c)
        };
        if year.len() != 4 {
            return Err(invalid());
        }

        Self::new(
            year.parse().map_err(|_| invalid())?,
            month.parse().map_err(|_| invalid())?,
            day.parse().map_err(|_| invalid())?,
        )
        .map_err(|_| invalid())
    }
}

impl From<GameDate> for ParamValue {
    fn from(date: GameDate) -> Self {
        ParamValue::Str(date.to_string())
    }
}
