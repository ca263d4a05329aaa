//! ID types for stats API players and teams.

use crate::core::params::ParamValue;
use crate::error::{NbaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for player IDs.
///
/// Ensures player IDs are handled consistently and cannot be mixed up with
/// team IDs or other numeric parameters.
///
/// # Examples
///
/// ```rust
/// use nba_stats::PlayerId;
///
/// let player_id = PlayerId::new(203999);
/// assert_eq!(player_id.as_u32(), 203999);
/// assert_eq!(player_id.to_string(), "203999");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new PlayerId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| NbaError::InvalidParameterValue {
                key: "PlayerID".to_string(),
                kind: crate::core::ParamKind::Int,
                value: s.to_string(),
            })
    }
}

impl From<PlayerId> for ParamValue {
    fn from(id: PlayerId) -> Self {
        ParamValue::Int(i64::from(id.0))
    }
}

/// Type-safe wrapper for team IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| NbaError::InvalidParameterValue {
                key: "TeamID".to_string(),
                kind: crate::core::ParamKind::Int,
                value: s.to_string(),
            })
    }
}

impl From<TeamId> for ParamValue {
    fn from(id: TeamId) -> Self {
        ParamValue::Int(i64::from(id.0))
    }
}
