//! Endpoint catalog.
//!
//! Each endpoint is a function returning its [`EndpointSpec`]; the typed
//! wrappers in the submodules add constructors for required ids and one
//! accessor per result table.
//!
//! ```rust,no_run
//! use nba_stats::stats::endpoints::player::PlayerGameLog;
//! use nba_stats::{Overrides, PlayerId, Season, StatsClient};
//!
//! # async fn example() -> nba_stats::Result<()> {
//! let client = StatsClient::from_env()?;
//! let log = PlayerGameLog::fetch(
//!     client,
//!     PlayerId::new(201939),
//!     Overrides::new().set("Season", Season::new(2015)),
//! )
//! .await?;
//!
//! for game in log.game_log()? {
//!     println!("{:?} {:?}", game.get("GAME_DATE"), game.get("PTS"));
//! }
//! # Ok(())
//! # }
//! ```

use crate::cli::types::time::CURRENT_SEASON;
use crate::core::params::ParamSpec;
use crate::stats::endpoint::EndpointSpec;
use crate::{NbaError, Result};

/// Generates the newtype around [`Endpoint`](crate::stats::endpoint::Endpoint)
/// shared by every typed wrapper.
macro_rules! typed_endpoint {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name<T> {
            endpoint: $crate::stats::endpoint::Endpoint<T>,
        }

        impl<T> std::ops::Deref for $name<T> {
            type Target = $crate::stats::endpoint::Endpoint<T>;

            fn deref(&self) -> &Self::Target {
                &self.endpoint
            }
        }

        impl<T> std::ops::DerefMut for $name<T> {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.endpoint
            }
        }

        impl<T> From<$name<T>> for $crate::stats::endpoint::Endpoint<T> {
            fn from(wrapper: $name<T>) -> Self {
                wrapper.endpoint
            }
        }
    };
}

pub(crate) use typed_endpoint;

pub mod league;
pub mod player;
pub mod team;


pub use league::{league_leaders, scoreboard, LeagueLeaders, Scoreboard};
pub use player::{
    common_player_info, player_career, player_game_log, shot_chart, CommonPlayerInfo,
    PlayerCareer, PlayerGameLog, ShotChart,
};
pub use team::{team_game_log, team_lineups, TeamGameLog, TeamLineups};

pub const LEAGUE_ID: &str = "00";
pub const REGULAR_SEASON: &str = "Regular Season";

/// Parameters nearly every endpoint shares.
pub(crate) fn league_season_params() -> Vec<ParamSpec> {
    vec![
        ParamSpec::new("LeagueID", LEAGUE_ID),
        ParamSpec::new("Season", CURRENT_SEASON),
        ParamSpec::new("SeasonType", REGULAR_SEASON),
    ]
}

/// Every endpoint in the catalog.
pub fn all() -> Vec<EndpointSpec> {
    vec![
        player_game_log(),
        team_game_log(),
        common_player_info(),
        player_career(),
        shot_chart(),
        team_lineups(),
        scoreboard(),
        league_leaders(),
    ]
}

/// Look an endpoint up by name or resource path, ignoring case.
pub fn by_name(name: &str) -> Result<EndpointSpec> {
    all()
        .into_iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(name) || spec.path.eq_ignore_ascii_case(name))
        .ok_or_else(|| NbaError::UnknownEndpoint {
            name: name.to_string(),
        })
}
