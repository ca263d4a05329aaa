//! League-wide endpoints: the daily scoreboard and stat leaders.

use super::{typed_endpoint, LEAGUE_ID, REGULAR_SEASON};
use crate::cli::types::time::{GameDate, CURRENT_SEASON};
use crate::core::params::{NullPolicy, Overrides, ParamKind, ParamSpec, ParamValue};
use crate::core::table::{Record, TableLayout};
use crate::stats::endpoint::{Endpoint, EndpointSpec};
use crate::stats::http::Transport;
use crate::Result;

pub fn scoreboard() -> EndpointSpec {
    EndpointSpec {
        name: "scoreboard",
        path: "scoreboardV2",
        layout: TableLayout::ResultSets,
        params: vec![
            ParamSpec::new("GameDate", ""),
            ParamSpec::new("LeagueID", LEAGUE_ID),
            ParamSpec::new("DayOffset", 0),
        ],
        tables: vec![
            "GameHeader",
            "LineScore",
            "SeriesStandings",
            "LastMeeting",
            "EastConfStandingsByDay",
            "WestConfStandingsByDay",
            "Available",
        ],
    }
}

/// Leaders use the single-table `resultSet` layout. `ActiveFlag` is only sent
/// when set.
pub fn league_leaders() -> EndpointSpec {
    EndpointSpec {
        name: "leagueleaders",
        path: "leagueleaders",
        layout: TableLayout::ResultSet,
        params: vec![
            ParamSpec::new("LeagueID", LEAGUE_ID),
            ParamSpec::new("PerMode", "PerGame"),
            ParamSpec::new("StatCategory", "PTS"),
            ParamSpec::new("Season", CURRENT_SEASON),
            ParamSpec::new("SeasonType", REGULAR_SEASON),
            ParamSpec::new("Scope", "S"),
            ParamSpec::new("ActiveFlag", ParamValue::Null)
                .kind(ParamKind::Str)
                .on_null(NullPolicy::Omit),
        ],
        tables: vec!["LeagueLeaders"],
    }
}

typed_endpoint!(
    /// Games, line scores and standings for one day.
    Scoreboard
);

impl<T: Transport> Scoreboard<T> {
    pub async fn fetch(transport: T, game_date: GameDate, overrides: Overrides) -> Result<Self> {
        let overrides = Overrides::new().set("GameDate", game_date).extend(overrides);
        Ok(Self {
            endpoint: Endpoint::fetch(transport, scoreboard(), &overrides).await?,
        })
    }

    pub fn game_header(&self) -> Result<Vec<Record>> {
        self.table("GameHeader")
    }

    pub fn line_score(&self) -> Result<Vec<Record>> {
        self.table("LineScore")
    }

    pub fn series_standings(&self) -> Result<Vec<Record>> {
        self.table("SeriesStandings")
    }

    pub fn last_meeting(&self) -> Result<Vec<Record>> {
        self.table("LastMeeting")
    }

    pub fn east_conference_standings(&self) -> Result<Vec<Record>> {
        self.table("EastConfStandingsByDay")
    }

    pub fn west_conference_standings(&self) -> Result<Vec<Record>> {
        self.table("WestConfStandingsByDay")
    }
}

typed_endpoint!(
    /// League leaders for one stat category.
    LeagueLeaders
);

impl<T: Transport> LeagueLeaders<T> {
    pub async fn fetch(transport: T, overrides: Overrides) -> Result<Self> {
        Ok(Self {
            endpoint: Endpoint::fetch(transport, league_leaders(), &overrides).await?,
        })
    }

    pub fn leaders(&self) -> Result<Vec<Record>> {
        self.table("LeagueLeaders")
    }
}
