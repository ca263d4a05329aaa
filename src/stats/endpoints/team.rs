//! Team endpoints.

use super::{league_season_params, typed_endpoint};
use crate::cli::types::ids::TeamId;
use crate::core::params::{NullPolicy, Overrides, ParamSpec};
use crate::core::table::{Record, TableLayout};
use crate::stats::endpoint::{Endpoint, EndpointSpec};
use crate::stats::http::Transport;
use crate::Result;

pub fn team_game_log() -> EndpointSpec {
    let mut params = vec![ParamSpec::new("TeamID", 0)];
    params.extend(league_season_params());
    EndpointSpec {
        name: "teamgamelog",
        path: "teamgamelog",
        layout: TableLayout::ResultSets,
        params,
        tables: vec!["TeamGameLog"],
    }
}

pub fn team_lineups() -> EndpointSpec {
    let mut params = vec![
        ParamSpec::new("GroupQuantity", 5),
        ParamSpec::new("TeamID", 0),
        ParamSpec::new("MeasureType", "Base"),
        ParamSpec::new("PerMode", "PerGame"),
        ParamSpec::new("PlusMinus", "N"),
        ParamSpec::new("PaceAdjust", "N"),
        ParamSpec::new("Rank", "N"),
    ];
    params.extend(league_season_params());
    params.extend([
        ParamSpec::new("Outcome", "").on_null(NullPolicy::EmptyString),
        ParamSpec::new("Location", "").on_null(NullPolicy::EmptyString),
        ParamSpec::new("Month", 0).on_null(NullPolicy::Zero),
        ParamSpec::new("SeasonSegment", "").on_null(NullPolicy::EmptyString),
        ParamSpec::new("DateFrom", "").on_null(NullPolicy::EmptyString),
        ParamSpec::new("DateTo", "").on_null(NullPolicy::EmptyString),
        ParamSpec::new("OpponentTeamID", 0).on_null(NullPolicy::Zero),
        ParamSpec::new("VsConference", "").on_null(NullPolicy::EmptyString),
        ParamSpec::new("VsDivision", "").on_null(NullPolicy::EmptyString),
        ParamSpec::new("GameSegment", "").on_null(NullPolicy::EmptyString),
        ParamSpec::new("Period", 0).on_null(NullPolicy::Zero),
        ParamSpec::new("LastNGames", 0).on_null(NullPolicy::Zero),
        ParamSpec::new("GameID", "").on_null(NullPolicy::Omit),
    ]);
    EndpointSpec {
        name: "teamdashlineups",
        path: "teamdashlineups",
        layout: TableLayout::ResultSets,
        params,
        tables: vec!["Overall", "Lineups"],
    }
}

fn with_team(team_id: TeamId, overrides: Overrides) -> Overrides {
    Overrides::new().set("TeamID", team_id).extend(overrides)
}

typed_endpoint!(
    /// One row per game played by a team.
    TeamGameLog
);

impl<T: Transport> TeamGameLog<T> {
    pub async fn fetch(transport: T, team_id: TeamId, overrides: Overrides) -> Result<Self> {
        let overrides = with_team(team_id, overrides);
        Ok(Self {
            endpoint: Endpoint::fetch(transport, team_game_log(), &overrides).await?,
        })
    }

    pub fn game_log(&self) -> Result<Vec<Record>> {
        self.table("TeamGameLog")
    }
}

typed_endpoint!(
    /// Team totals plus stats for each lineup of `GroupQuantity` players.
    TeamLineups
);

impl<T: Transport> TeamLineups<T> {
    pub async fn fetch(transport: T, team_id: TeamId, overrides: Overrides) -> Result<Self> {
        let overrides = with_team(team_id, overrides);
        Ok(Self {
            endpoint: Endpoint::fetch(transport, team_lineups(), &overrides).await?,
        })
    }

    pub fn overall(&self) -> Result<Vec<Record>> {
        self.table("Overall")
    }

    pub fn lineups(&self) -> Result<Vec<Record>> {
        self.table("Lineups")
    }
}
