//! Player endpoints: game logs, profile, career totals and shot charts.

use super::{league_season_params, typed_endpoint, LEAGUE_ID};
use crate::cli::types::ids::PlayerId;
use crate::core::params::{NullPolicy, Overrides, ParamSpec};
use crate::core::table::{Record, TableLayout};
use crate::stats::endpoint::{Endpoint, EndpointSpec};
use crate::stats::http::Transport;
use crate::Result;

pub fn player_game_log() -> EndpointSpec {
    let mut params = vec![ParamSpec::new("PlayerID", 0)];
    params.extend(league_season_params());
    EndpointSpec {
        name: "playergamelog",
        path: "playergamelog",
        layout: TableLayout::ResultSets,
        params,
        tables: vec!["PlayerGameLog"],
    }
}

pub fn common_player_info() -> EndpointSpec {
    EndpointSpec {
        name: "commonplayerinfo",
        path: "commonplayerinfo",
        layout: TableLayout::ResultSets,
        params: vec![
            ParamSpec::new("PlayerID", 0),
            ParamSpec::new("LeagueID", LEAGUE_ID),
        ],
        tables: vec!["CommonPlayerInfo", "PlayerHeadlineStats", "AvailableSeasons"],
    }
}

pub fn player_career() -> EndpointSpec {
    EndpointSpec {
        name: "playercareerstats",
        path: "playercareerstats",
        layout: TableLayout::ResultSets,
        params: vec![
            ParamSpec::new("PlayerID", 0),
            ParamSpec::new("PerMode", "PerGame"),
            ParamSpec::new("LeagueID", LEAGUE_ID),
        ],
        tables: vec![
            "SeasonTotalsRegularSeason",
            "CareerTotalsRegularSeason",
            "SeasonTotalsPostSeason",
            "CareerTotalsPostSeason",
            "SeasonTotalsAllStarSeason",
            "CareerTotalsAllStarSeason",
            "SeasonTotalsCollegeSeason",
            "CareerTotalsCollegeSeason",
        ],
    }
}

/// Shot chart filters. Empty filters must still be sent, so the optional ones
/// render `Null` as an empty value or zero.
pub fn shot_chart() -> EndpointSpec {
    let mut params = vec![
        ParamSpec::new("PlayerID", 0),
        ParamSpec::new("TeamID", 0).on_null(NullPolicy::Zero),
        ParamSpec::new("GameID", "").on_null(NullPolicy::EmptyString),
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
        ParamSpec::new("Position", "").on_null(NullPolicy::EmptyString),
        ParamSpec::new("RookieYear", "").on_null(NullPolicy::EmptyString),
        ParamSpec::new("GameSegment", "").on_null(NullPolicy::EmptyString),
        ParamSpec::new("Period", 0).on_null(NullPolicy::Zero),
        ParamSpec::new("LastNGames", 0).on_null(NullPolicy::Zero),
        ParamSpec::new("ClutchTime", "").on_null(NullPolicy::EmptyString),
        ParamSpec::new("AheadBehind", "").on_null(NullPolicy::EmptyString),
        ParamSpec::new("PointDiff", "").on_null(NullPolicy::EmptyString),
        ParamSpec::new("RangeType", 0).on_null(NullPolicy::Zero),
        ParamSpec::new("StartPeriod", "").on_null(NullPolicy::EmptyString),
        ParamSpec::new("EndPeriod", "").on_null(NullPolicy::EmptyString),
        ParamSpec::new("StartRange", "").on_null(NullPolicy::EmptyString),
        ParamSpec::new("EndRange", "").on_null(NullPolicy::EmptyString),
        ParamSpec::new("ContextFilter", "").on_null(NullPolicy::EmptyString),
        ParamSpec::new("ContextMeasure", "FGA"),
    ]);
    EndpointSpec {
        name: "shotchartdetail",
        path: "shotchartdetail",
        layout: TableLayout::ResultSets,
        params,
        tables: vec!["Shot_Chart_Detail", "LeagueAverages"],
    }
}

/// Prepend the player id to caller overrides. Caller keys win.
fn with_player(player_id: PlayerId, overrides: Overrides) -> Overrides {
    Overrides::new().set("PlayerID", player_id).extend(overrides)
}

typed_endpoint!(
    /// Box score lines for every game a player appeared in.
    PlayerGameLog
);

impl<T: Transport> PlayerGameLog<T> {
    pub async fn fetch(transport: T, player_id: PlayerId, overrides: Overrides) -> Result<Self> {
        let overrides = with_player(player_id, overrides);
        Ok(Self {
            endpoint: Endpoint::fetch(transport, player_game_log(), &overrides).await?,
        })
    }

    pub fn game_log(&self) -> Result<Vec<Record>> {
        self.table("PlayerGameLog")
    }
}

typed_endpoint!(
    /// Biographical info, headline stats and the seasons a player has data for.
    CommonPlayerInfo
);

impl<T: Transport> CommonPlayerInfo<T> {
    pub async fn fetch(transport: T, player_id: PlayerId, overrides: Overrides) -> Result<Self> {
        let overrides = with_player(player_id, overrides);
        Ok(Self {
            endpoint: Endpoint::fetch(transport, common_player_info(), &overrides).await?,
        })
    }

    pub fn info(&self) -> Result<Vec<Record>> {
        self.table("CommonPlayerInfo")
    }

    pub fn headline_stats(&self) -> Result<Vec<Record>> {
        self.table("PlayerHeadlineStats")
    }

    pub fn available_seasons(&self) -> Result<Vec<Record>> {
        self.table("AvailableSeasons")
    }
}

typed_endpoint!(
    /// Season-by-season and career totals.
    PlayerCareer
);

impl<T: Transport> PlayerCareer<T> {
    pub async fn fetch(transport: T, player_id: PlayerId, overrides: Overrides) -> Result<Self> {
        let overrides = with_player(player_id, overrides);
        Ok(Self {
            endpoint: Endpoint::fetch(transport, player_career(), &overrides).await?,
        })
    }

    pub fn regular_season_totals(&self) -> Result<Vec<Record>> {
        self.table("SeasonTotalsRegularSeason")
    }

    pub fn regular_season_career_totals(&self) -> Result<Vec<Record>> {
        self.table("CareerTotalsRegularSeason")
    }

    pub fn post_season_totals(&self) -> Result<Vec<Record>> {
        self.table("SeasonTotalsPostSeason")
    }

    pub fn post_season_career_totals(&self) -> Result<Vec<Record>> {
        self.table("CareerTotalsPostSeason")
    }

    pub fn all_star_season_totals(&self) -> Result<Vec<Record>> {
        self.table("SeasonTotalsAllStarSeason")
    }

    pub fn college_season_totals(&self) -> Result<Vec<Record>> {
        self.table("SeasonTotalsCollegeSeason")
    }
}

typed_endpoint!(
    /// Every field goal attempt for a player, with league averages by zone.
    ShotChart
);

impl<T: Transport> ShotChart<T> {
    pub async fn fetch(transport: T, player_id: PlayerId, overrides: Overrides) -> Result<Self> {
        let overrides = with_player(player_id, overrides);
        Ok(Self {
            endpoint: Endpoint::fetch(transport, shot_chart(), &overrides).await?,
        })
    }

    pub fn shot_chart(&self) -> Result<Vec<Record>> {
        self.table("Shot_Chart_Detail")
    }

    pub fn league_average(&self) -> Result<Vec<Record>> {
        self.table("LeagueAverages")
    }
}
