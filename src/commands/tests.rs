//! Unit tests for command handlers

use super::*;
use crate::{core::Record, stats::mock::MockTransport, NbaError};
use serde_json::{json, Value};

fn args(raw: &[&str]) -> Vec<ParamArg> {
    raw.iter().map(|s| s.parse().unwrap()).collect()
}

#[cfg(test)]
mod resolve_tests {
    use super::*;

    #[test]
    fn test_resolve_endpoint_coerces_params() {
        let (spec, overrides) =
            resolve_endpoint("playergamelog", &args(&["PlayerID=203999"])).unwrap();
        assert_eq!(spec.path, "playergamelog");
        let collected: Vec<_> = overrides.iter().collect();
        assert_eq!(collected[0].1, &crate::core::ParamValue::Int(203999));
    }

    #[test]
    fn test_resolve_endpoint_unknown() {
        assert_eq!(resolve_endpoint("scoreboardV2", &[]).unwrap().0.name, "scoreboard");
        assert!(matches!(
            resolve_endpoint("nope", &[]),
            Err(NbaError::UnknownEndpoint { .. })
        ));
    }

    #[test]
    fn test_resolve_table() {
        let spec = crate::stats::endpoints::player_career();
        assert_eq!(resolve_table(&spec, None), TableSelector::Index(0));
        assert_eq!(resolve_table(&spec, Some("2")), TableSelector::Index(2));
        assert_eq!(
            resolve_table(&spec, Some("careertotalsregularseason")),
            TableSelector::Index(1)
        );
        assert_eq!(
            resolve_table(&spec, Some("SeasonRankingsRegularSeason")),
            TableSelector::Name("SeasonRankingsRegularSeason".to_string())
        );
    }
}

#[cfg(test)]
mod params_command_tests {
    use super::*;
    use crate::commands::params::preview;

    #[test]
    fn test_preview_applies_overrides() {
        let pairs = preview(
            "playergamelog",
            &args(&["PlayerID=2544", "Season=2016-17"]),
        )
        .unwrap();

        assert_eq!(
            pairs,
            vec![
                ("PlayerID".to_string(), "2544".to_string()),
                ("LeagueID".to_string(), "00".to_string()),
                ("Season".to_string(), "2016-17".to_string()),
                ("SeasonType".to_string(), "Regular Season".to_string()),
            ]
        );
    }

    #[test]
    fn test_preview_empty_integer_uses_null_policy() {
        let pairs = preview("shotchartdetail", &args(&["Month=", "OpponentTeamID="])).unwrap();
        assert!(pairs.contains(&("Month".to_string(), "0".to_string())));
        assert!(pairs.contains(&("OpponentTeamID".to_string(), "0".to_string())));
    }

    #[test]
    fn test_preview_lists_every_unknown_key() {
        let err = preview("playergamelog", &args(&["Seasno=2016-17", "PerMdoe=Totals"]))
            .unwrap_err();
        match err {
            NbaError::UnrecognizedParameter { keys, .. } => {
                assert_eq!(keys, vec!["PerMdoe".to_string(), "Seasno".to_string()]);
            }
            other => panic!("Expected UnrecognizedParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_describe_endpoint() {
        let line = catalog::describe(&crate::stats::endpoints::team_lineups());
        assert!(line.starts_with("teamdashlineups"));
        assert!(line.ends_with("Overall, Lineups"));
    }
}

#[cfg(test)]
mod get_command_tests {
    use super::*;
    use crate::commands::get::fetch_records;

    fn leaders_transport() -> MockTransport {
        MockTransport::returning(json!({
            "resource": "leagueleaders",
            "parameters": {},
            "resultSet": {
                "name": "LeagueLeaders",
                "headers": ["PLAYER_ID", "PLAYER", "PTS"],
                "rowSet": [[201939, "Stephen Curry", 30.1], [201935, "James Harden", 29.0]]
            }
        }))
    }

    #[tokio::test]
    async fn test_fetch_records_default_table() {
        let transport = leaders_transport();
        let records = fetch_records(
            transport.clone(),
            "leagueleaders",
            &args(&["StatCategory=PTS"]),
            None,
        )
        .await
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("PLAYER"), Some(&json!("Stephen Curry")));
        assert_eq!(transport.last_param("StatCategory").as_deref(), Some("PTS"));
    }

    #[tokio::test]
    async fn test_fetch_records_missing_table() {
        let result = fetch_records(leaders_transport(), "leagueleaders", &[], Some("3")).await;
        assert!(matches!(result, Err(NbaError::TableNotFound { .. })));
    }

    #[tokio::test]
    async fn test_fetch_records_bad_param_sends_nothing() {
        let transport = leaders_transport();
        let result = fetch_records(transport.clone(), "leagueleaders", &args(&["Bogus=1"]), None)
            .await;
        assert!(matches!(result, Err(NbaError::UnrecognizedParameter { .. })));
        assert!(transport.requests().is_empty());
    }
}

#[cfg(test)]
mod output_tests {
    use super::*;
    use crate::commands::output::{render, render_text};

    fn records() -> Vec<Record> {
        vec![
            vec![("PLAYER_ID", json!(203999)), ("PTS", json!(27)), ("WL", json!("W"))]
                .into_iter()
                .collect(),
            vec![("PLAYER_ID", json!(2544)), ("PTS", json!(25)), ("WL", Value::Null)]
                .into_iter()
                .collect(),
        ]
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            render_text(&records()),
            "PLAYER_ID\tPTS\tWL\n203999\t27\tW\n2544\t25\t"
        );
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&[]), "");
    }

    #[test]
    fn test_render_json() {
        let out = render(&records(), true).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed,
            json!([
                {"PLAYER_ID": 203999, "PTS": 27, "WL": "W"},
                {"PLAYER_ID": 2544, "PTS": 25, "WL": null}
            ])
        );
    }
}
