//! Integration tests for result table extraction

use nba_stats::{extract, NbaError, ResponseDocument, TableLayout, TableSelector};
use serde_json::json;

fn career_document() -> ResponseDocument {
    ResponseDocument::from_value(
        json!({
            "resource": "playercareerstats",
            "parameters": {"PlayerID": 201939, "PerMode": "PerGame"},
            "resultSets": [
                {
                    "name": "SeasonTotalsRegularSeason",
                    "headers": ["SEASON_ID", "TEAM_ABBREVIATION", "PTS"],
                    "rowSet": [["2014-15", "GSW", 23.8], ["2015-16", "GSW", 30.1]]
                },
                {
                    "name": "CareerTotalsRegularSeason",
                    "headers": ["PLAYER_ID", "GP", "PTS"],
                    "rowSet": [[201939, 695, 22.4]]
                },
                {
                    "name": "SeasonTotalsPostSeason",
                    "headers": ["SEASON_ID", "PTS"],
                    "rowSet": []
                }
            ]
        }),
        TableLayout::ResultSets,
    )
    .unwrap()
}

#[test]
fn test_records_follow_header_order() {
    let records = extract(&career_document(), &TableSelector::Index(0)).unwrap();

    assert_eq!(records.len(), 2);
    let columns: Vec<&str> = records[1].columns().collect();
    assert_eq!(columns, vec!["SEASON_ID", "TEAM_ABBREVIATION", "PTS"]);
    assert_eq!(records[1].get("PTS"), Some(&json!(30.1)));
}

#[test]
fn test_select_by_name() {
    let records = extract(
        &career_document(),
        &TableSelector::from("CareerTotalsRegularSeason"),
    )
    .unwrap();
    assert_eq!(records[0].get("GP"), Some(&json!(695)));
}

#[test]
fn test_empty_row_set_gives_empty_sequence() {
    let records = extract(&career_document(), &TableSelector::Index(2)).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_out_of_range_index() {
    let result = extract(&career_document(), &TableSelector::Index(3));
    assert!(matches!(result, Err(NbaError::TableNotFound { .. })));
}

#[test]
fn test_single_result_set_layout() {
    let document = ResponseDocument::from_value(
        json!({
            "resource": "leagueleaders",
            "parameters": {"StatCategory": "PTS"},
            "resultSet": {
                "name": "LeagueLeaders",
                "headers": ["PLAYER_ID", "RANK", "PLAYER"],
                "rowSet": [[201939, 1, "Stephen Curry"]]
            }
        }),
        TableLayout::ResultSet,
    )
    .unwrap();

    let records = extract(&document, &TableSelector::Index(0)).unwrap();
    assert_eq!(records[0].get("PLAYER"), Some(&json!("Stephen Curry")));
}

#[test]
fn test_missing_layout_key() {
    let result = ResponseDocument::from_value(
        json!({"resource": "leagueleaders", "parameters": {}, "resultSets": []}),
        TableLayout::ResultSet,
    );
    assert!(matches!(result, Err(NbaError::TableNotFound { .. })));
}

#[test]
fn test_short_row_is_malformed() {
    let document = ResponseDocument::from_value(
        json!({
            "resource": "playergamelog",
            "parameters": {},
            "resultSets": [{
                "name": "PlayerGameLog",
                "headers": ["GAME_ID", "PTS"],
                "rowSet": [["0021500001", 27], ["0021500002"]]
            }]
        }),
        TableLayout::ResultSets,
    );

    let error = match document {
        Err(e) => e,
        Ok(doc) => extract(&doc, &TableSelector::Index(0)).unwrap_err(),
    };
    assert!(matches!(error, NbaError::MalformedTable { .. }));
}

#[test]
fn test_records_serialize_as_json_objects() {
    let records = extract(&career_document(), &TableSelector::Index(1)).unwrap();
    let out = serde_json::to_string(&records[0]).unwrap();
    assert_eq!(out, r#"{"PLAYER_ID":201939,"GP":695,"PTS":22.4}"#);
}
