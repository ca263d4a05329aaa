//! Unit tests for result table extraction

use super::*;
use serde_json::json;

fn game_log_document() -> Value {
    json!({
        "resource": "playergamelog",
        "parameters": {"PlayerID": 203999, "Season": "2015-16"},
        "resultSets": [
            {
                "name": "PlayerGameLog",
                "headers": ["PLAYER_ID", "PTS"],
                "rowSet": [[203999, 27], [2544, 25]]
            },
            {
                "name": "Totals",
                "headers": ["GP"],
                "rowSet": []
            }
        ]
    })
}

#[cfg(test)]
mod extract_tests {
    use super::*;

    #[test]
    fn test_extract_zips_headers_with_rows() {
        let doc = ResponseDocument::from_value(game_log_document(), TableLayout::ResultSets).unwrap();
        let records = extract(&doc, &TableSelector::Index(0)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            serde_json::to_value(&records).unwrap(),
            json!([
                {"PLAYER_ID": 203999, "PTS": 27},
                {"PLAYER_ID": 2544, "PTS": 25}
            ])
        );
    }

    #[test]
    fn test_extract_by_name() {
        let doc = ResponseDocument::from_value(game_log_document(), TableLayout::ResultSets).unwrap();
        let records = extract(&doc, &"PlayerGameLog".into()).unwrap();
        assert_eq!(records[1].get("PLAYER_ID"), Some(&json!(2544)));

        let totals = extract(&doc, &"Totals".into()).unwrap();
        assert!(totals.is_empty());
    }

    #[test]
    fn test_record_keys_follow_header_order() {
        let doc = json!({
            "resultSets": [{
                "name": "T",
                "headers": ["ZETA", "ALPHA", "MID"],
                "rowSet": [[1, 2, 3]]
            }]
        });
        let doc = ResponseDocument::from_value(doc, TableLayout::ResultSets).unwrap();
        let records = extract(&doc, &TableSelector::Index(0)).unwrap();

        let columns: Vec<&str> = records[0].columns().collect();
        assert_eq!(columns, vec!["ZETA", "ALPHA", "MID"]);
        assert_eq!(
            serde_json::to_string(&records[0]).unwrap(),
            r#"{"ZETA":1,"ALPHA":2,"MID":3}"#
        );
    }

    #[test]
    fn test_extract_preserves_order_and_duplicates() {
        let doc = json!({
            "resultSets": [{
                "headers": ["PLAYER_ID"],
                "rowSet": [[3], [1], [3], [2]]
            }]
        });
        let doc = ResponseDocument::from_value(doc, TableLayout::ResultSets).unwrap();
        let ids: Vec<Value> = extract(&doc, &TableSelector::Index(0))
            .unwrap()
            .into_iter()
            .map(|r| r.get("PLAYER_ID").cloned().unwrap())
            .collect();
        assert_eq!(ids, vec![json!(3), json!(1), json!(3), json!(2)]);
    }

    #[test]
    fn test_cells_are_not_coerced() {
        let doc = json!({
            "resultSets": [{
                "headers": ["GAME_DATE", "FG_PCT", "WL", "PLUS_MINUS"],
                "rowSet": [["NOV 02, 2015", 0.545, null, -4]]
            }]
        });
        let doc = ResponseDocument::from_value(doc, TableLayout::ResultSets).unwrap();
        let records = extract(&doc, &TableSelector::Index(0)).unwrap();

        let values: Vec<&Value> = records[0].values().collect();
        assert_eq!(
            values,
            vec![&json!("NOV 02, 2015"), &json!(0.545), &Value::Null, &json!(-4)]
        );
    }

    #[test]
    fn test_short_row_is_malformed() {
        let doc = json!({
            "resultSets": [{
                "name": "PlayerGameLog",
                "headers": ["PLAYER_ID", "PTS"],
                "rowSet": [[203999, 27], [2544]]
            }]
        });
        let doc = ResponseDocument::from_value(doc, TableLayout::ResultSets).unwrap();

        match extract(&doc, &TableSelector::Index(0)).unwrap_err() {
            NbaError::MalformedTable { table, reason } => {
                assert_eq!(table, "PlayerGameLog");
                assert!(reason.contains("row 1"));
            }
            other => panic!("Expected MalformedTable, got {other:?}"),
        }
    }

    #[test]
    fn test_long_row_is_malformed() {
        let doc = json!({
            "resultSets": [{"headers": ["A"], "rowSet": [[1, 2]]}]
        });
        let doc = ResponseDocument::from_value(doc, TableLayout::ResultSets).unwrap();
        assert!(matches!(
            extract(&doc, &TableSelector::Index(0)),
            Err(NbaError::MalformedTable { .. })
        ));
    }

    #[test]
    fn test_duplicate_headers_are_malformed() {
        let doc = json!({
            "resultSets": [{"headers": ["TEAM_ID", "TEAM_ID"], "rowSet": [[1, 1]]}]
        });
        let doc = ResponseDocument::from_value(doc, TableLayout::ResultSets).unwrap();
        assert!(matches!(
            extract(&doc, &TableSelector::Index(0)),
            Err(NbaError::MalformedTable { .. })
        ));
    }

    #[test]
    fn test_unknown_selector_is_not_found() {
        let doc = ResponseDocument::from_value(game_log_document(), TableLayout::ResultSets).unwrap();

        match extract(&doc, &TableSelector::Index(5)).unwrap_err() {
            NbaError::TableNotFound { selector } => assert_eq!(selector, "#5"),
            other => panic!("Expected TableNotFound, got {other:?}"),
        }
        assert!(matches!(
            extract(&doc, &"ShotChartDetail".into()),
            Err(NbaError::TableNotFound { .. })
        ));
    }

    #[test]
    fn test_table_records_matches_extract() {
        let doc = ResponseDocument::from_value(game_log_document(), TableLayout::ResultSets).unwrap();
        let table = doc.table(&TableSelector::Index(0)).unwrap();
        assert_eq!(table.records().unwrap(), extract(&doc, &TableSelector::Index(0)).unwrap());
    }

    #[test]
    fn test_unnamed_malformed_table_label() {
        let body = json!({
            "resultSets": [
                {"headers": ["A"], "rowSet": [[1]]},
                {"headers": ["A", "B"], "rowSet": [[1]]}
            ]
        });
        let doc = ResponseDocument::from_value(body, TableLayout::ResultSets).unwrap();

        match extract(&doc, &TableSelector::Index(1)).unwrap_err() {
            NbaError::MalformedTable { table, .. } => assert_eq!(table, "#1"),
            other => panic!("Expected MalformedTable, got {other:?}"),
        }

        let table = doc.table(&TableSelector::Index(1)).unwrap();
        match table.records().unwrap_err() {
            NbaError::MalformedTable { table, .. } => assert_eq!(table, "unnamed"),
            other => panic!("Expected MalformedTable, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod document_tests {
    use super::*;

    #[test]
    fn test_single_result_set_layout() {
        let body = json!({
            "resource": "leagueleaders",
            "parameters": {"LeagueID": "00"},
            "resultSet": {
                "name": "LeagueLeaders",
                "headers": ["PLAYER_ID", "RANK"],
                "rowSet": [[201939, 1]]
            }
        });
        let doc = ResponseDocument::from_value(body, TableLayout::ResultSet).unwrap();

        assert_eq!(doc.tables().len(), 1);
        assert_eq!(doc.table_names(), vec![Some("LeagueLeaders")]);
        assert_eq!(doc.resource.as_deref(), Some("leagueleaders"));
        assert_eq!(doc.parameters, json!({"LeagueID": "00"}));

        let records = extract(&doc, &"LeagueLeaders".into()).unwrap();
        assert_eq!(records[0].get("RANK"), Some(&json!(1)));
    }

    #[test]
    fn test_missing_container_is_not_found() {
        let body = json!({"resultSets": []});
        let result = ResponseDocument::from_value(body, TableLayout::ResultSet);
        assert!(matches!(result, Err(NbaError::TableNotFound { .. })));
    }

    #[test]
    fn test_empty_result_sets_has_no_tables() {
        let doc = ResponseDocument::from_value(json!({"resultSets": []}), TableLayout::ResultSets)
            .unwrap();
        assert!(doc.tables().is_empty());
        assert!(matches!(
            doc.table(&TableSelector::Index(0)),
            Err(NbaError::TableNotFound { .. })
        ));
    }

    #[test]
    fn test_table_without_headers_is_malformed() {
        let body = json!({"resultSets": [{"name": "X", "rowSet": [[1]]}]});
        let result = ResponseDocument::from_value(body, TableLayout::ResultSets);
        assert!(matches!(result, Err(NbaError::MalformedTable { .. })));
    }

    #[test]
    fn test_scalar_container_is_malformed() {
        let body = json!({"resultSets": "oops"});
        let result = ResponseDocument::from_value(body, TableLayout::ResultSets);
        assert!(matches!(result, Err(NbaError::MalformedTable { .. })));
    }

    #[test]
    fn test_missing_echo_defaults_to_null() {
        let doc = ResponseDocument::from_value(json!({"resultSets": []}), TableLayout::ResultSets)
            .unwrap();
        assert_eq!(doc.parameters, Value::Null);
        assert!(doc.resource.is_none());
    }

    #[test]
    fn test_record_into_map() {
        let record: Record = vec![("PTS", json!(27)), ("AST", json!(9))].into_iter().collect();
        let map = record.clone().into_map();
        assert_eq!(map.get("PTS"), Some(&json!(27)));
        assert_eq!(record.len(), 2);
        assert!(!record.is_empty());
    }
}
