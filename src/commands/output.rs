//! Text and JSON rendering of records.

use serde_json::Value;

use crate::{core::Record, Result};

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Tab-separated header line followed by one line per record.
pub fn render_text(records: &[Record]) -> String {
    let Some(first) = records.first() else {
        return String::new();
    };

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(first.columns().collect::<Vec<_>>().join("\t"));
    for record in records {
        lines.push(record.values().map(cell).collect::<Vec<_>>().join("\t"));
    }
    lines.join("\n")
}

/// Render records as pretty JSON or as text.
pub fn render(records: &[Record], as_json: bool) -> Result<String> {
    if as_json {
        Ok(serde_json::to_string_pretty(records)?)
    } else {
        Ok(render_text(records))
    }
}
