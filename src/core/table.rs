//! Result tables and their conversion into row records.
//!
//! The stats API answers with one or more tables, each shaped as a list of
//! column names (`headers`) plus a list of rows (`rowSet`) whose cells line up
//! positionally with the headers:
//!
//! ```json
//! { "resultSets": [ { "name": "PlayerGameLog", "headers": ["PLAYER_ID", "PTS"],
//!                     "rowSet": [[203999, 27], [2544, 25]] } ] }
//! ```
//!
//! Some endpoints use a single `"resultSet"` object instead of the list; the
//! layout is fixed per endpoint with [`TableLayout`].

use std::collections::BTreeSet;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{NbaError, Result};

#[cfg(test)]
mod tests;

/// Where the tables live in a response document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableLayout {
    /// A list of tables under `"resultSets"`.
    #[default]
    ResultSets,
    /// A single table under `"resultSet"`.
    ResultSet,
}

impl TableLayout {
    fn key(&self) -> &'static str {
        match self {
            TableLayout::ResultSets => "resultSets",
            TableLayout::ResultSet => "resultSet",
        }
    }
}

/// Picks one table out of a [`ResponseDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableSelector {
    Index(usize),
    Name(String),
}

impl fmt::Display for TableSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableSelector::Index(i) => write!(f, "#{}", i),
            TableSelector::Name(n) => f.write_str(n),
        }
    }
}

impl From<usize> for TableSelector {
    fn from(index: usize) -> Self {
        TableSelector::Index(index)
    }
}

impl From<&str> for TableSelector {
    fn from(name: &str) -> Self {
        TableSelector::Name(name.to_string())
    }
}

impl From<String> for TableSelector {
    fn from(name: String) -> Self {
        TableSelector::Name(name)
    }
}

/// One table of headers and positionally aligned rows.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResultTable {
    #[serde(default)]
    pub name: Option<String>,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultTable {
    /// Name for error messages; unnamed tables use their position when known.
    fn label(&self, index: Option<usize>) -> String {
        match (&self.name, index) {
            (Some(name), _) => name.clone(),
            (None, Some(i)) => format!("#{}", i),
            (None, None) => "unnamed".to_string(),
        }
    }

    /// Check that headers are unique and every row has one cell per header.
    fn validate(&self, label: &str) -> Result<()> {
        let mut seen = BTreeSet::new();
        for header in &self.headers {
            if !seen.insert(header.as_str()) {
                return Err(NbaError::MalformedTable {
                    table: label.to_string(),
                    reason: format!("duplicate header {}", header),
                });
            }
        }

        for (i, row) in self.row_set.iter().enumerate() {
            if row.len() != self.headers.len() {
                return Err(NbaError::MalformedTable {
                    table: label.to_string(),
                    reason: format!(
                        "row {} has {} cells, expected {}",
                        i,
                        row.len(),
                        self.headers.len()
                    ),
                });
            }
        }
        Ok(())
    }

    /// Zip every row with the headers, in the original row order.
    ///
    /// The whole table is validated first, so either every row becomes a
    /// record or none does.
    pub fn records(&self) -> Result<Vec<Record>> {
        self.validate(&self.label(None))?;
        Ok(self.zip_rows())
    }

    fn zip_rows(&self) -> Vec<Record> {
        self.row_set
            .iter()
            .map(|row| Record {
                fields: self.headers.iter().cloned().zip(row.iter().cloned()).collect(),
            })
            .collect()
    }
}

/// One row keyed by column name. Iteration follows header order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Convert into a JSON object.
    pub fn into_map(self) -> Map<String, Value> {
        self.fields.into_iter().collect()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// A decoded reply: its tables plus the request parameters the server echoed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseDocument {
    pub resource: Option<String>,
    pub parameters: Value,
    tables: Vec<ResultTable>,
}

impl ResponseDocument {
    /// Build from a decoded JSON body using the endpoint's layout.
    ///
    /// A `"resultSets"` object holding a single table, or a `"resultSet"` list,
    /// is accepted as well; both variants show up in the wild.
    pub fn from_value(mut value: Value, layout: TableLayout) -> Result<Self> {
        let container = value
            .get_mut(layout.key())
            .map(Value::take)
            .ok_or_else(|| NbaError::TableNotFound {
                selector: format!("{} (key missing from response)", layout.key()),
            })?;

        let raw_tables = match container {
            Value::Array(items) => items,
            obj @ Value::Object(_) => vec![obj],
            other => {
                return Err(NbaError::MalformedTable {
                    table: layout.key().to_string(),
                    reason: format!("expected table list or object, got {}", other),
                })
            }
        };

        let tables = raw_tables
            .into_iter()
            .enumerate()
            .map(|(i, raw)| {
                serde_json::from_value::<ResultTable>(raw).map_err(|e| NbaError::MalformedTable {
                    table: format!("#{}", i),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            resource: value
                .get("resource")
                .and_then(Value::as_str)
                .map(str::to_string),
            parameters: value.get_mut("parameters").map(Value::take).unwrap_or_default(),
            tables,
        })
    }

    pub fn tables(&self) -> &[ResultTable] {
        &self.tables
    }

    pub fn table_names(&self) -> Vec<Option<&str>> {
        self.tables.iter().map(|t| t.name.as_deref()).collect()
    }

    /// Resolve a selector to a table.
    pub fn table(&self, selector: &TableSelector) -> Result<&ResultTable> {
        self.position(selector)
            .map(|i| &self.tables[i])
            .ok_or_else(|| NbaError::TableNotFound {
                selector: selector.to_string(),
            })
    }

    fn position(&self, selector: &TableSelector) -> Option<usize> {
        match selector {
            TableSelector::Index(i) => (*i < self.tables.len()).then_some(*i),
            TableSelector::Name(name) => self
                .tables
                .iter()
                .position(|t| t.name.as_deref() == Some(name.as_str())),
        }
    }
}

/// Project one table of `document` into records.
pub fn extract(document: &ResponseDocument, selector: &TableSelector) -> Result<Vec<Record>> {
    let index = document
        .position(selector)
        .ok_or_else(|| NbaError::TableNotFound {
            selector: selector.to_string(),
        })?;
    let table = &document.tables[index];
    table.validate(&table.label(Some(index)))?;
    Ok(table.zip_rows())
}
