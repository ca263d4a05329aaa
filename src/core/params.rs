//! Parameter vocabulary, validation and merging for stats endpoints.
//!
//! Every endpoint owns a [`ParamSchema`]: the complete list of parameter names it
//! recognizes together with their default values, value kinds and what a `Null`
//! value means on the wire. Caller overrides are checked against that schema
//! before anything is sent, so a typo such as `Seasno` fails locally instead of
//! being silently ignored by the remote API.
//!
//! # Examples
//!
//! ```rust
//! use nba_stats::core::params::{Overrides, ParamSchema, ParamSpec, ParameterBuilder};
//!
//! let schema = ParamSchema::new(vec![
//!     ParamSpec::new("Season", "2015-16"),
//!     ParamSpec::new("PerMode", "PerGame"),
//! ])
//! .unwrap();
//! let builder = ParameterBuilder::new("leaguedashplayerstats", schema);
//!
//! let merged = builder
//!     .merge_overrides(&Overrides::new().set("PerMode", "Totals"))
//!     .unwrap();
//! assert_eq!(merged.get("PerMode").unwrap().to_string(), "Totals");
//! assert!(builder.merge_overrides(&Overrides::new().set("PerMdoe", "Totals")).is_err());
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{KindMismatch, NbaError, Result};


/// A single parameter value. `Null` marks an absent value; how it is sent is
/// decided per parameter by its [`NullPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Str(String),
    Null,
}

impl ParamValue {
    /// Kind of a non-null value.
    pub fn kind(&self) -> Option<ParamKind> {
        match self {
            ParamValue::Str(_) => Some(ParamKind::Str),
            ParamValue::Int(_) => Some(ParamKind::Int),
            ParamValue::Bool(_) => Some(ParamKind::Bool),
            ParamValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Null => Ok(()),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

/// Expected value kind of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKind {
    Str,
    Int,
    Bool,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParamKind::Str => "string",
            ParamKind::Int => "integer",
            ParamKind::Bool => "boolean",
        };
        f.write_str(s)
    }
}

/// What a `Null` value means for one parameter.
///
/// The remote API is inconsistent here, so there is no global rule: each
/// parameter declares its own policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NullPolicy {
    /// A `Null` override keeps the current value. A `Null` default is not sent.
    #[default]
    UseDefault,
    /// Drop the parameter from the query.
    Omit,
    /// Send the parameter with an empty value (`Key=`).
    EmptyString,
    /// Send the parameter as `Key=0`.
    Zero,
}

/// One recognized parameter of an endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: String,
    pub kind: ParamKind,
    pub default: ParamValue,
    pub null_policy: NullPolicy,
}

impl ParamSpec {
    /// Create a parameter whose kind is taken from its default value.
    ///
    /// A `Null` default is treated as a string parameter; use [`ParamSpec::kind`]
    /// to declare anything else.
    pub fn new(name: impl Into<String>, default: impl Into<ParamValue>) -> Self {
        let default = default.into();
        Self {
            name: name.into(),
            kind: default.kind().unwrap_or(ParamKind::Str),
            default,
            null_policy: NullPolicy::default(),
        }
    }

    pub fn kind(mut self, kind: ParamKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn on_null(mut self, policy: NullPolicy) -> Self {
        self.null_policy = policy;
        self
    }

    /// Parse a textual value (for example from the command line) into this
    /// parameter's kind.
    ///
    /// An empty value for an integer or boolean parameter is `Null`, which is
    /// then sent according to the parameter's [`NullPolicy`]. String
    /// parameters keep the empty string.
    pub fn coerce(&self, raw: &str) -> Result<ParamValue> {
        let invalid = || NbaError::InvalidParameterValue {
            key: self.name.clone(),
            kind: self.kind,
            value: raw.to_string(),
        };

        if self.kind != ParamKind::Str && raw.trim().is_empty() {
            return Ok(ParamValue::Null);
        }

        match self.kind {
            ParamKind::Str => Ok(ParamValue::Str(raw.to_string())),
            ParamKind::Int => raw.trim().parse().map(ParamValue::Int).map_err(|_| invalid()),
            ParamKind::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "y" | "yes" => Ok(ParamValue::Bool(true)),
                "false" | "0" | "n" | "no" => Ok(ParamValue::Bool(false)),
                _ => Err(invalid()),
            },
        }
    }

    /// Render a value for the query string, or `None` if it is not sent.
    fn render(&self, value: &ParamValue) -> Option<String> {
        match value {
            ParamValue::Null => match self.null_policy {
                NullPolicy::UseDefault | NullPolicy::Omit => None,
                NullPolicy::EmptyString => Some(String::new()),
                NullPolicy::Zero => Some("0".to_string()),
            },
            other => Some(other.to_string()),
        }
    }
}

/// The recognized parameter vocabulary of one endpoint, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSchema {
    specs: Vec<ParamSpec>,
}

impl ParamSchema {
    /// Build a schema from a default-parameter template.
    ///
    /// Fails if the template names the same parameter twice.
    pub fn new(specs: Vec<ParamSpec>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for spec in &specs {
            if !seen.insert(spec.name.as_str()) {
                return Err(NbaError::InvalidConfig {
                    message: format!("parameter {} declared twice", spec.name),
                });
            }
        }
        Ok(Self { specs })
    }

    pub fn get(&self, name: &str) -> Option<&ParamSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn specs(&self) -> &[ParamSpec] {
        &self.specs
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|s| s.name.as_str())
    }

    /// Defaults as a parameter set.
    pub fn defaults(&self) -> ParameterSet {
        self.specs
            .iter()
            .map(|s| (s.name.clone(), s.default.clone()))
            .collect()
    }

    /// Parse a textual value for `key`. Unknown keys are passed through as
    /// strings so that [`ParameterBuilder::merge_overrides`] can report all of
    /// them at once.
    pub fn coerce(&self, key: &str, raw: &str) -> Result<ParamValue> {
        match self.get(key) {
            Some(spec) => spec.coerce(raw),
            None => Ok(ParamValue::Str(raw.to_string())),
        }
    }

    /// Query string pairs for a parameter set, in schema order, with each
    /// parameter's null policy applied.
    pub fn query_pairs(&self, params: &ParameterSet) -> Vec<(String, String)> {
        self.specs
            .iter()
            .filter_map(|spec| {
                let value = params.get(&spec.name).unwrap_or(&spec.default);
                spec.render(value).map(|v| (spec.name.clone(), v))
            })
            .collect()
    }
}

/// A validated mapping of parameter name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(BTreeMap<String, ParamValue>);

impl ParameterSet {
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<String, ParamValue> {
        &self.0
    }
}

impl FromIterator<(String, ParamValue)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (String, ParamValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<ParameterSet> for BTreeMap<String, ParamValue> {
    fn from(set: ParameterSet) -> Self {
        set.0
    }
}

/// Caller-supplied parameter overrides, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides(BTreeMap<String, ParamValue>);

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one override.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Combine two override sets; keys in `other` win.
    pub fn extend(mut self, other: Overrides) -> Self {
        self.0.extend(other.0);
        self
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Holds one endpoint's schema and its active parameter set.
#[derive(Debug, Clone)]
pub struct ParameterBuilder {
    endpoint: String,
    schema: ParamSchema,
    current: ParameterSet,
}

impl ParameterBuilder {
    /// Start from the schema defaults. The schema's names are the complete
    /// recognized vocabulary.
    pub fn new(endpoint: impl Into<String>, schema: ParamSchema) -> Self {
        let current = schema.defaults();
        Self {
            endpoint: endpoint.into(),
            schema,
            current,
        }
    }

    pub fn schema(&self) -> &ParamSchema {
        &self.schema
    }

    /// The active parameter set.
    pub fn current_snapshot(&self) -> &ParameterSet {
        &self.current
    }

    /// Validate `overrides` and return the current set with them applied.
    ///
    /// Every unrecognized key is reported, not just the first. Nothing is
    /// modified; callers decide whether to commit the result.
    pub fn merge_overrides(&self, overrides: &Overrides) -> Result<ParameterSet> {
        let unknown: Vec<String> = overrides
            .iter()
            .filter(|(key, _)| !self.schema.contains(key))
            .map(|(key, _)| key.clone())
            .collect();
        if !unknown.is_empty() {
            warn!(endpoint = %self.endpoint, keys = ?unknown, "rejected unrecognized parameters");
            return Err(NbaError::UnrecognizedParameter {
                endpoint: self.endpoint.clone(),
                keys: unknown,
            });
        }

        let mut mismatches = Vec::new();
        for (key, value) in overrides.iter() {
            let Some(spec) = self.schema.get(key) else {
                continue;
            };
            if let Some(found) = value.kind() {
                if found != spec.kind {
                    mismatches.push(KindMismatch {
                        key: key.clone(),
                        expected: spec.kind,
                        found,
                    });
                }
            }
        }
        if !mismatches.is_empty() {
            return Err(NbaError::ParameterKind {
                endpoint: self.endpoint.clone(),
                mismatches,
            });
        }

        let mut merged = self.current.0.clone();
        for (key, value) in overrides.iter() {
            let keep_current = value.is_null()
                && self
                    .schema
                    .get(key)
                    .is_some_and(|s| s.null_policy == NullPolicy::UseDefault);
            if !keep_current {
                merged.insert(key.clone(), value.clone());
            }
        }
        Ok(ParameterSet(merged))
    }

    /// Merge and commit. On error the active set is left untouched.
    pub fn apply_overrides(&mut self, overrides: &Overrides) -> Result<()> {
        self.current = self.merge_overrides(overrides)?;
        Ok(())
    }

    /// Replace the active set with one previously returned by
    /// [`ParameterBuilder::merge_overrides`].
    pub fn replace(&mut self, params: ParameterSet) {
        self.current = params;
    }

    /// Query string pairs for the active set.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.schema.query_pairs(&self.current)
    }
}
