//! Generic endpoint wrapper.
//!
//! An endpoint is described entirely by data: a resource path, a default
//! parameter template, the response layout and the names of the tables it
//! returns. [`Endpoint`] pairs that description with a [`ParameterBuilder`] and
//! the last decoded [`ResponseDocument`].

use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{
    extract, Overrides, ParamSchema, ParamSpec, ParameterBuilder, ParameterSet, Record,
    ResponseDocument, TableLayout, TableSelector,
};
use crate::stats::http::Transport;
use crate::{NbaError, Result};


/// Static description of one stats endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSpec {
    pub name: &'static str,
    pub path: &'static str,
    pub layout: TableLayout,
    pub params: Vec<ParamSpec>,
    /// Table names in response order.
    pub tables: Vec<&'static str>,
}

impl EndpointSpec {
    pub fn schema(&self) -> Result<ParamSchema> {
        ParamSchema::new(self.params.clone())
    }

    /// Index of a declared table name.
    pub fn table_index(&self, name: &str) -> Option<usize> {
        self.tables.iter().position(|t| *t == name)
    }
}

/// One endpoint with its active parameters and last fetched response.
///
/// Not meant to be shared between tasks while re-querying; give each
/// concurrent task its own instance.
#[derive(Debug)]
pub struct Endpoint<T> {
    transport: T,
    spec: EndpointSpec,
    params: ParameterBuilder,
    document: ResponseDocument,
}

impl<T: Transport> Endpoint<T> {
    /// Validate `overrides` against the endpoint defaults, perform one request
    /// and decode the response.
    pub async fn fetch(transport: T, spec: EndpointSpec, overrides: &Overrides) -> Result<Self> {
        let mut params = ParameterBuilder::new(spec.name, spec.schema()?);
        params.apply_overrides(overrides)?;

        let document = request(&transport, &spec, params.schema(), params.current_snapshot()).await?;

        Ok(Self {
            transport,
            spec,
            params,
            document,
        })
    }

    /// Merge new overrides into the active parameters and fetch again.
    ///
    /// Parameters and document are only replaced once the new response has
    /// been decoded; on any error the previous state is kept.
    pub async fn requery(&mut self, overrides: &Overrides) -> Result<()> {
        let merged = self.params.merge_overrides(overrides)?;

        match request(&self.transport, &self.spec, self.params.schema(), &merged).await {
            Ok(document) => {
                debug!(endpoint = self.spec.name, "requery committed");
                self.params.replace(merged);
                self.document = document;
                Ok(())
            }
            Err(e) => {
                warn!(endpoint = self.spec.name, error = %e, "requery failed, keeping previous state");
                Err(e)
            }
        }
    }

    pub fn spec(&self) -> &EndpointSpec {
        &self.spec
    }

    /// The parameters used for the current document.
    pub fn parameters(&self) -> &ParameterSet {
        self.params.current_snapshot()
    }

    pub fn document(&self) -> &ResponseDocument {
        &self.document
    }

    /// Records of one table of the current document.
    pub fn records(&self, selector: &TableSelector) -> Result<Vec<Record>> {
        extract(&self.document, selector)
    }

    /// Records of a table by its declared name.
    ///
    /// Declared names map to positions, so this works even when the server
    /// leaves the table unnamed.
    pub fn table(&self, name: &str) -> Result<Vec<Record>> {
        let index = self
            .spec
            .table_index(name)
            .ok_or_else(|| NbaError::TableNotFound {
                selector: name.to_string(),
            })?;
        self.records(&TableSelector::Index(index))
    }
}

async fn request<T: Transport>(
    transport: &T,
    spec: &EndpointSpec,
    schema: &ParamSchema,
    set: &ParameterSet,
) -> Result<ResponseDocument> {
    let query = schema.query_pairs(set);
    let body: Value = transport.get_json(spec.path, &query).await?;
    ResponseDocument::from_value(body, spec.layout)
}

/// Fetch several endpoints concurrently, one task per endpoint.
///
/// Each endpoint gets its own clone of the transport and its own state.
/// Results come back in input order.
pub async fn fetch_all<T>(
    transport: T,
    requests: Vec<(EndpointSpec, Overrides)>,
) -> Vec<Result<Endpoint<T>>>
where
    T: Transport + Clone + Send + Sync + 'static,
{
    let handles: Vec<_> = requests
        .into_iter()
        .map(|(spec, overrides)| {
            let transport = transport.clone();
            tokio::spawn(async move { Endpoint::fetch(transport, spec, &overrides).await })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await.map_err(NbaError::from).and_then(|r| r));
    }
    results
}
