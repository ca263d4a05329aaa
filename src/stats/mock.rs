//! In-memory transport for unit tests.

use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::stats::http::Transport;
use crate::Result;

type Responder = dyn Fn(&str, &[(String, String)]) -> Result<Value> + Send + Sync;

/// Records every request and answers with a closure.
#[derive(Clone)]
pub(crate) struct MockTransport {
    responder: Arc<Responder>,
    requests: Arc<Mutex<Vec<(String, Vec<(String, String)>)>>>,
}

impl MockTransport {
    pub(crate) fn new<F>(responder: F) -> Self
    where
        F: Fn(&str, &[(String, String)]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            responder: Arc::new(responder),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always answers with the same body.
    pub(crate) fn returning(body: Value) -> Self {
        Self::new(move |_, _| Ok(body.clone()))
    }

    pub(crate) fn requests(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.requests.lock().unwrap().clone()
    }

    /// Query value of `key` in the most recent request.
    pub(crate) fn last_param(&self, key: &str) -> Option<String> {
        let requests = self.requests.lock().unwrap();
        let (_, query) = requests.last()?;
        query.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport").finish_non_exhaustive()
    }
}

impl Transport for MockTransport {
    async fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        self.requests
            .lock()
            .unwrap()
            .push((path.to_string(), query.to_vec()));
        (self.responder)(path, query)
    }
}
