//! Scripted retrieval client for dispatcher and end-to-end harnesses.
//!
//! Each concept URI is scripted to return rows, fail, or never answer, with
//! an optional delay. The client records every call and the peak number of
//! fetches in flight so harnesses can assert on fan-out behaviour.
//!
//! # Example
//!
//! ```rust,no_run
//! let client = ScriptedRetrieval::new()
//!     .rows("t:wheat", result_set("t:wheat", &["d1", "d2"]))
//!     .fail("p:height", RetrievalError::Unavailable("503".into()))
//!     .shared();
//! ```

use annoscope_core::{RetrievalClient, RetrievalError, ResultSet, Taxonomy};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
enum Script {
    Rows(ResultSet),
    Fail(RetrievalError),
    Hang,
}

#[derive(Default)]
pub struct ScriptedRetrieval {
    scripts: HashMap<String, (Script, Duration)>,
    calls: Mutex<Vec<(Taxonomy, String)>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl ScriptedRetrieval {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(self, uri: &str, rows: ResultSet) -> Self {
        self.rows_after(uri, rows, Duration::ZERO)
    }

    pub fn rows_after(mut self, uri: &str, rows: ResultSet, delay: Duration) -> Self {
        self.scripts.insert(uri.to_string(), (Script::Rows(rows), delay));
        self
    }

    pub fn fail(self, uri: &str, err: RetrievalError) -> Self {
        self.fail_after(uri, err, Duration::ZERO)
    }

    pub fn fail_after(mut self, uri: &str, err: RetrievalError, delay: Duration) -> Self {
        self.scripts.insert(uri.to_string(), (Script::Fail(err), delay));
        self
    }

    /// The fetch for `uri` never completes.
    pub fn hang(mut self, uri: &str) -> Self {
        self.scripts.insert(uri.to_string(), (Script::Hang, Duration::ZERO));
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Concept URIs fetched so far, in call order.
    pub fn called(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(_, uri)| uri.clone()).collect()
    }

    pub fn taxonomy_of_call(&self, uri: &str) -> Option<Taxonomy> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|(_, called)| called == uri)
            .map(|(taxonomy, _)| *taxonomy)
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RetrievalClient for ScriptedRetrieval {
    async fn fetch(&self, taxonomy: Taxonomy, concept_uri: &str) -> Result<ResultSet, RetrievalError> {
        self.calls.lock().unwrap().push((taxonomy, concept_uri.to_string()));
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        let (script, delay) = self
            .scripts
            .get(concept_uri)
            .cloned()
            .unwrap_or((Script::Rows(Vec::new()), Duration::ZERO));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let answer = match script {
            Script::Rows(rows) => Ok(rows),
            Script::Fail(err) => Err(err),
            Script::Hang => std::future::pending().await,
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        answer
    }
}
