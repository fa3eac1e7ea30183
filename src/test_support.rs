//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::api::{CountryRecord, CountrySource, QueryError};

type Outcome = Result<Vec<CountryRecord>, QueryError>;

/// A record with only its common name set.
pub fn country(common: &str) -> CountryRecord {
    let mut record = CountryRecord::default();
    record.name.common = common.to_string();
    record
}

/// Answers every lookup with the same outcome and records the terms asked.
pub struct StaticSource {
    outcome: Outcome,
    terms: Mutex<Vec<String>>,
}

impl StaticSource {
    pub fn ok(records: Vec<CountryRecord>) -> Self {
        Self {
            outcome: Ok(records),
            terms: Mutex::new(Vec::new()),
        }
    }

    pub fn terms(&self) -> Vec<String> {
        self.terms.lock().unwrap().clone()
    }
}

#[async_trait]
impl CountrySource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_by_name(&self, term: &str) -> Outcome {
        self.terms.lock().unwrap().push(term.to_string());
        self.outcome.clone()
    }
}

/// Holds each lookup open until the test releases its gate, so tests
/// control completion order.
#[derive(Default)]
pub struct GatedSource {
    gates: Mutex<HashMap<String, oneshot::Receiver<Outcome>>>,
}

impl GatedSource {
    /// Registers a gate for `term`; the lookup resolves with whatever is sent.
    pub fn gate(&self, term: &str) -> oneshot::Sender<Outcome> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(term.to_string(), rx);
        tx
    }
}

#[async_trait]
impl CountrySource for GatedSource {
    fn name(&self) -> &str {
        "gated"
    }

    async fn fetch_by_name(&self, term: &str) -> Outcome {
        let gate = self.gates.lock().unwrap().remove(term);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(QueryError::Network("gate dropped".to_string()))),
            None => Err(QueryError::Config(format!("no gate for {term:?}"))),
        }
    }
}
