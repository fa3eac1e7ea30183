//! # Actions
//!
//! Every query outcome becomes an `Action`.
//! Countries came back? That's `Action::ResultsReceived(records)`.
//! The lookup failed? That's `Action::QueryFailed(error)`.
//!
//! The `update()` function applies an action to the state in place.
//! No side effects here. I/O happens in the spawned search task.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```

use log::debug;

use super::state::QueryState;
use crate::api::{CountryRecord, QueryError};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ResultsReceived(Vec<CountryRecord>),
    QueryFailed(QueryError),
}

impl From<Result<Vec<CountryRecord>, QueryError>> for Action {
    fn from(outcome: Result<Vec<CountryRecord>, QueryError>) -> Self {
        match outcome {
            Ok(records) => Action::ResultsReceived(records),
            Err(e) => Action::QueryFailed(e),
        }
    }
}

pub fn update(state: &mut QueryState, action: Action) {
    match action {
        Action::ResultsReceived(records) => {
            debug!("Replacing {} results with {}", state.results.len(), records.len());
            state.results = records;
            state.error_message.clear();
        }
        // Results stay as they were so the last good list remains visible.
        Action::QueryFailed(e) => {
            debug!("Query failed, keeping {} results: {}", state.results.len(), e);
            state.error_message = format!("Error: {e}");
        }
    }
}
