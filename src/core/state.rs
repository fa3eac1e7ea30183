//! # Query State
//!
//! The observable state a presentation layer reads. Two independent fields,
//! no loading flag:
//!
//! ```text
//! QueryState
//! ├── results: Vec<CountryRecord>   // latest successful lookup
//! └── error_message: String         // latest failure, "" = no error
//! ```
//!
//! `CountryQueryState` owns the state behind a `watch` channel. Each
//! `search()` runs in its own task and publishes through `update()` in
//! action.rs, so overlapping searches resolve last-completion-wins.

use std::sync::Arc;

use log::info;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::action::{Action, update};
use crate::api::{CountryRecord, CountrySource};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    pub results: Vec<CountryRecord>,
    pub error_message: String,
}

impl QueryState {
    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    /// The record a detail view shows.
    pub fn first_match(&self) -> Option<&CountryRecord> {
        self.results.first()
    }
}

pub struct CountryQueryState {
    source: Arc<dyn CountrySource>,
    state: Arc<watch::Sender<QueryState>>,
}

impl CountryQueryState {
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        let (state, _) = watch::channel(QueryState::default());
        Self {
            source,
            state: Arc::new(state),
        }
    }

    /// Starts a lookup for `term` and returns without waiting for it.
    ///
    /// Must be called from within a tokio runtime. The handle can be dropped;
    /// the task still runs to completion and writes its outcome.
    pub fn search(&self, term: &str) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        let term = term.to_string();

        info!("Searching {} for {:?}", source.name(), term);
        tokio::spawn(async move {
            let action = Action::from(source.fetch_by_name(&term).await);
            state.send_modify(|s| update(s, action));
        })
    }

    /// Receiver notified after every published outcome.
    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> QueryState {
        self.state.borrow().clone()
    }

    pub fn results(&self) -> Vec<CountryRecord> {
        self.state.borrow().results.clone()
    }

    pub fn error_message(&self) -> String {
        self.state.borrow().error_message.clone()
    }
}
