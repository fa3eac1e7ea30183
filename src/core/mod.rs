//! # Core Application Logic
//!
//! Query state and configuration. Knows nothing about any specific UI
//! technology; a presentation layer subscribes to the state and renders it.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • QueryState           │
//!                    │  • Action (outcomes)    │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    api     │                          │    view    │
//!     │ (reqwest)  │                          │ (plain     │
//!     │            │                          │  text)     │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `QueryState` and the `CountryQueryState` that drives searches
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod state;

pub use action::{Action, update};
pub use state::{CountryQueryState, QueryState};
