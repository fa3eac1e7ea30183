//! Country lookup against the REST Countries API.

pub mod api;
pub mod core;
pub mod view;

#[cfg(test)]
pub mod test_support;
