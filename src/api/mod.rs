pub mod client;
pub mod source;
pub mod types;

pub use client::{CountryQueryService, DEFAULT_BASE_URL};
pub use source::{CountrySource, QueryError};
pub use types::{CountryName, CountryRecord, Currency, Flags, LocalizedName, decode_countries};
