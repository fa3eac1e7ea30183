//! REST Countries payload types.
//!
//! Every field defaults when the API omits it or sends `null`, so a country
//! with a missing `currencies` or `capital` entry still decodes. Only a
//! malformed outer payload fails the whole decode.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Treats an explicit JSON `null` the same as an absent key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One country returned by `GET /name/{term}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct CountryRecord {
    #[serde(deserialize_with = "nullable")]
    pub name: CountryName,
    /// Keyed by ISO 4217 code.
    #[serde(deserialize_with = "nullable")]
    pub currencies: BTreeMap<String, Currency>,
    #[serde(deserialize_with = "nullable")]
    pub capital: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub region: String,
    /// Language code to display name, e.g. `"swa" -> "Swahili"`.
    #[serde(deserialize_with = "nullable")]
    pub languages: BTreeMap<String, String>,
    #[serde(deserialize_with = "nullable")]
    pub translations: BTreeMap<String, LocalizedName>,
    /// ISO 3166-1 alpha-3 codes in API order.
    #[serde(deserialize_with = "nullable")]
    pub borders: Vec<String>,
    /// Square kilometres.
    #[serde(deserialize_with = "nullable")]
    pub area: f64,
    #[serde(deserialize_with = "nullable")]
    pub flags: Flags,
    /// Emoji flag.
    #[serde(deserialize_with = "nullable")]
    pub flag: String,
    #[serde(deserialize_with = "nullable")]
    pub population: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct CountryName {
    #[serde(deserialize_with = "nullable")]
    pub common: String,
    #[serde(deserialize_with = "nullable")]
    pub official: String,
    #[serde(rename = "nativeName", deserialize_with = "nullable")]
    pub native_name: BTreeMap<String, LocalizedName>,
}

/// A name in one language. Used for both native names and translations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LocalizedName {
    #[serde(deserialize_with = "nullable")]
    pub official: String,
    #[serde(deserialize_with = "nullable")]
    pub common: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Currency {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub symbol: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Flags {
    #[serde(deserialize_with = "nullable")]
    pub png: String,
    #[serde(deserialize_with = "nullable")]
    pub svg: String,
    #[serde(deserialize_with = "nullable")]
    pub alt: String,
}

impl CountryRecord {
    /// Decodes a single country object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// First listed capital, if any.
    pub fn primary_capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }

    /// Currency with the lowest ISO code, if any.
    pub fn primary_currency(&self) -> Option<&Currency> {
        self.currencies.values().next()
    }

    /// PNG flag URL, or `None` when the API sent none.
    pub fn flag_image_url(&self) -> Option<&str> {
        Some(self.flags.png.as_str()).filter(|url| !url.is_empty())
    }
}

/// Decodes a `/name/{term}` response body.
///
/// The body must be a JSON array; anything else (including the API's
/// `{"status": 404, ...}` error object) is a whole-payload failure.
pub fn decode_countries(body: &[u8]) -> Result<Vec<CountryRecord>, serde_json::Error> {
    serde_json::from_slice(body)
}
