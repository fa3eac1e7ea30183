//! Plain-text rendering of query state.
//!
//! Shows the first match in detail, then the full list, then the error
//! line if one is set.

use crate::api::CountryRecord;
use crate::core::QueryState;

const EMPTY_LIST: &str = "Country list is empty.";

/// Labelled detail card for one country.
pub fn render_detail(country: &CountryRecord) -> String {
    let rows = [
        ("Flag of", country.flag.clone()),
        ("Country:", country.name.common.clone()),
        ("Official Name:", country.name.official.clone()),
        ("Capital:", country.primary_capital().unwrap_or("-").to_string()),
        (
            "Currency:",
            country.primary_currency().map_or("-", |c| c.name.as_str()).to_string(),
        ),
        ("Borders:", country.borders.join(", ")),
        ("Region:", country.region.clone()),
        ("Population:", country.population.to_string()),
        ("Area:", country.area.to_string()),
    ];

    rows.iter()
        .map(|(label, value)| format!("{label} {value}\n"))
        .collect()
}

/// One line per country: flag, common name and capital.
pub fn render_list(countries: &[CountryRecord]) -> String {
    if countries.is_empty() {
        return format!("{EMPTY_LIST}\n");
    }

    countries
        .iter()
        .map(|c| match c.primary_capital() {
            Some(capital) => format!("{} {} ({})\n", c.flag, c.name.common, capital),
            None => format!("{} {}\n", c.flag, c.name.common),
        })
        .collect()
}

pub fn render_state(state: &QueryState) -> String {
    let mut out = match state.first_match() {
        Some(country) => render_detail(country),
        None => render_detail(&placeholder()),
    };
    out.push('\n');
    out.push_str(&render_list(&state.results));
    if state.has_error() {
        out.push('\n');
        out.push_str(&state.error_message);
        out.push('\n');
    }
    out
}

/// Shown in place of the first match before anything has loaded.
fn placeholder() -> CountryRecord {
    let mut record = CountryRecord::default();
    record.name.common = "Loading...".to_string();
    record.name.official = "Loading...".to_string();
    record.region = "Loading...".to_string();
    record
}
