use crate::domain::model::GeographicRecord;
use crate::utils::error::{MapError, Result};
use serde_json::Value;

/// Converts a raw SPARQL JSON body into geographic records.
///
/// A body without a `results.bindings` array is a structural failure and
/// errors out. Individual bindings that fail to yield two finite, in-range
/// coordinate components are skipped; the rest of the response is still
/// processed and output order follows binding order.
pub fn parse(body: &Value) -> Result<Vec<GeographicRecord>> {
    let bindings = body
        .get("results")
        .and_then(|r| r.get("bindings"))
        .and_then(|b| b.as_array())
        .ok_or_else(|| MapError::MalformedResponse {
            message: "response body has no results.bindings array".to_string(),
        })?;

    let mut records = Vec::with_capacity(bindings.len());
    let mut dropped = 0usize;

    for binding in bindings {
        match parse_binding(binding) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(
            "Dropped {} of {} bindings with missing or unusable coordinates",
            dropped,
            bindings.len()
        );
    }

    Ok(records)
}

fn parse_binding(binding: &Value) -> Option<GeographicRecord> {
    let person_name = field_value(binding, "personLabel")?;
    let birth_place_name = field_value(binding, "birthPlaceLabel")?;
    let coord = field_value(binding, "coord")?;

    let (longitude, latitude) = parse_wkt_point(coord)?;

    Some(GeographicRecord {
        person_name: person_name.to_string(),
        birth_place_name: birth_place_name.to_string(),
        latitude,
        longitude,
    })
}

fn field_value<'a>(binding: &'a Value, name: &str) -> Option<&'a str> {
    binding.get(name)?.get("value")?.as_str()
}

/// Parses `Point(<lon> <lat>)`. WKT puts longitude first; callers get
/// (longitude, latitude) back in that order.
fn parse_wkt_point(text: &str) -> Option<(f64, f64)> {
    let inner = text.strip_prefix("Point(")?.strip_suffix(')')?;

    let mut tokens = inner.split(' ');
    let lon_token = tokens.next()?;
    let lat_token = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }

    let longitude: f64 = lon_token.parse().ok()?;
    let latitude: f64 = lat_token.parse().ok()?;

    if !GeographicRecord::in_bounds(latitude, longitude) {
        return None;
    }

    Some((longitude, latitude))
}
