//! Conversion from Naver DTOs to domain itineraries.
//!
//! This module handles the transformation of raw recommendation records
//! into validated domain types, with strict date parsing and per-record
//! error tolerance.

use chrono::NaiveDate;
use tracing::warn;

use crate::domain::Itinerary;

use super::types::{IntOrString, RawRecommendation};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Date string is not an 8-digit YYYYMMDD calendar date
    #[error("invalid date: {0:?}")]
    InvalidDate(String),

    /// Numeric field held something other than a non-negative integer
    #[error("invalid number in field {0}")]
    InvalidNumber(&'static str),

    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Dates are internally inconsistent
    #[error("invalid trip: {0}")]
    InvalidTrip(&'static str),

    /// Record is not a JSON object of the expected shape
    #[error("malformed record: {0}")]
    Malformed(String),
}

/// Result of converting a batch of raw records.
#[derive(Debug, Clone)]
pub struct ConvertedBatch {
    /// Well-formed itineraries, in source order.
    pub itineraries: Vec<Itinerary>,

    /// Count of records dropped as malformed.
    pub skipped: usize,
}

/// Parse a strict 8-digit `YYYYMMDD` date.
///
/// Exactly eight ASCII digits, validated as a real calendar date.
/// chrono's `%Y%m%d` accepts variable-width years and leading signs, so
/// the digit check is done by hand.
pub fn parse_flight_date(s: &str) -> Result<NaiveDate, ConversionError> {
    let bytes = s.as_bytes();

    if bytes.len() != 8 {
        return Err(ConversionError::InvalidDate(s.to_string()));
    }

    let (year, month, day) = match (
        parse_digits(&bytes[0..4]),
        parse_digits(&bytes[4..6]),
        parse_digits(&bytes[6..8]),
    ) {
        (Some(y), Some(m), Some(d)) => (y, m, d),
        _ => return Err(ConversionError::InvalidDate(s.to_string())),
    };

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| ConversionError::InvalidDate(s.to_string()))
}

/// Parse a run of ASCII digits as a number. Returns `None` on any
/// non-digit byte.
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    let mut value: u32 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u32::from(b - b'0');
    }
    Some(value)
}

/// Convert one raw JSON record into a domain itinerary.
pub fn convert_recommendation(value: &serde_json::Value) -> Result<Itinerary, ConversionError> {
    let raw: RawRecommendation = serde_json::from_value(value.clone())
        .map_err(|e| ConversionError::Malformed(e.to_string()))?;

    let departure = raw
        .sdate1
        .as_deref()
        .ok_or(ConversionError::MissingField("sdate1"))
        .and_then(parse_flight_date)?;
    let ret = raw
        .sdate2
        .as_deref()
        .ok_or(ConversionError::MissingField("sdate2"))
        .and_then(parse_flight_date)?;

    let trip_length = required_u32(raw.round_trip_time.as_ref(), "roundTripTime")?;
    let price = required_u32(raw.price.as_ref(), "price")?;
    let stops = required_u32(raw.stops.as_ref(), "stops")?;

    let airline = raw.airline.ok_or(ConversionError::MissingField("airline"))?;

    Itinerary::new(departure, ret, trip_length, price, airline, stops)
        .map_err(|_| ConversionError::InvalidTrip("return date is before departure"))
}

/// Convert a batch of raw records, dropping malformed ones.
///
/// A single bad record must not abort the query: failures are logged,
/// counted and skipped, and conversion continues with the next record.
/// Source order is preserved.
pub fn convert_recommendations(values: &[serde_json::Value]) -> ConvertedBatch {
    let mut itineraries = Vec::with_capacity(values.len());
    let mut skipped = 0;

    for (idx, value) in values.iter().enumerate() {
        match convert_recommendation(value) {
            Ok(itinerary) => itineraries.push(itinerary),
            Err(e) => {
                warn!(record = idx, error = %e, "skipping malformed recommendation");
                skipped += 1;
            }
        }
    }

    ConvertedBatch {
        itineraries,
        skipped,
    }
}

fn required_u32(
    value: Option<&IntOrString>,
    field: &'static str,
) -> Result<u32, ConversionError> {
    value
        .ok_or(ConversionError::MissingField(field))?
        .as_u32()
        .ok_or(ConversionError::InvalidNumber(field))
}
