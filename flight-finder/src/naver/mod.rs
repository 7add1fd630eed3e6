//! Naver Flights recommendation client.
//!
//! This module provides an HTTP client for the GraphQL endpoint behind
//! the flight.naver.com fare calendar, which recommends round trips of a
//! fixed length within fare and duration windows.
//!
//! Key characteristics of the API:
//! - It is a browser-facing endpoint, so requests must carry browser-like
//!   headers (referer, user agent) or be rejected by bot protection
//! - Flight dates are "YYYYMMDD" strings
//! - Numeric fields arrive as either JSON numbers or JSON strings
//!   depending on which backend served the request, and individual
//!   records can be malformed while the rest of the batch is fine

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{NaverClient, NaverConfig};
pub use convert::{
    ConversionError, ConvertedBatch, convert_recommendation, convert_recommendations,
    parse_flight_date,
};
pub use error::NaverError;
pub use mock::MockNaverClient;
pub use types::{IntOrString, RawRecommendation, RecommendResponse};
