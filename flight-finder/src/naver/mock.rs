//! Mock Naver client for testing without network access.
//!
//! Loads canned search responses from JSON files and serves them as if
//! they were live API responses. Fixture files hold the full GraphQL
//! envelope, so a captured production response can be dropped in as-is.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::{FlightQuery, IataCode};

use super::client::extract_candidates;
use super::error::NaverError;
use super::types::RecommendResponse;

/// Mock Naver client that serves data from JSON files.
///
/// Useful for development and testing without hitting the real endpoint.
#[derive(Debug, Clone)]
pub struct MockNaverClient {
    /// Pre-loaded candidate lists, keyed by (origin, destination).
    routes: HashMap<(IataCode, IataCode), Vec<serde_json::Value>>,
}

impl MockNaverClient {
    /// Create a new mock client by loading JSON files from a directory.
    ///
    /// Expects files named `{ORIGIN}-{DEST}.json` (e.g. `ICN-CTS.json`),
    /// each holding a response envelope.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, NaverError> {
        let data_dir = data_dir.as_ref();
        let mut routes = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| NaverError::ApiError {
            status: 0,
            message: format!("Failed to read mock data directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| NaverError::ApiError {
                status: 0,
                message: format!("Failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            // Extract the route from the filename ("ICN-CTS.json" -> ICN, CTS)
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| NaverError::ApiError {
                    status: 0,
                    message: format!("Invalid filename: {:?}", path),
                })?;

            let route = parse_route(stem).ok_or_else(|| NaverError::ApiError {
                status: 0,
                message: format!("Invalid route in filename: {}", stem),
            })?;

            let json = std::fs::read_to_string(&path).map_err(|e| NaverError::ApiError {
                status: 0,
                message: format!("Failed to read {:?}: {}", path, e),
            })?;

            let envelope: RecommendResponse =
                serde_json::from_str(&json).map_err(|e| NaverError::ApiError {
                    status: 0,
                    message: format!("Failed to parse {:?}: {}", path, e),
                })?;

            routes.insert(route, extract_candidates(envelope)?);
        }

        if routes.is_empty() {
            return Err(NaverError::ApiError {
                status: 0,
                message: format!("No mock response files found in {:?}", data_dir),
            });
        }

        Ok(Self { routes })
    }

    /// Fetch recommendation candidates for a query.
    ///
    /// Mimics the real [`super::NaverClient::search`] interface. The
    /// constraint windows are ignored - mock data is static.
    pub async fn search(&self, query: &FlightQuery) -> Result<Vec<serde_json::Value>, NaverError> {
        self.routes
            .get(&(query.origin, query.destination))
            .cloned()
            .ok_or_else(|| NaverError::ApiError {
                status: 404,
                message: format!(
                    "No mock data for route {}-{}. Available: {:?}",
                    query.origin,
                    query.destination,
                    self.available_routes()
                ),
            })
    }

    /// Routes available in the mock data, as "ICN-CTS" strings.
    pub fn available_routes(&self) -> Vec<String> {
        let mut routes: Vec<String> = self
            .routes
            .keys()
            .map(|(origin, dest)| format!("{origin}-{dest}"))
            .collect();
        routes.sort();
        routes
    }
}

/// Parse an "ICN-CTS" file stem into a route key.
fn parse_route(stem: &str) -> Option<(IataCode, IataCode)> {
    let (origin, dest) = stem.split_once('-')?;
    Some((IataCode::parse(origin).ok()?, IataCode::parse(dest).ok()?))
}
