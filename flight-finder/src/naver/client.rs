//! Naver flight API HTTP client.
//!
//! Posts the `flight_recommend_by_city` GraphQL operation and unwraps
//! the response envelope. The endpoint is the same one the
//! flight.naver.com frontend talks to, so requests carry ordinary
//! browser headers instead of credentials.

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, REFERER, USER_AGENT};

use crate::domain::FlightQuery;

use super::error::NaverError;
use super::types::{
    RECOMMEND_OPERATION, RECOMMEND_QUERY, RecommendRequest, RecommendResponse, RecommendVariables,
};

/// Default base URL for the Naver flight API.
const DEFAULT_BASE_URL: &str = "https://airline-api.naver.com";

/// Referer the endpoint expects; requests without it are rejected.
const FRONTEND_REFERER: &str = "https://flight.naver.com/";

/// Browser user agent presented to the endpoint.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36";

/// Lower bound of the fare window, KRW. Fixed by the upstream search form.
const FARE_FLOOR: u32 = 10_000;

/// Lower bound of the duration window, hours. Fixed by the upstream
/// search form.
const DURATION_FLOOR_HOURS: u32 = 1;

/// Configuration for the Naver client.
#[derive(Debug, Clone)]
pub struct NaverConfig {
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NaverConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for NaverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Naver flight API client.
///
/// One `search` call per user query; the endpoint does all fare,
/// duration and trip-length windowing server-side.
#[derive(Debug, Clone)]
pub struct NaverClient {
    http: reqwest::Client,
    base_url: String,
}

impl NaverClient {
    /// Create a new client with the given configuration.
    pub fn new(config: NaverConfig) -> Result<Self, NaverError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("ko,en;q=0.9,en-US;q=0.8"),
        );
        headers.insert(REFERER, HeaderValue::from_static(FRONTEND_REFERER));
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch recommendation candidates for a query.
    ///
    /// Returns raw records in the order served. Decoding individual
    /// records is left to [`super::convert`], so one bad record cannot
    /// fail the whole batch.
    pub async fn search(&self, query: &FlightQuery) -> Result<Vec<serde_json::Value>, NaverError> {
        let url = format!("{}/graphql", self.base_url);

        let request = RecommendRequest {
            operation_name: RECOMMEND_OPERATION,
            variables: RecommendVariables {
                scity: query.origin.as_str().to_string(),
                ecity: query.destination.as_str().to_string(),
                round_trip_time: format!("{0},{0}", query.trip_length_days),
                duration: format!("{},{}", DURATION_FLOOR_HOURS, query.max_duration_hours),
                fare: format!("{},{}", FARE_FLOOR, query.max_fare),
            },
            query: RECOMMEND_QUERY,
        };

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(NaverError::RateLimited);
        }

        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(NaverError::Blocked);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NaverError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let envelope: RecommendResponse =
            serde_json::from_str(&body).map_err(|e| NaverError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        extract_candidates(envelope)
    }
}

/// Unwrap the GraphQL envelope into the candidate list.
///
/// GraphQL errors and a missing `data` object are query-level failures.
/// A null `recommendByCity` inside `data` is not: the field is nullable
/// and a null there just means the search matched nothing.
pub(crate) fn extract_candidates(
    envelope: RecommendResponse,
) -> Result<Vec<serde_json::Value>, NaverError> {
    if let Some(errors) = &envelope.errors {
        if !errors.is_empty() {
            let mut message = errors
                .iter()
                .filter_map(|e| e.message.as_deref())
                .collect::<Vec<_>>()
                .join("; ");
            if message.is_empty() {
                message = "unspecified error".to_string();
            }
            return Err(NaverError::Graphql { message });
        }
    }

    let data = envelope.data.ok_or_else(|| NaverError::Json {
        message: "response carried no data object".to_string(),
        body: None,
    })?;

    Ok(data.recommend_by_city.unwrap_or_default())
}
