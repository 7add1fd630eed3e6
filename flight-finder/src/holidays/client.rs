//! Public-holiday API client.
//!
//! Backed by the Nager.Date project, which serves national holiday
//! calendars per country and year without authentication.

use serde::Deserialize;

use super::error::HolidayError;

/// Default base URL for the Nager.Date API.
const DEFAULT_BASE_URL: &str = "https://date.nager.at";

/// Minimal DTO for a public holiday - only the date matters for the
/// calendar; the names are kept for log context.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicHolidayDto {
    pub date: String,
    pub local_name: Option<String>,
    pub name: Option<String>,
}

/// Configuration for the holiday API client.
#[derive(Debug, Clone)]
pub struct HolidayClientConfig {
    /// ISO 3166-1 alpha-2 country code, e.g. "KR"
    pub country: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl HolidayClientConfig {
    /// Create a new config for the given country code.
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Client for the public-holiday API.
#[derive(Debug, Clone)]
pub struct HolidayClient {
    http: reqwest::Client,
    base_url: String,
    country: String,
}

impl HolidayClient {
    /// Create a new holiday API client.
    pub fn new(config: HolidayClientConfig) -> Result<Self, HolidayError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            country: config.country,
        })
    }

    /// The country code this client queries.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Fetch all public holidays for one year.
    pub async fn fetch_year(&self, year: i32) -> Result<Vec<PublicHolidayDto>, HolidayError> {
        let url = format!(
            "{}/api/v3/PublicHolidays/{}/{}",
            self.base_url, year, self.country
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HolidayError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let holidays: Vec<PublicHolidayDto> =
            serde_json::from_str(&body).map_err(|e| HolidayError::Json {
                message: e.to_string(),
            })?;

        Ok(holidays)
    }
}
