//! Naver flight API DTOs.
//!
//! These types map to the GraphQL request and response bodies of the
//! Naver flight recommendation endpoint. Response fields use `Option`
//! liberally and tolerate number-or-string values because the upstream is
//! not consistent about types across records.

use serde::{Deserialize, Serialize};

/// GraphQL operation name for the by-city recommendation query.
pub const RECOMMEND_OPERATION: &str = "flight_recommend_by_city";

/// GraphQL document sent with every recommendation request.
pub const RECOMMEND_QUERY: &str = "\
query flight_recommend_by_city($scity: String, $ecity: String, $duration: String, $stops: Int, $sdate: String, $continents: String, $roundTripTime: String, $fare: String, $themes: String) {
    recommendByCity(scity: $scity, ecity: $ecity, duration: $duration, stops: $stops, sdate: $sdate, continents: $continents, roundTripTime: $roundTripTime, fare: $fare, themes: $themes) {
        airline
        sdate1
        sdate2
        price
        stops
        roundTripTime
    }
}";

/// GraphQL request envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    /// Always [`RECOMMEND_OPERATION`].
    pub operation_name: &'static str,

    /// Query variables.
    pub variables: RecommendVariables,

    /// Always [`RECOMMEND_QUERY`].
    pub query: &'static str,
}

/// Variables for the recommendation query.
///
/// Window variables are encoded as `"lo,hi"` strings by the upstream
/// schema.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendVariables {
    /// Origin airport code.
    pub scity: String,

    /// Destination airport code.
    pub ecity: String,

    /// Round-trip length window in days, `"n,n"` for an exact length.
    pub round_trip_time: String,

    /// Flight duration window in hours.
    pub duration: String,

    /// Fare window in KRW.
    pub fare: String,
}

/// Top-level GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendResponse {
    /// Query payload; absent when the server reports only errors.
    pub data: Option<RecommendData>,

    /// GraphQL-level errors, if any.
    pub errors: Option<Vec<GraphqlError>>,
}

/// Payload of the recommendation query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendData {
    /// Candidate round trips in source order.
    ///
    /// Elements are kept as raw JSON so one malformed record cannot fail
    /// deserialization of the whole batch.
    pub recommend_by_city: Option<Vec<serde_json::Value>>,
}

/// One error entry from the GraphQL layer.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    /// Human-readable error message.
    pub message: Option<String>,
}

/// One recommendation record as served by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecommendation {
    /// Carrier code (e.g. "KE", "7C").
    pub airline: Option<String>,

    /// Outbound departure date, "YYYYMMDD".
    pub sdate1: Option<String>,

    /// Return departure date, "YYYYMMDD".
    pub sdate2: Option<String>,

    /// Round-trip fare in KRW.
    pub price: Option<IntOrString>,

    /// Number of stops each way.
    pub stops: Option<IntOrString>,

    /// Round-trip length in days.
    pub round_trip_time: Option<IntOrString>,
}

/// A JSON field that may arrive as a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    Str(String),
}

impl IntOrString {
    /// Interpret the value as a non-negative integer.
    ///
    /// Returns `None` for negative numbers and non-numeric strings.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            IntOrString::Int(n) => u32::try_from(*n).ok(),
            IntOrString::Str(s) => s.trim().parse().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_response_envelope() {
        let json = r#"{
            "data": {
                "recommendByCity": [
                    {
                        "airline": "KE",
                        "sdate1": "20250811",
                        "sdate2": "20250813",
                        "price": 159000,
                        "stops": 0,
                        "roundTripTime": 3
                    },
                    {
                        "airline": "7C",
                        "sdate1": "20250818",
                        "sdate2": "20250820",
                        "price": "121500",
                        "stops": "0",
                        "roundTripTime": "3"
                    }
                ]
            }
        }"#;

        let response: RecommendResponse = serde_json::from_str(json).unwrap();
        let data = response.data.unwrap();
        let records = data.recommend_by_city.unwrap();
        assert_eq!(records.len(), 2);

        let first: RawRecommendation = serde_json::from_value(records[0].clone()).unwrap();
        assert_eq!(first.airline.as_deref(), Some("KE"));
        assert_eq!(first.sdate1.as_deref(), Some("20250811"));
        assert_eq!(first.price, Some(IntOrString::Int(159_000)));

        let second: RawRecommendation = serde_json::from_value(records[1].clone()).unwrap();
        assert_eq!(second.price, Some(IntOrString::Str("121500".to_string())));
    }

    #[test]
    fn deserialize_error_envelope() {
        let json = r#"{
            "data": null,
            "errors": [
                {"message": "rate limit exceeded"}
            ]
        }"#;

        let response: RecommendResponse = serde_json::from_str(json).unwrap();
        assert!(response.data.is_none());
        let errors = response.errors.unwrap();
        assert_eq!(errors[0].message.as_deref(), Some("rate limit exceeded"));
    }

    #[test]
    fn deserialize_null_record_list() {
        let json = r#"{"data": {"recommendByCity": null}}"#;

        let response: RecommendResponse = serde_json::from_str(json).unwrap();
        assert!(response.data.unwrap().recommend_by_city.is_none());
    }

    #[test]
    fn serialize_request_uses_camel_case() {
        let request = RecommendRequest {
            operation_name: RECOMMEND_OPERATION,
            variables: RecommendVariables {
                scity: "ICN".to_string(),
                ecity: "CTS".to_string(),
                round_trip_time: "3,3".to_string(),
                duration: "1,24".to_string(),
                fare: "10000,250000".to_string(),
            },
            query: RECOMMEND_QUERY,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["operationName"], "flight_recommend_by_city");
        assert_eq!(value["variables"]["scity"], "ICN");
        assert_eq!(value["variables"]["roundTripTime"], "3,3");
        assert_eq!(value["variables"]["fare"], "10000,250000");
        assert!(value["query"].as_str().unwrap().contains("recommendByCity"));
    }

    #[test]
    fn int_or_string_as_u32() {
        assert_eq!(IntOrString::Int(42).as_u32(), Some(42));
        assert_eq!(IntOrString::Int(-1).as_u32(), None);
        assert_eq!(IntOrString::Str("159000".to_string()).as_u32(), Some(159_000));
        assert_eq!(IntOrString::Str(" 3 ".to_string()).as_u32(), Some(3));
        assert_eq!(IntOrString::Str("abc".to_string()).as_u32(), None);
        assert_eq!(IntOrString::Str("-5".to_string()).as_u32(), None);
    }
}
