use chrono::Datelike;
use tracing_subscriber::EnvFilter;

use flight_finder::domain::{FlightQuery, IataCode};
use flight_finder::holidays::{HolidayCalendar, HolidayClient, HolidayClientConfig};
use flight_finder::naver::{
    MockNaverClient, NaverClient, NaverConfig, NaverError, convert_recommendations,
};
use flight_finder::planner::filter_candidates;
use flight_finder::report;

/// Country whose public holidays drive the vacation accounting.
const HOLIDAY_COUNTRY: &str = "KR";

/// Search data source, chosen at startup.
enum SearchBackend {
    Live(NaverClient),
    Mock(MockNaverClient),
}

impl SearchBackend {
    async fn search(&self, query: &FlightQuery) -> Result<Vec<serde_json::Value>, NaverError> {
        match self {
            SearchBackend::Live(client) => client.search(query).await,
            SearchBackend::Mock(client) => client.search(query).await,
        }
    }
}

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout is reserved for the report itself.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Read constraints from environment, falling back to the defaults
    let origin = env_airport("FLIGHT_ORIGIN", "ICN");
    let destination = env_airport("FLIGHT_DESTINATION", "CTS");
    let max_fare = env_u32("FLIGHT_MAX_FARE", 250_000);
    let max_duration_hours = env_u32("FLIGHT_MAX_DURATION_HOURS", 24);
    let trip_length_days = env_u32("FLIGHT_TRIP_DAYS", 3);
    let vacation_limit = env_u32_opt("FLIGHT_VACATION_DAYS");

    let query = match FlightQuery::new(
        origin,
        destination,
        max_fare,
        max_duration_hours,
        trip_length_days,
        vacation_limit,
    ) {
        Ok(query) => query,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    println!("항공권 조회 프로그램");
    println!("{}", report::describe_query(&query));
    println!();
    println!("{}", report::FARE_DISCLAIMER);
    println!();

    // Seed holidays for every year the searched trips can touch.
    let year = chrono::Local::now().year();
    let calendar = match HolidayClient::new(HolidayClientConfig::new(HOLIDAY_COUNTRY)) {
        Ok(client) => HolidayCalendar::fetch(&client, &[year, year + 1]).await,
        Err(e) => {
            tracing::warn!(error = %e, "holiday client unavailable, using weekends only");
            HolidayCalendar::empty()
        }
    };

    let backend = match std::env::var("NAVER_MOCK_DIR") {
        Ok(dir) => match MockNaverClient::new(&dir) {
            Ok(mock) => SearchBackend::Mock(mock),
            Err(e) => {
                eprintln!("error: failed to load mock data from {dir}: {e}");
                std::process::exit(2);
            }
        },
        Err(_) => {
            let client =
                NaverClient::new(NaverConfig::new()).expect("Failed to create Naver client");
            SearchBackend::Live(client)
        }
    };

    let candidates = match backend.search(&query).await {
        Ok(candidates) => candidates,
        Err(e) => {
            eprintln!("항공권 조회 실패: {e}");
            std::process::exit(1);
        }
    };

    let batch = convert_recommendations(&candidates);
    let outcome = filter_candidates(batch.itineraries, &query, &calendar);
    tracing::info!(
        accepted = outcome.accepted.len(),
        rejected = outcome.rejected,
        skipped = batch.skipped,
        "search complete"
    );

    if outcome.accepted.is_empty() {
        println!("조건에 맞는 항공권이 없습니다.");
        return;
    }

    for itinerary in &outcome.accepted {
        println!("{}", report::describe(itinerary));
        println!(
            "\t{}",
            report::deep_link(itinerary, query.origin, query.destination)
        );
    }
}

/// Read an airport code from the environment, with a default.
///
/// An unset or empty variable falls back to the default; a malformed
/// value is a configuration error and aborts loudly.
fn env_airport(name: &str, default: &str) -> IataCode {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => match IataCode::parse_normalized(value.trim()) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("error: {name}={value}: {e}");
                std::process::exit(2);
            }
        },
        _ => IataCode::parse(default).expect("default airport code is valid"),
    }
}

/// Read a non-negative integer from the environment, with a default.
fn env_u32(name: &str, default: u32) -> u32 {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => match value.trim().parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                eprintln!("error: {name}={value}: expected a non-negative integer");
                std::process::exit(2);
            }
        },
        _ => default,
    }
}

/// Read an optional non-negative integer from the environment.
fn env_u32_opt(name: &str) -> Option<u32> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => match value.trim().parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                eprintln!("error: {name}={value}: expected a non-negative integer");
                std::process::exit(2);
            }
        },
        _ => None,
    }
}
