//! Presentation formatting for search results.
//!
//! Pure string builders, no I/O. Output is Korean, matching the audience
//! of the flight search frontend, and deterministic for identical inputs.

use chrono::{Datelike, NaiveDate};

use crate::domain::{FlightQuery, IataCode, Itinerary, airline_display_name};

/// Weekday initials in Korean, Monday first.
const WEEKDAYS_KR: [char; 7] = ['월', '화', '수', '목', '금', '토', '일'];

/// Warning line shown above search results.
pub const FARE_DISCLAIMER: &str = "※주의 : 실제 요금과 다를 수 있습니다";

/// Flight search frontend, target of the booking deep links.
const DEEP_LINK_BASE: &str = "https://flight.naver.com/flights/international";

/// One-line summary of an itinerary.
///
/// The vacation clause appears only when a positive cost was computed;
/// a zero-cost or uncosted trip reads the same either way.
pub fn describe(itinerary: &Itinerary) -> String {
    let vacation = match itinerary.vacation_days_required() {
        Some(days) if days > 0 => format!("휴가사용: {days}일, "),
        _ => String::new(),
    };

    format!(
        "출발: {}, 복귀: {}, 일정: {}일, {}요금: {}원, 항공사: {}, 경유횟수: {}",
        format_date(itinerary.departure_date),
        format_date(itinerary.return_date),
        itinerary.trip_length_days,
        vacation,
        format_thousands(itinerary.price),
        airline_display_name(&itinerary.airline),
        itinerary.stops,
    )
}

/// Booking link for an itinerary on the flight search frontend.
///
/// Always books one adult in economy.
pub fn deep_link(itinerary: &Itinerary, origin: IataCode, destination: IataCode) -> String {
    format!(
        "{DEEP_LINK_BASE}/{}-{}-{}/{}-{}-{}?adult=1&fareType=Y",
        origin,
        destination,
        itinerary.departure_date.format("%Y%m%d"),
        destination,
        origin,
        itinerary.return_date.format("%Y%m%d"),
    )
}

/// Multi-line echo of the search constraints.
pub fn describe_query(query: &FlightQuery) -> String {
    [
        format!("출발지: {}", query.origin.label()),
        format!("도착지: {}", query.destination.label()),
        format!("최대 요금: {}원", format_thousands(query.max_fare)),
        format!("최대 비행시간: {}시간", query.max_duration_hours),
        format!("여행 기간: {}일", query.trip_length_days),
        format!("최대 사용 휴가 일수: {}일", query.vacation_limit_days),
    ]
    .join("\n")
}

/// "2025/08/11(월)" style date with its Korean weekday initial.
fn format_date(date: NaiveDate) -> String {
    format!("{}({})", date.format("%Y/%m/%d"), weekday_kr(date))
}

fn weekday_kr(date: NaiveDate) -> char {
    WEEKDAYS_KR[date.weekday().num_days_from_monday() as usize]
}

/// Group digits in threes: 1234567 -> "1,234,567".
fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Removing the separators restores the plain decimal digits
        #[test]
        fn thousands_strip_roundtrip(n in 0u32..) {
            let formatted = format_thousands(n);
            prop_assert_eq!(formatted.replace(',', ""), n.to_string());
        }

        /// Groups after the first always hold exactly three digits
        #[test]
        fn thousands_group_shape(n in 0u32..) {
            let formatted = format_thousands(n);
            let groups: Vec<&str> = formatted.split(',').collect();
            prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
            for group in &groups[1..] {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}
