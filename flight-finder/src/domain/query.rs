//! Search constraints.

use super::IataCode;

/// Error returned when query constraints are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid query: {reason}")]
pub struct InvalidQuery {
    reason: &'static str,
}

/// Immutable constraint set for one flight search.
///
/// Validation happens at construction, before any network round-trip is
/// spent on a query that could never succeed.
#[derive(Debug, Clone)]
pub struct FlightQuery {
    /// Departure airport.
    pub origin: IataCode,

    /// Destination airport.
    pub destination: IataCode,

    /// Upper bound on the round-trip fare, KRW.
    pub max_fare: u32,

    /// Upper bound on in-flight duration, hours.
    pub max_duration_hours: u32,

    /// Exact round-trip length requested from the search, days.
    pub trip_length_days: u32,

    /// Most personal vacation days the traveler will spend on the trip.
    pub vacation_limit_days: u32,
}

impl FlightQuery {
    /// Build a query, validating the bounds.
    ///
    /// `vacation_limit` defaults to `trip_length_days` when `None`: a
    /// traveler who does not state a limit is assumed willing to take
    /// leave for the whole trip.
    pub fn new(
        origin: IataCode,
        destination: IataCode,
        max_fare: u32,
        max_duration_hours: u32,
        trip_length_days: u32,
        vacation_limit: Option<u32>,
    ) -> Result<Self, InvalidQuery> {
        if max_fare == 0 {
            return Err(InvalidQuery {
                reason: "maximum fare must be positive",
            });
        }

        if max_duration_hours == 0 {
            return Err(InvalidQuery {
                reason: "maximum flight duration must be positive",
            });
        }

        if trip_length_days == 0 {
            return Err(InvalidQuery {
                reason: "trip length must be positive",
            });
        }

        Ok(Self {
            origin,
            destination,
            max_fare,
            max_duration_hours,
            trip_length_days,
            vacation_limit_days: vacation_limit.unwrap_or(trip_length_days),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icn() -> IataCode {
        IataCode::parse("ICN").unwrap()
    }

    fn cts() -> IataCode {
        IataCode::parse("CTS").unwrap()
    }

    #[test]
    fn valid_query() {
        let query = FlightQuery::new(icn(), cts(), 250_000, 24, 3, Some(1)).unwrap();
        assert_eq!(query.max_fare, 250_000);
        assert_eq!(query.trip_length_days, 3);
        assert_eq!(query.vacation_limit_days, 1);
    }

    #[test]
    fn vacation_limit_defaults_to_trip_length() {
        let query = FlightQuery::new(icn(), cts(), 250_000, 24, 3, None).unwrap();
        assert_eq!(query.vacation_limit_days, 3);
    }

    #[test]
    fn explicit_zero_vacation_limit_is_kept() {
        let query = FlightQuery::new(icn(), cts(), 250_000, 24, 3, Some(0)).unwrap();
        assert_eq!(query.vacation_limit_days, 0);
    }

    #[test]
    fn reject_zero_fare() {
        assert!(FlightQuery::new(icn(), cts(), 0, 24, 3, None).is_err());
    }

    #[test]
    fn reject_zero_duration() {
        assert!(FlightQuery::new(icn(), cts(), 250_000, 0, 3, None).is_err());
    }

    #[test]
    fn reject_zero_trip_length() {
        assert!(FlightQuery::new(icn(), cts(), 250_000, 24, 0, None).is_err());
    }
}
