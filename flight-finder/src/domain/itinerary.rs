//! Round-trip itinerary record.

use chrono::NaiveDate;

/// Error returned when itinerary fields are inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid itinerary: {reason}")]
pub struct InvalidItinerary {
    reason: &'static str,
}

/// One candidate round trip returned by the flight search.
///
/// Built once per raw search record and never mutated afterwards, except
/// for the one-time population of the vacation cost by the filter.
///
/// # Examples
///
/// ```
/// use flight_finder::domain::Itinerary;
/// use chrono::NaiveDate;
///
/// let dep = NaiveDate::from_ymd_opt(2025, 8, 11).unwrap();
/// let ret = NaiveDate::from_ymd_opt(2025, 8, 13).unwrap();
/// let trip = Itinerary::new(dep, ret, 3, 159_000, "KE", 0).unwrap();
///
/// assert_eq!(trip.span_days(), 3);
/// assert_eq!(trip.vacation_days_required(), None);
///
/// // A return date before departure is rejected
/// assert!(Itinerary::new(ret, dep, 3, 159_000, "KE", 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    /// Outbound departure date.
    pub departure_date: NaiveDate,

    /// Return departure date.
    pub return_date: NaiveDate,

    /// Round-trip length in days as reported by the search source.
    ///
    /// Authoritative metadata from upstream; not recomputed from the dates.
    pub trip_length_days: u32,

    /// Round-trip fare in KRW.
    pub price: u32,

    /// Raw carrier code (e.g. "KE", "7C"). Resolved to a display name at
    /// render time; unknown codes pass through verbatim.
    pub airline: String,

    /// Number of stops each way.
    pub stops: u32,

    /// Working days the traveler must take off. `None` until the filter
    /// actually computes the cost; immutable once set.
    vacation_days_required: Option<u32>,
}

impl Itinerary {
    /// Build an itinerary, rejecting a return date before departure.
    ///
    /// The search window normally guarantees ordered dates, but the
    /// upstream occasionally serves garbage and one bad record must not
    /// poison downstream date arithmetic.
    pub fn new(
        departure_date: NaiveDate,
        return_date: NaiveDate,
        trip_length_days: u32,
        price: u32,
        airline: impl Into<String>,
        stops: u32,
    ) -> Result<Self, InvalidItinerary> {
        if return_date < departure_date {
            return Err(InvalidItinerary {
                reason: "return date is before departure",
            });
        }

        Ok(Self {
            departure_date,
            return_date,
            trip_length_days,
            price,
            airline: airline.into(),
            stops,
            vacation_days_required: None,
        })
    }

    /// Inclusive number of calendar days the trip spans.
    ///
    /// A same-day round trip spans 1 day.
    pub fn span_days(&self) -> u32 {
        let days = self
            .return_date
            .signed_duration_since(self.departure_date)
            .num_days();
        days as u32 + 1
    }

    /// Vacation days this trip consumes, if the filter computed them.
    pub fn vacation_days_required(&self) -> Option<u32> {
        self.vacation_days_required
    }

    /// Record the computed vacation cost.
    ///
    /// Called at most once, by the filter, right after the cost is known.
    pub fn with_vacation_days(mut self, days: u32) -> Self {
        self.vacation_days_required = Some(days);
        self
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    proptest! {
        /// Span always equals the date difference plus one
        #[test]
        fn span_matches_date_difference(start in 0i64..2000, len in 0i64..60) {
            let dep = base_date() + chrono::Duration::days(start);
            let ret = dep + chrono::Duration::days(len);
            let trip = Itinerary::new(dep, ret, len as u32, 100_000, "KE", 0).unwrap();
            prop_assert_eq!(trip.span_days() as i64, len + 1);
        }

        /// Construction fails exactly when the return precedes departure
        #[test]
        fn ordering_enforced(a in 0i64..2000, b in 0i64..2000) {
            let dep = base_date() + chrono::Duration::days(a);
            let ret = base_date() + chrono::Duration::days(b);
            let trip = Itinerary::new(dep, ret, 1, 100_000, "KE", 0);
            prop_assert_eq!(trip.is_ok(), ret >= dep);
        }
    }
}
