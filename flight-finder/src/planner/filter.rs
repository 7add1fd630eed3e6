//! Itinerary filtering against the vacation budget.

use tracing::debug;

use crate::domain::{FlightQuery, Itinerary};

use super::vacation::{NonWorkingDays, vacation_days_required};

/// Outcome of one filtering pass.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// Itineraries within the vacation budget, in arrival order.
    pub accepted: Vec<Itinerary>,

    /// Number of itineraries rejected for exceeding the budget.
    pub rejected: usize,
}

/// Filter candidates against the query's vacation budget.
///
/// A budget covering the whole requested trip length accepts every
/// candidate without consulting the calendar, and those records keep
/// their vacation cost unset. Otherwise each candidate's cost is
/// computed and compared against the budget, and accepted records carry
/// the computed cost. Arrival order is preserved either way.
pub fn filter_candidates<C: NonWorkingDays>(
    candidates: Vec<Itinerary>,
    query: &FlightQuery,
    calendar: &C,
) -> FilterOutcome {
    if query.vacation_limit_days >= query.trip_length_days {
        return FilterOutcome {
            accepted: candidates,
            rejected: 0,
        };
    }

    let mut accepted = Vec::new();
    let mut rejected = 0;

    for itinerary in candidates {
        let required =
            vacation_days_required(calendar, itinerary.departure_date, itinerary.return_date);

        if required > query.vacation_limit_days {
            debug!(
                departure = %itinerary.departure_date,
                required,
                limit = query.vacation_limit_days,
                "itinerary exceeds vacation budget"
            );
            rejected += 1;
            continue;
        }

        accepted.push(itinerary.with_vacation_days(required));
    }

    FilterOutcome { accepted, rejected }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IataCode;
    use crate::holidays::HolidayCalendar;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn itinerary(dep: NaiveDate, ret: NaiveDate, price: u32) -> Itinerary {
        Itinerary::new(dep, ret, 3, price, "KE", 0).unwrap()
    }

    fn query(trip_length: u32, vacation_limit: u32) -> FlightQuery {
        FlightQuery::new(
            IataCode::parse("ICN").unwrap(),
            IataCode::parse("CTS").unwrap(),
            250_000,
            24,
            trip_length,
            Some(vacation_limit),
        )
        .unwrap()
    }

    /// Calendar spy that records how many lookups were made.
    struct CountingCalendar {
        lookups: Mutex<usize>,
    }

    impl CountingCalendar {
        fn new() -> Self {
            Self {
                lookups: Mutex::new(0),
            }
        }

        fn lookup_count(&self) -> usize {
            *self.lookups.lock().unwrap()
        }
    }

    impl NonWorkingDays for CountingCalendar {
        fn is_non_working_day(&self, _date: NaiveDate) -> bool {
            *self.lookups.lock().unwrap() += 1;
            false
        }
    }

    #[test]
    fn rejects_trip_over_budget() {
        // Monday to Wednesday needs 3 days of leave; only 1 allowed.
        let candidates = vec![itinerary(date(2025, 8, 11), date(2025, 8, 13), 159_000)];
        let calendar = HolidayCalendar::empty();

        let outcome = filter_candidates(candidates, &query(3, 1), &calendar);

        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.rejected, 1);
    }

    #[test]
    fn accepts_free_trip_on_zero_budget() {
        // Friday holiday through Sunday needs no leave at all.
        let candidates = vec![itinerary(date(2025, 8, 15), date(2025, 8, 17), 189_000)];
        let calendar = HolidayCalendar::from_dates([date(2025, 8, 15)]);

        let outcome = filter_candidates(candidates, &query(3, 0), &calendar);

        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.rejected, 0);
        assert_eq!(outcome.accepted[0].vacation_days_required(), Some(0));
    }

    #[test]
    fn budget_covering_trip_skips_the_calendar() {
        let candidates = vec![
            itinerary(date(2025, 8, 11), date(2025, 8, 13), 159_000),
            itinerary(date(2025, 8, 18), date(2025, 8, 20), 121_500),
        ];
        let calendar = CountingCalendar::new();

        let outcome = filter_candidates(candidates, &query(3, 3), &calendar);

        assert_eq!(outcome.accepted.len(), 2);
        assert_eq!(outcome.rejected, 0);
        assert_eq!(calendar.lookup_count(), 0);
        for trip in &outcome.accepted {
            assert_eq!(trip.vacation_days_required(), None);
        }
    }

    #[test]
    fn budget_above_trip_also_skips_the_calendar() {
        let candidates = vec![itinerary(date(2025, 8, 11), date(2025, 8, 13), 159_000)];
        let calendar = CountingCalendar::new();

        let outcome = filter_candidates(candidates, &query(3, 5), &calendar);

        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(calendar.lookup_count(), 0);
    }

    #[test]
    fn tight_budget_consults_the_calendar() {
        let candidates = vec![itinerary(date(2025, 8, 11), date(2025, 8, 13), 159_000)];
        let calendar = CountingCalendar::new();

        let outcome = filter_candidates(candidates, &query(3, 2), &calendar);

        // The spy says every day works, so 3 required > 2 allowed.
        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.rejected, 1);
        assert_eq!(calendar.lookup_count(), 3);
    }

    #[test]
    fn accepted_records_keep_computed_cost() {
        // Friday departure: Fri + Mon work, Sat + Sun free.
        let candidates = vec![itinerary(date(2025, 8, 8), date(2025, 8, 11), 142_000)];
        let calendar = HolidayCalendar::empty();

        let outcome = filter_candidates(candidates, &query(4, 2), &calendar);

        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.accepted[0].vacation_days_required(), Some(2));
    }

    #[test]
    fn mixed_batch_preserves_arrival_order() {
        let candidates = vec![
            // Fri-Sun: 1 working day.
            itinerary(date(2025, 8, 8), date(2025, 8, 10), 101_000),
            // Mon-Wed: 3 working days, over budget.
            itinerary(date(2025, 8, 11), date(2025, 8, 13), 102_000),
            // Sat-Mon: 1 working day.
            itinerary(date(2025, 8, 16), date(2025, 8, 18), 103_000),
        ];
        let calendar = HolidayCalendar::empty();

        let outcome = filter_candidates(candidates, &query(3, 1), &calendar);

        assert_eq!(outcome.rejected, 1);
        let prices: Vec<u32> = outcome.accepted.iter().map(|i| i.price).collect();
        assert_eq!(prices, vec![101_000, 103_000]);
    }

    #[test]
    fn empty_input_yields_empty_outcome() {
        let calendar = HolidayCalendar::empty();
        let outcome = filter_candidates(Vec::new(), &query(3, 1), &calendar);

        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.rejected, 0);
    }
}
