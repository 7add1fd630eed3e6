//! Non-working-day calendar.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::{info, warn};

use super::client::{HolidayClient, PublicHolidayDto};

/// Wire format for holiday dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read-only calendar of non-working days.
///
/// Saturdays and Sundays are always non-working. Public holidays come
/// from the holiday API; a year whose fetch failed contributes no
/// holidays, so lookups in that year fall back to weekends only.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    holidays: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Build a calendar by fetching public holidays for the given years.
    ///
    /// Per-year failures are logged and skipped rather than propagated,
    /// so the calendar always constructs. Callers that span a year
    /// boundary should pass both years.
    pub async fn fetch(client: &HolidayClient, years: &[i32]) -> Self {
        let mut holidays = HashSet::new();

        for &year in years {
            match client.fetch_year(year).await {
                Ok(dtos) => {
                    let before = holidays.len();
                    collect_dates(&mut holidays, dtos);
                    info!(
                        year,
                        count = holidays.len() - before,
                        country = client.country(),
                        "loaded public holidays"
                    );
                }
                Err(e) => {
                    warn!(
                        year,
                        error = %e,
                        "holiday fetch failed, falling back to weekends only for this year"
                    );
                }
            }
        }

        Self { holidays }
    }

    /// Build a calendar from explicit holiday dates (for testing).
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            holidays: dates.into_iter().collect(),
        }
    }

    /// Calendar with no holiday data; only weekends are non-working.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True iff `date` is a Saturday, a Sunday, or a known public holiday.
    pub fn is_non_working_day(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun) || self.holidays.contains(&date)
    }

    /// Number of distinct holiday dates loaded.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

/// Parse holiday DTOs into the date set, skipping unparseable entries.
fn collect_dates(holidays: &mut HashSet<NaiveDate>, dtos: Vec<PublicHolidayDto>) {
    for dto in dtos {
        match NaiveDate::parse_from_str(&dto.date, DATE_FORMAT) {
            Ok(date) => {
                holidays.insert(date);
            }
            Err(e) => {
                warn!(
                    date = %dto.date,
                    name = dto.local_name.as_deref().unwrap_or("?"),
                    error = %e,
                    "skipping holiday with unparseable date"
                );
            }
        }
    }
}
