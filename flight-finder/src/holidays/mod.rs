//! Public-holiday oracle.
//!
//! Provides the non-working-day lookup behind vacation accounting.
//! The calendar is fetched once at startup for the years a search can
//! touch and is read-only afterwards.

mod calendar;
mod client;
mod error;

pub use calendar::HolidayCalendar;
pub use client::{HolidayClient, HolidayClientConfig, PublicHolidayDto};
pub use error::HolidayError;
