//! Vacation-aware itinerary planning.
//!
//! This module implements the core filtering pass that answers: "which of
//! these round trips can I actually take without exceeding my vacation
//! budget?"
//!
//! Costing counts the working days inside a trip's inclusive date span;
//! weekends and public holidays are free.

mod filter;
mod vacation;

pub use filter::{FilterOutcome, filter_candidates};
pub use vacation::{NonWorkingDays, vacation_days_required};
