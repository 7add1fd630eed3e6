//! Domain types for the flight finder.
//!
//! This module contains the core domain model types that represent
//! validated flight-search data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod airline;
mod airport;
mod itinerary;
mod query;

pub use airline::airline_display_name;
pub use airport::{IataCode, InvalidIataCode};
pub use itinerary::{InvalidItinerary, Itinerary};
pub use query::{FlightQuery, InvalidQuery};
