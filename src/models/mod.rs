// src/models/mod.rs
//! Row, insert and update shapes for the four persisted tables.

pub mod itinerary;
pub mod profile;
pub mod saved_place;
pub mod trip;

pub use itinerary::{ItineraryInsert, ItineraryRow, ItineraryUpdate, NewItineraryDay};
pub use profile::{ProfileInsert, ProfileRow, ProfileUpdate};
pub use saved_place::{SavedPlaceInsert, SavedPlaceRow, SavedPlaceUpdate};
pub use trip::{TripDetail, TripInsert, TripRow, TripUpdate, UserQuery};
