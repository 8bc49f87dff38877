// src/services/mod.rs
pub mod save_trip;

pub use save_trip::TripSaveService;
