// src/handlers/mod.rs
pub mod planner;
pub mod profiles;
pub mod saved_places;
pub mod status;
pub mod trips;
pub mod ui;
