pub mod calculator;
pub mod config;
pub mod geo;
pub mod itinerary;
pub mod logic;
pub mod markers;
pub mod projector;
pub mod resolver;
pub mod summary;
