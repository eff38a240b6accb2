pub mod config;
pub mod export;
pub mod init;
pub mod itinerary;
pub mod locate;
pub mod markers;
pub mod summary;

use crate::errors::AppResult;
use crate::models::trip::TripPlan;
use crate::utils::path::expand_tilde;

/// Read the trip file named on the command line.
pub(crate) fn load_trip(path: &str) -> AppResult<TripPlan> {
    TripPlan::load(&expand_tilde(path))
}
