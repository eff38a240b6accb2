pub mod annotations;
pub mod compliance;
pub mod steps;
pub mod timeline;
pub mod totals;
