pub mod aggregate;
pub mod costing;
