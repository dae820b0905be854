//! Query results reported by the catalogue.

use super::Bus;

/// Aggregate statistics of one bus route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusStat {
    /// Stops along the full cycle, repeats included.
    pub stop_count: usize,
    pub unique_stop_count: usize,
    /// Sum of road distances along the cycle, in meters.
    pub route_length: f64,
    /// Road length divided by great-circle length.
    pub curvature: f64,
}

/// The buses serving one stop.
#[derive(Debug, Clone, PartialEq)]
pub struct StopStat<'a> {
    pub stop_name: &'a str,
    /// Sorted by bus name.
    pub buses: Vec<&'a Bus>,
}

impl StopStat<'_> {
    pub fn bus_names(&self) -> impl Iterator<Item = &str> {
        self.buses.iter().map(|bus| bus.name.as_str())
    }
}
