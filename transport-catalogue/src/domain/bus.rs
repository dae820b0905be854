//! Bus route type.

use std::collections::HashSet;

use super::StopId;

/// Stable index of a bus in the catalogue arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusId(pub usize);

impl BusId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named bus route.
///
/// The stop list is always stored as a full cycle: a route that is not a
/// round trip has its outbound stops followed by the way back, so route
/// arithmetic never needs to look at `is_roundtrip`.
///
/// # Invariants
///
/// - `stops` is non-empty
/// - when `is_roundtrip` is false, `stops` is a palindrome of odd length
#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    pub name: String,
    pub stops: Vec<StopId>,
    pub is_roundtrip: bool,
}

impl Bus {
    /// Number of stops visited along the full cycle, repeats included.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of distinct stops on the route.
    pub fn unique_stop_count(&self) -> usize {
        self.stops.iter().collect::<HashSet<_>>().len()
    }

    pub fn first_stop(&self) -> Option<StopId> {
        self.stops.first().copied()
    }

    /// The far end of the outbound half of a there-and-back route.
    ///
    /// Returns `None` for round trips.
    pub fn outbound_terminus(&self) -> Option<StopId> {
        if self.is_roundtrip {
            return None;
        }
        self.stops.get(self.stops.len() / 2).copied()
    }
}

/// Expand an outbound stop list into the cycle a bus actually runs.
///
/// Round trips are returned unchanged. Otherwise the reverse of the list,
/// minus the duplicated terminus, is appended.
///
/// # Examples
///
/// ```
/// use transport_catalogue::domain::{StopId, expand_route};
///
/// let outbound = vec![StopId(0), StopId(1), StopId(2)];
/// let cycle = expand_route(outbound, false);
/// assert_eq!(cycle, vec![StopId(0), StopId(1), StopId(2), StopId(1), StopId(0)]);
/// ```
pub fn expand_route(mut stops: Vec<StopId>, is_roundtrip: bool) -> Vec<StopId> {
    if is_roundtrip || stops.len() < 2 {
        return stops;
    }
    let way_back: Vec<StopId> = stops.iter().rev().skip(1).copied().collect();
    stops.extend(way_back);
    stops
}
