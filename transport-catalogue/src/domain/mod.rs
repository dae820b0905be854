//! Domain types for the transport catalogue.
//!
//! Stops and buses live in append-only arenas owned by the catalogue and
//! are referred to everywhere else by their stable integer ids.

mod bus;
mod coordinates;
mod stats;
mod stop;

pub use bus::{Bus, BusId, expand_route};
pub use coordinates::{Coordinates, compute_distance};
pub use stats::{BusStat, StopStat};
pub use stop::{Stop, StopId};
