//! Route planner.
//!
//! Turns the catalogue into a directed graph of wait and ride edges once,
//! then answers "fastest way from stop A to stop B" queries against it with
//! Dijkstra's algorithm, translating the raw edge path back into an
//! itinerary of waits and bus rides.

mod builder;
mod config;
mod itinerary;
mod router;

pub use builder::{EdgeKind, RoutingGraph, StopVertices};
pub use config::RoutingSettings;
pub use itinerary::{Itinerary, ItineraryItem};
pub use router::TransportRouter;
