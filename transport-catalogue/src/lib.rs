//! Transport catalogue and route planner.
//!
//! Loads a transit network of stops and buses from a JSON batch document,
//! then answers route statistics, stop statistics, fastest-itinerary and
//! map requests against it.

pub mod catalogue;
pub mod domain;
pub mod error;
pub mod graph;
pub mod handler;
pub mod json;
pub mod planner;
pub mod render;
