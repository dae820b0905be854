//! Itinerary types.
//!
//! An `Itinerary` is what a rider follows: wait at a stop, ride a bus for a
//! number of stops, wait again, and so on.

/// One step of an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub enum ItineraryItem {
    /// Wait at a stop for the next bus
    Wait { stop_name: String, time: f64 },
    /// Ride a bus for `span_count` stop-to-stop hops
    Bus {
        bus_name: String,
        span_count: usize,
        time: f64,
    },
}

impl ItineraryItem {
    /// Minutes spent on this step.
    pub fn time(&self) -> f64 {
        match self {
            ItineraryItem::Wait { time, .. } | ItineraryItem::Bus { time, .. } => *time,
        }
    }

    /// Returns true if this is a wait step.
    pub fn is_wait(&self) -> bool {
        matches!(self, ItineraryItem::Wait { .. })
    }

    /// Returns true if this is a ride step.
    pub fn is_ride(&self) -> bool {
        matches!(self, ItineraryItem::Bus { .. })
    }
}

/// The fastest way from one stop to another.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    items: Vec<ItineraryItem>,
    total_time: f64,
}

impl Itinerary {
    pub fn new(items: Vec<ItineraryItem>, total_time: f64) -> Self {
        Self { items, total_time }
    }

    /// An itinerary that goes nowhere.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0.0)
    }

    pub fn items(&self) -> &[ItineraryItem] {
        &self.items
    }

    /// Total minutes from arriving at the origin to arriving at the
    /// destination.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of buses boarded.
    pub fn ride_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_ride()).count()
    }
}
