//! SVG map of the network.

mod map;
mod projector;
mod settings;
mod snapshot;
pub mod svg;

pub use map::MapRenderer;
pub use projector::SphereProjector;
pub use settings::RenderSettings;
pub use snapshot::{BusLine, MapSnapshot, StopPoint};
