//! Geographic coordinates.

use geo::{HaversineDistance, Point};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    fn to_point(self) -> Point {
        Point::new(self.lng, self.lat)
    }
}

/// Great-circle distance between two coordinates, in meters.
///
/// # Examples
///
/// ```
/// use transport_catalogue::domain::{Coordinates, compute_distance};
///
/// let here = Coordinates::new(55.611087, 37.20829);
/// assert_eq!(compute_distance(here, here), 0.0);
/// ```
pub fn compute_distance(from: Coordinates, to: Coordinates) -> f64 {
    if from == to {
        return 0.0;
    }
    from.to_point().haversine_distance(&to.to_point())
}
