//! Query façade over a loaded network.

use crate::catalogue::{CatalogueError, TransportCatalogue};
use crate::domain::{BusStat, StopStat};
use crate::error::ConfigError;
use crate::planner::{Itinerary, TransportRouter};
use crate::render::MapRenderer;

/// Answers every kind of query against one catalogue.
///
/// The planner and renderer are optional: a document without routing or
/// render settings can still answer statistics queries.
#[derive(Debug, Clone, Copy)]
pub struct RequestHandler<'a> {
    catalogue: &'a TransportCatalogue,
    router: Option<&'a TransportRouter<'a>>,
    renderer: Option<&'a MapRenderer>,
}

impl<'a> RequestHandler<'a> {
    pub fn new(catalogue: &'a TransportCatalogue) -> Self {
        Self {
            catalogue,
            router: None,
            renderer: None,
        }
    }

    pub fn with_router(mut self, router: &'a TransportRouter<'a>) -> Self {
        self.router = Some(router);
        self
    }

    pub fn with_renderer(mut self, renderer: &'a MapRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn catalogue(&self) -> &'a TransportCatalogue {
        self.catalogue
    }

    /// Statistics for a bus, or `None` if no bus has that name.
    pub fn bus_stat(&self, name: &str) -> Result<Option<BusStat>, CatalogueError> {
        self.catalogue.bus_stat(name)
    }

    /// Buses calling at a stop, or `None` if no stop has that name.
    pub fn stop_stat(&self, name: &str) -> Option<StopStat<'a>> {
        self.catalogue.stop_stat(name)
    }

    /// Fastest itinerary between two stops.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSettings`] if no planner was attached.
    pub fn optimal_route(&self, from: &str, to: &str) -> Result<Option<Itinerary>, ConfigError> {
        let router = self.router.ok_or(ConfigError::MissingSettings {
            settings: "routing_settings",
            request: "Route",
        })?;
        Ok(router.plan_route(from, to))
    }

    /// The network map as an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSettings`] if no renderer was attached.
    pub fn render_map(&self) -> Result<String, ConfigError> {
        let renderer = self.renderer.ok_or(ConfigError::MissingSettings {
            settings: "render_settings",
            request: "Map",
        })?;
        Ok(renderer.render_svg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinates;
    use crate::planner::RoutingSettings;
    use crate::render::{MapSnapshot, RenderSettings};

    fn catalogue() -> TransportCatalogue {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("Start", Coordinates::new(0.0, 0.0)).unwrap();
        catalogue.add_stop("Mid", Coordinates::new(0.0, 0.01)).unwrap();
        catalogue.add_stop("End", Coordinates::new(0.0, 0.02)).unwrap();
        catalogue.add_stop("Idle", Coordinates::new(1.0, 1.0)).unwrap();
        catalogue
            .add_bus("X", &["Start", "Mid", "End", "Start"], true)
            .unwrap();
        catalogue.set_distance("Start", "Mid", 1000.0).unwrap();
        catalogue.set_distance("Mid", "End", 1100.0).unwrap();
        catalogue.set_distance("End", "Start", 2100.0).unwrap();
        catalogue
    }

    #[test]
    fn statistics_without_settings() {
        let catalogue = catalogue();
        let handler = RequestHandler::new(&catalogue);

        let stat = handler.bus_stat("X").unwrap().unwrap();
        assert_eq!(stat.stop_count, 4);
        assert_eq!(handler.bus_stat("Y").unwrap(), None);

        let stop = handler.stop_stat("Mid").unwrap();
        assert_eq!(stop.bus_names().collect::<Vec<_>>(), ["X"]);
        assert!(handler.stop_stat("Idle").unwrap().buses.is_empty());
        assert!(handler.stop_stat("Nowhere").is_none());
    }

    #[test]
    fn route_requires_planner() {
        let catalogue = catalogue();
        let handler = RequestHandler::new(&catalogue);
        assert_eq!(
            handler.optimal_route("Start", "End"),
            Err(ConfigError::MissingSettings {
                settings: "routing_settings",
                request: "Route",
            })
        );
    }

    #[test]
    fn map_requires_renderer() {
        let catalogue = catalogue();
        let handler = RequestHandler::new(&catalogue);
        assert!(matches!(
            handler.render_map(),
            Err(ConfigError::MissingSettings {
                settings: "render_settings",
                ..
            })
        ));
    }

    #[test]
    fn route_with_planner() {
        let catalogue = catalogue();
        let router = TransportRouter::new(&catalogue, RoutingSettings::new(5.0, 60.0)).unwrap();
        let handler = RequestHandler::new(&catalogue).with_router(&router);

        let itinerary = handler.optimal_route("Start", "End").unwrap().unwrap();
        assert!((itinerary.total_time() - 7.1).abs() < 1e-9);
        assert_eq!(handler.optimal_route("Start", "Idle").unwrap(), None);
    }

    #[test]
    fn map_with_renderer() {
        let catalogue = catalogue();
        let renderer = MapRenderer::new(
            RenderSettings::default(),
            MapSnapshot::from_catalogue(&catalogue),
        );
        let handler = RequestHandler::new(&catalogue).with_renderer(&renderer);

        let svg = handler.render_map().unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(">Mid</text>"));
        assert!(!svg.contains(">Idle</text>"));
    }
}
