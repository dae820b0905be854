//! Drawing the network map.

use tracing::debug;

use super::projector::SphereProjector;
use super::settings::RenderSettings;
use super::snapshot::{MapSnapshot, StopPoint};
use super::svg::{
    Circle, Color, Document, Point, Polyline, StrokeLineCap, StrokeLineJoin, Styled, Text,
};

const FONT_FAMILY: &str = "Verdana";

/// Renders a [`MapSnapshot`] to SVG.
///
/// The map is drawn in four layers, each complete before the next starts:
/// route lines, route names, stop markers, stop names.
#[derive(Debug, Clone)]
pub struct MapRenderer {
    settings: RenderSettings,
    snapshot: MapSnapshot,
    projector: SphereProjector,
}

impl MapRenderer {
    pub fn new(settings: RenderSettings, snapshot: MapSnapshot) -> Self {
        let projector = SphereProjector::new(
            snapshot.coordinates(),
            settings.width,
            settings.height,
            settings.padding,
        );
        Self {
            settings,
            snapshot,
            projector,
        }
    }

    pub fn render(&self) -> Document {
        let mut doc = Document::new();
        self.draw_route_lines(&mut doc);
        self.draw_route_names(&mut doc);
        self.draw_stop_markers(&mut doc);
        self.draw_stop_names(&mut doc);
        debug!(
            buses = self.snapshot.buses.len(),
            stops = self.snapshot.stops.len(),
            elements = doc.elements().len(),
            "Rendered map"
        );
        doc
    }

    pub fn render_svg(&self) -> String {
        self.render().to_string()
    }

    fn project(&self, stop: &StopPoint) -> Point {
        self.projector.project(stop.coordinates)
    }

    fn draw_route_lines(&self, doc: &mut Document) {
        for (index, bus) in self.snapshot.buses.iter().enumerate() {
            let points = bus.stops.iter().map(|stop| self.project(stop)).collect();
            doc.add(
                Polyline::new(points)
                    .fill(Color::named("none"))
                    .stroke(self.settings.palette_color(index))
                    .stroke_width(self.settings.line_width)
                    .line_cap(StrokeLineCap::Round)
                    .line_join(StrokeLineJoin::Round),
            );
        }
    }

    fn draw_route_names(&self, doc: &mut Document) {
        for (index, bus) in self.snapshot.buses.iter().enumerate() {
            for terminal in &bus.terminals {
                let label = Text::new(self.project(terminal), bus.name.as_str())
                    .offset(self.settings.bus_label_offset())
                    .font_size(self.settings.bus_label_font_size)
                    .font_family(FONT_FAMILY)
                    .font_weight("bold");
                doc.add(self.underlayer(label.clone()));
                doc.add(label.fill(self.settings.palette_color(index)));
            }
        }
    }

    fn draw_stop_markers(&self, doc: &mut Document) {
        for stop in &self.snapshot.stops {
            doc.add(
                Circle::new(self.project(stop), self.settings.stop_radius)
                    .fill(Color::named("white")),
            );
        }
    }

    fn draw_stop_names(&self, doc: &mut Document) {
        for stop in &self.snapshot.stops {
            let label = Text::new(self.project(stop), stop.name.as_str())
                .offset(self.settings.stop_label_offset())
                .font_size(self.settings.stop_label_font_size)
                .font_family(FONT_FAMILY);
            doc.add(self.underlayer(label.clone()));
            doc.add(label.fill(Color::named("black")));
        }
    }

    /// Halo drawn under a label to keep it readable over route lines.
    fn underlayer(&self, text: Text) -> Text {
        text.fill(self.settings.underlayer_color.clone())
            .stroke(self.settings.underlayer_color.clone())
            .stroke_width(self.settings.underlayer_width)
            .line_cap(StrokeLineCap::Round)
            .line_join(StrokeLineJoin::Round)
    }
}
