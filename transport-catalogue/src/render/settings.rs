//! Map render settings.

use serde::Deserialize;

use super::svg::{Color, Point};
use crate::error::ConfigError;

/// Largest magnitude accepted for any size or offset.
const LIMIT: f64 = 100_000.0;

/// Visual parameters of the network map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,

    /// Distance from the image edges to the outermost stop.
    pub padding: f64,

    pub line_width: f64,
    pub stop_radius: f64,

    pub bus_label_font_size: u32,
    pub bus_label_offset: [f64; 2],

    pub stop_label_font_size: u32,
    pub stop_label_offset: [f64; 2],

    pub underlayer_color: Color,
    pub underlayer_width: f64,

    /// Route colors, assigned to buses in name order and reused cyclically.
    pub color_palette: Vec<Color>,
}

impl RenderSettings {
    /// Check every setting is within range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("width", self.width, 0.0, LIMIT)?;
        check_range("height", self.height, 0.0, LIMIT)?;
        let half_side = self.width.min(self.height) / 2.0;
        if !(self.padding >= 0.0 && self.padding < half_side) {
            return Err(ConfigError::InvalidRender(format!(
                "padding must be at least 0 and below {half_side}, got {}",
                self.padding
            )));
        }
        check_range("line_width", self.line_width, 0.0, LIMIT)?;
        check_range("stop_radius", self.stop_radius, 0.0, LIMIT)?;
        check_range("underlayer_width", self.underlayer_width, 0.0, LIMIT)?;
        check_range("bus_label_font_size", f64::from(self.bus_label_font_size), 0.0, LIMIT)?;
        check_range("stop_label_font_size", f64::from(self.stop_label_font_size), 0.0, LIMIT)?;
        for (name, offset) in [
            ("bus_label_offset", self.bus_label_offset),
            ("stop_label_offset", self.stop_label_offset),
        ] {
            for component in offset {
                check_range(name, component, -LIMIT, LIMIT)?;
            }
        }
        if self.color_palette.is_empty() {
            return Err(ConfigError::InvalidRender(
                "color_palette must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bus_label_offset(&self) -> Point {
        Point::from(self.bus_label_offset)
    }

    pub fn stop_label_offset(&self) -> Point {
        Point::from(self.stop_label_offset)
    }

    /// Palette color for the `index`-th drawn bus.
    pub fn palette_color(&self, index: usize) -> Color {
        if self.color_palette.is_empty() {
            return Color::named("black");
        }
        self.color_palette[index % self.color_palette.len()].clone()
    }
}

fn check_range(name: &str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRender(format!(
            "{name} must be between {min} and {max}, got {value}"
        )))
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 1200.0,
            padding: 50.0,
            line_width: 14.0,
            stop_radius: 5.0,
            bus_label_font_size: 20,
            bus_label_offset: [7.0, 15.0],
            stop_label_font_size: 20,
            stop_label_offset: [7.0, -3.0],
            underlayer_color: Color::Rgba(255, 255, 255, 0.85),
            underlayer_width: 3.0,
            color_palette: vec![
                Color::named("green"),
                Color::Rgb(255, 160, 0),
                Color::named("red"),
            ],
        }
    }
}
