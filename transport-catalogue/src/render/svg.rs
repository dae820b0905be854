//! Minimal SVG document model.
//!
//! Only the three shapes the map needs: circles, polylines and text.
//! Numbers are written with six significant digits and no trailing zeros.

use std::fmt::{self, Write};

use serde::Deserialize;

/// A point on the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// A paint color.
///
/// Deserializes from a name (`"red"`), `[r, g, b]` or `[r, g, b, opacity]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl Color {
    pub fn named(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({r},{g},{b},{})", Number(*a)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineCap {
    Butt,
    Round,
    Square,
}

impl fmt::Display for StrokeLineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrokeLineCap::Butt => "butt",
            StrokeLineCap::Round => "round",
            StrokeLineCap::Square => "square",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl fmt::Display for StrokeLineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrokeLineJoin::Arcs => "arcs",
            StrokeLineJoin::Bevel => "bevel",
            StrokeLineJoin::Miter => "miter",
            StrokeLineJoin::MiterClip => "miter-clip",
            StrokeLineJoin::Round => "round",
        })
    }
}

/// A number formatted like C's `%g`: six significant digits, trailing
/// zeros dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value == 0.0 {
            return f.write_str("0");
        }
        if !value.is_finite() {
            return write!(f, "{value}");
        }
        let magnitude = value.abs().log10().floor() as i32;
        if !(-5..6).contains(&magnitude) {
            return write!(f, "{value:e}");
        }
        let decimals = (5 - magnitude) as usize;
        let text = format!("{value:.decimals$}");
        let text = if text.contains('.') {
            text.trim_end_matches('0').trim_end_matches('.')
        } else {
            text.as_str()
        };
        f.write_str(text)
    }
}

/// Stroke and fill attributes shared by every shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathProps {
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: Option<f64>,
    line_cap: Option<StrokeLineCap>,
    line_join: Option<StrokeLineJoin>,
}

impl PathProps {
    fn write_attrs(&self, out: &mut impl Write) -> fmt::Result {
        if let Some(fill) = &self.fill {
            write!(out, " fill=\"{fill}\"")?;
        }
        if let Some(stroke) = &self.stroke {
            write!(out, " stroke=\"{stroke}\"")?;
        }
        if let Some(width) = self.stroke_width {
            write!(out, " stroke-width=\"{}\"", Number(width))?;
        }
        if let Some(cap) = self.line_cap {
            write!(out, " stroke-linecap=\"{cap}\"")?;
        }
        if let Some(join) = self.line_join {
            write!(out, " stroke-linejoin=\"{join}\"")?;
        }
        Ok(())
    }
}

/// Builder methods for the attributes in [`PathProps`].
pub trait Styled: Sized {
    fn props_mut(&mut self) -> &mut PathProps;

    fn fill(mut self, color: Color) -> Self {
        self.props_mut().fill = Some(color);
        self
    }

    fn stroke(mut self, color: Color) -> Self {
        self.props_mut().stroke = Some(color);
        self
    }

    fn stroke_width(mut self, width: f64) -> Self {
        self.props_mut().stroke_width = Some(width);
        self
    }

    fn line_cap(mut self, cap: StrokeLineCap) -> Self {
        self.props_mut().line_cap = Some(cap);
        self
    }

    fn line_join(mut self, join: StrokeLineJoin) -> Self {
        self.props_mut().line_join = Some(join);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
    props: PathProps,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            props: PathProps::default(),
        }
    }
}

impl Styled for Circle {
    fn props_mut(&mut self) -> &mut PathProps {
        &mut self.props
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
    props: PathProps,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            props: PathProps::default(),
        }
    }
}

impl Styled for Polyline {
    fn props_mut(&mut self) -> &mut PathProps {
        &mut self.props
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    position: Point,
    offset: Point,
    font_size: u32,
    font_family: Option<String>,
    font_weight: Option<String>,
    data: String,
    props: PathProps,
}

impl Text {
    pub fn new(position: Point, data: impl Into<String>) -> Self {
        Self {
            position,
            data: data.into(),
            font_size: 1,
            ..Self::default()
        }
    }

    pub fn offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_family(mut self, family: &str) -> Self {
        self.font_family = Some(family.to_string());
        self
    }

    pub fn font_weight(mut self, weight: &str) -> Self {
        self.font_weight = Some(weight.to_string());
        self
    }
}

impl Styled for Text {
    fn props_mut(&mut self) -> &mut PathProps {
        &mut self.props
    }
}

/// Any shape that can go into a [`Document`].
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl From<Circle> for Element {
    fn from(circle: Circle) -> Self {
        Element::Circle(circle)
    }
}

impl From<Polyline> for Element {
    fn from(polyline: Polyline) -> Self {
        Element::Polyline(polyline)
    }
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        Element::Text(text)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Circle(circle) => {
                write!(
                    f,
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
                    Number(circle.center.x),
                    Number(circle.center.y),
                    Number(circle.radius)
                )?;
                circle.props.write_attrs(f)?;
                f.write_str("/>")
            }
            Element::Polyline(polyline) => {
                f.write_str("<polyline points=\"")?;
                for (i, point) in polyline.points.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{},{}", Number(point.x), Number(point.y))?;
                }
                f.write_char('"')?;
                polyline.props.write_attrs(f)?;
                f.write_str("/>")
            }
            Element::Text(text) => {
                f.write_str("<text")?;
                text.props.write_attrs(f)?;
                write!(
                    f,
                    " x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
                    Number(text.position.x),
                    Number(text.position.y),
                    Number(text.offset.x),
                    Number(text.offset.y),
                    text.font_size
                )?;
                if let Some(family) = &text.font_family {
                    write!(f, " font-family=\"{family}\"")?;
                }
                if let Some(weight) = &text.font_weight {
                    write!(f, " font-weight=\"{weight}\"")?;
                }
                f.write_char('>')?;
                write_escaped(f, &text.data)?;
                f.write_str("</text>")
            }
        }
    }
}

fn write_escaped(out: &mut impl Write, data: &str) -> fmt::Result {
    for c in data.chars() {
        match c {
            '"' => out.write_str("&quot;")?,
            '\'' => out.write_str("&apos;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '&' => out.write_str("&amp;")?,
            other => out.write_char(other)?,
        }
    }
    Ok(())
}

/// An SVG document: shapes drawn in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n")?;
        f.write_str("<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n")?;
        for element in &self.elements {
            writeln!(f, "{element}")?;
        }
        f.write_str("</svg>")
    }
}
