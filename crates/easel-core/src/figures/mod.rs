//! Figure definitions for the drawing editor.

mod ellipse;
mod rectangle;
mod text;

pub use ellipse::EllipseFigure;
pub use rectangle::RectangleFigure;
pub use text::TextFigure;

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for figures.
pub type FigureId = Uuid;

/// RGBA8 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

/// Style properties for figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureStyle {
    /// Stroke color.
    pub stroke_color: Rgba,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill color (None = no fill).
    pub fill_color: Option<Rgba>,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            stroke_color: Rgba::black(),
            stroke_width: 2.0,
            fill_color: None,
        }
    }
}

/// Common trait for all figures.
pub trait FigureTrait {
    /// Get the unique identifier.
    fn id(&self) -> FigureId;

    /// Get the bounding box in world coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point (in world coordinates) hits this figure.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Get the style.
    fn style(&self) -> &FigureStyle;

    /// Get mutable style.
    fn style_mut(&mut self) -> &mut FigureStyle;
}

/// Enum wrapper for all figure kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Figure {
    Rectangle(RectangleFigure),
    Ellipse(EllipseFigure),
    Text(TextFigure),
}

impl Figure {
    pub fn id(&self) -> FigureId {
        match self {
            Figure::Rectangle(f) => f.id(),
            Figure::Ellipse(f) => f.id(),
            Figure::Text(f) => f.id(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Figure::Rectangle(f) => f.bounds(),
            Figure::Ellipse(f) => f.bounds(),
            Figure::Text(f) => f.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Figure::Rectangle(f) => f.hit_test(point, tolerance),
            Figure::Ellipse(f) => f.hit_test(point, tolerance),
            Figure::Text(f) => f.hit_test(point, tolerance),
        }
    }

    pub fn style(&self) -> &FigureStyle {
        match self {
            Figure::Rectangle(f) => f.style(),
            Figure::Ellipse(f) => f.style(),
            Figure::Text(f) => f.style(),
        }
    }

    pub fn style_mut(&mut self) -> &mut FigureStyle {
        match self {
            Figure::Rectangle(f) => f.style_mut(),
            Figure::Ellipse(f) => f.style_mut(),
            Figure::Text(f) => f.style_mut(),
        }
    }

    /// Check if this figure holds editable text.
    pub fn is_text(&self) -> bool {
        matches!(self, Figure::Text(_))
    }

    /// Get the text figure if this is one.
    pub fn as_text(&self) -> Option<&TextFigure> {
        match self {
            Figure::Text(f) => Some(f),
            _ => None,
        }
    }

    /// Get the mutable text figure if this is one.
    pub fn as_text_mut(&mut self) -> Option<&mut TextFigure> {
        match self {
            Figure::Text(f) => Some(f),
            _ => None,
        }
    }
}
