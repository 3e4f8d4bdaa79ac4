//! Text figure.

use super::{FigureId, FigureStyle, FigureTrait};
use kurbo::{Insets, Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A figure holding an editable block of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFigure {
    pub(crate) id: FigureId,
    /// Top-left corner of the text block.
    pub position: Point,
    /// The text content.
    content: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// Style properties.
    pub style: FigureStyle,
}

impl TextFigure {
    /// Default font size.
    pub const DEFAULT_FONT_SIZE: f64 = 20.0;

    /// Minimum rendered width, so empty figures stay clickable.
    const MIN_WIDTH: f64 = 20.0;

    /// Padding between the figure bounds and the text content.
    const CONTENT_INSET: f64 = 4.0;

    /// Create a new text figure.
    pub fn new(position: Point, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            content,
            font_size: Self::DEFAULT_FONT_SIZE,
            style: FigureStyle::default(),
        }
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Clone this figure as a prototype: fresh identity, same attributes,
    /// placed at `position`.
    pub fn instantiate_at(&self, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            content: self.content.clone(),
            font_size: self.font_size,
            style: self.style.clone(),
        }
    }

    /// Get the text content.
    pub fn text(&self) -> &str {
        &self.content
    }

    /// Set the text content.
    pub fn set_text(&mut self, content: &str) {
        self.content = content.to_owned();
    }

    /// Insets between the figure bounds and the editable content area.
    pub fn content_insets(&self) -> Insets {
        Insets::uniform(Self::CONTENT_INSET)
    }

    /// The editable content area: bounds shrunk by the content insets.
    pub fn content_area(&self) -> Rect {
        let b = self.bounds();
        let ins = self.content_insets();
        Rect::new(b.x0 + ins.x0, b.y0 + ins.y0, b.x1 - ins.x1, b.y1 - ins.y1)
    }

    /// Approximate width based on the widest line and font size.
    /// Actual width depends on the font; this keeps the core layout-free.
    fn approximate_width(&self) -> f64 {
        let max_line_len = self.content.lines().map(str::len).max().unwrap_or(0);
        (max_line_len as f64 * self.font_size * 0.55).max(Self::MIN_WIDTH)
    }

    /// Approximate height based on font size and line count.
    fn approximate_height(&self) -> f64 {
        let line_count = self.content.lines().count().max(1);
        // lines() does not count a trailing empty line
        let line_count = if self.content.ends_with('\n') {
            line_count + 1
        } else {
            line_count
        };
        line_count as f64 * self.font_size * 1.2
    }
}

impl FigureTrait for TextFigure {
    fn id(&self) -> FigureId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.approximate_width(),
            self.position.y + self.approximate_height(),
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.bounds().inflate(tolerance, tolerance).contains(point)
    }

    fn style(&self) -> &FigureStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut FigureStyle {
        &mut self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_creation() {
        let text = TextFigure::new(Point::new(100.0, 100.0), "Hello".to_string());
        assert_eq!(text.text(), "Hello");
        assert!((text.font_size - TextFigure::DEFAULT_FONT_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_instantiate_has_fresh_id() {
        let prototype = TextFigure::new(Point::ZERO, String::new());
        let copy = prototype.instantiate_at(Point::new(30.0, 40.0));
        assert_ne!(prototype.id(), copy.id());
        assert_eq!(copy.position, Point::new(30.0, 40.0));
        assert_eq!(copy.text(), prototype.text());
    }

    #[test]
    fn test_empty_figure_keeps_minimum_bounds() {
        let text = TextFigure::new(Point::new(0.0, 0.0), String::new());
        let bounds = text.bounds();
        assert!(bounds.width() >= 20.0);
        assert!(bounds.height() > 0.0);
    }

    #[test]
    fn test_content_area_inside_bounds() {
        let text = TextFigure::new(Point::new(10.0, 10.0), "Hello World".to_string());
        let bounds = text.bounds();
        let content = text.content_area();
        assert!(content.x0 > bounds.x0);
        assert!(content.y0 > bounds.y0);
        assert!(content.x1 < bounds.x1);
        assert!(content.y1 < bounds.y1);
    }

    #[test]
    fn test_hit_test() {
        let text = TextFigure::new(Point::new(100.0, 100.0), "Hello World".to_string());
        assert!(text.hit_test(text.bounds().center(), 0.0));
        assert!(!text.hit_test(Point::new(0.0, 0.0), 0.0));
    }
}
