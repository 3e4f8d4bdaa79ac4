//! Camera for world-to-view transforms.

use kurbo::{Affine, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Camera managing the view transform for a drawing view.
///
/// Handles panning (translation) and zooming (scaling), converting between
/// view coordinates and world coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Current translation offset (pan).
    pub offset: Vec2,
    /// Current zoom level (1.0 = 100%).
    pub zoom: f64,
    /// Minimum allowed zoom level.
    pub min_zoom: f64,
    /// Maximum allowed zoom level.
    pub max_zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
            min_zoom: 0.1,
            max_zoom: 10.0,
        }
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The transform converting world coordinates to view coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// The inverse transform, for input handling.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-self.offset)
    }

    /// Convert a view point to world coordinates.
    pub fn view_to_world(&self, view_point: Point) -> Point {
        self.inverse_transform() * view_point
    }

    /// Convert a world point to view coordinates.
    pub fn world_to_view(&self, world_point: Point) -> Point {
        self.transform() * world_point
    }

    /// Convert a world rectangle to view coordinates.
    pub fn world_rect_to_view(&self, world_rect: Rect) -> Rect {
        self.transform().transform_rect_bbox(world_rect)
    }

    /// Pan the camera by a delta in view coordinates.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Zoom the camera, keeping the given view point fixed.
    pub fn zoom_at(&mut self, view_point: Point, factor: f64) {
        let new_zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }

        let world_point = self.view_to_world(view_point);
        self.zoom = new_zoom;

        // Adjust offset so world_point stays at view_point
        let new_view = self.world_to_view(world_point);
        self.offset += Vec2::new(view_point.x - new_view.x, view_point.y - new_view.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_by_default() {
        let camera = Camera::new();
        let p = Point::new(12.0, 34.0);
        assert_eq!(camera.world_to_view(p), p);
    }

    #[test]
    fn test_roundtrip() {
        let mut camera = Camera::new();
        camera.zoom = 2.0;
        camera.offset = Vec2::new(30.0, -10.0);

        let world = Point::new(100.0, 50.0);
        let view = camera.world_to_view(world);
        let back = camera.view_to_world(view);
        assert!((back.x - world.x).abs() < 1e-9);
        assert!((back.y - world.y).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_at_keeps_anchor() {
        let mut camera = Camera::new();
        let anchor = Point::new(200.0, 150.0);
        let world_before = camera.view_to_world(anchor);

        camera.zoom_at(anchor, 2.0);
        let world_after = camera.view_to_world(anchor);

        assert!((world_before.x - world_after.x).abs() < 1e-9);
        assert!((world_before.y - world_after.y).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut camera = Camera::new();
        camera.zoom_at(Point::ZERO, 1000.0);
        assert!((camera.zoom - camera.max_zoom).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rect_transform() {
        let mut camera = Camera::new();
        camera.zoom = 2.0;
        let rect = Rect::new(10.0, 10.0, 20.0, 30.0);
        assert_eq!(
            camera.world_rect_to_view(rect),
            Rect::new(20.0, 20.0, 40.0, 60.0)
        );
    }
}
