//! Drawing view: selection state and hit-testing over a drawing.

use crate::camera::Camera;
use crate::drawing::Drawing;
use crate::figures::FigureId;
use kurbo::{Point, Rect};

/// Default hit tolerance in view pixels.
pub const HIT_TOLERANCE: f64 = 4.0;

/// View-side editing state: the selection and the camera.
///
/// The view never owns figures; it refers to them by id and leaves
/// membership and z-order to the [`Drawing`].
#[derive(Debug, Clone)]
pub struct DrawingView {
    camera: Camera,
    selection: Vec<FigureId>,
    /// Hit tolerance in view pixels (scaled by zoom when testing).
    pub hit_tolerance: f64,
}

impl Default for DrawingView {
    fn default() -> Self {
        Self {
            camera: Camera::new(),
            selection: Vec::new(),
            hit_tolerance: HIT_TOLERANCE,
        }
    }
}

impl DrawingView {
    /// Create a new view with an identity camera and empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The view's camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access to the camera.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Currently selected figure ids, in selection order.
    pub fn selection(&self) -> &[FigureId] {
        &self.selection
    }

    /// Check if a figure is selected.
    pub fn is_selected(&self, id: FigureId) -> bool {
        self.selection.contains(&id)
    }

    /// Select a single figure (clears the previous selection).
    pub fn select(&mut self, id: FigureId) {
        self.selection.clear();
        self.selection.push(id);
    }

    /// Add a figure to the selection.
    pub fn add_to_selection(&mut self, id: FigureId) {
        if !self.selection.contains(&id) {
            self.selection.push(id);
        }
    }

    /// Remove a figure from the selection.
    pub fn deselect(&mut self, id: FigureId) {
        self.selection.retain(|&s| s != id);
    }

    /// Replace the selection.
    pub fn set_selection(&mut self, ids: Vec<FigureId>) {
        self.selection.clear();
        for id in ids {
            self.add_to_selection(id);
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The frontmost figure under a view-space point, if any.
    pub fn hit_test(&self, drawing: &Drawing, view_point: Point) -> Option<FigureId> {
        let world = self.camera.view_to_world(view_point);
        let tolerance = self.hit_tolerance / self.camera.zoom;
        drawing.top_figure_at(world, tolerance)
    }

    /// Convert a view point to world coordinates.
    pub fn view_to_world(&self, view_point: Point) -> Point {
        self.camera.view_to_world(view_point)
    }

    /// Convert a world point to view coordinates.
    pub fn world_to_view(&self, world_point: Point) -> Point {
        self.camera.world_to_view(world_point)
    }

    /// Convert a world rectangle to view coordinates.
    pub fn world_rect_to_view(&self, world_rect: Rect) -> Rect {
        self.camera.world_rect_to_view(world_rect)
    }
}
