//! Drawing container: the sole authority on figure membership and z-order.

use crate::figures::{Figure, FigureId};
use kurbo::{Point, Rect};
use thiserror::Error;

/// Errors raised when an operation violates the drawing's contracts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawingError {
    #[error("figure {0} is not a member of the drawing")]
    NotAMember(FigureId),
    #[error("figure {0} is already a member of the drawing")]
    AlreadyAMember(FigureId),
    #[error("figure {0} does not hold text")]
    NotATextFigure(FigureId),
    #[error("index {index} out of bounds for drawing of {len} figures")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("reorder list does not match the drawing's membership")]
    OrderMismatch,
}

/// Change notifications emitted by a drawing.
///
/// Collaborators (views, repaint schedulers) drain these after each
/// operation; content changes are bracketed by the about-to-change /
/// changed pair so dependents can batch relayout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawingEvent {
    FigureAdded { figure: FigureId, index: usize },
    FigureRemoved { figure: FigureId, index: usize },
    FigureAboutToChange { figure: FigureId },
    FigureChanged { figure: FigureId },
}

/// An ordered collection of figures.
///
/// Insertion order is paint and hit-test order: index 0 is the back of the
/// drawing, the last index is the front.
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    figures: Vec<Figure>,
    events: Vec<DrawingEvent>,
}

impl Drawing {
    /// Create a new empty drawing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of figures in the drawing.
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    /// Check if the drawing is empty.
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Figures in z-order (back to front).
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Figure ids in z-order (back to front).
    pub fn figure_ids(&self) -> Vec<FigureId> {
        self.figures.iter().map(Figure::id).collect()
    }

    /// Check membership.
    pub fn contains(&self, id: FigureId) -> bool {
        self.index_of(id).is_some()
    }

    /// Z-index of a figure, if it is a member.
    pub fn index_of(&self, id: FigureId) -> Option<usize> {
        self.figures.iter().position(|f| f.id() == id)
    }

    /// Get a figure by id.
    pub fn figure(&self, id: FigureId) -> Option<&Figure> {
        self.figures.iter().find(|f| f.id() == id)
    }

    /// Get a mutable figure by id.
    ///
    /// Text mutations should go through [`Drawing::set_figure_text`] so the
    /// change notifications fire.
    pub fn figure_mut(&mut self, id: FigureId) -> Option<&mut Figure> {
        self.figures.iter_mut().find(|f| f.id() == id)
    }

    /// Add a figure at the front of the drawing.
    pub fn add(&mut self, figure: Figure) -> Result<FigureId, DrawingError> {
        let id = figure.id();
        self.insert(self.figures.len(), figure)?;
        Ok(id)
    }

    /// Insert a figure at a z-index.
    pub fn insert(&mut self, index: usize, figure: Figure) -> Result<(), DrawingError> {
        if index > self.figures.len() {
            return Err(DrawingError::IndexOutOfBounds {
                index,
                len: self.figures.len(),
            });
        }
        let id = figure.id();
        if self.contains(id) {
            return Err(DrawingError::AlreadyAMember(id));
        }
        self.figures.insert(index, figure);
        self.events.push(DrawingEvent::FigureAdded { figure: id, index });
        Ok(())
    }

    /// Remove a figure, returning it.
    pub fn remove(&mut self, id: FigureId) -> Result<Figure, DrawingError> {
        let index = self.index_of(id).ok_or(DrawingError::NotAMember(id))?;
        let figure = self.figures.remove(index);
        self.events
            .push(DrawingEvent::FigureRemoved { figure: id, index });
        Ok(figure)
    }

    /// The text content of a text figure.
    pub fn figure_text(&self, id: FigureId) -> Result<&str, DrawingError> {
        match self.figure(id) {
            Some(Figure::Text(f)) => Ok(f.text()),
            Some(_) => Err(DrawingError::NotATextFigure(id)),
            None => Err(DrawingError::NotAMember(id)),
        }
    }

    /// Set the text of a text figure, bracketing the mutation with
    /// about-to-change / changed events. Unchanged text is a silent no-op.
    pub fn set_figure_text(&mut self, id: FigureId, text: &str) -> Result<(), DrawingError> {
        let index = self.index_of(id).ok_or(DrawingError::NotAMember(id))?;
        match &self.figures[index] {
            Figure::Text(f) if f.text() == text => return Ok(()),
            Figure::Text(_) => {}
            _ => return Err(DrawingError::NotATextFigure(id)),
        }
        self.events
            .push(DrawingEvent::FigureAboutToChange { figure: id });
        if let Some(f) = self.figures[index].as_text_mut() {
            f.set_text(text);
        }
        self.events.push(DrawingEvent::FigureChanged { figure: id });
        Ok(())
    }

    /// Move a figure to the front (topmost).
    pub fn bring_to_front(&mut self, id: FigureId) -> Result<(), DrawingError> {
        let index = self.index_of(id).ok_or(DrawingError::NotAMember(id))?;
        let figure = self.figures.remove(index);
        self.figures.push(figure);
        Ok(())
    }

    /// Move a figure to the back (bottommost).
    pub fn send_to_back(&mut self, id: FigureId) -> Result<(), DrawingError> {
        let index = self.index_of(id).ok_or(DrawingError::NotAMember(id))?;
        let figure = self.figures.remove(index);
        self.figures.insert(0, figure);
        Ok(())
    }

    /// Replace the z-order with `order`, which must be a permutation of the
    /// current membership. Fails before touching any state.
    pub fn reorder(&mut self, order: &[FigureId]) -> Result<(), DrawingError> {
        if order.len() != self.figures.len() {
            return Err(DrawingError::OrderMismatch);
        }
        let mut seen = std::collections::HashSet::with_capacity(order.len());
        for id in order {
            if !seen.insert(*id) {
                return Err(DrawingError::OrderMismatch);
            }
            if !self.contains(*id) {
                return Err(DrawingError::NotAMember(*id));
            }
        }
        let mut old = std::mem::take(&mut self.figures);
        let mut reordered = Vec::with_capacity(old.len());
        for id in order {
            if let Some(pos) = old.iter().position(|f| f.id() == *id) {
                reordered.push(old.remove(pos));
            }
        }
        self.figures = reordered;
        Ok(())
    }

    /// Sort a subset of ids into their current z-order (ascending index).
    /// Ids that are not members are omitted; duplicates collapse.
    pub fn sort_by_z_order(&self, ids: &[FigureId]) -> Vec<FigureId> {
        let mut indexed: Vec<(usize, FigureId)> = ids
            .iter()
            .filter_map(|id| self.index_of(*id).map(|i| (i, *id)))
            .collect();
        indexed.sort_by_key(|(i, _)| *i);
        indexed.dedup();
        indexed.into_iter().map(|(_, id)| id).collect()
    }

    /// Figures under a point, front to back.
    pub fn figures_at_point(&self, point: Point, tolerance: f64) -> Vec<FigureId> {
        self.figures
            .iter()
            .rev()
            .filter(|f| f.hit_test(point, tolerance))
            .map(Figure::id)
            .collect()
    }

    /// The frontmost figure under a point.
    pub fn top_figure_at(&self, point: Point, tolerance: f64) -> Option<FigureId> {
        self.figures
            .iter()
            .rev()
            .find(|f| f.hit_test(point, tolerance))
            .map(Figure::id)
    }

    /// The bounding box of all figures.
    pub fn bounds(&self) -> Option<Rect> {
        self.figures
            .iter()
            .map(Figure::bounds)
            .reduce(|acc, b| acc.union(b))
    }

    /// Drain the pending change notifications.
    pub fn drain_events(&mut self) -> Vec<DrawingEvent> {
        std::mem::take(&mut self.events)
    }
}
