//! Reversible edit records and the undo history.

use crate::arrange::ArrangeDirection;
use crate::drawing::{Drawing, DrawingError};
use crate::figures::{Figure, FigureId};

/// Maximum number of edit records kept in the history.
const MAX_UNDO_HISTORY: usize = 50;

/// A reversible description of a single user-visible change.
///
/// Records are plain values: applying one mutates a drawing, and
/// [`EditRecord::inverted`] yields the record that puts it back.
#[derive(Debug, Clone)]
pub enum EditRecord {
    /// Z-order rearrangement of a figure subset. Captures the full order
    /// on both sides so undo restores exactly the pre-operation order.
    Arrange {
        direction: ArrangeDirection,
        targets: Vec<FigureId>,
        order_before: Vec<FigureId>,
        order_after: Vec<FigureId>,
    },
    /// Text content change on a text figure.
    TextChange {
        figure: FigureId,
        old_text: String,
        new_text: String,
    },
    /// Removal of a figure from the drawing.
    RemoveFigure { figure: Box<Figure>, index: usize },
    /// Insertion of a figure into the drawing.
    InsertFigure { figure: Box<Figure>, index: usize },
}

impl EditRecord {
    /// Human-readable label for menus and history displays.
    pub fn label(&self) -> &'static str {
        match self {
            EditRecord::Arrange {
                direction: ArrangeDirection::Front,
                ..
            } => "Bring to Front",
            EditRecord::Arrange {
                direction: ArrangeDirection::Back,
                ..
            } => "Send to Back",
            EditRecord::TextChange { .. } => "Edit Text",
            EditRecord::RemoveFigure { .. } => "Delete Figure",
            EditRecord::InsertFigure { .. } => "Insert Figure",
        }
    }

    /// Apply this record to the drawing (the redo direction).
    pub fn apply(&self, drawing: &mut Drawing) -> Result<(), DrawingError> {
        match self {
            EditRecord::Arrange { order_after, .. } => drawing.reorder(order_after),
            EditRecord::TextChange {
                figure, new_text, ..
            } => drawing.set_figure_text(*figure, new_text),
            EditRecord::RemoveFigure { figure, .. } => drawing.remove(figure.id()).map(|_| ()),
            EditRecord::InsertFigure { figure, index } => {
                drawing.insert(*index, (**figure).clone())
            }
        }
    }

    /// The record that undoes this one.
    pub fn inverted(&self) -> EditRecord {
        match self {
            EditRecord::Arrange {
                direction,
                targets,
                order_before,
                order_after,
            } => EditRecord::Arrange {
                direction: direction.opposite(),
                targets: targets.clone(),
                order_before: order_after.clone(),
                order_after: order_before.clone(),
            },
            EditRecord::TextChange {
                figure,
                old_text,
                new_text,
            } => EditRecord::TextChange {
                figure: *figure,
                old_text: new_text.clone(),
                new_text: old_text.clone(),
            },
            EditRecord::RemoveFigure { figure, index } => EditRecord::InsertFigure {
                figure: figure.clone(),
                index: *index,
            },
            EditRecord::InsertFigure { figure, index } => EditRecord::RemoveFigure {
                figure: figure.clone(),
                index: *index,
            },
        }
    }
}

/// Bounded undo/redo history over [`EditRecord`]s.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    undo_stack: Vec<EditRecord>,
    redo_stack: Vec<EditRecord>,
}

impl UndoHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit that was just applied. Clears the redo stack.
    pub fn record(&mut self, record: EditRecord) {
        log::debug!("record edit: {}", record.label());
        self.undo_stack.push(record);
        self.redo_stack.clear();
        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the most recent edit.
    /// Returns true if an edit was undone, false if the history was empty.
    pub fn undo(&mut self, drawing: &mut Drawing) -> Result<bool, DrawingError> {
        let Some(record) = self.undo_stack.pop() else {
            return Ok(false);
        };
        log::debug!("undo: {}", record.label());
        if let Err(err) = record.inverted().apply(drawing) {
            self.undo_stack.push(record);
            return Err(err);
        }
        self.redo_stack.push(record);
        Ok(true)
    }

    /// Redo the most recently undone edit.
    /// Returns true if an edit was redone, false if there was nothing to redo.
    pub fn redo(&mut self, drawing: &mut Drawing) -> Result<bool, DrawingError> {
        let Some(record) = self.redo_stack.pop() else {
            return Ok(false);
        };
        log::debug!("redo: {}", record.label());
        if let Err(err) = record.apply(drawing) {
            self.redo_stack.push(record);
            return Err(err);
        }
        self.undo_stack.push(record);
        Ok(true)
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Label of the edit `undo` would revert.
    pub fn undo_label(&self) -> Option<&'static str> {
        self.undo_stack.last().map(EditRecord::label)
    }

    /// Label of the edit `redo` would re-apply.
    pub fn redo_label(&self) -> Option<&'static str> {
        self.redo_stack.last().map(EditRecord::label)
    }
}
