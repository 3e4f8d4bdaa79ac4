//! Undoable z-order actions over the current selection.

use crate::arrange::{ArrangeDirection, arrange};
use crate::drawing::{Drawing, DrawingError};
use crate::input::Modifiers;
use crate::undo::{EditRecord, UndoHistory};
use crate::view::DrawingView;

/// A keyboard shortcut definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
}

impl Shortcut {
    pub const fn new(key: &'static str, ctrl: bool, shift: bool) -> Self {
        Self { key, ctrl, shift }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Shift+F").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    /// Check whether a key press with the given modifiers triggers this
    /// shortcut. Keys are compared case-insensitively.
    pub fn matches(&self, key: &str, modifiers: Modifiers) -> bool {
        self.key.eq_ignore_ascii_case(key) && self.ctrl == modifiers.ctrl && self.shift == modifiers.shift
    }
}

/// The arrangement actions offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    BringToFront,
    SendToBack,
}

/// Static configuration for an action: display label, shortcut, and the
/// predicate deciding whether the action is currently enabled.
#[derive(Debug, Clone, Copy)]
pub struct ActionConfig {
    pub label: &'static str,
    pub shortcut: Shortcut,
    pub enabled: fn(&DrawingView) -> bool,
}

fn has_selection(view: &DrawingView) -> bool {
    !view.selection().is_empty()
}

impl ActionKind {
    /// Resolve the static configuration for this action kind.
    pub const fn config(self) -> ActionConfig {
        match self {
            ActionKind::BringToFront => ActionConfig {
                label: "Bring to Front",
                shortcut: Shortcut::new("F", true, true),
                enabled: has_selection,
            },
            ActionKind::SendToBack => ActionConfig {
                label: "Send to Back",
                shortcut: Shortcut::new("B", true, true),
                enabled: has_selection,
            },
        }
    }

    /// The arrangement direction this action applies.
    pub const fn direction(self) -> ArrangeDirection {
        match self {
            ActionKind::BringToFront => ArrangeDirection::Front,
            ActionKind::SendToBack => ArrangeDirection::Back,
        }
    }
}

/// An arrangement action over a drawing view's selection.
#[derive(Debug, Clone)]
pub struct ArrangeAction {
    kind: ActionKind,
    config: ActionConfig,
}

impl ArrangeAction {
    /// Create the action, resolving its configuration up front.
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            config: kind.config(),
        }
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.config.label
    }

    pub fn shortcut(&self) -> Shortcut {
        self.config.shortcut
    }

    /// Check if the action applies to the view's current state.
    pub fn is_enabled(&self, view: &DrawingView) -> bool {
        (self.config.enabled)(view)
    }

    /// Arrange the view's selection and record a reversible edit.
    ///
    /// A disabled action, an empty selection, and an arrangement that
    /// leaves the z-order unchanged are all silent no-ops that record
    /// nothing.
    pub fn perform(
        &self,
        drawing: &mut Drawing,
        view: &DrawingView,
        history: &mut UndoHistory,
    ) -> Result<(), DrawingError> {
        if !self.is_enabled(view) {
            return Ok(());
        }
        let direction = self.kind.direction();
        let targets = view.selection().to_vec();
        let order_before = drawing.figure_ids();

        arrange(drawing, &targets, direction)?;

        let order_after = drawing.figure_ids();
        if order_after == order_before {
            return Ok(());
        }
        log::debug!("{}: {} figure(s)", self.label(), targets.len());
        history.record(EditRecord::Arrange {
            direction,
            targets,
            order_before,
            order_after,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figures::{Figure, FigureId, RectangleFigure};
    use kurbo::Point;

    fn drawing_with(n: usize) -> (Drawing, Vec<FigureId>) {
        let mut drawing = Drawing::new();
        let ids = (0..n)
            .map(|i| {
                drawing
                    .add(Figure::Rectangle(RectangleFigure::new(
                        Point::new(i as f64 * 10.0, 0.0),
                        50.0,
                        50.0,
                    )))
                    .unwrap()
            })
            .collect();
        (drawing, ids)
    }

    #[test]
    fn test_config_is_static() {
        let bring = ArrangeAction::new(ActionKind::BringToFront);
        assert_eq!(bring.label(), "Bring to Front");
        assert_eq!(bring.shortcut().format(), "Ctrl+Shift+F");

        let send = ArrangeAction::new(ActionKind::SendToBack);
        assert_eq!(send.label(), "Send to Back");
        assert_eq!(send.shortcut().format(), "Ctrl+Shift+B");
    }

    #[test]
    fn test_shortcut_matching() {
        let shortcut = ArrangeAction::new(ActionKind::BringToFront).shortcut();
        let chord = Modifiers {
            ctrl: true,
            shift: true,
            ..Modifiers::default()
        };
        assert!(shortcut.matches("f", chord));
        assert!(shortcut.matches("F", chord));
        assert!(!shortcut.matches("f", Modifiers::default()));
        assert!(!shortcut.matches("b", chord));
    }

    #[test]
    fn test_enabled_tracks_selection() {
        let (_, ids) = drawing_with(1);
        let mut view = DrawingView::new();
        let action = ArrangeAction::new(ActionKind::BringToFront);

        assert!(!action.is_enabled(&view));
        view.select(ids[0]);
        assert!(action.is_enabled(&view));
    }

    #[test]
    fn test_perform_and_undo() {
        let (mut drawing, ids) = drawing_with(3);
        let mut view = DrawingView::new();
        let mut history = UndoHistory::new();
        view.select(ids[1]);

        let action = ArrangeAction::new(ActionKind::BringToFront);
        action.perform(&mut drawing, &view, &mut history).unwrap();
        assert_eq!(drawing.figure_ids(), vec![ids[0], ids[2], ids[1]]);
        assert_eq!(history.undo_label(), Some("Bring to Front"));

        history.undo(&mut drawing).unwrap();
        assert_eq!(drawing.figure_ids(), ids);

        history.redo(&mut drawing).unwrap();
        assert_eq!(drawing.figure_ids(), vec![ids[0], ids[2], ids[1]]);
    }

    #[test]
    fn test_empty_selection_records_nothing() {
        let (mut drawing, ids) = drawing_with(2);
        let view = DrawingView::new();
        let mut history = UndoHistory::new();

        ArrangeAction::new(ActionKind::SendToBack)
            .perform(&mut drawing, &view, &mut history)
            .unwrap();
        assert_eq!(drawing.figure_ids(), ids);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_noop_arrangement_records_nothing() {
        let (mut drawing, ids) = drawing_with(2);
        let mut view = DrawingView::new();
        let mut history = UndoHistory::new();
        view.select(ids[1]);

        // Already at the front
        ArrangeAction::new(ActionKind::BringToFront)
            .perform(&mut drawing, &view, &mut history)
            .unwrap();
        assert_eq!(drawing.figure_ids(), ids);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_stale_selection_rejected() {
        let (mut drawing, ids) = drawing_with(2);
        let mut view = DrawingView::new();
        let mut history = UndoHistory::new();
        view.select(ids[0]);
        drawing.remove(ids[0]).unwrap();

        let result = ArrangeAction::new(ActionKind::BringToFront).perform(
            &mut drawing,
            &view,
            &mut history,
        );
        assert_eq!(result, Err(DrawingError::NotAMember(ids[0])));
        assert!(!history.can_undo());
    }
}
