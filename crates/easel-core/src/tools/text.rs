//! Text creation and editing tool.

use super::CursorKind;
use crate::drawing::{Drawing, DrawingError};
use crate::figures::{Figure, FigureId, FigureTrait, TextFigure};
use crate::input::{MouseButton, PointerEvent};
use crate::overlay::{FloatingTextArea, OverlayKey, OverlayKeyResult};
use crate::undo::{EditRecord, UndoHistory};
use crate::view::DrawingView;
use kurbo::{Point, Rect};

/// Extra room the overlay gets around the figure's content area, so the
/// caret and trailing characters stay visible while typing.
const FIELD_LEFT: f64 = 1.0;
const FIELD_TOP: f64 = 2.0;
const FIELD_RIGHT: f64 = 17.0;
const FIELD_BOTTOM: f64 = 2.0;

/// One live editing binding between the tool and a figure.
#[derive(Debug, Clone)]
pub struct EditSession {
    target: FigureId,
    original_text: String,
    created: bool,
}

impl EditSession {
    /// The figure bound to this session.
    pub fn target(&self) -> FigureId {
        self.target
    }

    /// Whether the target figure was created by this session.
    pub fn was_created(&self) -> bool {
        self.created
    }
}

/// Tool that creates new text figures or edits existing ones in place.
///
/// Pressing on empty canvas clones the prototype figure, inserts it at the
/// gesture point, selects it, and opens an edit session on it. Pressing on
/// an existing text figure opens a session on that figure instead.
/// Pressing while a session is live commits it. The tool is long-lived and
/// cycles between idle and editing indefinitely; the `Option<EditSession>`
/// it holds is the single source of truth for "is editing".
#[derive(Debug)]
pub struct TextTool {
    prototype: TextFigure,
    overlay: FloatingTextArea,
    session: Option<EditSession>,
    done_after_creation: bool,
    done: bool,
}

impl TextTool {
    /// Create a tool that instantiates new figures from `prototype`.
    pub fn new(prototype: TextFigure) -> Self {
        Self {
            prototype,
            overlay: FloatingTextArea::new(),
            session: None,
            done_after_creation: false,
            done: false,
        }
    }

    /// Configure the tool to report completion after one commit.
    pub fn done_after_creation(mut self, done_after_creation: bool) -> Self {
        self.done_after_creation = done_after_creation;
        self
    }

    /// Check if an edit session is live.
    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    /// The figure currently bound for editing, if any.
    pub fn typing_target(&self) -> Option<FigureId> {
        self.session.as_ref().map(EditSession::target)
    }

    /// The live edit session, if any.
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// The tool's overlay widget.
    pub fn overlay(&self) -> &FloatingTextArea {
        &self.overlay
    }

    /// Mutable access to the overlay, for hosts feeding it text directly.
    pub fn overlay_mut(&mut self) -> &mut FloatingTextArea {
        &mut self.overlay
    }

    /// The cursor the host should show.
    pub fn cursor(&self) -> CursorKind {
        if self.is_editing() {
            CursorKind::Default
        } else {
            CursorKind::Crosshair
        }
    }

    /// Check if the tool has signalled completion to its host.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Re-arm the tool after the host observed completion.
    pub fn activate(&mut self) {
        self.done = false;
    }

    /// Commit any pending session; called when the host switches tools.
    pub fn deactivate(
        &mut self,
        drawing: &mut Drawing,
        view: &mut DrawingView,
        history: &mut UndoHistory,
    ) -> Result<(), DrawingError> {
        self.end_edit(drawing, view, history)
    }

    /// Route a pointer event to the tool.
    pub fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        drawing: &mut Drawing,
        view: &mut DrawingView,
        history: &mut UndoHistory,
    ) -> Result<(), DrawingError> {
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => self.handle_press(*position, drawing, view, history),
            _ => Ok(()),
        }
    }

    /// Route a key to the overlay. Returns true when the key was consumed.
    pub fn handle_key(
        &mut self,
        key: &OverlayKey,
        drawing: &mut Drawing,
        view: &mut DrawingView,
        history: &mut UndoHistory,
    ) -> Result<bool, DrawingError> {
        if self.session.is_none() {
            return Ok(false);
        }
        match self.overlay.handle_key(key) {
            OverlayKeyResult::Commit => {
                self.end_edit(drawing, view, history)?;
                if self.done_after_creation {
                    self.done = true;
                }
                Ok(true)
            }
            OverlayKeyResult::Handled => Ok(true),
            OverlayKeyResult::Ignored => Ok(false),
        }
    }

    fn handle_press(
        &mut self,
        view_point: Point,
        drawing: &mut Drawing,
        view: &mut DrawingView,
        history: &mut UndoHistory,
    ) -> Result<(), DrawingError> {
        // A press while editing only commits; the next press starts the
        // next gesture.
        if self.session.is_some() {
            self.end_edit(drawing, view, history)?;
            if self.done_after_creation {
                self.done = true;
            }
            return Ok(());
        }

        match view.hit_test(drawing, view_point) {
            Some(id) if drawing.figure(id).is_some_and(Figure::is_text) => {
                self.begin_edit(id, drawing, view, history)
            }
            _ => {
                let world = view.view_to_world(view_point);
                let figure = self.prototype.instantiate_at(world);
                let id = figure.id();
                drawing.add(Figure::Text(figure))?;
                view.select(id);
                log::debug!("created text figure {id} at ({:.1}, {:.1})", world.x, world.y);
                self.start_session(id, true, drawing, view)
            }
        }
    }

    /// Begin (or switch) an edit session on `figure`.
    ///
    /// A live session on a different figure is committed first; a session
    /// already bound to `figure` is left untouched.
    pub fn begin_edit(
        &mut self,
        figure: FigureId,
        drawing: &mut Drawing,
        view: &mut DrawingView,
        history: &mut UndoHistory,
    ) -> Result<(), DrawingError> {
        if self.typing_target() == Some(figure) {
            return Ok(());
        }
        if self.session.is_some() {
            self.end_edit(drawing, view, history)?;
        }
        self.start_session(figure, false, drawing, view)
    }

    fn start_session(
        &mut self,
        figure: FigureId,
        created: bool,
        drawing: &Drawing,
        view: &DrawingView,
    ) -> Result<(), DrawingError> {
        let text_figure = match drawing.figure(figure) {
            Some(Figure::Text(f)) => f,
            Some(_) => return Err(DrawingError::NotATextFigure(figure)),
            None => return Err(DrawingError::NotAMember(figure)),
        };
        let text = text_figure.text().to_owned();

        self.overlay.attach(figure);
        self.overlay.set_bounds(field_bounds(text_figure, view));
        self.overlay.set_text(&text);
        self.overlay.request_focus();
        self.session = Some(EditSession {
            target: figure,
            original_text: text,
            created,
        });
        log::debug!("edit session started on {figure} (created: {created})");
        Ok(())
    }

    /// End the live session, committing the overlay's buffer.
    /// Without a session this is a silent no-op.
    pub fn end_edit(
        &mut self,
        drawing: &mut Drawing,
        view: &mut DrawingView,
        history: &mut UndoHistory,
    ) -> Result<(), DrawingError> {
        let Some(session) = self.session.take() else {
            return Ok(());
        };
        let result = self.commit(session, drawing, view, history);
        // The overlay is released on every path out of an edit session.
        self.overlay.detach();
        result
    }

    fn commit(
        &mut self,
        session: EditSession,
        drawing: &mut Drawing,
        view: &mut DrawingView,
        history: &mut UndoHistory,
    ) -> Result<(), DrawingError> {
        let new_text = self.overlay.text().to_owned();
        let EditSession {
            target,
            original_text: old_text,
            created,
        } = session;

        if !new_text.is_empty() {
            if new_text != old_text {
                drawing.set_figure_text(target, &new_text)?;
                history.record(EditRecord::TextChange {
                    figure: target,
                    old_text,
                    new_text,
                });
            }
        } else if created {
            // An empty just-created figure is discarded, not kept
            let index = drawing
                .index_of(target)
                .ok_or(DrawingError::NotAMember(target))?;
            let figure = drawing.remove(target)?;
            view.deselect(target);
            log::debug!("discarded empty text figure {target}");
            history.record(EditRecord::RemoveFigure {
                figure: Box::new(figure),
                index,
            });
        } else if !old_text.is_empty() {
            drawing.set_figure_text(target, "")?;
            history.record(EditRecord::TextChange {
                figure: target,
                old_text,
                new_text,
            });
        }
        Ok(())
    }
}

/// Overlay placement: the figure's content area with editing padding, in
/// view coordinates.
fn field_bounds(figure: &TextFigure, view: &DrawingView) -> Rect {
    let content = figure.content_area();
    let padded = Rect::new(
        content.x0 - FIELD_LEFT,
        content.y0 - FIELD_TOP,
        content.x1 + FIELD_RIGHT,
        content.y1 + FIELD_BOTTOM,
    );
    view.world_rect_to_view(padded)
}
