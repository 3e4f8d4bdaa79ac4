//! Easel core library
//!
//! Platform-agnostic core of a structured drawing editor: the figure model,
//! the z-ordered drawing container, undoable arrangement and text-editing
//! operations, and the tool state machine that drives them from input
//! events.

pub mod actions;
pub mod arrange;
pub mod camera;
pub mod drawing;
pub mod figures;
pub mod input;
pub mod overlay;
pub mod tools;
pub mod undo;
pub mod view;

pub use actions::{ActionConfig, ActionKind, ArrangeAction, Shortcut};
pub use arrange::{ArrangeDirection, arrange};
pub use camera::Camera;
pub use drawing::{Drawing, DrawingError, DrawingEvent};
pub use figures::{
    EllipseFigure, Figure, FigureId, FigureStyle, FigureTrait, RectangleFigure, Rgba, TextFigure,
};
pub use input::{Modifiers, MouseButton, PointerEvent};
pub use overlay::{FloatingTextArea, OverlayKey, OverlayKeyResult};
pub use tools::{CursorKind, EditSession, TextTool};
pub use undo::{EditRecord, UndoHistory};
pub use view::DrawingView;
