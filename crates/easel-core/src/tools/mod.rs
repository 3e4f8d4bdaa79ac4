//! Tools that interpret input gestures into drawing edits.

mod text;

pub use text::{EditSession, TextTool};

/// Cursor feedback the host should show for the active tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKind {
    /// Normal pointer; shown while an edit session is live.
    Default,
    /// Crosshair; shown when the next press would create or pick a figure.
    Crosshair,
}
