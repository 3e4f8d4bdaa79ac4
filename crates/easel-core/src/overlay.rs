//! Floating text overlay: a transient input buffer bound to one figure.

use crate::figures::FigureId;
use kurbo::Rect;

/// Keys understood by the overlay buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayKey {
    Character(char),
    Backspace,
    Delete,
    Enter,
    Left,
    Right,
    Home,
    End,
    Escape,
}

/// Result of feeding a key to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKeyResult {
    /// The key was consumed; the buffer may have changed.
    Handled,
    /// The user asked to finish the edit.
    Commit,
    /// The overlay is detached or unfocused; the key was ignored.
    Ignored,
}

/// In-place text entry widget.
///
/// While an edit session is live the overlay is attached to exactly one
/// figure, positioned over its content area in view coordinates, and holds
/// the text being typed. It knows nothing about rendering; it is the
/// buffer the tool reads back at commit time.
#[derive(Debug, Clone)]
pub struct FloatingTextArea {
    attached_to: Option<FigureId>,
    bounds: Rect,
    buffer: String,
    /// Caret position in characters.
    cursor: usize,
    focused: bool,
}

impl Default for FloatingTextArea {
    fn default() -> Self {
        Self {
            attached_to: None,
            bounds: Rect::ZERO,
            buffer: String::new(),
            cursor: 0,
            focused: false,
        }
    }
}

impl FloatingTextArea {
    /// Create a detached overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the overlay to a figure.
    pub fn attach(&mut self, figure: FigureId) {
        self.attached_to = Some(figure);
        self.focused = false;
    }

    /// Detach the overlay and clear its buffer.
    pub fn detach(&mut self) {
        self.attached_to = None;
        self.focused = false;
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Check if the overlay is attached.
    pub fn is_attached(&self) -> bool {
        self.attached_to.is_some()
    }

    /// The figure this overlay is attached to, if any.
    pub fn attached_figure(&self) -> Option<FigureId> {
        self.attached_to
    }

    /// Position the overlay (view coordinates).
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// The overlay's position (view coordinates).
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Replace the buffer, placing the caret at the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_owned();
        self.cursor = self.buffer.chars().count();
    }

    /// The current buffer contents.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Give the overlay input focus. Ignored while detached.
    pub fn request_focus(&mut self) {
        if self.attached_to.is_some() {
            self.focused = true;
        }
    }

    /// Check if the overlay has input focus.
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Feed a key to the buffer.
    pub fn handle_key(&mut self, key: &OverlayKey) -> OverlayKeyResult {
        if self.attached_to.is_none() || !self.focused {
            return OverlayKeyResult::Ignored;
        }
        match key {
            OverlayKey::Escape => return OverlayKeyResult::Commit,
            OverlayKey::Character(c) => self.insert_char(*c),
            OverlayKey::Enter => self.insert_char('\n'),
            OverlayKey::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.buffer.remove(at);
                }
            }
            OverlayKey::Delete => {
                if self.cursor < self.char_len() {
                    let at = self.byte_offset(self.cursor);
                    self.buffer.remove(at);
                }
            }
            OverlayKey::Left => self.cursor = self.cursor.saturating_sub(1),
            OverlayKey::Right => self.cursor = (self.cursor + 1).min(self.char_len()),
            OverlayKey::Home => self.cursor = 0,
            OverlayKey::End => self.cursor = self.char_len(),
        }
        OverlayKeyResult::Handled
    }

    fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focused_overlay() -> FloatingTextArea {
        let mut overlay = FloatingTextArea::new();
        overlay.attach(FigureId::new_v4());
        overlay.request_focus();
        overlay
    }

    #[test]
    fn test_attach_detach_lifecycle() {
        let mut overlay = FloatingTextArea::new();
        assert!(!overlay.is_attached());

        let figure = FigureId::new_v4();
        overlay.attach(figure);
        assert_eq!(overlay.attached_figure(), Some(figure));
        assert!(!overlay.has_focus());

        overlay.request_focus();
        assert!(overlay.has_focus());

        overlay.set_text("left behind");
        overlay.detach();
        assert!(!overlay.is_attached());
        assert!(!overlay.has_focus());
        assert_eq!(overlay.text(), "");
    }

    #[test]
    fn test_focus_requires_attachment() {
        let mut overlay = FloatingTextArea::new();
        overlay.request_focus();
        assert!(!overlay.has_focus());
    }

    #[test]
    fn test_typing() {
        let mut overlay = focused_overlay();
        for c in "hi".chars() {
            assert_eq!(
                overlay.handle_key(&OverlayKey::Character(c)),
                OverlayKeyResult::Handled
            );
        }
        overlay.handle_key(&OverlayKey::Enter);
        overlay.handle_key(&OverlayKey::Character('!'));
        assert_eq!(overlay.text(), "hi\n!");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut overlay = focused_overlay();
        overlay.set_text("abc");

        overlay.handle_key(&OverlayKey::Backspace);
        assert_eq!(overlay.text(), "ab");

        overlay.handle_key(&OverlayKey::Home);
        overlay.handle_key(&OverlayKey::Delete);
        assert_eq!(overlay.text(), "b");

        // Backspace at the start does nothing
        overlay.handle_key(&OverlayKey::Backspace);
        assert_eq!(overlay.text(), "b");
    }

    #[test]
    fn test_cursor_movement_inserts_in_place() {
        let mut overlay = focused_overlay();
        overlay.set_text("ac");
        overlay.handle_key(&OverlayKey::Left);
        overlay.handle_key(&OverlayKey::Character('b'));
        assert_eq!(overlay.text(), "abc");

        overlay.handle_key(&OverlayKey::End);
        overlay.handle_key(&OverlayKey::Character('d'));
        assert_eq!(overlay.text(), "abcd");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut overlay = focused_overlay();
        overlay.set_text("héllo");
        overlay.handle_key(&OverlayKey::Home);
        overlay.handle_key(&OverlayKey::Right);
        overlay.handle_key(&OverlayKey::Delete);
        assert_eq!(overlay.text(), "hllo");
    }

    #[test]
    fn test_escape_commits() {
        let mut overlay = focused_overlay();
        assert_eq!(
            overlay.handle_key(&OverlayKey::Escape),
            OverlayKeyResult::Commit
        );
    }

    #[test]
    fn test_keys_ignored_when_detached_or_unfocused() {
        let mut overlay = FloatingTextArea::new();
        assert_eq!(
            overlay.handle_key(&OverlayKey::Character('x')),
            OverlayKeyResult::Ignored
        );

        overlay.attach(FigureId::new_v4());
        // Attached but not focused
        assert_eq!(
            overlay.handle_key(&OverlayKey::Character('x')),
            OverlayKeyResult::Ignored
        );
        assert_eq!(overlay.text(), "");
    }
}
