use crate::input::{KeyboardModifiers, TextEvent};

/// Cursor/selection controller over a mutable text buffer. Indices are in
/// chars; conversion to byte offsets happens at the edit itself. The caller
/// gates calls on focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextCaret {
    cursor: usize,
    selection_anchor: Option<usize>,
}

impl TextCaret {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Active selection as an ordered (start, end) char range, if any.
    pub fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.selection_anchor?;
        if anchor == self.cursor {
            return None;
        }
        Some((anchor.min(self.cursor), anchor.max(self.cursor)))
    }

    pub fn clear_selection(&mut self) {
        self.selection_anchor = None;
    }

    pub fn move_to_end(&mut self, text: &str) {
        self.cursor = text.chars().count();
        self.selection_anchor = None;
    }

    pub fn apply(&mut self, event: TextEvent, modifiers: KeyboardModifiers, text: &mut String) {
        let len = text.chars().count();
        self.cursor = self.cursor.min(len);

        match event {
            TextEvent::Left => {
                self.begin_or_clear_selection(modifiers.shift);
                self.cursor = self.cursor.saturating_sub(1);
            }
            TextEvent::Right => {
                self.begin_or_clear_selection(modifiers.shift);
                self.cursor = (self.cursor + 1).min(len);
            }
            TextEvent::Home => {
                self.begin_or_clear_selection(modifiers.shift);
                self.cursor = 0;
            }
            TextEvent::End => {
                self.begin_or_clear_selection(modifiers.shift);
                self.cursor = len;
            }
            TextEvent::Backspace => {
                if let Some((start, end)) = self.selection() {
                    remove_char_range(text, start, end);
                    self.cursor = start;
                } else if self.cursor > 0 {
                    remove_char_range(text, self.cursor - 1, self.cursor);
                    self.cursor -= 1;
                }
                self.selection_anchor = None;
            }
            TextEvent::Delete => {
                if let Some((start, end)) = self.selection() {
                    remove_char_range(text, start, end);
                    self.cursor = start;
                } else if self.cursor < len {
                    remove_char_range(text, self.cursor, self.cursor + 1);
                }
                self.selection_anchor = None;
            }
            TextEvent::Char(c) => {
                if let Some((start, end)) = self.selection() {
                    remove_char_range(text, start, end);
                    self.cursor = start;
                }
                let at = byte_offset(text, self.cursor);
                text.insert(at, c);
                self.cursor += 1;
                self.selection_anchor = None;
            }
        }
    }

    fn begin_or_clear_selection(&mut self, shift: bool) {
        if shift {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.cursor);
            }
        } else {
            self.selection_anchor = None;
        }
    }
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

fn remove_char_range(text: &mut String, start: usize, end: usize) {
    let start_b = byte_offset(text, start);
    let end_b = byte_offset(text, end);
    text.replace_range(start_b..end_b, "");
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIFT: KeyboardModifiers = KeyboardModifiers {
        shift: true,
        control: false,
    };
    const NONE: KeyboardModifiers = KeyboardModifiers {
        shift: false,
        control: false,
    };

    #[test]
    fn typing_advances_the_cursor() {
        let mut caret = TextCaret::new();
        let mut text = String::new();
        for c in "hi".chars() {
            caret.apply(TextEvent::Char(c), NONE, &mut text);
        }
        assert_eq!(text, "hi");
        assert_eq!(caret.cursor(), 2);
    }

    #[test]
    fn backspace_deletes_one_before_cursor() {
        let mut caret = TextCaret::new();
        let mut text = String::from("abc");
        caret.move_to_end(&text);
        caret.apply(TextEvent::Left, NONE, &mut text);
        caret.apply(TextEvent::Backspace, NONE, &mut text);
        assert_eq!(text, "ac");
        assert_eq!(caret.cursor(), 1);
    }

    #[test]
    fn shift_navigation_selects_and_char_replaces_selection() {
        let mut caret = TextCaret::new();
        let mut text = String::from("abcd");
        caret.move_to_end(&text);
        caret.apply(TextEvent::Left, SHIFT, &mut text);
        caret.apply(TextEvent::Left, SHIFT, &mut text);
        assert_eq!(caret.selection(), Some((2, 4)));
        caret.apply(TextEvent::Char('X'), NONE, &mut text);
        assert_eq!(text, "abX");
        assert_eq!(caret.cursor(), 3);
        assert_eq!(caret.selection(), None);
    }

    #[test]
    fn arrows_clamp_to_buffer_bounds() {
        let mut caret = TextCaret::new();
        let mut text = String::from("a");
        caret.apply(TextEvent::Left, NONE, &mut text);
        assert_eq!(caret.cursor(), 0);
        caret.apply(TextEvent::Right, NONE, &mut text);
        caret.apply(TextEvent::Right, NONE, &mut text);
        assert_eq!(caret.cursor(), 1);
    }

    #[test]
    fn backspace_removes_active_selection() {
        let mut caret = TextCaret::new();
        let mut text = String::from("hello");
        caret.apply(TextEvent::Right, SHIFT, &mut text);
        caret.apply(TextEvent::Right, SHIFT, &mut text);
        assert_eq!(caret.selection(), Some((0, 2)));
        caret.apply(TextEvent::Backspace, NONE, &mut text);
        assert_eq!(text, "llo");
        assert_eq!(caret.cursor(), 0);
    }

    #[test]
    fn multibyte_text_edits_at_char_boundaries() {
        let mut caret = TextCaret::new();
        let mut text = String::from("héllo");
        caret.apply(TextEvent::Right, NONE, &mut text);
        caret.apply(TextEvent::Right, NONE, &mut text);
        caret.apply(TextEvent::Backspace, NONE, &mut text);
        assert_eq!(text, "hllo");
    }
}
