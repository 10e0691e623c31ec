use crossterm::event::KeyCode;

/// Cursor state for a short, digits-only input field.
#[derive(Debug, Clone, Default)]
pub struct NumericInputState {
    cursor_pos: usize, // Character index (0 = before first char)
}

impl NumericInputState {
    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// Handle a key press, editing `value` in place.
    /// Returns true if the text changed, false if only the cursor moved
    /// or the key was ignored. Only ASCII digits are accepted.
    pub fn handle_key(&mut self, key: KeyCode, value: &mut String, max_length: usize) -> bool {
        let char_count = value.chars().count();
        self.cursor_pos = self.cursor_pos.min(char_count);

        match key {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if char_count >= max_length {
                    return false;
                }
                value.insert(self.cursor_pos, c);
                self.cursor_pos += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor_pos > 0 {
                    value.remove(self.cursor_pos - 1);
                    self.cursor_pos -= 1;
                    true
                } else {
                    false
                }
            }
            KeyCode::Delete => {
                if self.cursor_pos < char_count {
                    value.remove(self.cursor_pos);
                    true
                } else {
                    false
                }
            }
            KeyCode::Left => {
                self.cursor_pos = self.cursor_pos.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                if self.cursor_pos < char_count {
                    self.cursor_pos += 1;
                }
                false
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                false
            }
            KeyCode::End => {
                self.cursor_pos = char_count;
                false
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_digits() {
        let mut state = NumericInputState::default();
        let mut value = String::new();
        assert!(state.handle_key(KeyCode::Char('3'), &mut value, 2));
        assert!(state.handle_key(KeyCode::Char('4'), &mut value, 2));
        assert_eq!(value, "34");
        assert_eq!(state.cursor_pos(), 2);
    }

    #[test]
    fn test_non_digits_are_rejected() {
        let mut state = NumericInputState::default();
        let mut value = String::new();
        assert!(!state.handle_key(KeyCode::Char('x'), &mut value, 2));
        assert!(!state.handle_key(KeyCode::Char('-'), &mut value, 2));
        assert!(value.is_empty());
    }

    #[test]
    fn test_max_length() {
        let mut state = NumericInputState::default();
        let mut value = "24".to_string();
        state.cursor_pos = 2;
        assert!(!state.handle_key(KeyCode::Char('9'), &mut value, 2));
        assert_eq!(value, "24");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut state = NumericInputState::default();
        let mut value = "42".to_string();
        state.cursor_pos = 2;
        assert!(state.handle_key(KeyCode::Backspace, &mut value, 2));
        assert_eq!(value, "4");

        state.handle_key(KeyCode::Home, &mut value, 2);
        assert!(state.handle_key(KeyCode::Delete, &mut value, 2));
        assert!(value.is_empty());
        assert!(!state.handle_key(KeyCode::Backspace, &mut value, 2));
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut state = NumericInputState::default();
        let mut value = "17".to_string();
        state.cursor_pos = 2;
        state.handle_key(KeyCode::Left, &mut value, 3);
        state.handle_key(KeyCode::Char('0'), &mut value, 3);
        assert_eq!(value, "107");
    }
}
