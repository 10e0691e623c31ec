use crossterm::event::KeyCode;

/// Manages popup state for a select field.
///
/// The chosen value itself lives in the form state; this only tracks
/// whether the dropdown is open and which option is highlighted.
#[derive(Debug, Clone, Default)]
pub struct SelectState {
    is_open: bool,
    highlight: usize,
}

impl SelectState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn highlighted(&self) -> usize {
        self.highlight
    }

    pub fn open_at(&mut self, index: usize) {
        self.is_open = true;
        self.highlight = index;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Handle a key press while the field is focused.
    ///
    /// `current` is the index of the currently chosen option, if any;
    /// `count` is the number of options. Returns `Some(index)` when the key
    /// resulted in a selection.
    pub fn handle_key(
        &mut self,
        key: KeyCode,
        current: Option<usize>,
        count: usize,
    ) -> Option<usize> {
        if count == 0 {
            return None;
        }

        if self.is_open {
            match key {
                KeyCode::Up => {
                    self.highlight = if self.highlight == 0 {
                        count - 1
                    } else {
                        self.highlight - 1
                    };
                    None
                }
                KeyCode::Down => {
                    self.highlight = (self.highlight + 1) % count;
                    None
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.is_open = false;
                    Some(self.highlight.min(count - 1))
                }
                KeyCode::Esc => {
                    self.is_open = false;
                    None
                }
                _ => None,
            }
        } else {
            match key {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.open_at(current.unwrap_or(0));
                    None
                }
                // Cycle directly without opening the dropdown
                KeyCode::Right => Some(current.map_or(0, |i| (i + 1) % count)),
                KeyCode::Left => Some(current.map_or(0, |i| (i + count - 1) % count)),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_select() {
        let mut state = SelectState::default();
        assert!(state.handle_key(KeyCode::Enter, None, 3).is_none());
        assert!(state.is_open());
        assert_eq!(state.highlighted(), 0);

        state.handle_key(KeyCode::Down, None, 3);
        assert_eq!(state.highlighted(), 1);
        assert_eq!(state.handle_key(KeyCode::Enter, None, 3), Some(1));
        assert!(!state.is_open());
    }

    #[test]
    fn test_highlight_wraps() {
        let mut state = SelectState::default();
        state.open_at(0);
        state.handle_key(KeyCode::Up, None, 3);
        assert_eq!(state.highlighted(), 2);
        state.handle_key(KeyCode::Down, None, 3);
        assert_eq!(state.highlighted(), 0);
    }

    #[test]
    fn test_esc_closes_without_selecting() {
        let mut state = SelectState::default();
        state.open_at(1);
        assert!(state.handle_key(KeyCode::Esc, Some(0), 3).is_none());
        assert!(!state.is_open());
    }

    #[test]
    fn test_cycle_when_closed() {
        let mut state = SelectState::default();
        // Unset field: first cycle picks the first option
        assert_eq!(state.handle_key(KeyCode::Right, None, 3), Some(0));
        assert_eq!(state.handle_key(KeyCode::Right, Some(2), 3), Some(0));
        assert_eq!(state.handle_key(KeyCode::Left, Some(0), 3), Some(2));
        assert!(!state.is_open());
    }

    #[test]
    fn test_empty_options_are_inert() {
        let mut state = SelectState::default();
        assert!(state.handle_key(KeyCode::Enter, None, 0).is_none());
        assert!(!state.is_open());
    }
}
