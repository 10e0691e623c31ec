use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::tui::{Command, Theme};

/// The main trait a TUI app implements.
///
/// This follows the Elm architecture:
/// - State: data representing the app's current state
/// - Msg: events/actions that can happen
/// - handle_key: pure mapping from a key press to a message
/// - update: pure function that handles messages and returns commands
/// - view: renders the current state
pub trait App: Sized + Send + 'static {
    /// The app's state type
    type State: Default + Send;

    /// The app's message type
    type Msg: Send + 'static;

    /// Initialize the app with a command
    fn init() -> (Self::State, Command<Self::Msg>) {
        (Self::State::default(), Command::None)
    }

    /// Map a key press to a message, based on the current state.
    /// Returning None means the key is ignored.
    fn handle_key(state: &Self::State, key: KeyEvent) -> Option<Self::Msg>;

    /// Update the state based on a message and return a command
    fn update(state: &mut Self::State, msg: Self::Msg) -> Command<Self::Msg>;

    /// Render the current state
    fn view(state: &Self::State, frame: &mut Frame, theme: &Theme);

    /// The app's title
    fn title() -> &'static str;
}
