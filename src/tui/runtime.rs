use std::future::Future;
use std::io;
use std::pin::Pin;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::{FutureExt, StreamExt, stream::FuturesUnordered};
use log::info;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

use crate::tui::{App, Command, Theme};

/// The runtime owns the app state and executes returned commands.
pub struct Runtime<A: App> {
    state: A::State,
    pending: FuturesUnordered<Pin<Box<dyn Future<Output = A::Msg> + Send>>>,
    should_quit: bool,
}

impl<A: App> Runtime<A> {
    pub fn new() -> Self {
        let (state, init_command) = A::init();
        let mut runtime = Self {
            state,
            pending: FuturesUnordered::new(),
            should_quit: false,
        };
        runtime.apply(init_command);
        runtime
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    fn apply(&mut self, command: Command<A::Msg>) {
        match command {
            Command::None => {}
            Command::Batch(commands) => {
                for command in commands {
                    self.apply(command);
                }
            }
            Command::Perform(future) => self.pending.push(future),
            Command::Quit => self.should_quit = true,
        }
    }

    fn dispatch(&mut self, msg: A::Msg) {
        let command = A::update(&mut self.state, msg);
        self.apply(command);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if let Some(msg) = A::handle_key(&self.state, key) {
            self.dispatch(msg);
        }
    }

    /// Dispatch every async result that is already ready, without blocking.
    fn poll_async(&mut self) {
        while let Some(Some(msg)) = self.pending.next().now_or_never() {
            self.dispatch(msg);
        }
    }
}

/// Set up the terminal, run the app's event loop, and restore the terminal
/// on all exit paths.
pub async fn run<A: App>() -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::new(crate::global_config().theme);
    let mut runtime = Runtime::<A>::new();
    let result = event_loop(&mut terminal, &mut runtime, &theme).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop<A: App, B: Backend>(
    terminal: &mut Terminal<B>,
    runtime: &mut Runtime<A>,
    theme: &Theme,
) -> Result<()> {
    info!("Entering TUI event loop for {}", A::title());

    loop {
        let frame_start = Instant::now();

        // Process all pending events first for minimal input latency
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    runtime.request_quit();
                    continue;
                }
                runtime.handle_key(key);
            }
        }

        // Collect results of settled async commands
        runtime.poll_async();

        if runtime.should_quit {
            break;
        }

        terminal.draw(|frame| A::view(&runtime.state, frame, theme))?;

        // Sleep for the remainder of a 16ms frame (60 FPS)
        let elapsed = frame_start.elapsed();
        if let Some(remaining) = Duration::from_millis(16).checked_sub(elapsed) {
            tokio::time::sleep(remaining).await;
        }
    }

    info!("Leaving TUI event loop");
    Ok(())
}
