//! TUI module for perfect-pitch
//!
//! Draws whichever screen the round is on and turns key presses into intents.

mod game;
mod game_over;
mod score_bar;
mod welcome;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyEventKind};
use perfect_pitch::{
    audio::SoundPlayer,
    game::{RoundController, RoundState},
    score::ScoreStore,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::Consumer;
use std::time::Duration;

use crate::app::{App, Screen};

/// Snapshots buffered between frames; Init alone publishes two
const STATE_QUEUE_SIZE: usize = 32;

pub type Controller = RoundController<Box<dyn ScoreStore>, Box<dyn SoundPlayer>>;

/// UI application state
pub struct UiApp {
    controller: Controller,
    /// Ring buffer receiver for state snapshots
    state_rx: Consumer<RoundState>,
    /// Current round state (latest received)
    current_state: RoundState,
    app: App,
}

impl UiApp {
    pub fn new(mut controller: Controller) -> Self {
        let state_rx = controller.subscribe(STATE_QUEUE_SIZE);
        let current_state = controller.state().clone();
        Self {
            controller,
            state_rx,
            current_state,
            app: App::new(),
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.app.should_quit() {
            self.poll_state();

            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(intent) = self.app.handle_key(key.code, &self.current_state) {
                            self.controller.handle_intent(intent);
                        }
                    }
                }
            }
        }

        self.controller.release();
        Ok(())
    }

    /// Poll for state updates from ring buffer
    fn poll_state(&mut self) {
        // Keep only the latest state
        while let Ok(state) = self.state_rx.pop() {
            self.current_state = state;
        }
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),    // Screen
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        let screen = self.app.screen(&self.current_state);
        match screen {
            Screen::Welcome => welcome::render_welcome(frame, chunks[0], &self.current_state),
            Screen::Game => {
                game::render_game(frame, chunks[0], &self.current_state, self.app.selected())
            }
            Screen::GameOver => game_over::render_game_over(frame, chunks[0], &self.current_state),
        }

        let help = match screen {
            Screen::Welcome => " [Enter] Start  [Q] Quit",
            Screen::Game if self.current_state.feedback.is_some() => {
                " [Enter] Continue  [Space] Replay  [R] Reset  [Q] Quit"
            }
            Screen::Game => " [Space] Play note  [1-3/↑↓+Enter] Answer  [R] Reset  [Q] Quit",
            Screen::GameOver => " [Enter] Play again  [Q] Quit",
        };
        frame.render_widget(
            Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
            chunks[1],
        );
    }
}
