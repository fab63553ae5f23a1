//! Screen navigation and key mapping
//!
//! Kept free of terminal and audio types so the key handling can be tested
//! against plain `RoundState` values.

use crossterm::event::KeyCode;
use perfect_pitch::game::{GameIntent, RoundState};

/// Which of the three screens is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Game,
    GameOver,
}

/// Navigation state that lives outside the round itself
pub struct App {
    on_welcome: bool,
    /// Highlighted answer (index into `options`)
    selected: usize,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            on_welcome: true,
            selected: 0,
            should_quit: false,
        }
    }

    pub fn screen(&self, state: &RoundState) -> Screen {
        if self.on_welcome {
            Screen::Welcome
        } else if state.is_game_over {
            Screen::GameOver
        } else {
            Screen::Game
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Translate a key press into at most one intent for the controller.
    pub fn handle_key(&mut self, key: KeyCode, state: &RoundState) -> Option<GameIntent> {
        if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
            self.should_quit = true;
            return None;
        }

        match self.screen(state) {
            Screen::Welcome => match key {
                KeyCode::Enter | KeyCode::Char('s') => {
                    self.on_welcome = false;
                    self.selected = 0;
                    Some(GameIntent::Init)
                }
                _ => None,
            },
            Screen::Game => self.handle_game_key(key, state),
            Screen::GameOver => match key {
                KeyCode::Enter | KeyCode::Char('a') => self.back_to_welcome(),
                _ => None,
            },
        }
    }

    fn handle_game_key(&mut self, key: KeyCode, state: &RoundState) -> Option<GameIntent> {
        match key {
            KeyCode::Char(' ') | KeyCode::Char('p') => Some(GameIntent::PlaySound),
            KeyCode::Char('r') => self.back_to_welcome(),
            KeyCode::Up if state.options_enabled() => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down if state.options_enabled() => {
                if self.selected + 1 < state.options.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Char(c @ '1'..='9') if state.options_enabled() => {
                let idx = c as usize - '1' as usize;
                state.options.get(idx).map(|note| {
                    self.selected = idx;
                    GameIntent::SelectNote(*note)
                })
            }
            KeyCode::Enter if state.feedback.is_some() => {
                self.selected = 0;
                Some(GameIntent::DismissFeedback)
            }
            KeyCode::Enter => state
                .options
                .get(self.selected)
                .map(|note| GameIntent::SelectNote(*note)),
            _ => None,
        }
    }

    fn back_to_welcome(&mut self) -> Option<GameIntent> {
        self.on_welcome = true;
        self.selected = 0;
        Some(GameIntent::ResetGame)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
