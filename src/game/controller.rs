use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rtrb::{Consumer, Producer, RingBuffer};

use crate::{
    audio::SoundPlayer,
    catalog::Note,
    game::{
        intent::GameIntent,
        options::{pick_note, pick_options},
        state::{Feedback, RoundState},
        RoundSettings, ROUND_LENGTH,
    },
    score::ScoreStore,
};

/// Receives every state snapshot the controller publishes.
pub trait StateObserver {
    fn publish(&mut self, state: &RoundState);
}

/// Ring-buffer hand-off: the consumer side keeps only the latest snapshot.
impl StateObserver for Producer<RoundState> {
    fn publish(&mut self, state: &RoundState) {
        if self.push(state.clone()).is_err() {
            log::trace!(target: "game", "state queue full, dropping snapshot");
        }
    }
}

/// Owns the round state and applies user intents to it.
///
/// Each intent replaces the state wholesale and publishes the new snapshot
/// to all observers. Audio and persistence are reached only through the
/// injected [`SoundPlayer`] and [`ScoreStore`].
pub struct RoundController<S, P, R = StdRng> {
    state: RoundState,
    settings: RoundSettings,
    store: S,
    player: P,
    rng: R,
    observers: Vec<Box<dyn StateObserver>>,
}

impl<S: ScoreStore, P: SoundPlayer> RoundController<S, P, StdRng> {
    pub fn new(store: S, player: P, settings: RoundSettings) -> Self {
        Self::with_rng(store, player, settings, StdRng::from_entropy())
    }
}

impl<S: ScoreStore, P: SoundPlayer, R: Rng> RoundController<S, P, R> {
    /// Build a controller drawing notes from `rng`.
    pub fn with_rng(store: S, player: P, settings: RoundSettings, rng: R) -> Self {
        let state = RoundState::fresh(store.best_score());
        Self {
            state,
            settings,
            store,
            player,
            rng,
            observers: Vec::new(),
        }
    }

    /// Latest published snapshot.
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    /// Register an observer for all future snapshots.
    pub fn observe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Open a ring buffer of `capacity` snapshots fed by this controller.
    pub fn subscribe(&mut self, capacity: usize) -> Consumer<RoundState> {
        let (tx, rx) = RingBuffer::<RoundState>::new(capacity);
        self.observe(tx);
        rx
    }

    /// Apply one intent and return the resulting state.
    pub fn handle_intent(&mut self, intent: GameIntent) -> &RoundState {
        log::trace!(target: "game", "intent {intent:?}");
        match intent {
            GameIntent::Init => self.start_attempt(),
            GameIntent::PlaySound => self.play_sound(),
            GameIntent::SelectNote(note) => self.select_note(note),
            GameIntent::DismissFeedback => self.dismiss_feedback(),
            GameIntent::ResetGame => self.reset(),
        }
        &self.state
    }

    /// Stop any sound still playing. Call before tearing the controller down.
    pub fn release(&mut self) {
        self.player.release();
    }

    fn publish(&mut self, next: RoundState) {
        self.state = next;
        for observer in &mut self.observers {
            observer.publish(&self.state);
        }
    }

    fn start_attempt(&mut self) {
        if self.state.is_game_over {
            log::debug!(target: "game", "round is over, ignoring new attempt");
            return;
        }

        self.publish(RoundState {
            is_loading: true,
            ..self.state.clone()
        });

        let note = pick_note(&mut self.rng);
        let options = pick_options(note, self.settings.distractors, &mut self.rng);
        log::debug!(target: "game", "random note: {note}, options {options:?}");

        self.publish(RoundState {
            current_note: Some(note),
            options,
            is_playing: true,
            feedback: None,
            is_loading: false,
            ..self.state.clone()
        });

        if self.settings.autoplay {
            self.player.play_note(note);
        }
    }

    fn play_sound(&mut self) {
        match self.state.current_note {
            Some(note) => self.player.play_note(note),
            None => log::debug!(target: "game", "no note to play yet"),
        }
    }

    fn select_note(&mut self, choice: Note) {
        let Some(answer) = self.state.current_note else {
            log::warn!(target: "game", "answer {choice} submitted before any note was chosen");
            return;
        };
        if !self.state.is_playing || self.state.is_game_over {
            log::debug!(target: "game", "attempt already answered, ignoring {choice}");
            return;
        }

        let correct = choice == answer;
        let score = self.state.score + u32::from(correct);
        let total_attempts = self.state.total_attempts + 1;
        let is_game_over = total_attempts >= ROUND_LENGTH;

        let best_score = if is_game_over {
            log::info!(target: "game", "game over: {score}/{total_attempts}");
            self.store.save_if_higher(score);
            self.store.best_score()
        } else {
            self.state.best_score
        };

        self.publish(RoundState {
            score,
            total_attempts,
            feedback: Some(Feedback::new(correct, answer)),
            is_playing: false,
            is_game_over,
            best_score,
            ..self.state.clone()
        });
    }

    fn dismiss_feedback(&mut self) {
        if self.state.feedback.is_none() {
            return;
        }

        if self.state.is_game_over {
            self.publish(RoundState {
                feedback: None,
                ..self.state.clone()
            });
        } else {
            self.state.feedback = None;
            self.start_attempt();
        }
    }

    fn reset(&mut self) {
        self.publish(RoundState::fresh(self.store.best_score()));
    }
}
