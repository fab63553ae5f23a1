use perfect_pitch::{
    audio::SoundPlayer,
    game::{GameIntent, RoundController, RoundSettings, RoundState, ROUND_LENGTH},
    score::{FileScoreStore, MemoryScoreStore, ScoreStore},
    Note,
};
use rand::{rngs::StdRng, SeedableRng};

#[derive(Default)]
struct RecordingPlayer {
    played: Vec<Note>,
}

impl SoundPlayer for RecordingPlayer {
    fn play_note(&mut self, note: Note) {
        self.played.push(note);
    }

    fn release(&mut self) {}
}

fn controller<S: ScoreStore>(store: S, seed: u64) -> RoundController<S, RecordingPlayer, StdRng> {
    RoundController::with_rng(
        store,
        RecordingPlayer::default(),
        RoundSettings::default(),
        StdRng::seed_from_u64(seed),
    )
}

fn assert_invariants(state: &RoundState) {
    assert!(state.score <= state.total_attempts);
    assert!(state.total_attempts <= ROUND_LENGTH);
    assert_eq!(state.is_game_over, state.total_attempts == ROUND_LENGTH);
    if let (Some(note), true) = (state.current_note, state.is_playing) {
        assert_eq!(state.options.iter().filter(|n| **n == note).count(), 1);
    }
}

/// Answer one attempt, right or wrong, then move on.
fn answer<S: ScoreStore>(c: &mut RoundController<S, RecordingPlayer, StdRng>, correct: bool) {
    let state = c.state().clone();
    let note = state.current_note.expect("attempt in progress");
    let choice = if correct {
        note
    } else {
        *state.options.iter().find(|n| **n != note).unwrap()
    };
    assert_invariants(c.handle_intent(GameIntent::SelectNote(choice)));
    assert_invariants(c.handle_intent(GameIntent::DismissFeedback));
}

#[test]
fn fresh_init_then_correct_answer() {
    let mut c = controller(MemoryScoreStore::new(), 1);
    c.handle_intent(GameIntent::Init);
    let note = c.state().current_note.unwrap();

    let state = c.handle_intent(GameIntent::SelectNote(note));
    assert_eq!(state.score, 1);
    assert_eq!(state.total_attempts, 1);
    assert!(!state.is_playing);
    assert!(state.feedback.unwrap().to_string().contains(note.label()));
}

#[test]
fn tenth_answer_ends_round_and_saves_best() {
    let mut c = controller(MemoryScoreStore::with_best(4), 2);
    c.handle_intent(GameIntent::Init);
    for _ in 0..9 {
        answer(&mut c, true);
    }
    assert_eq!(c.state().total_attempts, 9);
    assert_eq!(c.state().score, 9);
    assert!(!c.state().is_game_over);

    let note = c.state().current_note.unwrap();
    let state = c.handle_intent(GameIntent::SelectNote(note)).clone();
    assert_eq!(state.total_attempts, 10);
    assert_eq!(state.score, 10);
    assert!(state.is_game_over);
    assert!(state.is_perfect());
    assert_eq!(state.best_score, 10);
    assert_eq!(c.store().best_score(), 10);
}

#[test]
fn lower_final_score_keeps_previous_best() {
    let mut c = controller(MemoryScoreStore::with_best(8), 3);
    c.handle_intent(GameIntent::Init);
    for i in 0..ROUND_LENGTH {
        let state = c.state().clone();
        let note = state.current_note.unwrap();
        let choice = if i % 2 == 0 {
            note
        } else {
            *state.options.iter().find(|n| **n != note).unwrap()
        };
        c.handle_intent(GameIntent::SelectNote(choice));
        c.handle_intent(GameIntent::DismissFeedback);
    }

    let state = c.state();
    assert!(state.is_game_over);
    assert_eq!(state.score, 5);
    assert_eq!(state.best_score, 8);
}

#[test]
fn game_over_is_terminal_until_reset() {
    let mut c = controller(MemoryScoreStore::new(), 4);
    c.handle_intent(GameIntent::Init);
    for _ in 0..9 {
        answer(&mut c, false);
    }
    let note = c.state().current_note.unwrap();
    c.handle_intent(GameIntent::SelectNote(note));
    let over = c.state().clone();
    assert!(over.is_game_over);

    // Dismiss only clears feedback
    let state = c.handle_intent(GameIntent::DismissFeedback).clone();
    assert!(state.feedback.is_none());
    assert_eq!(state.current_note, over.current_note);
    assert_eq!(state.options, over.options);
    assert!(state.is_game_over);

    // Nothing else moves it
    c.handle_intent(GameIntent::Init);
    c.handle_intent(GameIntent::SelectNote(Note::C));
    assert_eq!(c.state(), &state);

    let state = c.handle_intent(GameIntent::ResetGame);
    assert_eq!(state, &RoundState::fresh(1));
}

#[test]
fn reset_reseeds_best_from_store() {
    let mut c = controller(MemoryScoreStore::with_best(6), 5);
    c.handle_intent(GameIntent::Init);
    answer(&mut c, true);

    let state = c.handle_intent(GameIntent::ResetGame);
    assert_eq!(state.score, 0);
    assert_eq!(state.total_attempts, 0);
    assert!(!state.is_game_over);
    assert_eq!(state.best_score, 6);
}

#[test]
fn invariants_hold_over_many_rounds() {
    let mut c = controller(MemoryScoreStore::new(), 6);
    for round in 0..20u64 {
        c.handle_intent(GameIntent::Init);
        while !c.state().is_game_over {
            c.handle_intent(GameIntent::PlaySound);
            let correct = (round + c.state().total_attempts as u64) % 3 != 0;
            answer(&mut c, correct);
        }
        c.handle_intent(GameIntent::ResetGame);
    }
    assert_eq!(c.player().played.len(), 20 * ROUND_LENGTH as usize);
}

#[test]
fn best_score_persists_across_controllers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.toml");

    {
        let mut c = controller(FileScoreStore::open(&path).unwrap(), 7);
        c.handle_intent(GameIntent::Init);
        for _ in 0..ROUND_LENGTH {
            answer(&mut c, true);
        }
        assert_eq!(c.state().best_score, 10);
    }

    let c = controller(FileScoreStore::open(&path).unwrap(), 8);
    assert_eq!(c.state().best_score, 10);
}
