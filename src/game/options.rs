//! Random note and answer-option selection.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Note, NOTE_COUNT};

/// Pick one note uniformly from the catalog.
pub fn pick_note<R: Rng + ?Sized>(rng: &mut R) -> Note {
    Note::all()[rng.gen_range(0..NOTE_COUNT)]
}

/// Build the answer choices for `answer`.
///
/// Up to `distractors` other notes are drawn without replacement from the
/// remaining eleven, then the whole set is shuffled so the right answer can
/// land anywhere.
pub fn pick_options<R: Rng + ?Sized>(answer: Note, distractors: usize, rng: &mut R) -> Vec<Note> {
    let others: Vec<Note> = Note::all()
        .iter()
        .copied()
        .filter(|note| *note != answer)
        .collect();

    let mut options: Vec<Note> = others
        .choose_multiple(rng, distractors.min(others.len()))
        .copied()
        .collect();
    options.push(answer);
    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn answer_appears_exactly_once() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let answer = pick_note(&mut rng);
            let options = pick_options(answer, 2, &mut rng);
            assert_eq!(options.len(), 3);
            assert_eq!(options.iter().filter(|n| **n == answer).count(), 1);
        }
    }

    #[test]
    fn options_are_distinct() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let options = pick_options(Note::F, 2, &mut rng);
            assert_ne!(options[0], options[1]);
            assert_ne!(options[1], options[2]);
            assert_ne!(options[0], options[2]);
        }
    }

    #[test]
    fn distractors_bounded_by_catalog() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pick_options(Note::C, 0, &mut rng), vec![Note::C]);
        assert_eq!(pick_options(Note::C, 50, &mut rng).len(), NOTE_COUNT);
    }

    #[test]
    fn answer_position_varies() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = [false; 3];
        for _ in 0..100 {
            let options = pick_options(Note::A, 2, &mut rng);
            let pos = options.iter().position(|n| *n == Note::A).unwrap();
            seen[pos] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn every_note_gets_picked() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; NOTE_COUNT];
        for _ in 0..1_000 {
            seen[pick_note(&mut rng).semitone() as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
