/*
Note Catalog
============

The twelve pitch classes of the chromatic scale, C through B. These are the
only answers the game ever asks for, so the set is closed and fixed at compile
time.

Each note carries:
- a display label shown on answer buttons ("C#")
- a resource name used to resolve bundled audio ("c_sharp" -> c_sharp.wav)
- a semitone offset from C, used to compute a pitch in any octave

The MIDI formula: note_number = 12 * (octave + 1) + semitone
Where semitone: C=0, C#=1, D=2, D#=3, E=4, F=5, F#=6, G=7, G#=8, A=9, A#=10, B=11

Example:
  Note::A.midi(4)      // 69
  Note::A.frequency(4) // 440.0 Hz
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of notes in the catalog.
pub const NOTE_COUNT: usize = 12;

const MIDI_MAX: u16 = 127;

/// One of the twelve chromatic pitch classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Note {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

const ALL: [Note; NOTE_COUNT] = [
    Note::C,
    Note::CSharp,
    Note::D,
    Note::DSharp,
    Note::E,
    Note::F,
    Note::FSharp,
    Note::G,
    Note::GSharp,
    Note::A,
    Note::ASharp,
    Note::B,
];

impl Note {
    /// All twelve notes in chromatic order starting at C.
    pub fn all() -> &'static [Note; NOTE_COUNT] {
        &ALL
    }

    /// Human-readable label ("C", "C#", ...).
    pub fn label(self) -> &'static str {
        match self {
            Note::C => "C",
            Note::CSharp => "C#",
            Note::D => "D",
            Note::DSharp => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::FSharp => "F#",
            Note::G => "G",
            Note::GSharp => "G#",
            Note::A => "A",
            Note::ASharp => "A#",
            Note::B => "B",
        }
    }

    /// Audio resource identifier. Assets are looked up as `<resource_name>.wav`.
    pub fn resource_name(self) -> &'static str {
        match self {
            Note::C => "c",
            Note::CSharp => "c_sharp",
            Note::D => "d",
            Note::DSharp => "d_sharp",
            Note::E => "e",
            Note::F => "f",
            Note::FSharp => "f_sharp",
            Note::G => "g",
            Note::GSharp => "g_sharp",
            Note::A => "a",
            Note::ASharp => "a_sharp",
            Note::B => "b",
        }
    }

    /// Semitones above C (0-11). Doubles as the catalog index.
    pub fn semitone(self) -> u8 {
        self as u8
    }

    /// MIDI note number of this pitch class in the given octave (C4 = 60).
    /// Saturates at 127, the top of the MIDI range.
    pub fn midi(self, octave: u8) -> u8 {
        let midi = 12 * (u16::from(octave) + 1) + u16::from(self.semitone());
        midi.min(MIDI_MAX) as u8
    }

    /// Frequency in Hz, equal temperament with A4 = 440 Hz.
    pub fn frequency(self, octave: u8) -> f32 {
        midi_note_to_freq(self.midi(octave))
    }
}

/// Convert MIDI note number to frequency in Hz.
/// A4 = 440 Hz = MIDI note 69
#[inline]
pub fn midi_note_to_freq(note: u8) -> f32 {
    440.0 * 2.0_f32.powf((note as f32 - 69.0) / 12.0)
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string does not name a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNoteError(pub String);

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown note name: {:?}", self.0)
    }
}

impl std::error::Error for ParseNoteError {}

impl FromStr for Note {
    type Err = ParseNoteError;

    /// Accepts labels ("C#"), resource names ("c_sharp") and flat spellings ("Db").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(note) = ALL
            .iter()
            .find(|n| n.label() == trimmed || n.resource_name() == trimmed)
        {
            return Ok(*note);
        }

        // Flats are aliases for the sharp below them
        match trimmed {
            "Db" => Ok(Note::CSharp),
            "Eb" => Ok(Note::DSharp),
            "Gb" => Ok(Note::FSharp),
            "Ab" => Ok(Note::GSharp),
            "Bb" => Ok(Note::ASharp),
            _ => Err(ParseNoteError(s.to_string())),
        }
    }
}
