use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use super::RenderCtx;

/*
Quiz Oscillator
===============

A phase accumulator: `phase` walks from 0.0 to 1.0 once per cycle, and each
waveform is a shape function of that phase.

    phase += frequency / sample_rate     (wrap at 1.0)

Waveform choice changes how "obvious" the pitch is to the ear:

  Sine      Fundamental only. Pure, but hard to place in an octave.
  Triangle  Weak odd harmonics (1/n^2). Soft and clearly pitched. Default.
  Square    Odd harmonics (1/n). Hollow, woody.
  Saw       All harmonics (1/n). Bright and buzzy.

Square and saw are naive (not band-limited). At quiz pitches (octave 3-5)
aliasing stays well below audibility.
*/

/// Oscillator waveform shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sine,
    #[default]
    Triangle,
    Square,
    Saw,
}

impl Waveform {
    #[inline]
    fn sample(self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => (TAU * phase).sin(),
            Waveform::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Saw => 2.0 * phase - 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Oscillator {
    waveform: Waveform,
    phase: f32,
}

impl Oscillator {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            waveform,
            phase: 0.0,
        }
    }

    /// Restart the cycle so every note begins at the same point.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Render one block at `ctx.frequency`, overwriting `out`.
    pub fn render(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let increment = ctx.frequency / ctx.sample_rate;
        for sample in out.iter_mut() {
            *sample = self.waveform.sample(self.phase);
            self.phase += increment;
            if self.phase >= 1.0 {
                self.phase -= 1.0;
            }
        }
    }
}
