use super::{RenderCtx, MIN_TIME};

/*
ADSR Envelope
=============

Shapes the loudness of a quiz note so it starts without a click and fades
instead of cutting off.

  Level
    1.0 ┐   ╱╲
        │  ╱  ╲________
    S   │ ╱            ╲
    0.0 └╱──────────────╲──→ Time
         A  D    S      R

Every moving stage is a straight ramp between two levels over a whole number
of samples:

    level = from + (to - from) * elapsed / total

Attack ramps 0 → 1, Decay ramps 1 → S, Release ramps current → 0. Ramps are
counted in samples, computed when the stage starts, so the ramp always lands
exactly on its target regardless of float drift.

Transitions:

    Idle ──note_on──→ Attack ──→ Decay ──→ Sustain
      ↑                  │          │          │
      │               note_off   note_off   note_off
      │                  ↓          ↓          ↓
      └───── done ────────────── Release ←─────┘

note_on always restarts from zero so repeated notes sound distinct.
note_off releases from wherever the level is, which avoids a jump.
*/

/// Stage of the envelope state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStage {
    Idle,
    Attack,
    Decay,
    Sustain,
    Release,
}

#[derive(Debug, Clone)]
pub struct Envelope {
    attack: f32,
    decay: f32,
    sustain: f32,
    release: f32,

    stage: EnvelopeStage,
    level: f32,

    // Current ramp
    from: f32,
    to: f32,
    elapsed: u32,
    total: u32,
}

impl Envelope {
    /// Build an envelope from times in seconds and a sustain level in 0..=1.
    pub fn adsr(attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        Self {
            attack: attack.max(MIN_TIME),
            decay: decay.max(MIN_TIME),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(MIN_TIME),
            stage: EnvelopeStage::Idle,
            level: 0.0,
            from: 0.0,
            to: 0.0,
            elapsed: 0,
            total: 1,
        }
    }

    pub fn note_on(&mut self, ctx: &RenderCtx) {
        self.level = 0.0;
        self.begin(EnvelopeStage::Attack, 1.0, self.attack, ctx);
    }

    pub fn note_off(&mut self, ctx: &RenderCtx) {
        if matches!(self.stage, EnvelopeStage::Idle | EnvelopeStage::Release) {
            return;
        }
        self.begin(EnvelopeStage::Release, 0.0, self.release, ctx);
    }

    fn begin(&mut self, stage: EnvelopeStage, to: f32, seconds: f32, ctx: &RenderCtx) {
        self.stage = stage;
        self.from = self.level;
        self.to = to;
        self.elapsed = 0;
        self.total = (seconds * ctx.sample_rate).round().max(1.0) as u32;
    }

    /// Advance one sample and return the new level.
    pub fn next_sample(&mut self, ctx: &RenderCtx) -> f32 {
        match self.stage {
            EnvelopeStage::Idle => self.level = 0.0,
            EnvelopeStage::Sustain => self.level = self.sustain,
            EnvelopeStage::Attack | EnvelopeStage::Decay | EnvelopeStage::Release => {
                self.elapsed += 1;
                let progress = self.elapsed as f32 / self.total as f32;
                self.level = (self.from + (self.to - self.from) * progress).clamp(0.0, 1.0);

                if self.elapsed >= self.total {
                    self.level = self.to;
                    match self.stage {
                        EnvelopeStage::Attack => {
                            self.begin(EnvelopeStage::Decay, self.sustain, self.decay, ctx)
                        }
                        EnvelopeStage::Decay => self.stage = EnvelopeStage::Sustain,
                        _ => self.stage = EnvelopeStage::Idle,
                    }
                }
            }
        }

        debug_assert!((0.0..=1.0).contains(&self.level));
        self.level
    }

    /// Multiply `buffer` in place by the envelope, one level per sample.
    pub fn apply(&mut self, buffer: &mut [f32], ctx: &RenderCtx) {
        for sample in buffer.iter_mut() {
            *sample *= self.next_sample(ctx);
        }
    }

    /// Drop straight to silence without a release tail.
    pub fn reset(&mut self) {
        self.stage = EnvelopeStage::Idle;
        self.level = 0.0;
        self.elapsed = 0;
    }

    pub fn is_active(&self) -> bool {
        self.stage != EnvelopeStage::Idle
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn stage(&self) -> EnvelopeStage {
        self.stage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 1_000.0;

    fn ctx() -> RenderCtx {
        RenderCtx::from_freq(SAMPLE_RATE, 440.0)
    }

    fn run(env: &mut Envelope, samples: usize) {
        let ctx = ctx();
        for _ in 0..samples {
            env.next_sample(&ctx);
        }
    }

    #[test]
    fn idle_is_silent() {
        let mut env = Envelope::adsr(0.01, 0.1, 0.7, 0.2);
        run(&mut env, 10);
        assert_eq!(env.level(), 0.0);
        assert!(!env.is_active());
    }

    #[test]
    fn attack_reaches_full_level() {
        let mut env = Envelope::adsr(0.01, 0.1, 0.7, 0.2);
        env.note_on(&ctx());
        run(&mut env, 10);

        assert!((env.level() - 1.0).abs() < 1e-6);
        assert_eq!(env.stage(), EnvelopeStage::Decay);
    }

    #[test]
    fn sustain_holds_target_level() {
        let mut env = Envelope::adsr(0.01, 0.05, 0.6, 0.2);
        env.note_on(&ctx());
        run(&mut env, 10 + 50 + 5);

        assert_eq!(env.stage(), EnvelopeStage::Sustain);
        assert!((env.level() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn release_from_attack_starts_at_current_level() {
        let mut env = Envelope::adsr(0.1, 0.1, 0.5, 0.05);
        env.note_on(&ctx());
        run(&mut env, 50); // halfway up the attack
        let before = env.level();

        env.note_off(&ctx());
        let first = env.next_sample(&ctx());
        assert!(first < before && first > before * 0.9);
    }

    #[test]
    fn release_falls_back_to_idle() {
        let mut env = Envelope::adsr(0.01, 0.05, 0.5, 0.03);
        env.note_on(&ctx());
        run(&mut env, 20);

        env.note_off(&ctx());
        run(&mut env, 30);

        assert_eq!(env.level(), 0.0);
        assert_eq!(env.stage(), EnvelopeStage::Idle);
    }

    #[test]
    fn apply_scales_buffer() {
        let mut env = Envelope::adsr(0.01, 0.01, 1.0, 0.01);
        env.note_on(&ctx());
        let mut buffer = vec![1.0f32; 40];
        env.apply(&mut buffer, &ctx());

        assert!(buffer[0] < 0.2);
        assert!((buffer[39] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn reset_silences_immediately() {
        let mut env = Envelope::adsr(0.01, 0.01, 0.8, 1.0);
        env.note_on(&ctx());
        run(&mut env, 30);
        env.reset();
        assert!(!env.is_active());
        assert_eq!(env.next_sample(&ctx()), 0.0);
    }
}
