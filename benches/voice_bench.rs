//! Benchmarks for the audio-thread render path.
//!
//! Run with: cargo bench
//!
//! Everything here runs inside the output callback, so it has to finish well
//! within the block deadline.
//!
//! Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 512 samples = 10.67ms deadline

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use perfect_pitch::{
    audio::{Playback, SoundBank},
    dsp::Waveform,
    synth::{PlayerMessage, ToneVoice, VoiceSettings},
    Note,
};
use rtrb::RingBuffer;

/// Common buffer sizes used in audio applications.
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];
const SAMPLE_RATE: f32 = 48_000.0;

fn bench_voice(c: &mut Criterion) {
    let mut group = c.benchmark_group("synth/voice");

    for waveform in [Waveform::Sine, Waveform::Triangle] {
        for &size in BLOCK_SIZES {
            let settings = VoiceSettings {
                waveform,
                // Long gate so the voice never goes idle mid-benchmark
                note_seconds: 1_000.0,
                ..VoiceSettings::default()
            };
            let mut voice = ToneVoice::new(settings, SAMPLE_RATE);
            voice.trigger(Note::A);
            let mut buffer = vec![0.0f32; size];

            let id = BenchmarkId::new(format!("{waveform:?}").to_lowercase(), size);
            group.bench_with_input(id, &size, |b, _| {
                b.iter(|| voice.render(black_box(&mut buffer)))
            });
        }
    }

    group.finish();
}

fn bench_playback(c: &mut Criterion) {
    let mut group = c.benchmark_group("audio/playback");

    for &size in BLOCK_SIZES {
        let (mut tx, rx) = RingBuffer::<PlayerMessage>::new(16);
        let settings = VoiceSettings {
            note_seconds: 1_000.0,
            ..VoiceSettings::default()
        };
        let mut playback = Playback::new(SoundBank::Synth(settings), SAMPLE_RATE, rx);
        let _ = tx.push(PlayerMessage::Play(Note::C));
        let mut buffer = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("synth", size), &size, |b, _| {
            b.iter(|| playback.render_block(black_box(&mut buffer)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_voice, bench_playback);
criterion_main!(benches);
