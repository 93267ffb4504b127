//! Sound effect definitions
//!
//! Each effect is one or more fixed tones. Playback lives in `audio` (web
//! only); this table is shared so it can be tested natively.

use crate::sim::GameEvent;

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

/// A single fire-and-forget tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq: f32,
    /// Seconds after the effect starts
    pub delay: f64,
    /// Seconds
    pub duration: f64,
    /// Fixed gain before volume scaling
    pub gain: f32,
    pub wave: Waveform,
}

impl Tone {
    const fn new(freq: f32, duration: f64, gain: f32, wave: Waveform) -> Self {
        Self {
            freq,
            delay: 0.0,
            duration,
            gain,
            wave,
        }
    }

    const fn after(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }
}

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Jump,
    Attack,
    Hit,
    Fall,
    Win,
}

const JUMP: [Tone; 1] = [Tone::new(520.0, 0.1, 0.2, Waveform::Square)];
const ATTACK: [Tone; 1] = [Tone::new(330.0, 0.08, 0.2, Waveform::Sawtooth)];
const HIT: [Tone; 1] = [Tone::new(160.0, 0.15, 0.3, Waveform::Square)];
const FALL: [Tone; 1] = [Tone::new(90.0, 0.4, 0.3, Waveform::Sine)];
const WIN: [Tone; 4] = [
    Tone::new(400.0, 0.2, 0.25, Waveform::Triangle),
    Tone::new(500.0, 0.2, 0.25, Waveform::Triangle).after(0.12),
    Tone::new(600.0, 0.2, 0.25, Waveform::Triangle).after(0.24),
    Tone::new(800.0, 0.4, 0.25, Waveform::Triangle).after(0.36),
];

impl SoundEffect {
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::Jump { .. } => SoundEffect::Jump,
            GameEvent::Attack { .. } => SoundEffect::Attack,
            GameEvent::Hit { .. } => SoundEffect::Hit,
            GameEvent::Fall { .. } => SoundEffect::Fall,
            GameEvent::Win { .. } => SoundEffect::Win,
        }
    }

    pub fn tones(&self) -> &'static [Tone] {
        match self {
            SoundEffect::Jump => &JUMP,
            SoundEffect::Attack => &ATTACK,
            SoundEffect::Hit => &HIT,
            SoundEffect::Fall => &FALL,
            SoundEffect::Win => &WIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_event_has_a_sound() {
        let events = [
            GameEvent::Jump { player: 0 },
            GameEvent::Attack { player: 1 },
            GameEvent::Hit { attacker: 0, defender: 1 },
            GameEvent::Fall { player: 0 },
            GameEvent::Win { winner: 1 },
        ];
        for event in &events {
            let tones = SoundEffect::for_event(event).tones();
            assert!(!tones.is_empty());
            assert!(tones.iter().all(|t| t.freq > 0.0 && t.duration > 0.0 && t.gain <= 1.0));
        }
    }

    #[test]
    fn test_fanfare_is_staggered() {
        let delays: Vec<f64> = SoundEffect::Win.tones().iter().map(|t| t.delay).collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }
}
