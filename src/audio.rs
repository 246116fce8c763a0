//! Sound effect vocabulary and output sink
//!
//! The core fires named effects and never observes the result; whatever
//! backend the host wires in is free to drop them.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player jumped
    Jump,
    /// Session ended
    GameOver,
}

impl SoundEffect {
    /// Sound-bank asset name for this effect
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "digital:HighUp",
            SoundEffect::GameOver => "digital:PowerDown",
        }
    }
}

/// Map a simulation event to its sound cue, if it has one
pub fn effect_for_event(event: &GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::Jump => Some(SoundEffect::Jump),
        GameEvent::GameOver => Some(SoundEffect::GameOver),
        _ => None,
    }
}

/// Fire-and-forget audio output
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Discards every effect
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Logs effects instead of playing them; used by the headless driver
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("sfx {}", effect.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_to_effect_mapping() {
        assert_eq!(
            effect_for_event(&GameEvent::Jump),
            Some(SoundEffect::Jump)
        );
        assert_eq!(
            effect_for_event(&GameEvent::GameOver),
            Some(SoundEffect::GameOver)
        );
        // Lifecycle bookkeeping is silent
        assert_eq!(effect_for_event(&GameEvent::ObstacleSpawned(7)), None);
        assert_eq!(effect_for_event(&GameEvent::ObstacleRetired(7)), None);
        assert_eq!(effect_for_event(&GameEvent::StripWrapped(1)), None);
    }
}
