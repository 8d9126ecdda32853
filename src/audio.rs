//! Audio collaborator contract
//!
//! The core never touches an audio device; it asks an injected `AudioOut`
//! to start/stop looping tracks and fire one-shot cues. Track and cue ids
//! resolve to opaque wave-file keys for the host's loader.

/// Looping background tracks, one per scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Title,
    Gameplay,
    GameOver,
    GameClear,
}

impl Track {
    /// Opaque asset key resolved by the host's sound loader
    pub fn asset(self) -> &'static str {
        match self {
            Track::Title => "Audio/Ring05.wav",
            Track::Gameplay => "Audio/Ring08.wav",
            Track::GameOver => "Audio/Ring09.wav",
            Track::GameClear => "Audio/fanfare.wav",
        }
    }
}

/// One-shot sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A beam destroyed an enemy
    EnemyHit,
    /// An enemy struck the player
    PlayerHit,
}

impl Cue {
    pub fn asset(self) -> &'static str {
        match self {
            Cue::EnemyHit => "Audio/chord.wav",
            Cue::PlayerHit => "Audio/tada.wav",
        }
    }
}

/// Handle of a playing looped voice, returned by `AudioOut::play`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceId(pub u32);

/// Audio output collaborator
pub trait AudioOut {
    /// Start a track; the returned handle stops it later
    fn play(&mut self, track: Track, looped: bool) -> VoiceId;
    /// Stop a playing voice
    fn stop(&mut self, voice: VoiceId);
    /// Fire a one-shot cue
    fn play_one_shot(&mut self, cue: Cue);
}

/// Headless audio sink for tests and the demo binary
#[derive(Debug, Default)]
pub struct NullAudio {
    next_voice: u32,
}

impl AudioOut for NullAudio {
    fn play(&mut self, track: Track, looped: bool) -> VoiceId {
        let voice = VoiceId(self.next_voice);
        self.next_voice = self.next_voice.wrapping_add(1);
        log::debug!("audio: play {:?} (loop={looped}) -> {voice:?}", track.asset());
        voice
    }

    fn stop(&mut self, voice: VoiceId) {
        log::debug!("audio: stop {voice:?}");
    }

    fn play_one_shot(&mut self, cue: Cue) {
        log::debug!("audio: one-shot {:?}", cue.asset());
    }
}
