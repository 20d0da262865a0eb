//! Audio collaborator
//!
//! The game only tells audio when a round starts and stops; the platform
//! decides what that means (the desktop build loops one music track).

use std::path::PathBuf;

/// Receives session start/stop signals
pub trait AudioSink {
    fn session_started(&mut self);
    fn session_stopped(&mut self);
}

/// Discards every signal
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn session_started(&mut self) {}
    fn session_stopped(&mut self) {}
}

/// Background music state for a single looping track.
///
/// A missing track leaves the soundtrack muted; signals are still tracked so
/// the rest of the game behaves the same with or without audio.
#[derive(Debug, Clone)]
pub struct Soundtrack {
    track: Option<PathBuf>,
    playing: bool,
    starts: u32,
}

impl Soundtrack {
    pub fn new(track: Option<PathBuf>) -> Self {
        if track.is_none() {
            log::warn!("No music track available - audio disabled");
        }
        Self {
            track,
            playing: false,
            starts: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_muted(&self) -> bool {
        self.track.is_none()
    }

    /// Number of times playback was (re)started
    pub fn starts(&self) -> u32 {
        self.starts
    }
}

impl AudioSink for Soundtrack {
    fn session_started(&mut self) {
        self.starts += 1;
        self.playing = true;
        if let Some(track) = &self.track {
            log::info!("Looping music {}", track.display());
        }
    }

    fn session_stopped(&mut self) {
        if self.playing {
            self.playing = false;
            if self.track.is_some() {
                log::info!("Music stopped");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_stop() {
        let mut music = Soundtrack::new(Some(PathBuf::from("assets/sounds/komiku.mp3")));
        assert!(!music.is_playing());
        music.session_started();
        assert!(music.is_playing());
        music.session_stopped();
        assert!(!music.is_playing());
        music.session_stopped();
        assert!(!music.is_playing());
        music.session_started();
        assert_eq!(music.starts(), 2);
    }

    #[test]
    fn test_muted_without_track() {
        let mut music = Soundtrack::new(None);
        assert!(music.is_muted());
        music.session_started();
        assert!(music.is_playing());
    }
}
