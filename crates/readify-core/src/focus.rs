//! Focus page ambient sounds
//!
//! Only one sound plays at a time; starting one stops the rest.

use std::fmt;
use std::str::FromStr;

use crate::error::ReadifyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Rain,
    Fire,
    Ocean,
    Cafe,
    Forest,
    Piano,
}

impl Sound {
    pub const ALL: [Sound; 6] = [
        Sound::Rain,
        Sound::Fire,
        Sound::Ocean,
        Sound::Cafe,
        Sound::Forest,
        Sound::Piano,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Sound::Rain => "Rain",
            Sound::Fire => "Fire",
            Sound::Ocean => "Ocean waves",
            Sound::Cafe => "Café ambience",
            Sound::Forest => "Forest birds",
            Sound::Piano => "Soft piano",
        }
    }

    /// Audio element id on the focus page
    pub fn audio_id(&self) -> &'static str {
        match self {
            Sound::Rain => "rainAudio",
            Sound::Fire => "fireAudio",
            Sound::Ocean => "oceanAudio",
            Sound::Cafe => "cafeAudio",
            Sound::Forest => "forestAudio",
            Sound::Piano => "pianoAudio",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Sound::Rain => "rain",
            Sound::Fire => "fire",
            Sound::Ocean => "ocean",
            Sound::Cafe => "cafe",
            Sound::Forest => "forest",
            Sound::Piano => "piano",
        }
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Sound {
    type Err = ReadifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Sound::ALL
            .into_iter()
            .find(|sound| sound.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| ReadifyError::invalid(format!("Unknown sound: {}", s)))
    }
}

/// Tracks which ambient sound is playing
#[derive(Debug, Default)]
pub struct SoundBoard {
    playing: Option<Sound>,
}

impl SoundBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop whatever is playing and start `sound`
    pub fn play(&mut self, sound: Sound) -> String {
        self.playing = Some(sound);
        format!("{} playing…", sound.label())
    }

    pub fn stop(&mut self) -> String {
        self.playing = None;
        "Stopped.".to_string()
    }

    pub fn playing(&self) -> Option<Sound> {
        self.playing
    }
}
