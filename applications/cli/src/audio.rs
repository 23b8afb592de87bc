/// Audio element stand-in for the command line
use longplay_core::{AudioElement, Result};

/// Silent [`AudioElement`] with a fixed duration
///
/// Tracks source, position and play state so a session can be driven
/// without an audio device.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NullAudio {
    source: String,
    time: f64,
    duration: f64,
    playing: bool,
}

impl NullAudio {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            ..Default::default()
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl AudioElement for NullAudio {
    fn set_source(&mut self, source: &str) -> Result<()> {
        source.clone_into(&mut self.source);
        self.time = 0.0;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn seek(&mut self, time: f64) -> Result<()> {
        self.time = time;
        Ok(())
    }

    fn current_time(&self) -> f64 {
        self.time
    }

    fn duration(&self) -> f64 {
        self.duration
    }
}
