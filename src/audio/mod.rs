//! Optional sound cues backed by rodio.
//!
//! Opening the output stream is the only fallible step and it is checked once
//! at startup; the caller keeps an `Option<AudioCues>` and treats `None` as
//! sound-off for the whole session. The two clips are read from well-known
//! filenames in the working directory; a missing file disables just that cue.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

pub const EAT_CLIP: &str = "eat.wav";
pub const CRASH_CLIP: &str = "crash.wav";

/// The two cues the game emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Eat,
    Crash,
}

pub struct AudioCues {
    // Dropping the stream kills playback, so it is kept alive here
    _stream: OutputStream,
    handle: OutputStreamHandle,
    eat: Option<Vec<u8>>,
    crash: Option<Vec<u8>>,
}

impl AudioCues {
    /// Open the default output device and load whichever clips exist
    pub fn load() -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            eat: read_clip(EAT_CLIP),
            crash: read_clip(CRASH_CLIP),
        })
    }

    /// Whether a clip was found for the cue
    pub fn has(&self, cue: Cue) -> bool {
        self.clip(cue).is_some()
    }

    /// Play a cue without blocking. Missing clip or a busy device is silence.
    pub fn play(&self, cue: Cue) {
        let Some(bytes) = self.clip(cue) else {
            return;
        };
        if let Ok(sink) = Sink::try_new(&self.handle) {
            if let Ok(source) = Decoder::new(Cursor::new(bytes.clone())) {
                sink.append(source);
                sink.detach();
            }
        }
    }

    fn clip(&self, cue: Cue) -> Option<&Vec<u8>> {
        match cue {
            Cue::Eat => self.eat.as_ref(),
            Cue::Crash => self.crash.as_ref(),
        }
    }
}

fn read_clip<P: AsRef<Path>>(path: P) -> Option<Vec<u8>> {
    fs::read(path).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_clip_reads_as_none() {
        assert_eq!(read_clip("definitely-not-here.wav"), None);
    }

    #[test]
    fn test_present_clip_reads_bytes() {
        let dir = std::env::temp_dir().join("snake_arcade_audio_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("clip.wav");
        std::fs::write(&path, b"RIFF").unwrap();

        assert_eq!(read_clip(&path), Some(b"RIFF".to_vec()));

        std::fs::remove_file(&path).ok();
    }
}
