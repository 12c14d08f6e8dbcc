//! Sound cues for the GUI.
//!
//! The game never waits on audio: cues are fire-and-forget and a missing
//! asset, a missing device or an undecodable file only costs a warning.
//! [`AssetSoundtrack`] resolves the asset files and plays them through rodio
//! when the crate is built with the `audio` feature.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use self::playback::{Output, Voice};

/// Something worth hearing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// An accepted move
    Click,
    /// A completed line
    Win,
    /// Looped music while playing
    Background,
}

impl SoundCue {
    pub const ALL: [SoundCue; 3] = [SoundCue::Click, SoundCue::Win, SoundCue::Background];

    pub fn file_name(self) -> &'static str {
        match self {
            SoundCue::Click => "click.wav",
            SoundCue::Win => "win.wav",
            SoundCue::Background => "background.wav",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SoundError {
    #[display("no asset directory configured for {_0}")]
    NoAssetDir(&'static str),

    #[display("sound asset {} not found", _0.display())]
    Missing(PathBuf),

    #[display("built without the `audio` feature")]
    NoBackend,

    #[display("audio output unavailable: {_0}")]
    Output(String),

    #[display("cannot open {}: {reason}", path.display())]
    Open { path: PathBuf, reason: String },

    #[display("cannot decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
}

impl std::error::Error for SoundError {}

/// Sink for sound cues
pub trait Soundtrack {
    /// Play once
    fn play(&mut self, cue: SoundCue);
    /// Play on repeat until [`Soundtrack::stop_loop`]
    fn start_loop(&mut self, cue: SoundCue);
    fn stop_loop(&mut self);
}

/// Cues backed by `.wav` files in an asset directory
#[derive(Debug, Default)]
pub struct AssetSoundtrack {
    available: HashMap<SoundCue, PathBuf>,
    output: Option<Output>,
    looping: Option<(SoundCue, Voice)>,
}

impl AssetSoundtrack {
    /// Resolve every cue under `dir`. Missing files are logged and silenced.
    /// The output device is only opened when at least one asset exists.
    pub fn new(dir: Option<&Path>) -> Self {
        let mut available = HashMap::new();
        for cue in SoundCue::ALL {
            match Self::resolve(dir, cue) {
                Ok(path) => {
                    available.insert(cue, path);
                }
                Err(e) => warn!(?cue, "sound disabled: {e}"),
            }
        }

        let output = if available.is_empty() {
            None
        } else {
            Output::open()
                .inspect_err(|e| warn!("sound disabled: {e}"))
                .ok()
        };

        Self {
            available,
            output,
            looping: None,
        }
    }

    /// Path of the asset for `cue`, if it exists
    pub fn resolve(dir: Option<&Path>, cue: SoundCue) -> Result<PathBuf, SoundError> {
        let dir = dir.ok_or(SoundError::NoAssetDir(cue.file_name()))?;
        let path = dir.join(cue.file_name());
        if path.is_file() {
            Ok(path)
        } else {
            Err(SoundError::Missing(path))
        }
    }

    pub fn is_available(&self, cue: SoundCue) -> bool {
        self.available.contains_key(&cue)
    }

    /// Whether an output device is open
    pub fn has_output(&self) -> bool {
        self.output.is_some()
    }

    /// Cue currently on repeat
    pub fn looping(&self) -> Option<SoundCue> {
        self.looping.as_ref().map(|(cue, _)| *cue)
    }

    /// Queue `cue` on its own sink
    fn start(&self, cue: SoundCue, repeat: bool) -> Option<Voice> {
        let (output, path) = (self.output.as_ref()?, self.available.get(&cue)?);
        match output.start(path, repeat) {
            Ok(voice) => {
                debug!(?cue, repeat, path = %path.display(), "sound started");
                Some(voice)
            }
            Err(e) => {
                warn!(?cue, "sound failed: {e}");
                None
            }
        }
    }
}

impl Soundtrack for AssetSoundtrack {
    fn play(&mut self, cue: SoundCue) {
        if let Some(voice) = self.start(cue, false) {
            voice.detach();
        }
    }

    fn start_loop(&mut self, cue: SoundCue) {
        self.stop_loop();
        self.looping = self.start(cue, true).map(|voice| (cue, voice));
    }

    fn stop_loop(&mut self) {
        // Dropping the voice stops its sink
        if let Some((cue, _voice)) = self.looping.take() {
            debug!(?cue, "loop stopped");
        }
    }
}

#[cfg(feature = "audio")]
mod playback {
    use std::fmt;
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;

    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

    use super::SoundError;

    /// Open playback device. Sounds stop when it is dropped.
    pub struct Output {
        _stream: OutputStream,
        handle: OutputStreamHandle,
    }

    /// One queued sound. Dropping it silences the sound.
    pub struct Voice(Sink);

    impl Output {
        pub fn open() -> Result<Self, SoundError> {
            let (stream, handle) =
                OutputStream::try_default().map_err(|e| SoundError::Output(e.to_string()))?;
            Ok(Self {
                _stream: stream,
                handle,
            })
        }

        pub fn start(&self, path: &Path, repeat: bool) -> Result<Voice, SoundError> {
            let source = decode(path)?;
            let sink = Sink::try_new(&self.handle).map_err(|e| SoundError::Output(e.to_string()))?;
            if repeat {
                sink.append(source.repeat_infinite());
            } else {
                sink.append(source);
            }
            Ok(Voice(sink))
        }
    }

    impl Voice {
        /// Let the sound play out on its own
        pub fn detach(self) {
            self.0.detach();
        }
    }

    /// Open and decode an asset without playing it
    pub fn decode(path: &Path) -> Result<Decoder<BufReader<File>>, SoundError> {
        let file = File::open(path).map_err(|e| SoundError::Open {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Decoder::new(BufReader::new(file)).map_err(|e| SoundError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    impl fmt::Debug for Output {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("Output").finish_non_exhaustive()
        }
    }

    impl fmt::Debug for Voice {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_tuple("Voice").field(&self.0.len()).finish()
        }
    }
}

#[cfg(not(feature = "audio"))]
mod playback {
    use std::path::Path;

    use super::SoundError;

    /// Never opened without a backend
    #[derive(Debug)]
    pub enum Output {}

    #[derive(Debug)]
    pub enum Voice {}

    impl Output {
        pub fn open() -> Result<Self, SoundError> {
            Err(SoundError::NoBackend)
        }

        pub fn start(&self, _path: &Path, _repeat: bool) -> Result<Voice, SoundError> {
            match *self {}
        }
    }

    impl Voice {
        pub fn detach(self) {
            match self {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn asset_dir(name: &str, files: &[&str]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("renju-sound-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        for f in files {
            fs::write(dir.join(f), b"RIFF").unwrap();
        }
        dir
    }

    #[test]
    fn test_no_dir_disables_everything() {
        let mut sound = AssetSoundtrack::new(None);
        for cue in SoundCue::ALL {
            assert!(!sound.is_available(cue));
        }
        assert!(!sound.has_output());
        sound.start_loop(SoundCue::Background);
        assert_eq!(sound.looping(), None);
        sound.play(SoundCue::Click);
    }

    #[test]
    fn test_missing_asset_is_reported() {
        let dir = asset_dir("missing", &["click.wav"]);
        assert!(AssetSoundtrack::resolve(Some(&dir), SoundCue::Click).is_ok());
        let err = AssetSoundtrack::resolve(Some(&dir), SoundCue::Win).unwrap_err();
        assert_eq!(err, SoundError::Missing(dir.join("win.wav")));
        assert!(err.to_string().ends_with("win.wav not found"));

        let sound = AssetSoundtrack::new(Some(&dir));
        assert!(sound.is_available(SoundCue::Click));
        assert!(!sound.is_available(SoundCue::Win));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_broken_assets_stay_silent() {
        // Truncated files never reach a sink, with or without a device
        let dir = asset_dir("broken", &["click.wav", "win.wav", "background.wav"]);
        let mut sound = AssetSoundtrack::new(Some(&dir));

        sound.start_loop(SoundCue::Background);
        assert_eq!(sound.looping(), None);
        sound.play(SoundCue::Click);
        sound.stop_loop();
        assert_eq!(sound.looping(), None);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_error_messages() {
        let err = SoundError::Decode {
            path: PathBuf::from("win.wav"),
            reason: "bad header".to_string(),
        };
        assert_eq!(err.to_string(), "cannot decode win.wav: bad header");
        assert_eq!(
            SoundError::NoAssetDir("click.wav").to_string(),
            "no asset directory configured for click.wav"
        );
    }

    #[cfg(not(feature = "audio"))]
    #[test]
    fn test_without_backend_nothing_opens() {
        assert_eq!(playback::Output::open().unwrap_err(), SoundError::NoBackend);

        let dir = asset_dir("nobackend", &["click.wav"]);
        let sound = AssetSoundtrack::new(Some(&dir));
        assert!(sound.is_available(SoundCue::Click));
        assert!(!sound.has_output());
        let _ = fs::remove_dir_all(&dir);
    }

    #[cfg(feature = "audio")]
    mod decoding {
        use super::*;

        /// Mono 16-bit PCM wav holding `samples` of silence
        fn silent_wav(samples: u32) -> Vec<u8> {
            let data_len = samples * 2;
            let mut bytes = Vec::new();
            bytes.extend_from_slice(b"RIFF");
            bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
            bytes.extend_from_slice(b"WAVEfmt ");
            bytes.extend_from_slice(&16u32.to_le_bytes());
            bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
            bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
            bytes.extend_from_slice(&8000u32.to_le_bytes());
            bytes.extend_from_slice(&16000u32.to_le_bytes());
            bytes.extend_from_slice(&2u16.to_le_bytes());
            bytes.extend_from_slice(&16u16.to_le_bytes());
            bytes.extend_from_slice(b"data");
            bytes.extend_from_slice(&data_len.to_le_bytes());
            bytes.resize(bytes.len() + data_len as usize, 0);
            bytes
        }

        #[test]
        fn test_truncated_file_is_a_decode_error() {
            let dir = asset_dir("truncated", &["win.wav"]);
            let path = dir.join("win.wav");
            let err = playback::decode(&path).unwrap_err();
            assert!(matches!(err, SoundError::Decode { path: p, .. } if p == path));
            let _ = fs::remove_dir_all(&dir);
        }

        #[test]
        fn test_missing_file_is_an_open_error() {
            let path = std::env::temp_dir().join("renju-sound-nowhere.wav");
            let err = playback::decode(&path).unwrap_err();
            assert!(matches!(err, SoundError::Open { .. }));
        }

        #[test]
        fn test_valid_wav_decodes() {
            let dir = asset_dir("valid", &[]);
            let path = dir.join("click.wav");
            fs::write(&path, silent_wav(80)).unwrap();

            let source = playback::decode(&path).unwrap();
            assert_eq!(rodio::Source::channels(&source), 1);
            assert_eq!(rodio::Source::sample_rate(&source), 8000);
            let _ = fs::remove_dir_all(&dir);
        }
    }
}
