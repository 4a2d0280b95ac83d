mod config_import;

use crate::{
    CONFIG_DIRECTORY, CONFIG_FILE, LOG_DIRECTORY,
    domain::{Catalog, NarrationTrack},
    expand_tilde,
};
use anyhow::{Context, Result, bail};
use config_import::ConfigImport;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

const DEFAULT_SECONDS_PER_REVOLUTION: f64 = 5.0;
const DEFAULT_SPIN_STEP: f64 = 0.02;
const DEFAULT_FRAME_MILLIS: u64 = 16;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct TapeConfig {
    pub audio_dir: PathBuf,
    /// Seconds of tape wound by one full turn of a reel.
    pub seconds_per_revolution: f64,
    /// Radians the reels turn per frame while playing.
    pub spin_step: f64,
    pub frame_interval: Duration,
    pub default_language: String,
    pub log_dir: PathBuf,
    pub log_level: String,
    pub catalog: Catalog,
}

impl Default for TapeConfig {
    fn default() -> Self {
        TapeConfig {
            audio_dir: default_audio_dir(),
            seconds_per_revolution: DEFAULT_SECONDS_PER_REVOLUTION,
            spin_step: DEFAULT_SPIN_STEP,
            frame_interval: Duration::from_millis(DEFAULT_FRAME_MILLIS),
            default_language: String::from("en"),
            log_dir: default_log_dir(),
            log_level: String::from(DEFAULT_LOG_LEVEL),
            catalog: Catalog::builtin(),
        }
    }
}

impl TapeConfig {
    /// Loads `path` if given, otherwise the user config file when present.
    /// A missing user config yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => match default_config_path() {
                Some(p) if p.exists() => Self::load_from_file(&p),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_str = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        let import = toml::from_str::<ConfigImport>(&file_str)
            .with_context(|| format!("Malformed config file {}", path.display()))?;

        Self::try_from(import)
    }

    pub fn with_audio_dir(mut self, dir: &str) -> Result<Self> {
        self.audio_dir = expand_tilde(dir)?;
        Ok(self)
    }

    pub fn with_language(mut self, id: &str) -> Self {
        self.default_language = id.to_string();
        self
    }
}

impl TryFrom<ConfigImport> for TapeConfig {
    type Error = anyhow::Error;

    fn try_from(import: ConfigImport) -> Result<Self> {
        let defaults = TapeConfig::default();

        let seconds_per_revolution = import
            .seconds_per_revolution
            .unwrap_or(defaults.seconds_per_revolution);
        if !seconds_per_revolution.is_finite() || seconds_per_revolution <= 0.0 {
            bail!("seconds_per_revolution must be a positive number");
        }

        let spin_step = import.spin_step.unwrap_or(defaults.spin_step);
        if !spin_step.is_finite() || spin_step < 0.0 {
            bail!("spin_step must be zero or a positive number");
        }

        let frame_interval = match import.frame_millis {
            Some(0) => bail!("frame_millis must be at least 1"),
            Some(ms) => Duration::from_millis(ms),
            None => defaults.frame_interval,
        };

        let audio_dir = match import.audio_dir {
            Some(dir) => expand_tilde(dir)?,
            None => defaults.audio_dir,
        };

        let log_dir = match import.logging.dir {
            Some(dir) => expand_tilde(dir)?,
            None => defaults.log_dir,
        };

        let catalog = match import.tracks.is_empty() {
            true => defaults.catalog,
            false => Catalog::new(
                import
                    .tracks
                    .into_iter()
                    .map(|t| {
                        let text = t
                            .text
                            .or_else(|| Catalog::builtin_text(&t.id))
                            .unwrap_or_default();
                        NarrationTrack::new(&t.id, &t.label, t.file, &text)
                    })
                    .collect(),
            )?,
        };

        Ok(TapeConfig {
            audio_dir,
            seconds_per_revolution,
            spin_step,
            frame_interval,
            default_language: import
                .default_language
                .unwrap_or(defaults.default_language),
            log_dir,
            log_level: import.logging.level.unwrap_or(defaults.log_level),
            catalog,
        })
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIRECTORY).join(CONFIG_FILE))
}

fn default_audio_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(CONFIG_DIRECTORY).join("audio"))
        .unwrap_or_else(|| PathBuf::from("audio"))
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(CONFIG_DIRECTORY).join(LOG_DIRECTORY))
        .unwrap_or_else(|| PathBuf::from(LOG_DIRECTORY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_config(body: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, body).expect("failed to write config");
        (dir, path)
    }

    #[test]
    fn empty_file_gives_defaults() {
        let (_dir, path) = write_config("");
        let config = TapeConfig::load_from_file(&path).expect("load failed");

        assert_eq!(config.seconds_per_revolution, 5.0);
        assert_eq!(config.spin_step, 0.02);
        assert_eq!(config.frame_interval, Duration::from_millis(16));
        assert_eq!(config.default_language, "en");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.catalog.len(), 5);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let (_dir, path) = write_config(
            r#"
audio_dir = "/srv/narration"
seconds_per_revolution = 8.0
spin_step = 0.05
frame_millis = 33
default_language = "te"

[logging]
level = "debug"
dir = "/tmp/tapedeck-logs"
"#,
        );
        let config = TapeConfig::load_from_file(&path).expect("load failed");

        assert_eq!(config.audio_dir, PathBuf::from("/srv/narration"));
        assert_eq!(config.seconds_per_revolution, 8.0);
        assert_eq!(config.spin_step, 0.05);
        assert_eq!(config.frame_interval, Duration::from_millis(33));
        assert_eq!(config.default_language, "te");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/tapedeck-logs"));
    }

    #[test]
    fn custom_tracks_replace_catalog() {
        let (_dir, path) = write_config(
            r#"
[[tracks]]
id = "hi"
label = "Hindi"
file = "hindi-v2.ogg"

[[tracks]]
id = "ta"
label = "Tamil"
file = "Tamil.mp3"
text = "Vanakkam.\n\nSecond paragraph."
"#,
        );
        let config = TapeConfig::load_from_file(&path).expect("load failed");
        let tracks = config.catalog.tracks();

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].file, PathBuf::from("hindi-v2.ogg"));
        assert_eq!(Some(tracks[0].text.clone()), Catalog::builtin_text("hi"));
        assert_eq!(tracks[1].paragraphs(), vec!["Vanakkam.", "Second paragraph."]);
    }

    #[test]
    fn rejects_bad_sensitivity() {
        let (_dir, path) = write_config("seconds_per_revolution = 0.0");
        assert!(TapeConfig::load_from_file(&path).is_err());

        let (_dir, path) = write_config("seconds_per_revolution = -2.0");
        assert!(TapeConfig::load_from_file(&path).is_err());
    }

    #[test]
    fn rejects_zero_frame_interval() {
        let (_dir, path) = write_config("frame_millis = 0");
        assert!(TapeConfig::load_from_file(&path).is_err());
    }

    #[test]
    fn rejects_duplicate_tracks() {
        let (_dir, path) = write_config(
            r#"
[[tracks]]
id = "en"
label = "English"
file = "a.mp3"

[[tracks]]
id = "en"
label = "English again"
file = "b.mp3"
"#,
        );
        assert!(TapeConfig::load_from_file(&path).is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        let (_dir, path) = write_config("sensitivity = 3.0");
        let err = TapeConfig::load_from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Malformed"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempdir().expect("failed to create temp dir");
        assert!(TapeConfig::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn overrides_apply() {
        let config = TapeConfig::default()
            .with_audio_dir("/opt/audio")
            .expect("override failed")
            .with_language("bn");

        assert_eq!(config.audio_dir, PathBuf::from("/opt/audio"));
        assert_eq!(config.default_language, "bn");
    }
}
