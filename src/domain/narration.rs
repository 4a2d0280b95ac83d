use std::path::{Path, PathBuf};

/// One narrated language track: an audio file plus the script it reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationTrack {
    pub id: String,
    pub label: String,
    pub file: PathBuf,
    pub text: String,
}

impl NarrationTrack {
    pub fn new(id: &str, label: &str, file: impl Into<PathBuf>, text: &str) -> Self {
        NarrationTrack {
            id: id.to_string(),
            label: label.to_string(),
            file: file.into(),
            text: text.to_string(),
        }
    }

    /// Script split on blank lines, empty blocks dropped.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.text
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Absolute files are kept as-is, anything else is looked up in `audio_dir`.
    pub fn resolve(&self, audio_dir: &Path) -> PathBuf {
        match self.file.is_absolute() {
            true => self.file.clone(),
            false => audio_dir.join(&self.file),
        }
    }
}
