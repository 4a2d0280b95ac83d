use std::path::{Path, PathBuf};

/// A narration file as the player sees it.
#[derive(Debug, Clone)]
pub struct TrackSource {
    id: String,
    path: PathBuf,
}

impl TrackSource {
    pub fn new(id: &str, path: PathBuf) -> Self {
        TrackSource {
            id: id.to_string(),
            path,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
