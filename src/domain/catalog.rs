use super::{NarrationTrack, scripts};
use anyhow::{Result, anyhow, bail};
use std::collections::HashSet;

/// Ordered set of narration tracks the deck can switch between.
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<NarrationTrack>,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        Catalog {
            tracks: vec![
                NarrationTrack::new("en", "English", "English.mp3", scripts::ENGLISH),
                NarrationTrack::new("hi", "Hindi", "Hindi.mp3", scripts::HINDI),
                NarrationTrack::new("mr", "Marathi", "Marathi.mp3", scripts::MARATHI),
                NarrationTrack::new("te", "Telugu", "Telugu.mp3", scripts::TELUGU),
                NarrationTrack::new("bn", "Bengali", "Bengali.mp3", scripts::BENGALI),
            ],
        }
    }

    /// Rejects empty lists and duplicate ids.
    pub fn new(tracks: Vec<NarrationTrack>) -> Result<Self> {
        if tracks.is_empty() {
            bail!("A narration catalog needs at least one track");
        }

        let mut seen = HashSet::new();
        for track in &tracks {
            if !seen.insert(track.id.as_str()) {
                return Err(anyhow!("Duplicate track id: {}", track.id));
            }
        }

        Ok(Catalog { tracks })
    }

    /// Script shipped with the builtin track of the same id, if any.
    pub fn builtin_text(id: &str) -> Option<String> {
        Catalog::builtin().get(id).map(|t| t.text.clone())
    }

    pub fn tracks(&self) -> &[NarrationTrack] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&NarrationTrack> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn at(&self, idx: usize) -> Option<&NarrationTrack> {
        self.tracks.get(idx)
    }

    /// Unknown ids fall back to the first track.
    pub fn find(&self, id: &str) -> &NarrationTrack {
        self.get(id).unwrap_or(&self.tracks[0])
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    /// 1-based position of the track, 1 for unknown ids.
    pub fn track_number(&self, id: &str) -> usize {
        self.position(id).unwrap_or(0) + 1
    }

    pub fn next_id(&self, id: &str) -> &str {
        let idx = self.position(id).map_or(0, |i| (i + 1) % self.len());
        &self.tracks[idx].id
    }

    pub fn prev_id(&self, id: &str) -> &str {
        let idx = match self.position(id) {
            Some(0) | None => self.len() - 1,
            Some(i) => i - 1,
        };
        &self.tracks[idx].id
    }
}
