//! In-memory backend for exercising the player thread without an audio device.

use crate::player::TapeBackend;
use anyhow::{Result, anyhow};
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

pub(crate) const TAPE_LEN: Duration = Duration::from_secs(10);

#[derive(Default)]
pub(crate) struct FakeTape {
    pub loaded: Option<PathBuf>,
    pub position: Duration,
    pub paused: bool,
    pub ended: bool,
    pub plays: usize,
}

/// Files whose path contains "missing" fail to load. Every loaded file is
/// `TAPE_LEN` long.
pub(crate) struct FakeBackend(pub Arc<Mutex<FakeTape>>);

impl FakeBackend {
    fn tape(&self) -> MutexGuard<'_, FakeTape> {
        self.0.lock().unwrap()
    }

    fn load(&mut self, path: &Path, paused: bool) -> Result<()> {
        if path.to_string_lossy().contains("missing") {
            return Err(anyhow!("no such file"));
        }
        let mut tape = self.tape();
        tape.loaded = Some(path.to_path_buf());
        tape.position = Duration::ZERO;
        tape.paused = paused;
        tape.ended = false;
        Ok(())
    }
}

impl TapeBackend for FakeBackend {
    fn play(&mut self, path: &Path) -> Result<()> {
        self.load(path, false)?;
        self.tape().plays += 1;
        Ok(())
    }

    fn cue(&mut self, path: &Path) -> Result<()> {
        self.load(path, true)
    }

    fn pause(&mut self) {
        self.tape().paused = true;
    }

    fn resume(&mut self) {
        self.tape().paused = false;
    }

    fn stop(&mut self) {
        let mut tape = self.tape();
        let plays = tape.plays;
        *tape = FakeTape {
            plays,
            ..Default::default()
        };
    }

    fn seek(&mut self, pos: Duration) -> Result<()> {
        self.tape().position = pos;
        Ok(())
    }

    fn position(&self) -> Duration {
        self.tape().position
    }

    fn duration(&self) -> Duration {
        match self.tape().loaded {
            Some(_) => TAPE_LEN,
            None => Duration::ZERO,
        }
    }

    fn is_paused(&self) -> bool {
        self.tape().paused
    }

    fn is_stopped(&self) -> bool {
        let tape = self.tape();
        tape.loaded.is_none() || tape.ended
    }

    fn track_ended(&self) -> bool {
        let tape = self.tape();
        tape.loaded.is_some() && tape.ended
    }
}

/// A backend factory sharing its tape with the caller.
pub(crate) fn fake_backend() -> (
    Arc<Mutex<FakeTape>>,
    impl FnOnce() -> Result<Box<dyn TapeBackend>> + Send + 'static,
) {
    let tape = Arc::new(Mutex::new(FakeTape::default()));
    let shared = Arc::clone(&tape);
    (tape, move || {
        Ok(Box::new(FakeBackend(shared)) as Box<dyn TapeBackend>)
    })
}
