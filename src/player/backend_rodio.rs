use crate::player::TapeBackend;
use anyhow::{Context, Result};
use lofty::file::AudioFile;
use rodio::decoder::builder::SeekMode;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use std::{fs::File, io::BufReader, path::Path, time::Duration};

pub struct RodioBackend {
    sink: Sink,
    duration: Duration,
    loaded: bool,
    _stream: OutputStream,
}

impl RodioBackend {
    pub fn new() -> Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio prints to stderr on drop, which would land on the TUI
        stream.log_on_drop(false);
        let sink = Sink::connect_new(stream.mixer());

        Ok(Self {
            sink,
            duration: Duration::ZERO,
            loaded: false,
            _stream: stream,
        })
    }

    fn load(&mut self, song: &Path) -> Result<()> {
        let source = decode(song)?;

        self.duration = probe_duration(song)
            .or_else(|| source.total_duration())
            .unwrap_or_default();

        // `clear` leaves the sink paused
        self.sink.clear();
        self.sink.append(source);
        self.loaded = true;

        Ok(())
    }
}

impl TapeBackend for RodioBackend {
    fn play(&mut self, song: &Path) -> Result<()> {
        self.load(song)?;
        self.sink.play();
        Ok(())
    }

    fn cue(&mut self, song: &Path) -> Result<()> {
        self.load(song)
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn resume(&mut self) {
        self.sink.play();
    }

    fn stop(&mut self) {
        self.sink.stop();
        self.loaded = false;
        self.duration = Duration::ZERO;
    }

    fn seek(&mut self, pos: Duration) -> Result<()> {
        self.sink.try_seek(pos)?;
        Ok(())
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn duration(&self) -> Duration {
        self.duration
    }

    fn is_paused(&self) -> bool {
        self.sink.is_paused()
    }

    fn is_stopped(&self) -> bool {
        self.sink.empty()
    }

    fn track_ended(&self) -> bool {
        self.loaded && self.sink.empty()
    }
}

fn probe_duration(song: &Path) -> Option<Duration> {
    lofty::read_from_path(song)
        .ok()
        .map(|tagged| tagged.properties().duration())
        .filter(|d| !d.is_zero())
}

fn decode(song: &Path) -> Result<Decoder<BufReader<File>>> {
    let file = File::open(song).with_context(|| format!("Cannot open {}", song.display()))?;
    let len = file.metadata()?.len();

    let mut builder = Decoder::builder()
        .with_data(BufReader::new(file))
        .with_byte_len(len)
        .with_seek_mode(SeekMode::Fastest)
        .with_seekable(true);

    if let Some(ext) = song.extension().and_then(|e| e.to_str()) {
        let hint = match ext {
            "adif" | "adts" => "aac",
            "m4a" | "m4b" | "mp4" => "audio/mp4",
            "mpga" => "mp3",
            "oga" | "ogx" => "audio/ogg",
            "wave" => "wav",
            _ => ext,
        };
        builder = builder.with_hint(hint);
    }

    Ok(builder.build()?)
}
