use anyhow::{Result, anyhow};
use ratatui::crossterm::{
    ExecutableCommand,
    cursor::MoveToColumn,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::{
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

pub mod app_core;
pub mod config;
pub mod domain;
pub mod key_handler;
pub mod logging;
pub mod player;
pub mod scrub;
pub mod tui;
pub mod ui_state;

pub use config::TapeConfig;
pub use player::PlayerHandle;
pub use ui_state::UiState;

// ~60fps
pub const REFRESH_RATE: Duration = Duration::from_millis(16);

pub const CONFIG_DIRECTORY: &str = "tapedeck";
pub const CONFIG_FILE: &str = "config.toml";
pub const LOG_DIRECTORY: &str = "logs";

/// `m:ss:mmm`, the deck's counter.
pub fn get_readable_duration(duration: Duration) -> String {
    let mut secs = duration.as_secs();
    let millis = duration.subsec_millis();
    let mins = secs / 60;
    secs %= 60;

    format!("{mins}:{secs:02}:{millis:03}")
}

/// Counter text for a playback time in seconds. Negative or non-finite
/// times read as zero.
pub fn tape_time(seconds: f64) -> String {
    let secs = match seconds.is_finite() {
        true => seconds.max(0.0),
        false => 0.0,
    };
    get_readable_duration(Duration::from_secs_f64(secs))
}

pub fn overwrite_line(message: &str) -> Result<()> {
    let mut stdout = std::io::stdout();
    stdout
        .execute(MoveToColumn(0))?
        .execute(Clear(ClearType::CurrentLine))?
        .execute(Print(message))?;
    stdout.flush()?;
    Ok(())
}

pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory!"))?;

    if path_str == "~" {
        return Ok(home);
    }

    match path_str
        .strip_prefix("~/")
        .or_else(|| path_str.strip_prefix("~\\"))
    {
        Some(rest) => Ok(home.join(rest)),
        None => Err(anyhow!("Cannot expand user directory in {path_str}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tape_time_shows_millis() {
        assert_eq!(tape_time(0.0), "0:00:000");
        assert_eq!(tape_time(1.25), "0:01:250");
        assert_eq!(tape_time(75.5), "1:15:500");
        assert_eq!(tape_time(600.0), "10:00:000");
    }

    #[test]
    fn tape_time_treats_garbage_as_zero() {
        assert_eq!(tape_time(-3.0), "0:00:000");
        assert_eq!(tape_time(f64::NAN), "0:00:000");
    }

    #[test]
    fn readable_duration_rolls_minutes() {
        assert_eq!(get_readable_duration(Duration::from_millis(83_007)), "1:23:007");
    }

    #[test]
    fn tilde_expands_to_home() {
        let home = dirs::home_dir().expect("no home dir in test env");
        assert_eq!(expand_tilde("~").unwrap(), home);
        assert_eq!(expand_tilde("~/audio").unwrap(), home.join("audio"));
        assert_eq!(
            expand_tilde("/srv/audio").unwrap(),
            PathBuf::from("/srv/audio")
        );
        assert!(expand_tilde("~someone/audio").is_err());
    }
}
