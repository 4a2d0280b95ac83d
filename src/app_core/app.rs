use crate::{
    TapeConfig,
    key_handler::{self, handle_key_event, handle_mouse_event},
    player::PlayerHandle,
    scrub::Spinner,
    tui,
    ui_state::{Mode, UiState},
};
use anyhow::Result;
use ratatui::crossterm::{
    ExecutableCommand,
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
};

pub struct TapeDeck {
    pub(crate) config: TapeConfig,
    pub(crate) ui: UiState,
    pub(crate) player: PlayerHandle,
    spinner: Spinner,
}

impl TapeDeck {
    pub fn new(config: TapeConfig) -> Self {
        Self::with_player(config, PlayerHandle::spawn())
    }

    pub fn with_player(config: TapeConfig, player: PlayerHandle) -> Self {
        let ui = UiState::new(
            config.catalog.clone(),
            &config.default_language,
            player.metrics(),
        );
        let spinner = Spinner::new(config.frame_interval, config.spin_step);

        TapeDeck {
            config,
            ui,
            player,
            spinner,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        std::io::stdout().execute(EnableMouseCapture)?;
        terminal.clear()?;

        let result = self.main_loop(&mut terminal);

        let _ = std::io::stdout().execute(DisableMouseCapture);
        ratatui::restore();

        result
    }

    fn main_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<()> {
        self.cue_current()?;

        // MAIN ROUTINE
        loop {
            self.tick();

            for event in key_handler::next_events()? {
                self.handle_event(event);
            }

            terminal.draw(|f| tui::render(f, &mut self.ui))?;

            if self.ui.get_mode() == Mode::QUIT {
                self.player.stop()?;
                break;
            }
        }

        Ok(())
    }

    /// Per-frame bookkeeping: player events, counter sync and reel spin.
    pub(crate) fn tick(&mut self) {
        self.handle_player_events();
        self.ui.sync_playback();

        self.spinner.set_running(self.ui.is_playing());
        self.ui.spin(self.spinner.drain());
    }

    fn handle_event(&mut self, event: Event) {
        let action = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(key, &self.ui),
            Event::Mouse(mouse) => handle_mouse_event(mouse, &self.ui),
            _ => None,
        };

        if let Some(action) = action {
            if let Err(e) = self.handle_action(action) {
                self.ui.set_error(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        key_handler::{Action, TrackStep},
        player::testing::{FakeTape, TAPE_LEN, fake_backend},
        ui_state::{ReelSide, cell_to_pointer},
    };
    use ratatui::layout::Rect;
    use std::{
        f64::consts::PI,
        path::PathBuf,
        sync::{Arc, Mutex},
        thread,
        time::{Duration, Instant},
    };

    const WAIT: Duration = Duration::from_secs(2);

    fn deck() -> (TapeDeck, Arc<Mutex<FakeTape>>) {
        let (tape, make_backend) = fake_backend();
        let config = TapeConfig {
            audio_dir: PathBuf::from("/audio"),
            ..TapeConfig::default()
        };
        let mut deck = TapeDeck::with_player(config, PlayerHandle::spawn_with(make_backend));
        deck.cue_current().unwrap();
        wait_for(|| deck.player.metrics().is_paused());
        (deck, tape)
    }

    fn wait_for(mut check: impl FnMut() -> bool) {
        let start = Instant::now();
        while !check() {
            assert!(start.elapsed() < WAIT, "condition not reached in time");
            thread::sleep(Duration::from_millis(2));
        }
    }

    #[test]
    fn startup_cues_default_track() {
        let (deck, tape) = deck();
        assert_eq!(
            tape.lock().unwrap().loaded,
            Some(PathBuf::from("/audio/English.mp3"))
        );
        assert!(!deck.ui.is_playing());
    }

    #[test]
    fn toggle_starts_tape_and_spins_reels() {
        let (mut deck, _) = deck();
        deck.handle_action(Action::TogglePlayback).unwrap();
        wait_for(|| deck.player.metrics().is_playing());

        deck.tick();
        assert!(deck.ui.is_playing());

        thread::sleep(deck.config.frame_interval * 3);
        deck.tick();
        assert!(deck.ui.reels.rotation.radians() > 0.0);
    }

    #[test]
    fn dragging_a_reel_seeks_the_player() {
        let (mut deck, tape) = deck();
        deck.ui
            .reels
            .set_area(ReelSide::Left, Some(Rect::new(0, 0, 20, 10)));

        // under the hub, right to left, is a forward wind
        deck.handle_action(Action::BeginDrag(ReelSide::Left, cell_to_pointer(15, 6)))
            .unwrap();
        deck.handle_action(Action::ContinueDrag(cell_to_pointer(4, 6)))
            .unwrap();

        assert!(deck.ui.current_time() > 0.0);
        let target = Duration::from_secs_f64(deck.ui.current_time());
        wait_for(|| tape.lock().unwrap().position == target);

        deck.handle_action(Action::EndDrag).unwrap();
        assert!(!deck.ui.reels.any_dragging());
    }

    #[test]
    fn winding_back_from_start_stays_at_zero() {
        let (mut deck, _) = deck();
        deck.handle_action(Action::Wind(-PI)).unwrap();
        assert_eq!(deck.ui.current_time(), 0.0);
        assert_eq!(deck.ui.reels.rotation.radians(), -PI);
    }

    #[test]
    fn keyboard_winds_accumulate_across_frames() {
        let (mut deck, tape) = deck();
        deck.handle_action(Action::Wind(PI)).unwrap();
        deck.tick();
        assert_eq!(deck.ui.current_time(), 2.5);

        deck.handle_action(Action::Wind(PI)).unwrap();
        deck.tick();
        assert_eq!(deck.ui.current_time(), 5.0);
        wait_for(|| tape.lock().unwrap().position == Duration::from_secs(5));
    }

    #[test]
    fn winding_past_the_end_clamps() {
        let (mut deck, tape) = deck();
        deck.handle_action(Action::Wind(40.0 * PI)).unwrap();
        assert_eq!(deck.ui.current_time(), TAPE_LEN.as_secs_f64());
        wait_for(|| tape.lock().unwrap().position == TAPE_LEN);
    }

    #[test]
    fn switching_track_while_paused_cues_it() {
        let (mut deck, tape) = deck();
        deck.handle_action(Action::SelectTrack(TrackStep::Next))
            .unwrap();

        assert_eq!(deck.ui.current_track().id, "hi");
        wait_for(|| {
            tape.lock().unwrap().loaded == Some(PathBuf::from("/audio/Hindi.mp3"))
        });
        assert_eq!(tape.lock().unwrap().plays, 0);
    }

    #[test]
    fn switching_track_while_playing_keeps_playing() {
        let (mut deck, tape) = deck();
        deck.handle_action(Action::TogglePlayback).unwrap();
        wait_for(|| deck.player.metrics().is_playing());
        deck.tick();

        deck.handle_action(Action::SelectTrack(TrackStep::Index(4)))
            .unwrap();
        wait_for(|| tape.lock().unwrap().plays == 1);
        wait_for(|| {
            tape.lock().unwrap().loaded == Some(PathBuf::from("/audio/Bengali.mp3"))
        });
        assert!(deck.player.metrics().is_playing());
    }

    #[test]
    fn player_errors_open_popup() {
        let (mut deck, _) = deck();
        deck.config.audio_dir = PathBuf::from("/missing");
        deck.handle_action(Action::SelectTrack(TrackStep::Prev))
            .unwrap();

        wait_for(|| {
            deck.tick();
            deck.ui.get_error().is_some()
        });
        deck.handle_action(Action::ClosePopup).unwrap();
        assert!(deck.ui.get_error().is_none());
    }

    #[test]
    fn quit_sets_mode() {
        let (mut deck, _) = deck();
        deck.handle_action(Action::QUIT).unwrap();
        assert_eq!(deck.ui.get_mode(), Mode::QUIT);
    }
}
