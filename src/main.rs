use std::path::PathBuf;
use tapedeck::{TapeConfig, app_core::TapeDeck, logging::init_logging, overwrite_line};

const HELP: &str = "\
tapedeck: a terminal tape deck for narrated tracks

USAGE:
  tapedeck [OPTIONS]

OPTIONS:
  --config <PATH>     Read settings from PATH instead of the user config
  --audio-dir <DIR>   Look for track audio in DIR
  --lang <ID>         Start on the track with this id (en, hi, mr, te, bn)
  -h, --help          Print this help
";

struct Flags {
    config: Option<PathBuf>,
    audio_dir: Option<String>,
    lang: Option<String>,
}

fn parse_flags() -> anyhow::Result<Option<Flags>> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        config: args.opt_value_from_str("--config")?,
        audio_dir: args.opt_value_from_str("--audio-dir")?,
        lang: args.opt_value_from_str("--lang")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        anyhow::bail!("Unexpected arguments: {rest:?}");
    }

    Ok(Some(flags))
}

fn main() -> anyhow::Result<()> {
    let Some(flags) = parse_flags()? else {
        return Ok(());
    };

    let mut config = TapeConfig::load(flags.config.as_deref())?;
    if let Some(dir) = flags.audio_dir {
        config = config.with_audio_dir(&dir)?;
    }
    if let Some(lang) = flags.lang {
        config = config.with_language(&lang);
    }

    let _guard = init_logging(&config.log_dir, &config.log_level)?;
    tracing::info!(
        audio_dir = %config.audio_dir.display(),
        tracks = config.catalog.len(),
        "Starting tapedeck"
    );

    let result = TapeDeck::new(config).run();
    if let Err(e) = &result {
        tracing::error!("{e:#}");
    }

    overwrite_line("Tape ejected. Goodbye!\n\n")?;
    result
}
