use serde::Deserialize;

/// Raw shape of `config.toml`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigImport {
    pub audio_dir: Option<String>,
    pub seconds_per_revolution: Option<f64>,
    pub spin_step: Option<f64>,
    pub frame_millis: Option<u64>,
    pub default_language: Option<String>,
    pub logging: LoggingImport,
    pub tracks: Vec<TrackImport>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingImport {
    pub dir: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackImport {
    pub id: String,
    pub label: String,
    pub file: String,
    pub text: Option<String>,
}
