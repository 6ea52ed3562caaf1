use log::warn;
use serde::Deserialize;
use std::time::Duration;

pub const BRACKET_CONFIG_ENV: &str = "PITVIEW_BRACKET_CONFIG";
pub const BRACKET_MARKER_ENV: &str = "PITVIEW_BRACKET_MARKER";

/// Validated bracket-watcher configuration. The watcher is not started at
/// all unless a config block passes validation.
#[derive(Debug, Clone)]
pub struct BracketWatchConfig {
    pub api_url: String,
    pub refresh_interval: Duration,
    /// Marker known before the first poll (the server-rendered baseline),
    /// so an update that landed before startup is caught on the first tick.
    pub initial_marker: Option<String>,
}

/// Wire shape of the config block: one JSON object with camelCase keys,
/// matching what the event server embeds for its own clients.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawBracketWatchConfig {
    api_url: Option<String>,
    refresh_interval: Option<i64>,
}

/// Read the watcher config from `PITVIEW_BRACKET_CONFIG` and the optional
/// baseline marker from `PITVIEW_BRACKET_MARKER`. Returns None (and logs
/// why) when the watcher should stay disabled.
pub fn bracket_watch_config() -> Option<BracketWatchConfig> {
    let block = std::env::var(BRACKET_CONFIG_ENV).ok();
    let marker = std::env::var(BRACKET_MARKER_ENV).ok();
    bracket_watch_config_from(block.as_deref(), marker)
}

pub fn bracket_watch_config_from(
    block: Option<&str>,
    marker: Option<String>,
) -> Option<BracketWatchConfig> {
    let block = block.map(str::trim).filter(|b| !b.is_empty())?;

    let raw: RawBracketWatchConfig = match serde_json::from_str(block) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("bracket watcher disabled: {BRACKET_CONFIG_ENV} is not valid JSON: {err}");
            return None;
        }
    };

    let api_url = match raw.api_url.map(|u| u.trim().to_string()) {
        Some(url) if !url.is_empty() => url,
        _ => {
            warn!("bracket watcher disabled: config block has no apiUrl");
            return None;
        }
    };

    let refresh_interval = match raw.refresh_interval {
        Some(ms) if ms > 0 => Duration::from_millis(ms as u64),
        Some(ms) => {
            warn!("bracket watcher disabled: refreshInterval {ms} is not a positive number");
            return None;
        }
        None => {
            warn!("bracket watcher disabled: config block has no refreshInterval");
            return None;
        }
    };

    Some(BracketWatchConfig {
        api_url,
        refresh_interval,
        initial_marker: marker.filter(|m| !m.trim().is_empty()),
    })
}
