use crate::config::BracketWatchConfig;
use crate::state::messages::NetworkResponse;
use arena_api::client::ArenaApi;
use log::{debug, info};
use tokio::sync::mpsc;
use tokio::time::interval;

/// Baseline tracking for the bracket update marker.
///
/// Unseen → Armed on the first observed marker; that transition is a
/// seeding, never a change. While armed, a differing marker is a change and
/// re-arms on the new value (the equivalent of a reloaded page re-seeding
/// from its freshly rendered marker).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaselineState {
    Unseen,
    Armed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchSignal {
    /// No marker this poll, or the marker matched the baseline.
    None,
    /// First marker observed; baseline captured without firing.
    Seeded,
    /// Marker diverged from the baseline.
    Changed(String),
}

impl BaselineState {
    pub fn seeded(marker: Option<String>) -> Self {
        match marker {
            Some(marker) if !marker.is_empty() => BaselineState::Armed(marker),
            _ => BaselineState::Unseen,
        }
    }

    pub fn observe(&mut self, marker: Option<&str>) -> WatchSignal {
        let Some(marker) = marker else {
            return WatchSignal::None;
        };
        match self {
            BaselineState::Unseen => {
                *self = BaselineState::Armed(marker.to_owned());
                WatchSignal::Seeded
            }
            BaselineState::Armed(baseline) if baseline == marker => WatchSignal::None,
            BaselineState::Armed(_) => {
                *self = BaselineState::Armed(marker.to_owned());
                WatchSignal::Changed(marker.to_owned())
            }
        }
    }
}

/// Polls the bracket endpoint on a fixed tick and publishes `BracketChanged`
/// when the update marker diverges from the baseline. Unlike the status
/// poller this runs on a free ticker: a tick only reads and compares, and a
/// duplicate change event is harmless because the reload it triggers is
/// idempotent.
pub struct BracketChangeWatcher {
    client: ArenaApi,
    config: BracketWatchConfig,
    baseline: BaselineState,
    responses: mpsc::Sender<NetworkResponse>,
}

impl BracketChangeWatcher {
    pub fn new(
        client: ArenaApi,
        config: BracketWatchConfig,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        let baseline = BaselineState::seeded(config.initial_marker.clone());
        Self { client, config, baseline, responses }
    }

    pub async fn run(mut self) {
        let mut ticker = interval(self.config.refresh_interval);
        // Skip the immediate first tick; the first comparison happens one
        // full interval after startup, like the source system's timer.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if !self.poll_once().await {
                break;
            }
        }
    }

    /// One watch tick. Failures and ambiguous payloads are "no signal":
    /// they neither advance the baseline nor trigger a reload.
    async fn poll_once(&mut self) -> bool {
        let meta = match self.client.fetch_bracket_meta(&self.config.api_url).await {
            Ok(meta) => meta,
            Err(err) => {
                debug!("bracket poll failed: {err}");
                return true;
            }
        };

        match self.baseline.observe(meta.updated_at.as_deref()) {
            WatchSignal::Changed(marker) => {
                info!("bracket updated (marker {marker}); requesting reload");
                self.responses
                    .send(NetworkResponse::BracketChanged { marker })
                    .await
                    .is_ok()
            }
            WatchSignal::Seeded => {
                debug!("bracket baseline seeded");
                true
            }
            WatchSignal::None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_seeds_without_firing() {
        let mut state = BaselineState::Unseen;
        assert_eq!(state.observe(Some("a")), WatchSignal::Seeded);
        assert_eq!(state, BaselineState::Armed("a".into()));
    }

    #[test]
    fn unchanged_marker_never_fires() {
        let mut state = BaselineState::Unseen;
        state.observe(Some("a"));
        assert_eq!(state.observe(Some("a")), WatchSignal::None);
        assert_eq!(state.observe(Some("a")), WatchSignal::None);
    }

    #[test]
    fn divergence_fires_exactly_once_per_change() {
        // First poll "a" → seed, second "a" → nothing, third "b" → change.
        let mut state = BaselineState::Unseen;
        assert_eq!(state.observe(Some("a")), WatchSignal::Seeded);
        assert_eq!(state.observe(Some("a")), WatchSignal::None);
        assert_eq!(state.observe(Some("b")), WatchSignal::Changed("b".into()));
        // The diverged marker is the new baseline; no repeat fire.
        assert_eq!(state.observe(Some("b")), WatchSignal::None);
    }

    #[test]
    fn missing_marker_is_a_no_op_poll() {
        let mut state = BaselineState::Unseen;
        assert_eq!(state.observe(None), WatchSignal::None);
        assert_eq!(state, BaselineState::Unseen);

        state.observe(Some("a"));
        assert_eq!(state.observe(None), WatchSignal::None);
        assert_eq!(state, BaselineState::Armed("a".into()));
    }

    #[test]
    fn preseeded_baseline_detects_divergence_on_first_poll() {
        let mut state = BaselineState::seeded(Some("rendered-at-startup".into()));
        assert_eq!(
            state.observe(Some("newer")),
            WatchSignal::Changed("newer".into())
        );
    }

    #[test]
    fn empty_preseed_is_unseen() {
        assert_eq!(BaselineState::seeded(Some(String::new())), BaselineState::Unseen);
        assert_eq!(BaselineState::seeded(None), BaselineState::Unseen);
    }
}
