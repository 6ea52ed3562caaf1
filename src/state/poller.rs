use crate::state::messages::{NetworkRequest, NetworkResponse};
use arena_api::StatusPayload;
use arena_api::client::{ApiResult, ArenaApi};
use log::{debug, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

/// Fixed delay between the end of one poll cycle and the start of the next.
pub const STATUS_POLL_INTERVAL: Duration = Duration::from_millis(15_000);

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

/// Status poll loop. Cycles are strictly serialized: the next fetch is
/// scheduled only after the previous one has resolved and published, so a
/// slow endpoint can never cause request pile-up. A `RefreshStatus` request
/// wakes the inter-cycle sleep early.
pub struct StatusPoller {
    client: ArenaApi,
    interval: Duration,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    is_loading: Arc<AtomicBool>,
}

impl StatusPoller {
    pub fn new(
        client: ArenaApi,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            client,
            interval: STATUS_POLL_INTERVAL,
            requests,
            responses,
            is_loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn run(mut self) {
        // First cycle runs immediately on startup; each later cycle starts a
        // fixed delay after the previous one completed.
        loop {
            self.start_loading_animation().await;
            let result = self.client.fetch_status().await;
            debug!("status poll complete");
            self.stop_loading_animation(result.is_ok()).await;

            let payload = collapse_status_result(result);
            if self
                .responses
                .send(NetworkResponse::StatusLoaded { payload })
                .await
                .is_err()
            {
                break;
            }

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                request = self.requests.recv() => {
                    match request {
                        Some(NetworkRequest::RefreshStatus) => debug!("manual status refresh"),
                        None => break,
                    }
                }
            }
        }
    }

    async fn start_loading_animation(&self) {
        self.is_loading.store(true, Ordering::Relaxed);

        let mut loading_state =
            LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[0] };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged { loading_state })
            .await;

        let responses = self.responses.clone();
        let is_loading = self.is_loading.clone();

        tokio::spawn(async move {
            let mut spinner_index = 1;
            let mut interval = tokio::time::interval(Duration::from_millis(33));
            loop {
                interval.tick().await;
                if !is_loading.load(Ordering::Relaxed) {
                    break;
                }
                loading_state.spinner_char = SPINNER_CHARS[spinner_index];
                spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();
                let _ = responses
                    .send(NetworkResponse::LoadingStateChanged { loading_state })
                    .await;
            }
        });
    }

    async fn stop_loading_animation(&self, is_ok: bool) {
        self.is_loading.store(false, Ordering::Relaxed);
        tokio::time::sleep(Duration::from_millis(15)).await;

        let spinner_char = if is_ok { ' ' } else { ERROR_CHAR };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged {
                loading_state: LoadingState { is_loading: false, spinner_char },
            })
            .await;
    }
}

/// Collapse a fetch outcome into the payload to render. Transport and parse
/// failures are logged and become the synthesized "unable to load" payload;
/// the poll loop itself never terminates on error.
pub fn collapse_status_result(result: ApiResult<StatusPayload>) -> StatusPayload {
    match result {
        Ok(payload) => payload,
        Err(err) => {
            warn!("status poll failed: {err}");
            StatusPayload::unavailable()
        }
    }
}
