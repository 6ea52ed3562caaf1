use crate::wire::{
    RawBracketResponse, RawMatch, RawParticipant, RawRound, RawStatusPayload, RawTournament,
};
use crate::{
    BracketMeta, Match, Participant, Round, StatusPayload, Tournament, TournamentState,
    WinnerSlot, score_text_from_csv,
};
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, StatusCode};
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
const STATUS_PATH: &str = "/api/tournament/status";

/// Event-server API client.
#[derive(Debug, Clone)]
pub struct ArenaApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for ArenaApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Http(StatusCode, String),
    Parsing(serde_json::Error, String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Http(status, url) => write!(f, "HTTP {status} for {url}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl ArenaApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::builder()
                .user_agent("pitview/0.1 (terminal tournament status)")
                .build()
                .unwrap_or_default(),
            base_url,
            timeout: Duration::from_secs(10),
        }
    }

    /// Build a client from `PITVIEW_SERVER`, falling back to the local
    /// event-server default.
    pub fn from_env() -> Self {
        match std::env::var("PITVIEW_SERVER") {
            Ok(value) if !value.trim().is_empty() => Self::new(value.trim()),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the normalized tournament status payload.
    ///
    /// Non-2xx responses whose body is still valid payload JSON are used as
    /// the payload; if such a body carries no `error` string, a generic HTTP
    /// failure message is synthesized so the operator sees a failure state
    /// rather than stale or blank content.
    pub async fn fetch_status(&self) -> ApiResult<StatusPayload> {
        let url = format!("{}{STATUS_PATH}", self.base_url);
        let (status, body) = self.get_text(&url).await?;

        match serde_json::from_str::<RawStatusPayload>(&body) {
            Ok(raw) => {
                let mut payload = map_status_payload(raw);
                if !status.is_success() && payload.error.is_none() {
                    payload.error = Some(format!(
                        "Tournament status request failed (HTTP {}).",
                        status.as_u16()
                    ));
                }
                Ok(payload)
            }
            Err(err) if status.is_success() => Err(ApiError::Parsing(err, url)),
            Err(_) => Err(ApiError::Http(status, url)),
        }
    }

    /// Fetch the bracket endpoint and extract `meta.updated_at` as an opaque
    /// marker string. The watcher treats any error here as "no signal".
    pub async fn fetch_bracket_meta(&self, url: &str) -> ApiResult<BracketMeta> {
        let (status, body) = self.get_text(url).await?;
        if !status.is_success() {
            return Err(ApiError::Http(status, url.to_owned()));
        }
        let raw: RawBracketResponse = serde_json::from_str(&body)
            .map_err(|err| ApiError::Parsing(err, url.to_owned()))?;
        Ok(map_bracket_meta(raw))
    }

    /// Every poll must bypass intermediate caches — staleness directly
    /// defeats the feature.
    async fn get_text(&self, url: &str) -> ApiResult<(StatusCode, String)> {
        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;
        Ok((status, body))
    }
}

// ---------------------------------------------------------------------------
// Mapping: wire types → clean domain types
// ---------------------------------------------------------------------------

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn map_status_payload(raw: RawStatusPayload) -> StatusPayload {
    StatusPayload {
        // A payload that omits the flag is assumed configured; only an
        // explicit false triggers the unconfigured banner.
        configured: raw.configured.unwrap_or(true),
        error: non_empty(raw.error),
        fetched_at: non_empty(raw.fetched_at),
        tournament: raw.tournament.map(map_tournament),
    }
}

fn map_tournament(raw: RawTournament) -> Tournament {
    Tournament {
        name: non_empty(raw.name).unwrap_or_default(),
        state: TournamentState::parse(raw.state.as_deref()),
        game_name: non_empty(raw.game_name),
        total_participants: raw.total_participants,
        total_matches: raw.total_matches,
        url: non_empty(raw.url),
        current_match: raw.current_match.map(map_match),
        upcoming_matches: map_matches(raw.upcoming_matches),
        recent_matches: map_matches(raw.recent_matches),
        rounds: raw
            .rounds
            .unwrap_or_default()
            .into_iter()
            .map(map_round)
            .collect(),
        participants: raw
            .participants
            .unwrap_or_default()
            .into_iter()
            .map(map_participant)
            .collect(),
    }
}

fn map_matches(raw: Option<Vec<RawMatch>>) -> Vec<Match> {
    raw.unwrap_or_default().into_iter().map(map_match).collect()
}

fn map_match(raw: RawMatch) -> Match {
    // Prefer the server's pre-formatted score; fall back to formatting the
    // raw scores_csv the same way the server normalizer does.
    let score_text = non_empty(raw.score_text)
        .or_else(|| non_empty(raw.scores_csv).map(|csv| score_text_from_csv(&csv)));
    Match {
        id: raw.id,
        round: raw.round,
        round_label: non_empty(raw.round_label),
        player1_name: non_empty(raw.player1_name),
        player2_name: non_empty(raw.player2_name),
        winner_slot: raw.winner_slot.as_deref().and_then(WinnerSlot::parse),
        score_text,
        status_text: non_empty(raw.status_text),
    }
}

fn map_round(raw: RawRound) -> Round {
    Round {
        round: raw.round,
        round_label: non_empty(raw.round_label),
        matches: map_matches(raw.matches),
    }
}

fn map_participant(raw: RawParticipant) -> Participant {
    Participant {
        name: non_empty(raw.name).unwrap_or_else(|| "TBD".to_string()),
        seed: raw.seed,
        checked_in: raw.checked_in.unwrap_or(false),
    }
}

fn map_bracket_meta(raw: RawBracketResponse) -> BracketMeta {
    let updated_at = raw
        .meta
        .and_then(|meta| meta.updated_at)
        .and_then(|value| stringify_marker(&value));
    BracketMeta { updated_at }
}

/// Stringify the wire marker. Strings and numbers are identity tokens;
/// null and any other JSON type carry no signal.
fn stringify_marker(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
