/// Raw wire types — serde shapes for deserializing event-server responses.
/// Every field is optional; the mapping layer in client.rs turns these into
/// the clean domain types with explicit fallbacks.
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Tournament status  (/api/tournament/status)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawStatusPayload {
    pub configured: Option<bool>,
    pub error: Option<String>,
    pub fetched_at: Option<String>,
    pub tournament: Option<RawTournament>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawTournament {
    pub name: Option<String>,
    pub state: Option<String>,
    pub game_name: Option<String>,
    pub url: Option<String>,
    pub total_participants: Option<u32>,
    pub total_matches: Option<u32>,
    pub current_match: Option<RawMatch>,
    pub upcoming_matches: Option<Vec<RawMatch>>,
    pub recent_matches: Option<Vec<RawMatch>>,
    pub rounds: Option<Vec<RawRound>>,
    pub participants: Option<Vec<RawParticipant>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawMatch {
    pub id: Option<i64>,
    pub round: Option<i64>,
    pub round_label: Option<String>,
    pub player1_name: Option<String>,
    pub player2_name: Option<String>,
    /// "player1" | "player2"; anything else means no winner.
    pub winner_slot: Option<String>,
    pub scores_csv: Option<String>,
    pub score_text: Option<String>,
    pub status_text: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawRound {
    pub round: Option<i64>,
    pub round_label: Option<String>,
    pub matches: Option<Vec<RawMatch>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawParticipant {
    pub name: Option<String>,
    pub seed: Option<u32>,
    pub checked_in: Option<bool>,
}

// ---------------------------------------------------------------------------
// Bracket  (watcher endpoint)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawBracketResponse {
    pub meta: Option<RawBracketMeta>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawBracketMeta {
    /// String or number on the wire; compared only for identity.
    pub updated_at: Option<serde_json::Value>,
}
