pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the server wire format
// ---------------------------------------------------------------------------

/// Synthesized error text for polls that never produced a usable payload.
pub const UNAVAILABLE_MESSAGE: &str = "Unable to load tournament data.";

/// Envelope returned by the status endpoint.
///
/// `configured` and `error` are independent of `tournament`: the server can
/// report a failed upstream fetch while still serving a stale cached
/// tournament body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusPayload {
    pub configured: bool,
    pub error: Option<String>,
    pub fetched_at: Option<String>,
    pub tournament: Option<Tournament>,
}

impl StatusPayload {
    /// The payload a poll cycle publishes when the request itself failed.
    /// Failures render as an explicit error state, never as a silent no-op.
    pub fn unavailable() -> Self {
        Self {
            configured: true,
            error: Some(UNAVAILABLE_MESSAGE.to_string()),
            fetched_at: None,
            tournament: None,
        }
    }

    pub fn fetched_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.fetched_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tournament {
    pub name: String,
    pub state: TournamentState,
    pub game_name: Option<String>,
    pub total_participants: Option<u32>,
    pub total_matches: Option<u32>,
    pub url: Option<String>,
    pub current_match: Option<Match>,
    pub upcoming_matches: Vec<Match>,
    pub recent_matches: Vec<Match>,
    pub rounds: Vec<Round>,
    pub participants: Vec<Participant>,
}

/// Tournament lifecycle state. Unknown raw values are carried through
/// verbatim so the UI can show whatever the provider reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TournamentState {
    #[default]
    Pending,
    Open,
    Underway,
    Complete,
    Other(String),
}

impl TournamentState {
    /// Case-insensitive parse of the raw state string.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return TournamentState::Other(String::new());
        };
        match raw.to_ascii_lowercase().as_str() {
            "pending" => TournamentState::Pending,
            "open" => TournamentState::Open,
            "underway" => TournamentState::Underway,
            "complete" => TournamentState::Complete,
            _ => TournamentState::Other(raw.to_string()),
        }
    }

    /// Human label: Complete→"Final", Underway→"In Progress",
    /// Pending/Open→"Upcoming", anything else verbatim.
    pub fn label(&self) -> &str {
        match self {
            TournamentState::Pending | TournamentState::Open => "Upcoming",
            TournamentState::Underway => "In Progress",
            TournamentState::Complete => "Final",
            TournamentState::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Match {
    pub id: Option<i64>,
    /// Signed provider round number; negative rounds are the losers bracket.
    pub round: Option<i64>,
    pub round_label: Option<String>,
    pub player1_name: Option<String>,
    pub player2_name: Option<String>,
    pub winner_slot: Option<WinnerSlot>,
    pub score_text: Option<String>,
    pub status_text: Option<String>,
}

impl Match {
    /// Round title with the generated fallback when the server sent none.
    pub fn round_title(&self) -> String {
        match self.round_label.as_deref() {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => round_label_for(self.round),
        }
    }
}

/// Which of the two rendered player slots won. Exactly these two sentinel
/// values exist on the wire; anything else means "no winner".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinnerSlot {
    Player1,
    Player2,
}

impl WinnerSlot {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "player1" => Some(WinnerSlot::Player1),
            "player2" => Some(WinnerSlot::Player2),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Round {
    pub round: Option<i64>,
    pub round_label: Option<String>,
    pub matches: Vec<Match>,
}

impl Round {
    pub fn round_title(&self) -> String {
        match self.round_label.as_deref() {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => round_label_for(self.round),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Participant {
    pub name: String,
    pub seed: Option<u32>,
    pub checked_in: bool,
}

/// The only field the bracket change watcher consumes. `updated_at` is an
/// opaque identity token — already stringified, never compared ordinally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BracketMeta {
    pub updated_at: Option<String>,
}

// ---------------------------------------------------------------------------
// Label / score fallbacks (mirroring the server-side normalizer)
// ---------------------------------------------------------------------------

/// "Round n" for positive rounds, "Losers Round n" for the losers bracket,
/// plain "Round" when the number is unknown.
pub fn round_label_for(round: Option<i64>) -> String {
    match round {
        Some(n) if n > 0 => format!("Round {n}"),
        Some(n) if n < 0 => format!("Losers Round {}", n.unsigned_abs()),
        _ => "Round".to_string(),
    }
}

/// Pretty-print a `scores_csv` value shaped `"a-b"` as `"a – b"`.
/// Any other shape passes through verbatim.
pub fn score_text_from_csv(csv: &str) -> String {
    let mut parts = csv.splitn(2, '-');
    match (parts.next(), parts.next()) {
        (Some(left), Some(right)) if !right.contains('-') => {
            format!("{} – {}", left.trim(), right.trim())
        }
        _ => csv.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_labels_follow_lookup_table() {
        assert_eq!(TournamentState::parse(Some("complete")).label(), "Final");
        assert_eq!(TournamentState::parse(Some("Underway")).label(), "In Progress");
        assert_eq!(TournamentState::parse(Some("pending")).label(), "Upcoming");
        assert_eq!(TournamentState::parse(Some("open")).label(), "Upcoming");
        assert_eq!(TournamentState::parse(Some("group_stage")).label(), "group_stage");
    }

    #[test]
    fn state_parse_is_case_insensitive() {
        assert_eq!(TournamentState::parse(Some("COMPLETE")), TournamentState::Complete);
        assert_eq!(TournamentState::parse(Some("UnderWay")), TournamentState::Underway);
    }

    #[test]
    fn winner_slot_accepts_only_the_two_sentinels() {
        assert_eq!(WinnerSlot::parse("player1"), Some(WinnerSlot::Player1));
        assert_eq!(WinnerSlot::parse("player2"), Some(WinnerSlot::Player2));
        assert_eq!(WinnerSlot::parse("player3"), None);
        assert_eq!(WinnerSlot::parse(""), None);
    }

    #[test]
    fn round_label_fallbacks() {
        assert_eq!(round_label_for(Some(2)), "Round 2");
        assert_eq!(round_label_for(Some(-3)), "Losers Round 3");
        assert_eq!(round_label_for(None), "Round");
        assert_eq!(round_label_for(Some(0)), "Round");
    }

    #[test]
    fn score_text_formats_two_part_csv() {
        assert_eq!(score_text_from_csv("3-1"), "3 – 1");
        assert_eq!(score_text_from_csv(" 10 - 7 "), "10 – 7");
    }

    #[test]
    fn score_text_passes_odd_shapes_through() {
        assert_eq!(score_text_from_csv("3-1,2-3"), "3-1,2-3");
        assert_eq!(score_text_from_csv("forfeit"), "forfeit");
    }

    #[test]
    fn match_round_title_prefers_server_label() {
        let m = Match {
            round: Some(2),
            round_label: Some("Semifinals".into()),
            ..Default::default()
        };
        assert_eq!(m.round_title(), "Semifinals");

        let m = Match { round: Some(-1), ..Default::default() };
        assert_eq!(m.round_title(), "Losers Round 1");
    }

    #[test]
    fn fetched_at_parses_rfc3339() {
        let payload = StatusPayload {
            fetched_at: Some("2024-01-01T00:00:00+00:00".into()),
            ..Default::default()
        };
        assert!(payload.fetched_at_utc().is_some());

        let garbage = StatusPayload {
            fetched_at: Some("last tuesday".into()),
            ..Default::default()
        };
        assert!(garbage.fetched_at_utc().is_none());
    }
}
