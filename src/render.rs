//! Pure projection of a status payload onto region content.
//!
//! Every function here maps payload data to `tui` text values without
//! touching a terminal, so region content is asserted on directly in tests.
//! The draw pass rebuilds each region's widget from these functions every
//! frame; feeding the same payload twice therefore produces identical
//! content, with nothing accumulated from the previous render.

use arena_api::{Match, Participant, Round, StatusPayload, Tournament, WinnerSlot};
use chrono::{DateTime, Utc};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};

pub const NAME_FALLBACK: &str = "Tournament";
pub const TBD: &str = "TBD";
pub const MISSING: &str = "—";

pub const UNCONFIGURED_MESSAGE: &str = "Challonge integration is not configured.";
pub const NO_LIVE_MATCH: &str = "No live match right now.";
pub const NO_UPCOMING: &str = "No upcoming matches have been posted.";
pub const NO_RECENT: &str = "No completed matches yet.";
pub const ROUNDS_PENDING: &str = "Bracket data will appear once matches are seeded.";
pub const NO_PARTICIPANTS: &str = "No participants registered yet.";

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn error_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

pub fn winner_style() -> Style {
    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
}

/// Banner precedence: unconfigured beats any same-cycle error string; no
/// banner at all when configured and error-free.
pub fn banner_message(payload: &StatusPayload) -> Option<&str> {
    if !payload.configured {
        Some(UNCONFIGURED_MESSAGE)
    } else {
        payload.error.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Status summary region
// ---------------------------------------------------------------------------

pub fn status_summary(payload: &StatusPayload) -> Vec<Line<'static>> {
    let tournament = payload.tournament.as_ref();
    let mut lines = Vec::new();

    if let Some(message) = banner_message(payload) {
        lines.push(Line::from(Span::styled(message.to_string(), error_style())));
    }

    let name = tournament
        .map(|t| t.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(NAME_FALLBACK);
    lines.push(Line::from(Span::styled(
        name.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let state_label = tournament
        .map(|t| t.state.label())
        .filter(|label| !label.is_empty())
        .unwrap_or(MISSING);
    let mut state_spans = vec![Span::raw(state_label.to_string())];
    if let Some(game) = tournament.and_then(|t| t.game_name.as_deref()) {
        state_spans.push(Span::styled(format!(" · {game}"), dim()));
    }
    lines.push(Line::from(state_spans));

    lines.push(Line::from(format!(
        "Participants: {} · Matches: {}",
        count_or_missing(tournament.and_then(|t| t.total_participants)),
        count_or_missing(tournament.and_then(|t| t.total_matches)),
    )));

    lines.push(Line::from(Span::styled(
        format!("Updated {}", updated_marker(payload.fetched_at_utc())),
        dim(),
    )));

    // The bracket link renders only when a URL exists; no placeholder line.
    if let Some(url) = tournament.and_then(|t| t.url.as_deref()) {
        lines.push(Line::from(vec![
            Span::styled("Bracket: ".to_string(), dim()),
            Span::raw(url.to_string()),
        ]));
    }

    lines
}

fn count_or_missing(count: Option<u32>) -> String {
    count.map(|n| n.to_string()).unwrap_or_else(|| MISSING.to_string())
}

fn updated_marker(fetched_at: Option<DateTime<Utc>>) -> String {
    fetched_at
        .map(|dt| dt.format("%H:%M:%S UTC").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

// ---------------------------------------------------------------------------
// Current match region
// ---------------------------------------------------------------------------

pub fn current_match(tournament: Option<&Tournament>) -> Vec<Line<'static>> {
    match tournament.and_then(|t| t.current_match.as_ref()) {
        None => vec![Line::from(Span::styled(NO_LIVE_MATCH, dim()))],
        Some(m) => match_card(m),
    }
}

pub fn match_card(m: &Match) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(m.round_title(), dim())),
        Line::from(player_span(m, WinnerSlot::Player1)),
        Line::from(Span::styled("vs", dim())),
        Line::from(player_span(m, WinnerSlot::Player2)),
    ];
    if let Some(score) = &m.score_text {
        lines.push(Line::from(score.clone()));
    }
    if let Some(status) = &m.status_text {
        lines.push(Line::from(Span::styled(status.clone(), dim())));
    }
    lines
}

/// The slot's player name with the winner highlight applied when the match's
/// winner marker points at this slot.
fn player_span(m: &Match, slot: WinnerSlot) -> Span<'static> {
    let name = match slot {
        WinnerSlot::Player1 => m.player1_name.as_deref(),
        WinnerSlot::Player2 => m.player2_name.as_deref(),
    }
    .unwrap_or(TBD)
    .to_string();

    if m.winner_slot == Some(slot) {
        Span::styled(name, winner_style())
    } else {
        Span::raw(name)
    }
}

// ---------------------------------------------------------------------------
// Match lists (upcoming / recent / per-round)
// ---------------------------------------------------------------------------

/// One rendered list row, tagged with the match id when present so rows can
/// be addressed externally.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRow {
    pub match_id: Option<i64>,
    pub line: Line<'static>,
}

pub fn match_row(m: &Match) -> MatchRow {
    let mut spans = vec![
        Span::styled(format!("{} · ", m.round_title()), dim()),
        player_span(m, WinnerSlot::Player1),
        Span::styled(" vs ", dim()),
        player_span(m, WinnerSlot::Player2),
    ];
    if let Some(score) = &m.score_text {
        spans.push(Span::raw(format!("  {score}")));
    }
    if let Some(status) = &m.status_text {
        spans.push(Span::styled(format!("  · {status}"), dim()));
    }
    MatchRow { match_id: m.id, line: Line::from(spans) }
}

pub fn match_list(matches: &[Match], empty_message: &'static str) -> Vec<Line<'static>> {
    if matches.is_empty() {
        return vec![Line::from(Span::styled(empty_message, dim()))];
    }
    matches.iter().map(|m| match_row(m).line).collect()
}

// ---------------------------------------------------------------------------
// Rounds region
// ---------------------------------------------------------------------------

/// One card per round: bold title line plus the compact rows.
pub fn round_card(round: &Round) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        round.round_title(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    lines.extend(match_list(&round.matches, "No matches in this round yet."));
    lines
}

pub fn round_cards(tournament: Option<&Tournament>) -> Vec<Vec<Line<'static>>> {
    tournament
        .map(|t| t.rounds.as_slice())
        .unwrap_or_default()
        .iter()
        .map(round_card)
        .collect()
}

// ---------------------------------------------------------------------------
// Participants region
// ---------------------------------------------------------------------------

pub fn participants(tournament: Option<&Tournament>) -> Vec<Line<'static>> {
    let roster: &[Participant] = tournament
        .map(|t| t.participants.as_slice())
        .unwrap_or_default();
    if roster.is_empty() {
        return vec![Line::from(Span::styled(NO_PARTICIPANTS, dim()))];
    }

    roster
        .iter()
        .map(|p| {
            let seed = p
                .seed
                .map(|s| format!("{s:>3}"))
                .unwrap_or_else(|| format!("{MISSING:>3}"));
            let check = if p.checked_in {
                Span::styled(" ✓", winner_style())
            } else {
                Span::styled(" ·", dim())
            };
            Line::from(vec![
                Span::styled(seed, dim()),
                Span::raw(format!("  {}", p.name)),
                check,
            ])
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use arena_api::TournamentState;

    fn reference_payload() -> StatusPayload {
        StatusPayload {
            configured: true,
            error: None,
            fetched_at: Some("2024-01-01T00:00:00Z".into()),
            tournament: Some(Tournament {
                name: "Cup".into(),
                state: TournamentState::Underway,
                total_participants: Some(8),
                total_matches: Some(7),
                url: Some("https://x".into()),
                ..Default::default()
            }),
        }
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn region_text(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(line_text).collect()
    }

    #[test]
    fn rendering_twice_is_idempotent() {
        let payload = reference_payload();
        assert_eq!(status_summary(&payload), status_summary(&payload));
        assert_eq!(
            current_match(payload.tournament.as_ref()),
            current_match(payload.tournament.as_ref())
        );
        assert_eq!(
            round_cards(payload.tournament.as_ref()),
            round_cards(payload.tournament.as_ref())
        );
    }

    #[test]
    fn reference_payload_renders_per_lookup_table() {
        let payload = reference_payload();
        let text = region_text(&status_summary(&payload));

        assert_eq!(text[0], "Cup");
        assert_eq!(text[1], "In Progress");
        assert_eq!(text[2], "Participants: 8 · Matches: 7");
        assert!(text[3].starts_with("Updated 00:00:00"));
        assert_eq!(text[4], "Bracket: https://x");
        // No error banner line anywhere.
        assert!(!text.iter().any(|l| l.contains(UNCONFIGURED_MESSAGE)));
    }

    #[test]
    fn url_line_is_omitted_when_absent() {
        let mut payload = reference_payload();
        payload.tournament.as_mut().unwrap().url = None;
        let text = region_text(&status_summary(&payload));
        assert!(!text.iter().any(|l| l.starts_with("Bracket:")));
    }

    #[test]
    fn missing_counts_render_placeholders() {
        let payload = StatusPayload {
            configured: true,
            tournament: Some(Tournament::default()),
            ..Default::default()
        };
        let text = region_text(&status_summary(&payload));
        assert_eq!(text[0], NAME_FALLBACK);
        assert_eq!(text[2], format!("Participants: {MISSING} · Matches: {MISSING}"));
        assert_eq!(text[3], format!("Updated {MISSING}"));
    }

    #[test]
    fn unconfigured_banner_beats_error_string() {
        let payload = StatusPayload {
            configured: false,
            error: Some("some other failure".into()),
            ..Default::default()
        };
        assert_eq!(banner_message(&payload), Some(UNCONFIGURED_MESSAGE));

        let text = region_text(&status_summary(&payload));
        assert_eq!(text[0], UNCONFIGURED_MESSAGE);
        assert!(!text.iter().any(|l| l.contains("some other failure")));
    }

    #[test]
    fn configured_error_renders_verbatim() {
        let payload = StatusPayload {
            configured: true,
            error: Some("Upstream fetch failed.".into()),
            ..Default::default()
        };
        assert_eq!(banner_message(&payload), Some("Upstream fetch failed."));
    }

    #[test]
    fn no_current_match_renders_exactly_the_placeholder() {
        let payload = reference_payload();
        let lines = current_match(payload.tournament.as_ref());
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), NO_LIVE_MATCH);

        // Same placeholder when there is no tournament at all.
        let lines = current_match(None);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), NO_LIVE_MATCH);
    }

    #[test]
    fn winner_highlight_lands_on_exactly_the_winning_slot() {
        let m = Match {
            player1_name: Some("Crusher".into()),
            player2_name: Some("Sawblade".into()),
            winner_slot: Some(WinnerSlot::Player2),
            ..Default::default()
        };
        let row = match_row(&m);
        let styles: Vec<Style> = row.line.spans.iter().map(|s| s.style).collect();
        // Spans: round · , player1, " vs ", player2.
        assert_ne!(styles[1], winner_style());
        assert_eq!(styles[3], winner_style());

        // Slot highlighting is independent of the name strings.
        let m = Match {
            winner_slot: Some(WinnerSlot::Player2),
            ..Default::default()
        };
        let row = match_row(&m);
        assert_eq!(row.line.spans[3].content.as_ref(), TBD);
        assert_eq!(row.line.spans[3].style, winner_style());
    }

    #[test]
    fn match_card_uses_tbd_for_absent_names() {
        let lines = match_card(&Match::default());
        let text = region_text(&lines);
        assert_eq!(text, vec!["Round", TBD, "vs", TBD]);
    }

    #[test]
    fn match_card_includes_score_and_status_when_present() {
        let m = Match {
            round: Some(2),
            player1_name: Some("Crusher".into()),
            player2_name: Some("Sawblade".into()),
            score_text: Some("3 – 1".into()),
            status_text: Some("Round 2 · Final".into()),
            ..Default::default()
        };
        let text = region_text(&match_card(&m));
        assert_eq!(text[0], "Round 2");
        assert!(text.contains(&"3 – 1".to_string()));
        assert!(text.contains(&"Round 2 · Final".to_string()));
    }

    #[test]
    fn empty_upcoming_list_renders_the_designated_message() {
        let lines = match_list(&[], NO_UPCOMING);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), NO_UPCOMING);
    }

    #[test]
    fn match_rows_carry_the_match_id() {
        let m = Match { id: Some(4242), ..Default::default() };
        assert_eq!(match_row(&m).match_id, Some(4242));
        assert_eq!(match_row(&Match::default()).match_id, None);
    }

    #[test]
    fn round_cards_use_label_or_generated_fallback() {
        let t = Tournament {
            rounds: vec![
                Round {
                    round: Some(1),
                    round_label: Some("Quarterfinals".into()),
                    matches: vec![],
                },
                Round { round: Some(-2), round_label: None, matches: vec![] },
            ],
            ..Default::default()
        };
        let cards = round_cards(Some(&t));
        assert_eq!(cards.len(), 2);
        assert_eq!(line_text(&cards[0][0]), "Quarterfinals");
        assert_eq!(line_text(&cards[1][0]), "Losers Round 2");
    }

    #[test]
    fn empty_roster_renders_placeholder() {
        let lines = participants(None);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), NO_PARTICIPANTS);
    }

    #[test]
    fn roster_rows_show_seed_name_and_checkin() {
        let t = Tournament {
            participants: vec![Participant {
                name: "Crusher".into(),
                seed: Some(1),
                checked_in: true,
            }],
            ..Default::default()
        };
        let lines = participants(Some(&t));
        assert_eq!(line_text(&lines[0]), "  1  Crusher ✓");
    }
}
