use crate::app::MenuItem;
use arena_api::{StatusPayload, Tournament};

// ---------------------------------------------------------------------------
// Tournament status state
// ---------------------------------------------------------------------------

/// Latest poll result plus per-region scroll offsets. The payload is
/// replaced wholesale every cycle; nothing from the previous poll survives.
#[derive(Debug, Default)]
pub struct StatusState {
    pub payload: Option<StatusPayload>,
    pub rounds_scroll: u16,
    pub participants_scroll: u16,
}

impl StatusState {
    /// Store a freshly polled payload. Scroll positions are kept so a
    /// background refresh doesn't yank the view around.
    pub fn load(&mut self, payload: StatusPayload) {
        self.payload = Some(payload);
    }

    pub fn tournament(&self) -> Option<&Tournament> {
        self.payload.as_ref().and_then(|p| p.tournament.as_ref())
    }

    pub fn scroll_down(&mut self, tab: MenuItem) {
        match tab {
            MenuItem::Rounds => self.rounds_scroll = self.rounds_scroll.saturating_add(1),
            MenuItem::Participants => {
                self.participants_scroll = self.participants_scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    pub fn scroll_up(&mut self, tab: MenuItem) {
        match tab {
            MenuItem::Rounds => self.rounds_scroll = self.rounds_scroll.saturating_sub(1),
            MenuItem::Participants => {
                self.participants_scroll = self.participants_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub show_logs: bool,
    pub status: StatusState,
    /// Count of full reloads triggered by the bracket change watcher.
    pub reload_count: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_replaces_the_previous_payload() {
        let mut state = StatusState::default();
        state.load(StatusPayload { configured: false, ..Default::default() });
        state.load(StatusPayload { configured: true, ..Default::default() });
        assert!(state.payload.as_ref().is_some_and(|p| p.configured));
    }

    #[test]
    fn scrolling_only_moves_the_active_tab_region() {
        let mut state = StatusState::default();
        state.scroll_down(MenuItem::Rounds);
        state.scroll_down(MenuItem::Rounds);
        state.scroll_down(MenuItem::Participants);
        assert_eq!(state.rounds_scroll, 2);
        assert_eq!(state.participants_scroll, 1);

        state.scroll_up(MenuItem::Overview);
        assert_eq!(state.rounds_scroll, 2);

        state.scroll_up(MenuItem::Rounds);
        state.scroll_up(MenuItem::Rounds);
        state.scroll_up(MenuItem::Rounds);
        assert_eq!(state.rounds_scroll, 0);
    }
}
