use crate::state::app_settings::AppSettings;
use crate::state::app_state::AppState;
use arena_api::StatusPayload;
use log::info;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Overview,
    Rounds,
    Participants,
    Help,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new() -> Self {
        let settings = AppSettings::load();

        let app = Self {
            state: AppState::new(),
            settings,
        };

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        app
    }

    // -----------------------------------------------------------------------
    // Poll / watcher handlers — called from main_ui_loop
    // -----------------------------------------------------------------------

    pub fn on_status_loaded(&mut self, payload: StatusPayload) {
        self.state.status.load(payload);
    }

    /// Full reload: the bracket changed upstream, so all derived view state
    /// is torn down and rebuilt from the next poll, exactly as if the client
    /// had just started. Settings survive; everything else resets.
    pub fn on_bracket_changed(&mut self, marker: &str) {
        info!("reloading view for bracket marker {marker}");
        let reloads = self.state.reload_count + 1;
        self.state = AppState::new();
        self.state.reload_count = reloads;
    }

    // -----------------------------------------------------------------------
    // Tab management
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        if self.state.active_tab == next {
            return;
        }
        self.state.previous_tab = self.state.active_tab;
        self.state.active_tab = next;
    }

    pub fn exit_help(&mut self) {
        if self.state.active_tab == MenuItem::Help {
            self.state.active_tab = self.state.previous_tab;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    // -----------------------------------------------------------------------
    // Scrolling — delegated to StatusState
    // -----------------------------------------------------------------------

    pub fn scroll_down(&mut self) {
        self.state.status.scroll_down(self.state.active_tab);
    }

    pub fn scroll_up(&mut self) {
        self.state.status.scroll_up(self.state.active_tab);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_change_resets_state_but_keeps_reload_count() {
        let mut app = App::new();
        app.state.status.load(StatusPayload::unavailable());
        app.state.status.rounds_scroll = 7;
        app.update_tab(MenuItem::Rounds);

        app.on_bracket_changed("marker-b");

        assert!(app.state.status.payload.is_none());
        assert_eq!(app.state.status.rounds_scroll, 0);
        assert_eq!(app.state.active_tab, MenuItem::Overview);
        assert_eq!(app.state.reload_count, 1);

        app.on_bracket_changed("marker-c");
        assert_eq!(app.state.reload_count, 2);
    }

    #[test]
    fn exiting_help_returns_to_the_previous_tab() {
        let mut app = App::new();
        app.update_tab(MenuItem::Rounds);
        app.update_tab(MenuItem::Help);
        app.exit_help();
        assert_eq!(app.state.active_tab, MenuItem::Rounds);
    }
}
