use crate::app::{App, MenuItem};
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;

    match (key_event.code, key_event.modifiers) {
        // Quit
        (Char('q'), _) | (Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Tab switching
        (Char('1'), _) => guard.update_tab(MenuItem::Overview),
        (Char('2'), _) => guard.update_tab(MenuItem::Rounds),
        (Char('3'), _) => guard.update_tab(MenuItem::Participants),
        (Char('?'), _) => guard.update_tab(MenuItem::Help),
        (KeyCode::Esc, _) => guard.exit_help(),

        // Scrolling
        (Char('j') | KeyCode::Down, _) => guard.scroll_down(),
        (Char('k') | KeyCode::Up, _) => guard.scroll_up(),

        // Manual refresh — wakes the poll loop early, never a second cycle.
        (Char('r'), _) => {
            drop(guard);
            let _ = network_requests.send(NetworkRequest::RefreshStatus).await;
        }

        // Global
        (Char('f'), _) => guard.toggle_full_screen(),
        (Char('"'), _) => guard.toggle_show_logs(),

        _ => {}
    }
}
