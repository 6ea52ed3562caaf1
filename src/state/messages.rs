use crate::state::poller::LoadingState;
use arena_api::StatusPayload;
use crossterm::event::KeyEvent;

/// Requests into the status poller. A request wakes the sleeping poll loop
/// early; it never spawns a second concurrent cycle.
#[derive(Debug, Clone)]
pub enum NetworkRequest {
    RefreshStatus,
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    /// One per poll cycle — success and failure both arrive as a payload.
    StatusLoaded { payload: StatusPayload },
    /// The bracket update marker diverged from the watcher's baseline.
    BracketChanged { marker: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
}
