//! UI action processing.

use crate::screen::{UiAction, WatchScreen};
use tracing::{debug, info};

/// Drain and apply the surface's pending actions.
///
/// Returns true when the host should exit.
pub fn handle_ui_actions(screen: &mut WatchScreen) -> bool {
    let mut exit_requested = false;

    for action in screen.take_actions() {
        debug!(?action, "Handling UI action");
        match action {
            UiAction::OpenControls => screen.controller_mut().open_controls(),
            UiAction::CloseControls => screen.controller_mut().close_controls(),
            UiAction::TogglePlay => screen.controller_mut().toggle_play(),
            UiAction::Seek(time) => screen.controller_mut().seek(time),
            UiAction::SendChat(body) => {
                info!("{}: {}", screen.viewer().name, body);
                screen.send_own_message(body);
            }
            UiAction::Quit => {
                info!("Exit requested");
                exit_requested = true;
            }
        }
    }

    exit_requested
}
