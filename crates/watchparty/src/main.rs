//! WatchParty - Shared viewing session player
//!
//! Headless host for the watch screen: wires the playback controller to a
//! clock-backed media element and drives the closed loop on a single
//! thread. Stdin lines become UI actions; every tick the element advances
//! and its progress folds back into displayed state.

mod actions;
mod config;
mod logging_setup;
mod screen;

use crate::config::UserConfig;
use crate::screen::{UiAction, WatchScreen};
use anyhow::{Context, Result};
use crossbeam_channel::{unbounded, Receiver};
use std::cell::RefCell;
use std::io::BufRead;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{info, trace, warn};
use watchparty_core::party::{load_party, Member};
use watchparty_player::ClockElement;

fn main() -> Result<()> {
    let config = UserConfig::load();
    let _log_guard = logging_setup::init(&config.log)?;

    let party_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.party_path.clone())
        .context("No party snapshot given; pass a path or set party_path in the config")?;
    let party = load_party(&party_path)
        .with_context(|| format!("Failed to load party snapshot: {:?}", party_path))?;
    info!("Joined party {} watching \"{}\"", party.id, party.video.title);
    info!("Shared position: {:.1}s", party.current_time);

    let viewer = Member {
        id: "local".to_string(),
        name: config.display_name.clone(),
        avatar_url: None,
    };
    let mut screen = WatchScreen::new(party, viewer);

    let element = Rc::new(RefCell::new(ClockElement::for_video(&screen.party.video)?));
    screen.attach_element(element.clone());

    let commands = spawn_stdin_reader();
    info!("Commands: open, close, play, seek <secs>, say <text>, quit");

    let tick = Duration::from_secs_f64(1.0 / f64::from(config.tick_hz.max(1)));
    let mut last_tick = Instant::now();
    let mut last_state = screen.playback();

    loop {
        while let Ok(line) = commands.try_recv() {
            match parse_command(&line) {
                Some(action) => screen.push_action(action),
                None => {
                    if !line.trim().is_empty() {
                        warn!("Unrecognized command: {}", line.trim());
                    }
                }
            }
        }

        if actions::handle_ui_actions(&mut screen) {
            break;
        }

        let dt = last_tick.elapsed().as_secs_f64();
        last_tick = Instant::now();
        element.borrow_mut().advance(dt);
        screen.element_time_progress();

        let state = screen.playback();
        if state != last_state {
            let props = screen.overlay_props();
            trace!(
                time = props.time,
                timestamp = %screen.timestamp_label(),
                is_playing = props.is_playing,
                is_open = props.is_open,
                "Overlay updated"
            );
            last_state = state;
        }

        std::thread::sleep(tick);
    }

    screen.detach_element();
    info!("Left the party at {}", screen.timestamp_label());
    Ok(())
}

/// Forward stdin lines to the update loop without blocking it.
fn spawn_stdin_reader() -> Receiver<String> {
    let (sender, receiver) = unbounded();
    std::thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if sender.send(line).is_err() {
                    break;
                }
            }
        })
        .expect("Failed to spawn stdin reader thread");
    receiver
}

fn parse_command(line: &str) -> Option<UiAction> {
    let line = line.trim();
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    match command {
        "open" => Some(UiAction::OpenControls),
        "close" => Some(UiAction::CloseControls),
        "play" => Some(UiAction::TogglePlay),
        "seek" => rest.trim().parse::<f64>().ok().map(UiAction::Seek),
        "say" => {
            let body = rest.trim();
            (!body.is_empty()).then(|| UiAction::SendChat(body.to_string()))
        }
        "quit" | "exit" => Some(UiAction::Quit),
        _ => None,
    }
}
