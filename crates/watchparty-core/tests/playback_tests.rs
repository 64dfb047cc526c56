use watchparty_core::playback::{transition, PlaybackState, PlayerIntent};

#[test]
fn test_default_state() {
    let state = PlaybackState::default();
    assert_eq!(state.time, 0.0);
    assert!(!state.is_playing);
    assert!(!state.is_open);
}

#[test]
fn test_open_then_seek_scenario() {
    // Screen opens seeded at the party's shared position, viewer opens the
    // overlay and drags to 100s.
    let state = PlaybackState::seeded(42.0);

    let state = transition(&state, &PlayerIntent::OpenControls);
    assert_eq!(
        state,
        PlaybackState {
            time: 42.0,
            is_playing: false,
            is_open: true,
        }
    );

    let state = transition(&state, &PlayerIntent::Seek { time: 100.0 });
    assert_eq!(
        state,
        PlaybackState {
            time: 100.0,
            is_playing: false,
            is_open: true,
        }
    );
}

#[test]
fn test_progress_while_playing_scenario() {
    let state = PlaybackState {
        time: 10.0,
        is_playing: true,
        is_open: true,
    };
    let state = transition(&state, &PlayerIntent::TimeUpdate { time: 10.5 });
    assert_eq!(
        state,
        PlaybackState {
            time: 10.5,
            is_playing: true,
            is_open: true,
        }
    );
}

#[test]
fn test_intents_commute_where_fields_are_orthogonal() {
    // Opening the overlay and toggling playback touch different fields, so
    // order must not matter.
    let state = PlaybackState::seeded(3.0);

    let a = transition(
        &transition(&state, &PlayerIntent::OpenControls),
        &PlayerIntent::PlayToggle,
    );
    let b = transition(
        &transition(&state, &PlayerIntent::PlayToggle),
        &PlayerIntent::OpenControls,
    );
    assert_eq!(a, b);
}

#[test]
fn test_transition_does_not_mutate_input() {
    let state = PlaybackState::seeded(1.0);
    let _ = transition(&state, &PlayerIntent::Seek { time: 99.0 });
    assert_eq!(state.time, 1.0);
}

#[test]
fn test_serialization_roundtrip() {
    let state = PlaybackState {
        time: 12.25,
        is_playing: true,
        is_open: false,
    };
    let json = serde_json::to_string(&state).expect("Failed to serialize PlaybackState");
    let back: PlaybackState = serde_json::from_str(&json).expect("Failed to deserialize");
    assert_eq!(state, back);
}
