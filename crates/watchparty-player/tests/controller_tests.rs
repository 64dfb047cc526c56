use std::cell::RefCell;
use std::rc::Rc;
use watchparty_core::playback::PlaybackState;
use watchparty_player::{ClockElement, MediaElement, PlaybackController};

#[derive(Default)]
struct CountingElement {
    position: f64,
    play_calls: usize,
    pause_calls: usize,
}

impl MediaElement for CountingElement {
    fn play(&mut self) {
        self.play_calls += 1;
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
    }

    fn set_position(&mut self, seconds: f64) {
        self.position = seconds;
    }

    fn position(&self) -> f64 {
        self.position
    }
}

#[test]
fn test_open_then_seek_drives_element() {
    let mut controller = PlaybackController::seeded(42.0);
    let element = Rc::new(RefCell::new(
        ClockElement::new("https://cdn.example.com/stream.mp4").unwrap(),
    ));
    controller.attach(element.clone());

    controller.open_controls();
    assert_eq!(
        controller.state(),
        PlaybackState {
            time: 42.0,
            is_playing: false,
            is_open: true,
        }
    );

    controller.seek(100.0);
    assert_eq!(
        controller.state(),
        PlaybackState {
            time: 100.0,
            is_playing: false,
            is_open: true,
        }
    );
    assert_eq!(element.borrow().position(), 100.0);
}

#[test]
fn test_toggle_calls_play_exactly_once() {
    let mut controller = PlaybackController::new(PlaybackState {
        time: 0.0,
        is_playing: false,
        is_open: true,
    });
    let element = Rc::new(RefCell::new(CountingElement::default()));
    controller.attach(element.clone());
    let pauses_after_attach = element.borrow().pause_calls;

    controller.toggle_play();

    assert_eq!(
        controller.state(),
        PlaybackState {
            time: 0.0,
            is_playing: true,
            is_open: true,
        }
    );
    assert_eq!(element.borrow().play_calls, 1);
    assert_eq!(element.borrow().pause_calls, pauses_after_attach);
}

#[test]
fn test_progress_notification_updates_displayed_time() {
    let mut controller = PlaybackController::new(PlaybackState {
        time: 10.0,
        is_playing: true,
        is_open: true,
    });
    let element = Rc::new(RefCell::new(
        ClockElement::new("https://cdn.example.com/stream.mp4").unwrap(),
    ));
    controller.attach(element.clone());

    element.borrow_mut().set_position(10.5);
    controller.element_time_progress();

    assert_eq!(
        controller.state(),
        PlaybackState {
            time: 10.5,
            is_playing: true,
            is_open: true,
        }
    );
}

#[test]
fn test_closed_loop_session() {
    // Seed from the party snapshot, mount, interact, and let the clock run:
    // the displayed time tracks the element between explicit seeks.
    let mut controller = PlaybackController::seeded(42.0);
    let element = Rc::new(RefCell::new(
        ClockElement::new("https://cdn.example.com/stream.mp4")
            .unwrap()
            .with_duration(3600.0),
    ));
    controller.attach(element.clone());

    controller.open_controls();
    controller.seek(100.0);
    controller.toggle_play();
    assert!(element.borrow().is_playing());

    element.borrow_mut().advance(2.0);
    controller.element_time_progress();
    assert_eq!(controller.state().time, 102.0);
    assert!(controller.state().is_playing);

    controller.toggle_play();
    assert!(!element.borrow().is_playing());
    element.borrow_mut().advance(5.0);
    controller.element_time_progress();
    // Clock held still while paused.
    assert_eq!(controller.state().time, 102.0);

    controller.close_controls();
    assert!(!controller.state().is_open);
}
