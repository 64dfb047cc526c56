//! Media element abstraction
//!
//! The element is the playback surface the controller drives. Only four
//! operations exist at this seam: play, pause, an absolute position write,
//! and a position read. Progress notifications flow the other way: the
//! host observes the element and calls the controller, never this trait.

use crate::{PlayerError, Result};
use tracing::debug;
use watchparty_core::party::Video;

/// The playback surface the controller drives.
///
/// Calls are fire-and-forget: element-internal failures (unsupported
/// source, decode trouble) surface through the element's own channels and
/// are not this seam's concern.
pub trait MediaElement {
    /// Begin or resume playback.
    fn play(&mut self);
    /// Halt playback, keeping the current position.
    fn pause(&mut self);
    /// Move to an absolute position in seconds.
    fn set_position(&mut self, seconds: f64);
    /// Current position in seconds.
    fn position(&self) -> f64;
}

/// Clock-backed element standing in for a real video surface.
///
/// Tracks position against wall-clock deltas fed by the host loop. Useful
/// headless and in tests, the same way a test-pattern source stands in for
/// a decoder.
#[derive(Debug, Clone)]
pub struct ClockElement {
    source: String,
    position: f64,
    playing: bool,
    duration: Option<f64>,
}

impl ClockElement {
    /// Create an element for a source URL.
    pub fn new(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        if source.trim().is_empty() {
            return Err(PlayerError::InvalidSource(
                "empty source URL".to_string(),
            ));
        }

        debug!("Opening media source: {}", source);
        Ok(Self {
            source,
            position: 0.0,
            playing: false,
            duration: None,
        })
    }

    /// Create an element backed by a party's video.
    pub fn for_video(video: &Video) -> Result<Self> {
        Self::new(video.video_url.clone())
    }

    /// Clamp playback at a known duration in seconds.
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Advance the clock by `dt` seconds. Position moves only while
    /// playing and clamps at the duration if one is set.
    pub fn advance(&mut self, dt: f64) {
        if !self.playing {
            return;
        }
        self.position += dt;
        if let Some(duration) = self.duration {
            if self.position > duration {
                self.position = duration;
            }
        }
    }

    /// Whether the element is currently running its clock.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// The source URL this element was opened with.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl MediaElement for ClockElement {
    fn play(&mut self) {
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn set_position(&mut self, seconds: f64) {
        self.position = match self.duration {
            Some(duration) => seconds.clamp(0.0, duration),
            None => seconds.max(0.0),
        };
    }

    fn position(&self) -> f64 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_source() {
        assert!(ClockElement::new("").is_err());
        assert!(ClockElement::new("   ").is_err());
    }

    #[test]
    fn test_advances_only_while_playing() {
        let mut element = ClockElement::new("https://example.com/v.mp4").unwrap();
        element.advance(1.0);
        assert_eq!(element.position(), 0.0);

        element.play();
        element.advance(1.5);
        assert_eq!(element.position(), 1.5);

        element.pause();
        element.advance(1.0);
        assert_eq!(element.position(), 1.5);
    }

    #[test]
    fn test_clamps_at_duration() {
        let mut element = ClockElement::new("https://example.com/v.mp4")
            .unwrap()
            .with_duration(10.0);
        element.play();
        element.advance(25.0);
        assert_eq!(element.position(), 10.0);

        element.set_position(50.0);
        assert_eq!(element.position(), 10.0);
        element.set_position(-3.0);
        assert_eq!(element.position(), 0.0);
    }
}
