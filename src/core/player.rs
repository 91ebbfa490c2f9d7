//! Bridge to the embedded YouTube player.
//!
//! The player lives inside the webview and is driven by
//! [`YOUTUBE_PLAYER_SCRIPT`](crate::constants::YOUTUBE_PLAYER_SCRIPT). Rust sends
//! [`PlayerCommand`]s over the eval channel and receives [`PlayerEvent`]s back.
//! Position queries are answered from the last reported time, since the
//! channel is asynchronous.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::document;
use serde::{Deserialize, Serialize};

/// Control surface of a video player.
pub trait PlayerControl {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;
    fn seek_to(&self, seconds: f64, allow_seek_ahead: bool);
    fn play(&self);
    fn pause(&self);
}

/// Messages sent to the player script.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerCommand {
    Mount { video_id: String, width: f64, height: f64 },
    Cue { video_id: String },
    Seek { seconds: f64, allow_seek_ahead: bool, seq: u64 },
    Play,
    Pause,
    Resize { width: f64, height: f64 },
}

/// Messages received from the player script.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerEvent {
    Ready,
    Time { seconds: f64, seq: u64 },
    Error { code: i64 },
}

impl PlayerEvent {
    /// Decode a raw message from the player script.
    pub fn from_message(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}

/// Last known playback position.
///
/// Seeks move the cached position immediately and bump a sequence number.
/// Reports stamped with an older sequence predate the seek and are dropped.
#[derive(Debug, Default)]
pub struct PositionCache {
    seconds: Cell<f64>,
    seq: Cell<u64>,
}

impl PositionCache {
    pub fn seconds(&self) -> f64 {
        self.seconds.get()
    }

    /// Record a seek target and return the sequence number for it.
    pub fn begin_seek(&self, seconds: f64) -> u64 {
        let seq = self.seq.get() + 1;
        self.seq.set(seq);
        self.seconds.set(seconds);
        seq
    }

    /// Apply a position report. Returns `false` if the report was stale.
    pub fn observe(&self, seconds: f64, seq: u64) -> bool {
        if seq < self.seq.get() {
            return false;
        }
        self.seconds.set(seconds);
        true
    }
}

/// The webview-hosted player, available once the script reports `ready`.
#[derive(Clone)]
pub struct IframePlayer {
    eval: document::Eval,
    position: Rc<PositionCache>,
}

impl PartialEq for IframePlayer {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.position, &other.position)
    }
}

impl IframePlayer {
    pub fn new(eval: document::Eval, position: Rc<PositionCache>) -> Self {
        Self { eval, position }
    }
}

impl PlayerControl for IframePlayer {
    fn current_time(&self) -> f64 {
        self.position.seconds()
    }

    fn seek_to(&self, seconds: f64, allow_seek_ahead: bool) {
        let seq = self.position.begin_seek(seconds);
        send_command(&self.eval, PlayerCommand::Seek { seconds, allow_seek_ahead, seq });
    }

    fn play(&self) {
        send_command(&self.eval, PlayerCommand::Play);
    }

    fn pause(&self) {
        send_command(&self.eval, PlayerCommand::Pause);
    }
}

/// Send a command to the player script. Delivery is fire-and-forget.
pub fn send_command(eval: &document::Eval, command: PlayerCommand) {
    if let Err(err) = eval.send(&command) {
        tracing::warn!(?command, ?err, "failed to deliver player command");
    }
}

#[cfg(test)]
pub mod fake {
    use std::cell::{Cell, RefCell};

    use super::PlayerControl;

    #[derive(Debug, Clone, PartialEq)]
    pub enum PlayerCall {
        SeekTo(f64, bool),
        Play,
        Pause,
    }

    /// Records commands and reports a settable position.
    #[derive(Debug, Default)]
    pub struct FakePlayer {
        time: Cell<f64>,
        calls: RefCell<Vec<PlayerCall>>,
    }

    impl FakePlayer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn at(seconds: f64) -> Self {
            let player = Self::default();
            player.set_time(seconds);
            player
        }

        pub fn set_time(&self, seconds: f64) {
            self.time.set(seconds);
        }

        pub fn calls(&self) -> Vec<PlayerCall> {
            self.calls.borrow().clone()
        }
    }

    impl PlayerControl for FakePlayer {
        fn current_time(&self) -> f64 {
            self.time.get()
        }

        fn seek_to(&self, seconds: f64, allow_seek_ahead: bool) {
            self.time.set(seconds);
            self.calls.borrow_mut().push(PlayerCall::SeekTo(seconds, allow_seek_ahead));
        }

        fn play(&self) {
            self.calls.borrow_mut().push(PlayerCall::Play);
        }

        fn pause(&self) {
            self.calls.borrow_mut().push(PlayerCall::Pause);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_moves_cached_position() {
        let cache = PositionCache::default();
        cache.observe(120.0, 0);
        let seq = cache.begin_seek(5.0);
        assert_eq!(seq, 1);
        assert_eq!(cache.seconds(), 5.0);
    }

    #[test]
    fn test_stale_report_is_ignored() {
        let cache = PositionCache::default();
        cache.observe(120.0, 0);
        let seq = cache.begin_seek(5.0);

        // Report sent before the script applied the seek.
        assert!(!cache.observe(120.1, seq - 1));
        assert_eq!(cache.seconds(), 5.0);

        assert!(cache.observe(5.2, seq));
        assert_eq!(cache.seconds(), 5.2);
    }

    #[test]
    fn test_command_wire_format() {
        let json = serde_json::to_value(PlayerCommand::Seek {
            seconds: 5.0,
            allow_seek_ahead: true,
            seq: 3,
        })
        .unwrap();
        assert_eq!(json["kind"], "seek");
        assert_eq!(json["allow_seek_ahead"], true);
        assert_eq!(json["seq"], 3);

        let json = serde_json::to_value(PlayerCommand::Play).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "play" }));
    }

    #[test]
    fn test_event_wire_format() {
        let event: PlayerEvent =
            serde_json::from_str(r#"{"kind": "time", "seconds": 12.5, "seq": 2}"#).unwrap();
        assert_eq!(event, PlayerEvent::Time { seconds: 12.5, seq: 2 });
        let event: PlayerEvent = serde_json::from_str(r#"{"kind": "ready"}"#).unwrap();
        assert_eq!(event, PlayerEvent::Ready);
        let event: PlayerEvent = serde_json::from_str(r#"{"kind": "error", "code": 150}"#).unwrap();
        assert_eq!(event, PlayerEvent::Error { code: 150 });
    }

    #[test]
    fn test_unknown_message_fails_to_decode() {
        let value = serde_json::json!({ "kind": "buffering", "percent": 40 });
        assert!(PlayerEvent::from_message(value).is_err());
        let value = serde_json::json!({ "kind": "time", "seconds": 1.5, "seq": 0 });
        assert_eq!(
            PlayerEvent::from_message(value).unwrap(),
            PlayerEvent::Time { seconds: 1.5, seq: 0 }
        );
    }
}
