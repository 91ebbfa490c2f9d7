//! Segment playback state machine.
//!
//! Playback is either stopped or playing exactly one annotation. The polling
//! task calls [`PlaybackState::tick`] on a fixed interval; the tick pauses the
//! player once the position reaches the segment's end.

use super::annotation::TimestampAnnotation;
use crate::core::player::PlayerControl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Playing,
}

impl PlaybackStatus {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackStatus::Stopped => "Stopped",
            PlaybackStatus::Playing => "Playing",
        }
    }
}

/// Result of a single position check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing is playing; the poller should exit.
    Idle,
    /// Still inside the segment.
    Continue,
    /// The boundary was reached and the player paused.
    Finished,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackState {
    status: PlaybackStatus,
    /// Snapshot of the annotation taken when playback began
    active: Option<TimestampAnnotation>,
}

impl PlaybackState {
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn active(&self) -> Option<&TimestampAnnotation> {
        self.active.as_ref()
    }

    pub fn active_id(&self) -> Option<i64> {
        self.active.as_ref().map(|ts| ts.id)
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    /// Seek to the segment start and begin playing it. Any segment already
    /// playing is replaced without passing through `Stopped`.
    pub fn begin<P: PlayerControl + ?Sized>(&mut self, player: &P, annotation: &TimestampAnnotation) {
        player.seek_to(annotation.start, true);
        self.active = Some(annotation.clone());
        self.status = PlaybackStatus::Playing;
        player.play();
        tracing::debug!(id = annotation.id, start = annotation.start, end = annotation.end, "segment playback started");
    }

    /// Check the player position against the active segment's end.
    pub fn tick<P: PlayerControl + ?Sized>(&mut self, player: &P) -> TickOutcome {
        let Some(end) = self.active.as_ref().map(|ts| ts.end) else {
            return TickOutcome::Idle;
        };
        let position = player.current_time();
        if position < end {
            return TickOutcome::Continue;
        }
        player.pause();
        tracing::debug!(position, end, "segment boundary reached");
        self.stop();
        TickOutcome::Finished
    }

    /// Drop the active segment without touching the player.
    pub fn stop(&mut self) {
        self.active = None;
        self.status = PlaybackStatus::Stopped;
    }
}
