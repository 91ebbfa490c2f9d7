//! Top-level state of the annotation editor.
//!
//! `TimestamperState` owns the loaded video, the annotation list, playback
//! status and player sizing. Each user operation is one method; the UI layer
//! only forwards events and owns the polling task.

use super::annotation::AnnotationField;
use super::layout::PlayerSize;
use super::persistence::AnnotationFile;
use super::playback::{PlaybackState, TickOutcome};
use super::settings::AppSettings;
use super::store::AnnotationStore;
use super::video::VideoSession;
use crate::core::player::PlayerControl;
use crate::error::{AppError, AppResult};
use crate::utils::round_centis;

#[derive(Debug, Clone, PartialEq)]
pub struct TimestamperState {
    session: VideoSession,
    /// Contents of the URL text field
    url_input: String,
    annotations: AnnotationStore,
    playback: PlaybackState,
    player_size: PlayerSize,
    span_seconds: f64,
}

impl TimestamperState {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            session: VideoSession::with_default_id(settings.default_video_id.clone()),
            url_input: String::new(),
            annotations: AnnotationStore::new(),
            playback: PlaybackState::default(),
            player_size: PlayerSize::new(settings.player_width, settings.player_height),
            span_seconds: settings.default_span_seconds,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn video_id(&self) -> &str {
        &self.session.video_id
    }

    pub fn source_url(&self) -> &str {
        &self.session.source_url
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn annotations(&self) -> &AnnotationStore {
        &self.annotations
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn player_size(&self) -> PlayerSize {
        self.player_size
    }

    pub fn set_url_input(&mut self, value: impl Into<String>) {
        self.url_input = value.into();
    }

    pub fn set_player_size(&mut self, size: PlayerSize) {
        self.player_size = size;
    }

    // =========================================================================
    // Video loading
    // =========================================================================

    /// Load the video named by the URL field.
    pub fn load_video(&mut self) -> AppResult<()> {
        let url = self.url_input.clone();
        self.load_url(&url)?;
        self.url_input.clear();
        Ok(())
    }

    /// Switch to the video named by `url`, clearing annotations and playback.
    /// On failure nothing changes.
    pub fn load_url(&mut self, url: &str) -> AppResult<()> {
        let session = VideoSession::from_url(url)?;
        tracing::info!(video_id = %session.video_id, "video loaded");
        self.session = session;
        self.annotations.clear();
        self.playback.stop();
        Ok(())
    }

    // =========================================================================
    // Annotations
    // =========================================================================

    /// Add an annotation at the player's current position.
    /// Without a ready player this does nothing.
    pub fn add_annotation<P: PlayerControl + ?Sized>(
        &mut self,
        player: Option<&P>,
        now_millis: i64,
    ) -> Option<i64> {
        let Some(player) = player else {
            tracing::debug!("add ignored: player not ready");
            return None;
        };
        let start = round_centis(player.current_time());
        let id = self.annotations.add(now_millis, start, self.span_seconds);
        tracing::debug!(id, start, "annotation added");
        Some(id)
    }

    pub fn edit_annotation(&mut self, id: i64, field: AnnotationField, value: &str) -> bool {
        self.annotations.edit(id, field, value)
    }

    pub fn delete_annotation(&mut self, id: i64) -> bool {
        self.annotations.remove(id)
    }

    // =========================================================================
    // Segment playback
    // =========================================================================

    /// Start playing annotation `id`. Returns `true` when a polling task
    /// should be started (replacing any running one).
    pub fn play_annotation<P: PlayerControl + ?Sized>(&mut self, id: i64, player: Option<&P>) -> bool {
        let Some(player) = player else {
            tracing::debug!(id, "play ignored: player not ready");
            return false;
        };
        let Some(annotation) = self.annotations.find(id).cloned() else {
            return false;
        };
        self.playback.begin(player, &annotation);
        true
    }

    /// One position check. See [`PlaybackState::tick`].
    pub fn tick<P: PlayerControl + ?Sized>(&mut self, player: &P) -> TickOutcome {
        self.playback.tick(player)
    }


    // =========================================================================
    // Import / export
    // =========================================================================

    pub fn export_file(&self) -> AnnotationFile {
        AnnotationFile::new(self.session.source_url.clone(), self.annotations.items().to_vec())
    }

    /// Replace the annotation list with the file's contents.
    ///
    /// The list is replaced even when the file's video URL is invalid; in
    /// that case the current video is kept and `InvalidUrlInFile` is returned.
    pub fn apply_import(&mut self, file: AnnotationFile) -> AppResult<()> {
        let url = file.video_url().map(str::to_string);
        self.annotations.replace(file.timestamps);
        self.playback.stop();
        tracing::info!(count = self.annotations.len(), "annotations imported");

        if let Some(url) = url {
            match VideoSession::from_url(&url) {
                Ok(session) => self.session = session,
                Err(_) => return Err(AppError::InvalidUrlInFile(url)),
            }
        }
        Ok(())
    }

    /// Parse `text` and apply it. Malformed input changes nothing.
    pub fn import_json(&mut self, text: &str) -> AppResult<()> {
        let file = AnnotationFile::from_json(text)?;
        self.apply_import(file)
    }
}
