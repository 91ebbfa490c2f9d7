//! JSON import/export of the annotation list.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::annotation::TimestampAnnotation;
use crate::error::{AppError, AppResult};

/// On-disk layout of an exported annotation file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationFile {
    /// Source string the video was loaded from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub timestamps: Vec<TimestampAnnotation>,
}

impl AnnotationFile {
    pub fn new(video_url: impl Into<String>, timestamps: Vec<TimestampAnnotation>) -> Self {
        Self {
            video_url: Some(video_url.into()),
            timestamps,
        }
    }

    /// The video URL, if the file carries a non-empty one.
    pub fn video_url(&self) -> Option<&str> {
        self.video_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))
    }

    /// Parse and validate an imported payload.
    pub fn from_json(text: &str) -> AppResult<Self> {
        let file: AnnotationFile =
            serde_json::from_str(text).map_err(|err| AppError::MalformedImport(err.to_string()))?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> AppResult<()> {
        let mut seen = HashSet::with_capacity(self.timestamps.len());
        for ts in &self.timestamps {
            if ts.start < 0.0 || ts.end < 0.0 {
                return Err(AppError::MalformedImport(format!(
                    "timestamp {} has a negative time",
                    ts.id
                )));
            }
            if !seen.insert(ts.id) {
                return Err(AppError::MalformedImport(format!(
                    "duplicate timestamp id {}",
                    ts.id
                )));
            }
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TimestampAnnotation> {
        let mut a = TimestampAnnotation::new(1_700_000_000_000, 5.0, 10.0);
        a.emotion = "Happy".to_string();
        let mut b = TimestampAnnotation::new(1_700_000_000_500, 32.17, 10.0);
        b.gender = "Female".to_string();
        b.end = 33.0;
        vec![a, b]
    }

    #[test]
    fn test_export_layout() {
        let file = AnnotationFile::new("https://youtu.be/dQw4w9WgXcQ", sample());
        let json = file.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["videoUrl"], "https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(value["timestamps"][0]["id"], 1_700_000_000_000_i64);
        assert_eq!(value["timestamps"][0]["emotion"], "Happy");
        assert_eq!(value["timestamps"][1]["start"], 32.17);
        assert!(json.contains("\n  \"timestamps\""));
    }

    #[test]
    fn test_export_then_import_preserves_fields() {
        let original = sample();
        let json = AnnotationFile::new("https://youtu.be/dQw4w9WgXcQ", original.clone())
            .to_json()
            .unwrap();
        let parsed = AnnotationFile::from_json(&json).unwrap();
        assert_eq!(parsed.timestamps, original);
        assert_eq!(parsed.video_url(), Some("https://youtu.be/dQw4w9WgXcQ"));
    }

    #[test]
    fn test_optional_fields_default() {
        let parsed = AnnotationFile::from_json("{}").unwrap();
        assert!(parsed.timestamps.is_empty());
        assert_eq!(parsed.video_url(), None);

        let parsed = AnnotationFile::from_json(r#"{"videoUrl": ""}"#).unwrap();
        assert_eq!(parsed.video_url(), None);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = AnnotationFile::from_json("{ not json").unwrap_err();
        assert!(matches!(err, AppError::MalformedImport(_)));
    }

    #[test]
    fn test_rejects_missing_required_entry_fields() {
        let err = AnnotationFile::from_json(r#"{"timestamps": [{"id": 1, "start": 2.0}]}"#)
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedImport(_)));
    }

    #[test]
    fn test_rejects_negative_times() {
        let err = AnnotationFile::from_json(
            r#"{"timestamps": [{"id": 1, "start": -1.0, "end": 2.0}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::MalformedImport(_)));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = AnnotationFile::from_json(
            r#"{"timestamps": [
                {"id": 1, "start": 1.0, "end": 2.0},
                {"id": 1, "start": 3.0, "end": 4.0}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::MalformedImport(ref msg) if msg.contains("duplicate")));
    }

    #[test]
    fn test_save_writes_readable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timestamps.json");
        let file = AnnotationFile::new("https://youtu.be/dQw4w9WgXcQ", sample());
        file.save_to(&path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(AnnotationFile::from_json(&text).unwrap(), file);
    }

    #[test]
    fn test_save_to_missing_folder_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = AnnotationFile::new("", Vec::new());
        let err = file.save_to(&dir.path().join("missing").join("out.json")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
