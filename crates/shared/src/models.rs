//! Data models for MyAnimeList list entries.
//!
//! This module defines the records a user's anime or manga list is made of:
//! progress, scores, status codes, dates, and the export envelope pairing a
//! full list with the statistics the service reported for it.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::path::Path;

use crate::status::{SeriesStatus, UserStatus};

/// Kind of media a list holds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Anime,
    Manga,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Anime => write!(f, "anime"),
            MediaKind::Manga => write!(f, "manga"),
        }
    }
}

impl std::str::FromStr for MediaKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anime" => Ok(MediaKind::Anime),
            "manga" => Ok(MediaKind::Manga),
            _ => Err(anyhow::anyhow!("Invalid media kind: {}", s)),
        }
    }
}

/// One entry of a user's list
#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct MediaEntry {
    pub mal_id: u32,
    pub kind: MediaKind,
    pub title: String,
    #[serde(default)]
    pub synonyms: Vec<String>,

    // Per-user list data
    pub status: StatusPair,
    #[serde(default)]
    pub progress: Progress,
    #[serde(default)]
    pub scores: Scores,
    #[serde(default)]
    pub dates: Dates,
    #[serde(default)]
    pub storage: Option<Storage>,
    #[serde(default)]
    pub rewatched: Option<Rewatched>,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Raw status codes as reported by the service
///
/// Kept as codes rather than [`SeriesStatus`]/[`UserStatus`] so that an
/// entry with a value outside the known vocabulary can still be represented
/// and rejected by whoever classifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusPair {
    pub series: u8,
    pub user: u8,
}

impl StatusPair {
    pub fn new(series: SeriesStatus, user: UserStatus) -> Self {
        Self {
            series: series.code(),
            user: user.code(),
        }
    }

    pub fn series_status(&self) -> Option<SeriesStatus> {
        SeriesStatus::from_code(self.series)
    }

    pub fn user_status(&self) -> Option<UserStatus> {
        UserStatus::from_code(self.user)
    }
}

/// Episode (anime) or chapter (manga) progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Progress {
    /// The user's current episode/chapter
    pub current: u32,
    /// Total count, unknown for ongoing series
    pub total: Option<u32>,
}

impl Progress {
    /// Fraction consumed in `0.0..=1.0`, if the total is known
    pub fn ratio(&self) -> Option<f64> {
        match self.total {
            Some(0) => Some(0.0),
            Some(total) => Some((self.current as f64 / total as f64).min(1.0)),
            None => None,
        }
    }
}

/// Score pair: community average and the user's own score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub average: Option<f32>,
    pub user: Option<u8>,
}

impl Hash for Scores {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // -0.0 == 0.0, so both must hash alike
        self.average
            .map(|average| (if average == 0.0 { 0.0f32 } else { average }).to_bits())
            .hash(state);
        self.user.hash(state);
    }
}

/// Start/end dates for the series and for the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dates {
    pub series: DateSpan,
    pub user: DateSpan,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateSpan {
    /// Days between start and end, when both are known
    pub fn days(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((end - start).num_days()),
            _ => None,
        }
    }
}

/// Where the user keeps their copy
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Storage {
    #[serde(rename = "type")]
    pub kind: u8,
    pub value: String,
}

/// Rewatch/reread count and value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rewatched {
    pub times: u32,
    pub value: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flags {
    pub discussion: bool,
    pub rewatching: Option<bool>,
    pub rereading: Option<bool>,
}

/// Per-status entry counts for a list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListStats {
    pub current: usize,
    pub completed: usize,
    pub on_hold: usize,
    pub dropped: usize,
    pub planned: usize,
    /// Days spent, as reported by the service
    #[serde(default)]
    pub days: Option<f64>,
}

impl ListStats {
    pub fn total(&self) -> usize {
        self.current + self.completed + self.on_hold + self.dropped + self.planned
    }

    /// Compare the counts only; `days` is never derivable from a list
    pub fn same_counts(&self, other: &ListStats) -> bool {
        self.current == other.current
            && self.completed == other.completed
            && self.on_hold == other.on_hold
            && self.dropped == other.dropped
            && self.planned == other.planned
    }
}

/// A user's full list together with the statistics the service reported
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListExport {
    pub user: String,
    pub kind: MediaKind,
    pub entries: Vec<MediaEntry>,
    #[serde(default)]
    pub stats: Option<ListStats>,
}

impl ListExport {
    /// Load an export from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read list export: {}", path.display()))?;

        let export: ListExport = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse list export: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            user = %export.user,
            kind = %export.kind,
            entries = export.entries.len(),
            "List export loaded"
        );

        Ok(export)
    }

    /// Save the export as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create export directory: {}", parent.display())
            })?;
        }

        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize list export")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write list export: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_status_pair_lookup() {
        let pair = StatusPair::new(SeriesStatus::Finished, UserStatus::PlanToConsume);
        assert_eq!(pair, StatusPair { series: 2, user: 6 });
        assert_eq!(pair.series_status(), Some(SeriesStatus::Finished));
        assert_eq!(pair.user_status(), Some(UserStatus::PlanToConsume));

        let unknown = StatusPair { series: 9, user: 5 };
        assert_eq!(unknown.series_status(), None);
        assert_eq!(unknown.user_status(), None);
    }

    #[test]
    fn test_progress_ratio() {
        assert_eq!(Progress { current: 6, total: Some(12) }.ratio(), Some(0.5));
        assert_eq!(Progress { current: 30, total: Some(12) }.ratio(), Some(1.0));
        assert_eq!(Progress { current: 3, total: Some(0) }.ratio(), Some(0.0));
        assert_eq!(Progress { current: 3, total: None }.ratio(), None);
    }

    #[test]
    fn test_date_span_days() {
        let span = DateSpan {
            start: NaiveDate::from_ymd_opt(2024, 1, 1),
            end: NaiveDate::from_ymd_opt(2024, 1, 31),
        };
        assert_eq!(span.days(), Some(30));
        assert_eq!(DateSpan::default().days(), None);
    }

    #[test]
    fn test_stats_compare_ignores_days() {
        let reported = ListStats {
            current: 1,
            completed: 2,
            days: Some(4.5),
            ..Default::default()
        };
        let computed = ListStats {
            current: 1,
            completed: 2,
            ..Default::default()
        };
        assert!(reported.same_counts(&computed));
        assert_eq!(reported.total(), 3);
    }

    #[test]
    fn test_minimal_entry_json() {
        let json = r#"{
            "mal_id": 1,
            "kind": "anime",
            "title": "Cowboy Bebop",
            "status": { "series": 2, "user": 2 }
        }"#;
        let entry: MediaEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.progress, Progress::default());
        assert_eq!(entry.status.user_status(), Some(UserStatus::Completed));
        assert!(entry.tags.is_empty());
    }

    #[test]
    fn test_export_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("exports").join("list.json");

        let export = ListExport {
            user: "spike".to_string(),
            kind: MediaKind::Manga,
            entries: Vec::new(),
            stats: None,
        };
        export.save(&path)?;

        let loaded = ListExport::from_file(&path)?;
        assert_eq!(loaded.user, "spike");
        assert_eq!(loaded.kind, MediaKind::Manga);
        assert!(loaded.entries.is_empty());

        Ok(())
    }

    #[test]
    fn test_missing_export_is_error() {
        assert!(ListExport::from_file("does/not/exist.json").is_err());
    }
}
