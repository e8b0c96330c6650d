//! Summary of a list export, grouped by category.

use crate::media_list::{CategorizedMediaList, Category};
use anyhow::{Context, Result};
use shared::{ListExport, ListStats, MediaEntry, MediaKind};
use std::path::Path;
use tracing::{info, warn};

/// Categorized list built from an export, with the stats the service reported
pub struct ListReport {
    pub user: String,
    pub kind: MediaKind,
    pub list: CategorizedMediaList<MediaEntry>,
    pub reported: Option<ListStats>,
}

impl ListReport {
    /// Categorize the entries of an export
    pub fn from_export(export: ListExport) -> Result<Self> {
        let ListExport {
            user,
            kind,
            entries,
            stats,
        } = export;

        let list = CategorizedMediaList::new(entries)
            .with_context(|| format!("Failed to categorize {} list of {}", kind, user))?;

        Ok(Self {
            user,
            kind,
            list,
            reported: stats,
        })
    }

    /// Load an export file and categorize it
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let export = ListExport::from_file(path)?;
        Self::from_export(export)
    }

    /// Counts computed from the list itself
    pub fn computed(&self) -> ListStats {
        let mut stats = self.list.stats();
        stats.days = self.reported.as_ref().and_then(|s| s.days);
        stats
    }

    /// Whether the reported counts disagree with the list contents
    ///
    /// Exports without reported stats never mismatch.
    pub fn stats_mismatch(&self) -> bool {
        self.reported
            .as_ref()
            .is_some_and(|reported| !reported.same_counts(&self.list.stats()))
    }

    /// Log per-category counts, and entry titles when `titles` is set
    pub fn log_summary(&self, titles: bool) {
        info!(
            user = %self.user,
            kind = %self.kind,
            entries = self.list.len(),
            unique = self.list.unique_len(),
            "=== List Summary ==="
        );

        for category in Category::ALL {
            let view = self.list.view(category);
            info!(category = %category, count = view.len(), "Category");

            if titles {
                for entry in view {
                    info!("  {} ({})", entry.title, entry.mal_id);
                }
            }
        }

        let computed = self.computed();
        match &self.reported {
            Some(reported) if self.stats_mismatch() => {
                warn!(
                    reported_current = reported.current,
                    computed_current = computed.current,
                    reported_completed = reported.completed,
                    computed_completed = computed.completed,
                    reported_on_hold = reported.on_hold,
                    computed_on_hold = computed.on_hold,
                    reported_dropped = reported.dropped,
                    computed_dropped = computed.dropped,
                    reported_planned = reported.planned,
                    computed_planned = computed.planned,
                    "Reported statistics disagree with list contents"
                );
            }
            Some(_) => info!(total = computed.total(), "Reported statistics match"),
            None => info!(total = computed.total(), "No reported statistics in export"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{SeriesStatus, StatusPair, UserStatus};
    use tempfile::TempDir;

    fn entry(mal_id: u32, series: SeriesStatus, user: UserStatus) -> MediaEntry {
        MediaEntry {
            mal_id,
            kind: MediaKind::Anime,
            title: format!("Anime {}", mal_id),
            synonyms: Vec::new(),
            status: StatusPair::new(series, user),
            progress: Default::default(),
            scores: Default::default(),
            dates: Default::default(),
            storage: None,
            rewatched: None,
            flags: Default::default(),
            tags: Vec::new(),
        }
    }

    fn export(entries: Vec<MediaEntry>, stats: Option<ListStats>) -> ListExport {
        ListExport {
            user: "faye".to_string(),
            kind: MediaKind::Anime,
            entries,
            stats,
        }
    }

    #[test]
    fn test_report_matches_reported_stats() -> Result<()> {
        let stats = ListStats {
            current: 1,
            completed: 1,
            days: Some(1.5),
            ..Default::default()
        };
        let report = ListReport::from_export(export(
            vec![
                entry(1, SeriesStatus::Finished, UserStatus::Completed),
                entry(2, SeriesStatus::Started, UserStatus::Watching),
            ],
            Some(stats),
        ))?;

        assert!(!report.stats_mismatch());
        assert_eq!(report.computed().days, Some(1.5));
        assert_eq!(report.list.finished().len(), 1);

        Ok(())
    }

    #[test]
    fn test_report_detects_mismatch() -> Result<()> {
        let stats = ListStats {
            dropped: 4,
            ..Default::default()
        };
        let report = ListReport::from_export(export(
            vec![entry(1, SeriesStatus::Finished, UserStatus::Dropped)],
            Some(stats),
        ))?;

        assert!(report.stats_mismatch());

        Ok(())
    }

    #[test]
    fn test_report_without_stats() -> Result<()> {
        let report = ListReport::from_export(export(Vec::new(), None))?;
        assert!(!report.stats_mismatch());
        assert_eq!(report.computed(), ListStats::default());
        Ok(())
    }

    #[test]
    fn test_invalid_status_fails_report() {
        let mut bad = entry(3, SeriesStatus::Planned, UserStatus::PlanToConsume);
        bad.status.series = 42;

        let err = ListReport::from_export(export(vec![bad], None))
            .err()
            .expect("invalid series status should fail");
        let cause = err
            .downcast_ref::<crate::InvalidCategoryError>()
            .expect("cause should be InvalidCategoryError");
        assert_eq!(*cause, crate::InvalidCategoryError::series(42));
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("animelist.json");
        export(
            vec![entry(5, SeriesStatus::Started, UserStatus::OnHold)],
            None,
        )
        .save(&path)?;

        let report = ListReport::load(&path)?;
        assert_eq!(report.user, "faye");
        assert_eq!(report.list.on_hold().len(), 1);

        Ok(())
    }
}
