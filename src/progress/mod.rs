//! Reading progress, streak tracking, and recorded pronunciation scores.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Persisted progress state. Dates are calendar days, not timestamps, so
/// streak arithmetic is immune to DST and timezone-offset edge cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    /// Next reading-plan day to present, 1-based.
    pub current_day: u32,
    /// Plan days the user has finished, in completion order.
    pub completed_readings: Vec<u32>,
    pub streak_count: u32,
    pub last_read_date: Option<NaiveDate>,
    /// Best recitation score per shloka id, 0-100.
    #[serde(default)]
    pub pronunciation_scores: BTreeMap<String, u8>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            current_day: 1,
            completed_readings: Vec::new(),
            streak_count: 0,
            last_read_date: None,
            pronunciation_scores: BTreeMap::new(),
        }
    }
}

impl UserProgress {
    /// Loads progress from disk; a missing file is a fresh start.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = ?path, "no progress file yet; starting fresh");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read progress file {:?}", path))?;
        let progress = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse progress file {:?}", path))?;
        Ok(progress)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create progress directory {:?}", parent)
                })?;
            }
        }
        let raw = serde_json::to_string_pretty(self).context("failed to serialize progress")?;
        fs::write(path, raw)
            .with_context(|| format!("failed to write progress file {:?}", path))?;
        debug!(path = ?path, "progress saved");
        Ok(())
    }

    /// Marks a reading-plan day complete as of `today`.
    ///
    /// Re-completing an already finished day is a no-op. The streak extends
    /// by one when the previous completion was on an adjacent calendar day,
    /// holds on a same-day repeat, and otherwise resets to 1. Finishing the
    /// current plan day advances it, capped at `total_days`.
    pub fn mark_day_complete(&mut self, day: u32, today: NaiveDate, total_days: u32) {
        if self.completed_readings.contains(&day) {
            return;
        }

        self.streak_count = match self.last_read_date {
            None => 1,
            Some(last) if last == today => self.streak_count,
            Some(last) if (today - last).num_days().abs() == 1 => self.streak_count + 1,
            Some(_) => 1,
        };

        if day == self.current_day {
            self.current_day = (self.current_day + 1).min(total_days);
        }
        self.completed_readings.push(day);
        self.last_read_date = Some(today);
        info!(
            day,
            streak = self.streak_count,
            next_day = self.current_day,
            "reading day completed"
        );
    }

    /// Records a recitation score for a verse, keeping the best seen.
    pub fn record_score(&mut self, shloka_id: &str, score: u8) {
        let score = score.min(100);
        let entry = self
            .pronunciation_scores
            .entry(shloka_id.to_string())
            .or_insert(score);
        if score > *entry {
            *entry = score;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::UserProgress;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_completion_starts_a_streak() {
        let mut progress = UserProgress::default();
        progress.mark_day_complete(1, day(2026, 3, 1), 239);
        assert_eq!(progress.streak_count, 1);
        assert_eq!(progress.current_day, 2);
        assert_eq!(progress.completed_readings, vec![1]);
    }

    #[test]
    fn consecutive_days_extend_the_streak() {
        let mut progress = UserProgress::default();
        progress.mark_day_complete(1, day(2026, 3, 1), 239);
        progress.mark_day_complete(2, day(2026, 3, 2), 239);
        assert_eq!(progress.streak_count, 2);
    }

    #[test]
    fn same_day_repeat_holds_the_streak() {
        let mut progress = UserProgress::default();
        progress.mark_day_complete(1, day(2026, 3, 1), 239);
        progress.mark_day_complete(2, day(2026, 3, 1), 239);
        assert_eq!(progress.streak_count, 1);
        assert_eq!(progress.completed_readings, vec![1, 2]);
    }

    #[test]
    fn gap_resets_the_streak() {
        let mut progress = UserProgress::default();
        progress.mark_day_complete(1, day(2026, 3, 1), 239);
        progress.mark_day_complete(2, day(2026, 3, 5), 239);
        assert_eq!(progress.streak_count, 1);
    }

    #[test]
    fn streak_survives_a_month_boundary() {
        let mut progress = UserProgress::default();
        progress.mark_day_complete(1, day(2026, 2, 28), 239);
        progress.mark_day_complete(2, day(2026, 3, 1), 239);
        assert_eq!(progress.streak_count, 2);
    }

    #[test]
    fn recompleting_a_day_is_a_no_op() {
        let mut progress = UserProgress::default();
        progress.mark_day_complete(1, day(2026, 3, 1), 239);
        let before = progress.clone();
        progress.mark_day_complete(1, day(2026, 3, 2), 239);
        assert_eq!(progress, before);
    }

    #[test]
    fn out_of_order_day_leaves_current_day_alone() {
        let mut progress = UserProgress::default();
        progress.mark_day_complete(5, day(2026, 3, 1), 239);
        assert_eq!(progress.current_day, 1);
        assert_eq!(progress.completed_readings, vec![5]);
    }

    #[test]
    fn current_day_caps_at_plan_length() {
        let mut progress = UserProgress {
            current_day: 239,
            ..Default::default()
        };
        progress.mark_day_complete(239, day(2026, 3, 1), 239);
        assert_eq!(progress.current_day, 239);
    }

    #[test]
    fn record_score_keeps_the_best() {
        let mut progress = UserProgress::default();
        progress.record_score("2.47", 61);
        progress.record_score("2.47", 88);
        progress.record_score("2.47", 70);
        assert_eq!(progress.pronunciation_scores.get("2.47"), Some(&88));
    }

    #[test]
    fn record_score_clamps_to_100() {
        let mut progress = UserProgress::default();
        progress.record_score("1.1", 250);
        assert_eq!(progress.pronunciation_scores.get("1.1"), Some(&100));
    }
}
