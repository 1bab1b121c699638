//! Indexed access to the verse dataset.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::types::{Chapter, DailyReading, GitaData, GitaMetadata, Shloka};

/// In-memory dataset with id and chapter-number indexes built at load time.
#[derive(Debug)]
pub struct GitaDataset {
    data: GitaData,
    shloka_index: HashMap<String, usize>,
    chapter_index: HashMap<u32, usize>,
}

impl GitaDataset {
    pub fn new(data: GitaData) -> Self {
        let shloka_index = data
            .shlokas
            .iter()
            .enumerate()
            .map(|(idx, shloka)| (shloka.id.clone(), idx))
            .collect();
        let chapter_index = data
            .chapters
            .iter()
            .enumerate()
            .map(|(idx, chapter)| (chapter.chapter_number, idx))
            .collect();
        Self {
            data,
            shloka_index,
            chapter_index,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset file {:?}", path))?;
        let data: GitaData = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse dataset JSON {:?}", path))?;
        debug!(
            shlokas = data.shlokas.len(),
            chapters = data.chapters.len(),
            readings = data.daily_readings.len(),
            "loaded verse dataset"
        );
        Ok(Self::new(data))
    }

    pub fn metadata(&self) -> &GitaMetadata {
        &self.data.metadata
    }

    pub fn shloka(&self, id: &str) -> Option<&Shloka> {
        self.shloka_index.get(id).map(|&idx| &self.data.shlokas[idx])
    }

    /// Resolves a list of ids, silently skipping any that are unknown.
    pub fn shlokas_by_ids<'a, I>(&self, ids: I) -> Vec<&Shloka>
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter().filter_map(|id| self.shloka(id)).collect()
    }

    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapter_index
            .get(&number)
            .map(|&idx| &self.data.chapters[idx])
    }

    pub fn daily_reading(&self, day: u32) -> Option<&DailyReading> {
        self.data.daily_readings.iter().find(|r| r.day == day)
    }

    pub fn total_readings(&self) -> u32 {
        self.data.metadata.total_readings
    }
}
