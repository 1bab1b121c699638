//! Record types mirroring the bundled Gita dataset JSON.

use serde::Deserialize;

/// Dataset-wide metadata block.
#[derive(Debug, Clone, Deserialize)]
pub struct GitaMetadata {
    pub title: String,
    pub total_chapters: u32,
    pub total_shlokas: u32,
    /// Number of entries in the daily reading plan.
    pub total_readings: u32,
    pub verses_per_day: u32,
    pub source: String,
    pub license: String,
    pub fetched_at: String,
}

/// One chapter of the text with its names and summaries.
#[derive(Debug, Clone, Deserialize)]
pub struct Chapter {
    pub chapter_number: u32,
    pub verses_count: u32,
    pub name_sanskrit: String,
    pub name_transliteration: Option<String>,
    pub name_english: Option<String>,
    pub meaning_en: Option<String>,
    pub meaning_hi: Option<String>,
    pub summary_en: Option<String>,
    pub summary_hi: Option<String>,
}

/// A single verse, identified by "chapter.verse" (e.g. "2.47").
#[derive(Debug, Clone, Deserialize)]
pub struct Shloka {
    pub id: String,
    pub chapter: u32,
    pub verse: u32,
    pub sanskrit: String,
    /// Roman-script rendering; the ground truth for pronunciation scoring.
    pub transliteration: String,
    #[serde(default)]
    pub translations: Translations,
    #[serde(default)]
    pub hindi: HindiTranslations,
    pub commentary_en: Option<String>,
    pub commentary_hi: Option<String>,
}

/// English translations keyed by translator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Translations {
    pub sivananda: Option<String>,
    pub purohit: Option<String>,
    pub gambirananda: Option<String>,
    pub adidevananda: Option<String>,
}

impl Translations {
    /// First available translation, in the dataset's preference order.
    pub fn preferred(&self) -> Option<&str> {
        self.sivananda
            .as_deref()
            .or(self.purohit.as_deref())
            .or(self.gambirananda.as_deref())
            .or(self.adidevananda.as_deref())
    }
}

/// Hindi translations keyed by translator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HindiTranslations {
    pub tejomayananda: Option<String>,
    pub ramsukhdas: Option<String>,
}

/// One day in the reading plan.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyReading {
    pub day: u32,
    pub chapter: u32,
    pub shloka_ids: Vec<String>,
    /// Human-readable range, e.g. "2.47-2.52".
    pub shloka_range: String,
}

/// Top-level shape of the dataset file.
#[derive(Debug, Clone, Deserialize)]
pub struct GitaData {
    pub metadata: GitaMetadata,
    pub chapters: Vec<Chapter>,
    pub shlokas: Vec<Shloka>,
    pub daily_readings: Vec<DailyReading>,
}
