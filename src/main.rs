use std::path::PathBuf;

use anyhow::{bail, ensure, Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gitaflow::config::AppConfig;
use gitaflow::dataset::GitaDataset;
use gitaflow::progress::UserProgress;
use gitaflow::scoring::score_pronunciation;
use gitaflow::types::Shloka;

/// Gitaflow - Bhagavad Gita reading plan and recitation practice
///
/// Tracks a daily reading plan with streaks and scores recitation practice
/// by comparing a speech-to-text transcript against the expected
/// transliteration of a verse.
#[derive(Parser, Debug)]
#[command(name = "gitaflow")]
#[command(version = "0.1.0")]
#[command(about = "Gita reading plan and recitation practice tool", long_about = None)]
struct Cli {
    /// Override for the verse dataset JSON file
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Override for the progress state file
    #[arg(long, global = true, value_name = "PATH")]
    progress: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a recitation transcript against the expected transliteration
    Score(ScoreArgs),
    /// Print a shloka by id (e.g. "2.47")
    Verse {
        /// Shloka id in "chapter.verse" form
        id: String,
    },
    /// Show the current reading-plan day and streak
    Today,
    /// Mark a reading-plan day complete, updating the streak
    Complete {
        /// Plan day to mark complete (1-based)
        day: u32,
    },
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Expected transliteration text (alternative to --shloka)
    #[arg(long, conflicts_with = "shloka")]
    expected: Option<String>,

    /// Shloka id whose transliteration is the reference
    #[arg(long)]
    shloka: Option<String>,

    /// Transcribed recitation to score
    #[arg(long)]
    actual: String,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,

    /// Record the score into the progress file (requires --shloka)
    #[arg(long)]
    record: bool,
}

impl ScoreArgs {
    fn validate(&self) -> Result<()> {
        if self.expected.is_none() && self.shloka.is_none() {
            bail!("Provide a reference via --expected or --shloka");
        }
        if self.record && self.shloka.is_none() {
            bail!("--record requires --shloka so the score can be keyed by verse");
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Score(ref args) => handle_score(&cli, args),
        Command::Verse { ref id } => handle_verse(&cli, id),
        Command::Today => handle_today(&cli),
        Command::Complete { day } => handle_complete(&cli, day),
    }
}

fn handle_score(cli: &Cli, args: &ScoreArgs) -> Result<()> {
    args.validate()
        .context("Failed to validate score arguments")?;

    let (expected, shloka_id) = match (&args.expected, &args.shloka) {
        (Some(text), _) => (text.clone(), None),
        (None, Some(id)) => {
            let config = load_config(cli)?;
            let dataset = GitaDataset::load(&config.data_path)?;
            let shloka = lookup_shloka(&dataset, id)?;
            (shloka.transliteration.clone(), Some(id.clone()))
        }
        (None, None) => unreachable!("validated above"),
    };

    let result = score_pronunciation(&expected, &args.actual);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Score: {}/100", result.score);
        println!("Expected: {}", result.expected);
        println!("Heard:    {}", result.actual);
        if result.mismatches.is_empty() {
            println!("Mismatched words: none");
        } else {
            println!("Mismatched words: {}", result.mismatches.join(", "));
        }
    }

    if args.record {
        let id = shloka_id.expect("validated: --record requires --shloka");
        let config = load_config(cli)?;
        let mut progress = UserProgress::load(&config.progress_path)?;
        progress.record_score(&id, result.score);
        progress.save(&config.progress_path)?;
        println!(
            "Recorded score for {} (best: {})",
            id, progress.pronunciation_scores[&id]
        );
    }

    Ok(())
}

fn handle_verse(cli: &Cli, id: &str) -> Result<()> {
    let config = load_config(cli)?;
    let dataset = GitaDataset::load(&config.data_path)?;
    let shloka = lookup_shloka(&dataset, id)?;

    println!(
        "Shloka {} (chapter {}, verse {})",
        shloka.id, shloka.chapter, shloka.verse
    );
    println!();
    println!("{}", shloka.sanskrit);
    println!();
    println!("{}", shloka.transliteration);
    if let Some(translation) = shloka.translations.preferred() {
        println!();
        println!("{}", translation);
    }
    Ok(())
}

fn handle_today(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let dataset = GitaDataset::load(&config.data_path)?;
    let progress = UserProgress::load(&config.progress_path)?;

    println!(
        "Day {} of {}",
        progress.current_day,
        dataset.total_readings()
    );
    match dataset.daily_reading(progress.current_day) {
        Some(reading) => {
            let chapter_name = dataset
                .chapter(reading.chapter)
                .and_then(|c| c.name_english.clone())
                .unwrap_or_else(|| format!("Chapter {}", reading.chapter));
            println!("Reading: {} ({})", reading.shloka_range, chapter_name);
            println!("Verses:  {}", reading.shloka_ids.join(", "));
        }
        None => println!("No reading planned for day {}", progress.current_day),
    }
    println!("Streak:  {} day(s)", progress.streak_count);
    Ok(())
}

fn handle_complete(cli: &Cli, day: u32) -> Result<()> {
    let config = load_config(cli)?;
    let dataset = GitaDataset::load(&config.data_path)?;
    let mut progress = UserProgress::load(&config.progress_path)?;

    let total = dataset.total_readings();
    ensure!(day >= 1, "Plan days are 1-based, got {}", day);
    ensure!(
        day <= total,
        "Day {} is beyond the {}-day reading plan",
        day,
        total
    );

    let today = Local::now().date_naive();
    progress.mark_day_complete(day, today, total);
    progress
        .save(&config.progress_path)
        .context("Failed to save progress")?;

    println!("Marked day {} complete", day);
    println!("Streak: {} day(s)", progress.streak_count);
    println!("Next reading: day {}", progress.current_day);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    AppConfig::from_overrides(cli.data.clone(), cli.progress.clone())
        .context("Failed to resolve data and progress paths")
}

fn lookup_shloka<'a>(dataset: &'a GitaDataset, id: &str) -> Result<&'a Shloka> {
    dataset
        .shloka(id)
        .with_context(|| format!("Unknown shloka id '{}'; expected \"chapter.verse\"", id))
}
