use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use tridict_config::Config;
use tridict_store::SqliteStore;
use tridict_types::InputLanguage;

mod display;
mod logging;

#[derive(Parser, Debug)]
#[command(
    name = "dict",
    version,
    about = "Look a word up in Japanese and Chinese, pivoting through English",
    after_help = "Examples:\n  dict cat              Show 5 results per language\n  dict cat -n 10        Show 10 results\n  dict --json ねこ       JSON output\n  dict --from zh 猫      Treat the input as Chinese"
)]
struct Cli {
    /// Word to look up (English, Japanese or Chinese)
    word: String,

    /// Maximum results per language (0 = unlimited)
    #[arg(short = 'n', long = "limit")]
    limit: Option<usize>,

    /// Print the response as JSON
    #[arg(long = "json")]
    json: bool,

    /// Dictionary database to use instead of searching for one
    #[arg(long = "db")]
    db: Option<PathBuf>,

    /// JSON config file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Skip language detection and read the word as this language
    #[arg(long = "from", value_enum)]
    from: Option<Source>,

    /// Debug logging to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Source {
    En,
    Ja,
    Zh,
}

impl From<Source> for InputLanguage {
    fn from(source: Source) -> Self {
        match source {
            Source::En => InputLanguage::English,
            Source::Ja => InputLanguage::Japanese,
            Source::Zh => InputLanguage::Chinese,
        }
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?
            .with_env()?,
        None => Config::new()?,
    };
    if let Some(db) = cli.db.clone() {
        config.dictionary.path = Some(db);
    }
    if let Some(limit) = cli.limit {
        config.limit = limit;
    }

    logging::init(&config.log_level, cli.verbose)?;
    tracing::debug!(limit = config.limit, "configuration loaded");

    let db_path = config.dictionary.resolve_database().ok_or_else(|| {
        let missing = match &config.dictionary.path {
            Some(path) => path.display().to_string(),
            None => "dictionary.db".to_string(),
        };
        anyhow!(
            "{missing} not found\n\
             Generate one with: cargo run -p tridict-store --bin generate_sample -- dictionary.db"
        )
    })?;

    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("failed to open {}", db_path.display()))?;

    let response = match cli.from {
        Some(source) => tridict_core::query_as(&store, &cli.word, source.into(), config.limit)?,
        None => tridict_core::query(&store, &cli.word, config.limit)?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        let color = atty::is(atty::Stream::Stdout);
        print!("{}", display::render(&response, color));
    }

    Ok(())
}
