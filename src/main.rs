use anyhow::{anyhow, Context, Result};
use bibleref::catalog::{MemoryCatalog, VerseRepository};
use bibleref::config::Config;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bibleref", about = "Resolve Chinese scripture references against a verse catalog")]
struct Cli {
    /// Catalog JSON file (overrides config)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for a reference such as "約3:16" or "Gen1"
    Search { query: String },
    /// Show the normalized text and reference shape of a query
    Parse { query: String },
    /// List catalog books in canonical order
    Books,
    /// List the chapters of a book
    Chapters { book: String },
    /// List the verses of a chapter
    Verses { book: String, chapter: u32 },
    /// Print the text of one verse
    Verse { book: String, chapter: u32, verse: u32 },
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &Path) -> Result<Config> {
    let text =
        fs::read_to_string(path).with_context(|| format!("cannot read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config JSON in {}", path.display()))
}

fn find_config(explicit: Option<&PathBuf>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    for p in ["bibleref.config.json", "config/bibleref.config.json"] {
        let path = PathBuf::from(p);
        if path.is_file() {
            return load_config(&path);
        }
    }
    Ok(Config::default())
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

fn open_catalog(path: Option<&PathBuf>) -> Result<MemoryCatalog> {
    let path = path.ok_or_else(|| anyhow!("no catalog given (use --catalog or the config file)"))?;
    Ok(MemoryCatalog::load(path)?)
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let pretty = cli.pretty || config.pretty;
    let catalog_path = cli.catalog.or(config.catalog);

    match cli.command {
        Command::Parse { query } => {
            let (normalized, parsed) = bibleref::parse_reference(&query);
            println!("{}", normalized);
            println!("{:?}", parsed);
        }
        Command::Search { query } => {
            info!(query = %query, "search");
            let catalog = open_catalog(catalog_path.as_ref())?;
            let results = bibleref::search_reference(&query, &catalog)
                .with_context(|| format!("search failed for {:?}", query))?;
            print_json(&results, pretty)?;
        }
        Command::Books => {
            info!("books");
            let catalog = open_catalog(catalog_path.as_ref())?;
            print_json(&bibleref::list_books(&catalog)?, pretty)?;
        }
        Command::Chapters { book } => {
            info!(book = %book, "chapters");
            let catalog = open_catalog(catalog_path.as_ref())?;
            print_json(&catalog.chapters(&book)?, pretty)?;
        }
        Command::Verses { book, chapter } => {
            info!(book = %book, chapter, "verses");
            let catalog = open_catalog(catalog_path.as_ref())?;
            print_json(&catalog.verses(&book, chapter)?, pretty)?;
        }
        Command::Verse {
            book,
            chapter,
            verse,
        } => {
            info!(book = %book, chapter, verse, "verse");
            let catalog = open_catalog(catalog_path.as_ref())?;
            match catalog.verse_text(&book, chapter, verse)? {
                Some(text) => print_json(
                    &json!({
                        "book": book,
                        "chapter": chapter,
                        "verse": verse,
                        "text": text,
                    }),
                    pretty,
                )?,
                None => {
                    warn!(book = %book, chapter, verse, "verse not found");
                    return Err(anyhow!("verse not found: {} {}:{}", book, chapter, verse));
                }
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let config = find_config(cli.config.as_ref()).unwrap_or_else(|e| die(&format!("{:#}", e)));
    init_logging(&config);

    if let Err(e) = run(cli, config) {
        die(&format!("{:#}", e));
    }
}
