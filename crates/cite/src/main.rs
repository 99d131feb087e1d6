/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod config;

use anyhow::{bail, Context, Result};
use cite_core::{CitationRecord, Style};
use cite_processor::{
    export_text,
    io::{load_lookup_table, load_record},
    new_entry,
    values::normalize_isbn,
    Applied, BibliographyStore, Html, JsonFileStore, LookupSequencer, PlainText, Processor,
};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a cite.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log processing decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a citation record
    Format {
        /// Path to the record (JSON or YAML)
        record: Option<PathBuf>,

        /// Citation style (MLA, APA or Chicago)
        #[arg(short, long)]
        style: Option<Style>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Plain)]
        format: Format,

        /// Output citation, kind and warnings as JSON
        #[arg(long)]
        json: bool,

        /// Seed a web record from bookmarklet query parameters (t, u, s, a, d)
        #[arg(long, conflicts_with = "record")]
        from_query: Option<String>,
    },
    /// List the fields a record is still missing
    Check {
        /// Path to the record (JSON or YAML)
        record: PathBuf,
    },
    /// Print the parenthetical in-text citation
    InText {
        /// Path to the record (JSON or YAML)
        record: PathBuf,

        /// Page to cite; defaults to the first page of the record's range
        #[arg(short, long)]
        page: Option<String>,
    },
    /// Normalize an ISBN, optionally looking it up and merging the result
    Isbn {
        /// ISBN-10 or ISBN-13, with or without hyphens
        value: String,

        /// Offline lookup table (JSON object keyed by ISBN)
        #[arg(long)]
        lookup_db: Option<PathBuf>,

        /// Record to merge the lookup result into
        #[arg(long, requires = "lookup_db")]
        record: Option<PathBuf>,
    },
    /// Manage the saved works-cited list
    Bib {
        #[command(subcommand)]
        action: BibCommand,
    },
    /// Generate JSON schema for citation records
    #[cfg(feature = "schema")]
    Schema,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum BibCommand {
    /// Format a record and save it to the list
    Add {
        /// Path to the record (JSON or YAML)
        record: PathBuf,

        /// Citation style (MLA, APA or Chicago)
        #[arg(short, long)]
        style: Option<Style>,
    },
    /// Show saved citations, newest first
    List,
    /// Remove every saved citation
    Clear,
    /// Write saved citations as plain text, one per line
    Export {
        /// Output file; stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Format {
    Plain,
    Html,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    debug!(style = %config.default_style, store = %config.store.path.display(), "loaded config");

    match cli.command {
        Commands::Format {
            record,
            style,
            format,
            json,
            from_query,
        } => {
            let record = match (record, from_query) {
                (_, Some(query)) => CitationRecord::from_query(&query),
                (Some(path), None) => read_record(&path)?,
                (None, None) => bail!("expected a record file or --from-query"),
            };
            let record = with_accessed_today(record);
            let processor = Processor::new(style.unwrap_or(config.default_style));
            let citation = match format {
                Format::Plain => processor.format_with(&PlainText, &record),
                Format::Html => processor.format_with(&Html, &record),
            };

            if json {
                let formatted = processor.process(&record);
                let result = serde_json::json!({
                    "style": processor.style(),
                    "kind": formatted.kind,
                    "citation": citation,
                    "warnings": formatted.advice.warnings,
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", citation);
            }
        }
        Commands::Check { record } => {
            let record = read_record(&record)?;
            let formatted = Processor::new(config.default_style).process(&record);
            println!("{}", formatted.advice);
        }
        Commands::InText { record, page } => {
            let record = read_record(&record)?;
            let processor = Processor::new(config.default_style);
            println!("{}", processor.in_text(&record, page.as_deref()));
        }
        Commands::Isbn {
            value,
            lookup_db,
            record,
        } => {
            let Some(isbn13) = normalize_isbn(&value) else {
                bail!("ISBN doesn't look valid (expected 10 or 13 digits): {}", value);
            };
            let Some(db) = lookup_db else {
                println!("{}", isbn13);
                return Ok(());
            };

            let table = load_lookup_table(&db)
                .with_context(|| format!("loading lookup table {}", db.display()))?;
            let mut target = match record {
                Some(path) => read_record(&path)?,
                None => CitationRecord::default(),
            };
            let mut sequencer = LookupSequencer::new();
            match sequencer.resolve(&table, &isbn13, &mut target) {
                Applied::Merged => {
                    println!("{}", serde_json::to_string_pretty(&target)?);
                }
                Applied::NotFound => {
                    eprintln!("No book found for ISBN {}.", isbn13);
                    println!("{}", isbn13);
                }
                Applied::Failed(notice) => bail!(notice),
                // A single synchronous request is always current.
                Applied::Stale | Applied::Invalid => println!("{}", isbn13),
            }
        }
        Commands::Bib { action } => {
            let mut store =
                JsonFileStore::with_capacity(&config.store.path, config.store.capacity);
            run_bib(action, &mut store, config.default_style)?;
        }
        #[cfg(feature = "schema")]
        Commands::Schema => {
            let schema = schemars::schema_for!(CitationRecord);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "cite", &mut std::io::stdout());
        }
    }
    Ok(())
}

fn run_bib<S: BibliographyStore>(action: BibCommand, store: &mut S, default_style: Style) -> Result<()> {
    match action {
        BibCommand::Add { record, style } => {
            let record = with_accessed_today(read_record(&record)?);
            let style = style.unwrap_or(default_style);
            let text = Processor::new(style).format(&record);
            store.add(new_entry(text.clone(), style, Some(record.url.as_str())))?;
            println!("{}", text);
        }
        BibCommand::List => {
            let entries = store.list()?;
            if entries.is_empty() {
                eprintln!("Works-cited list is empty.");
            }
            for entry in entries {
                println!("[{}] {}", entry.style, entry.text);
            }
        }
        BibCommand::Clear => {
            store.clear()?;
            eprintln!("Works-cited list cleared.");
        }
        BibCommand::Export { output } => {
            let text = export_text(&store.list()?);
            match output {
                Some(path) => fs::write(&path, format!("{}\n", text))
                    .with_context(|| format!("writing {}", path.display()))?,
                None => println!("{}", text),
            }
        }
    }
    Ok(())
}

fn read_record(path: &Path) -> Result<CitationRecord> {
    load_record(path).with_context(|| format!("reading record {}", path.display()))
}

/// Web records accessed "today" unless the record says otherwise.
fn with_accessed_today(mut record: CitationRecord) -> CitationRecord {
    if record.accessed.trim().is_empty() && !record.is_book_data() {
        record.accessed = chrono::Local::now().format("%Y-%m-%d").to_string();
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use cite_processor::MemoryStore;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_accessed_defaults_for_web_only() {
        let web = with_accessed_today(CitationRecord {
            title: "Example".to_string(),
            ..Default::default()
        });
        assert_eq!(web.accessed.len(), 10);

        let book = with_accessed_today(CitationRecord {
            book_title: "Dune".to_string(),
            ..Default::default()
        });
        assert_eq!(book.accessed, "");

        let kept = with_accessed_today(CitationRecord {
            accessed: "2023-06-01".to_string(),
            ..Default::default()
        });
        assert_eq!(kept.accessed, "2023-06-01");
    }

    #[test]
    fn test_bib_add_and_export() {
        let dir = tempfile::tempdir().unwrap();
        let record = dir.path().join("book.yaml");
        fs::write(
            &record,
            "bookAuthor: Frank Herbert\nbookTitle: dune\npublisher: Chilton Books\nyear: '1965'\n",
        )
        .unwrap();

        let mut store = MemoryStore::new();
        run_bib(
            BibCommand::Add {
                record: record.clone(),
                style: Some(Style::Apa),
            },
            &mut store,
            Style::Mla,
        )
        .unwrap();
        run_bib(
            BibCommand::Add {
                record,
                style: None,
            },
            &mut store,
            Style::Mla,
        )
        .unwrap();

        let entries = store.list().unwrap();
        assert_eq!(entries[0].style, Style::Mla);
        assert_eq!(entries[0].text, "Herbert, Frank. Dune. Chilton Books, 1965.");
        assert_eq!(entries[1].text, "Herbert, F. (1965). Dune. Chilton Books.");
        assert_eq!(entries[1].url, None);

        let output = dir.path().join("works_cited.txt");
        run_bib(
            BibCommand::Export {
                output: Some(output.clone()),
            },
            &mut store,
            Style::Mla,
        )
        .unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Herbert, Frank. Dune. Chilton Books, 1965.\nHerbert, F. (1965). Dune. Chilton Books.\n"
        );

        run_bib(BibCommand::Clear, &mut store, Style::Mla).unwrap();
        assert!(store.list().unwrap().is_empty());
    }
}
