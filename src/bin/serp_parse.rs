//! Command-line front end: parse saved result pages and print their records
//! as JSON.
//!
//! ```text
//! serp-parse page1.html page2.html --jsonl
//! curl -s ... | serp-parse --serp-id live
//! ```

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use serp_parser::{encoding, parse_serps, Options, Record, SerpPage};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "serp-parse", about = "Parse saved search result pages into ranked records")]
struct Cli {
    /// HTML files to parse (reads stdin when none are given)
    files: Vec<PathBuf>,

    /// Page identifier for every record (default: each file's name)
    #[arg(long)]
    serp_id: Option<String>,

    /// Skip the top and bottom ad blocks
    #[arg(long)]
    no_ads: bool,

    /// Log each component's rank and type
    #[arg(short, long)]
    verbose: bool,

    /// One JSON object per line instead of a JSON array
    #[arg(long)]
    jsonl: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = Options {
        include_ads: !cli.no_ads,
        verbose: cli.verbose,
        serp_id: cli.serp_id.clone(),
        ..Options::default()
    };

    let pages = load_pages(&cli)?;
    info!(pages = pages.len(), "loaded input");

    let mut records: Vec<Record> = Vec::new();
    let mut failed = 0usize;
    for (page, result) in pages.iter().zip(parse_serps(&pages, &options)) {
        match result {
            Ok(parsed) => records.extend(parsed),
            Err(err) => {
                failed += 1;
                error!(serp_id = page.serp_id.as_deref(), error = %err, "page failed");
            }
        }
    }

    write_records(&records, cli.jsonl).context("writing records")?;

    if failed > 0 {
        bail!("{failed} of {} pages failed", pages.len());
    }
    Ok(())
}

fn load_pages(cli: &Cli) -> anyhow::Result<Vec<SerpPage>> {
    if cli.files.is_empty() {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes).context("reading stdin")?;
        return Ok(vec![SerpPage {
            serp_id: cli.serp_id.clone(),
            html: encoding::decode_page(&bytes),
        }]);
    }

    cli.files
        .iter()
        .map(|path| {
            let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            Ok(SerpPage {
                serp_id: cli.serp_id.clone().or_else(|| file_id(path)),
                html: encoding::decode_page(&bytes),
            })
        })
        .collect()
}

fn file_id(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}

fn write_records(records: &[Record], jsonl: bool) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    if jsonl {
        for record in records {
            serde_json::to_writer(&mut out, record)?;
            writeln!(out)?;
        }
    } else {
        serde_json::to_writer_pretty(&mut out, records)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
