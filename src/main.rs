use anyhow::{anyhow, Context, Result};
use env_logger::Env;
use log::info;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use studyscan::config::{Config, OutputFormat};
use studyscan::document::{collect_full_text, PageSource, TextPages, FORM_FEED};
use studyscan::schedule::extract_schedule;

/// Command line arguments structure
#[derive(Debug, Default)]
struct CommandArgs {
    input: Option<PathBuf>,
    json: bool,
    pages: Option<usize>,
    delimiter: Option<String>,
    help: bool,
}

impl CommandArgs {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self> {
        let mut parsed = CommandArgs::default();
        let mut args = args;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "--help" | "-h" => parsed.help = true,
                "--pages" => {
                    let value = args.next().ok_or_else(|| anyhow!("--pages requires a value"))?;
                    parsed.pages =
                        Some(value.parse().with_context(|| {
                            format!("invalid page count: {}", value)
                        })?);
                }
                "--delimiter" => {
                    let value =
                        args.next().ok_or_else(|| anyhow!("--delimiter requires a value"))?;
                    if value.is_empty() {
                        return Err(anyhow!("--delimiter must not be empty"));
                    }
                    parsed.delimiter = Some(value);
                }
                flag if flag.starts_with("--") => {
                    return Err(anyhow!("unknown flag: {}", flag));
                }
                _ => {
                    if parsed.input.is_some() {
                        return Err(anyhow!("only one input file may be given"));
                    }
                    parsed.input = Some(PathBuf::from(arg));
                }
            }
        }
        Ok(parsed)
    }
}

fn print_usage() {
    println!("Usage: studyscan [options] [file]");
    println!();
    println!("Extract study schedule items from a document's text layer.");
    println!("Reads from <file>, or from stdin when no file is given.");
    println!("Feed it `pdftotext your-schedule.pdf -` output.");
    println!();
    println!("Options:");
    println!("  --json             Print items as JSON");
    println!("  --pages <n>        Override the detected page count");
    println!("  --delimiter <s>    Page delimiter (default: form feed)");
    println!("  --help             Show this help");
}

fn main() -> Result<()> {
    // Initialize logging with custom format
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let args = CommandArgs::parse(std::env::args().skip(1))?;
    if args.help {
        print_usage();
        return Ok(());
    }

    let config = Config::load().unwrap_or_default();

    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
            buf
        }
    };

    let delimiter = args
        .delimiter
        .or(config.extractor.page_delimiter)
        .unwrap_or_else(|| FORM_FEED.to_string());
    let source = TextPages::with_delimiter(&text, &delimiter);
    let total_pages = args.pages.unwrap_or_else(|| source.page_count());
    info!("processing {} page(s) of input", total_pages);

    let full_text = collect_full_text(&source)?;
    let items = extract_schedule(&full_text, total_pages);

    let json = args.json || config.extractor.output == OutputFormat::Json;
    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for (i, item) in items.iter().enumerate() {
            let date = item
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "(no date)".to_string());
            println!("{}. {} {}", i + 1, date, item.title);
            println!("   {}", item.description);
        }
    }

    Ok(())
}
