use anyhow::{Context, Result, anyhow};
use dailylog_disk::LocalDisk;
use dailylog_framework::{ReaderDesc, RecordReader, SummaryReader};
use dailylog_parser::PatternParser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::{env, path::PathBuf, sync::Arc};

const DISK_NAME: &str = "logs";
const DEFAULT_DISK_ROOT: &str = "storage/logs";

fn print_usage() {
    eprintln!("Usage: dailylog [OPTIONS] <COMMAND> <FILE> [PAGE PER_PAGE]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  records FILE                 Print every record of FILE as JSON");
    eprintln!("  page FILE PAGE PER_PAGE      Print one page of records of FILE");
    eprintln!("  summary FILE                 Print record counts per level and the log date");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --disk DIR          Directory holding the log files (default: {DEFAULT_DISK_ROOT})");
    eprintln!("  --pattern REGEX     Record pattern with named groups date, time, env, level,");
    eprintln!("                      message, context and extra");
    eprintln!("  --verbose, -v       Log debug output to stderr");
    eprintln!("  --help, -h          Print this help message");
}

enum Command {
    Records { file: String },
    Page { file: String, page: usize, per_page: usize },
    Summary { file: String },
    Help,
}

struct Options {
    disk_root: PathBuf,
    pattern: Option<String>,
    verbose: bool,
    command: Command,
}

impl Options {
    fn from_args(args: &[String]) -> Result<Self> {
        let mut disk_root = PathBuf::from(DEFAULT_DISK_ROOT);
        let mut pattern = None;
        let mut verbose = false;
        let mut positional = Vec::new();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--disk" => {
                    let dir = iter.next().ok_or_else(|| anyhow!("--disk needs a directory"))?;
                    disk_root = PathBuf::from(dir);
                }
                "--pattern" => {
                    let re = iter.next().ok_or_else(|| anyhow!("--pattern needs a regex"))?;
                    pattern = Some(re.clone());
                }
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => {
                    return Ok(Self {
                        disk_root,
                        pattern,
                        verbose,
                        command: Command::Help,
                    });
                }
                other if other.starts_with('-') => {
                    return Err(anyhow!("Unknown option: {}", other));
                }
                other => positional.push(other),
            }
        }

        let command = match positional.as_slice() {
            ["records", file] => Command::Records {
                file: file.to_string(),
            },
            ["summary", file] => Command::Summary {
                file: file.to_string(),
            },
            ["page", file, page, per_page] => Command::Page {
                file: file.to_string(),
                page: page
                    .parse()
                    .with_context(|| format!("PAGE must be a positive number, got '{}'", page))?,
                per_page: per_page.parse().with_context(|| {
                    format!("PER_PAGE must be a positive number, got '{}'", per_page)
                })?,
            },
            [] => Command::Help,
            _ => return Err(anyhow!("Unrecognized command line, see --help")),
        };

        Ok(Self {
            disk_root,
            pattern,
            verbose,
            command,
        })
    }
}

/// installs the stderr logger, returns false if another logger got there first
fn init_logger(verbose: bool) -> bool {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .inspect_err(|e| eprintln!("Warning: logging disabled: {}", e))
    .is_ok()
}

fn build_desc(options: &Options) -> Result<ReaderDesc> {
    let parser = match &options.pattern {
        Some(pattern) => PatternParser::new(pattern)?,
        None => PatternParser::laravel(),
    };

    Ok(ReaderDesc::new(Arc::new(parser))
        .with_disk(DISK_NAME, Arc::new(LocalDisk::new(&options.disk_root))))
}

fn run(options: &Options) -> Result<String> {
    let desc = build_desc(options)?;

    let json = match &options.command {
        Command::Records { file } => {
            let records = RecordReader::new(desc)
                .from_disk(DISK_NAME)?
                .info_about(file)?
                .get()?;
            serde_json::to_string_pretty(&records)?
        }
        Command::Page {
            file,
            page,
            per_page,
        } => {
            let records = RecordReader::new(desc)
                .from_disk(DISK_NAME)?
                .info_about(file)?
                .paginate(*page, *per_page)?;
            serde_json::to_string_pretty(&records)?
        }
        Command::Summary { file } => {
            let summary = SummaryReader::new(desc)
                .from_disk(DISK_NAME)?
                .summary(file)?;
            serde_json::to_string_pretty(&summary)?
        }
        Command::Help => unreachable!(),
    };

    Ok(json)
}

fn main() -> Result<()> {
    // Collect args excluding the binary name
    let args: Vec<String> = env::args().skip(1).collect();
    let options = Options::from_args(&args).inspect_err(|_| print_usage())?;

    if let Command::Help = options.command {
        print_usage();
        return Ok(());
    }

    init_logger(options.verbose);
    log::debug!("dailylog: reading from {}", options.disk_root.display());

    let output = run(&options)
        .with_context(|| format!("Failed to read logs from {}", options.disk_root.display()))?;
    println!("{}", output);

    Ok(())
}
