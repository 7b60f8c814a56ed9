use std::path::PathBuf;
use std::process::ExitCode;

use barmaid::{BtwReader, ExtractTargets, ScanMode};
use clap::{ArgGroup, Parser};

const APPNAME: &str = "barmaid";

#[derive(Parser)]
#[command(name = APPNAME, version)]
#[command(about = "Extract the prefix, preview images and container from BarTender (.btw) files", long_about = None)]
#[command(group(ArgGroup::new("action").required(true).args(["extract", "build"])))]
struct Args {
    /// BTW file to read
    file: PathBuf,

    /// Extract mode
    #[arg(short = 'e')]
    extract: bool,

    /// Build mode (not yet implemented)
    #[arg(short = 'b')]
    build: bool,

    /// Container output file
    #[arg(short = 'c', value_name = "FILE")]
    container: Option<PathBuf>,

    /// Preview PNG output file
    #[arg(short = 'i', value_name = "FILE")]
    preview: Option<PathBuf>,

    /// Mask PNG output file
    #[arg(short = 'm', value_name = "FILE")]
    mask: Option<PathBuf>,

    /// Prefix output file
    #[arg(short = 'p', value_name = "FILE")]
    prefix: Option<PathBuf>,

    /// Heuristic scan for PNG images (ignores the file structure)
    #[arg(short = 's')]
    heuristic: bool,

    /// Verbose
    #[arg(short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_target(false)
        .format_timestamp(None)
        .init();

    if args.build {
        eprintln!("{}: -b not yet implemented", APPNAME);
        return ExitCode::FAILURE;
    }

    let mode = if args.heuristic {
        ScanMode::Heuristic
    } else {
        ScanMode::Structured
    };

    let reader = match BtwReader::open(&args.file, mode) {
        Ok(reader) => reader,
        Err(e) => {
            let what = match mode {
                ScanMode::Structured => "failed to parse file",
                ScanMode::Heuristic => "heuristic failed to identify images",
            };
            eprintln!("{}: {}: {}: {}", APPNAME, args.file.display(), what, e);
            return ExitCode::FAILURE;
        }
    };

    let targets = ExtractTargets {
        prefix: args.prefix,
        preview: args.preview,
        mask: args.mask,
        container: args.container,
    };
    if let Err(e) = reader.extract_all(&targets) {
        eprintln!("{}: {}: extraction failed: {}", APPNAME, args.file.display(), e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
