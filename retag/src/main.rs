mod extract;
mod merge;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// ID3v2 Retag Tool — extracts tag data from MP3 files and merges it back.
#[derive(Parser)]
#[command(name = "retag")]
struct Args {
    /// Display version and quit
    #[arg(long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Extract tag contents to a JSON file (and embedded cover art to an image file)
    Extract {
        /// Input .mp3 files or glob patterns
        files: Vec<String>,

        /// Output directory ("SRC-FOLDER" = alongside the .mp3 files)
        #[arg(long = "output-folder", default_value = "SRC-FOLDER")]
        output_folder: String,

        /// Stop on the first error instead of continuing and reporting failures at the end
        #[arg(long = "fail-fast", default_value_t = false, action = ArgAction::Set)]
        fail_fast: bool,
    },

    /// Build a retagged MP3 from a source file and a JSON info file
    Merge {
        /// Source .mp3 file
        mp3: PathBuf,

        /// JSON file mapping frame identifiers to values; the "APIC" value
        /// names an image file to embed
        info: PathBuf,

        /// Output path (default: "[merged] <name>.mp3" beside the input)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.version {
        id3v2::version::print_cli_version_banner(
            "ID3v2 Retag Tool",
            env!("CARGO_PKG_VERSION"),
            env!("RELEASE_VERSION"),
            env!("GIT_COMMIT"),
        );
        return Ok(());
    }

    match &args.command {
        Some(Command::Extract {
            files,
            output_folder,
            fail_fast,
        }) => extract_cli(files, output_folder, *fail_fast),
        Some(Command::Merge { mp3, info, output }) => {
            merge::merge_file(mp3, info, output.as_deref())
        }
        None => Err("expected a command: extract or merge (see --help)".into()),
    }
}

fn extract_cli(
    patterns: &[String],
    output_folder: &str,
    fail_fast: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = expand_globs(patterns)?;
    if files.is_empty() {
        return Err("Expected at least one .mp3 file as input!".into());
    }

    let mut errors: Vec<(PathBuf, String)> = Vec::new();

    for path in &files {
        log::info!("Processing {}", path.display());
        if let Err(e) = extract::extract_file(path, output_folder) {
            if fail_fast {
                return Err(e);
            }
            log::warn!("{}: {}", path.display(), e);
            errors.push((path.clone(), e.to_string()));
        }
    }

    if !errors.is_empty() {
        log::error!("");
        log::error!("OPERATION COMPLETED WITH ERRORS:");
        for (file, error) in &errors {
            log::error!("  Failed to extract {}: {}", file.display(), error);
        }
        return Err(format!("{} error(s) encountered during processing", errors.len()).into());
    }

    Ok(())
}

/// Expand glob patterns among the inputs; plain paths pass through
/// untouched so a missing file is still reported per-file.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    for pattern in patterns {
        if pattern.contains(['*', '?', '[']) {
            for entry in glob::glob(pattern)? {
                files.push(entry?);
            }
        } else {
            files.push(PathBuf::from(pattern));
        }
    }
    Ok(files)
}
