use clap::error::ErrorKind;
use clap::Parser;
use hookrename::cli::{self, Args};
use hookrename::logging;
use hookrename::output::display_execution_result;
use hookrename::progress::{self, Progress};
use hookrename::{execute_batch, filter_by_extension, scan_directory};
use hookrename::{AppError, ArgumentError, Config, JPEG_EXTENSIONS};
use std::io;
use tracing::{debug, error, info};

fn main() {
    let raw = std::env::args_os().map(|a| a.to_string_lossy().into_owned());

    let normalized = match cli::normalize_args(raw) {
        Ok(normalized) => normalized,
        Err(e) => exit_with(AppError::from(e)),
    };

    let args = match Args::try_parse_from(normalized) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => exit_with(ArgumentError::from(e).into()),
    };

    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        exit_with(e);
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let config = Config::from_args(args)?;
    debug!(?config, "Configuration validated");

    // Step 1: List directory
    let entries = scan_directory(&config.target_dir)?;
    if entries.is_empty() {
        return Err(AppError::EmptyDirectory {
            path: config.target_dir.clone(),
        });
    }
    info!("Found {} entries in {:?}", entries.len(), config.target_dir);

    // Step 2: Optional extension filter
    let entries = if config.jpeg_only {
        filter_by_extension(entries, &JPEG_EXTENSIONS)
    } else {
        entries
    };

    // Step 3: Rename each entry
    let mut progress = Progress::new(progress::should_use_colors());
    let result = execute_batch(&entries, &config, &mut progress);

    info!(
        succeeded = result.succeeded_count(),
        failed = result.failed_count(),
        "Batch finished"
    );

    display_execution_result(&result, &mut io::stdout())
        .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

    Ok(())
}

fn exit_with(e: AppError) -> ! {
    if e.is_informational() {
        debug!("{}", e);
    } else {
        error!("{}", e);
    }

    eprintln!("\nError: {}", e.detailed_message());

    if e.shows_usage() {
        let _ = cli::print_usage(&mut io::stdout());
    }

    std::process::exit(e.exit_code().into());
}
