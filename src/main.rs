use anyhow::{Context, Result};
use calc_dist::args::{validate, USAGE};
use calc_dist::report::{self, Report};
use calc_dist::{compute_request, text};
use clap::error::ErrorKind;
use clap::Parser;
use log::{debug, LevelFilter};

mod cli;

use cli::Args;

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

/// Prints the usage text and terminates with a failure status.
fn usage_exit() -> ! {
    println!("{}", USAGE);
    std::process::exit(1);
}

fn run(args: &Args) -> Result<()> {
    let request = match validate(&args.raw_args()) {
        Ok(request) => request,
        Err(e) => {
            debug!("argument validation failed: {}", e);
            usage_exit();
        }
    };

    let distance = compute_request(&request).with_context(|| {
        format!(
            "distance calculation failed for {} ({}, {}) - ({}, {})",
            request.ellipsoid,
            request.p1.lat(),
            request.p1.lon(),
            request.p2.lat(),
            request.p2.lon()
        )
    })?;

    let report = Report::new(&request, distance);
    if args.json {
        println!("{}", report::render_json(&report)?);
    } else {
        println!("{}", report::render_text(&report));
    }
    Ok(())
}

/// Main entry point for the calc-dist tool.
///
/// Invalid arguments print the usage text and exit with status 1; a failed
/// calculation prints the error to stderr and also exits with status 1.
fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => usage_exit(),
    };

    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!(
            "{} {} {:#}",
            text::error_icon(),
            text::bold(text::error("[EXCEPTION]")),
            e
        );
        std::process::exit(1);
    }
}
