//! newfile-transfer CLI entry point.
//!
//! Finds files in watched folders that are not yet in the manifest, asks for
//! confirmation, and copies them to the transfer destination with progress.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod interactive;
mod output;
mod progress;

use std::env;

use clap::Parser;

use args::Args;
use newfile_transfer_config::{
    LoadedConfig, MonitorConfig, ProgressSourceKind, discover_config, load_config,
    load_default_config,
};
use newfile_transfer_manifest::{Manifest, find_new_files};
use newfile_transfer_operations::{
    MonitorOptions, ProgressSource, TransferResult, execute_transfer, plan_transfers,
};
use progress::ProgressManager;

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    pretty_env_logger::init();

    if let Err(e) = run(&args) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = env::current_dir()?;

    let loaded: LoadedConfig = match args.config.as_deref() {
        Some(path) => load_config(&cwd.join(path))?,
        None => match discover_config(&cwd) {
            Some(path) => load_config(&path)?,
            None => load_default_config(&cwd),
        },
    };
    let config = args.apply_overrides(loaded.config, &cwd);

    output::print_header("New File Transfer");
    output::print_locations(
        loaded.config_path.as_deref(),
        &config.manifest,
        &config.destination,
    );

    let mut manifest = Manifest::load(&config.manifest)?;
    let new_files = find_new_files(&config.folders, manifest.entries())?;

    if new_files.is_empty() {
        output::print_nothing_new();
        return Ok(());
    }

    output::print_new_files(&new_files);

    if args.list {
        return Ok(());
    }

    if !args.yes && !interactive::confirm_copy()? {
        output::print_declined();
        return Ok(());
    }

    let transfers = plan_transfers(&new_files, &config.destination)?;
    let options = monitor_options(&config.monitor);
    let progress_mgr = ProgressManager::new(args.should_show_progress());

    println!();
    for op in &transfers {
        if op.will_skip {
            let reason = op.skip_reason.as_deref().unwrap_or("skipped");
            progress_mgr.print_skipped(&op.name, reason);
            continue;
        }

        output::print_copying(op);
        let bar = progress_mgr.create_byte_bar(&op.name, op.bytes_total);

        let result = execute_transfer(op, &mut manifest, &options, |progress| {
            ProgressManager::update(&bar, progress);
        });

        bar.finish_and_clear();

        match result? {
            TransferResult::Copied {
                files_copied,
                bytes_copied,
            } => progress_mgr.print_result_with_size(
                &op.name,
                "successfully copied",
                files_copied,
                bytes_copied,
            ),
            TransferResult::Skipped => progress_mgr.print_skipped(&op.name, "not found"),
        }
    }

    progress_mgr.clear();

    println!();
    output::print_success();
    Ok(())
}

/// Translate the configured monitor settings for the copy layer.
fn monitor_options(config: &MonitorConfig) -> MonitorOptions {
    MonitorOptions {
        warmup: config.warmup(),
        poll_interval: config.poll_interval(),
        progress_source: match config.progress_source {
            ProgressSourceKind::Tracked => ProgressSource::Tracked,
            ProgressSourceKind::DestinationSize => ProgressSource::DestinationSize,
        },
    }
}
