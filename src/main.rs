//! # chatsift CLI
//!
//! Command-line interface for the chatsift library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatsift::ChatsiftError;
use chatsift::cli::{Args, Command, LogLevel, TelegramArgs};
use chatsift::config::RuleConfig;
use chatsift::format::{ExportLayout, OutputFormat, save_messages};
use chatsift::ingest::run_directory;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.log_level);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `--log-level`.
fn init_logging(level: LogLevel) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_filter_string()));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: Could not initialize logging: {e}");
    }
}

fn run(args: &Args) -> Result<(), ChatsiftError> {
    let config = RuleConfig::from_path(&args.config)?;

    match &args.command {
        Command::Telegram(tg) => run_telegram(&config, tg),
    }
}

fn run_telegram(config: &RuleConfig, args: &TelegramArgs) -> Result<(), ChatsiftError> {
    let start = Instant::now();
    let format: OutputFormat = args.output_type.into();

    // Reject before reading anything
    format.ensure_supported()?;

    println!("chatsift v{}", env!("CARGO_PKG_VERSION"));
    println!("Input:   {}", args.input.display());
    println!("Output:  {}", args.output.display());
    println!("Format:  {}", format);
    println!("Split:   {}", if args.split_persona { "per sender" } else { "combined" });
    println!();

    let report = run_directory(config, &args.input)?;

    println!("Summary for telegram ({} files):", report.files.len());
    println!("{}", report.summary);
    println!();

    let senders: Vec<String> = report.unique_senders().into_iter().collect();
    println!("Unique senders ({}): {}", senders.len(), senders.join(", "));
    println!();

    let layout = ExportLayout::new(&args.output);
    let written = save_messages(&report.messages, format, args.split_persona, &layout)?;

    for path in &written {
        println!("Wrote {}", path.display());
    }
    println!(
        "Done: {} messages in {} file(s) ({:.2}s)",
        report.messages.len(),
        written.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
