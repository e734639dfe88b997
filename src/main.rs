use atok2azookey::config::Args;
use atok2azookey::{Result, convert_file, merge_file, output};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn run(args: &Args) -> Result<()> {
    let conversion = convert_file(&args.atok_file, args.options())?;
    let stats = &conversion.stats;

    println!("Converted: {} entries", conversion.entries.len());
    println!("Skipped emoticons: {}", stats.skipped_emoticons);
    println!("Skipped auto-registered: {}", stats.skipped_auto);
    println!("Skipped invalid reading: {}", stats.skipped_invalid);
    println!("Skipped duplicates: {}", stats.skipped_duplicates);

    if let Some(path) = &args.output {
        output::write_entries(path, &conversion.entries)?;
        println!("Saved to: {}", path.display());
    }

    if let Some(path) = &args.merge {
        let merged = merge_file(path, &conversion.entries)?;
        println!("Added {} new entries to {}", merged.added, path.display());
        println!("Total entries: {}", merged.total);
    }

    if args.output.is_none() && args.merge.is_none() {
        tracing::warn!("Neither --output nor --merge given, nothing was written");
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::from_env();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
