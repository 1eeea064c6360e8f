//! Holder walkthrough
//!
//! Builds both holders, overwrites the numeric one in place, and reads
//! everything back through the shared provider capability.

use anyhow::Context;
use clap::Parser;
use colored::*;
use holder_types::{read_all, read_value, NumericHolder, TextHolder, ValueProvider};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "holder-demo", version, about = "Value provider holder walkthrough")]
struct Args {
    /// Number to parse into a holder
    #[arg(default_value = "42")]
    number: String,

    /// Text for the text holder
    #[arg(short, long, default_value = "hello")]
    text: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "trace" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    println!("{}", "Value provider holders".cyan().bold());
    println!();

    let defaults = (NumericHolder::default(), TextHolder::default());
    println!(
        "  default numeric: {}  default text: {:?}",
        read_value(&defaults.0).to_string().green(),
        read_value(&defaults.1)
    );

    let mut parsed: NumericHolder = args
        .number
        .parse()
        .with_context(|| format!("cannot build a numeric holder from {:?}", args.number))?;
    info!(value = parsed.value(), "Parsed numeric holder");
    println!("  parsed numeric:  {}", parsed.to_string().green());

    parsed.stored_value *= 2.0;
    println!("  after overwrite: {}", parsed.to_string().yellow());

    let text = TextHolder::new(args.text);
    println!("  text:            {}", text.to_string().green());

    let numbers: Vec<&dyn ValueProvider<f64>> = vec![&defaults.0, &parsed];
    info!(values = ?read_all(&numbers), "Read numeric providers");

    Ok(())
}
