use anyhow::Context;
use clap::{Parser, ValueEnum};
use picker::{export, generate, GenerationRequest};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
  Text,
  Json,
}

#[derive(Parser, Debug)]
#[command(version, about = "Seeded group + six-digit number picker")]
struct Args {
  /// Sets to generate; clamped to 1..=10
  #[arg(long, default_value = "1")]
  count: String,
  /// "random" or a group from 1 to 5
  #[arg(long, default_value = "random")]
  group: String,
  /// normal, bold or lucky
  #[arg(long, default_value = "normal")]
  tone: String,
  /// Same seed, same sets. Empty seeds from the clock
  #[arg(long, default_value = "")]
  seed: String,
  #[arg(long, value_enum, default_value = "text")]
  format: Format,
  /// Skip the status line
  #[arg(long)]
  quiet: bool,
}

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();
  let request = GenerationRequest::parse(&args.count, &args.group, &args.tone, &args.seed)
    .context("invalid request")?;
  let batch = generate(&request);

  match args.format {
    Format::Text => println!("{}", export::listing(&batch)),
    Format::Json => println!("{}", export::json(&batch).context("encoding results")?),
  }
  if !args.quiet {
    eprintln!("{}", export::status(&batch));
  }
  Ok(())
}
