use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sample_averager::pipeline::Pipeline;
use sample_averager::reporter;
use sample_averager::source::{EmbeddedSource, JsonFileSource, SampleSource};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "sample-averager", version, about = "Report grouped sample averages")]
struct Cli {
    /// JSON object mapping "label;unit" keys to arrays of samples. The
    /// built-in data set is used when omitted.
    #[arg(short, long, env = "SAMPLE_AVERAGER_INPUT", value_name = "FILE")]
    input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let source: Box<dyn SampleSource> = match cli.input {
        Some(ref path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(EmbeddedSource),
    };
    let table = Pipeline::run(source.as_ref()).with_context(|| match cli.input {
        Some(ref path) => format!("Failed to average samples from {}", path.display()),
        None => "Failed to average the built-in samples".to_string(),
    })?;
    if table.is_empty() {
        warn!("no sample groups to report");
    }

    match cli.format {
        OutputFormat::Text => {
            for line in reporter::render(&table) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", reporter::render_json(&table)?),
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("sample_averager=debug")
        } else {
            EnvFilter::new("sample_averager=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
