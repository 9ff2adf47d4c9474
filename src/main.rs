use std::path::PathBuf;

use clap::Parser;
use vocab_core::config::Config;
use vocab_core::{DedupePolicy, SourceFormat, UnknownLevelPolicy};

#[derive(Parser)]
#[command(name = "vocab", about = "Turn graded vocabulary lists into words.json", version)]
struct Cli {
    /// Input file, or - for stdin. Defaults to the first configured candidate
    /// found in the search directory.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output JSON file, or - for stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// auto, level-list, delimited or tabular.
    #[arg(long)]
    format: Option<SourceFormat>,

    /// What to do with rows whose level is unreadable: drop, carry or default.
    #[arg(long)]
    unknown_level: Option<UnknownLevelPolicy>,

    /// Level used by the carry and default policies.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
    default_level: Option<u8>,

    /// none, keep-first or keep-highest.
    #[arg(long)]
    dedupe: Option<DedupePolicy>,

    /// Number of skipped lines to show in the report.
    #[arg(long)]
    skip_preview: Option<usize>,

    /// Directory searched for the default input names.
    #[arg(long)]
    search_dir: Option<PathBuf>,

    /// Extra config file layered over ~/.config/vocab/config.toml.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long)]
    debug: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn apply(&self, cfg: &mut Config) {
        if let Some(format) = self.format {
            cfg.ingest.format = format;
        }
        if let Some(policy) = self.unknown_level {
            cfg.ingest.unknown_level = policy;
        }
        if let Some(level) = self.default_level {
            cfg.ingest.default_level = level;
        }
        if let Some(policy) = self.dedupe {
            cfg.ingest.dedupe = policy;
        }
        if let Some(n) = self.skip_preview {
            cfg.ingest.skip_preview = n;
        }
        if let Some(dir) = &self.search_dir {
            cfg.input.search_dir = dir.clone();
        }
        if let Some(path) = &self.output {
            cfg.output.path = path.clone();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    if let Err(err) = execute(&cli) {
        eprintln!("error: {err:#}");
        if let Some(hint) = err
            .downcast_ref::<vocab_core::Error>()
            .and_then(vocab_core::Error::guidance)
        {
            eprintln!("hint: {hint}");
        }
        std::process::exit(1);
    }
    Ok(())
}

fn execute(cli: &Cli) -> anyhow::Result<()> {
    let mut cfg = Config::load(cli.config.as_deref())?;
    cli.apply(&mut cfg);

    let summary = vocab::run(cli.input.as_deref(), &cfg.output.path, &cfg)?;
    let report = vocab::report::render(&summary);
    if summary.output.is_some() {
        print!("{report}");
    } else {
        eprint!("{report}");
    }
    Ok(())
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "warn" })
    });

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
            tracing::info!(path = %path.display(), "vocab log started");
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .init();
        }
    }
    Ok(())
}
