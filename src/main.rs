use anyhow::{Context, Result};
use clap::Parser;
use fedscope_clean::{
    config::{Cli, PipelineConfig},
    CleanError,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fedscope_clean=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) resolve input + paths ────────────────────────────────────
    let cli = Cli::parse();
    let config = match PipelineConfig::try_from(cli) {
        Ok(config) => config,
        Err(CleanError::InputSelectionCancelled) => {
            eprintln!("❌ No file selected. Exiting...");
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("selecting input file"),
    };
    info!(
        input = %config.input.display(),
        reference = %config.reference.display(),
        output = %config.output.display(),
        "startup"
    );

    // ─── 3) clean + write ────────────────────────────────────────────
    let summary = fedscope_clean::run(&config)
        .with_context(|| format!("cleaning {}", config.input.display()))?;

    println!("✅ Dataset saved as '{}'", summary.output.display());
    Ok(())
}
