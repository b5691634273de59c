use anyhow::{Context, Result};
use certreq_status::{
    cli::{self, Cli},
    config::Settings,
    manifest,
    telemetry,
    RequestSummary,
};
use clap::Parser;
use tracing::{debug, info};

fn main() -> Result<()> {
    // 1. Parse the command line before anything else so --help works without config
    let args = Cli::parse();

    // 2. Pick up a .env file if present
    dotenvy::dotenv().ok();

    // 3. Load configuration; command line values take precedence
    let mut settings = Settings::load().context("Failed to load configuration")?;
    args.apply(&mut settings).context("Invalid command line")?;

    // 4. Initialize telemetry
    telemetry::init_logging(&settings)?;
    debug!("Configuration loaded: {:?}", settings);

    // 5. Decode the manifest
    let path = settings
        .inspect
        .manifest_path
        .clone()
        .context("No manifest given: pass a path or set CERTREQ__INSPECT__MANIFEST_PATH")?;
    let req = manifest::from_path(&path)
        .with_context(|| format!("Failed to read CertificateRequest from {}", path.display()))?;

    // 6. Report
    let summary = RequestSummary::from_request(&req);
    info!(
        request = %summary.name,
        approved = summary.approved,
        denied = summary.denied,
        ready = summary.ready,
        "Inspected CertificateRequest"
    );

    print!("{}", cli::render(&summary, settings.inspect.output)?);

    Ok(())
}
