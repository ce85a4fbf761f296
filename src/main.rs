//! Studio Blog Updater: binary entrypoint.
//! One-shot run: fetch configured feeds, filter for relevance, splice the
//! rendered grid into the target document. Scheduling is the job runner's
//! concern, not ours.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use studio_blog_updater::{config, RefreshOutcome};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op elsewhere.
    let _ = dotenvy::dotenv();
    init_tracing();

    tracing::info!(
        started_at = %chrono::Utc::now().to_rfc3339(),
        "starting blog update"
    );

    let cfg = config::load_default()?;

    match studio_blog_updater::run_update(&cfg).await? {
        RefreshOutcome::Updated { total } => {
            tracing::info!(total, "blog update complete");
        }
        RefreshOutcome::SkippedThreshold { .. } | RefreshOutcome::AnchorMissing => {
            // Already logged at the decision site; both are successful runs.
        }
    }

    Ok(())
}
