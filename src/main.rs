//! Kiosk Display Shell (standalone)
//!
//! Full-screen kiosk hosts embed this crate and implement `RenderSurface`
//! over their webview. Run standalone, the binary wires the resilience
//! controller to a headless surface so the decision loop can be exercised
//! and observed without a display:
//!
//! ```text
//!   OS signals ──SIGUSR1/SIGUSR2──▶ controller commands
//!   controller ──load/load_offline_page──▶ headless surface (logged)
//!   controller ──Transition broadcast──▶ JSON lines on the log
//! ```

use std::path::PathBuf;

use clap::Parser;
use url::Url;

use kiosk_shell::config::{self, KioskConfig};
use kiosk_shell::endpoints::EndpointSet;
use kiosk_shell::lifecycle::{signals, Shutdown};
use kiosk_shell::observability::logging;
use kiosk_shell::resilience::{FailureClassifier, ResilienceController};
use kiosk_shell::security::{PermissionBroker, PermissionKind, TrustPolicy};
use kiosk_shell::surface::HeadlessSurface;

#[derive(Parser)]
#[command(name = "kiosk-shell")]
#[command(about = "Kiosk display shell with endpoint failover", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => {
            let mut config = KioskConfig::default();
            config::loader::apply_env_overrides(&mut config);
            config::validate_config(&config).map_err(config::ConfigError::Validation)?;
            config
        }
    };

    logging::init(&config.observability);

    tracing::info!(
        default_environment = %config.default_environment,
        host_id = %config.host_id,
        dev_mode = config.dev_mode,
        environments = config.environments.len(),
        fail_threshold = config.failover.fail_threshold,
        "Configuration loaded"
    );

    let endpoints = EndpointSet::from_config(&config)?;

    // The host engine consults these when the page hits a certificate error
    // or asks for a permission; log their verdict for the primary endpoint
    // so misconfigured trust shows up at startup, not at first failure.
    let trust = TrustPolicy::from_endpoints(&endpoints, config.dev_mode);
    let permissions = PermissionBroker::from_endpoints(&endpoints);
    let primary = endpoints.resolve(endpoints.default_environment(), false);
    tracing::info!(
        url = %primary.url,
        cert_bypass = trust.allow_certificate_error(&primary.url),
        media = ?permissions.decide(&primary.url, PermissionKind::Media),
        "Security policy for primary endpoint"
    );

    let offline_prefix: Url = config.offline.page_url.parse()?;
    let controller = ResilienceController::new(
        endpoints,
        FailureClassifier::default(),
        config.failover.clone(),
        offline_prefix,
        HeadlessSurface,
    );

    let handle = controller.handle();
    let mut transitions = controller.subscribe_transitions();
    let shutdown = Shutdown::new();

    // Ship mode transitions as JSON lines so the host's log pipeline can
    // pick them up without parsing free-form text.
    tokio::spawn(async move {
        while let Ok(transition) = transitions.recv().await {
            match serde_json::to_string(&transition) {
                Ok(line) => tracing::info!(target: "kiosk_shell::transition", "{line}"),
                Err(e) => tracing::error!(error = %e, "failed to serialize transition"),
            }
        }
    });

    let controller_task = tokio::spawn(controller.run(shutdown.subscribe()));
    signals::forward_signals(handle, shutdown).await;

    controller_task.await?;
    tracing::info!("Shutdown complete");
    Ok(())
}
