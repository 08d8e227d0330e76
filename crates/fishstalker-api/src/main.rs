//! Fish Stalker CLI entry point.
//!
//! Binary name: `fishstalker`
//!
//! Parses CLI arguments, initializes tracing, builds the infrastructure
//! adapters, and runs one watch cycle. Intended to be invoked by an
//! external scheduler (cron, systemd timer, serverless tick); the process
//! exits zero whenever the cycle ran to completion, aborted cycles
//! included. Only configuration errors exit non-zero.

mod cli;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use fishstalker_core::service::watch::WatchService;
use fishstalker_infra::config::{self, WatcherConfig};
use fishstalker_infra::crypto::hash::Sha256Fingerprinter;
use fishstalker_infra::http::HttpDocumentFetcher;
use fishstalker_infra::twilio::TwilioNotifier;
use fishstalker_types::notification::Notification;
use fishstalker_types::report::{CycleOutcome, CycleReport};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,fishstalker=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "fishstalker", &mut std::io::stdout());
            Ok(())
        }

        Commands::Check => {
            check_config(cli.json);
            Ok(())
        }

        Commands::Run => run_once(cli.json, cli.quiet).await,
    }
}

/// Wire up the adapters and run one watch cycle.
async fn run_once(json: bool, quiet: bool) -> anyhow::Result<()> {
    let config = WatcherConfig::from_env()?;

    let alert = Notification::stocking_alert(&config.from_number, &config.to_number);
    let notifier = TwilioNotifier::new(config.account_sid, config.auth_token);
    let service = WatchService::new(
        HttpDocumentFetcher::new(),
        Sha256Fingerprinter::new(),
        notifier,
        config.targets,
        alert,
    );

    let report = service.run_cycle().await;
    let completion = report.completion();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "report": report,
                "completion": completion,
            }))?
        );
    } else if !quiet {
        print_report(&report);
        println!(
            "  {} {} ({})",
            console::style("→").dim(),
            completion.body,
            completion.status_code
        );
        println!();
    }

    Ok(())
}

fn print_report(report: &CycleReport) {
    println!();
    match &report.outcome {
        CycleOutcome::Unchanged => {
            println!("  {} No change detected.", console::style("✓").green());
        }
        CycleOutcome::Notified { message_sid } => {
            println!(
                "  {} Document changed -- SMS sent ({})",
                console::style("✓").green(),
                console::style(message_sid).cyan()
            );
        }
        CycleOutcome::NotificationFailed { reason } => {
            println!(
                "  {} Document changed but the SMS failed: {}",
                console::style("✗").red(),
                reason
            );
        }
        CycleOutcome::Aborted { stage, reason } => {
            println!(
                "  {} Cycle aborted during {}: {}",
                console::style("✗").red(),
                stage,
                reason
            );
        }
    }
}

/// Report which required environment variables are present. Values are
/// never printed.
fn check_config(json: bool) {
    let present = |name: &str| {
        std::env::var(name)
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false)
    };
    let healthy = config::REQUIRED_VARS.iter().all(|name| present(name));

    if json {
        let vars: serde_json::Map<String, serde_json::Value> = config::REQUIRED_VARS
            .iter()
            .map(|name| (name.to_string(), serde_json::Value::Bool(present(name))))
            .collect();
        let check = serde_json::json!({
            "vars": vars,
            "healthy": healthy,
        });
        println!("{}", serde_json::to_string_pretty(&check).unwrap_or_default());
    } else {
        println!();
        println!(
            "  {} Configuration check",
            console::style("🔍").bold()
        );
        println!();
        let check_mark = |ok: bool| {
            if ok {
                format!("{}", console::style("✓").green())
            } else {
                format!("{}", console::style("✗").red())
            }
        };
        for name in config::REQUIRED_VARS {
            println!("  {} {} set", check_mark(present(name)), name);
        }
        println!();
    }
}
