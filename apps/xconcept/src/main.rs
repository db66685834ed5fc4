//! # XCONCEPT - Physical Assessment Wizard
//!
//! The main binary for the XCONCEPT assessment flow.
//!
//! This application provides:
//! - Interactive ten-step assessment on the terminal
//! - Delivery of the summary through WhatsApp or e-mail links
//! - Offline preview of a summary from a JSON answers file
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    apps/xconcept (THE BINARY)                   │
//! │                                                                 │
//! │  ┌─────────────┐    ┌─────────────┐    ┌──────────────────┐    │
//! │  │   CLI       │    │   Wizard    │    │   URI Opener     │    │
//! │  │  (clap)     │    │ (terminal)  │    │ (xdg-open/open)  │    │
//! │  └──────┬──────┘    └──────┬──────┘    └────────┬─────────┘    │
//! │         │                  │                    │              │
//! │         └──────────────────┼────────────────────┘              │
//! │                            ▼                                   │
//! │                   ┌─────────────────┐                          │
//! │                   │  xconcept-core  │                          │
//! │                   │  (THE LOGIC)    │                          │
//! │                   └─────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Interactive assessment
//! xconcept run
//!
//! # Print the delivery links instead of opening them
//! xconcept run --dry-run --start 2026-03-02
//!
//! # Render a summary from saved answers
//! xconcept preview -i answers.json --json-mode
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use xconcept::cli;

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Initialize tracing. XCONCEPT_LOG_FORMAT=json enables machine-parseable output.
    // Logs go to stderr; stdout belongs to the wizard.
    let log_format = std::env::var("XCONCEPT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "xconcept=debug"
    } else {
        "xconcept=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Display startup banner
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the XCONCEPT startup banner.
fn print_banner() {
    println!(
        r#"
  ██╗  ██╗ ██████╗ ██████╗ ███╗   ██╗ ██████╗███████╗██████╗ ████████╗
  ╚██╗██╔╝██╔════╝██╔═══██╗████╗  ██║██╔════╝██╔════╝██╔══██╗╚══██╔══╝
   ╚███╔╝ ██║     ██║   ██║██╔██╗ ██║██║     █████╗  ██████╔╝   ██║
   ██╔██╗ ██║     ██║   ██║██║╚██╗██║██║     ██╔══╝  ██╔═══╝    ██║
  ██╔╝ ██╗╚██████╗╚██████╔╝██║ ╚████║╚██████╗███████╗██║        ██║
  ╚═╝  ╚═╝ ╚═════╝ ╚═════╝ ╚═╝  ╚═══╝ ╚═════╝╚══════╝╚═╝        ╚═╝

  Avaliação Física v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
