use std::io::{self, Read, Write};

use anyhow::Context;
use checkout_redirect::checkout::{CheckoutRequest, CheckoutService};
use checkout_redirect::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Reads a JSON checkout request on stdin and prints the redirect form as JSON
fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    // Initialize tracing; stdout is reserved for the form
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("checkout_redirect={}", config.app.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Integration mode: {}", config.checkout.mode);

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read checkout request from stdin")?;

    let request: CheckoutRequest =
        serde_json::from_str(&input).context("Invalid checkout request")?;

    let service = CheckoutService::new(config.checkout);
    let form = service.build_form(&request)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &form)?;
    writeln!(stdout)?;

    Ok(())
}
