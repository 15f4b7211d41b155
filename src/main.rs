use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use profile_verify::{cli, client, config, error, verify};
use cli::{Cli, Commands};
use client::HttpVerificationClient;
use config::Config;
use std::io::{IsTerminal, Write};
use verify::VerifyOptions;

fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(level)
        .parse_default_env()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Verify { images, json, endpoint, timeout } => {
            let config = Config::load().context("failed to load config")?;
            let endpoint = endpoint.unwrap_or_else(|| config.effective_endpoint());
            let timeout_seconds = match timeout {
                Some(0) => None,
                Some(seconds) => Some(seconds),
                None => config.timeout_seconds,
            };
            let client = HttpVerificationClient::new(&endpoint, timeout_seconds)?;
            log::info!("Endpoint: {}", client.endpoint());

            if !json {
                println!("🔍 profile-verify - Verify Profile Image\n");
            }

            let options = VerifyOptions {
                json,
                show_progress: std::io::stderr().is_terminal(),
            };
            let reports = verify::verify_all(&client, &images, options).await;

            let failed = reports.iter().filter(|r| r.outcome.is_err()).count();
            if failed > 0 {
                return Err(error::ProfileVerifyError::VerificationFailed {
                    failed,
                    total: reports.len(),
                }
                .into());
            }

            if !json {
                println!("\n✅ Done");
            }
        }

        Commands::Config { set_endpoint, set_timeout, reset, show } => {
            let mut config = Config::load_for_update(&Config::config_path()?, reset)
                .context("failed to load config")?;
            let changed = reset || set_endpoint.is_some() || set_timeout.is_some();

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
            }
            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds);
            }

            if changed {
                config.save()?;
                println!("✔ Settings saved: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("Settings:");
                println!("  Endpoint: {}", config.effective_endpoint());
                if config.effective_endpoint() != config.endpoint {
                    println!("    (from {}; file value: {})", config::ENDPOINT_ENV, config.endpoint);
                }
                match config.timeout_seconds {
                    Some(seconds) => println!("  Timeout: {}s", seconds),
                    None => println!("  Timeout: none"),
                }
            }
        }
    }

    Ok(())
}
