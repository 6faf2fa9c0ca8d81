// Entrypoint for the photo upload CLI.
// - Loads the config, builds an API client and runs one upload.
// - Returns `anyhow::Result` so any failure is printed to stderr as
//   `Error: ...` and the process exits with status 1.

use anyhow::bail;
use clap::Parser;
use photoblog_upload::{cli::Cli, config, ui, upload_photo, ApiClient, BlogConfig};
use std::io::IsTerminal;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(photo_path) = cli.photo_path().map(|p| p.to_path_buf()) else {
        bail!("No file path specified.");
    };

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let mut blog_config = BlogConfig::load(&config_path)?;
    if let Some(secs) = cli.timeout {
        blog_config.timeout = Some(Duration::from_secs(secs));
    }

    if cli.interactive {
        ui::prompt_missing_metadata(&mut cli.title, &mut cli.description)?;
    }

    let api = ApiClient::new(blog_config)?;

    let spinner = if cli.interactive {
        Some(ui::spinner("Uploading...")?)
    } else {
        None
    };
    let result = upload_photo(&api, &photo_path, &cli.title, &cli.description);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let photo = result?;
    tracing::info!(id = photo.id, "photo published");
    Ok(())
}

/// Compact logs on stderr. `RUST_LOG` wins over `--verbose` when set.
fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .compact()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();
}
