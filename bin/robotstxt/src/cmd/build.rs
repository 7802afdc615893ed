//! Build command - writes robots.txt

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};

use super::{Overrides, render};

/// Run the build command.
///
/// Generates robots.txt from the configuration and writes it to `output`,
/// creating parent directories as needed.
pub async fn run(config: Option<&Path>, output: &Path, overrides: &Overrides) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config, ?output, ?overrides, "Starting build");

    let text = render(config, overrides)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
    }

    tokio::fs::write(output, &text)
        .await
        .wrap_err_with(|| format!("Failed to write {}", output.display()))?;

    let duration = start.elapsed();
    let lines = text.lines().count();

    println!();
    println!("  robots.txt generated successfully!");
    println!();
    println!("  Lines:      {lines}");
    println!("  Duration:   {:.2}ms", duration.as_secs_f64() * 1000.0);
    println!("  Output:     {}", output.display());
    println!();

    tracing::info!(lines, ?duration, "Build completed successfully");

    Ok(())
}
