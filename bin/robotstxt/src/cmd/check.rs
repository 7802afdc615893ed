//! Check command - validate configuration without writing anything

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use robotstxt_core::FileSource;
use robotstxt_generator::{RobotsGenerator, ValidatedOptions, resolve_options};

use super::options_for;

/// Run the check command.
///
/// Loads and validates the configuration, then prints a summary.
pub fn run(config: Option<&Path>) -> Result<()> {
    tracing::info!(?config, "Checking configuration");

    println!("Checking configuration...");

    let options = match resolve_options(&options_for(config), &FileSource) {
        Ok(options) => options,
        Err(e) => {
            println!("  ✗ Configuration could not be loaded: {e}");
            bail!("Validation failed: {e}");
        }
    };

    let generator = match RobotsGenerator::from_value(&options) {
        Ok(generator) => {
            println!("  ✓ Configuration valid");
            generator
        }
        Err(e) => {
            println!("  ✗ Configuration invalid: {e}");
            bail!("Validation failed: {e}");
        }
    };

    print_summary(generator.options());

    println!();
    println!("✓ All checks passed");

    Ok(())
}

fn print_summary(options: &ValidatedOptions) {
    println!();
    println!("Summary:");
    match &options.policies {
        Some(policies) => {
            let agents: usize = policies.iter().map(|p| p.user_agents.len()).sum();
            println!("  Policies:    {}", policies.len());
            println!("  User agents: {agents}");
        }
        None => println!("  Policies:    default (User-agent: *, Allow: /)"),
    }
    println!("  Sitemaps:    {}", options.sitemaps.len());
    match &options.host {
        Some(host) => println!("  Host:        {host}"),
        None => println!("  Host:        none"),
    }
}
