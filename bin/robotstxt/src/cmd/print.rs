//! Print command - writes robots.txt to stdout

use std::{
    io::{self, Write},
    path::Path,
};

use color_eyre::eyre::{Result, WrapErr};

use super::{Overrides, render};

/// Run the print command.
pub fn run(config: Option<&Path>, overrides: &Overrides) -> Result<()> {
    let text = render(config, overrides)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .wrap_err("Failed to write to stdout")?;

    Ok(())
}
