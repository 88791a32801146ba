// © 2025 <_@habnab.it>
//
// SPDX-License-Identifier: EUPL-1.2

//! Turns `--name=filepath` options into a one-line JSON object of the files'
//! contents, consuming the files as it goes.

pub mod artifact;
pub mod emit;
pub mod escape;
pub mod options;

use std::ffi::OsString;

use anyhow::{Context as _, Result};
use log::debug;

pub use artifact::FileAccessError;
pub use options::{InvalidArgumentError, OptionSet};

/// Parses `args`, consumes every named file and returns the rendered JSON.
///
/// Nothing is returned until every file has been read, so a failure leaves
/// no partial output. Files handled before the failing one are already gone.
pub fn run<I, A>(args: I) -> Result<String>
where
    I: IntoIterator<Item = A>,
    A: Into<OsString>,
{
    let options = options::parse_args(args)?;
    debug!("{} option(s)", options.len());
    let mut entries = Vec::with_capacity(options.len());
    for (name, path) in options.iter() {
        let contents = artifact::consume(path)
            .with_context(|| format!("while loading option --{name}"))?;
        entries.push((name, escape::escape_contents(&contents)));
    }
    Ok(emit::render(
        entries.iter().map(|(name, escaped)| (*name, escaped.as_str())),
    ))
}
