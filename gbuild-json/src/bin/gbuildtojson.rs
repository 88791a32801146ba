// © 2025 <_@habnab.it>
//
// SPDX-License-Identifier: EUPL-1.2

use std::{io::Write, process::ExitCode};

use anyhow::Result;
use gbuild_json::InvalidArgumentError;

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
        .format_timestamp(None)
        .init();

    let rendered = match gbuild_json::run(std::env::args_os().skip(1)) {
        Ok(rendered) => rendered,
        Err(e) => match e.downcast_ref::<InvalidArgumentError>() {
            Some(invalid) => {
                eprintln!("{invalid}");
                return Ok(ExitCode::from(invalid.exit_code()));
            }
            None => return Err(e),
        },
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}
