// © 2025 <_@habnab.it>
//
// SPDX-License-Identifier: EUPL-1.2

//! `--name=filepath` option parsing.

use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

use log::trace;
use thiserror::Error;

const OPTS_INTRO: &[u8] = b"--";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidArgumentError {
    #[error("Only option args starting with -- allowed.")]
    MissingPrefix(OsString),
    #[error("Only option args assigning with = allowed.")]
    MissingSeparator(OsString),
    #[error("Only option names in valid unicode allowed.")]
    NameNotUnicode(OsString),
}

impl InvalidArgumentError {
    /// Process exit status reported for this argument error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingPrefix(_) | Self::NameNotUnicode(_) => 1,
            Self::MissingSeparator(_) => 2,
        }
    }
}

/// Option name to file path, in the order each name was first given.
///
/// Giving a name again replaces its path but keeps its position.
#[derive(Debug, Clone, Default)]
pub struct OptionSet(Vec<(String, PathBuf)>);

impl OptionSet {
    pub fn insert(&mut self, name: String, path: PathBuf) {
        match self.0.iter_mut().find(|(seen, _)| *seen == name) {
            Some((_, old)) => *old = path,
            None => self.0.push((name, path)),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.0.iter().map(|(name, path)| (name.as_str(), path.as_path()))
    }
}

/// Splits one `--name=filepath` argument. The `=` is searched for after the
/// prefix, so `--=x` names the empty option. Neither half has to be Unicode.
pub fn split_option(arg: &OsStr) -> Result<(&OsStr, &OsStr), InvalidArgumentError> {
    let bytes = arg.as_encoded_bytes();
    let Some(rest) = bytes.strip_prefix(OPTS_INTRO) else {
        return Err(InvalidArgumentError::MissingPrefix(arg.to_owned()));
    };
    let Some(eqpos) = rest.iter().position(|&b| b == b'=') else {
        return Err(InvalidArgumentError::MissingSeparator(arg.to_owned()));
    };
    // SAFETY: both halves come from a valid OsStr split right next to ASCII.
    Ok(unsafe {
        (
            OsStr::from_encoded_bytes_unchecked(&rest[..eqpos]),
            OsStr::from_encoded_bytes_unchecked(&rest[eqpos + 1..]),
        )
    })
}

/// Parses every argument, stopping at the first malformed one.
pub fn parse_args<I, A>(args: I) -> Result<OptionSet, InvalidArgumentError>
where
    I: IntoIterator<Item = A>,
    A: Into<OsString>,
{
    let mut options = OptionSet::default();
    for arg in args {
        let arg: OsString = arg.into();
        let (name, path) = split_option(&arg)?;
        // keys are uppercased for output, so only the name must be text
        let name = name
            .to_str()
            .ok_or_else(|| InvalidArgumentError::NameNotUnicode(arg.clone()))?;
        trace!("option {name:?} -> {path:?}");
        options.insert(name.to_owned(), PathBuf::from(path));
    }
    Ok(options)
}
