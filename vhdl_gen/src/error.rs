// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

use std::fmt;

/// Errors produced while constructing parts of a design.
///
/// Only identifier construction can fail in this crate. `Other` is left for
/// layers built on top of the model that want to report their own
/// contextual problems through the same type.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Error {
    EmptyIdentifier,
    InvalidBasicIdentifier(String),
    InvalidExtendedIdentifier(String),
    Other(String),
}

impl Error {
    pub fn other(message: impl Into<String>) -> Error {
        Error::Other(message.into())
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyIdentifier => write!(f, "Identifier must not be empty"),
            Error::InvalidBasicIdentifier(text) => {
                write!(f, "'{text}' is not a valid basic identifier")
            }
            Error::InvalidExtendedIdentifier(text) => {
                write!(f, "'{text}' is not a valid extended identifier")
            }
            Error::Other(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
