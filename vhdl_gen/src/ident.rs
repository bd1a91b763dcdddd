// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

//! LRM 13.3 Identifiers
//!
//! Identifiers are validated when they are created and escaped when they are
//! rendered. The stored text of an extended identifier is the identifier
//! itself, without the delimiting backslashes and without doubled inner
//! backslashes.

mod reserved;
pub mod unchecked;

pub use self::reserved::{is_reserved_word, ReservedWord};

use crate::error::{Error, Result};
use std::fmt;

/// A VHDL identifier.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum Identifier {
    /// LRM 13.3.1 Basic identifiers
    Basic(String),
    /// LRM 13.3.2 Extended identifiers
    Extended(String),
}

impl Identifier {
    /// Create a basic identifier.
    ///
    /// The text must start with a letter, contain only letters, digits and
    /// underscores, not end with an underscore and not be a reserved word.
    /// Consecutive underscores are accepted even though the LRM forbids
    /// them. The casing of `text` is kept as is.
    pub fn basic(text: impl Into<String>) -> Result<Identifier> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::EmptyIdentifier);
        }
        if !is_basic_identifier_text(&text) || is_reserved_word(&text) {
            return Err(Error::InvalidBasicIdentifier(text));
        }
        Ok(Identifier::Basic(text))
    }

    /// Create an extended identifier from its undelimited text.
    ///
    /// Delimiters are added and inner backslashes are doubled only when the
    /// identifier is rendered.
    pub fn extended(text: impl Into<String>) -> Result<Identifier> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::EmptyIdentifier);
        }
        if !text.chars().all(is_extended_identifier_char) {
            return Err(Error::InvalidExtendedIdentifier(text));
        }
        Ok(Identifier::Extended(text))
    }

    /// The stored text, without any escaping.
    ///
    /// Use [`Identifier::render`] to embed an identifier in VHDL text.
    pub fn as_str(&self) -> &str {
        match self {
            Identifier::Basic(text) | Identifier::Extended(text) => text.as_str(),
        }
    }

    pub fn is_basic(&self) -> bool {
        matches!(self, Identifier::Basic(..))
    }

    pub fn is_extended(&self) -> bool {
        matches!(self, Identifier::Extended(..))
    }

    /// The identifier as it must appear in VHDL source.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Basic(text) => write!(f, "{text}"),
            Identifier::Extended(text) => write!(f, "\\{}\\", text.replace('\\', "\\\\")),
        }
    }
}

impl TryFrom<&str> for Identifier {
    type Error = Error;

    fn try_from(text: &str) -> Result<Identifier> {
        Identifier::basic(text)
    }
}

/// letter { [ underline ] letter_or_digit }, with repeated underlines allowed
fn is_basic_identifier_text(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    let mut last = ' ';
    for chr in chars {
        if !(chr.is_ascii_alphanumeric() || chr == '_') {
            return false;
        }
        last = chr;
    }
    last != '_'
}

/// LRM 13.1 graphic_character, restricted to ASCII
fn is_extended_identifier_char(chr: char) -> bool {
    matches!(chr, ' '..='~')
}
