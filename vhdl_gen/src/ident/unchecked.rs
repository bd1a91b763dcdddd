// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

//! Unvalidated identifier construction.
//!
//! Nothing here checks the VHDL identifier grammar. These functions exist for
//! name generation code that already knows its output is valid, such as
//! appending a fixed, known-good suffix to a validated identifier. Feeding
//! them arbitrary text produces identifiers that render to invalid VHDL.

use super::Identifier;

/// Wrap `text` as a basic identifier without validation.
pub fn basic(text: impl Into<String>) -> Identifier {
    Identifier::Basic(text.into())
}

/// Wrap `text` as an extended identifier without validation.
///
/// `text` is the undelimited content; rendering still escapes it.
pub fn extended(text: impl Into<String>) -> Identifier {
    Identifier::Extended(text.into())
}

/// Append `suffix` to the stored text of `ident`, keeping its variant.
///
/// The result is not validated again.
pub fn append_suffix(ident: &Identifier, suffix: &str) -> Identifier {
    match ident {
        Identifier::Basic(text) => Identifier::Basic(format!("{text}{suffix}")),
        Identifier::Extended(text) => Identifier::Extended(format!("{text}{suffix}")),
    }
}
