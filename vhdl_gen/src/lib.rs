// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

//! Construction and rendering of VHDL-93 designs.
//!
//! Designs are built bottom-up from validated [`Identifier`]s into an
//! [`ast::DesignFile`], rendered with [`format_design_file`] and written
//! with [`write_design_file`].

#![allow(clippy::upper_case_acronyms)]

pub mod ast;
mod config;
mod error;
mod formatting;
pub mod ident;
pub mod writer;

#[cfg(test)]
mod test_util;

pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::formatting::{format_design_file, format_design_file_with, VHDLFormatter};
pub use crate::ident::Identifier;
pub use crate::writer::{write_design_file, write_design_file_with};
