// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

//! Writing generated designs to disk

use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::path::Path;

use crate::ast::DesignFile;
use crate::config::Config;
use crate::formatting::format_design_file_with;

/// The first line of every written file.
pub const HEADER: &str = "-- Automatically generated by vhdl_gen. Do not edit.";

/// Writes `file` to `path` with the default configuration.
///
/// The file is created or truncated.
pub fn write_design_file(file: &DesignFile, path: impl AsRef<Path>) -> io::Result<()> {
    write_design_file_with(file, path, &Config::default())
}

pub fn write_design_file_with(
    file: &DesignFile,
    path: impl AsRef<Path>,
    config: &Config,
) -> io::Result<()> {
    let path = path.as_ref();
    log::debug!("Writing {} library unit(s) to {}", file.units.len(), path.display());
    let contents = format_design_file_with(file, config);
    let mut writer = io::BufWriter::new(File::create(path)?);
    write_contents(&mut writer, &contents)?;
    writer.flush()?;
    log::trace!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

fn write_contents(writer: &mut impl Write, contents: &str) -> io::Result<()> {
    writeln!(writer, "{HEADER}")?;
    if !contents.is_empty() {
        writeln!(writer, "{contents}")?;
    }
    Ok(())
}
