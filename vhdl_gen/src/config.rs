// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

//! Configuration of the generated text

use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::path::Path;

use toml::{Table, Value};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    line_width: usize,
    indent_size: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            line_width: 80,
            indent_size: 4,
        }
    }
}

fn read_positive(config: &Table, key: &str, default: usize) -> Result<usize, String> {
    match config.get(key) {
        Some(Value::Integer(value)) if *value > 0 => {
            usize::try_from(*value).map_err(|_| format!("{key} is too large"))
        }
        Some(Value::Integer(_)) => Err(format!("{key} must be positive")),
        Some(_) => Err(format!("{key} must be an integer")),
        None => Ok(default),
    }
}

impl Config {
    pub fn new(line_width: usize, indent_size: usize) -> Config {
        Config {
            line_width,
            indent_size,
        }
    }

    pub fn from_str(string: &str) -> Result<Config, String> {
        let config = string.parse::<Table>().map_err(|err| err.to_string())?;

        if let Some(key) = config
            .keys()
            .find(|key| !matches!(key.as_str(), "line_width" | "indent_size"))
        {
            return Err(format!("Unknown key '{key}'"));
        }

        let default = Config::default();
        Ok(Config {
            line_width: read_positive(&config, "line_width", default.line_width)?,
            indent_size: read_positive(&config, "indent_size", default.indent_size)?,
        })
    }

    pub fn read_file_path(file_name: &Path) -> io::Result<Config> {
        let mut file = File::open(file_name)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config = Config::from_str(&contents).map_err(io::Error::other)?;
        log::info!("Loaded configuration from {}", file_name.display());
        Ok(config)
    }

    /// The column limit used to decide whether a list fits on one line
    pub fn line_width(&self) -> usize {
        self.line_width
    }

    /// The number of spaces per indentation level
    pub fn indent_size(&self) -> usize {
        self.indent_size
    }
}
