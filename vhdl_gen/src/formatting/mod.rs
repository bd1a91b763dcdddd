//! Layout of statements and design units
//!
//! Inline constructs are rendered through their `Display` implementation.
//! The formatter decides where lines break and how deep they are indented.

use crate::ast::DesignFile;
use crate::config::Config;
use std::cell::Cell;
use std::iter;

mod architecture;
mod concurrent_statement;
mod declaration;
mod design;
mod entity;
mod interface;
mod sequential_statement;
mod subprogram;

/// Runs `$body` one indentation level deeper.
macro_rules! indented {
    ($formatter:expr, $body:block) => {
        $formatter.increase_indentation();
        $body
        $formatter.decrease_indentation();
    };
}
pub(crate) use indented;

struct FormatterConfig {
    indent_char: char,
    indent_size: usize,
    line_width: usize,
}

pub struct VHDLFormatter {
    indentation: Cell<usize>,
    config: FormatterConfig,
}

/// Renders a design file with the default configuration.
pub fn format_design_file(file: &DesignFile) -> String {
    format_design_file_with(file, &Config::default())
}

pub fn format_design_file_with(file: &DesignFile, config: &Config) -> String {
    let formatter = VHDLFormatter::new(config);
    let mut result = String::new();
    formatter.format_design_file(file, &mut result);
    result
}

impl VHDLFormatter {
    pub fn new(config: &Config) -> VHDLFormatter {
        VHDLFormatter {
            indentation: Cell::new(0),
            config: FormatterConfig {
                indent_char: ' ',
                indent_size: config.indent_size(),
                line_width: config.line_width(),
            },
        }
    }
}

impl Default for VHDLFormatter {
    fn default() -> Self {
        VHDLFormatter::new(&Config::default())
    }
}

/// The number of characters written since the last line break
fn current_column(buffer: &str) -> usize {
    let line_start = buffer.rfind('\n').map_or(0, |idx| idx + 1);
    buffer[line_start..].chars().count()
}

impl VHDLFormatter {
    pub fn newline(&self, buffer: &mut String) {
        buffer.push('\n');
        buffer.extend(
            iter::repeat(self.config.indent_char)
                .take(self.config.indent_size * self.indentation.get()),
        );
    }

    pub fn increase_indentation(&self) {
        self.indentation.replace(self.indentation.get() + 1);
    }

    pub fn decrease_indentation(&self) {
        self.indentation.replace(self.indentation.get() - 1);
    }

    /// Whether `text` can be appended to the current line of `buffer`.
    pub fn fits(&self, text: &str, buffer: &str) -> bool {
        current_column(buffer) + text.chars().count() <= self.config.line_width
    }

    pub fn join_on_newline<T>(
        &self,
        items: &[T],
        joiner: impl Fn(&Self, &T, &mut String),
        buffer: &mut String,
    ) {
        for item in items {
            self.newline(buffer);
            joiner(self, item, buffer);
        }
    }

    /// Formats `open item, item, ... close`, keeping everything on the
    /// current line if it fits and otherwise placing one item per line.
    ///
    /// `close` is expected to start with the closing parenthesis.
    pub fn format_list<T: ToString>(
        &self,
        open: &str,
        items: &[T],
        close: &str,
        buffer: &mut String,
    ) {
        let items: Vec<String> = items.iter().map(ToString::to_string).collect();
        let inline = format!("{open}{}{close}", items.join(", "));
        if items.is_empty() || self.fits(&inline, buffer) {
            buffer.push_str(&inline);
            return;
        }
        buffer.push_str(open);
        indented!(self, {
            for (i, item) in items.iter().enumerate() {
                self.newline(buffer);
                buffer.push_str(item);
                if i < items.len() - 1 {
                    buffer.push(',');
                }
            }
        });
        self.newline(buffer);
        buffer.push_str(close);
    }
}
