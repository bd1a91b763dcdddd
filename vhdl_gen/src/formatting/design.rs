use crate::ast::{ContextItem, DesignFile, LibraryUnit, PackageBody, PackageDeclaration};
use crate::formatting::{indented, VHDLFormatter};

impl VHDLFormatter {
    /// Formats every library unit preceded by the context clause.
    ///
    /// Units are separated by an empty line. A file without units renders
    /// as its context clause alone.
    pub fn format_design_file(&self, file: &DesignFile, buffer: &mut String) {
        if file.units.is_empty() {
            self.format_context_clause(&file.context, buffer);
            return;
        }
        for (i, unit) in file.units.iter().enumerate() {
            if i > 0 {
                buffer.push('\n');
                self.newline(buffer);
            }
            if !file.context.is_empty() {
                self.format_context_clause(&file.context, buffer);
                self.newline(buffer);
            }
            self.format_library_unit(unit, buffer);
        }
    }

    pub fn format_context_clause(&self, context: &[ContextItem], buffer: &mut String) {
        for (i, item) in context.iter().enumerate() {
            if i > 0 {
                self.newline(buffer);
            }
            buffer.push_str(&item.to_string());
        }
    }

    pub fn format_library_unit(&self, unit: &LibraryUnit, buffer: &mut String) {
        match unit {
            LibraryUnit::Entity(entity) => self.format_entity(entity, buffer),
            LibraryUnit::Architecture(architecture) => {
                self.format_architecture(architecture, buffer)
            }
            LibraryUnit::Package(package) => self.format_package(package, buffer),
            LibraryUnit::PackageBody(body) => self.format_package_body(body, buffer),
        }
    }

    pub fn format_package(&self, package: &PackageDeclaration, buffer: &mut String) {
        buffer.push_str(&format!("package {} is", package.ident));
        indented!(self, {
            self.join_on_newline(
                &package.decl,
                Self::format_package_declarative_item,
                buffer,
            );
        });
        self.newline(buffer);
        buffer.push_str("end package;");
    }

    pub fn format_package_body(&self, body: &PackageBody, buffer: &mut String) {
        buffer.push_str(&format!("package body {} is", body.ident));
        indented!(self, {
            self.join_on_newline(
                &body.decl,
                Self::format_package_body_declarative_item,
                buffer,
            );
        });
        self.newline(buffer);
        buffer.push_str("end package body;");
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::formatting::test_utils::check_formatted;
    use crate::test_util::*;

    fn check_design_file(file: &DesignFile, expected: &str) {
        check_formatted(file, expected, |formatter, file, buffer| {
            formatter.format_design_file(file, buffer)
        });
    }

    fn context() -> Vec<ContextItem> {
        vec![
            ContextItem::Library(ident("ieee")),
            ContextItem::Use(SelectedName::new(
                Name::selected(name("ieee"), ident("std_logic_1164")),
                Suffix::All,
            )),
        ]
    }

    fn entity(text: &str) -> LibraryUnit {
        LibraryUnit::Entity(EntityDeclaration {
            ident: ident(text),
            ports: vec![],
        })
    }

    #[test]
    fn empty_design_file() {
        check_design_file(&DesignFile::default(), "");
    }

    #[test]
    fn context_without_units() {
        check_design_file(
            &DesignFile {
                context: context(),
                units: vec![],
            },
            "\
library ieee;
use ieee.std_logic_1164.all;",
        );
    }

    #[test]
    fn context_repeated_for_each_unit() {
        check_design_file(
            &DesignFile {
                context: context(),
                units: vec![entity("a"), entity("b")],
            },
            "\
library ieee;
use ieee.std_logic_1164.all;
entity a is
end entity;

library ieee;
use ieee.std_logic_1164.all;
entity b is
end entity;",
        );
    }

    #[test]
    fn units_without_context() {
        check_design_file(
            &DesignFile {
                context: vec![],
                units: vec![entity("a"), entity("b")],
            },
            "\
entity a is
end entity;

entity b is
end entity;",
        );
    }

    #[test]
    fn package() {
        let package = PackageDeclaration {
            ident: ident("types"),
            decl: vec![
                PackageDeclarativeItem::Subtype(SubtypeDeclaration {
                    ident: ident("byte"),
                    subtype_indication: SubtypeIndication::indexed(
                        ident("std_logic_vector"),
                        vec![Range::downto(Expression::integer(7), Expression::integer(0))],
                    ),
                }),
                PackageDeclarativeItem::Constant(ConstantDeclaration {
                    ident: ident("width"),
                    subtype_indication: ident("natural").into(),
                    expression: None,
                }),
            ],
        };
        check_formatted(
            &package,
            "\
package types is
    subtype byte is std_logic_vector(7 downto 0);
    constant width : natural;
end package;",
            |formatter, package, buffer| formatter.format_package(package, buffer),
        );
    }

    #[test]
    fn empty_package_body() {
        let body = PackageBody {
            ident: ident("types"),
            decl: vec![],
        };
        check_formatted(
            &body,
            "\
package body types is
end package body;",
            |formatter, body, buffer| formatter.format_package_body(body, buffer),
        );
    }
}
