// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

use pretty_assertions::assert_eq;
use vhdl_gen::ast::*;
use vhdl_gen::{format_design_file, format_design_file_with, Config, Identifier};

fn ident(text: &str) -> Identifier {
    Identifier::basic(text).unwrap()
}

fn name(text: &str) -> Name {
    Name::Simple(ident(text))
}

fn expr(text: &str) -> Expression {
    Expression::from(ident(text))
}

fn port(text: &str, mode: Mode, type_mark: &str) -> InterfaceSignalDeclaration {
    InterfaceSignalDeclaration {
        ident: ident(text),
        mode,
        type_mark: ident(type_mark),
    }
}

fn context() -> Vec<ContextItem> {
    vec![
        ContextItem::Library(ident("ieee")),
        ContextItem::Use(SelectedName::new(
            Name::selected(name("ieee"), ident("std_logic_1164")),
            Suffix::All,
        )),
        ContextItem::Use(SelectedName::new(
            Name::selected(name("ieee"), ident("numeric_std")),
            Suffix::All,
        )),
    ]
}

fn counter_entity() -> LibraryUnit {
    LibraryUnit::Entity(EntityDeclaration {
        ident: ident("counter"),
        ports: vec![
            port("clk", Mode::In, "std_logic"),
            port("rst", Mode::In, "std_logic"),
            port("count", Mode::Out, "byte"),
        ],
    })
}

fn counter_architecture() -> LibraryUnit {
    let reset = SequentialStatement::SignalAssignment(SignalAssignment {
        target: name("value"),
        waveform: Waveform::single(Expression::others(Expression::character('0'))),
    });
    let increment = SequentialStatement::SignalAssignment(SignalAssignment {
        target: name("value"),
        waveform: Waveform::single(Expression::binary(
            BinaryOperator::Plus,
            expr("value"),
            Expression::integer(1),
        )),
    });
    let rising_edge = Expression::call(
        name("rising_edge"),
        vec![AssociationElement::positional(name("clk"))],
    );

    LibraryUnit::Architecture(ArchitectureBody {
        ident: ident("rtl"),
        entity_name: ident("counter"),
        decl: vec![BlockDeclarativeItem::Signal(SignalDeclaration {
            ident: ident("value"),
            subtype_indication: SubtypeIndication::indexed(
                ident("unsigned"),
                vec![Range::downto(Expression::integer(7), Expression::integer(0))],
            ),
            expression: None,
        })],
        statements: vec![
            ConcurrentStatement::Process(ProcessStatement {
                label: ident("reg"),
                sensitivity_list: vec![ident("clk")],
                decl: vec![],
                statements: vec![SequentialStatement::If(IfStatement {
                    condition: rising_edge,
                    statements: vec![SequentialStatement::If(IfStatement {
                        condition: Expression::binary(
                            BinaryOperator::EQ,
                            expr("rst"),
                            Expression::character('1'),
                        ),
                        statements: vec![reset],
                        elsifs: vec![],
                        else_statements: Some(vec![increment]),
                    })],
                    elsifs: vec![],
                    else_statements: None,
                })],
            }),
            ConcurrentStatement::Assignment(ConcurrentSignalAssignment {
                target: name("count"),
                waveforms: ConditionalWaveforms::unconditional(Waveform::single(
                    Expression::call(
                        name("std_logic_vector"),
                        vec![AssociationElement::positional(name("value"))],
                    ),
                )),
            }),
        ],
    })
}

fn types_package() -> LibraryUnit {
    LibraryUnit::Package(PackageDeclaration {
        ident: ident("counter_pkg"),
        decl: vec![
            PackageDeclarativeItem::Subtype(SubtypeDeclaration {
                ident: ident("byte"),
                subtype_indication: SubtypeIndication::indexed(
                    ident("std_logic_vector"),
                    vec![Range::downto(Expression::integer(7), Expression::integer(0))],
                ),
            }),
            PackageDeclarativeItem::Subprogram(SubprogramSpecification::Function(
                FunctionSpecification {
                    designator: ident("max"),
                    parameters: vec![
                        InterfaceVariableDeclaration {
                            ident: ident("a"),
                            type_mark: ident("integer"),
                        },
                        InterfaceVariableDeclaration {
                            ident: ident("b"),
                            type_mark: ident("integer"),
                        },
                    ],
                    return_type: ident("integer"),
                },
            )),
        ],
    })
}

fn types_package_body() -> LibraryUnit {
    LibraryUnit::PackageBody(PackageBody {
        ident: ident("counter_pkg"),
        decl: vec![PackageBodyDeclarativeItem::SubprogramBody(SubprogramBody {
            specification: SubprogramSpecification::Function(FunctionSpecification {
                designator: ident("max"),
                parameters: vec![
                    InterfaceVariableDeclaration {
                        ident: ident("a"),
                        type_mark: ident("integer"),
                    },
                    InterfaceVariableDeclaration {
                        ident: ident("b"),
                        type_mark: ident("integer"),
                    },
                ],
                return_type: ident("integer"),
            }),
            decl: vec![],
            statements: vec![
                SequentialStatement::If(IfStatement {
                    condition: Expression::binary(BinaryOperator::GT, expr("a"), expr("b")),
                    statements: vec![SequentialStatement::Return(Some(expr("a")))],
                    elsifs: vec![],
                    else_statements: None,
                }),
                SequentialStatement::Return(Some(expr("b"))),
            ],
        })],
    })
}

#[test]
fn counter_design() {
    let file = DesignFile {
        context: context(),
        units: vec![counter_entity(), counter_architecture()],
    };
    assert_eq!(
        format_design_file(&file),
        "\
library ieee;
use ieee.std_logic_1164.all;
use ieee.numeric_std.all;
entity counter is
    port (
        clk : in std_logic;
        rst : in std_logic;
        count : out byte
    );
end entity;

library ieee;
use ieee.std_logic_1164.all;
use ieee.numeric_std.all;
architecture rtl of counter is
    signal value : unsigned(7 downto 0);
begin
    reg : process (clk)
    begin
        if rising_edge(clk) then
            if rst = '1' then
                value <= (others => '0');
            else
                value <= value + 1;
            end if;
        end if;
    end process;
    count <= std_logic_vector(value);
end architecture;"
    );
}

#[test]
fn package_and_body() {
    let file = DesignFile {
        context: vec![],
        units: vec![types_package(), types_package_body()],
    };
    assert_eq!(
        format_design_file(&file),
        "\
package counter_pkg is
    subtype byte is std_logic_vector(7 downto 0);
    function max(a : integer; b : integer) return integer;
end package;

package body counter_pkg is
    function max(a : integer; b : integer) return integer is
    begin
        if a > b then
            return a;
        end if;
        return b;
    end function;
end package body;"
    );
}

#[test]
fn indent_size_from_config() {
    let file = DesignFile {
        context: vec![],
        units: vec![counter_entity()],
    };
    assert_eq!(
        format_design_file_with(&file, &Config::new(80, 2)),
        "\
entity counter is
  port (
    clk : in std_logic;
    rst : in std_logic;
    count : out byte
  );
end entity;"
    );
}

#[test]
fn design_file_without_units_is_accepted() {
    let file = DesignFile::default();
    assert!(file.units.is_empty());
    assert_eq!(format_design_file(&file), "");
}

#[test]
fn empty_case_choices_are_representable() {
    let statement = SequentialStatement::Case(CaseStatement {
        expression: expr("sel"),
        alternatives: vec![CaseAlternative {
            choices: vec![],
            statements: vec![SequentialStatement::Null],
        }],
    });
    let SequentialStatement::Case(case) = statement else {
        panic!("expected a case statement");
    };
    assert!(case.alternatives[0].choices.is_empty());
}

#[test]
fn empty_discrete_range_list_is_representable() {
    let subtype = SubtypeIndication::indexed(ident("bit_vector"), vec![]);
    assert_eq!(
        subtype.constraint,
        Some(Constraint::Index(IndexConstraint { ranges: vec![] }))
    );
    let generate = GenerateStatement {
        label: ident("gen"),
        scheme: GenerationScheme::For(
            ident("i"),
            Range::to(Expression::integer(0), Expression::integer(3)),
        ),
        decl: vec![BlockDeclarativeItem::Signal(SignalDeclaration {
            ident: ident("s"),
            subtype_indication: subtype,
            expression: None,
        })],
        statements: vec![],
    };
    assert_eq!(generate.decl.len(), 1);
}

#[test]
fn empty_port_map_is_representable() {
    let instance = ComponentInstantiation {
        label: ident("u0"),
        unit: InstantiatedUnit::Entity(Name::selected(name("work"), ident("leaf")), None),
        port_map: PortMapAspect::new(vec![]),
    };
    assert!(instance.port_map.elements.is_empty());
    let file = DesignFile {
        context: vec![],
        units: vec![LibraryUnit::Architecture(ArchitectureBody {
            ident: ident("rtl"),
            entity_name: ident("top"),
            decl: vec![],
            statements: vec![ConcurrentStatement::Instance(instance)],
        })],
    };
    assert_eq!(
        format_design_file(&file),
        "\
architecture rtl of top is
begin
    u0 : entity work.leaf port map ();
end architecture;"
    );
}

#[test]
fn ranges_accept_both_directions() {
    let downto = Range::downto(Expression::integer(3), Expression::integer(0));
    let generate = ConcurrentStatement::Generate(GenerateStatement {
        label: ident("gen"),
        scheme: GenerationScheme::For(ident("i"), downto.clone()),
        decl: vec![],
        statements: vec![ConcurrentStatement::Process(ProcessStatement {
            label: ident("p"),
            sensitivity_list: vec![],
            decl: vec![],
            statements: vec![SequentialStatement::For(ForLoop {
                index: ident("j"),
                range: downto,
                statements: vec![SequentialStatement::Null],
            })],
        })],
    });
    let file = DesignFile {
        context: vec![],
        units: vec![LibraryUnit::Architecture(ArchitectureBody {
            ident: ident("rtl"),
            entity_name: ident("top"),
            decl: vec![],
            statements: vec![generate],
        })],
    };
    assert_eq!(
        format_design_file(&file),
        "\
architecture rtl of top is
begin
    gen : for i in 3 downto 0 generate
        p : process
        begin
            for j in 3 downto 0 loop
                null;
            end loop;
        end process;
    end generate;
end architecture;"
    );
}
