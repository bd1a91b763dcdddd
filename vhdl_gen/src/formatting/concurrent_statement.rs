use crate::ast::{
    BlockStatement, ComponentInstantiation, ConcurrentSignalAssignment, ConcurrentStatement,
    GenerateStatement, GenerationScheme, ProcessStatement,
};
use crate::formatting::{indented, VHDLFormatter};
use itertools::Itertools;

impl VHDLFormatter {
    pub fn format_concurrent_statements(
        &self,
        statements: &[ConcurrentStatement],
        buffer: &mut String,
    ) {
        self.join_on_newline(statements, Self::format_concurrent_statement, buffer);
    }

    pub fn format_concurrent_statement(&self, statement: &ConcurrentStatement, buffer: &mut String) {
        match statement {
            ConcurrentStatement::Block(block) => self.format_block_statement(block, buffer),
            ConcurrentStatement::Assignment(assignment) => {
                self.format_assignment_statement(assignment, buffer)
            }
            ConcurrentStatement::Instance(instance) => {
                self.format_instantiation_statement(instance, buffer)
            }
            ConcurrentStatement::Process(process) => self.format_process_statement(process, buffer),
            ConcurrentStatement::Generate(generate) => {
                self.format_generate_statement(generate, buffer)
            }
        }
    }

    pub fn format_block_statement(&self, block: &BlockStatement, buffer: &mut String) {
        buffer.push_str(&format!("{} : block", block.label));
        indented!(self, {
            if !block.ports.is_empty() {
                self.newline(buffer);
                self.format_port_clause(&block.ports, buffer);
                self.newline(buffer);
                self.format_port_map_aspect(&block.port_map, buffer);
            }
            self.format_declarations(&block.decl, buffer);
        });
        self.newline(buffer);
        buffer.push_str("begin");
        indented!(self, {
            self.format_concurrent_statements(&block.statements, buffer);
        });
        self.newline(buffer);
        buffer.push_str("end block;");
    }

    pub fn format_process_statement(&self, process: &ProcessStatement, buffer: &mut String) {
        buffer.push_str(&format!("{} : process", process.label));
        if !process.sensitivity_list.is_empty() {
            buffer.push_str(&format!(
                " ({})",
                process.sensitivity_list.iter().format(", ")
            ));
        }
        indented!(self, {
            self.format_subprogram_declarative_items(&process.decl, buffer);
        });
        self.newline(buffer);
        buffer.push_str("begin");
        indented!(self, {
            self.format_sequential_statements(&process.statements, buffer);
        });
        self.newline(buffer);
        buffer.push_str("end process;");
    }

    /// Formats `target <= w0 when c0 else w1;`
    ///
    /// When the statement does not fit on one line every `else` starts a
    /// new line.
    pub fn format_assignment_statement(
        &self,
        assignment: &ConcurrentSignalAssignment,
        buffer: &mut String,
    ) {
        let waveforms = &assignment.waveforms;
        let mut parts: Vec<String> = waveforms
            .conditionals
            .iter()
            .map(|conditional| format!("{} when {}", conditional.waveform, conditional.condition))
            .collect();
        parts.push(match &waveforms.when {
            Some(condition) => format!("{} when {condition}", waveforms.waveform),
            None => waveforms.waveform.to_string(),
        });

        let target = format!("{} <= ", assignment.target);
        let inline = format!("{target}{};", parts.iter().join(" else "));
        if parts.len() == 1 || self.fits(&inline, buffer) {
            buffer.push_str(&inline);
            return;
        }

        buffer.push_str(&target);
        buffer.push_str(&parts[0]);
        indented!(self, {
            for part in &parts[1..] {
                self.newline(buffer);
                buffer.push_str(&format!("else {part}"));
            }
        });
        buffer.push(';');
    }

    pub fn format_instantiation_statement(
        &self,
        instance: &ComponentInstantiation,
        buffer: &mut String,
    ) {
        let header = format!("{} : {}", instance.label, instance.unit);
        let inline = format!(
            "{header} port map ({});",
            instance.port_map.elements.iter().format(", ")
        );
        if self.fits(&inline, buffer) {
            buffer.push_str(&inline);
            return;
        }
        buffer.push_str(&header);
        indented!(self, {
            self.newline(buffer);
            self.format_port_map_aspect(&instance.port_map, buffer);
        });
    }

    pub fn format_generate_statement(&self, generate: &GenerateStatement, buffer: &mut String) {
        match &generate.scheme {
            GenerationScheme::For(index, range) => buffer.push_str(&format!(
                "{} : for {index} in {range} generate",
                generate.label
            )),
            GenerationScheme::If(condition) => {
                buffer.push_str(&format!("{} : if {condition} generate", generate.label))
            }
        }
        if !generate.decl.is_empty() {
            indented!(self, { self.format_declarations(&generate.decl, buffer) });
            self.newline(buffer);
            buffer.push_str("begin");
        }
        indented!(self, {
            self.format_concurrent_statements(&generate.statements, buffer);
        });
        self.newline(buffer);
        buffer.push_str("end generate;");
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::config::Config;
    use crate::formatting::test_utils::{check_formatted, check_formatted_with};
    use crate::test_util::*;

    fn check_statement(statement: &ConcurrentStatement, expected: &str) {
        check_formatted(statement, expected, |formatter, statement, buffer| {
            formatter.format_concurrent_statement(statement, buffer)
        })
    }

    fn check_statement_with(statement: &ConcurrentStatement, config: &Config, expected: &str) {
        check_formatted_with(statement, expected, config, |formatter, statement, buffer| {
            formatter.format_concurrent_statement(statement, buffer)
        })
    }

    fn conditional_assignment() -> ConcurrentStatement {
        ConcurrentStatement::Assignment(ConcurrentSignalAssignment {
            target: name("q"),
            waveforms: ConditionalWaveforms {
                conditionals: vec![
                    WhenElse {
                        waveform: Waveform::single(expr("a")),
                        condition: Expression::binary(
                            BinaryOperator::EQ,
                            expr("sel"),
                            Expression::character('0'),
                        ),
                    },
                    WhenElse {
                        waveform: Waveform::single(expr("b")),
                        condition: Expression::binary(
                            BinaryOperator::EQ,
                            expr("sel"),
                            Expression::character('1'),
                        ),
                    },
                ],
                waveform: Waveform::Unaffected,
                when: None,
            },
        })
    }

    #[test]
    fn unconditional_assignment() {
        check_statement(
            &ConcurrentStatement::Assignment(ConcurrentSignalAssignment {
                target: name("q"),
                waveforms: ConditionalWaveforms::unconditional(Waveform::single(expr("d"))),
            }),
            "q <= d;",
        );
    }

    #[test]
    fn conditional_assignment_on_one_line() {
        check_statement(
            &conditional_assignment(),
            "q <= a when sel = '0' else b when sel = '1' else unaffected;",
        );
    }

    #[test]
    fn conditional_assignment_breaks_before_else() {
        check_statement_with(
            &conditional_assignment(),
            &Config::new(40, 4),
            "\
q <= a when sel = '0'
    else b when sel = '1'
    else unaffected;",
        );
    }

    #[test]
    fn conditional_assignment_with_final_condition() {
        check_statement(
            &ConcurrentStatement::Assignment(ConcurrentSignalAssignment {
                target: name("q"),
                waveforms: ConditionalWaveforms {
                    conditionals: vec![],
                    waveform: Waveform::single(expr("d")),
                    when: Some(expr("en")),
                },
            }),
            "q <= d when en;",
        );
    }

    fn instance() -> ConcurrentStatement {
        ConcurrentStatement::Instance(ComponentInstantiation {
            label: ident("u0"),
            unit: InstantiatedUnit::Entity(Name::selected(name("work"), ident("adder")), None),
            port_map: PortMapAspect::new(vec![
                AssociationElement::named(ident("a"), name("x")),
                AssociationElement::named(ident("b"), name("y")),
                AssociationElement::named(ident("sum"), name("s")),
            ]),
        })
    }

    #[test]
    fn instance_on_one_line() {
        check_statement(
            &instance(),
            "u0 : entity work.adder port map (a => x, b => y, sum => s);",
        );
    }

    #[test]
    fn long_instance() {
        check_statement_with(
            &instance(),
            &Config::new(48, 4),
            "\
u0 : entity work.adder
    port map (a => x, b => y, sum => s);",
        );
        check_statement_with(
            &instance(),
            &Config::new(30, 2),
            "\
u0 : entity work.adder
  port map (
    a => x,
    b => y,
    sum => s
  );",
        );
    }

    #[test]
    fn process_statement() {
        check_statement(
            &ConcurrentStatement::Process(ProcessStatement {
                label: ident("reg"),
                sensitivity_list: vec![ident("clk")],
                decl: vec![SubprogramDeclarativeItem::Variable(VariableDeclaration {
                    ident: ident("v"),
                    subtype_indication: ident("bit").into(),
                    expression: None,
                })],
                statements: vec![SequentialStatement::If(IfStatement {
                    condition: Expression::call(
                        name("rising_edge"),
                        vec![AssociationElement::positional(name("clk"))],
                    ),
                    statements: vec![SequentialStatement::SignalAssignment(SignalAssignment {
                        target: name("q"),
                        waveform: Waveform::single(expr("d")),
                    })],
                    elsifs: vec![],
                    else_statements: None,
                })],
            }),
            "\
reg : process (clk)
    variable v : bit;
begin
    if rising_edge(clk) then
        q <= d;
    end if;
end process;",
        );
    }

    #[test]
    fn process_without_sensitivity_list() {
        check_statement(
            &ConcurrentStatement::Process(ProcessStatement {
                label: ident("stim"),
                sensitivity_list: vec![],
                decl: vec![],
                statements: vec![SequentialStatement::WaitFor(expr("period"))],
            }),
            "\
stim : process
begin
    wait for period;
end process;",
        );
    }

    #[test]
    fn block_statement() {
        check_statement(
            &ConcurrentStatement::Block(BlockStatement {
                label: ident("blk"),
                ports: vec![InterfaceSignalDeclaration {
                    ident: ident("i"),
                    mode: Mode::In,
                    type_mark: ident("bit"),
                }],
                port_map: PortMapAspect::new(vec![AssociationElement::named(
                    ident("i"),
                    name("x"),
                )]),
                decl: vec![],
                statements: vec![],
            }),
            "\
blk : block
    port (
        i : in bit
    );
    port map (i => x);
begin
end block;",
        );
    }

    #[test]
    fn generate_statements() {
        let body = vec![ConcurrentStatement::Assignment(ConcurrentSignalAssignment {
            target: Name::indexed(name("q"), vec![expr("i")]),
            waveforms: ConditionalWaveforms::unconditional(Waveform::single(Expression::name(
                Name::indexed(name("d"), vec![expr("i")]),
            ))),
        })];
        check_statement(
            &ConcurrentStatement::Generate(GenerateStatement {
                label: ident("gen"),
                scheme: GenerationScheme::For(
                    ident("i"),
                    Range::to(Expression::integer(0), Expression::integer(3)),
                ),
                decl: vec![],
                statements: body,
            }),
            "\
gen : for i in 0 to 3 generate
    q(i) <= d(i);
end generate;",
        );
        check_statement(
            &ConcurrentStatement::Generate(GenerateStatement {
                label: ident("opt"),
                scheme: GenerationScheme::If(expr("enabled")),
                decl: vec![BlockDeclarativeItem::Signal(SignalDeclaration {
                    ident: ident("s"),
                    subtype_indication: ident("bit").into(),
                    expression: None,
                })],
                statements: vec![],
            }),
            "\
opt : if enabled generate
    signal s : bit;
begin
end generate;",
        );
    }
}
