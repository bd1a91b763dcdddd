use crate::ast::{
    AssociationElement, CaseStatement, ForLoop, IfStatement, Name, ProcedureCall,
    SequentialStatement,
};
use crate::formatting::{indented, VHDLFormatter};
use itertools::Itertools;

impl VHDLFormatter {
    pub fn format_sequential_statements(
        &self,
        statements: &[SequentialStatement],
        buffer: &mut String,
    ) {
        self.join_on_newline(statements, Self::format_sequential_statement, buffer);
    }

    pub fn format_sequential_statement(&self, statement: &SequentialStatement, buffer: &mut String) {
        match statement {
            SequentialStatement::If(if_statement) => self.format_if_statement(if_statement, buffer),
            SequentialStatement::Case(case) => self.format_case_statement(case, buffer),
            SequentialStatement::Return(expression) => {
                buffer.push_str("return");
                if let Some(expression) = expression {
                    buffer.push_str(&format!(" {expression}"));
                }
                buffer.push(';');
            }
            SequentialStatement::For(for_loop) => self.format_for_loop(for_loop, buffer),
            SequentialStatement::VariableAssignment(assignment) => {
                buffer.push_str(&format!("{} := {};", assignment.target, assignment.value))
            }
            SequentialStatement::WaitFor(expression) => {
                buffer.push_str(&format!("wait for {expression};"))
            }
            SequentialStatement::SignalAssignment(assignment) => {
                buffer.push_str(&format!("{} <= {};", assignment.target, assignment.waveform))
            }
            SequentialStatement::ProcedureCall(call) => self.format_procedure_call(call, buffer),
            SequentialStatement::Null => buffer.push_str("null;"),
        }
    }

    /// `name;` or `name(args);`
    pub fn format_call(&self, name: &Name, args: &[AssociationElement], buffer: &mut String) {
        if args.is_empty() {
            buffer.push_str(&format!("{name};"));
        } else {
            self.format_list(&format!("{name}("), args, ");", buffer);
        }
    }

    pub fn format_procedure_call(&self, call: &ProcedureCall, buffer: &mut String) {
        self.format_call(&call.name, &call.args, buffer);
    }

    pub fn format_if_statement(&self, statement: &IfStatement, buffer: &mut String) {
        buffer.push_str(&format!("if {} then", statement.condition));
        indented!(self, {
            self.format_sequential_statements(&statement.statements, buffer);
        });
        for elsif in &statement.elsifs {
            self.newline(buffer);
            buffer.push_str(&format!("elsif {} then", elsif.condition));
            indented!(self, {
                self.format_sequential_statements(&elsif.statements, buffer);
            });
        }
        if let Some(else_statements) = &statement.else_statements {
            self.newline(buffer);
            buffer.push_str("else");
            indented!(self, {
                self.format_sequential_statements(else_statements, buffer);
            });
        }
        self.newline(buffer);
        buffer.push_str("end if;");
    }

    pub fn format_case_statement(&self, statement: &CaseStatement, buffer: &mut String) {
        buffer.push_str(&format!("case {} is", statement.expression));
        indented!(self, {
            for alternative in &statement.alternatives {
                self.newline(buffer);
                buffer.push_str(&format!(
                    "when {} =>",
                    alternative.choices.iter().format(" | ")
                ));
                indented!(self, {
                    self.format_sequential_statements(&alternative.statements, buffer);
                });
            }
        });
        self.newline(buffer);
        buffer.push_str("end case;");
    }

    pub fn format_for_loop(&self, for_loop: &ForLoop, buffer: &mut String) {
        buffer.push_str(&format!("for {} in {} loop", for_loop.index, for_loop.range));
        indented!(self, {
            self.format_sequential_statements(&for_loop.statements, buffer);
        });
        self.newline(buffer);
        buffer.push_str("end loop;");
    }
}
