use crate::ast::{SubprogramBody, SubprogramDeclarativeItem, SubprogramSpecification};
use crate::formatting::{indented, VHDLFormatter};

impl VHDLFormatter {
    pub fn format_subprogram_declarative_items(
        &self,
        items: &[SubprogramDeclarativeItem],
        buffer: &mut String,
    ) {
        self.join_on_newline(items, Self::format_subprogram_declarative_item, buffer);
    }

    pub fn format_subprogram_declarative_item(
        &self,
        item: &SubprogramDeclarativeItem,
        buffer: &mut String,
    ) {
        match item {
            SubprogramDeclarativeItem::Variable(variable) => {
                self.format_variable_declaration(variable, buffer)
            }
            SubprogramDeclarativeItem::Constant(constant) => {
                self.format_constant_declaration(constant, buffer)
            }
            SubprogramDeclarativeItem::SubprogramBody(body) => {
                self.format_subprogram_body(body, buffer)
            }
        }
    }

    pub fn format_subprogram_body(&self, body: &SubprogramBody, buffer: &mut String) {
        buffer.push_str(&format!("{} is", body.specification));
        indented!(self, {
            self.format_subprogram_declarative_items(&body.decl, buffer);
        });
        self.newline(buffer);
        buffer.push_str("begin");
        indented!(self, {
            self.format_sequential_statements(&body.statements, buffer);
        });
        self.newline(buffer);
        match body.specification {
            SubprogramSpecification::Function(_) => buffer.push_str("end function;"),
            SubprogramSpecification::Procedure(_) => buffer.push_str("end procedure;"),
        }
    }
}
