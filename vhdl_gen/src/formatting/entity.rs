use crate::ast::EntityDeclaration;
use crate::formatting::{indented, VHDLFormatter};

impl VHDLFormatter {
    pub fn format_entity(&self, entity: &EntityDeclaration, buffer: &mut String) {
        // entity <ident> is
        buffer.push_str(&format!("entity {} is", entity.ident));
        if !entity.ports.is_empty() {
            indented!(self, {
                self.newline(buffer);
                self.format_port_clause(&entity.ports, buffer);
            });
        }
        self.newline(buffer);
        buffer.push_str("end entity;");
    }
}
