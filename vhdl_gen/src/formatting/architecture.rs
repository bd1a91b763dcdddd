use crate::ast::ArchitectureBody;
use crate::formatting::{indented, VHDLFormatter};

impl VHDLFormatter {
    pub fn format_architecture(&self, arch: &ArchitectureBody, buffer: &mut String) {
        // architecture <ident> of <ident> is
        buffer.push_str(&format!(
            "architecture {} of {} is",
            arch.ident, arch.entity_name
        ));
        indented!(self, { self.format_declarations(&arch.decl, buffer) });
        self.newline(buffer);
        buffer.push_str("begin");
        indented!(self, {
            self.format_concurrent_statements(&arch.statements, buffer)
        });
        self.newline(buffer);
        buffer.push_str("end architecture;");
    }
}
