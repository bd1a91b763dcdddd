use crate::ast::{InterfaceSignalDeclaration, PortMapAspect};
use crate::formatting::{indented, VHDLFormatter};

impl VHDLFormatter {
    /// Formats a port clause with one port per line.
    pub fn format_port_clause(&self, ports: &[InterfaceSignalDeclaration], buffer: &mut String) {
        buffer.push_str("port (");
        indented!(self, {
            for (i, port) in ports.iter().enumerate() {
                self.newline(buffer);
                buffer.push_str(&port.to_string());
                if i < ports.len() - 1 {
                    buffer.push(';');
                }
            }
        });
        self.newline(buffer);
        buffer.push_str(");");
    }

    pub fn format_port_map_aspect(&self, aspect: &PortMapAspect, buffer: &mut String) {
        self.format_list("port map (", &aspect.elements, ");", buffer);
    }
}
