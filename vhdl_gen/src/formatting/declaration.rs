use crate::ast::{
    ArrayTypeDefinition, BlockDeclarativeItem, ConstantDeclaration, Expression, ObjectClass,
    PackageBodyDeclarativeItem, PackageDeclarativeItem, SignalDeclaration, SubtypeDeclaration,
    SubtypeIndication, TypeDeclaration, TypeDefinition, VariableDeclaration,
};
use crate::formatting::{indented, VHDLFormatter};
use crate::ident::Identifier;
use itertools::Itertools;

impl VHDLFormatter {
    pub(crate) fn format_declarations(&self, items: &[BlockDeclarativeItem], buffer: &mut String) {
        self.join_on_newline(items, Self::format_block_declarative_item, buffer);
    }

    pub fn format_block_declarative_item(&self, item: &BlockDeclarativeItem, buffer: &mut String) {
        match item {
            BlockDeclarativeItem::Signal(signal) => self.format_signal_declaration(signal, buffer),
            BlockDeclarativeItem::Constant(constant) => {
                self.format_constant_declaration(constant, buffer)
            }
            BlockDeclarativeItem::Type(type_decl) => {
                self.format_type_declaration(type_decl, buffer)
            }
            BlockDeclarativeItem::Subtype(subtype) => {
                self.format_subtype_declaration(subtype, buffer)
            }
            BlockDeclarativeItem::SubprogramBody(body) => self.format_subprogram_body(body, buffer),
        }
    }

    pub fn format_package_declarative_item(
        &self,
        item: &PackageDeclarativeItem,
        buffer: &mut String,
    ) {
        match item {
            PackageDeclarativeItem::Type(type_decl) => {
                self.format_type_declaration(type_decl, buffer)
            }
            PackageDeclarativeItem::Subtype(subtype) => {
                self.format_subtype_declaration(subtype, buffer)
            }
            PackageDeclarativeItem::Constant(constant) => {
                self.format_constant_declaration(constant, buffer)
            }
            PackageDeclarativeItem::Subprogram(specification) => {
                buffer.push_str(&format!("{specification};"))
            }
        }
    }

    pub fn format_package_body_declarative_item(
        &self,
        item: &PackageBodyDeclarativeItem,
        buffer: &mut String,
    ) {
        match item {
            PackageBodyDeclarativeItem::Constant(constant) => {
                self.format_constant_declaration(constant, buffer)
            }
            PackageBodyDeclarativeItem::SubprogramBody(body) => {
                self.format_subprogram_body(body, buffer)
            }
        }
    }

    /// `class ident : subtype_indication [:= expression];`
    pub fn format_object_declaration(
        &self,
        class: ObjectClass,
        ident: &Identifier,
        subtype_indication: &SubtypeIndication,
        expression: Option<&Expression>,
        buffer: &mut String,
    ) {
        buffer.push_str(&format!("{class} {ident} : {subtype_indication}"));
        if let Some(expression) = expression {
            buffer.push_str(&format!(" := {expression}"));
        }
        buffer.push(';');
    }

    pub fn format_constant_declaration(&self, decl: &ConstantDeclaration, buffer: &mut String) {
        self.format_object_declaration(
            ObjectClass::Constant,
            &decl.ident,
            &decl.subtype_indication,
            decl.expression.as_ref(),
            buffer,
        );
    }

    pub fn format_signal_declaration(&self, decl: &SignalDeclaration, buffer: &mut String) {
        self.format_object_declaration(
            ObjectClass::Signal,
            &decl.ident,
            &decl.subtype_indication,
            decl.expression.as_ref(),
            buffer,
        );
    }

    pub fn format_variable_declaration(&self, decl: &VariableDeclaration, buffer: &mut String) {
        self.format_object_declaration(
            ObjectClass::Variable,
            &decl.ident,
            &decl.subtype_indication,
            decl.expression.as_ref(),
            buffer,
        );
    }

    pub fn format_subtype_declaration(&self, decl: &SubtypeDeclaration, buffer: &mut String) {
        buffer.push_str(&format!(
            "subtype {} is {};",
            decl.ident, decl.subtype_indication
        ));
    }

    pub fn format_type_declaration(&self, decl: &TypeDeclaration, buffer: &mut String) {
        let header = format!("type {} is ", decl.ident);
        match &decl.def {
            TypeDefinition::Enumeration(literals) => {
                self.format_list(&format!("{header}("), literals, ");", buffer);
            }
            TypeDefinition::Integer(range) => {
                buffer.push_str(&format!("{header}range {range};"));
            }
            TypeDefinition::Array(ArrayTypeDefinition::Unconstrained {
                index_types,
                element,
            }) => {
                buffer.push_str(&format!(
                    "{header}array ({}) of {element};",
                    index_types
                        .iter()
                        .format_with(", ", |index, f| f(&format_args!("{index} range <>")))
                ));
            }
            TypeDefinition::Array(ArrayTypeDefinition::Constrained {
                constraint,
                element,
            }) => {
                buffer.push_str(&format!("{header}array {constraint} of {element};"));
            }
            TypeDefinition::Record(elements) => {
                buffer.push_str(&format!("{header}record"));
                indented!(self, {
                    for element in elements {
                        self.newline(buffer);
                        buffer.push_str(&format!("{element};"));
                    }
                });
                self.newline(buffer);
                buffer.push_str("end record;");
            }
        }
    }
}
