// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

//! Implementation of Display
//!
//! Everything that fits on one line of VHDL is rendered here. Statements and
//! design units are laid out by the formatter.

use super::*;
use itertools::Itertools;
use std::fmt::{Display, Formatter, Result};

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            BinaryOperator::And => write!(f, "and"),
            BinaryOperator::Or => write!(f, "or"),
            BinaryOperator::Nand => write!(f, "nand"),
            BinaryOperator::Nor => write!(f, "nor"),
            BinaryOperator::Xor => write!(f, "xor"),
            BinaryOperator::Xnor => write!(f, "xnor"),
            BinaryOperator::EQ => write!(f, "="),
            BinaryOperator::NE => write!(f, "/="),
            BinaryOperator::LT => write!(f, "<"),
            BinaryOperator::LTE => write!(f, "<="),
            BinaryOperator::GT => write!(f, ">"),
            BinaryOperator::GTE => write!(f, ">="),
            BinaryOperator::SLL => write!(f, "sll"),
            BinaryOperator::SRL => write!(f, "srl"),
            BinaryOperator::SLA => write!(f, "sla"),
            BinaryOperator::SRA => write!(f, "sra"),
            BinaryOperator::ROL => write!(f, "rol"),
            BinaryOperator::ROR => write!(f, "ror"),
            BinaryOperator::Plus => write!(f, "+"),
            BinaryOperator::Minus => write!(f, "-"),
            BinaryOperator::Concat => write!(f, "&"),
            BinaryOperator::Times => write!(f, "*"),
            BinaryOperator::Div => write!(f, "/"),
            BinaryOperator::Mod => write!(f, "mod"),
            BinaryOperator::Rem => write!(f, "rem"),
            BinaryOperator::Pow => write!(f, "**"),
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            UnaryOperator::Plus => write!(f, "+"),
            UnaryOperator::Minus => write!(f, "-"),
            UnaryOperator::Abs => write!(f, "abs"),
            UnaryOperator::Not => write!(f, "not"),
        }
    }
}

impl Display for Suffix {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Suffix::Simple(ident) => write!(f, "{ident}"),
            Suffix::All => write!(f, "all"),
        }
    }
}

impl Display for SelectedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}.{}", self.prefix, self.suffix)
    }
}

impl Display for IndexedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}({})", self.prefix, self.indexes.iter().format(", "))
    }
}

impl Display for SliceName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}({})", self.prefix, self.range)
    }
}

impl Display for AttributeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}'{}", self.prefix, self.attribute)?;
        if let Some(ref expr) = self.expr {
            write!(f, "({expr})")
        } else {
            Ok(())
        }
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Name::Simple(ident) => write!(f, "{ident}"),
            Name::Selected(ref selected) => write!(f, "{selected}"),
            Name::Indexed(ref indexed) => write!(f, "{indexed}"),
            Name::Slice(ref slice) => write!(f, "{slice}"),
            Name::Attribute(ref attr) => write!(f, "{attr}"),
        }
    }
}

impl Display for FunctionCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.name)?;
        if self.args.is_empty() {
            Ok(())
        } else {
            write!(f, "({})", self.args.iter().format(", "))
        }
    }
}

impl Display for Choice {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Choice::Expression(ref expr) => write!(f, "{expr}"),
            Choice::Others => write!(f, "others"),
        }
    }
}

impl Display for ElementAssociation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(ref choice) = self.choice {
            write!(f, "{choice} => ")?;
        }
        write!(f, "{}", self.expr)
    }
}

impl Display for ActualDesignator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ActualDesignator::Name(ref name) => write!(f, "{name}"),
            ActualDesignator::Expression(ref expr) => write!(f, "{expr}"),
            ActualDesignator::Open => write!(f, "open"),
        }
    }
}

impl Display for AssociationElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(ref formal) = self.formal {
            write!(f, "{formal} => ")?;
        }
        write!(f, "{}", self.actual)
    }
}

impl Display for BaseSpecifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            BaseSpecifier::B => write!(f, "B"),
            BaseSpecifier::O => write!(f, "O"),
            BaseSpecifier::X => write!(f, "X"),
        }
    }
}

impl Display for BitString {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}\"{}\"", self.base, self.value)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Literal::Integer(val) => write!(f, "{val}"),
            Literal::Real(val) => {
                let text = val.to_string();
                if text.contains('.') {
                    write!(f, "{text}")
                } else {
                    // An abstract literal with a point is a real literal
                    write!(f, "{text}.0")
                }
            }
            Literal::Character(chr) => write!(f, "'{chr}'"),
            Literal::String(ref val) => write!(f, "\"{}\"", val.replace('"', "\"\"")),
            Literal::BitString(ref val) => write!(f, "{val}"),
            Literal::Null => write!(f, "null"),
        }
    }
}

/// The sign or operator an operand starts with when rendered.
///
/// A negative real literal renders with a leading `-` and is placed like a
/// sign applied to its magnitude.
fn leading_unary_operator(expr: &Expression) -> Option<UnaryOperator> {
    match expr {
        Expression::Unary(op, ..) => Some(*op),
        Expression::Literal(Literal::Real(val)) if val.is_sign_negative() => {
            Some(UnaryOperator::Minus)
        }
        _ => None,
    }
}

/// Whether the left operand of `op` needs parentheses
fn lhs_needs_parentheses(op: BinaryOperator, lhs: &Expression) -> bool {
    let precedence = op.precedence();
    if let Expression::Binary(lhs_op, ..) = lhs {
        return lhs_op.precedence() < precedence
            || (lhs_op.precedence() == precedence && !op.chains_with(*lhs_op));
    }
    leading_unary_operator(lhs).is_some_and(|lhs_op| lhs_op.precedence() <= precedence)
}

/// Whether the right operand of `op` needs parentheses
fn rhs_needs_parentheses(op: BinaryOperator, rhs: &Expression) -> bool {
    let precedence = op.precedence();
    if let Expression::Binary(rhs_op, ..) = rhs {
        return rhs_op.precedence() <= precedence;
    }
    match leading_unary_operator(rhs).map(UnaryOperator::tier) {
        // A sign may only start a simple expression
        Some(OperatorTier::Sign) => precedence >= OperatorTier::Adding.precedence(),
        Some(tier) => tier.precedence() <= precedence,
        None => false,
    }
}

/// Whether the operand of a unary `op` needs parentheses
fn operand_needs_parentheses(op: UnaryOperator, expr: &Expression) -> bool {
    if let Expression::Binary(expr_op, ..) = expr {
        // sign term, abs primary, not primary
        return op.tier() != OperatorTier::Sign || expr_op.precedence() <= op.precedence();
    }
    match leading_unary_operator(expr) {
        Some(expr_op) => {
            op.tier() != OperatorTier::Sign || expr_op.precedence() <= op.precedence()
        }
        None => false,
    }
}

fn write_operand(f: &mut Formatter<'_>, expr: &Expression, parenthesize: bool) -> Result {
    if parenthesize {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expression::Binary(op, ref lhs, ref rhs) => {
                write_operand(f, lhs, lhs_needs_parentheses(*op, lhs))?;
                write!(f, " {op} ")?;
                write_operand(f, rhs, rhs_needs_parentheses(*op, rhs))
            }
            Expression::Unary(op, ref expr) => {
                if matches!(op, UnaryOperator::Minus | UnaryOperator::Plus) {
                    write!(f, "{op}")?;
                } else {
                    write!(f, "{op} ")?;
                }
                write_operand(f, expr, operand_needs_parentheses(*op, expr))
            }
            Expression::Literal(ref literal) => write!(f, "{literal}"),
            Expression::Name(ref name) => write!(f, "{name}"),
            Expression::FunctionCall(ref call) => write!(f, "{call}"),
            Expression::Aggregate(ref assocs) => write!(f, "({})", assocs.iter().format(", ")),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Direction::Ascending => write!(f, "to"),
            Direction::Descending => write!(f, "downto"),
        }
    }
}

impl Display for RangeConstraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} {} {}",
            self.left_expr, self.direction, self.right_expr,
        )
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Range::Range(ref constraint) => write!(f, "{constraint}"),
            Range::Attribute(ref attr) => write!(f, "{attr}"),
        }
    }
}

impl Display for IndexConstraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({})", self.ranges.iter().format(", "))
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Constraint::Range(ref range) => write!(f, " range {range}"),
            Constraint::Index(ref index) => write!(f, "{index}"),
        }
    }
}

impl Display for SubtypeIndication {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.type_mark)?;
        match self.constraint {
            Some(ref constraint) => write!(f, "{constraint}"),
            None => Ok(()),
        }
    }
}

impl Display for EnumerationLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            EnumerationLiteral::Identifier(ident) => write!(f, "{ident}"),
            EnumerationLiteral::Character(chr) => write!(f, "'{chr}'"),
        }
    }
}

impl Display for ElementDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} : {}", self.ident, self.type_mark)
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Mode::In => write!(f, "in"),
            Mode::Out => write!(f, "out"),
        }
    }
}

impl Display for ObjectClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ObjectClass::Constant => write!(f, "constant"),
            ObjectClass::Signal => write!(f, "signal"),
            ObjectClass::Variable => write!(f, "variable"),
        }
    }
}

impl Display for InterfaceSignalDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} : {} {}", self.ident, self.mode, self.type_mark)
    }
}

impl Display for InterfaceVariableDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} : {}", self.ident, self.type_mark)
    }
}

impl Display for ProcedureParameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} {} : {} {}",
            self.class, self.ident, self.mode, self.type_mark
        )
    }
}

impl Display for FunctionSpecification {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "function {}", self.designator)?;
        if !self.parameters.is_empty() {
            write!(f, "({})", self.parameters.iter().format("; "))?;
        }
        write!(f, " return {}", self.return_type)
    }
}

impl Display for ProcedureSpecification {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "procedure {}", self.designator)?;
        if self.parameters.is_empty() {
            Ok(())
        } else {
            write!(f, "({})", self.parameters.iter().format("; "))
        }
    }
}

impl Display for SubprogramSpecification {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SubprogramSpecification::Function(ref function) => write!(f, "{function}"),
            SubprogramSpecification::Procedure(ref procedure) => write!(f, "{procedure}"),
        }
    }
}

impl Display for WaveformElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value)?;
        match self.after {
            Some(ref after) => write!(f, " after {after}"),
            None => Ok(()),
        }
    }
}

impl Display for Waveform {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Waveform::Elements(ref elements) => write!(f, "{}", elements.iter().format(", ")),
            Waveform::Unaffected => write!(f, "unaffected"),
        }
    }
}

impl Display for InstantiatedUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            InstantiatedUnit::Entity(ref name, ref architecture) => {
                write!(f, "entity {name}")?;
                match architecture {
                    Some(ref architecture) => write!(f, "({architecture})"),
                    None => Ok(()),
                }
            }
        }
    }
}

impl Display for ContextItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ContextItem::Library(ident) => write!(f, "library {ident};"),
            ContextItem::Use(ref name) => write!(f, "use {name};"),
        }
    }
}
