// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

//! Convenience constructors for building trees bottom-up
//!
//! None of these validate anything; they only save some boxing.

use super::*;

impl Name {
    pub fn simple(ident: Identifier) -> Name {
        Name::Simple(ident)
    }

    pub fn selected(prefix: Name, suffix: SimpleName) -> Name {
        Name::Selected(SelectedName::new(prefix, Suffix::Simple(suffix)))
    }

    /// `prefix.all`
    pub fn all(prefix: Name) -> Name {
        Name::Selected(SelectedName::new(prefix, Suffix::All))
    }

    pub fn indexed(prefix: Name, indexes: Vec<Expression>) -> Name {
        Name::Indexed(IndexedName {
            prefix: Box::new(prefix),
            indexes,
        })
    }

    pub fn slice(prefix: Name, range: DiscreteRange) -> Name {
        Name::Slice(SliceName {
            prefix: Box::new(prefix),
            range,
        })
    }

    pub fn attribute(prefix: Name, attribute: SimpleName, expr: Option<Expression>) -> Name {
        Name::Attribute(AttributeName::new(prefix, attribute, expr))
    }
}

impl From<Identifier> for Name {
    fn from(ident: Identifier) -> Name {
        Name::Simple(ident)
    }
}

impl SelectedName {
    pub fn new(prefix: Name, suffix: Suffix) -> SelectedName {
        SelectedName {
            prefix: Box::new(prefix),
            suffix,
        }
    }
}

impl AttributeName {
    pub fn new(prefix: Name, attribute: SimpleName, expr: Option<Expression>) -> AttributeName {
        AttributeName {
            prefix: Box::new(prefix),
            attribute,
            expr: expr.map(Box::new),
        }
    }
}

impl Expression {
    pub fn binary(op: BinaryOperator, lhs: Expression, rhs: Expression) -> Expression {
        Expression::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn unary(op: UnaryOperator, expr: Expression) -> Expression {
        Expression::Unary(op, Box::new(expr))
    }

    pub fn name(name: Name) -> Expression {
        Expression::Name(Box::new(name))
    }

    pub fn call(name: Name, args: Vec<AssociationElement>) -> Expression {
        Expression::FunctionCall(Box::new(FunctionCall { name, args }))
    }

    pub fn integer(value: u64) -> Expression {
        Expression::Literal(Literal::Integer(value))
    }

    pub fn character(value: char) -> Expression {
        Expression::Literal(Literal::Character(value))
    }

    /// `(others => expr)`
    pub fn others(expr: Expression) -> Expression {
        Expression::Aggregate(vec![ElementAssociation {
            choice: Some(Choice::Others),
            expr,
        }])
    }
}

impl From<Name> for Expression {
    fn from(name: Name) -> Expression {
        Expression::name(name)
    }
}

impl From<Identifier> for Expression {
    fn from(ident: Identifier) -> Expression {
        Expression::name(Name::Simple(ident))
    }
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Expression {
        Expression::Literal(literal)
    }
}

impl Range {
    /// `left to right`
    pub fn to(left_expr: Expression, right_expr: Expression) -> Range {
        Range::Range(RangeConstraint {
            direction: Direction::Ascending,
            left_expr: Box::new(left_expr),
            right_expr: Box::new(right_expr),
        })
    }

    /// `left downto right`
    pub fn downto(left_expr: Expression, right_expr: Expression) -> Range {
        Range::Range(RangeConstraint {
            direction: Direction::Descending,
            left_expr: Box::new(left_expr),
            right_expr: Box::new(right_expr),
        })
    }
}

impl From<TypeMark> for SubtypeIndication {
    fn from(type_mark: TypeMark) -> SubtypeIndication {
        SubtypeIndication {
            type_mark,
            constraint: None,
        }
    }
}

impl SubtypeIndication {
    pub fn constrained(type_mark: TypeMark, constraint: Constraint) -> SubtypeIndication {
        SubtypeIndication {
            type_mark,
            constraint: Some(constraint),
        }
    }

    /// `type_mark(range, ...)`
    pub fn indexed(type_mark: TypeMark, ranges: Vec<DiscreteRange>) -> SubtypeIndication {
        SubtypeIndication::constrained(type_mark, Constraint::Index(IndexConstraint { ranges }))
    }
}

impl AssociationElement {
    pub fn positional(actual: impl Into<ActualDesignator>) -> AssociationElement {
        AssociationElement {
            formal: None,
            actual: actual.into(),
        }
    }

    /// `formal => actual`
    pub fn named(formal: SimpleName, actual: impl Into<ActualDesignator>) -> AssociationElement {
        AssociationElement {
            formal: Some(formal),
            actual: actual.into(),
        }
    }
}

impl From<Name> for ActualDesignator {
    fn from(name: Name) -> ActualDesignator {
        ActualDesignator::Name(name)
    }
}

impl From<Expression> for ActualDesignator {
    fn from(expr: Expression) -> ActualDesignator {
        ActualDesignator::Expression(expr)
    }
}

impl Waveform {
    /// A waveform with a single element without delay.
    pub fn single(value: Expression) -> Waveform {
        Waveform::Elements(vec![WaveformElement { value, after: None }])
    }
}

impl ConditionalWaveforms {
    /// An unconditional concurrent assignment.
    pub fn unconditional(waveform: Waveform) -> ConditionalWaveforms {
        ConditionalWaveforms {
            conditionals: Vec::new(),
            waveform,
            when: None,
        }
    }
}

impl PortMapAspect {
    pub fn new(elements: Vec<AssociationElement>) -> PortMapAspect {
        PortMapAspect { elements }
    }
}

impl SubprogramSpecification {
    pub fn designator(&self) -> &Identifier {
        match self {
            SubprogramSpecification::Function(function) => &function.designator,
            SubprogramSpecification::Procedure(procedure) => &procedure.designator,
        }
    }
}

impl LibraryUnit {
    pub fn ident(&self) -> &Identifier {
        match self {
            LibraryUnit::Entity(unit) => &unit.ident,
            LibraryUnit::Architecture(unit) => &unit.ident,
            LibraryUnit::Package(unit) => &unit.ident,
            LibraryUnit::PackageBody(unit) => &unit.ident,
        }
    }
}
