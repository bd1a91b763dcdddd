// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

//! LRM 7.2 Operators and their precedence
//!
//! Binary operators of one tier associate to the left. The LRM additionally
//! forbids some sequences of operators from the same tier without
//! parentheses, e.g. `a and b or c` or `a = b = c`. Such expressions can
//! still be constructed; rendering adds the parentheses.

use super::{BinaryOperator, UnaryOperator};
use strum::{EnumCount, EnumIter, IntoStaticStr};

/// The operator classes of LRM 7.2, lowest precedence first.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug, EnumIter, EnumCount, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum OperatorTier {
    Logical,
    Relational,
    Shift,
    Adding,
    Sign,
    Multiplying,
    /// `**`, `abs` and `not`
    Miscellaneous,
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Associativity {
    Left,
}

/// Tier to precedence level, in declaration order of [`OperatorTier`]. A
/// higher level binds tighter.
pub const PRECEDENCE_TABLE: [(OperatorTier, u8); 7] = [
    (OperatorTier::Logical, 2),
    (OperatorTier::Relational, 3),
    (OperatorTier::Shift, 4),
    (OperatorTier::Adding, 5),
    (OperatorTier::Sign, 6),
    (OperatorTier::Multiplying, 7),
    (OperatorTier::Miscellaneous, 8),
];

impl OperatorTier {
    pub fn precedence(self) -> u8 {
        PRECEDENCE_TABLE[self as usize].1
    }

    pub fn associativity(self) -> Associativity {
        Associativity::Left
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl BinaryOperator {
    pub fn tier(self) -> OperatorTier {
        use BinaryOperator::*;
        match self {
            And | Or | Nand | Nor | Xor | Xnor => OperatorTier::Logical,
            EQ | NE | LT | LTE | GT | GTE => OperatorTier::Relational,
            SLL | SRL | SLA | SRA | ROL | ROR => OperatorTier::Shift,
            Plus | Minus | Concat => OperatorTier::Adding,
            Times | Div | Mod | Rem => OperatorTier::Multiplying,
            Pow => OperatorTier::Miscellaneous,
        }
    }

    pub fn precedence(self) -> u8 {
        self.tier().precedence()
    }

    /// Whether `lhs self rhs` is valid VHDL when `lhs` is itself a binary
    /// expression of the same tier using `lhs_op`, without parentheses.
    ///
    /// Relational, shift and `**` take exactly two operands. A sequence of
    /// logical operators must repeat one of `and`, `or`, `xor` or `xnor`.
    pub fn chains_with(self, lhs_op: BinaryOperator) -> bool {
        use BinaryOperator::*;
        if self.tier() != lhs_op.tier() {
            return false;
        }
        match self.tier() {
            OperatorTier::Logical => self == lhs_op && matches!(self, And | Or | Xor | Xnor),
            OperatorTier::Adding | OperatorTier::Multiplying => true,
            _ => false,
        }
    }
}

impl UnaryOperator {
    pub fn tier(self) -> OperatorTier {
        match self {
            UnaryOperator::Plus | UnaryOperator::Minus => OperatorTier::Sign,
            UnaryOperator::Abs | UnaryOperator::Not => OperatorTier::Miscellaneous,
        }
    }

    pub fn precedence(self) -> u8 {
        self.tier().precedence()
    }
}
