// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

//! Shorthands for building trees in tests

use crate::ast::{Expression, Name};
use crate::ident::Identifier;

pub fn ident(text: &str) -> Identifier {
    Identifier::basic(text).unwrap()
}

pub fn name(text: &str) -> Name {
    Name::Simple(ident(text))
}

pub fn expr(text: &str) -> Expression {
    Expression::from(ident(text))
}
