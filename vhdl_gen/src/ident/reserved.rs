// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

//! LRM 13.9 Reserved words

use std::str::FromStr;
use strum::{EnumCount, EnumIter, EnumString, IntoStaticStr};

/// The reserved words of VHDL-93.
///
/// None of these may be used as a basic identifier, in any casing.
#[derive(
    PartialEq, Eq, Hash, Copy, Clone, Debug, EnumIter, EnumCount, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReservedWord {
    Abs,
    Access,
    After,
    Alias,
    All,
    And,
    Architecture,
    Array,
    Assert,
    Attribute,
    Begin,
    Block,
    Body,
    Buffer,
    Bus,
    Case,
    Component,
    Configuration,
    Constant,
    Disconnect,
    Downto,
    Else,
    Elsif,
    End,
    Entity,
    Exit,
    File,
    For,
    Function,
    Generate,
    Generic,
    Group,
    Guarded,
    If,
    Impure,
    In,
    Inertial,
    Inout,
    Is,
    Label,
    Library,
    Linkage,
    Literal,
    Loop,
    Map,
    Mod,
    Nand,
    New,
    Next,
    Nor,
    Not,
    Null,
    Of,
    On,
    Open,
    Or,
    Others,
    Out,
    Package,
    Port,
    Postponed,
    Procedure,
    Process,
    Pure,
    Range,
    Record,
    Register,
    Reject,
    Rem,
    Report,
    Return,
    Rol,
    Ror,
    Select,
    Severity,
    Signal,
    Shared,
    Sla,
    Sll,
    Sra,
    Srl,
    Subtype,
    Then,
    To,
    Transport,
    Type,
    Unaffected,
    Units,
    Until,
    Use,
    Variable,
    Wait,
    When,
    While,
    With,
    Xnor,
    Xor,
}

impl ReservedWord {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for ReservedWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns true when `text` is a reserved word, ignoring case.
pub fn is_reserved_word(text: &str) -> bool {
    ReservedWord::from_str(text).is_ok()
}
