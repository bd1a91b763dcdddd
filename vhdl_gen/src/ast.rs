// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

//! The VHDL-93 subset that can be generated.
//!
//! The types mirror the LRM productions, one variant per supported
//! alternative. Several productions are simplified on purpose: there are no
//! generics, entities and architectures never repeat their name after `end`,
//! association elements only take a simple name as formal, and every
//! instantiation carries a port map.
//!
//! Some productions require at least one element. These are kept as plain
//! `Vec`s and documented with "Must not be empty". Such lists are never
//! checked; an empty one renders to text that a VHDL tool will reject.

mod display;
pub mod precedence;
mod util;

pub use self::precedence::{Associativity, OperatorTier, PRECEDENCE_TABLE};

use crate::ident::Identifier;

/// LRM 6.2 Simple names
pub type SimpleName = Identifier;

/// LRM 4.2 Subtype declarations
///
/// Only simple names may be used as type marks. Types from other packages
/// are made visible with use clauses.
pub type TypeMark = SimpleName;

/// LRM 9 Concurrent statements
pub type Label = Identifier;

/// LRM 6.1 Names
///
/// The prefix of a selected, indexed, slice or attribute name.
pub type Prefix = Name;

/// LRM 7.2 Operators
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BinaryOperator {
    // logical
    And,
    Or,
    Nand,
    Nor,
    Xor,
    Xnor,

    // relational
    EQ,
    NE,
    LT,
    LTE,
    GT,
    GTE,

    // shift
    SLL,
    SRL,
    SLA,
    SRA,
    ROL,
    ROR,

    // adding
    Plus,
    Minus,
    Concat,

    // multiplying
    Times,
    Div,
    Mod,
    Rem,

    // miscellaneous
    Pow,
}

/// LRM 7.2 Operators
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum UnaryOperator {
    // sign
    Plus,
    Minus,

    // miscellaneous
    Abs,
    Not,
}

/// LRM 6.3 Selected names
#[derive(PartialEq, Debug, Clone)]
pub enum Suffix {
    Simple(SimpleName),
    All,
}

/// LRM 6.3 Selected names
#[derive(PartialEq, Debug, Clone)]
pub struct SelectedName {
    pub prefix: Box<Prefix>,
    pub suffix: Suffix,
}

/// LRM 6.4 Indexed names
#[derive(PartialEq, Debug, Clone)]
pub struct IndexedName {
    pub prefix: Box<Prefix>,
    /// Must not be empty
    pub indexes: Vec<Expression>,
}

/// LRM 6.5 Slice names
#[derive(PartialEq, Debug, Clone)]
pub struct SliceName {
    pub prefix: Box<Prefix>,
    pub range: DiscreteRange,
}

/// LRM 6.6 Attribute names
///
/// Predefined attributes whose designator is a reserved word, such as
/// `'range`, need an identifier built with [`crate::ident::unchecked`].
#[derive(PartialEq, Debug, Clone)]
pub struct AttributeName {
    pub prefix: Box<Prefix>,
    pub attribute: SimpleName,
    pub expr: Option<Box<Expression>>,
}

/// LRM 6.1 Names
#[derive(PartialEq, Debug, Clone)]
pub enum Name {
    Simple(SimpleName),
    Selected(SelectedName),
    Indexed(IndexedName),
    Slice(SliceName),
    Attribute(AttributeName),
}

/// LRM 7.3.3 Function calls
#[derive(PartialEq, Debug, Clone)]
pub struct FunctionCall {
    pub name: Name,
    pub args: Vec<AssociationElement>,
}

/// LRM 7.3.2 Aggregates
///
/// Used both for aggregates and for case alternatives.
#[derive(PartialEq, Debug, Clone)]
pub enum Choice {
    Expression(Expression),
    Others,
}

/// LRM 7.3.2 Aggregates
///
/// An element association has at most one choice, `a | b => x` cannot be
/// expressed.
#[derive(PartialEq, Debug, Clone)]
pub struct ElementAssociation {
    pub choice: Option<Choice>,
    pub expr: Expression,
}

/// LRM 4.3.2.2 Association lists
#[derive(PartialEq, Debug, Clone)]
pub enum ActualDesignator {
    Name(Name),
    Expression(Expression),
    Open,
}

/// LRM 4.3.2.2 Association lists
///
/// The formal part is always a simple name; conversion functions and
/// partial associations are not supported.
#[derive(PartialEq, Debug, Clone)]
pub struct AssociationElement {
    pub formal: Option<SimpleName>,
    pub actual: ActualDesignator,
}

/// LRM 13.7 Bit string literals
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum BaseSpecifier {
    B,
    O,
    X,
}

/// LRM 13.7 Bit string literals
///
/// The value is rendered as is between the quotes, it is not checked against
/// the base.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct BitString {
    pub base: BaseSpecifier,
    pub value: String,
}

/// LRM 7.3.1 Literals
#[derive(PartialEq, Debug, Clone)]
pub enum Literal {
    /// Negative numbers are built with [`UnaryOperator::Minus`]
    Integer(u64),
    /// Must be finite. A negative value is rendered like
    /// [`UnaryOperator::Minus`] applied to its magnitude, with parentheses
    /// wherever a sign is not allowed.
    Real(f64),
    Character(char),
    String(String),
    BitString(BitString),
    Null,
}

/// LRM 7.1 Expressions
#[derive(PartialEq, Debug, Clone)]
pub enum Expression {
    Binary(BinaryOperator, Box<Expression>, Box<Expression>),
    Unary(UnaryOperator, Box<Expression>),

    /// LRM 7.3.1 Literals
    Literal(Literal),

    /// LRM 6 Names
    Name(Box<Name>),

    /// LRM 7.3.3 Function calls
    FunctionCall(Box<FunctionCall>),

    /// LRM 7.3.2 Aggregates
    ///
    /// Must not be empty. A single positional element renders as a
    /// parenthesized expression, so give it a choice.
    Aggregate(Vec<ElementAssociation>),
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Direction {
    Ascending,
    Descending,
}

/// LRM 3.1 Scalar types
///
/// Both directions are allowed wherever a range appears. A range whose
/// bounds are in the wrong order for its direction is a null range.
#[derive(PartialEq, Debug, Clone)]
pub struct RangeConstraint {
    pub direction: Direction,
    pub left_expr: Box<Expression>,
    pub right_expr: Box<Expression>,
}

/// LRM 3.1 Scalar types
///
/// range ::= range_attribute_name | simple_expression direction simple_expression
#[derive(PartialEq, Debug, Clone)]
pub enum Range {
    Range(RangeConstraint),
    Attribute(Box<AttributeName>),
}

/// LRM 3.2.1 Array types
///
/// Discrete subtype indications are not supported, only ranges.
pub type DiscreteRange = Range;

/// LRM 3.2.1 Array types
#[derive(PartialEq, Debug, Clone)]
pub struct IndexConstraint {
    /// Must not be empty
    pub ranges: Vec<DiscreteRange>,
}

/// LRM 4.2 Subtype declarations
#[derive(PartialEq, Debug, Clone)]
pub enum Constraint {
    Range(Range),
    Index(IndexConstraint),
}

/// LRM 4.2 Subtype declarations
///
/// Resolution functions are not supported.
#[derive(PartialEq, Debug, Clone)]
pub struct SubtypeIndication {
    pub type_mark: TypeMark,
    pub constraint: Option<Constraint>,
}

/// LRM 3.2.1 Array types
#[derive(PartialEq, Debug, Clone)]
pub enum ArrayTypeDefinition {
    /// `array (index range <>, ...) of element`
    ///
    /// `index_types` must not be empty
    Unconstrained {
        index_types: Vec<TypeMark>,
        element: TypeMark,
    },
    /// `array (range, ...) of element`
    Constrained {
        constraint: IndexConstraint,
        element: TypeMark,
    },
}

/// LRM 3.2.2 Record types
#[derive(PartialEq, Debug, Clone)]
pub struct ElementDeclaration {
    pub ident: Identifier,
    pub type_mark: TypeMark,
}

/// LRM 3.1.1 Enumeration types
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum EnumerationLiteral {
    Identifier(Identifier),
    Character(char),
}

/// LRM 3 Types
#[derive(PartialEq, Debug, Clone)]
pub enum TypeDefinition {
    /// LRM 3.1.1 Enumeration types
    ///
    /// Must not be empty
    Enumeration(Vec<EnumerationLiteral>),
    /// LRM 3.1.2 Integer types
    Integer(Range),
    /// LRM 3.2.1 Array types
    Array(ArrayTypeDefinition),
    /// LRM 3.2.2 Record types
    ///
    /// Must not be empty
    Record(Vec<ElementDeclaration>),
}

/// LRM 4.1 Type declarations
#[derive(PartialEq, Debug, Clone)]
pub struct TypeDeclaration {
    pub ident: Identifier,
    pub def: TypeDefinition,
}

/// LRM 4.2 Subtype declarations
#[derive(PartialEq, Debug, Clone)]
pub struct SubtypeDeclaration {
    pub ident: Identifier,
    pub subtype_indication: SubtypeIndication,
}

/// LRM 4.3.1.1 Constant declarations
///
/// A constant without a value is a deferred constant and may only appear in
/// a package declaration.
#[derive(PartialEq, Debug, Clone)]
pub struct ConstantDeclaration {
    pub ident: Identifier,
    pub subtype_indication: SubtypeIndication,
    pub expression: Option<Expression>,
}

/// LRM 4.3.1.2 Signal declarations
#[derive(PartialEq, Debug, Clone)]
pub struct SignalDeclaration {
    pub ident: Identifier,
    pub subtype_indication: SubtypeIndication,
    pub expression: Option<Expression>,
}

/// LRM 4.3.1.3 Variable declarations
#[derive(PartialEq, Debug, Clone)]
pub struct VariableDeclaration {
    pub ident: Identifier,
    pub subtype_indication: SubtypeIndication,
    pub expression: Option<Expression>,
}

/// LRM 4.3.2 Interface declarations
///
/// Only `in` and `out` are supported.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum Mode {
    #[default]
    In,
    Out,
}

/// LRM 4.3.2 Interface declarations
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ObjectClass {
    Constant,
    Signal,
    Variable,
}

/// LRM 4.3.2 Interface declarations
///
/// A port of an entity or a block.
#[derive(PartialEq, Debug, Clone)]
pub struct InterfaceSignalDeclaration {
    pub ident: Identifier,
    pub mode: Mode,
    pub type_mark: TypeMark,
}

/// LRM 4.3.2 Interface declarations
///
/// A function parameter, implicitly of class constant and mode `in`.
#[derive(PartialEq, Debug, Clone)]
pub struct InterfaceVariableDeclaration {
    pub ident: Identifier,
    pub type_mark: TypeMark,
}

/// LRM 4.3.2 Interface declarations
///
/// A procedure parameter. A `constant` parameter must have mode `in`.
#[derive(PartialEq, Debug, Clone)]
pub struct ProcedureParameter {
    pub class: ObjectClass,
    pub ident: Identifier,
    pub mode: Mode,
    pub type_mark: TypeMark,
}

/// LRM 2.1 Subprogram declarations
#[derive(PartialEq, Debug, Clone)]
pub struct FunctionSpecification {
    pub designator: Identifier,
    pub parameters: Vec<InterfaceVariableDeclaration>,
    pub return_type: TypeMark,
}

/// LRM 2.1 Subprogram declarations
#[derive(PartialEq, Debug, Clone)]
pub struct ProcedureSpecification {
    pub designator: Identifier,
    pub parameters: Vec<ProcedureParameter>,
}

/// LRM 2.1 Subprogram declarations
#[derive(PartialEq, Debug, Clone)]
pub enum SubprogramSpecification {
    Function(FunctionSpecification),
    Procedure(ProcedureSpecification),
}

/// LRM 2.2 Subprogram bodies
#[derive(PartialEq, Debug, Clone)]
pub enum SubprogramDeclarativeItem {
    Variable(VariableDeclaration),
    Constant(ConstantDeclaration),
    SubprogramBody(SubprogramBody),
}

/// LRM 2.2 Subprogram bodies
#[derive(PartialEq, Debug, Clone)]
pub struct SubprogramBody {
    pub specification: SubprogramSpecification,
    pub decl: Vec<SubprogramDeclarativeItem>,
    pub statements: Vec<SequentialStatement>,
}

/// LRM 8.4 Signal assignment statement
#[derive(PartialEq, Debug, Clone)]
pub struct WaveformElement {
    pub value: Expression,
    pub after: Option<Expression>,
}

/// LRM 8.4 Signal assignment statement
///
/// `Unaffected` may only be used in concurrent signal assignments.
#[derive(PartialEq, Debug, Clone)]
pub enum Waveform {
    /// Must not be empty
    Elements(Vec<WaveformElement>),
    Unaffected,
}

/// LRM 8.4 Signal assignment statement
#[derive(PartialEq, Debug, Clone)]
pub struct SignalAssignment {
    pub target: Name,
    pub waveform: Waveform,
}

/// LRM 8.5 Variable assignment statement
#[derive(PartialEq, Debug, Clone)]
pub struct VariableAssignment {
    pub target: Name,
    pub value: Expression,
}

/// LRM 8.6 Procedure call statement
#[derive(PartialEq, Debug, Clone)]
pub struct ProcedureCall {
    pub name: Name,
    pub args: Vec<AssociationElement>,
}

/// LRM 8.7 If statement
#[derive(PartialEq, Debug, Clone)]
pub struct ElsIf {
    pub condition: Expression,
    pub statements: Vec<SequentialStatement>,
}

/// LRM 8.7 If statement
#[derive(PartialEq, Debug, Clone)]
pub struct IfStatement {
    pub condition: Expression,
    pub statements: Vec<SequentialStatement>,
    pub elsifs: Vec<ElsIf>,
    pub else_statements: Option<Vec<SequentialStatement>>,
}

/// LRM 8.8 Case statement
#[derive(PartialEq, Debug, Clone)]
pub struct CaseAlternative {
    /// Must not be empty
    pub choices: Vec<Choice>,
    pub statements: Vec<SequentialStatement>,
}

/// LRM 8.8 Case statement
#[derive(PartialEq, Debug, Clone)]
pub struct CaseStatement {
    pub expression: Expression,
    /// Must not be empty
    pub alternatives: Vec<CaseAlternative>,
}

/// LRM 8.9 Loop statement
///
/// Only unlabeled `for` loops are supported. The range may have either
/// direction.
#[derive(PartialEq, Debug, Clone)]
pub struct ForLoop {
    pub index: Identifier,
    pub range: DiscreteRange,
    pub statements: Vec<SequentialStatement>,
}

/// LRM 8 Sequential statements
#[derive(PartialEq, Debug, Clone)]
pub enum SequentialStatement {
    /// LRM 8.7 If statement
    If(IfStatement),
    /// LRM 8.8 Case statement
    Case(CaseStatement),
    /// LRM 8.12 Return statement
    Return(Option<Expression>),
    /// LRM 8.9 Loop statement
    For(ForLoop),
    /// LRM 8.5 Variable assignment statement
    VariableAssignment(VariableAssignment),
    /// LRM 8.1 Wait statement, only the `wait for` form
    WaitFor(Expression),
    /// LRM 8.4 Signal assignment statement
    SignalAssignment(SignalAssignment),
    /// LRM 8.6 Procedure call statement
    ProcedureCall(ProcedureCall),
    /// LRM 8.13 Null statement
    Null,
}

/// LRM 1.1.1.2 Ports
#[derive(PartialEq, Debug, Clone)]
pub struct PortMapAspect {
    /// Must not be empty
    pub elements: Vec<AssociationElement>,
}

/// LRM 9.1 Block statement
///
/// The block header has no generics. When `ports` is empty neither the port
/// clause nor the port map is rendered.
#[derive(PartialEq, Debug, Clone)]
pub struct BlockStatement {
    pub label: Label,
    pub ports: Vec<InterfaceSignalDeclaration>,
    pub port_map: PortMapAspect,
    pub decl: Vec<BlockDeclarativeItem>,
    pub statements: Vec<ConcurrentStatement>,
}

/// LRM 9.2 Process statement
#[derive(PartialEq, Debug, Clone)]
pub struct ProcessStatement {
    pub label: Label,
    /// An empty list renders a process without a sensitivity list
    pub sensitivity_list: Vec<SimpleName>,
    pub decl: Vec<SubprogramDeclarativeItem>,
    pub statements: Vec<SequentialStatement>,
}

/// LRM 9.5.1 Conditional signal assignments
#[derive(PartialEq, Debug, Clone)]
pub struct WhenElse {
    pub waveform: Waveform,
    pub condition: Expression,
}

/// LRM 9.5.1 Conditional signal assignments
///
/// `w0 when c0 else w1 when c1 else waveform [when condition]`
#[derive(PartialEq, Debug, Clone)]
pub struct ConditionalWaveforms {
    pub conditionals: Vec<WhenElse>,
    pub waveform: Waveform,
    pub when: Option<Expression>,
}

/// LRM 9.5 Concurrent signal assignment statements
#[derive(PartialEq, Debug, Clone)]
pub struct ConcurrentSignalAssignment {
    pub target: Name,
    pub waveforms: ConditionalWaveforms,
}

/// LRM 9.6 Component instantiation statements
#[derive(PartialEq, Debug, Clone)]
pub enum InstantiatedUnit {
    /// `entity work.foo(architecture)`
    Entity(Name, Option<SimpleName>),
}

/// LRM 9.6 Component instantiation statements
#[derive(PartialEq, Debug, Clone)]
pub struct ComponentInstantiation {
    pub label: Label,
    pub unit: InstantiatedUnit,
    pub port_map: PortMapAspect,
}

/// LRM 9.7 Generate statements
#[derive(PartialEq, Debug, Clone)]
pub enum GenerationScheme {
    /// The range may have either direction
    For(Identifier, DiscreteRange),
    If(Expression),
}

/// LRM 9.7 Generate statements
#[derive(PartialEq, Debug, Clone)]
pub struct GenerateStatement {
    pub label: Label,
    pub scheme: GenerationScheme,
    pub decl: Vec<BlockDeclarativeItem>,
    pub statements: Vec<ConcurrentStatement>,
}

/// LRM 9 Concurrent statements
#[derive(PartialEq, Debug, Clone)]
pub enum ConcurrentStatement {
    Block(BlockStatement),
    Assignment(ConcurrentSignalAssignment),
    Instance(ComponentInstantiation),
    Process(ProcessStatement),
    Generate(GenerateStatement),
}

/// LRM 1.2.1 Architecture declarative part
#[derive(PartialEq, Debug, Clone)]
pub enum BlockDeclarativeItem {
    Signal(SignalDeclaration),
    Constant(ConstantDeclaration),
    Type(TypeDeclaration),
    Subtype(SubtypeDeclaration),
    SubprogramBody(SubprogramBody),
}

/// LRM 2.5 Package declarations
#[derive(PartialEq, Debug, Clone)]
pub enum PackageDeclarativeItem {
    Type(TypeDeclaration),
    Subtype(SubtypeDeclaration),
    Constant(ConstantDeclaration),
    Subprogram(SubprogramSpecification),
}

/// LRM 2.6 Package bodies
#[derive(PartialEq, Debug, Clone)]
pub enum PackageBodyDeclarativeItem {
    Constant(ConstantDeclaration),
    SubprogramBody(SubprogramBody),
}

/// LRM 1.1 Entity declarations
#[derive(PartialEq, Debug, Clone)]
pub struct EntityDeclaration {
    pub ident: Identifier,
    pub ports: Vec<InterfaceSignalDeclaration>,
}

/// LRM 1.2 Architecture bodies
#[derive(PartialEq, Debug, Clone)]
pub struct ArchitectureBody {
    pub ident: Identifier,
    pub entity_name: SimpleName,
    pub decl: Vec<BlockDeclarativeItem>,
    pub statements: Vec<ConcurrentStatement>,
}

/// LRM 2.5 Package declarations
#[derive(PartialEq, Debug, Clone)]
pub struct PackageDeclaration {
    pub ident: Identifier,
    pub decl: Vec<PackageDeclarativeItem>,
}

/// LRM 2.6 Package bodies
#[derive(PartialEq, Debug, Clone)]
pub struct PackageBody {
    pub ident: Identifier,
    pub decl: Vec<PackageBodyDeclarativeItem>,
}

/// LRM 11.1 Design units
#[derive(PartialEq, Debug, Clone)]
pub enum LibraryUnit {
    /// LRM 1.1 Entity declaration
    Entity(EntityDeclaration),

    /// LRM 1.2 Architecture bodies
    Architecture(ArchitectureBody),

    /// LRM 2.5 Package declarations
    Package(PackageDeclaration),

    /// LRM 2.6 Package bodies
    PackageBody(PackageBody),
}

/// LRM 11.3 Context clauses
#[derive(PartialEq, Debug, Clone)]
pub enum ContextItem {
    /// LRM 11.2 Design libraries
    Library(Identifier),
    /// LRM 10.4 Use clauses
    Use(SelectedName),
}

/// LRM 11.1 Design units
///
/// The context clause applies to every library unit of the file. A file
/// without library units is accepted although it is not a valid design
/// file.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct DesignFile {
    pub context: Vec<ContextItem>,
    pub units: Vec<LibraryUnit>,
}
