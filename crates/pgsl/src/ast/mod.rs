//! Arena-based abstract syntax tree.
//!
//! The CST is lowered once into an [`AstTree`] (see `build`). Nodes own
//! their children by [`NodeId`] and carry two computed-once fields: a
//! [`ProcessState`] and the [`Resolved`] result of processing. Processing
//! happens bottom-up through [`AstTree::process`] with an explicit
//! [`AnalysisContext`].

mod build;
mod context;
mod process;
mod resolved;

use alloc::vec::Vec;
use core::{
    cell::{Cell, OnceCell},
    fmt,
};

pub use context::{AnalysisContext, FunctionFrame};
use pgsl_syntax::SourceRange;
pub use resolved::{ConstantValue, FixedState, Link, Resolved};

use crate::{control, decl, expr, function, stmt, types};

/// Index of a node in its [`AstTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn new(index: usize) -> Self {
        NodeId(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Unprocessed,
    Processing,
    Done,
}

/// Every kind of AST node. Transpilation matches on this exhaustively.
#[derive(Debug, Clone)]
pub enum NodeKind {
    Document(decl::DocumentNode),

    Variable(decl::VariableDeclaration),
    Struct(decl::StructDeclaration),
    StructProperty(decl::StructPropertyDeclaration),
    Enum(decl::EnumDeclaration),
    Alias(decl::AliasDeclaration),
    Function(function::FunctionDeclaration),
    Parameter(function::ParameterDeclaration),

    Type(types::TypeDeclaration),

    Block(stmt::BlockStatement),
    LocalVariable(stmt::LocalVariableStatement),
    Assignment(stmt::AssignmentStatement),
    Increment(stmt::IncrementStatement),
    Return(stmt::ReturnStatement),
    CallStatement(stmt::CallStatement),
    Break,
    Continue,
    Discard,

    If(control::IfStatement),
    Switch(control::SwitchStatement),
    While(control::WhileStatement),
    DoWhile(control::DoWhileStatement),
    For(control::ForStatement),

    Literal(expr::LiteralExpression),
    Identifier(expr::IdentifierExpression),
    Binary(expr::BinaryExpression),
    Unary(expr::UnaryExpression),
    AddressOf(expr::PointerExpression),
    Dereference(expr::PointerExpression),
    Parenthesized(expr::ParenthesizedExpression),
    Call(function::CallExpression),
    New(expr::NewExpression),
    Member(expr::MemberExpression),
    Index(expr::IndexExpression),
}

#[derive(Debug)]
pub struct AstNode {
    range: SourceRange,
    kind: NodeKind,
    state: Cell<ProcessState>,
    resolved: OnceCell<Resolved>,
}

impl AstNode {
    fn new(range: SourceRange, kind: NodeKind) -> Self {
        Self {
            range,
            kind,
            state: Cell::new(ProcessState::Unprocessed),
            resolved: OnceCell::new(),
        }
    }

    pub fn range(&self) -> SourceRange {
        self.range
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn state(&self) -> ProcessState {
        self.state.get()
    }

    /// Result of processing, `None` until the node is done.
    pub fn resolved(&self) -> Option<&Resolved> {
        self.resolved.get()
    }
}

/// Node arena with the document node as root.
#[derive(Debug)]
pub struct AstTree {
    nodes: Vec<AstNode>,
    root: NodeId,
}

impl AstTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &AstNode {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn document(&self) -> Option<&decl::DocumentNode> {
        match &self.node(self.root).kind {
            NodeKind::Document(document) => Some(document),
            _ => None,
        }
    }

    /// Ids of every node, in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }
}
