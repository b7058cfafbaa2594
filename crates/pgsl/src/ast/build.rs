//! Lowering of the CST into the node arena.
//!
//! Children are pushed before their parent, so every node id is smaller
//! than its parent's except for the document root, which is pushed last.

use alloc::vec::Vec;

use pgsl_syntax::{cst, SourceRange};

use super::{AstNode, AstTree, NodeId, NodeKind};
use crate::{
    control,
    decl::{self, Attribute, AttributeParameter},
    expr, function, stmt, types,
};

impl AstTree {
    /// Build the tree of a document followed by built-in declarations.
    pub fn build(document: cst::Document, builtins: Vec<cst::Declaration>) -> Self {
        let mut builder = Builder::default();
        let declarations = document
            .declarations
            .into_iter()
            .map(|declaration| builder.declaration(declaration))
            .collect();
        let builtins = builtins
            .into_iter()
            .map(|declaration| builder.declaration(declaration))
            .collect();
        let root = builder.push(
            document.range,
            NodeKind::Document(decl::DocumentNode {
                declarations,
                builtins,
            }),
        );
        AstTree {
            nodes: builder.nodes,
            root,
        }
    }
}

#[derive(Default)]
struct Builder {
    nodes: Vec<AstNode>,
}

impl Builder {
    fn push(&mut self, range: SourceRange, kind: NodeKind) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(AstNode::new(range, kind));
        id
    }

    fn declaration(&mut self, declaration: cst::Declaration) -> NodeId {
        match declaration {
            cst::Declaration::Variable(variable) => {
                let attributes = self.attributes(variable.attributes);
                let ty = self.type_declaration(variable.ty);
                let initializer = variable.initializer.map(|value| self.expression(value));
                self.push(
                    variable.range,
                    NodeKind::Variable(decl::VariableDeclaration {
                        attributes,
                        keyword: variable.keyword,
                        name: variable.name,
                        ty,
                        initializer,
                    }),
                )
            }
            cst::Declaration::Function(function) => {
                let attributes = self.attributes(function.attributes);
                let parameters = function
                    .parameters
                    .into_iter()
                    .map(|parameter| {
                        let attributes = self.attributes(parameter.attributes);
                        let ty = self.type_declaration(parameter.ty);
                        self.push(
                            parameter.range,
                            NodeKind::Parameter(function::ParameterDeclaration {
                                attributes,
                                name: parameter.name,
                                ty,
                            }),
                        )
                    })
                    .collect();
                let return_type = function.return_type.map(|ty| self.type_declaration(ty));
                let body = self.block(function.body);
                self.push(
                    function.range,
                    NodeKind::Function(function::FunctionDeclaration {
                        attributes,
                        name: function.name,
                        parameters,
                        return_type,
                        body,
                    }),
                )
            }
            cst::Declaration::Struct(structure) => {
                let attributes = self.attributes(structure.attributes);
                let properties = structure
                    .properties
                    .into_iter()
                    .map(|property| {
                        let attributes = self.attributes(property.attributes);
                        let ty = self.type_declaration(property.ty);
                        self.push(
                            property.range,
                            NodeKind::StructProperty(decl::StructPropertyDeclaration {
                                attributes,
                                name: property.name,
                                ty,
                            }),
                        )
                    })
                    .collect();
                self.push(
                    structure.range,
                    NodeKind::Struct(decl::StructDeclaration {
                        attributes,
                        name: structure.name,
                        properties,
                    }),
                )
            }
            cst::Declaration::Enum(enumeration) => {
                let values = enumeration
                    .values
                    .into_iter()
                    .map(|value| decl::EnumValueDeclaration {
                        name: value.name,
                        value: value.value,
                        range: value.range,
                    })
                    .collect();
                self.push(
                    enumeration.range,
                    NodeKind::Enum(decl::EnumDeclaration {
                        name: enumeration.name,
                        values,
                    }),
                )
            }
            cst::Declaration::Alias(alias) => {
                let ty = self.type_declaration(alias.ty);
                self.push(
                    alias.range,
                    NodeKind::Alias(decl::AliasDeclaration {
                        name: alias.name,
                        ty,
                    }),
                )
            }
        }
    }

    fn attributes(&mut self, attributes: Vec<cst::Attribute>) -> Vec<Attribute> {
        attributes
            .into_iter()
            .map(|attribute| Attribute {
                name: attribute.name,
                parameters: attribute
                    .parameters
                    .into_iter()
                    .map(|parameter| match parameter {
                        cst::AttributeParameter::String(text, range) => {
                            AttributeParameter::String(text, range)
                        }
                        cst::AttributeParameter::Expression(expression) => {
                            AttributeParameter::Expression(self.expression(expression))
                        }
                    })
                    .collect(),
                range: attribute.range,
            })
            .collect()
    }

    fn type_declaration(&mut self, ty: cst::TypeDeclaration) -> NodeId {
        let arguments = ty
            .arguments
            .into_iter()
            .map(|argument| match argument {
                cst::TypeArgument::Type(ty) => self.type_declaration(ty),
                cst::TypeArgument::Expression(expression) => self.expression(expression),
            })
            .collect();
        self.push(
            ty.range,
            NodeKind::Type(types::TypeDeclaration {
                name: ty.name,
                arguments,
            }),
        )
    }

    fn block(&mut self, block: cst::BlockStatement) -> NodeId {
        let statements = block
            .statements
            .into_iter()
            .map(|statement| self.statement(statement))
            .collect();
        self.push(block.range, NodeKind::Block(stmt::BlockStatement { statements }))
    }

    fn local_variable(&mut self, variable: cst::VariableStatement) -> NodeId {
        let ty = self.type_declaration(variable.ty);
        let initializer = variable.initializer.map(|value| self.expression(value));
        self.push(
            variable.range,
            NodeKind::LocalVariable(stmt::LocalVariableStatement {
                keyword: variable.keyword,
                name: variable.name,
                ty,
                initializer,
            }),
        )
    }

    fn if_statement(&mut self, statement: cst::IfStatement) -> NodeId {
        let condition = self.expression(statement.condition);
        let then_block = self.block(statement.then_block);
        let else_branch = statement.else_branch.map(|branch| match branch {
            cst::ElseBranch::If(nested) => self.if_statement(*nested),
            cst::ElseBranch::Block(block) => self.block(block),
        });
        self.push(
            statement.range,
            NodeKind::If(control::IfStatement {
                condition,
                then_block,
                else_branch,
            }),
        )
    }

    fn statement(&mut self, statement: cst::Statement) -> NodeId {
        match statement {
            cst::Statement::Block(block) => self.block(block),
            cst::Statement::Variable(variable) => self.local_variable(variable),
            cst::Statement::Assignment(assignment) => {
                let target = self.expression(assignment.target);
                let value = self.expression(assignment.value);
                self.push(
                    assignment.range,
                    NodeKind::Assignment(stmt::AssignmentStatement {
                        target,
                        operator: assignment.operator,
                        value,
                    }),
                )
            }
            cst::Statement::Increment(increment) => {
                let target = self.expression(increment.target);
                self.push(
                    increment.range,
                    NodeKind::Increment(stmt::IncrementStatement {
                        target,
                        operator: increment.operator,
                    }),
                )
            }
            cst::Statement::If(statement) => self.if_statement(statement),
            cst::Statement::Switch(switch) => {
                let selector = self.expression(switch.selector);
                let cases = switch
                    .cases
                    .into_iter()
                    .map(|case| control::SwitchCase {
                        selectors: case
                            .selectors
                            .into_iter()
                            .map(|selector| match selector {
                                cst::CaseSelector::Expression(expression) => {
                                    control::CaseSelector::Expression(self.expression(expression))
                                }
                                cst::CaseSelector::Default(range) => {
                                    control::CaseSelector::Default(range)
                                }
                            })
                            .collect(),
                        body: self.block(case.body),
                        range: case.range,
                    })
                    .collect();
                self.push(
                    switch.range,
                    NodeKind::Switch(control::SwitchStatement { selector, cases }),
                )
            }
            cst::Statement::While(statement) => {
                let condition = self.expression(statement.condition);
                let body = self.block(statement.body);
                self.push(
                    statement.range,
                    NodeKind::While(control::WhileStatement { condition, body }),
                )
            }
            cst::Statement::DoWhile(statement) => {
                let body = self.block(statement.body);
                let condition = self.expression(statement.condition);
                self.push(
                    statement.range,
                    NodeKind::DoWhile(control::DoWhileStatement { body, condition }),
                )
            }
            cst::Statement::For(statement) => {
                let init = statement.init.map(|init| self.local_variable(init));
                let condition = statement.condition.map(|condition| self.expression(condition));
                let update = statement.update.map(|update| self.statement(*update));
                let body = self.block(statement.body);
                self.push(
                    statement.range,
                    NodeKind::For(control::ForStatement {
                        init,
                        condition,
                        update,
                        body,
                    }),
                )
            }
            cst::Statement::Break(range) => self.push(range, NodeKind::Break),
            cst::Statement::Continue(range) => self.push(range, NodeKind::Continue),
            cst::Statement::Discard(range) => self.push(range, NodeKind::Discard),
            cst::Statement::Return(statement) => {
                let value = statement.value.map(|value| self.expression(value));
                self.push(
                    statement.range,
                    NodeKind::Return(stmt::ReturnStatement { value }),
                )
            }
            cst::Statement::Call(statement) => {
                let call = self.expression(statement.call);
                self.push(
                    statement.range,
                    NodeKind::CallStatement(stmt::CallStatement { call }),
                )
            }
        }
    }

    fn expression(&mut self, expression: cst::Expression) -> NodeId {
        match expression {
            cst::Expression::Literal(literal) => self.push(
                literal.range,
                NodeKind::Literal(expr::LiteralExpression {
                    kind: literal.kind,
                    text: literal.text,
                }),
            ),
            cst::Expression::Identifier(identifier) => self.push(
                identifier.range,
                NodeKind::Identifier(expr::IdentifierExpression {
                    name: identifier.name,
                }),
            ),
            cst::Expression::Binary(binary) => {
                let left = self.expression(*binary.left);
                let right = self.expression(*binary.right);
                self.push(
                    binary.range,
                    NodeKind::Binary(expr::BinaryExpression {
                        left,
                        operator: binary.operator,
                        right,
                    }),
                )
            }
            cst::Expression::Unary(unary) => {
                let operand = self.expression(*unary.operand);
                self.push(
                    unary.range,
                    NodeKind::Unary(expr::UnaryExpression {
                        operator: unary.operator,
                        operand,
                    }),
                )
            }
            cst::Expression::AddressOf(pointer) => {
                let operand = self.expression(*pointer.operand);
                self.push(
                    pointer.range,
                    NodeKind::AddressOf(expr::PointerExpression { operand }),
                )
            }
            cst::Expression::Dereference(pointer) => {
                let operand = self.expression(*pointer.operand);
                self.push(
                    pointer.range,
                    NodeKind::Dereference(expr::PointerExpression { operand }),
                )
            }
            cst::Expression::Parenthesized(parenthesized) => {
                let inner = self.expression(*parenthesized.inner);
                self.push(
                    parenthesized.range,
                    NodeKind::Parenthesized(expr::ParenthesizedExpression { inner }),
                )
            }
            cst::Expression::Call(call) => {
                let generics = call
                    .generics
                    .into_iter()
                    .map(|ty| self.type_declaration(ty))
                    .collect();
                let arguments = call
                    .arguments
                    .into_iter()
                    .map(|argument| self.expression(argument))
                    .collect();
                self.push(
                    call.range,
                    NodeKind::Call(function::CallExpression {
                        name: call.name,
                        generics,
                        arguments,
                    }),
                )
            }
            cst::Expression::New(new) => {
                let ty = self.type_declaration(new.ty);
                let arguments = new
                    .arguments
                    .into_iter()
                    .map(|argument| self.expression(argument))
                    .collect();
                self.push(
                    new.range,
                    NodeKind::New(expr::NewExpression { ty, arguments }),
                )
            }
            cst::Expression::Member(member) => {
                let base = self.expression(*member.base);
                self.push(
                    member.range,
                    NodeKind::Member(expr::MemberExpression {
                        base,
                        property: member.property,
                    }),
                )
            }
            cst::Expression::Index(index) => {
                let base = self.expression(*index.base);
                let index_node = self.expression(*index.index);
                self.push(
                    index.range,
                    NodeKind::Index(expr::IndexExpression {
                        base,
                        index: index_node,
                    }),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pgsl_syntax::parse_document;

    use super::*;

    #[test]
    fn test_children_precede_parents() {
        let document =
            parse_document("function main() { let x: float = 1.0 + 2.0; }").unwrap();
        let tree = AstTree::build(document, Vec::new());

        assert_eq!(tree.root().index(), tree.len() - 1);
        let document = tree.document().unwrap();
        assert_eq!(document.declarations.len(), 1);
        assert!(document.builtins.is_empty());
        let function = document.declarations[0];
        assert!(matches!(tree.node(function).kind(), NodeKind::Function(_)));
        assert!(function < tree.root());
    }

    #[test]
    fn test_builtins_follow_declarations() {
        let document = parse_document("const a: float = 1.0;").unwrap();
        let builtins = parse_document("enum Mode { A = 1 }").unwrap().declarations;
        let tree = AstTree::build(document, builtins);
        let document = tree.document().unwrap();
        assert_eq!(document.builtins.len(), 1);
        assert!(document.declarations[0] < document.builtins[0]);
        assert!(matches!(
            tree.node(document.builtins[0]).kind(),
            NodeKind::Enum(_)
        ));
    }
}
