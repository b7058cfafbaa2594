//! Statement parser.

use alloc::{boxed::Box, string::ToString};

use nom::{
    branch::alt,
    combinator::{cut, map, opt},
    error::{Error, ErrorKind},
    multi::{many0, separated_list1},
    sequence::{delimited, preceded, terminated},
    IResult,
};

use super::{
    primitives::identifier,
    whitespace::{blank, keyword, symbol},
    Source,
};
use crate::cst::{
    AssignmentOperator, AssignmentStatement, BlockStatement, CallStatement, CaseSelector,
    DoWhileStatement, ElseBranch, Expression, ForStatement, IfStatement, IncrementOperator,
    IncrementStatement, LocalKeyword, ReturnStatement, Statement, SwitchCase, SwitchStatement,
    VariableStatement, WhileStatement,
};

/// Longest tokens first so `<<=` wins over `<` and `=` does not eat `==`.
const ASSIGNMENT_OPERATORS: &[(&str, AssignmentOperator)] = &[
    ("<<=", AssignmentOperator::ShiftLeft),
    (">>=", AssignmentOperator::ShiftRight),
    ("+=", AssignmentOperator::Add),
    ("-=", AssignmentOperator::Subtract),
    ("*=", AssignmentOperator::Multiply),
    ("/=", AssignmentOperator::Divide),
    ("%=", AssignmentOperator::Remainder),
    ("&=", AssignmentOperator::BitAnd),
    ("|=", AssignmentOperator::BitOr),
    ("^=", AssignmentOperator::BitXor),
    ("=", AssignmentOperator::Assign),
];

fn assignment_operator(input: &str) -> IResult<&str, AssignmentOperator> {
    let (input, _) = blank(input)?;
    for (token, operator) in ASSIGNMENT_OPERATORS {
        if let Some(rest) = input.strip_prefix(token) {
            if *operator == AssignmentOperator::Assign && rest.starts_with('=') {
                break;
            }
            return Ok((rest, *operator));
        }
    }
    Err(nom::Err::Error(Error::new(input, ErrorKind::Tag)))
}

impl<'a> Source<'a> {
    /// `{ statement* }`
    pub(crate) fn block(&self, input: &'a str) -> IResult<&'a str, BlockStatement> {
        let (input, _) = blank(input)?;
        let start = input;
        let (input, _) = symbol("{")(input)?;
        let (input, statements) = many0(|i: &'a str| self.statement(i))(input)?;
        let (input, _) = cut(symbol("}"))(input)?;
        Ok((
            input,
            BlockStatement {
                statements,
                range: self.range(start, input),
            },
        ))
    }

    pub(crate) fn statement(&self, input: &'a str) -> IResult<&'a str, Statement> {
        let (input, _) = blank(input)?;
        alt((
            map(|i: &'a str| self.block(i), Statement::Block),
            |i: &'a str| self.if_statement(i),
            |i: &'a str| self.switch_statement(i),
            |i: &'a str| self.while_statement(i),
            |i: &'a str| self.do_while_statement(i),
            |i: &'a str| self.for_statement(i),
            |i: &'a str| self.jump_statement(i),
            |i: &'a str| self.return_statement(i),
            map(
                terminated(|i: &'a str| self.variable_statement(i), cut(symbol(";"))),
                Statement::Variable,
            ),
            terminated(|i: &'a str| self.simple_statement(i), cut(symbol(";"))),
        ))(input)
    }

    /// `const|let|var name: Type (= value)?` without the trailing `;`.
    fn variable_statement(&self, input: &'a str) -> IResult<&'a str, VariableStatement> {
        let start = input;
        let (input, keyword) = alt((
            map(keyword("const"), |_| LocalKeyword::Const),
            map(keyword("let"), |_| LocalKeyword::Let),
            map(keyword("var"), |_| LocalKeyword::Var),
        ))(input)?;
        let (input, name) = cut(identifier)(input)?;
        let (input, _) = cut(symbol(":"))(input)?;
        let (input, ty) = cut(|i: &'a str| self.type_declaration(i))(input)?;
        let (input, initializer) = opt(preceded(
            symbol("="),
            cut(|i: &'a str| self.expression(i)),
        ))(input)?;
        Ok((
            input,
            VariableStatement {
                keyword,
                name: name.to_string(),
                ty,
                initializer,
                range: self.range(start, input),
            },
        ))
    }

    /// Increment, assignment or call, without the trailing `;`.
    fn simple_statement(&self, input: &'a str) -> IResult<&'a str, Statement> {
        let (input, _) = blank(input)?;
        let start = input;
        let (input, target) = self.unary(input)?;

        if let Ok((rest, _)) = symbol("++")(input) {
            return Ok((rest, self.increment(start, rest, target, IncrementOperator::Increment)));
        }
        if let Ok((rest, _)) = symbol("--")(input) {
            return Ok((rest, self.increment(start, rest, target, IncrementOperator::Decrement)));
        }
        if let Ok((rest, operator)) = assignment_operator(input) {
            let (rest, value) = cut(|i: &'a str| self.expression(i))(rest)?;
            return Ok((
                rest,
                Statement::Assignment(AssignmentStatement {
                    target,
                    operator,
                    value,
                    range: self.range(start, rest),
                }),
            ));
        }

        match target {
            Expression::Call(_) => Ok((
                input,
                Statement::Call(CallStatement {
                    call: target,
                    range: self.range(start, input),
                }),
            )),
            _ => Err(nom::Err::Error(Error::new(start, ErrorKind::Verify))),
        }
    }

    fn increment(
        &self,
        start: &'a str,
        end: &'a str,
        target: Expression,
        operator: IncrementOperator,
    ) -> Statement {
        Statement::Increment(IncrementStatement {
            target,
            operator,
            range: self.range(start, end),
        })
    }

    fn condition(&self, input: &'a str) -> IResult<&'a str, Expression> {
        delimited(
            cut(symbol("(")),
            cut(|i: &'a str| self.expression(i)),
            cut(symbol(")")),
        )(input)
    }

    fn if_statement(&self, input: &'a str) -> IResult<&'a str, Statement> {
        map(|i: &'a str| self.if_chain(i), Statement::If)(input)
    }

    fn if_chain(&self, input: &'a str) -> IResult<&'a str, IfStatement> {
        let (input, _) = blank(input)?;
        let start = input;
        let (input, _) = keyword("if")(input)?;
        let (input, condition) = self.condition(input)?;
        let (input, then_block) = cut(|i: &'a str| self.block(i))(input)?;
        let (input, else_branch) = opt(preceded(
            keyword("else"),
            cut(alt((
                map(|i: &'a str| self.if_chain(i), |chain| {
                    ElseBranch::If(Box::new(chain))
                }),
                map(|i: &'a str| self.block(i), ElseBranch::Block),
            ))),
        ))(input)?;
        Ok((
            input,
            IfStatement {
                condition,
                then_block,
                else_branch,
                range: self.range(start, input),
            },
        ))
    }

    fn switch_statement(&self, input: &'a str) -> IResult<&'a str, Statement> {
        let start = input;
        let (input, _) = keyword("switch")(input)?;
        let (input, selector) = self.condition(input)?;
        let (input, _) = cut(symbol("{"))(input)?;
        let (input, cases) = many0(|i: &'a str| self.switch_case(i))(input)?;
        let (input, _) = cut(symbol("}"))(input)?;
        Ok((
            input,
            Statement::Switch(SwitchStatement {
                selector,
                cases,
                range: self.range(start, input),
            }),
        ))
    }

    fn switch_case(&self, input: &'a str) -> IResult<&'a str, SwitchCase> {
        let (input, _) = blank(input)?;
        let start = input;
        let (input, selectors) = alt((
            preceded(
                keyword("case"),
                cut(separated_list1(symbol(","), |i: &'a str| {
                    self.case_selector(i)
                })),
            ),
            map(
                |i: &'a str| self.default_selector(i),
                |selector| alloc::vec![selector],
            ),
        ))(input)?;
        let (input, _) = opt(symbol(":"))(input)?;
        let (input, body) = cut(|i: &'a str| self.block(i))(input)?;
        Ok((
            input,
            SwitchCase {
                selectors,
                body,
                range: self.range(start, input),
            },
        ))
    }

    fn case_selector(&self, input: &'a str) -> IResult<&'a str, CaseSelector> {
        alt((
            |i: &'a str| self.default_selector(i),
            map(|i: &'a str| self.expression(i), CaseSelector::Expression),
        ))(input)
    }

    fn default_selector(&self, input: &'a str) -> IResult<&'a str, CaseSelector> {
        let (input, _) = blank(input)?;
        let start = input;
        let (input, _) = keyword("default")(input)?;
        Ok((input, CaseSelector::Default(self.range(start, input))))
    }

    fn while_statement(&self, input: &'a str) -> IResult<&'a str, Statement> {
        let start = input;
        let (input, _) = keyword("while")(input)?;
        let (input, condition) = self.condition(input)?;
        let (input, body) = cut(|i: &'a str| self.block(i))(input)?;
        Ok((
            input,
            Statement::While(WhileStatement {
                condition,
                body,
                range: self.range(start, input),
            }),
        ))
    }

    fn do_while_statement(&self, input: &'a str) -> IResult<&'a str, Statement> {
        let start = input;
        let (input, _) = keyword("do")(input)?;
        let (input, body) = cut(|i: &'a str| self.block(i))(input)?;
        let (input, _) = cut(keyword("while"))(input)?;
        let (input, condition) = self.condition(input)?;
        let (input, _) = cut(symbol(";"))(input)?;
        Ok((
            input,
            Statement::DoWhile(DoWhileStatement {
                body,
                condition,
                range: self.range(start, input),
            }),
        ))
    }

    /// `for (var i: integer = 0; i < 4; i++) { ... }`
    fn for_statement(&self, input: &'a str) -> IResult<&'a str, Statement> {
        let start = input;
        let (input, _) = keyword("for")(input)?;
        let (input, _) = cut(symbol("("))(input)?;
        let (input, init) = opt(|i: &'a str| self.variable_statement(i))(input)?;
        let (input, _) = cut(symbol(";"))(input)?;
        let (input, condition) = opt(|i: &'a str| self.expression(i))(input)?;
        let (input, _) = cut(symbol(";"))(input)?;
        let (input, update) = opt(|i: &'a str| self.simple_statement(i))(input)?;
        let (input, _) = cut(symbol(")"))(input)?;
        let (input, body) = cut(|i: &'a str| self.block(i))(input)?;
        Ok((
            input,
            Statement::For(ForStatement {
                init,
                condition,
                update: update.map(Box::new),
                body,
                range: self.range(start, input),
            }),
        ))
    }

    /// `break;`, `continue;` and `discard;`
    fn jump_statement(&self, input: &'a str) -> IResult<&'a str, Statement> {
        let start = input;
        let (input, word) = alt((keyword("break"), keyword("continue"), keyword("discard")))(input)?;
        let (input, _) = cut(symbol(";"))(input)?;
        let range = self.range(start, input);
        let statement = match word {
            "break" => Statement::Break(range),
            "continue" => Statement::Continue(range),
            _ => Statement::Discard(range),
        };
        Ok((input, statement))
    }

    fn return_statement(&self, input: &'a str) -> IResult<&'a str, Statement> {
        let start = input;
        let (input, _) = keyword("return")(input)?;
        let (input, value) = opt(|i: &'a str| self.expression(i))(input)?;
        let (input, _) = cut(symbol(";"))(input)?;
        Ok((
            input,
            Statement::Return(ReturnStatement {
                value,
                range: self.range(start, input),
            }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Statement {
        let (rest, statement) = Source::new(source).statement(source).unwrap();
        assert_eq!(rest.trim(), "", "unparsed input");
        statement
    }

    #[test]
    fn test_variable_statement() {
        match parse("let v: Vector3<float> = new Vector3(1.0, 2.0, 3.0);") {
            Statement::Variable(variable) => {
                assert_eq!(variable.keyword, LocalKeyword::Let);
                assert_eq!(variable.name, "v");
                assert_eq!(variable.ty.name, "Vector3");
                assert!(variable.initializer.is_some());
            }
            other => panic!("expected variable, got {:?}", other),
        }
    }

    #[test]
    fn test_assignment_operators() {
        match parse("total += 2;") {
            Statement::Assignment(assignment) => {
                assert_eq!(assignment.operator, AssignmentOperator::Add)
            }
            other => panic!("expected assignment, got {:?}", other),
        }
        match parse("bits <<= 1u;") {
            Statement::Assignment(assignment) => {
                assert_eq!(assignment.operator, AssignmentOperator::ShiftLeft)
            }
            other => panic!("expected assignment, got {:?}", other),
        }
        assert!(matches!(parse("*target = 1;"), Statement::Assignment(_)));
    }

    #[test]
    fn test_increment_and_call() {
        assert!(matches!(parse("i++;"), Statement::Increment(_)));
        assert!(matches!(parse("storageBarrier();"), Statement::Call(_)));
    }

    #[test]
    fn test_expression_statement_must_be_call() {
        let source = "a + b;";
        assert!(Source::new(source).statement(source).is_err());
    }

    #[test]
    fn test_if_else_chain() {
        match parse("if (a) { } else if (b) { } else { }") {
            Statement::If(statement) => match statement.else_branch {
                Some(ElseBranch::If(nested)) => {
                    assert!(matches!(nested.else_branch, Some(ElseBranch::Block(_))))
                }
                other => panic!("expected else-if, got {:?}", other),
            },
            other => panic!("expected if, got {:?}", other),
        }
    }

    #[test]
    fn test_switch() {
        match parse("switch (x) { case 1, 2: { } default: { } }") {
            Statement::Switch(switch) => {
                assert_eq!(switch.cases.len(), 2);
                assert_eq!(switch.cases[0].selectors.len(), 2);
                assert!(matches!(
                    switch.cases[1].selectors[0],
                    CaseSelector::Default(_)
                ));
            }
            other => panic!("expected switch, got {:?}", other),
        }
    }

    #[test]
    fn test_loops() {
        assert!(matches!(parse("while (a) { break; }"), Statement::While(_)));
        assert!(matches!(parse("do { continue; } while (a);"), Statement::DoWhile(_)));
        match parse("for (var i: integer = 0; i < 4; i++) { }") {
            Statement::For(statement) => {
                assert!(statement.init.is_some());
                assert!(statement.condition.is_some());
                assert!(matches!(
                    statement.update.as_deref(),
                    Some(Statement::Increment(_))
                ));
            }
            other => panic!("expected for, got {:?}", other),
        }
        match parse("for (;;) { discard; }") {
            Statement::For(statement) => {
                assert!(statement.init.is_none());
                assert!(statement.condition.is_none());
                assert!(statement.update.is_none());
            }
            other => panic!("expected for, got {:?}", other),
        }
    }

    #[test]
    fn test_return() {
        assert!(matches!(
            parse("return;"),
            Statement::Return(ReturnStatement { value: None, .. })
        ));
        assert!(matches!(
            parse("return a * 2.0;"),
            Statement::Return(ReturnStatement { value: Some(_), .. })
        ));
    }
}
