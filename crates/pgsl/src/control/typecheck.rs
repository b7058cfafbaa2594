//! Type rules of control flow statements.

use alloc::format;

use pgsl_syntax::SourceRange;

use super::{
    CaseSelector, DoWhileStatement, ForStatement, IfStatement, SwitchStatement, WhileStatement,
};
use crate::{
    ast::{AnalysisContext, AstTree, FixedState, NodeId, Resolved},
    error::PgslResult,
    types::Type,
};

/// Which construct a body is nested in, for `break` and `continue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nesting {
    Loop,
    Switch,
}

/// Process `body` one loop or switch deeper.
fn process_nested(
    tree: &AstTree,
    body: NodeId,
    nesting: Nesting,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<()> {
    adjust_depth(ctx, nesting, true);
    let result = tree.process(body, ctx).map(|_| ());
    adjust_depth(ctx, nesting, false);
    result
}

fn adjust_depth(ctx: &mut AnalysisContext<'_>, nesting: Nesting, entering: bool) {
    let Some(frame) = ctx.frame_mut() else {
        return;
    };
    let depth = match nesting {
        Nesting::Loop => &mut frame.loop_depth,
        Nesting::Switch => &mut frame.switch_depth,
    };
    if entering {
        *depth += 1;
    } else {
        *depth = depth.saturating_sub(1);
    }
}

fn process_condition(
    tree: &AstTree,
    condition: NodeId,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<()> {
    let ty = tree.value(condition, ctx)?.ty.clone();
    if !matches!(ty, Type::Boolean | Type::Invalid) {
        ctx.push_incident(
            format!("Condition must be a boolean, found \"{}\".", ty),
            tree.node(condition).range(),
        );
    }
    Ok(())
}

pub(crate) fn process_break(range: SourceRange, ctx: &mut AnalysisContext<'_>) -> PgslResult<Resolved> {
    let inside = ctx
        .frame()
        .is_some_and(|frame| frame.loop_depth > 0 || frame.switch_depth > 0);
    if !inside {
        ctx.push_incident("\"break\" is only allowed inside a loop or switch.", range);
    }
    Ok(Resolved::void())
}

pub(crate) fn process_continue(
    range: SourceRange,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    if !ctx.frame().is_some_and(|frame| frame.loop_depth > 0) {
        ctx.push_incident("\"continue\" is only allowed inside a loop.", range);
    }
    Ok(Resolved::void())
}

pub(crate) fn process_if(
    tree: &AstTree,
    statement: &IfStatement,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    process_condition(tree, statement.condition, ctx)?;
    tree.process(statement.then_block, ctx)?;
    if let Some(branch) = statement.else_branch {
        tree.process(branch, ctx)?;
    }
    Ok(Resolved::void())
}

/// The selector is an integer scalar; case selectors are constants of a
/// type it unifies with, and exactly one case holds `default`.
pub(crate) fn process_switch(
    tree: &AstTree,
    range: SourceRange,
    statement: &SwitchStatement,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    let selector = tree.value(statement.selector, ctx)?.ty.clone();
    let integer = matches!(selector.numeric_kind(), Some(kind) if kind.is_integer());
    if !integer && !selector.is_invalid() {
        ctx.push_incident(
            format!("Switch selector must be an integer, found \"{}\".", selector),
            tree.node(statement.selector).range(),
        );
    }

    let mut defaults = 0;
    for case in &statement.cases {
        for case_selector in &case.selectors {
            let expression = match *case_selector {
                CaseSelector::Default(_) => {
                    defaults += 1;
                    continue;
                }
                CaseSelector::Expression(expression) => expression,
            };
            let value = tree.value(expression, ctx)?.clone();
            let expression_range = tree.node(expression).range();
            if value.fixed != FixedState::Constant {
                ctx.push_incident("Case selector must be constant.", expression_range);
            }
            if integer && value.ty.unify(&selector).is_none() {
                ctx.push_incident(
                    format!(
                        "Case selector of type \"{}\" does not match switch selector of type \"{}\".",
                        value.ty, selector
                    ),
                    expression_range,
                );
            }
        }
        process_nested(tree, case.body, Nesting::Switch, ctx)?;
    }

    if defaults != 1 {
        ctx.push_incident(
            "Switch statement requires exactly one \"default\" case.",
            range,
        );
    }
    Ok(Resolved::void())
}

pub(crate) fn process_while(
    tree: &AstTree,
    statement: &WhileStatement,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    process_condition(tree, statement.condition, ctx)?;
    process_nested(tree, statement.body, Nesting::Loop, ctx)?;
    Ok(Resolved::void())
}

pub(crate) fn process_do_while(
    tree: &AstTree,
    statement: &DoWhileStatement,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    process_nested(tree, statement.body, Nesting::Loop, ctx)?;
    process_condition(tree, statement.condition, ctx)?;
    Ok(Resolved::void())
}

/// The initializer is scoped to the loop.
pub(crate) fn process_for(
    tree: &AstTree,
    statement: &ForStatement,
    ctx: &mut AnalysisContext<'_>,
) -> PgslResult<Resolved> {
    ctx.symbols_mut().push_scope();
    if let Some(init) = statement.init {
        tree.process(init, ctx)?;
    }
    if let Some(condition) = statement.condition {
        process_condition(tree, condition, ctx)?;
    }
    if let Some(update) = statement.update {
        tree.process(update, ctx)?;
    }
    process_nested(tree, statement.body, Nesting::Loop, ctx)?;
    ctx.symbols_mut().pop_scope();
    Ok(Resolved::void())
}
