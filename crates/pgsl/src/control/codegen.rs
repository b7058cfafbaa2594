//! WGSL output of control flow. Every loop lowers to a WGSL `loop` with a
//! negated-condition `break`.

use alloc::{format, string::String, vec::Vec};

use super::{
    CaseSelector, DoWhileStatement, ForStatement, IfStatement, SwitchStatement, WhileStatement,
};
use crate::{
    ast::{NodeId, NodeKind},
    error::PgslResult,
    stmt::codegen::block_contents,
    transpile::Transpile,
};

/// Statements of a loop body, spliced into the `loop` block.
fn body(t: &mut Transpile<'_>, id: NodeId) -> PgslResult<String> {
    t.resolved(id)?;
    match t.tree().node(id).kind() {
        NodeKind::Block(block) => block_contents(t, block),
        _ => t.child(id),
    }
}

pub(crate) fn transpile_if(t: &mut Transpile<'_>, statement: &IfStatement) -> PgslResult<String> {
    let condition = t.child(statement.condition)?;
    let then_block = t.child(statement.then_block)?;
    let else_branch = match statement.else_branch {
        Some(branch) => format!("else {}", t.child(branch)?),
        None => String::new(),
    };
    Ok(format!("if({}){}{}", condition, then_block, else_branch))
}

pub(crate) fn transpile_switch(
    t: &mut Transpile<'_>,
    statement: &SwitchStatement,
) -> PgslResult<String> {
    let selector = t.child(statement.selector)?;
    let mut cases = String::new();
    for case in &statement.cases {
        let mut selectors = Vec::with_capacity(case.selectors.len());
        for case_selector in &case.selectors {
            selectors.push(match *case_selector {
                CaseSelector::Expression(expression) => t.child(expression)?,
                CaseSelector::Default(_) => String::from("default"),
            });
        }
        let head = match selectors.as_slice() {
            [only] if only == "default" => String::from("default"),
            _ => format!("case {}", selectors.join(",")),
        };
        cases.push_str(&format!("{}:{}", head, t.child(case.body)?));
    }
    Ok(format!("switch({}){{{}}}", selector, cases))
}

pub(crate) fn transpile_while(
    t: &mut Transpile<'_>,
    statement: &WhileStatement,
) -> PgslResult<String> {
    let condition = t.child(statement.condition)?;
    let body = body(t, statement.body)?;
    Ok(format!("loop{{if !({}){{break;}}{}}}", condition, body))
}

pub(crate) fn transpile_do_while(
    t: &mut Transpile<'_>,
    statement: &DoWhileStatement,
) -> PgslResult<String> {
    let body = body(t, statement.body)?;
    let condition = t.child(statement.condition)?;
    Ok(format!(
        "loop{{{} continuing{{break if !({});}}}}",
        body, condition
    ))
}

/// `{I loop{if !(C){break;}B continuing{U}}}`. Missing parts are left out.
pub(crate) fn transpile_for(t: &mut Transpile<'_>, statement: &ForStatement) -> PgslResult<String> {
    let init = match statement.init {
        Some(init) => format!("{} ", t.child(init)?),
        None => String::new(),
    };
    let condition = match statement.condition {
        Some(condition) => format!("if !({}){{break;}}", t.child(condition)?),
        None => String::new(),
    };
    let body = body(t, statement.body)?;
    let update = match statement.update {
        Some(update) => format!(" continuing{{{}}}", t.child(update)?),
        None => String::new(),
    };
    Ok(format!("{{{}loop{{{}{}{}}}}}", init, condition, body, update))
}

