//! Removes negated conditions from IF_ELSE statements.
//!
//! `IF NEXT_IS_NOT_X THEN a ELSE b` becomes `IF NEXT_IS_X THEN b ELSE a`, at every
//! depth. IF and WHILE conditions are left alone even when negated.

use log::{debug, trace};

use crate::ir::ast::Statement;
use crate::ir::visit::StatementVisitorMut;

#[derive(Debug, Default)]
pub struct IfElseSimplifier {
    rewritten: usize,
}

impl IfElseSimplifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of IF_ELSE statements rewritten so far.
    pub fn rewritten(&self) -> usize {
        self.rewritten
    }
}

impl StatementVisitorMut for IfElseSimplifier {
    fn visit_statement(&mut self, statement: &mut Statement) {
        if let Statement::IfElse {
            condition,
            then_body,
            else_body,
        } = statement
        {
            if let Some(positive) = condition.positive() {
                trace!("IF_ELSE {} -> {} with branches swapped", condition, positive);
                *condition = positive;
                std::mem::swap(then_body, else_body);
                self.rewritten += 1;
            }
        }
        self.super_visit_statement(statement);
    }
}

/// Simplifies `root` and hands it back.
pub fn simplify(mut root: Statement) -> Statement {
    simplify_in_place(&mut root);
    root
}

pub fn simplify_in_place(root: &mut Statement) {
    simplify_with_stats(root);
}

/// Simplifies `root` in place and returns how many IF_ELSE statements were rewritten.
///
/// Recurses once per nesting level; input nested deeply enough to overflow the
/// stack aborts the process.
pub fn simplify_with_stats(root: &mut Statement) -> usize {
    let mut simplifier = IfElseSimplifier::new();
    simplifier.visit_statement(root);
    debug!("simplified {} IF_ELSE statement(s)", simplifier.rewritten());
    simplifier.rewritten()
}
