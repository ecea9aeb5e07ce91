use super::ast::Statement;

/// Read-only walk over a statement tree.
///
/// Override `visit_statement` to act on each node, and call `super_visit_statement`
/// from it to keep descending. The default implementation visits every node.
///
/// Recursion depth follows the nesting depth of the tree; a tree nested deeply
/// enough to exhaust the thread's stack aborts the process.
///
/// # Example
///
/// ```
/// use robot_lang::{Condition, Statement, StatementVisitor};
///
/// struct WhileCounter(usize);
///
/// impl StatementVisitor for WhileCounter {
///     fn visit_statement(&mut self, statement: &Statement) {
///         if let Statement::While { .. } = statement {
///             self.0 += 1;
///         }
///         self.super_visit_statement(statement);
///     }
/// }
///
/// let program = Statement::while_loop(
///     Condition::True,
///     Statement::while_loop(Condition::NextIsEmpty, Statement::call("move")),
/// );
/// let mut counter = WhileCounter(0);
/// counter.visit_statement(&program);
/// assert_eq!(counter.0, 2);
/// ```
pub trait StatementVisitor {
    fn visit_statement(&mut self, statement: &Statement) {
        self.super_visit_statement(statement)
    }

    /// Visits the children of `statement` in program order.
    fn super_visit_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Block(children) => {
                for child in children {
                    self.visit_statement(child);
                }
            }
            Statement::If { body, .. } | Statement::While { body, .. } => {
                self.visit_statement(body);
            }
            Statement::IfElse {
                then_body,
                else_body,
                ..
            } => {
                self.visit_statement(then_body);
                self.visit_statement(else_body);
            }
            Statement::Call(_) => {}
        }
    }
}

/// Mutable walk over a statement tree.
///
/// Same shape as [`StatementVisitor`]. Block children are visited in place, so a
/// visitor that only rewrites nodes keeps every block's order and length.
pub trait StatementVisitorMut {
    fn visit_statement(&mut self, statement: &mut Statement) {
        self.super_visit_statement(statement)
    }

    fn super_visit_statement(&mut self, statement: &mut Statement) {
        match statement {
            Statement::Block(children) => {
                for child in children.iter_mut() {
                    self.visit_statement(child);
                }
            }
            Statement::If { body, .. } | Statement::While { body, .. } => {
                self.visit_statement(body);
            }
            Statement::IfElse {
                then_body,
                else_body,
                ..
            } => {
                self.visit_statement(then_body);
                self.visit_statement(else_body);
            }
            Statement::Call(_) => {}
        }
    }
}
