use log::trace;

use crate::ir::ast::Statement;
use crate::ir::visit::StatementVisitor;

/// Counts calls to primitive instructions. Calls to user-defined instructions are
/// not followed into their definitions and count as zero.
#[derive(Debug, Default)]
pub struct PrimitiveCallCounter {
    count: usize,
}

impl PrimitiveCallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl StatementVisitor for PrimitiveCallCounter {
    fn visit_statement(&mut self, statement: &Statement) {
        if statement.is_primitive_call() {
            self.count += 1;
        }
        self.super_visit_statement(statement);
    }
}

/// Number of primitive calls anywhere in `root`, `root` included.
pub fn count_primitive_calls(root: &Statement) -> usize {
    let mut counter = PrimitiveCallCounter::new();
    counter.visit_statement(root);
    trace!("{} primitive call(s) in {} statement", counter.count(), root.kind());
    counter.count()
}
