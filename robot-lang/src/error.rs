use thiserror::Error;

use crate::ir::ast::Kind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatementError {
    #[error("Expected a BLOCK statement, found {kind}")]
    NotABlock { kind: Kind },

    #[error("Position {position} is out of range for a block of length {len}")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("Unknown condition: {name}")]
    UnknownCondition { name: String },
}

pub type Result<T> = std::result::Result<T, StatementError>;
