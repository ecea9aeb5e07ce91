use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StatementError};

/// Built-in robot actions. Any other call label names a user-defined instruction.
pub const PRIMITIVE_INSTRUCTIONS: [&str; 5] = ["move", "turnleft", "turnright", "infect", "skip"];

pub fn is_primitive(label: &str) -> bool {
    PRIMITIVE_INSTRUCTIONS.contains(&label)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Children run in order.
    Block(Vec<Statement>),
    /// IF condition THEN ... END IF
    If {
        condition: Condition,
        body: Box<Statement>,
    },
    /// IF condition THEN ... ELSE ... END IF
    IfElse {
        condition: Condition,
        then_body: Box<Statement>,
        else_body: Box<Statement>,
    },
    /// WHILE condition DO ... END WHILE
    While {
        condition: Condition,
        body: Box<Statement>,
    },
    /// move, turnleft, or a user-defined instruction
    Call(String),
}

/// The empty block, used as the placeholder left behind by `std::mem::take`.
impl Default for Statement {
    fn default() -> Self {
        Statement::Block(Vec::new())
    }
}

impl Statement {
    pub fn block(children: Vec<Statement>) -> Self {
        Statement::Block(children)
    }

    pub fn if_then(condition: Condition, body: Statement) -> Self {
        Statement::If {
            condition,
            body: Box::new(body),
        }
    }

    pub fn if_else(condition: Condition, then_body: Statement, else_body: Statement) -> Self {
        Statement::IfElse {
            condition,
            then_body: Box::new(then_body),
            else_body: Box::new(else_body),
        }
    }

    pub fn while_loop(condition: Condition, body: Statement) -> Self {
        Statement::While {
            condition,
            body: Box::new(body),
        }
    }

    pub fn call(label: impl Into<String>) -> Self {
        Statement::Call(label.into())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Statement::Block(_) => Kind::Block,
            Statement::If { .. } => Kind::If,
            Statement::IfElse { .. } => Kind::IfElse,
            Statement::While { .. } => Kind::While,
            Statement::Call(_) => Kind::Call,
        }
    }

    /// True for a `Call` whose label is one of [`PRIMITIVE_INSTRUCTIONS`].
    pub fn is_primitive_call(&self) -> bool {
        matches!(self, Statement::Call(label) if is_primitive(label))
    }

    pub fn block_len(&self) -> Result<usize> {
        Ok(self.children_of_block()?.len())
    }

    /// Removes and returns the child at `position`, shifting later children left.
    pub fn remove_from_block(&mut self, position: usize) -> Result<Statement> {
        let children = self.children_of_block_mut()?;
        if position >= children.len() {
            return Err(StatementError::PositionOutOfRange {
                position,
                len: children.len(),
            });
        }
        Ok(children.remove(position))
    }

    /// Inserts `statement` at `position`; `position == len` appends.
    pub fn add_to_block(&mut self, position: usize, statement: Statement) -> Result<()> {
        let children = self.children_of_block_mut()?;
        if position > children.len() {
            return Err(StatementError::PositionOutOfRange {
                position,
                len: children.len(),
            });
        }
        children.insert(position, statement);
        Ok(())
    }

    fn children_of_block(&self) -> Result<&Vec<Statement>> {
        match self {
            Statement::Block(children) => Ok(children),
            other => Err(StatementError::NotABlock { kind: other.kind() }),
        }
    }

    fn children_of_block_mut(&mut self) -> Result<&mut Vec<Statement>> {
        match self {
            Statement::Block(children) => Ok(children),
            other => Err(StatementError::NotABlock { kind: other.kind() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Block,
    If,
    IfElse,
    While,
    Call,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Block => "BLOCK",
            Kind::If => "IF",
            Kind::IfElse => "IF_ELSE",
            Kind::While => "WHILE",
            Kind::Call => "CALL",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    NextIsEmpty,
    NextIsNotEmpty,
    NextIsWall,
    NextIsNotWall,
    NextIsFriend,
    NextIsNotFriend,
    NextIsEnemy,
    NextIsNotEnemy,
    Random,
    True,
}

impl Condition {
    pub const ALL: [Condition; 10] = [
        Condition::NextIsEmpty,
        Condition::NextIsNotEmpty,
        Condition::NextIsWall,
        Condition::NextIsNotWall,
        Condition::NextIsFriend,
        Condition::NextIsNotFriend,
        Condition::NextIsEnemy,
        Condition::NextIsNotEnemy,
        Condition::Random,
        Condition::True,
    ];

    /// The positive form of a negated condition, `None` for everything else.
    pub fn positive(self) -> Option<Condition> {
        match self {
            Condition::NextIsNotEmpty => Some(Condition::NextIsEmpty),
            Condition::NextIsNotWall => Some(Condition::NextIsWall),
            Condition::NextIsNotFriend => Some(Condition::NextIsFriend),
            Condition::NextIsNotEnemy => Some(Condition::NextIsEnemy),
            Condition::NextIsEmpty
            | Condition::NextIsWall
            | Condition::NextIsFriend
            | Condition::NextIsEnemy
            | Condition::Random
            | Condition::True => None,
        }
    }

    pub fn is_negated(self) -> bool {
        self.positive().is_some()
    }

    pub fn name(self) -> &'static str {
        match self {
            Condition::NextIsEmpty => "NEXT_IS_EMPTY",
            Condition::NextIsNotEmpty => "NEXT_IS_NOT_EMPTY",
            Condition::NextIsWall => "NEXT_IS_WALL",
            Condition::NextIsNotWall => "NEXT_IS_NOT_WALL",
            Condition::NextIsFriend => "NEXT_IS_FRIEND",
            Condition::NextIsNotFriend => "NEXT_IS_NOT_FRIEND",
            Condition::NextIsEnemy => "NEXT_IS_ENEMY",
            Condition::NextIsNotEnemy => "NEXT_IS_NOT_ENEMY",
            Condition::Random => "RANDOM",
            Condition::True => "TRUE",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Condition {
    type Err = StatementError;

    fn from_str(name: &str) -> Result<Self> {
        Condition::ALL
            .into_iter()
            .find(|condition| condition.name() == name)
            .ok_or_else(|| StatementError::UnknownCondition {
                name: name.to_string(),
            })
    }
}
