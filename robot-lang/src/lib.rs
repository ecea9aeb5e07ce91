//! Statement trees for the robot control language, plus the passes that run over them.
//!
//! ```
//! use robot_lang::{Condition, Statement, count_primitive_calls, simplify};
//!
//! let program = Statement::if_else(
//!     Condition::NextIsNotWall,
//!     Statement::block(vec![Statement::call("move")]),
//!     Statement::block(vec![Statement::call("turnleft"), Statement::call("infect")]),
//! );
//! assert_eq!(count_primitive_calls(&program), 3);
//!
//! let simplified = simplify(program);
//! assert_eq!(count_primitive_calls(&simplified), 3);
//! ```

pub mod error;
pub mod ir;
pub mod passes;

pub use error::{Result, StatementError};
pub use ir::ast::{Condition, Kind, PRIMITIVE_INSTRUCTIONS, Statement, is_primitive};
pub use ir::visit::{StatementVisitor, StatementVisitorMut};
pub use passes::count::{PrimitiveCallCounter, count_primitive_calls};
pub use passes::simplify::{IfElseSimplifier, simplify, simplify_in_place, simplify_with_stats};
