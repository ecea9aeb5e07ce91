pub mod ast;
pub mod visit;
