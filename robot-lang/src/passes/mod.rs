pub mod count;
pub mod simplify;
