//! Settlement module containing balance aggregation and debt simplification

pub mod balance;
pub mod engine;
pub mod simplify;

pub use balance::*;
pub use engine::*;
pub use simplify::*;
